//! HTML generation utilities.

/// Escapes a string for use in HTML text content and attribute values.
///
/// `&` is replaced first so entities produced by the later replacements are
/// not escaped a second time.
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#039;")
}

/// Renders attributes as ` name="value"` pairs with escaped values.
fn attributes(attrs: &[(&str, &str)]) -> String {
    attrs
        .iter()
        .map(|(name, value)| format!(r#" {}="{}""#, name, escape_html(value)))
        .collect::<Vec<_>>()
        .join("")
}

/// Renders `<name attrs>inner</name>`. `inner` is inserted as-is and must
/// already be escaped markup.
pub fn element(name: &str, attrs: &[(&str, &str)], inner: &str) -> String {
    format!("<{name}{}>{inner}</{name}>", attributes(attrs))
}

/// Renders a void element such as `<input ... />`.
pub fn void_element(name: &str, attrs: &[(&str, &str)]) -> String {
    format!("<{name}{} />", attributes(attrs))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("Enter & win."), "Enter &amp; win.");
        assert_eq!(escape_html("<b>"), "&lt;b&gt;");
        assert_eq!(escape_html(r#"say "hi" it's"#), "say &quot;hi&quot; it&#039;s");
    }

    #[test]
    fn test_escape_html_existing_entity() {
        assert_eq!(escape_html("&amp;"), "&amp;amp;");
    }

    #[test]
    fn test_element() {
        assert_eq!(
            element("p", &[("class", "phorm_help")], "Hi"),
            r#"<p class="phorm_help">Hi</p>"#
        );
        assert_eq!(element("li", &[], "x"), "<li>x</li>");
        assert_eq!(
            void_element("input", &[("value", "a\"b")]),
            r#"<input value="a&quot;b" />"#
        );
    }
}
