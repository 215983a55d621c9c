//! Text utilities for deriving identifiers from labels.

/// Derive a machine name from a human-readable label.
///
/// Keeps alphanumeric characters, lower-cased with Unicode case mapping, and
/// collapses every run of other characters into a single `_`. Leading and
/// trailing separators are dropped, so `"  E-mail address: "` becomes
/// `"e_mail_address"`.
pub fn machine_name(label: &str) -> String {
    let mut result = String::with_capacity(label.len());
    let mut pending_sep = false;

    for c in label.chars() {
        if c.is_alphanumeric() {
            if pending_sep && !result.is_empty() {
                result.push('_');
            }
            pending_sep = false;
            result.extend(c.to_lowercase());
        } else {
            pending_sep = true;
        }
    }

    result
}

/// Count the characters in `value` as used by length rules.
pub fn char_len(value: &str) -> usize {
    value.chars().count()
}
