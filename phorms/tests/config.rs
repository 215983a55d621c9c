//! Tests for field configuration.

use phorms::config::{FieldConfig, REQUIRED_MESSAGE};
use phorms::prelude::*;

#[test]
fn test_label_only_uses_defaults() {
    let config = FieldConfig::from_json(r#"{"label": "Test field"}"#).unwrap();
    assert_eq!(config, FieldConfig::new("Test field"));

    let field = Field::from_config(&config).unwrap();
    assert_eq!(field.max_length(), 255);
    assert_eq!(field.size(), 25);
    assert_eq!(field.error_display(), ErrorDisplay::Below);
    assert!(field.rules().is_empty());
}

#[test]
fn test_full_config() {
    let config = FieldConfig::from_json(
        r#"{
            "label": "Code",
            "help_text": "Four letters & digits.",
            "name": "promo",
            "max_length": 4,
            "min_length": 4,
            "required": true,
            "pattern": "^[A-Z0-9]+$",
            "help_class": null,
            "error_display": "inline"
        }"#,
    )
    .unwrap();

    let mut field = config.build().unwrap();
    assert_eq!(field.name(), "promo");
    assert_eq!(field.help_text(), "<p>Four letters &amp; digits.</p>");
    assert_eq!(field.error_display(), ErrorDisplay::Inline);
    assert_eq!(field.rules().len(), 3);

    assert!(!field.is_valid());
    assert_eq!(field.errors(), [REQUIRED_MESSAGE]);

    field.set_value("AB12");
    assert!(field.is_valid());

    field.set_value("ab");
    assert!(!field.is_valid());
    assert_eq!(field.errors().len(), 2);
}

#[test]
fn test_config_builder_methods() {
    let config = FieldConfig::new("Test field")
        .help_text("Enter your test value.")
        .max_length(10)
        .min_length(2)
        .required()
        .pattern("x")
        .error_display(ErrorDisplay::None);

    assert_eq!(config.max_length, 10);
    assert_eq!(config.min_length, Some(2));
    assert!(config.required);
    assert_eq!(config.pattern.as_deref(), Some("x"));
    assert_eq!(config.error_display, ErrorDisplay::None);
}

#[test]
fn test_config_extends_with_rules() {
    let mut field = FieldConfig::new("Test field")
        .to_builder()
        .contains("!", "needs excitement")
        .build()
        .unwrap();
    field.set_value("hello");
    assert!(!field.is_valid());
    assert_eq!(field.errors(), ["needs excitement"]);
}

#[test]
fn test_invalid_json() {
    let err = FieldConfig::from_json("{label: ").unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
    assert!(err.to_string().starts_with("Failed to parse field config"));
}

#[test]
fn test_missing_label_fails_build() {
    let config = FieldConfig::from_json("{}").unwrap();
    assert_eq!(config.build().unwrap_err(), FieldBuildError::EmptyLabel);
}

#[test]
fn test_invalid_pattern_in_config() {
    let config = FieldConfig::new("Test field").pattern("(");
    let err: ConfigError = config.build().unwrap_err().into();
    assert!(matches!(err, ConfigError::Build(FieldBuildError::InvalidPattern { .. })));
}

#[test]
fn test_unknown_key_rejected() {
    let err = FieldConfig::from_json(r#"{"label": "X", "max_lenght": 3}"#).unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
    assert!(err.to_string().contains("max_lenght"));
}

#[test]
fn test_config_rendering_setters() {
    let config = FieldConfig::new("???")
        .name("question")
        .size(40)
        .help_text("Ask away.")
        .help_class("hint");
    assert_eq!(config.name.as_deref(), Some("question"));
    assert_eq!(config.size, 40);

    let field = config.build().unwrap();
    assert_eq!(field.name(), "question");
    assert_eq!(field.size(), 40);
    assert_eq!(field.help_text(), r#"<p class="hint">Ask away.</p>"#);

    let bare = config.no_help_class().build().unwrap();
    assert_eq!(bare.help_text(), "<p>Ask away.</p>");
}
