//! Tests for loading selector options from JSON.

use std::sync::{Arc, Mutex};

use language_selector::{
    Corner, LanguageDescriptor, LanguageSelector, SelectorConfig, SelectorOptions,
};

#[test]
fn test_full_options_parse() {
    let json = r#"{
        "languages": [
            {"id": "de", "displayText": "Deutsch", "image": "flags/de.svg"},
            {"id": "eo"}
        ],
        "title": "Language",
        "position": "bottomleft",
        "vertical": false,
        "initialLanguage": "eo",
        "button": false,
        "hideSelected": true
    }"#;

    let options: SelectorOptions = serde_json::from_str(json).unwrap();

    assert_eq!(
        options.languages,
        vec![
            LanguageDescriptor::new("de", "Deutsch").with_image("flags/de.svg"),
            LanguageDescriptor::id_only("eo"),
        ]
    );
    assert_eq!(options.title.as_deref(), Some("Language"));
    assert_eq!(options.position, Corner::BottomLeft);
    assert!(!options.vertical);
    assert_eq!(options.initial_language.as_deref(), Some("eo"));
    assert!(!options.button);
    assert!(options.hide_selected);
}

#[test]
fn test_missing_options_use_defaults() {
    let options: SelectorOptions = serde_json::from_str(r#"{"languages": [{"id": "en"}]}"#).unwrap();
    let config = SelectorConfig::from(options);

    assert!(config.vertical);
    assert!(config.button);
    assert!(!config.hide_selected);
    assert_eq!(config.position, Corner::TopRight);
    assert!(config.title.is_none());
    assert!(config.initial_language.is_none());
    assert!(config.callback.is_none());
}

#[test]
fn test_unknown_position_is_an_error() {
    let err = serde_json::from_str::<SelectorOptions>(r#"{"position": "center"}"#).unwrap_err();
    assert!(err.to_string().contains("unknown corner 'center'"));
}

#[test]
fn test_missing_languages_fail_at_construction() {
    let options: SelectorOptions = serde_json::from_str("{}").unwrap();
    assert!(LanguageSelector::new(options.into()).is_err());
}

#[test]
fn test_options_with_callback() {
    let calls = Arc::new(Mutex::new(Vec::new()));
    let options: SelectorOptions =
        serde_json::from_str(r#"{"languages": [{"id": "en"}, {"id": "fi"}], "initialLanguage": "fi"}"#)
            .unwrap();

    let c = Arc::clone(&calls);
    let selector =
        LanguageSelector::new(options.with_callback(move |lang| c.lock().unwrap().push(lang.to_string())))
            .unwrap();

    assert_eq!(selector.selected().as_deref(), Some("fi"));
    assert_eq!(*calls.lock().unwrap(), vec!["fi".to_string()]);
}
