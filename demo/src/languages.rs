//! Selector setup for the demo.

use std::path::Path;
use std::sync::{Arc, Mutex};

use language_selector::{
    Corner, LanguageDescriptor, LanguageSelector, SelectorConfig, SelectorOptions,
};

/// Languages shown when no options file is given.
pub fn default_languages() -> Vec<LanguageDescriptor> {
    vec![
        LanguageDescriptor::new("de", "Deutsch"),
        LanguageDescriptor::new("en", "English"),
        LanguageDescriptor::new("eo", "Esperanto"),
        LanguageDescriptor::new("fi", "Suomi"),
        LanguageDescriptor::new("fr", "Français"),
        LanguageDescriptor::new("ko", "한국어"),
        LanguageDescriptor::new("ru", "Русский"),
    ]
}

/// One selector per layout variant: collapsible rows and columns on the left,
/// an always-open column on the right.
pub fn default_options() -> Vec<SelectorConfig> {
    vec![
        SelectorConfig::new(default_languages())
            .title("Language")
            .vertical(false)
            .position(Corner::TopLeft),
        SelectorConfig::new(default_languages()).position(Corner::TopLeft),
        SelectorConfig::new(default_languages())
            .title("Language")
            .button(false)
            .position(Corner::TopRight),
    ]
}

/// Read a JSON array of selector options.
pub fn load_options(path: &Path) -> Result<Vec<SelectorConfig>, Box<dyn std::error::Error>> {
    let text = std::fs::read_to_string(path)?;
    let options: Vec<SelectorOptions> = serde_json::from_str(&text)?;
    log::info!("loaded {} selector(s) from {}", options.len(), path.display());
    Ok(options.into_iter().map(SelectorConfig::from).collect())
}

/// Build the selectors, routing every selection into `status`.
///
/// `initial` overrides each config's initial language.
pub fn build_selectors(
    configs: Vec<SelectorConfig>,
    initial: Option<&str>,
    status: &Arc<Mutex<String>>,
) -> Result<Vec<Arc<LanguageSelector>>, language_selector::SelectorError> {
    configs
        .into_iter()
        .map(|config| {
            let status = Arc::clone(status);
            let config = match initial {
                Some(lang) => config.initial_language(lang),
                None => config,
            };
            let config = config.callback(move |lang| {
                log::info!("language changed to {lang}");
                if let Ok(mut guard) = status.lock() {
                    *guard = format!("Switched to: '{lang}'");
                }
            });
            LanguageSelector::new(config).map(Arc::new)
        })
        .collect()
}
