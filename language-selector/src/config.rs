//! Selector configuration.

use std::sync::Arc;

use mapdom::Corner;
use serde::{Deserialize, Deserializer};

/// Host callback, invoked with the selected language id.
///
/// Panics raised by the callback are not caught; they propagate to whoever
/// triggered the selection.
pub type Callback = Arc<dyn Fn(&str) + Send + Sync>;

/// One selectable language.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LanguageDescriptor {
    /// Language identifier, e.g. `en` or `de`.
    pub id: String,
    /// Text shown for the language. Falls back to `id`.
    #[serde(default)]
    pub display_text: Option<String>,
    /// Optional icon (flag) reference.
    #[serde(default)]
    pub image: Option<String>,
}

impl LanguageDescriptor {
    /// A language with display text.
    pub fn new(id: impl Into<String>, display_text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            display_text: Some(display_text.into()),
            image: None,
        }
    }

    /// A language shown by its id.
    pub fn id_only(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            display_text: None,
            image: None,
        }
    }

    /// Attach an icon.
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    /// Accessible label: the display text, or the id if there is none.
    pub fn label(&self) -> &str {
        self.display_text.as_deref().unwrap_or(&self.id)
    }
}

/// Configuration for a [`LanguageSelector`](crate::LanguageSelector).
///
/// Read once at construction.
///
/// # Example
///
/// ```ignore
/// let config = SelectorConfig::new(vec![
///     LanguageDescriptor::new("en", "English"),
///     LanguageDescriptor::new("de", "Deutsch"),
/// ])
/// .callback(|lang| println!("switched to {lang}"))
/// .initial_language("en");
/// ```
#[derive(Clone)]
pub struct SelectorConfig {
    pub languages: Vec<LanguageDescriptor>,
    pub callback: Option<Callback>,
    pub title: Option<String>,
    pub position: Corner,
    /// Stack buttons vertically (true) or lay them out in a row (false).
    pub vertical: bool,
    pub initial_language: Option<String>,
    /// Collapsible mode: start as a compact trigger that expands on activation.
    pub button: bool,
    /// Hide the selected language's button.
    pub hide_selected: bool,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            languages: Vec::new(),
            callback: None,
            title: None,
            position: Corner::TopRight,
            vertical: true,
            initial_language: None,
            button: true,
            hide_selected: false,
        }
    }
}

impl SelectorConfig {
    /// Create a config with the given languages and default options.
    pub fn new(languages: impl IntoIterator<Item = LanguageDescriptor>) -> Self {
        Self {
            languages: languages.into_iter().collect(),
            ..Default::default()
        }
    }

    pub fn callback(mut self, callback: impl Fn(&str) + Send + Sync + 'static) -> Self {
        self.callback = Some(Arc::new(callback));
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn position(mut self, position: Corner) -> Self {
        self.position = position;
        self
    }

    pub fn vertical(mut self, vertical: bool) -> Self {
        self.vertical = vertical;
        self
    }

    pub fn initial_language(mut self, id: impl Into<String>) -> Self {
        self.initial_language = Some(id.into());
        self
    }

    pub fn button(mut self, button: bool) -> Self {
        self.button = button;
        self
    }

    pub fn hide_selected(mut self, hide: bool) -> Self {
        self.hide_selected = hide;
        self
    }
}

impl std::fmt::Debug for SelectorConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SelectorConfig")
            .field("languages", &self.languages)
            .field("callback", &self.callback.as_ref().map(|_| "<fn>"))
            .field("title", &self.title)
            .field("position", &self.position)
            .field("vertical", &self.vertical)
            .field("initial_language", &self.initial_language)
            .field("button", &self.button)
            .field("hide_selected", &self.hide_selected)
            .finish()
    }
}

/// Every option except the callback, in a form that can be loaded from a file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectorOptions {
    #[serde(default)]
    pub languages: Vec<LanguageDescriptor>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "deserialize_corner")]
    pub position: Corner,
    #[serde(default = "default_true")]
    pub vertical: bool,
    #[serde(default)]
    pub initial_language: Option<String>,
    #[serde(default = "default_true")]
    pub button: bool,
    #[serde(default)]
    pub hide_selected: bool,
}

impl SelectorOptions {
    /// Turn the options into a config, attaching a callback.
    pub fn with_callback(self, callback: impl Fn(&str) + Send + Sync + 'static) -> SelectorConfig {
        SelectorConfig::from(self).callback(callback)
    }
}

impl From<SelectorOptions> for SelectorConfig {
    fn from(options: SelectorOptions) -> Self {
        Self {
            languages: options.languages,
            callback: None,
            title: options.title,
            position: options.position,
            vertical: options.vertical,
            initial_language: options.initial_language,
            button: options.button,
            hide_selected: options.hide_selected,
        }
    }
}

fn default_true() -> bool {
    true
}

fn deserialize_corner<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Corner, D::Error> {
    let s = String::deserialize(deserializer)?;
    s.parse().map_err(serde::de::Error::custom)
}
