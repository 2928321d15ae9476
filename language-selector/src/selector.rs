//! The language selector control.

mod events;
mod render;
mod state;

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};

use mapdom::{Corner, Element, Listeners, MapControl};

use crate::button::LanguageButton;
use crate::config::{Callback, SelectorConfig};
use crate::error::SelectorError;

pub use render::{BUTTON_CLASS, BUTTON_DISABLED_CLASS};
use state::SelectorInner;

/// Unique identifier for a selector instance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SelectorId(usize);

impl SelectorId {
    fn new() -> Self {
        static COUNTER: AtomicUsize = AtomicUsize::new(0);
        Self(COUNTER.fetch_add(1, Ordering::SeqCst))
    }
}

impl std::fmt::Display for SelectorId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "languageselector-control-{}", self.0)
    }
}

/// Options that stay fixed after construction.
#[derive(Debug, Clone)]
struct Settings {
    title: Option<String>,
    position: Corner,
    vertical: bool,
    collapsible: bool,
    hide_selected: bool,
}

/// A map control that lets users pick a language.
///
/// One button is rendered per configured language. Activating a button (click,
/// Enter or Space) selects it, collapses the control when it is collapsible,
/// and reports the language id to the configured callback.
///
/// Clones share state; attach the control to a map as an
/// `Arc<dyn MapControl>`.
///
/// # Example
///
/// ```ignore
/// let selector = Arc::new(LanguageSelector::new(
///     SelectorConfig::new(vec![
///         LanguageDescriptor::new("en", "English"),
///         LanguageDescriptor::new("de", "Deutsch"),
///     ])
///     .callback(|lang| log::info!("language: {lang}")),
/// )?);
/// map.add_control(selector.clone());
/// selector.set_language("de");
/// ```
#[derive(Clone)]
pub struct LanguageSelector {
    id: SelectorId,
    container_id: String,
    settings: Arc<Settings>,
    callback: Option<Callback>,
    inner: Arc<RwLock<SelectorInner>>,
}

impl LanguageSelector {
    /// Build the selector.
    ///
    /// If an initial language is configured it is selected right away, through
    /// the same path as [`set_language`](Self::set_language), so the callback
    /// fires once during construction.
    pub fn new(config: SelectorConfig) -> Result<Self, SelectorError> {
        if config.languages.is_empty() {
            return Err(SelectorError::NoLanguages);
        }
        if let Some(index) = config.languages.iter().position(|l| l.id.is_empty()) {
            return Err(SelectorError::EmptyLanguageId { index });
        }

        let buttons = config
            .languages
            .iter()
            .enumerate()
            .map(|(index, descriptor)| LanguageButton::new(index, descriptor))
            .collect();

        let id = SelectorId::new();
        let selector = Self {
            id,
            container_id: id.to_string(),
            settings: Arc::new(Settings {
                title: config.title,
                position: config.position,
                vertical: config.vertical,
                collapsible: config.button,
                hide_selected: config.hide_selected,
            }),
            callback: config.callback,
            inner: Arc::new(RwLock::new(SelectorInner::new(buttons))),
        };

        if let Some(initial) = &config.initial_language {
            selector.set_language(initial);
        }

        Ok(selector)
    }

    pub fn id(&self) -> SelectorId {
        self.id
    }

    /// Element id of the control's root container.
    pub fn container_id(&self) -> &str {
        &self.container_id
    }

    // -------------------------------------------------------------------------
    // Read methods
    // -------------------------------------------------------------------------

    /// Id of the selected language.
    pub fn selected(&self) -> Option<String> {
        self.inner.read().ok().and_then(|guard| {
            guard
                .selected
                .map(|i| guard.buttons[i].lang_id().to_string())
        })
    }

    /// Snapshot of every button, in configured order.
    pub fn buttons(&self) -> Vec<LanguageButton> {
        self.inner
            .read()
            .map(|guard| guard.buttons.clone())
            .unwrap_or_default()
    }

    /// Snapshot of the first button for a language.
    pub fn button(&self, lang_id: &str) -> Option<LanguageButton> {
        let guard = self.inner.read().ok()?;
        guard
            .index_of_lang(lang_id)
            .map(|i| guard.buttons[i].clone())
    }

    /// Whether the control collapses into a trigger.
    pub fn is_collapsible(&self) -> bool {
        self.settings.collapsible
    }

    /// Whether the language buttons are shown. Always true when not collapsible.
    pub fn is_open(&self) -> bool {
        !self.settings.collapsible || self.inner.read().map(|g| g.open).unwrap_or(false)
    }

    /// Whether the control is attached to a map.
    pub fn is_mounted(&self) -> bool {
        self.inner
            .read()
            .map(|g| g.mount.is_some())
            .unwrap_or(false)
    }

    /// Number of listeners the control currently holds on its map.
    pub fn listener_count(&self) -> usize {
        self.inner
            .read()
            .ok()
            .and_then(|g| g.mount.as_ref().map(|m| m.listeners.len()))
            .unwrap_or(0)
    }

    // -------------------------------------------------------------------------
    // Write methods
    // -------------------------------------------------------------------------

    /// Select a language without user interaction.
    ///
    /// Returns false, without touching any state or calling the callback, if
    /// no button exists for `lang_id`. Selecting the current language again
    /// re-runs the selection and calls the callback again.
    pub fn set_language(&self, lang_id: &str) -> bool {
        let index = self
            .inner
            .read()
            .ok()
            .and_then(|g| g.index_of_lang(lang_id));

        match index {
            Some(index) => {
                self.select_index(index);
                true
            }
            None => {
                log::warn!("Language '{lang_id}' not found in language selector");
                false
            }
        }
    }

    /// Run the selection for a resolved button and notify the host.
    fn select_index(&self, index: usize) {
        let lang = match self.inner.write() {
            Ok(mut guard) => guard.apply_selection(index),
            Err(_) => return,
        };
        log::debug!("[{}] selected {lang}", self.container_id);

        // Lock released: the callback may call back into the selector.
        if let Some(callback) = &self.callback {
            callback(&lang);
        }
    }

    fn set_open(&self, open: bool) {
        if !self.settings.collapsible {
            return;
        }
        if let Ok(mut guard) = self.inner.write() {
            if guard.open != open {
                log::debug!(
                    "[{}] {}",
                    self.container_id,
                    if open { "opened" } else { "closed" }
                );
                guard.open = open;
            }
        }
    }
}

impl MapControl for LanguageSelector {
    fn position(&self) -> Corner {
        self.settings.position
    }

    fn on_add(&self, listeners: &Listeners) -> Element {
        self.mount(listeners);
        self.element()
    }

    fn on_remove(&self, listeners: &Listeners) {
        self.unmount(listeners);
    }

    fn element(&self) -> Element {
        self.render()
    }
}

impl std::fmt::Debug for LanguageSelector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LanguageSelector")
            .field("container_id", &self.container_id)
            .field("settings", &self.settings)
            .field("selected", &self.selected())
            .field("open", &self.is_open())
            .field("mounted", &self.is_mounted())
            .finish()
    }
}
