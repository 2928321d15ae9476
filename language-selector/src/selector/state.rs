//! Selector state.

use mapdom::ListenerId;

use crate::button::LanguageButton;

/// Listeners registered while the selector is attached to a map.
#[derive(Debug, Default)]
pub(crate) struct Mount {
    pub listeners: Vec<ListenerId>,
}

/// Mutable state of one selector instance.
#[derive(Debug)]
pub(crate) struct SelectorInner {
    pub buttons: Vec<LanguageButton>,
    /// Index of the selected button.
    pub selected: Option<usize>,
    /// Expanded, in collapsible mode. Starts closed.
    pub open: bool,
    pub mount: Option<Mount>,
}

impl SelectorInner {
    pub fn new(buttons: Vec<LanguageButton>) -> Self {
        Self {
            buttons,
            selected: None,
            open: false,
            mount: None,
        }
    }

    /// Resolve a language id. The first match in list order wins.
    pub fn index_of_lang(&self, lang_id: &str) -> Option<usize> {
        self.buttons.iter().position(|b| b.lang_id() == lang_id)
    }

    /// Resolve a button element id. The first match in list order wins.
    pub fn index_of_element(&self, element_id: &str) -> Option<usize> {
        self.buttons.iter().position(|b| b.element_id() == element_id)
    }

    /// Mark `index` as the only selected button and collapse the selector.
    ///
    /// Returns the selected language id.
    pub fn apply_selection(&mut self, index: usize) -> String {
        for (i, button) in self.buttons.iter_mut().enumerate() {
            button.set_selected(i == index);
        }
        self.selected = Some(index);
        self.open = false;
        self.buttons[index].lang_id().to_string()
    }
}
