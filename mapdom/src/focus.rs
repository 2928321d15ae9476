use crate::element::{collect_paths, Element, ElementPath};
use crate::event::{Event, Key, Modifiers, Target};

/// Tracks which element is currently focused and turns key presses into events.
///
/// Focus is held as an [`ElementPath`], so two elements sharing an id are
/// still told apart.
#[derive(Debug, Default)]
pub struct FocusState {
    focused: Option<ElementPath>,
}

impl FocusState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the currently focused element ID.
    pub fn focused(&self) -> Option<&str> {
        self.focused.as_ref().and_then(|path| path.target())
    }

    pub fn focused_path(&self) -> Option<&ElementPath> {
        self.focused.as_ref()
    }

    /// Programmatically focus an element.
    /// Returns true if focus changed.
    pub fn focus(&mut self, path: ElementPath) -> bool {
        if self.focused.as_ref() == Some(&path) {
            return false;
        }
        self.focused = Some(path);
        true
    }

    /// Clear focus.
    /// Returns true if there was something focused.
    pub fn blur(&mut self) -> bool {
        self.focused.take().is_some()
    }

    /// Drop focus if the focused element is gone or hidden.
    pub fn validate(&mut self, root: &Element) {
        if let Some(path) = &self.focused {
            if !path.is_rendered(root) {
                log::debug!("[focus] dropping focus from {path}, no longer rendered");
                self.focused = None;
            }
        }
    }

    /// Focus the next focusable element (Tab navigation).
    /// Returns the newly focused element ID if focus changed.
    pub fn focus_next(&mut self, root: &Element) -> Option<String> {
        let focusable = collect_focusable_paths(root);
        if focusable.is_empty() {
            return None;
        }

        let new_focus = match &self.focused {
            None => focusable[0].clone(),
            Some(current) => match focusable.iter().position(|p| p == current) {
                Some(i) => focusable[(i + 1) % focusable.len()].clone(),
                None => focusable[0].clone(),
            },
        };

        self.move_to(new_focus)
    }

    /// Focus the previous focusable element (Shift+Tab navigation).
    /// Returns the newly focused element ID if focus changed.
    pub fn focus_prev(&mut self, root: &Element) -> Option<String> {
        let focusable = collect_focusable_paths(root);
        if focusable.is_empty() {
            return None;
        }

        let last = focusable.len() - 1;
        let new_focus = match &self.focused {
            None => focusable[last].clone(),
            Some(current) => match focusable.iter().position(|p| p == current) {
                Some(0) | None => focusable[last].clone(),
                Some(i) => focusable[i - 1].clone(),
            },
        };

        self.move_to(new_focus)
    }

    fn move_to(&mut self, new_focus: ElementPath) -> Option<String> {
        if self.focused.as_ref() == Some(&new_focus) {
            return None;
        }
        let id = new_focus.target().map(str::to_string);
        self.focused = Some(new_focus);
        id
    }

    /// Process a key press.
    ///
    /// Tab and BackTab move focus and produce no event. Every other key becomes
    /// a [`Event::Key`] aimed at the focused element.
    pub fn process_key(&mut self, key: Key, modifiers: Modifiers, root: &Element) -> Option<Event> {
        match key {
            Key::Tab if modifiers.none() => {
                self.focus_next(root);
                None
            }
            Key::BackTab | Key::Tab => {
                self.focus_prev(root);
                None
            }
            _ => Some(Event::Key {
                target: self
                    .focused
                    .clone()
                    .map_or(Target::Map, Target::Path),
                key,
                modifiers,
            }),
        }
    }
}

/// Ids of all focusable, rendered elements in document order.
pub fn collect_focusable(root: &Element) -> Vec<String> {
    collect_focusable_paths(root)
        .iter()
        .filter_map(|path| path.target().map(str::to_string))
        .collect()
}

/// Paths of all focusable, rendered elements in document order.
pub fn collect_focusable_paths(root: &Element) -> Vec<ElementPath> {
    collect_paths(root, |el| el.focusable)
}
