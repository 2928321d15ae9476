//! Event handling for the language selector.
//!
//! Button activation is delegated to listeners on the container, so a mounted
//! selector holds two element listeners, plus one map listener for outside
//! clicks when collapsible.

use std::sync::Arc;

use mapdom::{Event, EventContext, EventKind, EventResult, Key, ListenerTarget, Listeners, MouseButton};

use super::LanguageSelector;
use super::state::Mount;

impl LanguageSelector {
    /// Register listeners. A second mount without an unmount in between is a no-op.
    pub(super) fn mount(&self, listeners: &Listeners) {
        if self.is_mounted() {
            log::warn!("[{}] already mounted, not registering again", self.container_id);
            return;
        }

        let container = ListenerTarget::element(&self.container_id);
        let mut ids = Vec::with_capacity(3);

        let this = self.clone();
        ids.push(listeners.add(
            container.clone(),
            EventKind::Click,
            Arc::new(move |cx: &EventContext<'_>| this.on_click(cx)),
        ));

        let this = self.clone();
        ids.push(listeners.add(
            container,
            EventKind::Key,
            Arc::new(move |cx: &EventContext<'_>| this.on_key(cx)),
        ));

        if self.settings.collapsible {
            let this = self.clone();
            ids.push(listeners.add(
                ListenerTarget::Map,
                EventKind::Click,
                Arc::new(move |cx: &EventContext<'_>| this.on_map_click(cx)),
            ));
        }

        if let Ok(mut guard) = self.inner.write() {
            guard.mount = Some(Mount { listeners: ids });
        }
        log::debug!("[{}] mounted", self.container_id);
    }

    /// Release every listener registered by [`mount`](Self::mount).
    ///
    /// The control collapses again, so a later mount starts closed.
    pub(super) fn unmount(&self, listeners: &Listeners) {
        let mount = match self.inner.write() {
            Ok(mut guard) => {
                guard.open = false;
                guard.mount.take()
            }
            Err(_) => None,
        };
        let Some(mount) = mount else {
            return;
        };

        for id in mount.listeners {
            if !listeners.remove(id) {
                log::warn!("[{}] listener {id:?} was already gone", self.container_id);
            }
        }
        log::debug!("[{}] unmounted", self.container_id);
    }

    /// Index of the language button on the event path, if any.
    ///
    /// Only the part of the path inside this control is considered.
    fn button_on_path(&self, cx: &EventContext<'_>) -> Option<usize> {
        let guard = self.inner.read().ok()?;
        cx.path
            .iter()
            .take_while(|id| **id != self.container_id)
            .find_map(|id| guard.index_of_element(id))
    }

    /// Activate a button from pointer or keyboard input.
    ///
    /// The selected button is disabled, so activating it again does nothing.
    fn activate(&self, index: usize) -> EventResult {
        let disabled = self
            .inner
            .read()
            .map(|g| g.buttons[index].is_disabled())
            .unwrap_or(true);
        if disabled {
            log::debug!("[{}] ignoring activation of selected button", self.container_id);
        } else {
            self.select_index(index);
        }
        // Consumed: the container must not toggle open again.
        EventResult::Consumed
    }

    fn on_click(&self, cx: &EventContext<'_>) -> EventResult {
        if !self.is_mounted() {
            return EventResult::Ignored;
        }
        // Clicks never leave the control, so the map does not see them.
        let Event::Click { button: MouseButton::Left, .. } = cx.event else {
            return EventResult::Consumed;
        };

        match self.button_on_path(cx) {
            Some(index) => self.activate(index),
            None => {
                self.set_open(!self.is_open());
                EventResult::Consumed
            }
        }
    }

    fn on_key(&self, cx: &EventContext<'_>) -> EventResult {
        if !self.is_mounted() {
            return EventResult::Ignored;
        }
        let Event::Key { key, modifiers, .. } = cx.event else {
            return EventResult::Ignored;
        };
        if !modifiers.none() {
            return EventResult::Ignored;
        }

        match key {
            Key::Escape if self.settings.collapsible && self.is_open() => {
                self.set_open(false);
                EventResult::Consumed
            }
            key if key.is_activation() => match self.button_on_path(cx) {
                Some(index) => self.activate(index),
                None if self.settings.collapsible => {
                    self.set_open(!self.is_open());
                    EventResult::Consumed
                }
                None => EventResult::Ignored,
            },
            _ => EventResult::Ignored,
        }
    }

    /// Outside click: collapse without selecting anything.
    fn on_map_click(&self, _cx: &EventContext<'_>) -> EventResult {
        if self.is_mounted() && self.is_open() {
            self.set_open(false);
        }
        EventResult::Ignored
    }
}
