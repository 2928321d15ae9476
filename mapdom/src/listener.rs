//! Event listener registry.
//!
//! Listeners are keyed by target (an element id or the map itself) and event
//! kind. Whoever adds a listener owns the returned [`ListenerId`] and is
//! responsible for removing it again.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock};

use crate::event::{Event, EventResult};

/// A listener callback.
pub type Listener = Arc<dyn Fn(&EventContext<'_>) -> EventResult + Send + Sync>;

/// Handle returned by [`Listeners::add`], used to remove the listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ListenerId(u64);

impl ListenerId {
    fn new() -> Self {
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::SeqCst))
    }
}

/// What a listener is attached to.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ListenerTarget {
    Element(String),
    Map,
}

impl ListenerTarget {
    pub fn element(id: impl Into<String>) -> Self {
        ListenerTarget::Element(id.into())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    Click,
    Key,
}

impl EventKind {
    pub fn of(event: &Event) -> Self {
        match event {
            Event::Click { .. } => EventKind::Click,
            Event::Key { .. } => EventKind::Key,
        }
    }
}

/// What a listener sees while an event bubbles.
#[derive(Debug)]
pub struct EventContext<'a> {
    pub event: &'a Event,
    /// Ancestor chain of the original target, target first.
    /// Empty for events aimed at the map background.
    pub path: &'a [String],
    /// Target the listener was registered on.
    pub current: &'a ListenerTarget,
}

impl EventContext<'_> {
    /// The originally targeted element, if any.
    pub fn target(&self) -> Option<&str> {
        self.path.first().map(String::as_str)
    }
}

struct Entry {
    target: ListenerTarget,
    kind: EventKind,
    listener: Listener,
}

/// Shared registry of listeners.
///
/// Cloning yields another handle to the same registry.
#[derive(Clone, Default)]
pub struct Listeners {
    // ListenerIds increase monotonically, so iteration order is registration order.
    entries: Arc<RwLock<BTreeMap<ListenerId, Entry>>>,
}

impl Listeners {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener and return its handle.
    pub fn add(&self, target: ListenerTarget, kind: EventKind, listener: Listener) -> ListenerId {
        let id = ListenerId::new();
        if let Ok(mut entries) = self.entries.write() {
            log::debug!("[listeners] add {id:?} {target:?} {kind:?}");
            entries.insert(
                id,
                Entry {
                    target,
                    kind,
                    listener,
                },
            );
        }
        id
    }

    /// Remove a listener. Returns false if it was not registered.
    pub fn remove(&self, id: ListenerId) -> bool {
        self.entries
            .write()
            .map(|mut entries| entries.remove(&id).is_some())
            .unwrap_or(false)
    }

    /// Listeners for a target and event kind, in registration order.
    pub fn for_target(&self, target: &ListenerTarget, kind: EventKind) -> Vec<Listener> {
        self.entries
            .read()
            .map(|entries| {
                entries
                    .values()
                    .filter(|e| e.kind == kind && &e.target == target)
                    .map(|e| Arc::clone(&e.listener))
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn contains(&self, id: ListenerId) -> bool {
        self.entries
            .read()
            .map(|entries| entries.contains_key(&id))
            .unwrap_or(false)
    }

    pub fn len(&self) -> usize {
        self.entries.read().map(|e| e.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl std::fmt::Debug for Listeners {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Listeners")
            .field("listener_count", &self.len())
            .finish()
    }
}
