//! The map surface: control corners, event dispatch and focus.

use std::str::FromStr;
use std::sync::Arc;

use crossterm::event::{Event as CrosstermEvent, KeyEventKind, MouseEventKind};

use crate::element::{is_rendered, path_to, Element, ElementPath};
use crate::event::{Event, EventResult, Key, Modifiers, MouseButton, Target};
use crate::focus::{collect_focusable_paths, FocusState};
use crate::listener::{EventContext, EventKind, ListenerTarget, Listeners};
use crate::render::{measure, Frame};

/// Corner of the map a control is placed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Corner {
    TopLeft,
    #[default]
    TopRight,
    BottomLeft,
    BottomRight,
}

impl Corner {
    pub const ALL: [Corner; 4] = [
        Corner::TopLeft,
        Corner::TopRight,
        Corner::BottomLeft,
        Corner::BottomRight,
    ];

    pub fn is_top(&self) -> bool {
        matches!(self, Corner::TopLeft | Corner::TopRight)
    }

    pub fn is_left(&self) -> bool {
        matches!(self, Corner::TopLeft | Corner::BottomLeft)
    }

    /// Short name, also used as the corner container id suffix.
    pub fn as_str(&self) -> &'static str {
        match self {
            Corner::TopLeft => "top-left",
            Corner::TopRight => "top-right",
            Corner::BottomLeft => "bottom-left",
            Corner::BottomRight => "bottom-right",
        }
    }

    fn classes(&self) -> &'static str {
        match self {
            Corner::TopLeft => "leaflet-top leaflet-left",
            Corner::TopRight => "leaflet-top leaflet-right",
            Corner::BottomLeft => "leaflet-bottom leaflet-left",
            Corner::BottomRight => "leaflet-bottom leaflet-right",
        }
    }
}

impl std::fmt::Display for Corner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Accepts both `top-left` and the compact `topleft` spelling.
impl FromStr for Corner {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().replace(['-', '_'], "").as_str() {
            "topleft" => Ok(Corner::TopLeft),
            "topright" => Ok(Corner::TopRight),
            "bottomleft" => Ok(Corner::BottomLeft),
            "bottomright" => Ok(Corner::BottomRight),
            _ => Err(format!("unknown corner '{s}'")),
        }
    }
}

/// A widget that can be attached to a [`Map`].
///
/// The map calls `on_add` when the control is attached and `on_remove` when it
/// is detached. Every listener registered in `on_add` must be removed again in
/// `on_remove`.
pub trait MapControl: Send + Sync {
    /// Corner the control is placed in.
    fn position(&self) -> Corner;

    /// Attach to the map and return the control's root element.
    fn on_add(&self, listeners: &Listeners) -> Element;

    /// Detach from the map.
    fn on_remove(&self, listeners: &Listeners);

    /// Current element tree of the control.
    fn element(&self) -> Element;
}

/// The host surface controls are mounted on.
pub struct Map {
    id: String,
    listeners: Listeners,
    controls: Vec<Arc<dyn MapControl>>,
    focus: FocusState,
}

impl Map {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            listeners: Listeners::new(),
            controls: Vec::new(),
            focus: FocusState::new(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn listeners(&self) -> &Listeners {
        &self.listeners
    }

    // -------------------------------------------------------------------------
    // Control lifecycle
    // -------------------------------------------------------------------------

    /// Attach a control. Returns false if this control is already attached.
    pub fn add_control(&mut self, control: Arc<dyn MapControl>) -> bool {
        if self.has_control(&control) {
            log::warn!("[map {}] control already attached, ignoring", self.id);
            return false;
        }
        let root = control.on_add(&self.listeners);
        log::debug!(
            "[map {}] attached control {} at {}",
            self.id,
            root.id,
            control.position()
        );
        self.controls.push(control);
        true
    }

    /// Detach a control. Returns false if it was not attached.
    pub fn remove_control(&mut self, control: &Arc<dyn MapControl>) -> bool {
        let Some(index) = self.controls.iter().position(|c| Arc::ptr_eq(c, control)) else {
            return false;
        };
        let removed = self.controls.remove(index);
        removed.on_remove(&self.listeners);
        let root = self.element();
        self.focus.validate(&root);
        true
    }

    pub fn has_control(&self, control: &Arc<dyn MapControl>) -> bool {
        self.controls.iter().any(|c| Arc::ptr_eq(c, control))
    }

    /// Controls in a corner, in attach order.
    pub fn controls_at(&self, corner: Corner) -> Vec<Arc<dyn MapControl>> {
        self.controls
            .iter()
            .filter(|c| c.position() == corner)
            .cloned()
            .collect()
    }

    /// Id of the container holding a corner's controls.
    pub fn corner_id(&self, corner: Corner) -> String {
        format!("{}-{}", self.id, corner.as_str())
    }

    /// The document: the map root holding the four corner containers.
    pub fn element(&self) -> Element {
        Element::div()
            .id(&self.id)
            .class("leaflet-container")
            .children(Corner::ALL.into_iter().map(|corner| {
                Element::div()
                    .id(self.corner_id(corner))
                    .class(corner.classes())
                    .children(self.controls_at(corner).iter().map(|c| c.element()))
            }))
    }

    // -------------------------------------------------------------------------
    // Events
    // -------------------------------------------------------------------------

    /// Deliver an event.
    ///
    /// Listeners fire along the ancestor chain of the target, deepest first,
    /// until one consumes the event. Unconsumed events reach the map-level
    /// listeners. Events aimed at elements that are not rendered are dropped.
    ///
    /// A [`Target::Id`] resolves to the first element with that id; a
    /// [`Target::Path`] walks exactly the recorded chain.
    pub fn dispatch(&mut self, event: Event) -> EventResult {
        let root = self.element();
        let result = self.dispatch_in(&root, &event);
        let root = self.element();
        self.focus.validate(&root);
        result
    }

    fn dispatch_in(&self, root: &Element, event: &Event) -> EventResult {
        let kind = EventKind::of(event);
        let path = match event.target() {
            Target::Map => Vec::new(),
            Target::Id(id) if is_rendered(root, id) => path_to(root, id),
            Target::Path(path) if path.is_rendered(root) => path.ids().to_vec(),
            target => {
                log::debug!("[map {}] dropping {kind:?} for unrendered {target:?}", self.id);
                return EventResult::Ignored;
            }
        };

        for id in &path {
            let current = ListenerTarget::Element(id.clone());
            for listener in self.listeners.for_target(&current, kind) {
                let cx = EventContext {
                    event,
                    path: &path,
                    current: &current,
                };
                if listener(&cx).is_consumed() {
                    return EventResult::Consumed;
                }
            }
        }

        let current = ListenerTarget::Map;
        for listener in self.listeners.for_target(&current, kind) {
            let cx = EventContext {
                event,
                path: &path,
                current: &current,
            };
            if listener(&cx).is_consumed() {
                return EventResult::Consumed;
            }
        }

        EventResult::Ignored
    }

    /// Press a key: Tab/BackTab move focus, anything else goes to the focused element.
    pub fn key(&mut self, key: Key, modifiers: Modifiers) -> EventResult {
        let root = self.element();
        match self.focus.process_key(key, modifiers, &root) {
            Some(event) => self.dispatch(event),
            None => EventResult::Consumed,
        }
    }

    /// Translate a raw terminal event using the last rendered frame for hit testing.
    ///
    /// A mouse press focuses the nearest focusable element under the pointer,
    /// or clears focus if there is none.
    pub fn process_event(&mut self, raw: &CrosstermEvent, frame: &Frame) -> EventResult {
        match raw {
            CrosstermEvent::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                self.key(key_event.code.into(), key_event.modifiers.into())
            }
            CrosstermEvent::Mouse(mouse) => match mouse.kind {
                MouseEventKind::Down(button) => {
                    let hit = frame.hit_path(mouse.column, mouse.row).cloned();
                    let root = self.element();
                    let focus_target = hit.as_ref().and_then(|path| {
                        path.ancestors().find(|ancestor| {
                            ancestor.resolve(&root).is_some_and(|el| el.focusable)
                        })
                    });
                    match focus_target {
                        Some(path) => {
                            self.focus.focus(path);
                        }
                        None => {
                            self.focus.blur();
                        }
                    }
                    self.dispatch(Event::Click {
                        target: hit.map_or(Target::Map, Target::Path),
                        button: MouseButton::from(button),
                    })
                }
                _ => EventResult::Ignored,
            },
            _ => EventResult::Ignored,
        }
    }

    // -------------------------------------------------------------------------
    // Focus
    // -------------------------------------------------------------------------

    pub fn focused(&self) -> Option<&str> {
        self.focus.focused()
    }

    /// Path of the focused element.
    pub fn focused_path(&self) -> Option<&ElementPath> {
        self.focus.focused_path()
    }

    /// Focus the first rendered, focusable element with this id.
    /// Returns false if there is none.
    pub fn focus(&mut self, id: &str) -> bool {
        let root = self.element();
        let Some(path) = collect_focusable_paths(&root)
            .into_iter()
            .find(|path| path.target() == Some(id))
        else {
            return false;
        };
        self.focus.focus(path);
        true
    }

    pub fn focus_next(&mut self) -> Option<String> {
        let root = self.element();
        self.focus.focus_next(&root)
    }

    pub fn focus_prev(&mut self) -> Option<String> {
        let root = self.element();
        self.focus.focus_prev(&root)
    }

    // -------------------------------------------------------------------------
    // Rendering
    // -------------------------------------------------------------------------

    /// Lay out every corner on a character grid.
    pub fn render(&self, width: u16, height: u16) -> Frame {
        let mut frame = Frame::new(width, height);
        for corner in Corner::ALL {
            let elements: Vec<Element> = self
                .controls_at(corner)
                .iter()
                .map(|c| c.element())
                .collect();
            let total: u16 = elements.iter().map(|el| measure(el).1).sum();
            let mut y = if corner.is_top() {
                0
            } else {
                height.saturating_sub(total)
            };
            let parent = ElementPath::new(vec![self.corner_id(corner), self.id.clone()]);
            for el in &elements {
                let (w, h) = measure(el);
                let x = if corner.is_left() {
                    0
                } else {
                    width.saturating_sub(w)
                };
                frame.draw_within(el, x, y, &parent);
                y += h;
            }
        }
        frame
    }
}

impl std::fmt::Debug for Map {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Map")
            .field("id", &self.id)
            .field("controls", &self.controls.len())
            .field("listeners", &self.listeners)
            .field("focus", &self.focus)
            .finish()
    }
}
