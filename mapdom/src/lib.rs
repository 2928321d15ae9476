pub mod element;
pub mod event;
pub mod focus;
pub mod listener;
pub mod map;
pub mod render;
pub mod text;

pub use element::{
    collect_paths, find_element, is_rendered, path_to, Content, Direction, Element, ElementPath,
};
pub use event::{Event, EventResult, Key, Modifiers, MouseButton, Target};
pub use focus::{collect_focusable, collect_focusable_paths, FocusState};
pub use listener::{EventContext, EventKind, Listener, ListenerId, ListenerTarget, Listeners};
pub use map::{Corner, Map, MapControl};
pub use render::{Frame, Rect};
