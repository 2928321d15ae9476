use crate::element::ElementPath;

/// What an event is aimed at.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Target {
    /// The map background.
    #[default]
    Map,
    /// The first element with this id in document order.
    Id(String),
    /// One concrete element, as recorded by hit testing or focus.
    Path(ElementPath),
}

impl Target {
    pub fn id(id: impl Into<String>) -> Self {
        Target::Id(id.into())
    }

    /// Id of the targeted element, if any.
    pub fn element_id(&self) -> Option<&str> {
        match self {
            Target::Map => None,
            Target::Id(id) => Some(id),
            Target::Path(path) => path.target(),
        }
    }
}

/// High-level events with element targeting
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Pointer press.
    Click { target: Target, button: MouseButton },
    /// Key press, targeted at the focused element
    Key {
        target: Target,
        key: Key,
        modifiers: Modifiers,
    },
}

impl Event {
    /// Left click on the element with the given id.
    pub fn click(id: impl Into<String>) -> Self {
        Event::Click {
            target: Target::id(id),
            button: MouseButton::Left,
        }
    }

    /// Left click on one concrete element.
    pub fn click_at(path: ElementPath) -> Self {
        Event::Click {
            target: Target::Path(path),
            button: MouseButton::Left,
        }
    }

    /// Left click on the map background.
    pub fn click_map() -> Self {
        Event::Click {
            target: Target::Map,
            button: MouseButton::Left,
        }
    }

    /// Unmodified key press on the element with the given id.
    pub fn key(id: impl Into<String>, key: Key) -> Self {
        Event::Key {
            target: Target::id(id),
            key,
            modifiers: Modifiers::default(),
        }
    }

    pub fn target(&self) -> &Target {
        match self {
            Event::Click { target, .. } | Event::Key { target, .. } => target,
        }
    }
}

/// Simplified key representation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Char(char),
    Enter,
    Backspace,
    Delete,
    Tab,
    BackTab,
    Escape,
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    PageUp,
    PageDown,
    Insert,
    F(u8),
}

impl Key {
    /// Enter or Space, the two keys that activate a button.
    pub fn is_activation(&self) -> bool {
        matches!(self, Key::Enter | Key::Char(' '))
    }
}

/// Key modifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
}

impl Modifiers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shift() -> Self {
        Self {
            shift: true,
            ..Default::default()
        }
    }

    pub fn ctrl() -> Self {
        Self {
            ctrl: true,
            ..Default::default()
        }
    }

    pub fn none(&self) -> bool {
        !self.shift && !self.ctrl && !self.alt
    }
}

/// Mouse button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

/// Result of handling an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Event was ignored, keep bubbling.
    Ignored,
    /// Event was consumed, stop propagation.
    Consumed,
}

impl EventResult {
    pub fn is_consumed(&self) -> bool {
        matches!(self, EventResult::Consumed)
    }
}

// Conversion from crossterm types
impl From<crossterm::event::KeyCode> for Key {
    fn from(code: crossterm::event::KeyCode) -> Self {
        use crossterm::event::KeyCode;
        match code {
            KeyCode::Char(c) => Key::Char(c),
            KeyCode::Enter => Key::Enter,
            KeyCode::Backspace => Key::Backspace,
            KeyCode::Delete => Key::Delete,
            KeyCode::Tab => Key::Tab,
            KeyCode::BackTab => Key::BackTab,
            KeyCode::Esc => Key::Escape,
            KeyCode::Up => Key::Up,
            KeyCode::Down => Key::Down,
            KeyCode::Left => Key::Left,
            KeyCode::Right => Key::Right,
            KeyCode::Home => Key::Home,
            KeyCode::End => Key::End,
            KeyCode::PageUp => Key::PageUp,
            KeyCode::PageDown => Key::PageDown,
            KeyCode::Insert => Key::Insert,
            KeyCode::F(n) => Key::F(n),
            _ => Key::Char('\0'), // Placeholder for unsupported keys
        }
    }
}

impl From<crossterm::event::KeyModifiers> for Modifiers {
    fn from(mods: crossterm::event::KeyModifiers) -> Self {
        use crossterm::event::KeyModifiers;
        Self {
            shift: mods.contains(KeyModifiers::SHIFT),
            ctrl: mods.contains(KeyModifiers::CONTROL),
            alt: mods.contains(KeyModifiers::ALT),
        }
    }
}

impl From<crossterm::event::MouseButton> for MouseButton {
    fn from(btn: crossterm::event::MouseButton) -> Self {
        use crossterm::event::MouseButton as CtBtn;
        match btn {
            CtBtn::Left => MouseButton::Left,
            CtBtn::Right => MouseButton::Right,
            CtBtn::Middle => MouseButton::Middle,
        }
    }
}
