/// High-level events with element targeting
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Mouse click event
    Click {
        target: Option<String>,
        button: MouseButton,
    },
}

impl Event {
    /// Left click on the element with `target` id.
    pub fn click(target: impl Into<String>) -> Self {
        Event::Click {
            target: Some(target.into()),
            button: MouseButton::Left,
        }
    }

    pub fn target(&self) -> Option<&str> {
        match self {
            Event::Click { target, .. } => target.as_deref(),
        }
    }

    pub fn kind(&self) -> EventKind {
        match self {
            Event::Click { .. } => EventKind::Click,
        }
    }
}

/// Event discriminant used when registering listeners.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    Click,
}

/// Mouse button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
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
