//! Input events routed into the widget's handlers.

/// A key reported by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Enter,
    Space,
    Char(char),
}

/// The interaction that triggered a handler.
///
/// Hosts construct these from whatever input layer they use and pass them
/// through [`crate::tree::Tree::dispatch`] or the individual handlers.
/// Callbacks receive the event unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// Single click or tap on a control.
    Click,
    /// Double click on a control.
    DoubleClick,
    /// Key press while a control is focused.
    Key(Key),
}

impl Event {
    /// Enter is equivalent to a click on the focused control.
    pub fn is_enter(&self) -> bool {
        matches!(self, Self::Key(Key::Enter))
    }

    /// Whether this event activates a control at all.
    pub fn is_activation(&self) -> bool {
        matches!(self, Self::Click | Self::DoubleClick) || self.is_enter()
    }
}
