//! Interactive trait for components that handle keyboard input

use crossterm::event::KeyEvent;

/// Result of handling a key event
///
/// Tells the caller whether the component consumed the event or if it
/// should bubble up for global handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Handled {
    /// Event was consumed by the component
    Yes,
    /// Event was not handled, should bubble up
    No,
}

impl Handled {
    pub fn was_handled(self) -> bool {
        self == Self::Yes
    }
}

impl From<bool> for Handled {
    fn from(handled: bool) -> Self {
        if handled {
            Self::Yes
        } else {
            Self::No
        }
    }
}

/// Trait for components that handle keyboard input
///
/// # Event Flow
///
/// ```text
/// KeyEvent
///    │
///    ▼
/// Modal (help overlay absorbs everything)
///    │
///    ▼
/// Global keys (Ctrl+C, Ctrl+N, F1)
///    │
///    ▼
/// Focused component (via Interactive)
///    │
///    │ returns Handled::Yes or Handled::No
///    ▼
/// Mode fallback handlers
/// ```
pub trait Interactive {
    /// Handle a key event
    ///
    /// Returns `Handled::Yes` if the component consumed the event,
    /// `Handled::No` if it should bubble up.
    fn handle_key(&mut self, key: KeyEvent) -> Handled;

    /// Keybind hints shown in the status bar while this component has focus
    fn focus_hint(&self) -> Option<&'static str> {
        None
    }
}
