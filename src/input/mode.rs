//! Interface-mode tracking: which input modality the user is currently on.

use super::events::InputEvent;

/// The input modality last seen from the user.
///
/// Every modality-specific code path reads this before acting, so that a
/// stray pointer-move does not drive touch logic while the user is typing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InterfaceMode {
    /// No input observed yet
    #[default]
    None,
    Mouse,
    Touch,
    Keyboard,
}

/// Classifies raw events into an [`InterfaceMode`], last event wins.
///
/// Owned by the map factory and threaded into each adapter call; there is
/// deliberately no process-wide instance. Also keeps the keyboard focus tag
/// used to style the focused element: set on any keydown, cleared on blur.
#[derive(Debug, Default)]
pub struct ModeDispatcher {
    mode: InterfaceMode,
    focus_tagged: bool,
}

impl ModeDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> InterfaceMode {
        self.mode
    }

    /// Whether the focused element should carry visible focus styling.
    pub fn focus_tagged(&self) -> bool {
        self.focus_tagged
    }

    /// Updates the mode from a raw event and returns the new value.
    ///
    /// No debouncing: a single keydown mid-drag flips the whole subsystem to
    /// keyboard behaviour, exactly as the last-writer-wins contract requires.
    pub fn observe(&mut self, event: &InputEvent) -> InterfaceMode {
        // Only down/move events flip the mode: a pointer-up or double-click
        // tail of a touch gesture must not yank the subsystem back to mouse.
        let next = match event {
            InputEvent::PointerDown { .. } | InputEvent::PointerMove { .. } => {
                Some(InterfaceMode::Mouse)
            }
            InputEvent::TouchStart { .. } | InputEvent::TouchMove { .. } => {
                Some(InterfaceMode::Touch)
            }
            InputEvent::KeyDown { .. } => Some(InterfaceMode::Keyboard),
            InputEvent::PointerUp { .. }
            | InputEvent::DoubleClick { .. }
            | InputEvent::TouchEnd { .. }
            | InputEvent::Blur => None,
        };

        match event {
            InputEvent::KeyDown { .. } => self.focus_tagged = true,
            InputEvent::Blur => self.focus_tagged = false,
            _ => {}
        }

        if let Some(next) = next {
            if next != self.mode {
                log::debug!("interface mode {:?} -> {:?}", self.mode, next);
            }
            self.mode = next;
        }
        self.mode
    }
}
