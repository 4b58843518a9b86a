//! Generic input event types, independent of any windowing backend.

use crate::geometry::Pixel;

/// Generic key representation.
///
/// The host page maps its native key codes to these values; only the keys
/// the drawing subsystem reacts to are distinguished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// Regular character key
    Char(char),
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    Enter,
    Space,
    Delete,
    Backspace,
    Escape,
    /// Unmapped or unrecognized key
    Unknown,
}

impl Key {
    /// Pan direction as a unit pixel vector (screen coordinates, y down).
    pub fn pan_direction(&self) -> Option<(f64, f64)> {
        match self {
            Key::ArrowUp => Some((0.0, -1.0)),
            Key::ArrowDown => Some((0.0, 1.0)),
            Key::ArrowLeft => Some((-1.0, 0.0)),
            Key::ArrowRight => Some((1.0, 0.0)),
            _ => None,
        }
    }

    /// Canonical name used for keybinding lookup.
    pub fn name(&self) -> Option<String> {
        match self {
            Key::Char(c) => Some(c.to_string()),
            Key::Enter => Some("Enter".to_string()),
            Key::Space => Some("Space".to_string()),
            Key::Delete => Some("Delete".to_string()),
            Key::Backspace => Some("Backspace".to_string()),
            Key::Escape => Some("Escape".to_string()),
            Key::ArrowUp | Key::ArrowDown | Key::ArrowLeft | Key::ArrowRight | Key::Unknown => {
                None
            }
        }
    }
}

/// Pointer button identification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    /// Primary button (drawing and selection)
    Primary,
    /// Secondary button (unused by this subsystem)
    Secondary,
}

/// A raw input event as delivered by the host page.
///
/// Pointer and touch events carry device-pixel positions; the wiring layer
/// converts them to map coordinates before the state machine sees them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    PointerDown { pixel: Pixel, button: PointerButton },
    PointerMove { pixel: Pixel },
    PointerUp { pixel: Pixel, button: PointerButton },
    DoubleClick { pixel: Pixel },
    TouchStart { pixel: Pixel },
    TouchMove { pixel: Pixel },
    TouchEnd { pixel: Pixel },
    KeyDown {
        key: Key,
        shift: bool,
        ctrl: bool,
        alt: bool,
        caps_lock: bool,
    },
    /// Focus left the map container.
    Blur,
}
