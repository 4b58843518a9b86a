//! Input handling for the polygon drawing session.
//!
//! Translates raw pointer, touch and keyboard events into state-machine
//! operations. The mode dispatcher decides which modality's adapter runs;
//! the state machine in `state/` owns the geometry and selection.

pub mod events;
pub mod mode;
pub mod state;

// Re-export commonly used types at module level
pub use events::{InputEvent, Key, PointerButton};
pub use mode::{InterfaceMode, ModeDispatcher};
pub use state::{DrawPhase, DrawState, Effect};
