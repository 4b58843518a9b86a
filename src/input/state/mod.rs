mod actions;
mod core;
mod keyboard;
mod pointer;
mod touch;

pub use actions::Effect;
pub use core::{DrawPhase, DrawState};
