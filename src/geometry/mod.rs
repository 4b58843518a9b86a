//! Polygon geometry for the drawn area of interest.
//!
//! Owns the ring being authored, the in-progress sketch line, the synthetic
//! cursor point, and the point-vs-line vertex classifier. No engine types
//! appear here; everything is plain coordinates.

pub mod classify;
pub mod coord;
pub mod ring;
pub mod sketch;

pub use classify::{VertexType, classify};
pub use coord::{Coord, Pixel};
pub use ring::{MIN_RING_VERTICES, Ring};
pub use sketch::{CursorPoint, Sketch};
