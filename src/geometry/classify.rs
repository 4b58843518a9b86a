//! Point-vs-line vertex classification.

use super::coord::Coord;
use super::ring::Ring;

/// What a candidate vertex coincides with on the ring.
///
/// `Point` means the coordinate exactly matches an existing vertex (the edit
/// affordance is delete); `Line` means it lies on an edge and is a freshly
/// reported insertion candidate (the affordance is add).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VertexType {
    Point,
    Line,
}

/// Classifies a candidate coordinate against the ring.
///
/// Exact pair equality, no distance threshold: the engine only ever reports
/// candidates it snapped itself, either an existing ring coordinate or an
/// edge midpoint it just computed, so the values compare bit-for-bit.
pub fn classify(coord: Coord, ring: &Ring) -> VertexType {
    if ring.coords().iter().any(|c| *c == coord) {
        VertexType::Point
    } else {
        VertexType::Line
    }
}
