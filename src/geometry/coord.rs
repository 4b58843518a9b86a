//! Map coordinates and pixel vectors.

use serde::{Deserialize, Serialize};

/// A position in the engine's projected coordinate space (map units).
///
/// Comparison is exact `f64` pair equality. Every coordinate this subsystem
/// compares comes from the engine's own snapping (an existing ring vertex or
/// a midpoint the engine computed), so both sides of a comparison are the
/// same float values and no tolerance is needed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coord {
    pub x: f64,
    pub y: f64,
}

impl Coord {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Vector from `self` to `other`.
    pub fn offset_to(&self, other: Coord) -> (f64, f64) {
        (other.x - self.x, other.y - self.y)
    }

    /// `self` translated by a (dx, dy) vector.
    pub fn translated(&self, offset: (f64, f64)) -> Coord {
        Coord::new(self.x + offset.0, self.y + offset.1)
    }

    /// Euclidean distance in map units.
    pub fn distance_to(&self, other: Coord) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Tolerant comparison for test assertions on panned/derived positions.
    #[cfg(test)]
    pub fn approx_eq(&self, other: Coord) -> bool {
        (self.x - other.x).abs() < 1e-9 && (self.y - other.y).abs() < 1e-9
    }
}

impl From<(f64, f64)> for Coord {
    fn from((x, y): (f64, f64)) -> Self {
        Coord::new(x, y)
    }
}

/// A position on the screen in device pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pixel {
    pub x: f64,
    pub y: f64,
}

impl Pixel {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Closest point to `p` on the segment `a`–`b`, in map units.
pub fn closest_point_on_segment(p: Coord, a: Coord, b: Coord) -> Coord {
    let abx = b.x - a.x;
    let aby = b.y - a.y;
    let len_sq = abx * abx + aby * aby;
    if len_sq == 0.0 {
        return a;
    }
    let t = (((p.x - a.x) * abx + (p.y - a.y) * aby) / len_sq).clamp(0.0, 1.0);
    Coord::new(a.x + t * abx, a.y + t * aby)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_round_trips_through_translate() {
        let a = Coord::new(3.0, -2.0);
        let b = Coord::new(10.5, 4.25);
        let offset = a.offset_to(b);
        assert_eq!(a.translated(offset), b);
    }

    #[test]
    fn closest_point_clamps_to_segment_ends() {
        let a = Coord::new(0.0, 0.0);
        let b = Coord::new(10.0, 0.0);
        assert_eq!(
            closest_point_on_segment(Coord::new(-5.0, 3.0), a, b),
            a
        );
        assert_eq!(
            closest_point_on_segment(Coord::new(15.0, 3.0), a, b),
            b
        );
        assert_eq!(
            closest_point_on_segment(Coord::new(4.0, 3.0), a, b),
            Coord::new(4.0, 0.0)
        );
    }
}
