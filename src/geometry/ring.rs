//! The polygon ring owned by the drawing session.

use super::coord::Coord;
use serde::Serialize;

/// Minimum number of distinct vertices a finished ring may have.
pub const MIN_RING_VERTICES: usize = 3;

/// An ordered ring of coordinates forming the area-of-interest polygon.
///
/// While a shape is being drawn the ring is open: coordinates are appended
/// one confirm at a time. `close()` repeats the first coordinate as the last,
/// and from then on every mutation maintains `coords[0] == coords[last]`.
#[derive(Debug, Clone, Serialize)]
pub struct Ring {
    coords: Vec<Coord>,
    closed: bool,
}

impl Ring {
    pub fn new() -> Self {
        Self {
            coords: Vec::new(),
            closed: false,
        }
    }

    pub fn coords(&self) -> &[Coord] {
        &self.coords
    }

    pub fn len(&self) -> usize {
        self.coords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Number of distinct vertices (the repeated closing coordinate does not
    /// count twice).
    pub fn distinct_len(&self) -> usize {
        if self.closed {
            self.coords.len().saturating_sub(1)
        } else {
            self.coords.len()
        }
    }

    pub fn get(&self, index: usize) -> Option<Coord> {
        self.coords.get(index).copied()
    }

    /// Appends a vertex while the ring is still open. Ignored once closed.
    pub fn push(&mut self, coord: Coord) {
        if self.closed {
            log::debug!("push on a closed ring refused");
            return;
        }
        self.coords.push(coord);
    }

    /// Closes the ring by repeating the first coordinate as the last.
    ///
    /// Requires at least `MIN_RING_VERTICES` distinct coordinates; refused
    /// otherwise. Closing an already-closed ring is a no-op.
    pub fn close(&mut self) -> bool {
        if self.closed {
            return false;
        }
        if self.coords.len() < MIN_RING_VERTICES {
            log::debug!(
                "close refused: {} of {} vertices placed",
                self.coords.len(),
                MIN_RING_VERTICES
            );
            return false;
        }
        let first = self.coords[0];
        self.coords.push(first);
        self.closed = true;
        true
    }

    /// Moves the vertex at `index`, writing through to the paired closing
    /// position when `index` is first or last so the ring stays closed.
    pub fn move_vertex(&mut self, index: usize, coord: Coord) {
        if index >= self.coords.len() {
            return;
        }
        self.coords[index] = coord;
        if self.closed {
            let last = self.coords.len() - 1;
            if index == 0 {
                self.coords[last] = coord;
            } else if index == last {
                self.coords[0] = coord;
            }
        }
    }

    /// Inserts a vertex before `segment_end` (the index of the vertex that
    /// ends the edge the new coordinate sits on).
    pub fn insert_vertex(&mut self, segment_end: usize, coord: Coord) {
        let index = segment_end.min(self.coords.len());
        self.coords.insert(index, coord);
    }

    /// Removes the vertex at `index`.
    ///
    /// Refused (returning `false`, ring untouched) when removal would leave
    /// fewer than `MIN_RING_VERTICES` distinct vertices. Removing the shared
    /// closing vertex removes both of its positions and re-closes the ring on
    /// the next vertex.
    pub fn remove_vertex(&mut self, index: usize) -> bool {
        if index >= self.coords.len() {
            return false;
        }
        if self.closed {
            if self.distinct_len() <= MIN_RING_VERTICES {
                log::debug!(
                    "remove refused: ring already at minimum {} vertices",
                    MIN_RING_VERTICES
                );
                return false;
            }
            let last = self.coords.len() - 1;
            if index == 0 || index == last {
                self.coords.remove(last);
                self.coords.remove(0);
                let new_first = self.coords[0];
                self.coords.push(new_first);
            } else {
                self.coords.remove(index);
            }
        } else {
            self.coords.remove(index);
        }
        true
    }

    /// Index of the vertex exactly at `coord`, if any.
    pub fn position_of(&self, coord: Coord) -> Option<usize> {
        self.coords.iter().position(|c| *c == coord)
    }

    /// Index pair selected when the vertex at `index` is picked: the shared
    /// first/last vertex selects both of its positions.
    pub fn selection_for(&self, index: usize) -> Vec<usize> {
        if self.closed && !self.coords.is_empty() {
            let last = self.coords.len() - 1;
            if index == 0 || index == last {
                return vec![0, last];
            }
        }
        vec![index]
    }

    /// Index of the vertex ending the edge whose interior passes through
    /// `coord`, for midpoint insertion. `None` when `coord` sits on no edge.
    pub fn segment_end_through(&self, coord: Coord) -> Option<usize> {
        for (i, pair) in self.coords.windows(2).enumerate() {
            let (a, b) = (pair[0], pair[1]);
            let hit = super::coord::closest_point_on_segment(coord, a, b);
            if hit.distance_to(coord) < 1e-9 {
                return Some(i + 1);
            }
        }
        None
    }
}

impl Default for Ring {
    fn default() -> Self {
        Self::new()
    }
}
