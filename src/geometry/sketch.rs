//! Sketch geometry: the in-progress line and the synthetic cursor point.

use super::classify::VertexType;
use super::coord::Coord;

/// The temporary line shown while a vertex is being placed but not yet
/// confirmed: the already-confirmed coordinates plus one trailing vertex that
/// tracks the cursor.
#[derive(Debug, Clone, Default)]
pub struct Sketch {
    coords: Vec<Coord>,
}

impl Sketch {
    pub fn new() -> Self {
        Self { coords: Vec::new() }
    }

    pub fn coords(&self) -> &[Coord] {
        &self.coords
    }

    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }

    /// Seeds the sketch with the first placed vertex and a coincident
    /// trailing vertex, mirroring how the drawing engine starts a ring.
    pub fn start_at(&mut self, coord: Coord) {
        self.coords.clear();
        self.coords.push(coord);
        self.coords.push(coord);
    }

    /// Confirms the trailing vertex at `coord` and appends a fresh trailing
    /// vertex on top of it.
    pub fn append(&mut self, coord: Coord) {
        if let Some(last) = self.coords.last_mut() {
            *last = coord;
        }
        self.coords.push(coord);
    }

    /// Moves the trailing (unconfirmed) vertex.
    pub fn track(&mut self, coord: Coord) {
        if let Some(last) = self.coords.last_mut() {
            *last = coord;
        }
    }

    /// The confirmed coordinates, excluding the trailing sketch vertex.
    pub fn confirmed(&self) -> &[Coord] {
        if self.coords.is_empty() {
            &[]
        } else {
            &self.coords[..self.coords.len() - 1]
        }
    }

    /// Number of distinct confirmed coordinates. A vertex confirmed twice
    /// at the same position counts once.
    pub fn distinct_confirmed(&self) -> usize {
        let confirmed = self.confirmed();
        confirmed
            .iter()
            .enumerate()
            .filter(|(i, c)| !confirmed[..*i].contains(c))
            .count()
    }

    pub fn clear(&mut self) {
        self.coords.clear();
    }
}

/// The single synthetic point feature marking the next candidate vertex
/// (while drawing) or the targeted vertex (while editing). Repositioned in
/// place for its whole lifetime, never recreated.
#[derive(Debug, Clone)]
pub struct CursorPoint {
    pub coord: Coord,
    pub vertex_type: VertexType,
    pub is_selected: bool,
}

impl CursorPoint {
    pub fn new(coord: Coord) -> Self {
        Self {
            coord,
            vertex_type: VertexType::Line,
            is_selected: false,
        }
    }

    pub fn reposition(&mut self, coord: Coord, vertex_type: VertexType) {
        self.coord = coord;
        self.vertex_type = vertex_type;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_places_two_coincident_points() {
        let mut sketch = Sketch::new();
        sketch.start_at(Coord::new(1.0, 2.0));
        assert_eq!(sketch.coords().len(), 2);
        assert_eq!(sketch.coords()[0], sketch.coords()[1]);
        assert_eq!(sketch.confirmed().len(), 1);
    }

    #[test]
    fn distinct_confirmed_ignores_repeats() {
        let mut sketch = Sketch::new();
        sketch.start_at(Coord::new(0.0, 0.0));
        sketch.append(Coord::new(5.0, 0.0));
        sketch.append(Coord::new(0.0, 0.0));
        assert_eq!(sketch.confirmed().len(), 3);
        assert_eq!(sketch.distinct_confirmed(), 2);
    }

    #[test]
    fn append_confirms_then_trails() {
        let mut sketch = Sketch::new();
        sketch.start_at(Coord::new(0.0, 0.0));
        sketch.append(Coord::new(5.0, 0.0));
        assert_eq!(sketch.confirmed().len(), 2);
        assert_eq!(sketch.confirmed()[1], Coord::new(5.0, 0.0));
        sketch.track(Coord::new(7.0, 3.0));
        assert_eq!(*sketch.coords().last().unwrap(), Coord::new(7.0, 3.0));
        assert_eq!(sketch.confirmed()[1], Coord::new(5.0, 0.0));
    }
}
