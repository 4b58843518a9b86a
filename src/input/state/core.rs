//! The draw/modify state machine's data.

use crate::geometry::{Coord, CursorPoint, MIN_RING_VERTICES, Ring, Sketch, VertexType};

/// Which phase of the shape's lifecycle the session is in.
///
/// Transitions are `Idle -> Drawing -> Editing -> Idle`; deleting the shape
/// returns to `Idle` from either active phase, and there is no direct
/// `Editing -> Drawing` edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DrawPhase {
    /// No polygon exists
    #[default]
    Idle,
    /// A polygon is being constructed vertex by vertex
    Drawing,
    /// The polygon is closed; vertices can be moved, inserted or removed
    Editing,
}

/// All mutable session state for the single drawn polygon.
///
/// Engine-free on purpose: adapters hand in already-resolved coordinates
/// and vertex hits, operations mutate this struct and report engine-side
/// effects back (see `actions.rs`), and the wiring layer applies them. That
/// keeps every transition testable without a rendering engine.
#[derive(Debug)]
pub struct DrawState {
    phase: DrawPhase,
    /// The closed ring, populated when drawing finishes
    pub ring: Ring,
    /// In-progress sketch line while drawing
    pub sketch: Sketch,
    /// The single synthetic cursor point, repositioned in place
    pub cursor: CursorPoint,
    /// Selected vertex indexes: one normally, two when the shared
    /// first/last vertex is selected
    pub selected: Vec<usize>,
    /// Vector from view centre to the selected vertex, captured at
    /// selection time; keyboard panning repositions the vertex through it
    pub vertex_offset: (f64, f64),
    /// Whether a native mouse drag of the selected vertex is in progress
    pub(super) dragging: bool,
    /// Whether the visual layers must be recomputed
    pub needs_redraw: bool,
}

impl DrawState {
    pub fn new(centre: Coord) -> Self {
        Self {
            phase: DrawPhase::Idle,
            ring: Ring::new(),
            sketch: Sketch::new(),
            cursor: CursorPoint::new(centre),
            selected: Vec::new(),
            vertex_offset: (0.0, 0.0),
            dragging: false,
            needs_redraw: true,
        }
    }

    pub fn phase(&self) -> DrawPhase {
        self.phase
    }

    pub(super) fn set_phase(&mut self, phase: DrawPhase) {
        if phase != self.phase {
            log::debug!("draw phase {:?} -> {:?}", self.phase, phase);
        }
        self.phase = phase;
    }

    pub fn is_idle(&self) -> bool {
        self.phase == DrawPhase::Idle
    }

    /// A shape is being authored. Mutually exclusive with [`is_modify`].
    ///
    /// [`is_modify`]: DrawState::is_modify
    pub fn is_draw(&self) -> bool {
        self.phase == DrawPhase::Drawing
    }

    pub fn is_modify(&self) -> bool {
        self.phase == DrawPhase::Editing
    }

    /// Whether the sketch has enough distinct confirmed coordinates to
    /// close a ring. Coincident confirms (Enter pressed repeatedly without
    /// panning) do not count towards the minimum.
    pub fn can_finish(&self) -> bool {
        self.is_draw() && self.sketch.distinct_confirmed() >= MIN_RING_VERTICES
    }

    /// Whether a vertex delete would keep the ring at or above the minimum.
    pub fn can_delete_vertex(&self) -> bool {
        self.is_modify() && self.ring.distinct_len() > MIN_RING_VERTICES
    }

    /// Whether a point-type vertex is currently selected.
    pub fn has_point_selection(&self) -> bool {
        !self.selected.is_empty()
            && self.cursor.is_selected
            && self.cursor.vertex_type == VertexType::Point
    }

    pub(super) fn clear_selection(&mut self) {
        self.selected.clear();
        self.vertex_offset = (0.0, 0.0);
        self.cursor.is_selected = false;
        self.dragging = false;
    }
}
