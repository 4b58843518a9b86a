//! State-machine operations shared by every input adapter.
//!
//! Each operation mutates the state, flags a redraw, and returns the engine
//! side effects the wiring layer must apply. Invalid operations are silent
//! no-ops logged at debug level; nothing here errors.

use crate::engine::VertexHit;
use crate::geometry::{Coord, Ring, VertexType, classify};

use super::{DrawPhase, DrawState};

/// An engine-side effect requested by a state transition.
///
/// Pointer synthesis is not an effect: the wiring layer feeds the engine a
/// synthesized pointer before the adapter call, because the adapter needs
/// the resulting hit as input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Disable double-click zoom for the duration of the draw; it would
    /// otherwise fire on the click pairs of multi-click authoring.
    SuspendDoubleClickZoom,
    /// Re-enable double-click zoom after the engine's short grace delay.
    RestoreDoubleClickZoom,
}

impl DrawState {
    /// Begins a new shape. No-op unless Idle.
    pub fn start_draw(&mut self, centre: Coord) -> Vec<Effect> {
        if !self.is_idle() {
            log::debug!("start_draw refused in {:?}", self.phase());
            return Vec::new();
        }
        self.set_phase(DrawPhase::Drawing);
        self.ring = Ring::new();
        self.sketch.clear();
        self.clear_selection();
        self.cursor.reposition(centre, VertexType::Line);
        self.needs_redraw = true;
        vec![Effect::SuspendDoubleClickZoom]
    }

    /// Places a vertex at `coord` (the view centre for touch/keyboard, the
    /// click position for mouse).
    ///
    /// While Idle this is overloaded to mean "start drawing, then place":
    /// the first confirm seeds the sketch with the placed vertex and a
    /// coincident trailing vertex. While Editing it is a no-op.
    pub fn confirm_point(&mut self, coord: Coord) -> Vec<Effect> {
        let mut effects = Vec::new();
        if self.is_idle() {
            effects.extend(self.start_draw(coord));
        }
        if !self.is_draw() {
            log::debug!("confirm_point refused in {:?}", self.phase());
            return effects;
        }

        if self.sketch.is_empty() {
            self.sketch.start_at(coord);
        } else {
            // Confirming without moving would stack a duplicate vertex
            if self.sketch.confirmed().last() == Some(&coord) {
                log::debug!("confirm_point refused: coincides with the last vertex");
                return effects;
            }
            self.sketch.append(coord);
        }
        self.cursor.reposition(coord, VertexType::Line);
        self.needs_redraw = true;
        effects
    }

    /// Moves the trailing sketch vertex (and the cursor point) while
    /// drawing. No-op in other phases.
    pub fn track_cursor(&mut self, coord: Coord) {
        if !self.is_draw() {
            return;
        }
        self.sketch.track(coord);
        self.cursor.reposition(coord, VertexType::Line);
        self.needs_redraw = true;
    }

    /// Closes the ring and enters Editing.
    ///
    /// Only available once three coordinates are confirmed (the trailing
    /// sketch vertex does not count). Idempotent: once Editing has been
    /// entered a second invocation changes nothing.
    pub fn finish_shape(&mut self) -> Vec<Effect> {
        if !self.can_finish() {
            log::debug!(
                "finish_shape refused: phase {:?}, {} confirmed",
                self.phase(),
                self.sketch.confirmed().len()
            );
            return Vec::new();
        }

        let mut confirmed = self.sketch.confirmed();
        // A final confirm back on the start point is the closing vertex
        // itself; close() re-adds it
        if confirmed.len() > 1 && confirmed.first() == confirmed.last() {
            confirmed = &confirmed[..confirmed.len() - 1];
        }
        let mut ring = Ring::new();
        for coord in confirmed {
            ring.push(*coord);
        }
        if !ring.close() {
            return Vec::new();
        }
        self.ring = ring;
        self.sketch.clear();
        self.set_phase(DrawPhase::Editing);
        self.clear_selection();
        self.needs_redraw = true;
        vec![Effect::RestoreDoubleClickZoom]
    }

    /// Deletes the in-progress draw or the completed shape, returning to
    /// Idle. The only cancellable operation in the subsystem.
    pub fn delete_drawing(&mut self) -> Vec<Effect> {
        if self.is_idle() {
            return Vec::new();
        }
        let was_drawing = self.is_draw();
        self.ring = Ring::new();
        self.sketch.clear();
        self.clear_selection();
        self.set_phase(DrawPhase::Idle);
        self.needs_redraw = true;
        if was_drawing {
            vec![Effect::RestoreDoubleClickZoom]
        } else {
            Vec::new()
        }
    }

    /// Selects or deselects the vertex under the cursor while Editing.
    ///
    /// A `Point` hit toggles selection, recomputing the mirrored index pair
    /// for the shared closing vertex and capturing the view-centre offset
    /// used by keyboard panning. A `Line` hit only retargets the cursor (the
    /// affordance becomes "add vertex"). `None` deselects.
    pub fn toggle_select(&mut self, hit: Option<VertexHit>, centre: Coord) {
        if !self.is_modify() {
            log::debug!("toggle_select refused in {:?}", self.phase());
            return;
        }

        match hit {
            Some(hit) if hit.vertex_type == VertexType::Point => {
                let already = self.cursor.is_selected && self.selected.contains(&hit.index);
                if already {
                    self.clear_selection();
                    self.cursor.reposition(hit.coord, VertexType::Point);
                } else {
                    self.selected = self.ring.selection_for(hit.index);
                    self.vertex_offset = centre.offset_to(hit.coord);
                    self.cursor.reposition(hit.coord, VertexType::Point);
                    self.cursor.is_selected = true;
                }
            }
            Some(hit) => {
                self.clear_selection();
                self.cursor.reposition(hit.coord, VertexType::Line);
            }
            None => {
                self.clear_selection();
                self.cursor.reposition(centre, VertexType::Line);
            }
        }
        self.needs_redraw = true;
    }

    /// Translates the selected vertex(es) to track the view centre, applying
    /// the offset captured at selection time. Ring closure is preserved by
    /// the write-through in [`Ring::move_vertex`].
    pub fn move_selected_to(&mut self, centre: Coord) {
        if !self.is_modify() || self.selected.is_empty() {
            return;
        }
        let target = centre.translated(self.vertex_offset);
        for index in self.selected.clone() {
            self.ring.move_vertex(index, target);
        }
        self.cursor.reposition(target, VertexType::Point);
        self.cursor.is_selected = true;
        self.needs_redraw = true;
    }

    /// Drags the selected vertex(es) directly to `coord` (mouse drag path,
    /// no view-centre offset involved).
    pub fn drag_selected_to(&mut self, coord: Coord) {
        if !self.is_modify() || self.selected.is_empty() {
            return;
        }
        for index in self.selected.clone() {
            self.ring.move_vertex(index, coord);
        }
        self.cursor.reposition(coord, VertexType::Point);
        self.cursor.is_selected = true;
        self.needs_redraw = true;
    }

    /// Removes the selected vertex. Refused, with no visible change, when
    /// the ring would drop below its minimum.
    pub fn delete_vertex(&mut self) -> bool {
        if !self.has_point_selection() {
            log::debug!("delete_vertex refused: no point selection");
            return false;
        }
        let index = self.selected[0];
        if !self.ring.remove_vertex(index) {
            return false;
        }
        self.clear_selection();
        if let Some(coord) = self.ring.get(0) {
            self.cursor.reposition(coord, VertexType::Line);
        }
        self.needs_redraw = true;
        true
    }

    /// Inserts a vertex at the edge point reported by the classifier and
    /// selects it.
    pub fn add_vertex(&mut self, hit: VertexHit, centre: Coord) -> bool {
        if !self.is_modify() {
            log::debug!("add_vertex refused in {:?}", self.phase());
            return false;
        }
        if classify(hit.coord, &self.ring) != VertexType::Line {
            log::debug!("add_vertex refused: hit is an existing vertex");
            return false;
        }
        let segment_end = self
            .ring
            .segment_end_through(hit.coord)
            .unwrap_or(hit.index);
        self.ring.insert_vertex(segment_end, hit.coord);
        self.selected = self.ring.selection_for(segment_end);
        self.vertex_offset = centre.offset_to(hit.coord);
        self.cursor.reposition(hit.coord, VertexType::Point);
        self.cursor.is_selected = true;
        self.needs_redraw = true;
        true
    }
}
