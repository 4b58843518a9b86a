//! Mouse adapter: native click drawing and gated vertex dragging.

use crate::engine::VertexHit;
use crate::geometry::{Coord, VertexType};

use super::{DrawPhase, DrawState, Effect};

impl DrawState {
    /// Processes a primary-button press at `coord`.
    ///
    /// While Drawing, a click places a vertex (the engine's native
    /// click-drag-click authoring). While Editing, the modify condition
    /// applies: a press on a vertex that is already selected begins a drag;
    /// a press on an unselected vertex only selects it. That explicit
    /// select-before-drag step is what prevents accidental edge insertion on
    /// every pointer-down.
    pub fn on_pointer_down(
        &mut self,
        coord: Coord,
        hit: Option<VertexHit>,
        centre: Coord,
    ) -> Vec<Effect> {
        match self.phase() {
            DrawPhase::Drawing => self.confirm_point(coord),
            DrawPhase::Editing => {
                match hit {
                    Some(hit)
                        if hit.vertex_type == VertexType::Point
                            && self.cursor.is_selected
                            && self.selected.contains(&hit.index) =>
                    {
                        self.dragging = true;
                    }
                    other => self.toggle_select(other, centre),
                }
                Vec::new()
            }
            // A bare map click while Idle pans/inspects the map; drawing
            // starts from the explicit toolbar action.
            DrawPhase::Idle => Vec::new(),
        }
    }

    /// Processes pointer motion: sketch tracking while Drawing, vertex drag
    /// while one is grabbed.
    pub fn on_pointer_move(&mut self, coord: Coord) {
        if self.is_draw() {
            self.track_cursor(coord);
        } else if self.dragging {
            self.drag_selected_to(coord);
        }
    }

    pub fn on_pointer_up(&mut self) {
        self.dragging = false;
    }

    /// Double-click ends the draw; harmless otherwise since
    /// [`finish_shape`](DrawState::finish_shape) refuses outside Drawing.
    pub fn on_double_click(&mut self) -> Vec<Effect> {
        self.finish_shape()
    }
}
