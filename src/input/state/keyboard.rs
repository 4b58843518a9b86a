//! Keyboard adapter: the view centre is the cursor.
//!
//! Arrow keys pan the map, so panning *is* moving the cursor. The wiring
//! layer pans the engine, synthesizes a pointer at the new centre, reads
//! back the hit, and calls [`DrawState::on_pan_tick`]; this adapter then
//! keeps the sketch, selection and cursor tracking that centre.

use crate::engine::VertexHit;
use crate::geometry::{Coord, VertexType};

use super::{DrawPhase, DrawState, Effect};

impl DrawState {
    /// Processes one pan step's worth of view movement.
    ///
    /// With a vertex selected, the selection is translocated through the
    /// offset captured at selection time; otherwise the cursor simply
    /// retargets whatever the hit testing found under the new centre.
    pub fn on_pan_tick(&mut self, centre: Coord, hit: Option<VertexHit>) {
        if self.is_draw() {
            self.track_cursor(centre);
        } else if self.is_modify() {
            if self.selected.is_empty() {
                match hit {
                    Some(hit) => self.cursor.reposition(hit.coord, hit.vertex_type),
                    None => self.cursor.reposition(centre, VertexType::Line),
                }
                self.needs_redraw = true;
            } else {
                self.move_selected_to(centre);
            }
        }
    }

    /// Enter/Space: place a vertex while Drawing (or start a draw while
    /// Idle), toggle selection or insert on an edge while Editing.
    pub fn on_confirm_key(&mut self, centre: Coord, hit: Option<VertexHit>) -> Vec<Effect> {
        match self.phase() {
            DrawPhase::Idle | DrawPhase::Drawing => self.confirm_point(centre),
            DrawPhase::Editing => {
                match hit {
                    Some(hit) if hit.vertex_type == VertexType::Line => {
                        self.add_vertex(hit, centre);
                    }
                    other => self.toggle_select(other, centre),
                }
                Vec::new()
            }
        }
    }

    /// Delete/Backspace: cancel the in-progress draw, or remove the
    /// selected vertex (refused at the ring minimum).
    pub fn on_delete_key(&mut self) -> Vec<Effect> {
        match self.phase() {
            DrawPhase::Drawing => self.delete_drawing(),
            DrawPhase::Editing => {
                self.delete_vertex();
                Vec::new()
            }
            DrawPhase::Idle => Vec::new(),
        }
    }
}
