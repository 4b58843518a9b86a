//! Touch adapter: tap-to-select over the synthesized pointer.
//!
//! Touch has no native vertex-drag or multi-click gesture, so placing and
//! finishing go through the explicit toolbar buttons (which confirm at the
//! view centre). The one gesture that maps directly is the tap: the wiring
//! layer synthesizes a pointer-down at the tap pixel, reads back the hit,
//! and this adapter toggles selection from it.

use crate::engine::VertexHit;
use crate::geometry::Coord;

use super::{DrawPhase, DrawState, Effect};

impl DrawState {
    /// Processes a completed tap with the engine's hit readback.
    pub fn on_tap(&mut self, hit: Option<VertexHit>, centre: Coord) -> Vec<Effect> {
        match self.phase() {
            DrawPhase::Editing => {
                self.toggle_select(hit, centre);
                Vec::new()
            }
            // While Drawing the trailing vertex tracks the view centre via
            // on_view_drift; a tap places nothing by itself.
            DrawPhase::Drawing | DrawPhase::Idle => Vec::new(),
        }
    }

    /// Keeps the trailing sketch vertex on the view centre while the user
    /// drags the map underneath the cursor (touch pan, `moveend`).
    pub fn on_view_drift(&mut self, centre: Coord) {
        if self.is_draw() {
            self.track_cursor(centre);
        }
    }
}
