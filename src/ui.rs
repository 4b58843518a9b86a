//! Control-button visibility for the map toolbar.
//!
//! Affordances differ per modality: mouse users place and drag vertices with
//! native gestures, so they only see start/delete; touch and keyboard users
//! have no drag gesture and get explicit confirm/finish/add/delete buttons.

use crate::geometry::VertexType;
use crate::input::mode::InterfaceMode;
use crate::input::state::DrawState;
use serde::Serialize;

/// Which of the injected action buttons are currently shown.
///
/// A hidden button is also a disabled operation: invoking it anyway is a
/// silent no-op in the state machine, never an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct ButtonSet {
    pub start_drawing: bool,
    pub confirm_point: bool,
    pub finish_shape: bool,
    pub delete_drawing: bool,
    pub add_vertex: bool,
    pub delete_vertex: bool,
}

/// Computes button visibility for the current mode and state.
pub fn buttons_for(mode: InterfaceMode, state: &DrawState) -> ButtonSet {
    let explicit = matches!(mode, InterfaceMode::Touch | InterfaceMode::Keyboard);

    let mut buttons = ButtonSet::default();
    if state.is_idle() {
        buttons.start_drawing = true;
        return buttons;
    }

    buttons.delete_drawing = true;

    if state.is_draw() {
        buttons.confirm_point = explicit;
        buttons.finish_shape = explicit && state.can_finish();
    } else if state.is_modify() && explicit {
        match state.cursor.vertex_type {
            VertexType::Line => buttons.add_vertex = true,
            VertexType::Point => {
                buttons.delete_vertex = state.cursor.is_selected && state.can_delete_vertex();
            }
        }
    }
    buttons
}
