//! Render sync: turns the geometry state into the visual layer model.
//!
//! Runs after every state mutation, so the sketch line, cursor style and
//! keyboard-cursor visibility never reflect a stale geometry. The engine
//! consumes the resulting [`FrameModel`] verbatim; no drawing happens here.

use crate::geometry::{Coord, VertexType};
use crate::input::mode::InterfaceMode;
use crate::input::state::DrawState;
use crate::ui::{ButtonSet, buttons_for};
use serde::Serialize;

/// Visual style of the cursor point, keyed on selection and vertex type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum CursorStyle {
    /// Next candidate vertex while drawing
    Candidate,
    /// Hovering an existing vertex, not selected
    Vertex,
    /// An explicitly selected vertex
    SelectedVertex,
    /// A point on an edge: insertion candidate
    Edge,
}

/// The single cursor point feature as the engine should display it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CursorSprite {
    pub coord: Coord,
    pub style: CursorStyle,
}

/// Everything the engine needs to redraw the drawing overlay layers.
#[derive(Debug, Clone, Default, Serialize)]
pub struct FrameModel {
    /// In-progress sketch line, confirmed coordinates plus trailing vertex
    pub sketch_line: Vec<Coord>,
    /// The completed ring, once one exists
    pub polygon: Option<Vec<Coord>>,
    pub cursor: Option<CursorSprite>,
    /// View-centre marker for keyboard users; `None` hides the layer
    pub keyboard_cursor: Option<Coord>,
    pub buttons: ButtonSet,
    /// Whether the focused element should carry visible focus styling
    pub focus_styling: bool,
}

/// Recomputes the frame model from the current state.
///
/// The keyboard-cursor layer is visible whenever keyboard mode is active and
/// no point-type vertex is selected; a selection visually replaces the
/// generic cursor with vertex-specific styling.
pub fn sync(
    state: &DrawState,
    mode: InterfaceMode,
    view_center: Coord,
    focus_tagged: bool,
) -> FrameModel {
    let cursor = if state.is_idle() {
        None
    } else {
        let style = match (state.cursor.is_selected, state.cursor.vertex_type) {
            (_, VertexType::Line) if state.is_draw() => CursorStyle::Candidate,
            (true, VertexType::Point) => CursorStyle::SelectedVertex,
            (false, VertexType::Point) => CursorStyle::Vertex,
            (_, VertexType::Line) => CursorStyle::Edge,
        };
        Some(CursorSprite {
            coord: state.cursor.coord,
            style,
        })
    };

    let point_selected =
        state.cursor.is_selected && state.cursor.vertex_type == VertexType::Point;
    let keyboard_cursor = if mode == InterfaceMode::Keyboard && !point_selected {
        Some(view_center)
    } else {
        None
    };

    FrameModel {
        sketch_line: state.sketch.coords().to_vec(),
        polygon: if state.ring.is_closed() {
            Some(state.ring.coords().to_vec())
        } else {
            None
        },
        cursor,
        keyboard_cursor,
        buttons: buttons_for(mode, state),
        focus_styling: focus_tagged && mode == InterfaceMode::Keyboard,
    }
}
