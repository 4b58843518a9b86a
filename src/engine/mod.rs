//! The map-engine adapter seam.
//!
//! Everything this subsystem needs from the underlying mapping engine is
//! declared here as one trait, instead of reaching into engine internals at
//! the call sites. The synthesized-pointer pair
//! ([`MapEngine::simulate_pointer_at`] + [`MapEngine::hovered_vertex`]) is
//! the deliberate, narrow coupling point: it is how touch and keyboard input
//! drive behaviour the engine otherwise reserves for mouse gestures.

pub mod headless;

pub use headless::HeadlessEngine;

use crate::geometry::{Coord, Pixel, VertexType};
use crate::render::FrameModel;
use std::time::Duration;

/// A vertex candidate reported by the engine's hit testing.
///
/// `Point` hits carry the exact coordinate of an existing ring vertex and
/// its index; `Line` hits carry the snapped point on the edge and the index
/// of the vertex that ends that edge (the insertion position).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VertexHit {
    pub coord: Coord,
    pub vertex_type: VertexType,
    pub index: usize,
}

/// Operations the drawing subsystem requires from the host mapping engine.
///
/// Implementations wrap a real engine (view, interactions, layers); the
/// built-in [`HeadlessEngine`] provides a flat-projection stand-in for tests
/// and the replay binary.
pub trait MapEngine {
    /// Geographic coordinate at the middle of the viewport, in map units.
    fn view_center(&self) -> Coord;

    fn set_view_center(&mut self, centre: Coord);

    fn zoom(&self) -> f64;

    fn set_zoom(&mut self, zoom: f64);

    /// Map units per device pixel at the current zoom.
    fn resolution(&self) -> f64;

    /// Pans the view by a pixel delta (screen coordinates, y down).
    fn pan_by_pixels(&mut self, dx: f64, dy: f64);

    fn coord_at_pixel(&self, pixel: Pixel) -> Coord;

    fn pixel_at_coord(&self, coord: Coord) -> Pixel;

    /// Feeds a programmatic pointer position into the engine's hit testing,
    /// as if the mouse had moved there. Must complete synchronously,
    /// including any nested hover updates, before returning.
    fn simulate_pointer_at(&mut self, coord: Coord);

    /// The vertex candidate under the last (real or synthesized) pointer
    /// position, snapped to an existing vertex or an edge point.
    fn hovered_vertex(&self) -> Option<VertexHit>;

    /// Enables or disables the engine's double-click-to-zoom gesture.
    fn set_double_click_zoom(&mut self, enabled: bool);

    /// Re-enables double-click zoom after `delay`, so the pair of clicks
    /// that ends a draw cannot trigger a zoom. The engine owns the timer.
    fn restore_double_click_zoom_after(&mut self, delay: Duration);

    /// Receives the recomputed visual layers after a state mutation.
    fn render(&mut self, frame: &FrameModel);
}
