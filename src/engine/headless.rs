//! Flat-projection engine used by the replay binary and the tests.
//!
//! Models just enough of a real mapping engine to exercise the subsystem:
//! a centre/zoom view, pixel transforms, and OpenLayers-style vertex hit
//! testing (a vertex within pixel tolerance wins over an edge point). No
//! drawing happens; rendered frames are kept for inspection.

use super::{MapEngine, VertexHit};
use crate::geometry::{Coord, Pixel, VertexType, coord::closest_point_on_segment};
use crate::render::FrameModel;
use std::time::Duration;

/// Hit-testing tolerance in device pixels, matching the modify interaction
/// of the real engine.
const HIT_TOLERANCE_PX: f64 = 10.0;

#[derive(Debug)]
pub struct HeadlessEngine {
    centre: Coord,
    zoom: f64,
    viewport: (f64, f64),
    pointer: Option<Coord>,
    frame: FrameModel,
    double_click_zoom: bool,
}

impl HeadlessEngine {
    pub fn new(centre: Coord, zoom: f64) -> Self {
        Self {
            centre,
            zoom,
            viewport: (800.0, 600.0),
            pointer: None,
            frame: FrameModel::default(),
            double_click_zoom: true,
        }
    }

    /// The last frame pushed by render sync.
    pub fn frame(&self) -> &FrameModel {
        &self.frame
    }

    pub fn double_click_zoom_enabled(&self) -> bool {
        self.double_click_zoom
    }

    fn hit_test(&self, pointer: Coord) -> Option<VertexHit> {
        let ring = self.frame.polygon.as_deref()?;
        let tolerance = HIT_TOLERANCE_PX * self.resolution();

        // Vertices first; the first of any equidistant pair wins, so the
        // shared closing vertex is always reported at index 0.
        let mut best: Option<(usize, f64)> = None;
        for (i, c) in ring.iter().enumerate() {
            let d = c.distance_to(pointer);
            if d <= tolerance && best.map_or(true, |(_, bd)| d < bd) {
                best = Some((i, d));
            }
        }
        if let Some((index, _)) = best {
            return Some(VertexHit {
                coord: ring[index],
                vertex_type: VertexType::Point,
                index,
            });
        }

        // Then edges, snapping to the closest point on the segment.
        let mut best_edge: Option<(usize, Coord, f64)> = None;
        for (i, pair) in ring.windows(2).enumerate() {
            let snapped = closest_point_on_segment(pointer, pair[0], pair[1]);
            let d = snapped.distance_to(pointer);
            if d <= tolerance && best_edge.map_or(true, |(_, _, bd)| d < bd) {
                best_edge = Some((i + 1, snapped, d));
            }
        }
        best_edge.map(|(index, coord, _)| VertexHit {
            coord,
            vertex_type: VertexType::Line,
            index,
        })
    }
}

impl MapEngine for HeadlessEngine {
    fn view_center(&self) -> Coord {
        self.centre
    }

    fn set_view_center(&mut self, centre: Coord) {
        self.centre = centre;
    }

    fn zoom(&self) -> f64 {
        self.zoom
    }

    fn set_zoom(&mut self, zoom: f64) {
        self.zoom = zoom;
    }

    fn resolution(&self) -> f64 {
        2f64.powf(8.0 - self.zoom)
    }

    fn pan_by_pixels(&mut self, dx: f64, dy: f64) {
        let res = self.resolution();
        // Screen y grows downwards, map y upwards
        self.centre = Coord::new(self.centre.x + dx * res, self.centre.y - dy * res);
    }

    fn coord_at_pixel(&self, pixel: Pixel) -> Coord {
        let res = self.resolution();
        Coord::new(
            self.centre.x + (pixel.x - self.viewport.0 / 2.0) * res,
            self.centre.y - (pixel.y - self.viewport.1 / 2.0) * res,
        )
    }

    fn pixel_at_coord(&self, coord: Coord) -> Pixel {
        let res = self.resolution();
        Pixel::new(
            (coord.x - self.centre.x) / res + self.viewport.0 / 2.0,
            (self.centre.y - coord.y) / res + self.viewport.1 / 2.0,
        )
    }

    fn simulate_pointer_at(&mut self, coord: Coord) {
        self.pointer = Some(coord);
    }

    fn hovered_vertex(&self) -> Option<VertexHit> {
        self.hit_test(self.pointer?)
    }

    fn set_double_click_zoom(&mut self, enabled: bool) {
        self.double_click_zoom = enabled;
    }

    fn restore_double_click_zoom_after(&mut self, delay: Duration) {
        // No real zoom gesture to guard against here, so restore at once.
        log::debug!("double-click zoom restore requested after {delay:?}");
        self.double_click_zoom = true;
    }

    fn render(&mut self, frame: &FrameModel) {
        self.frame = frame.clone();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::ButtonSet;

    fn engine_with_square() -> HeadlessEngine {
        let mut engine = HeadlessEngine::new(Coord::new(0.0, 0.0), 8.0);
        engine.render(&FrameModel {
            sketch_line: Vec::new(),
            polygon: Some(vec![
                Coord::new(0.0, 0.0),
                Coord::new(100.0, 0.0),
                Coord::new(100.0, 100.0),
                Coord::new(0.0, 100.0),
                Coord::new(0.0, 0.0),
            ]),
            cursor: None,
            keyboard_cursor: None,
            buttons: ButtonSet::default(),
            focus_styling: false,
        });
        engine
    }

    #[test]
    fn resolution_is_one_at_zoom_eight() {
        let engine = HeadlessEngine::new(Coord::new(0.0, 0.0), 8.0);
        assert_eq!(engine.resolution(), 1.0);
    }

    #[test]
    fn pan_right_moves_centre_east() {
        let mut engine = HeadlessEngine::new(Coord::new(0.0, 0.0), 8.0);
        engine.pan_by_pixels(10.0, 0.0);
        assert_eq!(engine.view_center(), Coord::new(10.0, 0.0));
        engine.pan_by_pixels(0.0, 10.0);
        assert_eq!(engine.view_center(), Coord::new(10.0, -10.0));
    }

    #[test]
    fn pixel_round_trip() {
        let engine = HeadlessEngine::new(Coord::new(50.0, 20.0), 8.0);
        let coord = Coord::new(62.0, 17.0);
        let back = engine.coord_at_pixel(engine.pixel_at_coord(coord));
        assert!((back.x - coord.x).abs() < 1e-9);
        assert!((back.y - coord.y).abs() < 1e-9);
    }

    #[test]
    fn vertex_hit_wins_within_tolerance() {
        let mut engine = engine_with_square();
        engine.simulate_pointer_at(Coord::new(102.0, 1.0));
        let hit = engine.hovered_vertex().unwrap();
        assert_eq!(hit.vertex_type, VertexType::Point);
        assert_eq!(hit.coord, Coord::new(100.0, 0.0));
        assert_eq!(hit.index, 1);
    }

    #[test]
    fn closing_vertex_reports_index_zero() {
        let mut engine = engine_with_square();
        engine.simulate_pointer_at(Coord::new(0.0, 0.0));
        let hit = engine.hovered_vertex().unwrap();
        assert_eq!(hit.index, 0);
    }

    #[test]
    fn edge_hit_snaps_to_segment() {
        let mut engine = engine_with_square();
        engine.simulate_pointer_at(Coord::new(50.0, 4.0));
        let hit = engine.hovered_vertex().unwrap();
        assert_eq!(hit.vertex_type, VertexType::Line);
        assert_eq!(hit.coord, Coord::new(50.0, 0.0));
        assert_eq!(hit.index, 1);
    }

    #[test]
    fn far_pointer_hits_nothing() {
        let mut engine = engine_with_square();
        engine.simulate_pointer_at(Coord::new(50.0, 50.0));
        assert!(engine.hovered_vertex().is_none());
    }
}
