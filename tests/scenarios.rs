//! End-to-end drawing scenarios over the full wiring: headless engine,
//! mode dispatcher, adapters and render sync.

use floodmap_draw::engine::{HeadlessEngine, MapEngine};
use floodmap_draw::geometry::{Coord, Pixel};
use floodmap_draw::input::{InputEvent, InterfaceMode, Key, PointerButton};
use floodmap_draw::render::CursorStyle;
use floodmap_draw::{Config, DrawMap, MapOptions, create_draw_map};

fn c(x: f64, y: f64) -> Coord {
    Coord::new(x, y)
}

/// Zoom 8 gives the headless engine a resolution of exactly one map unit
/// per pixel, so the default 10 px pan step moves the centre by 10 units.
fn new_map() -> DrawMap<HeadlessEngine> {
    let centre = c(0.0, 0.0);
    let engine = HeadlessEngine::new(centre, 8.0);
    create_draw_map(engine, MapOptions { centre, zoom: 8.0 }, &Config::default())
}

fn key(map: &mut DrawMap<HeadlessEngine>, key: Key) {
    map.handle_event(InputEvent::KeyDown {
        key,
        shift: false,
        ctrl: false,
        alt: false,
        caps_lock: false,
    });
}

fn precise_key(map: &mut DrawMap<HeadlessEngine>, key: Key) {
    map.handle_event(InputEvent::KeyDown {
        key,
        shift: true,
        ctrl: false,
        alt: false,
        caps_lock: false,
    });
}

fn tap_at_coord(map: &mut DrawMap<HeadlessEngine>, coord: Coord) {
    let pixel = map.engine().pixel_at_coord(coord);
    map.handle_event(InputEvent::TouchStart { pixel });
    map.handle_event(InputEvent::TouchEnd { pixel });
}

/// Keyboard-draws the triangle (0,0) (30,0) (30,30) and finishes it. The
/// sides span three pan steps so edge midpoints sit well outside the
/// engine's 10 px hit tolerance around the corner vertices.
fn draw_triangle(map: &mut DrawMap<HeadlessEngine>) {
    map.press_start_drawing();
    map.press_confirm_point();
    for _ in 0..3 {
        key(map, Key::ArrowRight);
    }
    map.press_confirm_point();
    for _ in 0..3 {
        key(map, Key::ArrowUp);
    }
    map.press_confirm_point();
    map.press_finish_shape();
}

#[test]
fn keyboard_draw_produces_closed_triangle() {
    let mut map = new_map();
    draw_triangle(&mut map);

    assert!(map.state().is_modify());
    assert_eq!(
        map.state().ring.coords(),
        &[c(0.0, 0.0), c(30.0, 0.0), c(30.0, 30.0), c(0.0, 0.0)]
    );
    // Render sync pushed the polygon to the engine
    assert_eq!(
        map.engine().frame().polygon.as_deref(),
        Some(map.state().ring.coords())
    );
}

#[test]
fn finish_pressed_twice_changes_nothing() {
    let mut map = new_map();
    draw_triangle(&mut map);
    let ring = map.state().ring.coords().to_vec();

    map.press_finish_shape();
    assert!(map.state().is_modify());
    assert_eq!(map.state().ring.coords(), ring.as_slice());
}

#[test]
fn keyboard_select_and_pan_moves_only_that_vertex() {
    let mut map = new_map();
    draw_triangle(&mut map);

    // Walk the view centre back onto the vertex at (30, 0)
    for _ in 0..3 {
        key(&mut map, Key::ArrowDown);
    }
    assert_eq!(map.engine().view_center(), c(30.0, 0.0));

    // Toggle selection of the vertex under the keyboard cursor
    key(&mut map, Key::Enter);
    assert_eq!(map.state().selected, vec![1]);

    // Five precision steps east: the vertex tracks the view centre
    for _ in 0..5 {
        precise_key(&mut map, Key::ArrowRight);
    }
    let ring = map.state().ring.coords();
    assert_eq!(ring[1], c(35.0, 0.0));
    assert_eq!(ring[0], c(0.0, 0.0));
    assert_eq!(ring[3], c(0.0, 0.0));
}

#[test]
fn vertex_deletes_stop_at_the_ring_minimum() {
    let mut map = new_map();
    draw_triangle(&mut map);

    // Grow the triangle to five vertices via edge insertions
    for edge_mid in [c(15.0, 0.0), c(30.0, 15.0)] {
        map.engine_mut().simulate_pointer_at(edge_mid);
        map.press_add_vertex();
    }
    assert_eq!(map.state().ring.distinct_len(), 5);

    // The second insertion left its vertex selected; first delete
    assert_eq!(map.state().ring.coords()[3], c(30.0, 15.0));
    map.press_delete_vertex();
    assert_eq!(map.state().ring.distinct_len(), 4);

    // Select the midpoint vertex by tapping it, then delete
    tap_at_coord(&mut map, c(15.0, 0.0));
    assert_eq!(map.state().selected, vec![1]);
    map.press_delete_vertex();
    assert_eq!(map.state().ring.distinct_len(), 3);

    // Third delete: refused, ring unchanged
    tap_at_coord(&mut map, c(30.0, 0.0));
    let before = map.state().ring.coords().to_vec();
    map.press_delete_vertex();
    assert_eq!(map.state().ring.coords(), before.as_slice());
    assert_eq!(map.state().ring.distinct_len(), 3);
}

#[test]
fn keydown_mid_draw_switches_to_synthesized_path() {
    let mut map = new_map();
    map.press_start_drawing();

    // Two vertices placed with native mouse clicks; the viewport centre
    // pixel is (400, 300) in the headless engine
    map.handle_event(InputEvent::PointerDown {
        pixel: Pixel::new(400.0, 300.0),
        button: PointerButton::Primary,
    });
    map.handle_event(InputEvent::PointerDown {
        pixel: Pixel::new(420.0, 300.0),
        button: PointerButton::Primary,
    });
    assert_eq!(map.mode(), InterfaceMode::Mouse);

    // A keydown flips the modality mid-draw
    key(&mut map, Key::ArrowUp);
    assert_eq!(map.mode(), InterfaceMode::Keyboard);

    // Confirm now places at the view centre, not at any pointer position
    key(&mut map, Key::Enter);
    let confirmed = map.state().sketch.confirmed();
    assert_eq!(confirmed.len(), 3);
    assert_eq!(*confirmed.last().unwrap(), map.engine().view_center());
}

#[test]
fn touch_tap_selects_and_second_tap_deselects() {
    let mut map = new_map();
    draw_triangle(&mut map);

    tap_at_coord(&mut map, c(30.0, 30.0));
    assert_eq!(map.mode(), InterfaceMode::Touch);
    assert_eq!(map.state().selected, vec![2]);

    tap_at_coord(&mut map, c(30.0, 30.0));
    assert!(map.state().selected.is_empty());
}

#[test]
fn selecting_closing_vertex_moves_both_ends() {
    let mut map = new_map();
    draw_triangle(&mut map);

    tap_at_coord(&mut map, c(0.0, 0.0));
    assert_eq!(map.state().selected, vec![0, 3]);

    // Move it with the keyboard: selection re-anchors to the view centre
    key(&mut map, Key::ArrowLeft);
    let ring = map.state().ring.coords();
    assert_eq!(ring[0], ring[3]);
    assert_ne!(ring[0], c(0.0, 0.0));
}

#[test]
fn double_click_zoom_suspended_only_while_drawing() {
    let mut map = new_map();
    assert!(map.engine().double_click_zoom_enabled());

    map.press_start_drawing();
    assert!(!map.engine().double_click_zoom_enabled());

    map.press_confirm_point();
    key(&mut map, Key::ArrowRight);
    map.press_confirm_point();
    key(&mut map, Key::ArrowUp);
    map.press_confirm_point();
    map.press_finish_shape();
    // The headless engine restores immediately rather than after a delay
    assert!(map.engine().double_click_zoom_enabled());
}

#[test]
fn keyboard_cursor_layer_follows_selection_state() {
    let mut map = new_map();
    draw_triangle(&mut map);

    // Keyboard mode, nothing selected: generic cursor layer visible
    key(&mut map, Key::ArrowDown);
    assert!(map.engine().frame().keyboard_cursor.is_some());

    // Selecting a vertex replaces it with vertex-specific styling
    key(&mut map, Key::Enter);
    let frame = map.engine().frame();
    assert!(frame.keyboard_cursor.is_none());
    assert_eq!(
        frame.cursor.map(|sprite| sprite.style),
        Some(CursorStyle::SelectedVertex)
    );
}

#[test]
fn buttons_follow_mode_and_phase() {
    let mut map = new_map();

    // Idle: only the start affordance
    assert!(map.engine().frame().buttons.start_drawing);
    assert!(!map.engine().frame().buttons.confirm_point);

    // Keyboard mode so the explicit buttons apply
    key(&mut map, Key::ArrowRight);
    key(&mut map, Key::ArrowLeft);
    map.press_start_drawing();
    let buttons = map.engine().frame().buttons;
    assert!(buttons.confirm_point);
    assert!(!buttons.finish_shape); // nothing confirmed yet
    assert!(buttons.delete_drawing);

    map.press_confirm_point();
    key(&mut map, Key::ArrowRight);
    map.press_confirm_point();
    key(&mut map, Key::ArrowUp);
    map.press_confirm_point();
    assert!(map.engine().frame().buttons.finish_shape);
}

#[test]
fn delete_drawing_returns_everything_to_idle() {
    let mut map = new_map();
    draw_triangle(&mut map);

    map.press_delete_drawing();
    assert!(map.state().is_idle());
    assert!(map.engine().frame().polygon.is_none());
    assert!(map.engine().frame().cursor.is_none());
    assert!(map.polygon_geojson().is_none());
}

#[test]
fn geojson_output_matches_ring() {
    let mut map = new_map();
    draw_triangle(&mut map);

    let geojson = map.polygon_geojson().unwrap();
    assert_eq!(geojson["type"], "Polygon");
    assert_eq!(
        geojson["coordinates"][0],
        serde_json::json!([[0.0, 0.0], [30.0, 0.0], [30.0, 30.0], [0.0, 0.0]])
    );
}
