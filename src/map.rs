//! The drawing map: wiring between engine, mode dispatcher, state machine
//! and render sync.
//!
//! [`create_draw_map`] is the subsystem's only public entry point. Raw
//! events flow dispatcher-first (setting the interface mode), then through
//! the adapter for that mode, then mutate the state, and render sync runs
//! before the call returns, so the visible layers never trail the geometry.

use crate::config::{Config, KeyAction, KeyBinding};
use crate::engine::MapEngine;
use crate::geometry::Coord;
use crate::input::{
    DrawState, Effect, InputEvent, InterfaceMode, Key, ModeDispatcher, PointerButton,
};
use crate::render;
use std::collections::HashMap;
use std::time::Duration;

/// Initial view for the drawing map, as passed by the host page.
#[derive(Debug, Clone, Copy)]
pub struct MapOptions {
    pub centre: Coord,
    pub zoom: f64,
}

/// The assembled drawing subsystem.
pub struct DrawMap<E: MapEngine> {
    engine: E,
    dispatcher: ModeDispatcher,
    state: DrawState,
    pan_step_px: f64,
    precision_step_px: f64,
    zoom_restore_delay: Duration,
    actions: HashMap<KeyBinding, KeyAction>,
}

/// Instantiates the whole subsystem against an engine wrapping the host
/// container.
pub fn create_draw_map<E: MapEngine>(
    mut engine: E,
    options: MapOptions,
    config: &Config,
) -> DrawMap<E> {
    engine.set_view_center(options.centre);
    engine.set_zoom(options.zoom);
    log::info!(
        "draw map created at ({:.4}, {:.4}) zoom {:.1}",
        options.centre.x,
        options.centre.y,
        options.zoom
    );

    let actions = config
        .keys
        .build_action_map()
        .unwrap_or_else(|e| {
            log::warn!("invalid keybindings ({e}), using defaults");
            crate::config::KeybindingsConfig::default()
                .build_action_map()
                .unwrap_or_default()
        });

    let mut map = DrawMap {
        state: DrawState::new(options.centre),
        dispatcher: ModeDispatcher::new(),
        pan_step_px: config.ui.pan_step_px,
        precision_step_px: config.ui.precision_step_px,
        zoom_restore_delay: Duration::from_millis(config.ui.double_click_restore_ms),
        actions,
        engine,
    };
    map.sync_render();
    map
}

impl<E: MapEngine> DrawMap<E> {
    pub fn state(&self) -> &DrawState {
        &self.state
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// The host page keeps its own handle on the engine for concerns outside
    /// this subsystem (zoom controls, base layers).
    pub fn engine_mut(&mut self) -> &mut E {
        &mut self.engine
    }

    pub fn mode(&self) -> InterfaceMode {
        self.dispatcher.current()
    }

    /// Routes one raw event: dispatcher first, then the adapter whose
    /// modality matches. Events that reach the wrong adapter (a pointer-up
    /// trailing a touch gesture, say) are dropped here.
    pub fn handle_event(&mut self, event: InputEvent) {
        let mode = self.dispatcher.observe(&event);

        match event {
            InputEvent::PointerDown { pixel, button } if mode == InterfaceMode::Mouse => {
                if button == PointerButton::Primary {
                    let coord = self.engine.coord_at_pixel(pixel);
                    self.engine.simulate_pointer_at(coord);
                    let hit = self.engine.hovered_vertex();
                    let centre = self.engine.view_center();
                    let effects = self.state.on_pointer_down(coord, hit, centre);
                    self.apply(effects);
                }
            }
            InputEvent::PointerMove { pixel } if mode == InterfaceMode::Mouse => {
                let coord = self.engine.coord_at_pixel(pixel);
                self.engine.simulate_pointer_at(coord);
                self.state.on_pointer_move(coord);
            }
            InputEvent::PointerUp { .. } if mode == InterfaceMode::Mouse => {
                self.state.on_pointer_up();
            }
            InputEvent::DoubleClick { .. } if mode == InterfaceMode::Mouse => {
                let effects = self.state.on_double_click();
                self.apply(effects);
            }
            InputEvent::TouchEnd { pixel } if mode == InterfaceMode::Touch => {
                // A completed tap: synthesize a pointer-down at the tap
                // pixel and read back which vertex, if any, it landed on.
                let coord = self.engine.coord_at_pixel(pixel);
                self.engine.simulate_pointer_at(coord);
                let hit = self.engine.hovered_vertex();
                let centre = self.engine.view_center();
                let effects = self.state.on_tap(hit, centre);
                self.apply(effects);
            }
            InputEvent::TouchMove { .. } if mode == InterfaceMode::Touch => {
                // The engine pans itself under the finger; keep the sketch
                // trailing vertex pinned to the moving view centre.
                self.state.on_view_drift(self.engine.view_center());
            }
            InputEvent::KeyDown {
                key,
                shift,
                ctrl,
                alt,
                caps_lock,
            } => {
                self.handle_key(key, shift || caps_lock, ctrl, alt);
            }
            _ => {
                log::debug!("event {event:?} ignored in mode {mode:?}");
            }
        }

        if self.state.needs_redraw {
            self.sync_render();
        }
    }

    fn handle_key(&mut self, key: Key, precision: bool, ctrl: bool, alt: bool) {
        if let Some((dx, dy)) = key.pan_direction() {
            let step = if precision {
                self.precision_step_px
            } else {
                self.pan_step_px
            };
            self.engine.pan_by_pixels(dx * step, dy * step);
            // Panning moved the keyboard cursor; re-synthesize the pointer
            // at the new centre so the engine's hover tracks it.
            let (centre, hit) = self.synthesize_pointer_at_centre();
            self.state.on_pan_tick(centre, hit);
            return;
        }

        let Some(name) = key.name() else { return };
        let action = self
            .actions
            .iter()
            .find(|(binding, _)| binding.matches(&name, ctrl, alt))
            .map(|(_, action)| *action);

        match action {
            Some(KeyAction::Confirm) => {
                let (centre, hit) = self.synthesize_pointer_at_centre();
                let effects = self.state.on_confirm_key(centre, hit);
                self.apply(effects);
            }
            Some(KeyAction::Finish) => {
                let effects = self.state.finish_shape();
                self.apply(effects);
            }
            Some(KeyAction::Delete) => {
                let effects = self.state.on_delete_key();
                self.apply(effects);
            }
            None => {}
        }
    }

    // Toolbar button operations, injected into the page chrome's buttons
    // region. Hidden buttons invoke the same paths and no-op harmlessly.

    pub fn press_start_drawing(&mut self) {
        let centre = self.engine.view_center();
        let effects = self.state.start_draw(centre);
        self.apply(effects);
        self.sync_if_dirty();
    }

    /// Confirms a vertex at the view centre via the synthesized pointer:
    /// the one primitive that lets touch and keyboard share the engine's
    /// mouse-only drawing path.
    pub fn press_confirm_point(&mut self) {
        let (centre, _) = self.synthesize_pointer_at_centre();
        let effects = self.state.confirm_point(centre);
        self.apply(effects);
        self.sync_if_dirty();
    }

    pub fn press_finish_shape(&mut self) {
        let effects = self.state.finish_shape();
        self.apply(effects);
        self.sync_if_dirty();
    }

    pub fn press_delete_drawing(&mut self) {
        let effects = self.state.delete_drawing();
        self.apply(effects);
        self.sync_if_dirty();
    }

    pub fn press_add_vertex(&mut self) {
        // The hover from the last tap or pan tick is the insertion target.
        if let Some(hit) = self.engine.hovered_vertex() {
            let centre = self.engine.view_center();
            self.state.add_vertex(hit, centre);
        }
        self.sync_if_dirty();
    }

    pub fn press_delete_vertex(&mut self) {
        self.state.delete_vertex();
        self.sync_if_dirty();
    }

    /// The completed polygon as a GeoJSON geometry, once one exists.
    pub fn polygon_geojson(&self) -> Option<serde_json::Value> {
        if !self.state.ring.is_closed() {
            return None;
        }
        let ring: Vec<[f64; 2]> = self
            .state
            .ring
            .coords()
            .iter()
            .map(|c| [c.x, c.y])
            .collect();
        Some(serde_json::json!({
            "type": "Polygon",
            "coordinates": [ring],
        }))
    }

    fn synthesize_pointer_at_centre(&mut self) -> (Coord, Option<crate::engine::VertexHit>) {
        let centre = self.engine.view_center();
        self.engine.simulate_pointer_at(centre);
        (centre, self.engine.hovered_vertex())
    }

    fn apply(&mut self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::SuspendDoubleClickZoom => self.engine.set_double_click_zoom(false),
                Effect::RestoreDoubleClickZoom => self
                    .engine
                    .restore_double_click_zoom_after(self.zoom_restore_delay),
            }
        }
    }

    fn sync_if_dirty(&mut self) {
        if self.state.needs_redraw {
            self.sync_render();
        }
    }

    fn sync_render(&mut self) {
        let frame = render::sync(
            &self.state,
            self.dispatcher.current(),
            self.engine.view_center(),
            self.dispatcher.focus_tagged(),
        );
        self.engine.render(&frame);
        self.state.needs_redraw = false;
    }
}
