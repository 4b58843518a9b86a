//! Configuration section types.

use serde::{Deserialize, Serialize};

/// Initial view settings for the drawing map.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapConfig {
    /// Initial view centre as `[x, y]` map units
    #[serde(default = "default_centre")]
    pub centre: [f64; 2],
    /// Initial zoom level
    #[serde(default = "default_zoom")]
    pub zoom: f64,
}

fn default_centre() -> [f64; 2] {
    // Westminster, in the flat stand-in projection
    [-0.125, 51.5]
}

fn default_zoom() -> f64 {
    8.0
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            centre: default_centre(),
            zoom: default_zoom(),
        }
    }
}

/// Interaction tuning for the keyboard and touch adapters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Arrow-key pan step in device pixels
    #[serde(default = "default_pan_step")]
    pub pan_step_px: f64,
    /// Pan step with the precision modifier (Shift or CapsLock) held
    #[serde(default = "default_precision_step")]
    pub precision_step_px: f64,
    /// Delay before double-click zoom is restored after a draw ends, ms
    #[serde(default = "default_restore_ms")]
    pub double_click_restore_ms: u64,
}

fn default_pan_step() -> f64 {
    10.0
}

fn default_precision_step() -> f64 {
    1.0
}

fn default_restore_ms() -> u64 {
    300
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            pan_step_px: default_pan_step(),
            precision_step_px: default_precision_step(),
            double_click_restore_ms: default_restore_ms(),
        }
    }
}
