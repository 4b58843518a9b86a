//! Configuration file support.
//!
//! Settings load from `~/.config/floodmap-draw/config.toml`: initial view,
//! interaction tuning and keybindings. A missing file means defaults;
//! out-of-range values are clamped with a warning rather than rejected.

pub mod keybindings;
pub mod types;

pub use keybindings::{KeyAction, KeyBinding, KeybindingsConfig};
pub use types::{MapConfig, UiConfig};

use anyhow::{Context, Result};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Root configuration, deserialized from the TOML file.
///
/// # Example TOML
/// ```toml
/// [map]
/// centre = [-0.125, 51.5]
/// zoom = 8.0
///
/// [ui]
/// pan_step_px = 10.0
/// precision_step_px = 1.0
///
/// [keys]
/// confirm = ["Enter", "Space"]
/// finish = ["f"]
/// delete = ["Delete", "Backspace", "Escape"]
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub map: MapConfig,

    #[serde(default)]
    pub ui: UiConfig,

    #[serde(default)]
    pub keys: KeybindingsConfig,
}

impl Config {
    /// Loads from the default location, falling back to defaults when the
    /// file does not exist.
    pub fn load() -> Result<Self> {
        match Self::default_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            Some(path) => {
                debug!("no config file at {}, using defaults", path.display());
                Ok(Self::validated_default())
            }
            None => {
                debug!("no config directory available, using defaults");
                Ok(Self::validated_default())
            }
        }
    }

    /// Loads and validates a specific config file.
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        let mut config: Config = toml::from_str(&contents)
            .with_context(|| format!("failed to parse config file {}", path.display()))?;
        config.validate_and_clamp();
        config
            .keys
            .build_action_map()
            .map_err(|e| anyhow::anyhow!("invalid keybindings in {}: {e}", path.display()))?;
        info!("loaded config from {}", path.display());
        Ok(config)
    }

    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("floodmap-draw").join("config.toml"))
    }

    fn validated_default() -> Self {
        let mut config = Self::default();
        config.validate_and_clamp();
        config
    }

    /// Clamps out-of-range values to their nearest valid value.
    ///
    /// Ranges:
    /// - `map.zoom`: 0.0 - 18.0
    /// - `ui.pan_step_px`: 1.0 - 100.0
    /// - `ui.precision_step_px`: 1.0 - `pan_step_px`
    /// - `ui.double_click_restore_ms`: up to 5000
    fn validate_and_clamp(&mut self) {
        if !(0.0..=18.0).contains(&self.map.zoom) {
            log::warn!("invalid zoom {:.1}, clamping to 0-18", self.map.zoom);
            self.map.zoom = self.map.zoom.clamp(0.0, 18.0);
        }

        if !(1.0..=100.0).contains(&self.ui.pan_step_px) {
            log::warn!(
                "invalid pan_step_px {:.1}, clamping to 1-100",
                self.ui.pan_step_px
            );
            self.ui.pan_step_px = self.ui.pan_step_px.clamp(1.0, 100.0);
        }

        if !(1.0..=self.ui.pan_step_px).contains(&self.ui.precision_step_px) {
            log::warn!(
                "invalid precision_step_px {:.1}, clamping to 1-{:.1}",
                self.ui.precision_step_px,
                self.ui.pan_step_px
            );
            self.ui.precision_step_px = self.ui.precision_step_px.clamp(1.0, self.ui.pan_step_px);
        }

        if self.ui.double_click_restore_ms > 5000 {
            log::warn!(
                "invalid double_click_restore_ms {}, clamping to 5000",
                self.ui.double_click_restore_ms
            );
            self.ui.double_click_restore_ms = 5000;
        }
    }
}
