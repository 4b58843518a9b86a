//! Polygon drawing subsystem for the flood warning map.
//!
//! Lets a user author and edit a single area-of-interest polygon with mouse,
//! touch or keyboard, keeping one coherent ring geometry and selection state
//! across all three modalities. The mapping engine sits behind the
//! [`engine::MapEngine`] trait; [`map::create_draw_map`] assembles the whole
//! subsystem against it.

pub mod config;
pub mod engine;
pub mod geometry;
pub mod input;
pub mod map;
pub mod render;
pub mod replay;
pub mod ui;
pub mod util;

pub use config::Config;
pub use map::{DrawMap, MapOptions, create_draw_map};
