//! Orrery3D - static 3D model of the solar system
//!
//! Library crate exposing the orbit geometry, body catalog, belt generator
//! and scene builder, plus the Bevy plugins that draw them.

pub mod belt;
pub mod camera;
pub mod catalog;
pub mod orbit;
pub mod render;
pub mod scene;
pub mod settings;
pub mod types;
pub mod ui;
