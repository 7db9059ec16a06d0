//! Rendering systems for the solar system model.
//!
//! This module draws the precomputed `SolarScene`: body spheres, position
//! markers, orbit curves, belt scatter, the axis box and text labels.
//!
//! Model coordinates are kept as they are (z is "up"); the camera is set up
//! with +Z as its up vector instead of remapping axes.

mod axes;
pub mod belts;
pub mod bodies;
mod labels;
mod orbits;

use bevy::math::DVec3;
use bevy::prelude::*;
use bevy_egui::EguiPrimaryContextPass;

use self::axes::draw_axis_box;
use self::belts::{BeltSettings, draw_belts};
use self::bodies::{CelestialBodyPlugin, MarkerSettings, draw_position_markers};
use self::labels::{LabelSettings, draw_axis_titles, draw_body_labels};
use self::orbits::{OrbitPathSettings, draw_orbit_paths};
use crate::scene::log_scene_summary;

/// Render scale: 1 AU = 10 render units.
///
/// Keeps the ±100 AU plot cube and Sedna's aphelion (~940 AU) well inside f32
/// precision while leaving planet spheres at true scale.
pub const RENDER_SCALE: f64 = 10.0;

/// Convert a heliocentric AU position to render space.
pub fn to_render(p: DVec3) -> Vec3 {
    (p * RENDER_SCALE).as_vec3()
}

/// Color from catalog sRGB components.
pub fn srgb(color: [f32; 3], alpha: f32) -> Color {
    Color::srgba(color[0], color[1], color[2], alpha)
}

/// Plugin aggregating all rendering functionality.
pub struct RenderPlugin;

impl Plugin for RenderPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(CelestialBodyPlugin)
            .init_resource::<OrbitPathSettings>()
            .init_resource::<MarkerSettings>()
            .init_resource::<BeltSettings>()
            .init_resource::<LabelSettings>()
            .insert_resource(ClearColor(Color::srgb(0.02, 0.02, 0.04)))
            .add_systems(Startup, log_scene_summary)
            .add_systems(
                Update,
                (
                    draw_axis_box,
                    draw_orbit_paths,
                    draw_position_markers,
                    draw_belts,
                ),
            )
            .add_systems(EguiPrimaryContextPass, (draw_body_labels, draw_axis_titles));
    }
}
