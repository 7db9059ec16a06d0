//! Belt scatter rendering.
//!
//! Belt points are tiny gray "+" gizmos with a constant on-screen size, the
//! 3D equivalent of a one-pixel scatter plot.

use bevy::prelude::*;

use crate::camera::MainCamera;
use crate::render::bodies::draw_plus;
use crate::render::{srgb, to_render};
use crate::scene::SolarScene;

/// Belt color, also used by the legend.
pub const BELT_COLOR: [f32; 3] = [0.5, 0.5, 0.5];

#[derive(Resource)]
pub struct BeltSettings {
    pub visible: bool,
    pub alpha: f32,
    /// Marker half-size as a fraction of camera distance.
    pub point_size: f32,
}

impl Default for BeltSettings {
    fn default() -> Self {
        Self {
            visible: true,
            alpha: 0.4,
            point_size: 0.0015,
        }
    }
}

pub fn draw_belts(
    mut gizmos: Gizmos,
    settings: Res<BeltSettings>,
    scene: Res<SolarScene>,
    camera: Query<&GlobalTransform, With<MainCamera>>,
) {
    if !settings.visible || scene.belts.is_empty() {
        return;
    }
    let Ok(camera_transform) = camera.single() else {
        return;
    };
    let eye = camera_transform.translation();
    let color = srgb(BELT_COLOR, settings.alpha);

    for cloud in &scene.belts {
        for &p in &cloud.points {
            let pos = to_render(p);
            draw_plus(&mut gizmos, pos, pos.distance(eye) * settings.point_size, color);
        }
    }
}
