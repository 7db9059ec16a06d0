//! Orbit path rendering using Bevy Gizmos.
//!
//! Planet and Moon orbits are solid polylines in the body's color. Dwarf
//! planets and asteroids get a faint dashed line so the eight planets stay
//! readable.

use bevy::prelude::*;

use crate::catalog::BodyKind;
use crate::render::{srgb, to_render};
use crate::scene::SolarScene;

/// Settings for orbit path rendering.
#[derive(Resource)]
pub struct OrbitPathSettings {
    /// Whether to show orbit paths.
    pub visible: bool,
    /// Alpha value for planet and moon orbits.
    pub alpha: f32,
    /// Alpha value for dwarf planet and asteroid orbits.
    pub minor_alpha: f32,
    /// Dash pattern for minor bodies: draw N segments, then skip M segments.
    ///
    /// Set to (1, 0) for a solid line.
    pub dash_on: u32,
    pub dash_off: u32,
}

impl Default for OrbitPathSettings {
    fn default() -> Self {
        Self {
            visible: true,
            alpha: 1.0,
            minor_alpha: 0.3,
            dash_on: 6,
            dash_off: 4,
        }
    }
}

/// Draw every precomputed orbit path.
pub fn draw_orbit_paths(
    mut gizmos: Gizmos,
    settings: Res<OrbitPathSettings>,
    scene: Res<SolarScene>,
) {
    if !settings.visible {
        return;
    }

    for track in &scene.tracks {
        let points = track.path.iter().copied().map(to_render);

        match track.kind {
            BodyKind::Planet | BodyKind::Moon => {
                gizmos.linestrip(points, srgb(track.color, settings.alpha));
            }
            BodyKind::Minor => {
                let color = srgb(track.color, settings.minor_alpha);
                let points: Vec<Vec3> = points.collect();
                for (a, b) in dashed_segments(&points, settings.dash_on, settings.dash_off) {
                    gizmos.line(a, b, color);
                }
            }
        }
    }
}

/// Segments of a polyline that survive a dash pattern.
///
/// The pattern is keyed on the segment index so it stays fixed on the curve
/// while the camera moves.
fn dashed_segments(points: &[Vec3], on: u32, off: u32) -> impl Iterator<Item = (Vec3, Vec3)> + '_ {
    let on = on.max(1) as usize;
    let period = on + off as usize;
    points
        .windows(2)
        .enumerate()
        .filter(move |(i, _)| i % period < on)
        .map(|(_, w)| (w[0], w[1]))
}
