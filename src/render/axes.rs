//! Fixed plot frame: the ±limit cube with axis lines through the Sun.

use bevy::prelude::*;

use crate::render::RENDER_SCALE;
use crate::scene::SolarScene;

const FRAME_COLOR: Color = Color::srgba(0.6, 0.6, 0.7, 0.25);
const AXIS_COLOR: Color = Color::srgba(0.8, 0.8, 0.9, 0.5);

/// Tick spacing along each axis, in AU.
pub const TICK_SPACING_AU: f64 = 20.0;

pub fn draw_axis_box(mut gizmos: Gizmos, scene: Res<SolarScene>) {
    let half = (scene.axis_limit_au * RENDER_SCALE) as f32;

    for (a, b) in cube_edges(half) {
        gizmos.line(a, b, FRAME_COLOR);
    }

    let tick = half * 0.01;
    for axis in [Vec3::X, Vec3::Y, Vec3::Z] {
        gizmos.line(-axis * half, axis * half, AXIS_COLOR);

        // Ticks across the axis in its perpendicular plane
        let across = if axis == Vec3::Z { Vec3::X } else { Vec3::Z };
        for value in tick_values(scene.axis_limit_au) {
            let at = axis * (value * RENDER_SCALE) as f32;
            gizmos.line(at - across * tick, at + across * tick, AXIS_COLOR);
        }
    }
}

/// The 12 edges of an axis-aligned cube centred on the origin.
fn cube_edges(half: f32) -> Vec<(Vec3, Vec3)> {
    let corner = |i: u8| {
        Vec3::new(
            if i & 1 == 0 { -half } else { half },
            if i & 2 == 0 { -half } else { half },
            if i & 4 == 0 { -half } else { half },
        )
    };

    // Corners differing in exactly one bit share an edge
    let mut edges = Vec::with_capacity(12);
    for i in 0u8..8 {
        for bit in [1u8, 2, 4] {
            let j = i ^ bit;
            if i < j {
                edges.push((corner(i), corner(j)));
            }
        }
    }
    edges
}

/// Tick positions in AU from -limit to +limit, skipping the origin.
fn tick_values(limit_au: f64) -> impl Iterator<Item = f64> {
    let steps = (limit_au / TICK_SPACING_AU).floor() as i64;
    (-steps..=steps)
        .filter(|&k| k != 0)
        .map(|k| k as f64 * TICK_SPACING_AU)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cube_has_twelve_unit_edges() {
        let edges = cube_edges(1.0);
        assert_eq!(edges.len(), 12);
        for (a, b) in edges {
            assert!((a.distance(b) - 2.0).abs() < 1e-6);
        }
    }

    #[test]
    fn test_ticks_cover_the_plot_range() {
        let ticks: Vec<f64> = tick_values(100.0).collect();
        assert_eq!(ticks.len(), 10);
        assert_eq!(ticks.first(), Some(&-100.0));
        assert_eq!(ticks.last(), Some(&100.0));
        assert!(!ticks.contains(&0.0));
    }
}
