//! Celestial body rendering and spawning.
//!
//! Every body gets a true-scale sphere at its current position. Because
//! those spheres vanish at plot scale, a "+" marker with a constant on-screen
//! size is drawn on top of each one (a star for the Sun).

use bevy::prelude::*;

use crate::camera::MainCamera;
use crate::catalog::{BodyKind, CelestialBodyId};
use crate::render::{RENDER_SCALE, srgb, to_render};
use crate::scene::SolarScene;

/// Component marking an entity as a rendered body.
#[derive(Component)]
pub struct CelestialBodyMarker {
    /// Identifier for this body.
    pub id: CelestialBodyId,
}

/// Plugin providing body spawning.
pub struct CelestialBodyPlugin;

impl Plugin for CelestialBodyPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_solar_system);
    }
}

/// Sizes of the screen-space markers, as a fraction of camera distance.
#[derive(Resource)]
pub struct MarkerSettings {
    pub visible: bool,
    /// Half-size of a planet or minor-body "+" marker.
    pub body: f32,
    /// Half-size of the Moon's marker.
    pub moon: f32,
    /// Half-size of the Sun's star.
    pub sun: f32,
}

impl Default for MarkerSettings {
    fn default() -> Self {
        Self {
            visible: true,
            body: 0.012,
            moon: 0.005,
            sun: 0.012,
        }
    }
}

/// Sun color, also used by the legend.
pub const SUN_COLOR: [f32; 3] = [1.0, 1.0, 0.0];

/// Spawn the Sun and one sphere per body.
fn spawn_solar_system(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    scene: Res<SolarScene>,
) {
    let sun_color = srgb(SUN_COLOR, 1.0);
    let sun_radius = (scene.sun_radius_au * RENDER_SCALE) as f32;
    commands.spawn((
        Mesh3d(meshes.add(Sphere::new(sun_radius).mesh().uv(30, 30))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: sun_color,
            emissive: sun_color.to_linear() * 2.0,
            unlit: true,
            ..default()
        })),
        Transform::from_translation(Vec3::ZERO),
    ));

    for track in &scene.tracks {
        let render_radius = (track.radius_au * RENDER_SCALE) as f32;

        // Unlit: colors stay as listed regardless of where the Sun is
        let material = materials.add(StandardMaterial {
            base_color: srgb(track.color, 1.0),
            unlit: true,
            ..default()
        });

        commands.spawn((
            Mesh3d(meshes.add(Sphere::new(render_radius).mesh().uv(30, 30))),
            MeshMaterial3d(material),
            Transform::from_translation(to_render(track.position)),
            CelestialBodyMarker { id: track.id },
        ));
    }

    info!("Spawned Sun and {} bodies", scene.tracks.len());
}

/// Draw position markers sized relative to the camera distance.
pub fn draw_position_markers(
    mut gizmos: Gizmos,
    settings: Res<MarkerSettings>,
    scene: Res<SolarScene>,
    camera: Query<&GlobalTransform, With<MainCamera>>,
) {
    if !settings.visible {
        return;
    }
    let Ok(camera_transform) = camera.single() else {
        return;
    };
    let eye = camera_transform.translation();

    let sun_half = eye.length() * settings.sun;
    draw_star(&mut gizmos, Vec3::ZERO, sun_half, srgb(SUN_COLOR, 1.0));

    for track in &scene.tracks {
        let pos = to_render(track.position);
        let scale = match track.kind {
            BodyKind::Moon => settings.moon,
            BodyKind::Planet | BodyKind::Minor => settings.body,
        };
        let half = pos.distance(eye) * scale;
        draw_plus(&mut gizmos, pos, half, srgb(track.color, 1.0));
    }
}

/// Three-axis "+" centred on `center`.
pub(crate) fn draw_plus(gizmos: &mut Gizmos, center: Vec3, half: f32, color: Color) {
    for axis in [Vec3::X, Vec3::Y, Vec3::Z] {
        gizmos.line(center - axis * half, center + axis * half, color);
    }
}

/// "+" plus its diagonals, used for the Sun.
fn draw_star(gizmos: &mut Gizmos, center: Vec3, half: f32, color: Color) {
    draw_plus(gizmos, center, half, color);
    for dir in [Vec3::new(1.0, 1.0, 0.0), Vec3::new(1.0, -1.0, 0.0)] {
        let d = dir.normalize() * half;
        gizmos.line(center - d, center + d, color);
    }
}
