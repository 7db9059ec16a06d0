//! Plot-viewer camera for the 3D model.
//!
//! Provides rotate (left drag), pan (middle or right drag) and zoom (scroll)
//! around a focus point, with +Z as the up direction.

use bevy::{
    input::mouse::{AccumulatedMouseMotion, AccumulatedMouseScroll},
    prelude::*,
};

use crate::render::RENDER_SCALE;
use crate::scene::SolarScene;

/// Closest the camera may get to its focus, in render units.
///
/// Small enough to fill the view with a true-scale Moon (~0.0001 render units).
pub const MIN_DISTANCE: f32 = 0.0005;

/// Farthest the camera may get from its focus, in render units.
pub const MAX_DISTANCE: f32 = 50_000.0;

/// Initial distance as a multiple of the plot half-width.
pub const FRAMING_FACTOR: f32 = 3.2;

/// Zoom speed multiplier for scroll wheel.
pub const ZOOM_SPEED: f32 = 0.1;

/// Radians of rotation per pixel of mouse motion.
pub const ROTATE_SPEED: f32 = 0.005;

/// Pan speed multiplier.
pub const PAN_SPEED: f32 = 1.0;

/// Marker component for the main camera.
#[derive(Component)]
pub struct MainCamera;

/// Orbit camera state. Angles in radians.
#[derive(Resource, Clone, Debug, PartialEq)]
pub struct CameraState {
    pub focus: Vec3,
    pub distance: f32,
    /// Rotation about +Z.
    pub azimuth: f32,
    /// Angle above the xy-plane, kept short of the poles.
    pub elevation: f32,
}

impl Default for CameraState {
    fn default() -> Self {
        Self {
            focus: Vec3::ZERO,
            distance: 1000.0,
            // matplotlib's default 3D view
            azimuth: (-60.0f32).to_radians(),
            elevation: 30.0f32.to_radians(),
        }
    }
}

impl CameraState {
    const MAX_ELEVATION: f32 = 1.55;

    /// State framing a cube of the given half-width.
    pub fn framing(half_width: f32) -> Self {
        Self {
            distance: half_width * FRAMING_FACTOR,
            ..Self::default()
        }
    }

    /// Camera position for the current state.
    pub fn eye(&self) -> Vec3 {
        let (sin_az, cos_az) = self.azimuth.sin_cos();
        let (sin_el, cos_el) = self.elevation.sin_cos();
        self.focus + self.distance * Vec3::new(cos_el * cos_az, cos_el * sin_az, sin_el)
    }

    pub fn transform(&self) -> Transform {
        Transform::from_translation(self.eye()).looking_at(self.focus, Vec3::Z)
    }

    /// Rotate by a screen-space drag in pixels.
    pub fn rotate(&mut self, delta: Vec2) {
        self.azimuth -= delta.x * ROTATE_SPEED;
        self.elevation = (self.elevation + delta.y * ROTATE_SPEED)
            .clamp(-Self::MAX_ELEVATION, Self::MAX_ELEVATION);
    }

    /// Logarithmic zoom: multiply distance by a factor based on scroll amount.
    pub fn zoom(&mut self, scroll: f32) {
        let factor = 1.0 - scroll * ZOOM_SPEED;
        self.distance = (self.distance * factor.max(0.1)).clamp(MIN_DISTANCE, MAX_DISTANCE);
    }

    /// Move the focus in the view plane by a screen-space drag in pixels.
    pub fn pan(&mut self, delta: Vec2, viewport_height: f32) {
        let transform = self.transform();
        // Drag of one viewport height moves the focus by roughly the view height
        let world_per_pixel = self.distance / viewport_height.max(1.0) * PAN_SPEED;
        self.focus += (-transform.right() * delta.x + transform.up() * delta.y) * world_per_pixel;
    }
}

/// Plugin providing camera functionality.
pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_camera)
            .add_systems(Update, (camera_input, apply_camera_state).chain());
    }
}

/// Spawn the main camera framed on the plot cube.
fn setup_camera(mut commands: Commands, scene: Res<SolarScene>) {
    let state = CameraState::framing((scene.axis_limit_au * RENDER_SCALE) as f32);

    commands.spawn((
        Camera3d::default(),
        Projection::from(PerspectiveProjection {
            near: 1e-5,
            ..default()
        }),
        state.transform(),
        MainCamera,
    ));
    commands.insert_resource(state);
}

/// Mouse handling: rotate with left, pan with middle or right, zoom with scroll.
fn camera_input(
    mouse_buttons: Res<ButtonInput<MouseButton>>,
    mouse_motion: Res<AccumulatedMouseMotion>,
    mouse_scroll: Res<AccumulatedMouseScroll>,
    camera_query: Query<&Camera, With<MainCamera>>,
    state: Option<ResMut<CameraState>>,
) {
    let Some(mut state) = state else {
        return;
    };

    if mouse_scroll.delta.y != 0.0 {
        state.zoom(mouse_scroll.delta.y);
    }

    if mouse_motion.delta == Vec2::ZERO {
        return;
    }

    if mouse_buttons.pressed(MouseButton::Left) {
        state.rotate(mouse_motion.delta);
    } else if mouse_buttons.any_pressed([MouseButton::Middle, MouseButton::Right]) {
        let viewport_height = camera_query
            .single()
            .ok()
            .and_then(|camera| camera.logical_viewport_size())
            .map_or(800.0, |size| size.y);
        state.pan(mouse_motion.delta, viewport_height);
    }
}

fn apply_camera_state(
    state: Option<Res<CameraState>>,
    mut camera_query: Query<&mut Transform, With<MainCamera>>,
) {
    let Some(state) = state else {
        return;
    };
    if !state.is_changed() {
        return;
    }
    let Ok(mut transform) = camera_query.single_mut() else {
        return;
    };
    *transform = state.transform();
}
