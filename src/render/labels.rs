//! Body labels and axis titles using egui for text rendering.

use bevy::prelude::*;
use bevy_egui::{EguiContexts, egui};

use crate::camera::MainCamera;
use crate::catalog::{BodyKind, CelestialBodyId};
use crate::render::bodies::CelestialBodyMarker;
use crate::render::RENDER_SCALE;
use crate::scene::SolarScene;

/// Settings for label rendering.
#[derive(Resource)]
pub struct LabelSettings {
    /// Whether body labels are visible.
    pub visible: bool,
    /// Hide a body's label when the camera is farther than this many times
    /// the body's distance from the Sun. Keeps inner planets from piling up
    /// on the Sun when zoomed out.
    pub max_distance_ratio: f32,
    /// Moons are labelled only when the camera is within this many render units.
    pub max_moon_distance: f32,
    /// Offset from body center in screen pixels.
    pub offset: f32,
}

impl Default for LabelSettings {
    fn default() -> Self {
        Self {
            visible: true,
            max_distance_ratio: 60.0,
            max_moon_distance: 1.0,
            offset: 8.0,
        }
    }
}

const LABEL_TEXT: egui::Color32 = egui::Color32::from_rgba_premultiplied(220, 220, 220, 230);
const LABEL_SHADOW: egui::Color32 = egui::Color32::from_rgba_premultiplied(0, 0, 0, 180);

/// Draw a name next to each body.
pub fn draw_body_labels(
    mut egui_ctx: EguiContexts,
    bodies: Query<(&CelestialBodyMarker, &Transform)>,
    camera: Query<(&Camera, &GlobalTransform), With<MainCamera>>,
    settings: Res<LabelSettings>,
) {
    if !settings.visible {
        return;
    }
    let Ok((camera, camera_transform)) = camera.single() else {
        return;
    };
    let Ok(ctx) = egui_ctx.ctx_mut() else {
        return;
    };
    let eye = camera_transform.translation();

    egui::Area::new(egui::Id::new("body_labels"))
        .fixed_pos(egui::pos2(0.0, 0.0))
        .order(egui::Order::Background)
        .show(ctx, |ui| {
            let painter = ui.painter();

            for (body, transform) in bodies.iter() {
                let world_pos = transform.translation;
                if !label_visible(body.id, world_pos, eye, &settings) {
                    continue;
                }

                // Project world position to screen
                let Ok(screen_pos) = camera.world_to_viewport(camera_transform, world_pos) else {
                    continue;
                };

                let label_pos = egui::pos2(
                    screen_pos.x + settings.offset,
                    screen_pos.y + settings.offset,
                );
                shadowed_text(painter, label_pos, body.id.name(), 13.0);
            }
        });
}

/// Whether a body's label is shown from `eye`.
///
/// Moons only near the camera; other bodies while the camera is within
/// `max_distance_ratio` times their distance from the Sun.
fn label_visible(id: CelestialBodyId, world_pos: Vec3, eye: Vec3, settings: &LabelSettings) -> bool {
    let camera_distance = world_pos.distance(eye);
    match id.kind() {
        BodyKind::Moon => camera_distance < settings.max_moon_distance,
        BodyKind::Planet | BodyKind::Minor => {
            camera_distance < world_pos.length() * settings.max_distance_ratio
        }
    }
}

/// Axis titles at the positive end of each axis.
pub fn draw_axis_titles(
    mut egui_ctx: EguiContexts,
    scene: Res<SolarScene>,
    camera: Query<(&Camera, &GlobalTransform), With<MainCamera>>,
) {
    let Ok((camera, camera_transform)) = camera.single() else {
        return;
    };
    let Ok(ctx) = egui_ctx.ctx_mut() else {
        return;
    };
    let half = (scene.axis_limit_au * RENDER_SCALE) as f32;

    egui::Area::new(egui::Id::new("axis_titles"))
        .fixed_pos(egui::pos2(0.0, 0.0))
        .order(egui::Order::Background)
        .show(ctx, |ui| {
            let painter = ui.painter();
            for (axis, title) in [(Vec3::X, "x (au)"), (Vec3::Y, "y (au)"), (Vec3::Z, "z (au)")] {
                let Ok(screen_pos) = camera.world_to_viewport(camera_transform, axis * half * 1.05)
                else {
                    continue;
                };
                shadowed_text(painter, egui::pos2(screen_pos.x, screen_pos.y), title, 14.0);
            }
        });
}

fn shadowed_text(painter: &egui::Painter, pos: egui::Pos2, text: &str, size: f32) {
    let font = egui::FontId::proportional(size);

    // Shadow
    painter.text(
        pos + egui::vec2(1.0, 1.0),
        egui::Align2::LEFT_TOP,
        text,
        font.clone(),
        LABEL_SHADOW,
    );

    // Main text
    painter.text(pos, egui::Align2::LEFT_TOP, text, font, LABEL_TEXT);
}
