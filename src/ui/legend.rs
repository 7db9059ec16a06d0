//! Plot title and legend panel.

use bevy::prelude::*;
use bevy_egui::{EguiContexts, egui};

use crate::catalog::{BodyKind, CelestialBodyId};
use crate::render::bodies::SUN_COLOR;
use crate::render::belts::BELT_COLOR;
use crate::scene::SolarScene;

/// Title shown above the legend.
pub const PLOT_TITLE: &str = "Solar System Model";

/// Explanatory lines at the top of the legend.
pub const NOTES: [&str; 3] = [
    "Orbits are ellipses, located in three dimensions.",
    "Current positions are marked with a +.",
    "True-scale spheres sit under each marker; zoom in to see them.",
];

/// How a legend swatch is drawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SwatchStyle {
    Solid,
    Dashed,
    Star,
    Scatter,
}

/// One row of the legend.
#[derive(Clone, Debug, PartialEq)]
pub enum LegendEntry {
    Note(&'static str),
    Spacer,
    Item {
        label: &'static str,
        color: [f32; 3],
        style: SwatchStyle,
    },
}

/// Legend rows for a scene.
///
/// Order: notes, Sun, bodies in catalog order with each moon right after its
/// parent, a gap after Neptune and after Sedna, then the belts.
pub fn legend_entries(scene: &SolarScene) -> Vec<LegendEntry> {
    let mut entries: Vec<LegendEntry> = NOTES.iter().map(|&n| LegendEntry::Note(n)).collect();
    entries.push(LegendEntry::Spacer);
    entries.push(LegendEntry::Item {
        label: "Sun",
        color: SUN_COLOR,
        style: SwatchStyle::Star,
    });
    entries.push(LegendEntry::Spacer);

    for track in scene.tracks.iter().filter(|t| t.kind != BodyKind::Moon) {
        entries.push(LegendEntry::Item {
            label: track.name(),
            color: track.color,
            style: match track.kind {
                BodyKind::Minor => SwatchStyle::Dashed,
                BodyKind::Planet | BodyKind::Moon => SwatchStyle::Solid,
            },
        });

        for moon in scene
            .tracks
            .iter()
            .filter(|m| m.id.parent() == Some(track.id))
        {
            entries.push(LegendEntry::Item {
                label: moon.name(),
                color: moon.color,
                style: SwatchStyle::Solid,
            });
        }

        if matches!(track.id, CelestialBodyId::Neptune | CelestialBodyId::Sedna) {
            entries.push(LegendEntry::Spacer);
        }
    }

    for cloud in &scene.belts {
        entries.push(LegendEntry::Item {
            label: cloud.region.name,
            color: BELT_COLOR,
            style: SwatchStyle::Scatter,
        });
    }

    entries
}

/// Draw the legend window on the right side of the screen.
pub fn legend_system(mut contexts: EguiContexts, scene: Res<SolarScene>) {
    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    egui::Window::new(PLOT_TITLE)
        .anchor(egui::Align2::RIGHT_CENTER, [-12.0, 0.0])
        .resizable(false)
        .collapsible(true)
        .show(ctx, |ui| {
            ui.label(
                egui::RichText::new(format!("Positions for {}", scene.epoch.date_string()))
                    .small()
                    .weak(),
            );
            ui.add_space(4.0);

            for entry in legend_entries(&scene) {
                match entry {
                    LegendEntry::Note(text) => {
                        ui.label(egui::RichText::new(text).size(11.0));
                    }
                    LegendEntry::Spacer => ui.add_space(8.0),
                    LegendEntry::Item {
                        label,
                        color,
                        style,
                    } => {
                        ui.horizontal(|ui| {
                            swatch(ui, color, style);
                            ui.label(egui::RichText::new(label).size(12.0));
                        });
                    }
                }
            }
        });
}

fn color32(color: [f32; 3], alpha: f32) -> egui::Color32 {
    let [r, g, b] = color.map(|c| (c.clamp(0.0, 1.0) * 255.0).round() as u8);
    egui::Color32::from_rgba_unmultiplied(r, g, b, (alpha * 255.0).round() as u8)
}

fn swatch(ui: &mut egui::Ui, color: [f32; 3], style: SwatchStyle) {
    let (rect, _) = ui.allocate_exact_size(egui::vec2(22.0, 12.0), egui::Sense::hover());
    let painter = ui.painter();
    let y = rect.center().y;

    match style {
        SwatchStyle::Solid => {
            let stroke = egui::Stroke::new(2.0, color32(color, 1.0));
            painter.line_segment([egui::pos2(rect.left(), y), egui::pos2(rect.right(), y)], stroke);
        }
        SwatchStyle::Dashed => {
            let stroke = egui::Stroke::new(2.0, color32(color, 0.5));
            let mut x = rect.left();
            while x < rect.right() {
                let end = (x + 4.0).min(rect.right());
                painter.line_segment([egui::pos2(x, y), egui::pos2(end, y)], stroke);
                x += 7.0;
            }
        }
        SwatchStyle::Star => {
            let stroke = egui::Stroke::new(1.5, color32(color, 1.0));
            let c = rect.center();
            for (dx, dy) in [(5.0, 0.0), (0.0, 5.0), (3.5, 3.5), (3.5, -3.5)] {
                painter.line_segment([c - egui::vec2(dx, dy), c + egui::vec2(dx, dy)], stroke);
            }
        }
        SwatchStyle::Scatter => {
            let fill = color32(color, 0.8);
            for (dx, dy) in [(-6.0, 2.0), (-1.0, -3.0), (4.0, 1.0), (8.0, -2.0)] {
                painter.circle_filled(rect.center() + egui::vec2(dx, dy), 1.2, fill);
            }
        }
    }
}
