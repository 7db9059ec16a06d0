//! UI module providing the egui legend overlay.

pub mod legend;

use bevy::prelude::*;
use bevy_egui::EguiPrimaryContextPass;

/// Plugin that adds all UI systems.
pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(EguiPrimaryContextPass, legend::legend_system);
    }
}
