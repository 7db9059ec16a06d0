//! Orrery3D - static 3D model of the solar system
//!
//! Computes every orbit, current position and belt cloud once at startup,
//! then shows them in a window with plot-viewer camera controls.

use bevy::prelude::*;
use bevy_egui::EguiPlugin;

use orrery3d::camera::CameraPlugin;
use orrery3d::catalog::Catalog;
use orrery3d::render::RenderPlugin;
use orrery3d::scene::{SceneError, SolarScene};
use orrery3d::settings::SceneSettings;
use orrery3d::types::ModelEpoch;
use orrery3d::ui::{UiPlugin, legend::PLOT_TITLE};

fn main() -> Result<(), SceneError> {
    // Build the whole scene before opening a window so a bad catalog fails fast
    let settings = SceneSettings::default();
    let catalog = Catalog::builtin()?;
    let epoch = ModelEpoch::now()?;
    let scene = SolarScene::build(&catalog, epoch, &settings)?;

    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: PLOT_TITLE.into(),
                ..default()
            }),
            ..default()
        }))
        .add_plugins(EguiPlugin::default())
        // Insert resources before plugins that depend on them
        .insert_resource(settings)
        .insert_resource(epoch)
        .insert_resource(scene)
        .add_plugins((CameraPlugin, RenderPlugin, UiPlugin))
        .run();

    Ok(())
}
