//! Common test utilities for integration tests.

use orrery3d::catalog::Catalog;
use orrery3d::scene::SolarScene;
use orrery3d::settings::SceneSettings;
use orrery3d::types::ModelEpoch;

/// Settings with a fixed seed so belt clouds are reproducible.
pub fn seeded_settings(seed: u64) -> SceneSettings {
    SceneSettings {
        rng_seed: Some(seed),
        ..SceneSettings::default()
    }
}

/// Build the full scene at the given number of years after 2000-01-01.
pub fn build_scene(elapsed_years: f64, settings: &SceneSettings) -> SolarScene {
    let catalog = Catalog::builtin().expect("built-in catalog is valid");
    SolarScene::build(&catalog, ModelEpoch::from_elapsed_years(elapsed_years), settings)
        .expect("scene builds")
}

/// Signed distance of a point from the orbital plane with the given
/// inclination and ascending node (radians).
pub fn off_plane_residual(p: bevy::math::DVec3, inclination: f64, node: f64) -> f64 {
    let normal = bevy::math::DVec3::new(
        inclination.sin() * node.sin(),
        -inclination.sin() * node.cos(),
        inclination.cos(),
    );
    p.dot(normal)
}
