//! The single computational pass behind the picture.
//!
//! `SolarScene::build` evaluates every orbit, current position and belt cloud
//! once, up front. The renderer only reads the result.

use bevy::math::DVec3;
use bevy::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::belt::{BeltCloud, BeltError, BeltRegion};
use crate::catalog::{BodyKind, Catalog, CatalogError, CelestialBody, CelestialBodyId};
use crate::orbit::SatelliteOrbit;
use crate::settings::SceneSettings;
use crate::types::{EpochError, KM_TO_AU, ModelEpoch, SUN_RADIUS_KM};

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum SceneError {
    #[error("invalid catalog: {0}")]
    Catalog(#[from] CatalogError),

    #[error("invalid belt: {0}")]
    Belt(#[from] BeltError),

    #[error("cannot read the model epoch: {0}")]
    Epoch(#[from] EpochError),

    #[error("orbit paths need at least 2 samples, got {0}")]
    TooFewSamples(usize),

    #[error("axis limit must be positive and finite, got {0} AU")]
    InvalidAxisLimit(f64),
}

/// Computed geometry for one body.
#[derive(Clone, Debug)]
pub struct BodyTrack {
    pub id: CelestialBodyId,
    pub kind: BodyKind,
    pub color: [f32; 3],
    /// Physical radius in AU.
    pub radius_au: f64,
    /// Ellipse parameter used for the current position.
    pub phase: f64,
    /// Closed orbit path, heliocentric AU.
    pub path: Vec<DVec3>,
    /// Current position, heliocentric AU.
    pub position: DVec3,
}

impl BodyTrack {
    pub fn name(&self) -> &'static str {
        self.id.name()
    }
}

/// Everything the renderer draws.
#[derive(Resource, Clone, Debug)]
pub struct SolarScene {
    pub epoch: ModelEpoch,
    pub sun_radius_au: f64,
    pub axis_limit_au: f64,
    /// Bodies in catalog order.
    pub tracks: Vec<BodyTrack>,
    pub belts: Vec<BeltCloud>,
}

impl SolarScene {
    /// Build the scene, seeding belts from `settings.rng_seed` or OS entropy.
    pub fn build(
        catalog: &Catalog,
        epoch: ModelEpoch,
        settings: &SceneSettings,
    ) -> Result<Self, SceneError> {
        let mut rng = match settings.rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::build_with_rng(catalog, epoch, settings, &mut rng)
    }

    /// Build the scene with a caller-supplied random source for the belts.
    pub fn build_with_rng<R: Rng>(
        catalog: &Catalog,
        epoch: ModelEpoch,
        settings: &SceneSettings,
        rng: &mut R,
    ) -> Result<Self, SceneError> {
        if settings.path_samples < 2 {
            return Err(SceneError::TooFewSamples(settings.path_samples));
        }
        if !(settings.axis_limit_au.is_finite() && settings.axis_limit_au > 0.0) {
            return Err(SceneError::InvalidAxisLimit(settings.axis_limit_au));
        }

        let included = |body: &&CelestialBody| match body.kind() {
            BodyKind::Planet => true,
            BodyKind::Minor => settings.show_minor_bodies,
            BodyKind::Moon => settings.show_moon,
        };

        // Heliocentric bodies first so satellites can look up their parent
        let mut tracks: Vec<BodyTrack> = catalog
            .bodies()
            .iter()
            .filter(included)
            .filter(|b| b.id.parent().is_none())
            .map(|body| heliocentric_track(body, epoch.elapsed_years, settings.path_samples))
            .collect();

        let satellites: Vec<BodyTrack> = catalog
            .bodies()
            .iter()
            .filter(included)
            .filter_map(|body| {
                let parent = body.id.parent()?;
                match tracks.iter().find(|t| t.id == parent) {
                    Some(parent_track) => {
                        Some(satellite_track(body, parent_track, settings.path_samples))
                    }
                    None => {
                        warn!("Skipping {}: parent {} not in scene", body.name(), parent.name());
                        None
                    }
                }
            })
            .collect();
        tracks.extend(satellites);

        // Restore catalog order for legend and labels
        tracks.sort_by_key(|t| {
            catalog
                .bodies()
                .iter()
                .position(|b| b.id == t.id)
                .unwrap_or(usize::MAX)
        });

        let belts = if settings.show_belts {
            BeltRegion::builtin()
                .into_iter()
                .map(|region| {
                    BeltCloud::generate(region.with_count(settings.belt_points), &mut *rng)
                })
                .collect::<Result<Vec<_>, _>>()?
        } else {
            Vec::new()
        };

        Ok(Self {
            epoch,
            sun_radius_au: SUN_RADIUS_KM * KM_TO_AU,
            axis_limit_au: settings.axis_limit_au,
            tracks,
            belts,
        })
    }

    pub fn track(&self, id: CelestialBodyId) -> Option<&BodyTrack> {
        self.tracks.iter().find(|t| t.id == id)
    }

    pub fn belt_point_count(&self) -> usize {
        self.belts.iter().map(BeltCloud::len).sum()
    }
}

/// Startup system reporting what was computed.
///
/// The scene is built before the app (and its log subscriber) exists, so the
/// summary is emitted from here.
pub fn log_scene_summary(scene: Res<SolarScene>) {
    info!(
        "Scene for {} ({:.2} years after 2000-01-01): {} bodies, {} belt points",
        scene.epoch.date_string(),
        scene.epoch.elapsed_years,
        scene.tracks.len(),
        scene.belt_point_count()
    );
    if scene.belts.is_empty() {
        info!("Debris belts disabled");
    }
}

fn heliocentric_track(body: &CelestialBody, elapsed_years: f64, samples: usize) -> BodyTrack {
    let phase = body.elements.phase_at(elapsed_years);
    BodyTrack {
        id: body.id,
        kind: body.kind(),
        color: body.color,
        radius_au: body.radius_km * KM_TO_AU,
        phase,
        path: body.elements.sample_path(samples),
        position: body.elements.point_at(phase),
    }
}

/// Satellite geometry in the parent's frame, translated to the parent's position.
/// The satellite is evaluated at the parent's phase.
fn satellite_track(body: &CelestialBody, parent: &BodyTrack, samples: usize) -> BodyTrack {
    let orbit = SatelliteOrbit::new(body.elements, parent.position);
    BodyTrack {
        id: body.id,
        kind: body.kind(),
        color: body.color,
        radius_au: body.radius_km * KM_TO_AU,
        phase: parent.phase,
        path: orbit.sample_path(samples),
        position: orbit.position_at_phase(parent.phase),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn seeded() -> SceneSettings {
        SceneSettings {
            rng_seed: Some(5),
            ..SceneSettings::default()
        }
    }

    #[test]
    fn test_full_scene_contents() {
        let catalog = Catalog::builtin().unwrap();
        let scene =
            SolarScene::build(&catalog, ModelEpoch::from_elapsed_years(24.0), &seeded()).unwrap();

        assert_eq!(scene.tracks.len(), 15);
        assert_eq!(scene.belts.len(), 2);
        assert!(scene.tracks.iter().all(|t| t.path.len() == 1000));
        assert_eq!(scene.tracks[0].id, CelestialBodyId::Mercury);
        assert_eq!(scene.tracks[14].id, CelestialBodyId::Moon);
    }

    #[test]
    fn test_sun_radius_in_au() {
        let catalog = Catalog::builtin().unwrap();
        let scene =
            SolarScene::build(&catalog, ModelEpoch::from_elapsed_years(0.0), &seeded()).unwrap();
        assert_abs_diff_eq!(scene.sun_radius_au, 0.004_654_7, epsilon = 1e-6);
    }

    #[test]
    fn test_epoch_start_places_bodies_at_t_zero() {
        let catalog = Catalog::builtin().unwrap();
        let scene =
            SolarScene::build(&catalog, ModelEpoch::from_elapsed_years(0.0), &seeded()).unwrap();

        for track in &scene.tracks {
            assert_eq!(track.phase, 0.0);
        }
        let earth = scene.track(CelestialBodyId::Earth).unwrap();
        assert_abs_diff_eq!(earth.position.x, 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(earth.position.y, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_moon_follows_earth() {
        let catalog = Catalog::builtin().unwrap();
        let scene =
            SolarScene::build(&catalog, ModelEpoch::from_elapsed_years(3.7), &seeded()).unwrap();

        let earth = scene.track(CelestialBodyId::Earth).unwrap();
        let moon = scene.track(CelestialBodyId::Moon).unwrap();
        let moon_elements = catalog.get(CelestialBodyId::Moon).unwrap().elements;

        assert_eq!(moon.phase, earth.phase);
        let expected = earth.position + moon_elements.point_at(earth.phase);
        assert_abs_diff_eq!((moon.position - expected).length(), 0.0, epsilon = 1e-15);
    }

    #[test]
    fn test_toggles_remove_groups() {
        let catalog = Catalog::builtin().unwrap();
        let settings = SceneSettings {
            show_minor_bodies: false,
            show_moon: false,
            show_belts: false,
            ..seeded()
        };
        let scene =
            SolarScene::build(&catalog, ModelEpoch::from_elapsed_years(1.0), &settings).unwrap();

        assert_eq!(scene.tracks.len(), 8);
        assert!(scene.tracks.iter().all(|t| t.kind == BodyKind::Planet));
        assert!(scene.belts.is_empty());
    }

    #[test]
    fn test_rejects_bad_settings() {
        let catalog = Catalog::builtin().unwrap();
        let epoch = ModelEpoch::from_elapsed_years(1.0);

        let settings = SceneSettings {
            path_samples: 1,
            ..seeded()
        };
        assert_eq!(
            SolarScene::build(&catalog, epoch, &settings).unwrap_err(),
            SceneError::TooFewSamples(1)
        );

        let settings = SceneSettings {
            belt_points: 0,
            ..seeded()
        };
        assert!(matches!(
            SolarScene::build(&catalog, epoch, &settings),
            Err(SceneError::Belt(BeltError::NoPoints { .. }))
        ));

        let settings = SceneSettings {
            axis_limit_au: 0.0,
            ..seeded()
        };
        assert!(matches!(
            SolarScene::build(&catalog, epoch, &settings),
            Err(SceneError::InvalidAxisLimit(_))
        ));
    }
}
