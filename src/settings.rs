//! Model configuration.
//!
//! There is no command line or environment input; callers adjust these
//! values in code before building the scene.

use bevy::prelude::*;

use crate::belt::DEFAULT_BELT_POINTS;

/// What the single scene pass computes.
#[derive(Resource, Clone, Debug, PartialEq)]
pub struct SceneSettings {
    /// Samples of the ellipse parameter over [0, 2π] per orbit path.
    pub path_samples: usize,
    /// Points per debris belt.
    pub belt_points: usize,
    /// Half-width of the plotted cube in AU.
    pub axis_limit_au: f64,
    /// Include dwarf planets and asteroids.
    pub show_minor_bodies: bool,
    /// Include Earth's moon.
    pub show_moon: bool,
    /// Include the asteroid and Kuiper belts.
    pub show_belts: bool,
    /// Seed for the belt generator; `None` seeds from OS entropy.
    pub rng_seed: Option<u64>,
}

impl Default for SceneSettings {
    fn default() -> Self {
        Self {
            path_samples: 1000,
            belt_points: DEFAULT_BELT_POINTS,
            axis_limit_au: 100.0,
            show_minor_bodies: true,
            show_moon: true,
            show_belts: true,
            rng_seed: None,
        }
    }
}
