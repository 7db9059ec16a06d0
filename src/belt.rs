//! Synthetic debris belts.
//!
//! Each belt is a cloud of independent points. Every point gets its own
//! randomly drawn elements and ellipse parameter and goes through the same
//! rotated-ellipse transform as the real orbits, so the cloud fills a rough
//! torus. No resonances, gaps or families are modelled.

use bevy::math::DVec3;
use rand::Rng;
use std::f64::consts::TAU;

use crate::orbit::ellipse_point;
use crate::types::DEG_TO_RAD;

/// Number of points drawn per belt unless configured otherwise.
pub const DEFAULT_BELT_POINTS: usize = 1000;

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum BeltError {
    #[error("{belt}: {field} range [{min}, {max}] is empty or not finite")]
    InvalidRange {
        belt: &'static str,
        field: &'static str,
        min: f64,
        max: f64,
    },

    #[error("{belt}: semi-major axis must be positive, got minimum {min}")]
    NonPositiveAxis { belt: &'static str, min: f64 },

    #[error("{belt}: eccentricity range must stay within [0, 1), got [{min}, {max}]")]
    UnboundEccentricity {
        belt: &'static str,
        min: f64,
        max: f64,
    },

    #[error("{belt}: point count must be at least 1")]
    NoPoints { belt: &'static str },
}

/// Sampling bounds for one belt. Angles in degrees, lengths in AU.
#[derive(Clone, Debug, PartialEq)]
pub struct BeltRegion {
    pub name: &'static str,
    pub semi_major_axis_au: (f64, f64),
    pub eccentricity: (f64, f64),
    pub inclination_deg: (f64, f64),
    /// Points to draw.
    pub count: usize,
}

impl BeltRegion {
    /// Main asteroid belt between Mars and Jupiter.
    pub fn asteroid_belt() -> Self {
        Self {
            name: "Asteroid Belt",
            semi_major_axis_au: (2.1, 3.2),
            eccentricity: (0.0, 0.35),
            inclination_deg: (0.0, 10.0),
            count: DEFAULT_BELT_POINTS,
        }
    }

    /// Kuiper belt beyond Neptune.
    pub fn kuiper_belt() -> Self {
        Self {
            name: "Kuiper Belt",
            semi_major_axis_au: (30.0, 50.0),
            eccentricity: (0.0, 0.2),
            inclination_deg: (0.0, 15.0),
            count: DEFAULT_BELT_POINTS,
        }
    }

    /// Both built-in belts, inner first.
    pub fn builtin() -> [Self; 2] {
        [Self::asteroid_belt(), Self::kuiper_belt()]
    }

    pub fn with_count(mut self, count: usize) -> Self {
        self.count = count;
        self
    }

    pub fn validate(&self) -> Result<(), BeltError> {
        let belt = self.name;
        for (field, (min, max)) in [
            ("semi-major axis", self.semi_major_axis_au),
            ("eccentricity", self.eccentricity),
            ("inclination", self.inclination_deg),
        ] {
            if !(min.is_finite() && max.is_finite() && min <= max) {
                return Err(BeltError::InvalidRange {
                    belt,
                    field,
                    min,
                    max,
                });
            }
        }

        let (a_min, _) = self.semi_major_axis_au;
        if a_min <= 0.0 {
            return Err(BeltError::NonPositiveAxis { belt, min: a_min });
        }

        let (e_min, e_max) = self.eccentricity;
        if e_min < 0.0 || e_max >= 1.0 {
            return Err(BeltError::UnboundEccentricity {
                belt,
                min: e_min,
                max: e_max,
            });
        }

        if self.count == 0 {
            return Err(BeltError::NoPoints { belt });
        }
        Ok(())
    }
}

/// Elements drawn for a single belt point. Angles in radians.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BeltSample {
    pub semi_major_axis: f64,
    pub eccentricity: f64,
    pub inclination: f64,
    pub ascending_node: f64,
    /// Ellipse parameter
    pub t: f64,
}

impl BeltSample {
    /// Draw one point's elements uniformly within `region`.
    pub fn draw<R: Rng>(region: &BeltRegion, rng: &mut R) -> Self {
        Self {
            semi_major_axis: uniform(rng, region.semi_major_axis_au),
            eccentricity: uniform(rng, region.eccentricity),
            inclination: uniform(rng, region.inclination_deg) * DEG_TO_RAD,
            ascending_node: uniform(rng, (0.0, 360.0)) * DEG_TO_RAD,
            t: uniform(rng, (0.0, TAU)),
        }
    }

    pub fn semi_minor_axis(&self) -> f64 {
        self.semi_major_axis * (1.0 - self.eccentricity * self.eccentricity).sqrt()
    }

    pub fn position(&self) -> DVec3 {
        ellipse_point(
            self.semi_major_axis,
            self.semi_minor_axis(),
            self.inclination,
            self.ascending_node,
            self.t,
        )
    }
}

/// A generated belt: the region it came from and one point per sample.
#[derive(Clone, Debug)]
pub struct BeltCloud {
    pub region: BeltRegion,
    pub samples: Vec<BeltSample>,
    pub points: Vec<DVec3>,
}

impl BeltCloud {
    /// Draw `region.count` independent points.
    pub fn generate<R: Rng>(region: BeltRegion, rng: &mut R) -> Result<Self, BeltError> {
        region.validate()?;

        let samples: Vec<BeltSample> = (0..region.count)
            .map(|_| BeltSample::draw(&region, &mut *rng))
            .collect();
        let points = samples.iter().map(BeltSample::position).collect();

        Ok(Self {
            region,
            samples,
            points,
        })
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Uniform draw on [min, max); a degenerate range yields `min`.
fn uniform<R: Rng>(rng: &mut R, (min, max): (f64, f64)) -> f64 {
    if max > min { rng.gen_range(min..max) } else { min }
}
