//! Orbit geometry for the static solar system model.
//!
//! Positions come from a rotated-ellipse parameterization: an ellipse with
//! semi-axes (a, b) in its own plane, tilted by the inclination about the
//! x-axis and then turned by the ascending-node longitude about the z-axis.
//!
//! Coordinate frame:
//! - 3D heliocentric (Sun at origin), lengths in AU.
//!
//! Timing uses Kepler's third law with a uniform angular rate (T = a^1.5 years).
//! The parameter is the ellipse angle, not the true anomaly, so eccentricity
//! shapes the path but never changes the speed along it.

#[cfg(test)]
mod proptest_orbit;

use bevy::math::DVec3;
use std::f64::consts::TAU;

use crate::types::DEG_TO_RAD;

/// Orbital elements of a body in the simplified model.
/// Distances in AU, angles in radians.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OrbitalElements {
    /// Semi-major axis in AU
    pub semi_major_axis: f64,
    /// Eccentricity (dimensionless, 0 ≤ e < 1 for ellipse)
    pub eccentricity: f64,
    /// Inclination in radians
    pub inclination: f64,
    /// Longitude of the ascending node in radians
    pub ascending_node: f64,
}

impl OrbitalElements {
    /// Create elements from catalog units.
    ///
    /// # Arguments
    /// * `semi_major_axis_au` - Semi-major axis in AU
    /// * `eccentricity` - Orbital eccentricity (0-1 for elliptical orbits)
    /// * `inclination_deg` - Inclination in degrees
    /// * `ascending_node_deg` - Longitude of ascending node in degrees
    pub fn from_degrees(
        semi_major_axis_au: f64,
        eccentricity: f64,
        inclination_deg: f64,
        ascending_node_deg: f64,
    ) -> Self {
        Self {
            semi_major_axis: semi_major_axis_au,
            eccentricity,
            inclination: normalize_angle(inclination_deg * DEG_TO_RAD),
            ascending_node: normalize_angle(ascending_node_deg * DEG_TO_RAD),
        }
    }

    /// Semi-minor axis b = a·√(1 − e²).
    ///
    /// NaN for e ≥ 1; no validation happens here.
    pub fn semi_minor_axis(&self) -> f64 {
        self.semi_major_axis * (1.0 - self.eccentricity * self.eccentricity).sqrt()
    }

    /// Point on the orbit for the ellipse parameter `t` (radians).
    pub fn point_at(&self, t: f64) -> DVec3 {
        ellipse_point(
            self.semi_major_axis,
            self.semi_minor_axis(),
            self.inclination,
            self.ascending_node,
            t,
        )
    }

    /// Sample the full closed orbit.
    ///
    /// `samples` parameter values are spread evenly over [0, 2π], both ends
    /// included, so the first and last points coincide.
    pub fn sample_path(&self, samples: usize) -> Vec<DVec3> {
        linspace_tau(samples).map(|t| self.point_at(t)).collect()
    }

    /// Orbital period in years (Kepler's third law with a in AU).
    pub fn period_years(&self) -> f64 {
        self.semi_major_axis.powf(1.5)
    }

    /// Ellipse parameter θ after `elapsed_years`, in [0, 2π).
    ///
    /// The angle advances uniformly with time; it is a mean-longitude proxy,
    /// not a solution of Kepler's equation.
    pub fn phase_at(&self, elapsed_years: f64) -> f64 {
        normalize_angle(TAU * (elapsed_years / self.period_years()))
    }

    /// Position after `elapsed_years` relative to the focus of the orbit.
    pub fn position_at(&self, elapsed_years: f64) -> DVec3 {
        self.point_at(self.phase_at(elapsed_years))
    }

    /// Distance from the origin at periapsis, a·(1 − e).
    pub fn periapsis(&self) -> f64 {
        self.semi_major_axis * (1.0 - self.eccentricity)
    }

    /// Distance from the origin at apoapsis, a·(1 + e).
    pub fn apoapsis(&self) -> f64 {
        self.semi_major_axis * (1.0 + self.eccentricity)
    }
}

/// Rotated-ellipse transform.
///
/// ```text
/// x = a·cos t·cos Ω − b·sin t·sin Ω·cos i
/// y = a·cos t·sin Ω + b·sin t·cos Ω·cos i
/// z = b·sin t·sin i
/// ```
///
/// The rotation order (inclination about x, then node about z) and the sign
/// convention are fixed; the belt generator relies on the same function.
pub fn ellipse_point(a: f64, b: f64, inclination: f64, ascending_node: f64, t: f64) -> DVec3 {
    let (sin_t, cos_t) = t.sin_cos();
    let (sin_o, cos_o) = ascending_node.sin_cos();
    let (sin_i, cos_i) = inclination.sin_cos();

    DVec3::new(
        a * cos_t * cos_o - b * sin_t * sin_o * cos_i,
        a * cos_t * sin_o + b * sin_t * cos_o * cos_i,
        b * sin_t * sin_i,
    )
}

/// Orbit of a satellite expressed around its parent.
///
/// The satellite's elements are parent-centred; results are translated into
/// the heliocentric frame by adding the parent's position. Nothing else about
/// the parent's motion is taken into account.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SatelliteOrbit {
    /// Parent-centred elements.
    pub elements: OrbitalElements,
    /// Heliocentric position of the parent.
    pub parent_position: DVec3,
}

impl SatelliteOrbit {
    pub fn new(elements: OrbitalElements, parent_position: DVec3) -> Self {
        Self {
            elements,
            parent_position,
        }
    }

    /// Heliocentric path of the satellite's orbit.
    pub fn sample_path(&self, samples: usize) -> Vec<DVec3> {
        linspace_tau(samples)
            .map(|t| self.parent_position + self.elements.point_at(t))
            .collect()
    }

    /// Heliocentric position for an ellipse parameter supplied by the caller.
    ///
    /// The model evaluates the Moon at Earth's θ rather than at its own period.
    pub fn position_at_phase(&self, theta: f64) -> DVec3 {
        self.parent_position + self.elements.point_at(theta)
    }
}

/// Wrap an angle into [0, 2π).
pub fn normalize_angle(angle: f64) -> f64 {
    let wrapped = angle.rem_euclid(TAU);
    // rem_euclid can round up to exactly 2π for tiny negative inputs
    if wrapped >= TAU { 0.0 } else { wrapped }
}

/// Evenly spaced values over [0, 2π], endpoints included.
pub fn linspace_tau(samples: usize) -> impl Iterator<Item = f64> {
    let step = if samples > 1 {
        TAU / (samples - 1) as f64
    } else {
        0.0
    };
    (0..samples).map(move |i| i as f64 * step)
}
