//! Property-based tests for orbit geometry using proptest.
//!
//! These tests verify that the rotated-ellipse transform and the phase
//! approximation keep their geometric properties across the element space.

use proptest::prelude::*;
use std::f64::consts::TAU;

use rand::SeedableRng;
use rand::rngs::StdRng;

use super::{OrbitalElements, ellipse_point};
use crate::belt::{BeltCloud, BeltRegion};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Every point lies between periapsis and apoapsis distance.
    #[test]
    fn prop_distance_within_apsides(
        a in 0.001f64..600.0,
        e in 0.0f64..0.99,
        inc_deg in 0.0f64..180.0,
        node_deg in 0.0f64..360.0,
        t in 0.0f64..TAU,
    ) {
        let orbit = OrbitalElements::from_degrees(a, e, inc_deg, node_deg);
        let r = orbit.point_at(t).length();
        let tol = 1e-9 * a;

        prop_assert!(
            r >= orbit.periapsis() - tol && r <= orbit.apoapsis() + tol,
            "r={} outside [{}, {}] for a={}, e={}",
            r, orbit.periapsis(), orbit.apoapsis(), a, e
        );
    }

    /// With zero inclination and node the orbit is the standard planar ellipse.
    #[test]
    fn prop_planar_orbit_is_standard_ellipse(
        a in 0.01f64..100.0,
        e in 0.0f64..0.99,
        t in 0.0f64..TAU,
    ) {
        let orbit = OrbitalElements::from_degrees(a, e, 0.0, 0.0);
        let b = orbit.semi_minor_axis();
        let p = orbit.point_at(t);

        prop_assert!(p.z.abs() < 1e-12 * a);
        prop_assert!(p.x.abs() <= a * (1.0 + 1e-12));
        prop_assert!(p.y.abs() <= b * (1.0 + 1e-12) + 1e-15);

        // (x/a)² + (y/b)² = 1
        if b > 1e-6 {
            let on_curve = (p.x / a).powi(2) + (p.y / b).powi(2);
            prop_assert!((on_curve - 1.0).abs() < 1e-9, "ellipse residual {}", on_curve - 1.0);
        }
    }

    /// Positions repeat after exactly one period.
    #[test]
    fn prop_period_closure(
        a in 0.1f64..100.0,
        e in 0.0f64..0.9,
        inc_deg in 0.0f64..90.0,
        node_deg in 0.0f64..360.0,
        elapsed in 0.0f64..50.0,
    ) {
        let orbit = OrbitalElements::from_degrees(a, e, inc_deg, node_deg);
        let p1 = orbit.position_at(elapsed);
        let p2 = orbit.position_at(elapsed + orbit.period_years());

        let diff = (p2 - p1).length();
        prop_assert!(
            diff < 1e-7 * a,
            "position should repeat after one period, diff = {} AU",
            diff
        );
    }

    /// The phase is always normalized to [0, 2π).
    #[test]
    fn prop_phase_is_normalized(
        a in 0.001f64..600.0,
        elapsed in -1000.0f64..1000.0,
    ) {
        let orbit = OrbitalElements::from_degrees(a, 0.1, 0.0, 0.0);
        let theta = orbit.phase_at(elapsed);
        prop_assert!((0.0..TAU).contains(&theta), "theta={}", theta);
    }

    /// Rotation preserves distance: the transform only tilts and turns the ellipse.
    #[test]
    fn prop_rotation_preserves_radius(
        a in 0.01f64..100.0,
        e in 0.0f64..0.95,
        inc in 0.0f64..TAU,
        node in 0.0f64..TAU,
        t in 0.0f64..TAU,
    ) {
        let b = a * (1.0 - e * e).sqrt();
        let flat = ellipse_point(a, b, 0.0, 0.0, t).length();
        let rotated = ellipse_point(a, b, inc, node, t).length();
        prop_assert!((flat - rotated).abs() < 1e-9 * a);
    }

    /// Belt points stay between the smallest semi-minor axis and the largest
    /// semi-major axis the region allows.
    #[test]
    fn prop_belt_points_within_shell(seed in any::<u64>(), kuiper in any::<bool>()) {
        let region = match kuiper {
            true => BeltRegion::kuiper_belt(),
            false => BeltRegion::asteroid_belt(),
        };
        let region = region.with_count(200);
        let (a_min, a_max) = region.semi_major_axis_au;
        let e_max = region.eccentricity.1;
        let inner = a_min * (1.0 - e_max * e_max).sqrt();

        let cloud = BeltCloud::generate(region, &mut StdRng::seed_from_u64(seed)).unwrap();
        prop_assert_eq!(cloud.len(), 200);
        for p in &cloud.points {
            let r = p.length();
            prop_assert!(r >= inner - 1e-9 && r <= a_max + 1e-9, "r={}", r);
        }
    }
}
