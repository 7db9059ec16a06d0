//! Fixed catalog of modelled bodies.
//!
//! The catalog is embedded data. It is validated once at load so that every
//! orbit handed to the geometry code is a closed ellipse.

pub mod data;

pub use data::{BodyKind, CelestialBody, CelestialBodyId, all_bodies, get_body_data};

use std::collections::HashSet;

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum CatalogError {
    #[error("{body}: semi-major axis must be positive and finite, got {value}")]
    InvalidSemiMajorAxis { body: &'static str, value: f64 },

    #[error("{body}: eccentricity must be in [0, 1), got {value}")]
    InvalidEccentricity { body: &'static str, value: f64 },

    #[error("{body}: orbital angles must be finite")]
    NonFiniteAngle { body: &'static str },

    #[error("{body}: radius must be positive and finite, got {value} km")]
    InvalidRadius { body: &'static str, value: f64 },

    #[error("{0} appears more than once in the catalog")]
    DuplicateBody(&'static str),

    #[error("{body} orbits {parent}, which is not in the catalog")]
    MissingParent {
        body: &'static str,
        parent: &'static str,
    },
}

/// Validated list of bodies.
#[derive(Clone, Debug)]
pub struct Catalog {
    bodies: Vec<CelestialBody>,
}

impl Catalog {
    /// The built-in catalog.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_bodies(all_bodies())
    }

    /// Build a catalog, rejecting entries that cannot form a closed orbit.
    pub fn from_bodies(bodies: Vec<CelestialBody>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        for body in &bodies {
            validate_body(body)?;
            if !seen.insert(body.id) {
                return Err(CatalogError::DuplicateBody(body.name()));
            }
        }

        for body in &bodies {
            if let Some(parent) = body.id.parent()
                && !seen.contains(&parent)
            {
                return Err(CatalogError::MissingParent {
                    body: body.name(),
                    parent: parent.name(),
                });
            }
        }

        Ok(Self { bodies })
    }

    pub fn bodies(&self) -> &[CelestialBody] {
        &self.bodies
    }

    pub fn get(&self, id: CelestialBodyId) -> Option<&CelestialBody> {
        self.bodies.iter().find(|b| b.id == id)
    }

    /// Bodies of one kind, in catalog order.
    pub fn of_kind(&self, kind: BodyKind) -> impl Iterator<Item = &CelestialBody> {
        self.bodies.iter().filter(move |b| b.kind() == kind)
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }
}

fn validate_body(body: &CelestialBody) -> Result<(), CatalogError> {
    let name = body.name();
    let el = &body.elements;

    if !(el.semi_major_axis.is_finite() && el.semi_major_axis > 0.0) {
        return Err(CatalogError::InvalidSemiMajorAxis {
            body: name,
            value: el.semi_major_axis,
        });
    }
    if !(0.0..1.0).contains(&el.eccentricity) {
        return Err(CatalogError::InvalidEccentricity {
            body: name,
            value: el.eccentricity,
        });
    }
    if !(el.inclination.is_finite() && el.ascending_node.is_finite()) {
        return Err(CatalogError::NonFiniteAngle { body: name });
    }
    if !(body.radius_km.is_finite() && body.radius_km > 0.0) {
        return Err(CatalogError::InvalidRadius {
            body: name,
            value: body.radius_km,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog_is_valid() {
        let catalog = Catalog::builtin().expect("built-in catalog should validate");
        assert_eq!(catalog.len(), 15);
        assert_eq!(catalog.of_kind(BodyKind::Planet).count(), 8);
        assert_eq!(catalog.of_kind(BodyKind::Minor).count(), 6);
        assert_eq!(catalog.of_kind(BodyKind::Moon).count(), 1);
    }

    #[test]
    fn test_catalog_order_starts_with_mercury() {
        let catalog = Catalog::builtin().unwrap();
        let names: Vec<_> = catalog.bodies().iter().map(|b| b.name()).collect();
        assert_eq!(names.first(), Some(&"Mercury"));
        assert_eq!(names[7], "Neptune");
        assert_eq!(names[13], "Sedna");
        assert_eq!(names.last(), Some(&"Moon"));
    }

    #[test]
    fn test_earth_elements() {
        let earth = get_body_data(CelestialBodyId::Earth);
        assert_eq!(earth.elements.semi_major_axis, 1.0);
        assert_eq!(earth.elements.eccentricity, 0.017);
        assert_eq!(earth.elements.inclination, 0.0);
        assert_eq!(earth.color, [0.3, 0.6, 0.4]);
        assert_eq!(earth.radius_km, 6371.0);
    }

    #[test]
    fn test_rejects_unbound_eccentricity() {
        let mut bodies = all_bodies();
        bodies[3].elements.eccentricity = 1.0;
        let err = Catalog::from_bodies(bodies).unwrap_err();
        assert_eq!(
            err,
            CatalogError::InvalidEccentricity {
                body: "Mars",
                value: 1.0
            }
        );
    }

    #[test]
    fn test_rejects_non_positive_axis() {
        let mut bodies = all_bodies();
        bodies[0].elements.semi_major_axis = 0.0;
        assert!(matches!(
            Catalog::from_bodies(bodies),
            Err(CatalogError::InvalidSemiMajorAxis { body: "Mercury", .. })
        ));
    }

    #[test]
    fn test_rejects_nan_angle_and_radius() {
        let mut bodies = all_bodies();
        bodies[1].elements.inclination = f64::NAN;
        assert!(matches!(
            Catalog::from_bodies(bodies),
            Err(CatalogError::NonFiniteAngle { body: "Venus" })
        ));

        let mut bodies = all_bodies();
        bodies[4].radius_km = -1.0;
        assert!(matches!(
            Catalog::from_bodies(bodies),
            Err(CatalogError::InvalidRadius { body: "Jupiter", .. })
        ));
    }

    #[test]
    fn test_rejects_duplicates() {
        let mut bodies = all_bodies();
        bodies.push(get_body_data(CelestialBodyId::Pluto));
        assert_eq!(
            Catalog::from_bodies(bodies).unwrap_err(),
            CatalogError::DuplicateBody("Pluto")
        );
    }

    #[test]
    fn test_moon_requires_earth() {
        let bodies: Vec<_> = all_bodies()
            .into_iter()
            .filter(|b| b.id != CelestialBodyId::Earth)
            .collect();
        let err = Catalog::from_bodies(bodies).unwrap_err();
        assert_eq!(err.to_string(), "Moon orbits Earth, which is not in the catalog");
    }
}
