//! Orbital elements and appearance of the modelled bodies.
//! Elements are rounded J2000-era values; the Moon's are Earth-centred.

use crate::orbit::OrbitalElements;

/// Identifier for bodies in the model.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CelestialBodyId {
    Mercury,
    Venus,
    Earth,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
    // Dwarf planets and asteroids
    Ceres,
    Pluto,
    Eris,
    Haumea,
    Vesta,
    Sedna,
    // Moons
    Moon,
}

/// Grouping used for drawing style and legend order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BodyKind {
    /// Major planet, drawn with a solid orbit.
    Planet,
    /// Dwarf planet or asteroid, drawn with a faint dashed orbit.
    Minor,
    /// Natural satellite; elements are relative to the parent.
    Moon,
}

impl CelestialBodyId {
    /// All planets, innermost first
    pub const PLANETS: &'static [CelestialBodyId] = &[
        CelestialBodyId::Mercury,
        CelestialBodyId::Venus,
        CelestialBodyId::Earth,
        CelestialBodyId::Mars,
        CelestialBodyId::Jupiter,
        CelestialBodyId::Saturn,
        CelestialBodyId::Uranus,
        CelestialBodyId::Neptune,
    ];

    /// Dwarf planets and asteroids
    pub const MINOR_BODIES: &'static [CelestialBodyId] = &[
        CelestialBodyId::Ceres,
        CelestialBodyId::Pluto,
        CelestialBodyId::Eris,
        CelestialBodyId::Haumea,
        CelestialBodyId::Vesta,
        CelestialBodyId::Sedna,
    ];

    /// All moons
    pub const MOONS: &'static [CelestialBodyId] = &[CelestialBodyId::Moon];

    pub fn kind(&self) -> BodyKind {
        match self {
            CelestialBodyId::Mercury
            | CelestialBodyId::Venus
            | CelestialBodyId::Earth
            | CelestialBodyId::Mars
            | CelestialBodyId::Jupiter
            | CelestialBodyId::Saturn
            | CelestialBodyId::Uranus
            | CelestialBodyId::Neptune => BodyKind::Planet,
            CelestialBodyId::Ceres
            | CelestialBodyId::Pluto
            | CelestialBodyId::Eris
            | CelestialBodyId::Haumea
            | CelestialBodyId::Vesta
            | CelestialBodyId::Sedna => BodyKind::Minor,
            CelestialBodyId::Moon => BodyKind::Moon,
        }
    }

    /// Get the parent body (for moons)
    pub fn parent(&self) -> Option<CelestialBodyId> {
        match self {
            CelestialBodyId::Moon => Some(CelestialBodyId::Earth),
            _ => None,
        }
    }

    /// Human-readable name
    pub fn name(&self) -> &'static str {
        match self {
            CelestialBodyId::Mercury => "Mercury",
            CelestialBodyId::Venus => "Venus",
            CelestialBodyId::Earth => "Earth",
            CelestialBodyId::Mars => "Mars",
            CelestialBodyId::Jupiter => "Jupiter",
            CelestialBodyId::Saturn => "Saturn",
            CelestialBodyId::Uranus => "Uranus",
            CelestialBodyId::Neptune => "Neptune",
            CelestialBodyId::Ceres => "Ceres",
            CelestialBodyId::Pluto => "Pluto",
            CelestialBodyId::Eris => "Eris",
            CelestialBodyId::Haumea => "Haumea",
            CelestialBodyId::Vesta => "Vesta",
            CelestialBodyId::Sedna => "Sedna",
            CelestialBodyId::Moon => "Moon",
        }
    }
}

/// Static data for one body.
#[derive(Clone, Debug, PartialEq)]
pub struct CelestialBody {
    pub id: CelestialBodyId,
    pub elements: OrbitalElements,
    /// Display color as sRGB components in [0, 1].
    pub color: [f32; 3],
    /// Physical radius in kilometres.
    pub radius_km: f64,
}

impl CelestialBody {
    fn new(
        id: CelestialBodyId,
        elements: [f64; 4],
        color: [f32; 3],
        radius_km: f64,
    ) -> Self {
        let [a, e, inc_deg, node_deg] = elements;
        Self {
            id,
            elements: OrbitalElements::from_degrees(a, e, inc_deg, node_deg),
            color,
            radius_km,
        }
    }

    pub fn name(&self) -> &'static str {
        self.id.name()
    }

    pub fn kind(&self) -> BodyKind {
        self.id.kind()
    }
}

/// Get orbital and physical data for a body.
///
/// Elements are `[a (AU), e, i (deg), Ω (deg)]`.
pub fn get_body_data(id: CelestialBodyId) -> CelestialBody {
    use CelestialBodyId::*;

    match id {
        // Planets (heliocentric orbits)
        Mercury => CelestialBody::new(id, [0.39, 0.206, 7.0, 48.3], [0.6, 0.6, 0.5], 2439.7),
        Venus => CelestialBody::new(id, [0.72, 0.007, 3.4, 76.7], [0.9, 0.9, 0.5], 6051.8),
        Earth => CelestialBody::new(id, [1.0, 0.017, 0.0, 0.0], [0.3, 0.6, 0.4], 6371.0),
        Mars => CelestialBody::new(id, [1.52, 0.093, 1.85, 49.6], [0.8, 0.3, 0.1], 3389.5),
        Jupiter => CelestialBody::new(id, [5.20, 0.048, 1.3, 100.5], [0.9, 0.5, 0.2], 69_911.0),
        Saturn => CelestialBody::new(id, [9.58, 0.056, 2.5, 113.7], [0.9, 0.7, 0.3], 58_232.0),
        Uranus => CelestialBody::new(id, [19.18, 0.046, 0.8, 74.0], [0.4, 0.8, 0.8], 25_362.0),
        Neptune => CelestialBody::new(id, [30.07, 0.009, 1.8, 131.8], [0.2, 0.4, 0.8], 24_622.0),

        // Ceres and Vesta sit in the main belt; Pluto and Haumea in the Kuiper belt;
        // Eris in the scattered disc. Sedna is a detached TNO with a ~500 AU orbit.
        Ceres => CelestialBody::new(id, [2.77, 0.076, 10.6, 80.3], [0.6, 0.5, 0.4], 473.0),
        Pluto => CelestialBody::new(id, [39.48, 0.249, 17.1, 110.3], [0.8, 0.6, 0.4], 1188.3),
        Eris => CelestialBody::new(id, [67.78, 0.441, 44.0, 35.9], [0.5, 0.5, 0.9], 1163.0),
        Haumea => CelestialBody::new(id, [43.13, 0.195, 28.2, 121.8], [0.9, 0.9, 1.0], 816.0),
        Vesta => CelestialBody::new(id, [2.36, 0.089, 7.1, 103.9], [0.7, 0.6, 0.5], 262.7),
        Sedna => CelestialBody::new(id, [506.8, 0.849, 11.9, 144.5], [0.9, 0.4, 0.4], 500.0),

        // Earth-centred
        Moon => CelestialBody::new(id, [0.00257, 0.0549, 5.145, 125.08], [0.5, 0.5, 0.6], 1737.4),
    }
}

/// Get data for all bodies, in legend order.
pub fn all_bodies() -> Vec<CelestialBody> {
    CelestialBodyId::PLANETS
        .iter()
        .chain(CelestialBodyId::MINOR_BODIES)
        .chain(CelestialBodyId::MOONS)
        .map(|&id| get_body_data(id))
        .collect()
}
