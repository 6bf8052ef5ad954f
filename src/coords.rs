//! Spherical and cylindrical coordinate triples.
//!
//! Both follow the physics convention used across the crate: `phi` is the
//! polar angle measured down from the +y axis, `theta` is the azimuth around
//! +y measured from +z toward +x.

use crate::float_types::Real;

/// Spherical coordinates `(radius, phi, theta)`.
///
/// `phi = 0` is the +y pole, `phi = π` the -y pole.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spherical {
    pub radius: Real,
    pub phi: Real,
    pub theta: Real,
}

impl Spherical {
    pub const fn new(radius: Real, phi: Real, theta: Real) -> Self {
        Self { radius, phi, theta }
    }
}

impl Default for Spherical {
    /// Unit radius pointing at the +y pole.
    fn default() -> Self {
        Self::new(1.0, 0.0, 0.0)
    }
}

/// Cylindrical coordinates `(radius, theta, y)`.
///
/// `radius` is the distance from the y axis and `y` the height along it.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Cylindrical {
    pub radius: Real,
    pub theta: Real,
    pub y: Real,
}

impl Cylindrical {
    pub const fn new(radius: Real, theta: Real, y: Real) -> Self {
        Self { radius, theta, y }
    }
}
