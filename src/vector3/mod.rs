//! Struct and functions for working with three-component vectors.
//!
//! [`Vector3`] is the workhorse value of the crate: positions, directions,
//! scales, and colors all travel through it. Nearly every operation mutates
//! in place and returns `&mut Self` so hot loops chain calls without
//! temporaries; the producing exceptions are [`Vector3::clone`], the
//! `*_vectors` family (which writes into the receiver from two operands),
//! and the factories in this module.

use crate::coords::{Cylindrical, Spherical};
use crate::errors::VectorError;
use crate::float_types::{Real, TAU};
use crate::traits::VertexAttribute;
use rand::Rng;

mod geometry;
mod ops;
mod transform;

/// A mutable vector of three `Real` components, addressable by index 0, 1, 2.
///
/// Identity is by value: two vectors with equal components are
/// interchangeable everywhere. Component order is fixed; `#[repr(C)]` keeps
/// the three floats contiguous for flat-array interchange with vertex and
/// uniform buffers.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vector3 {
    pub x: Real,
    pub y: Real,
    pub z: Real,
}

impl Vector3 {
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);
    pub const ONE: Self = Self::new(1.0, 1.0, 1.0);
    pub const X: Self = Self::new(1.0, 0.0, 0.0);
    pub const Y: Self = Self::new(0.0, 1.0, 0.0);
    pub const Z: Self = Self::new(0.0, 0.0, 1.0);

    pub const fn new(x: Real, y: Real, z: Real) -> Self {
        Self { x, y, z }
    }

    /// Overwrite all three components.
    pub fn set(&mut self, x: Real, y: Real, z: Real) -> &mut Self {
        self.x = x;
        self.y = y;
        self.z = z;
        self
    }

    /// Set every component to `scalar`.
    pub fn set_scalar(&mut self, scalar: Real) -> &mut Self {
        self.x = scalar;
        self.y = scalar;
        self.z = scalar;
        self
    }

    pub fn set_x(&mut self, x: Real) -> &mut Self {
        self.x = x;
        self
    }

    pub fn set_y(&mut self, y: Real) -> &mut Self {
        self.y = y;
        self
    }

    pub fn set_z(&mut self, z: Real) -> &mut Self {
        self.z = z;
        self
    }

    /// Set component `index` (0 = x, 1 = y, 2 = z).
    ///
    /// This is the one checked failure in the crate: any other index is a
    /// programmer error and reports [`VectorError::IndexOutOfRange`].
    pub fn set_component(&mut self, index: usize, value: Real) -> Result<&mut Self, VectorError> {
        match index {
            0 => self.x = value,
            1 => self.y = value,
            2 => self.z = value,
            _ => return Err(VectorError::IndexOutOfRange(index)),
        }
        Ok(self)
    }

    /// Read component `index` (0 = x, 1 = y, 2 = z).
    pub fn component(&self, index: usize) -> Result<Real, VectorError> {
        match index {
            0 => Ok(self.x),
            1 => Ok(self.y),
            2 => Ok(self.z),
            _ => Err(VectorError::IndexOutOfRange(index)),
        }
    }

    /// Overwrite this vector with the components of `v`.
    pub fn copy(&mut self, v: Vector3) -> &mut Self {
        self.x = v.x;
        self.y = v.y;
        self.z = v.z;
        self
    }

    /// Exact componentwise equality, no epsilon.
    ///
    /// Tolerance comparisons go through the [`approx`] traits instead.
    pub fn equals(&self, v: Vector3) -> bool {
        self.x == v.x && self.y == v.y && self.z == v.z
    }

    /// Read three consecutive slots of `array` starting at `offset`.
    ///
    /// `array` must hold at least `offset + 3` elements.
    pub fn from_array(&mut self, array: &[Real], offset: usize) -> &mut Self {
        self.x = array[offset];
        self.y = array[offset + 1];
        self.z = array[offset + 2];
        self
    }

    /// The components as a flat array `[x, y, z]`.
    pub const fn to_array(&self) -> [Real; 3] {
        [self.x, self.y, self.z]
    }

    /// Write the components into three consecutive slots of `slice` starting
    /// at `offset`.
    ///
    /// `slice` must hold at least `offset + 3` elements; use
    /// [`Vector3::to_vec`] for a growable target.
    pub fn to_slice(&self, slice: &mut [Real], offset: usize) {
        slice[offset] = self.x;
        slice[offset + 1] = self.y;
        slice[offset + 2] = self.z;
    }

    /// Write the components into `out` at `offset`, zero-extending `out`
    /// first if it is too short.
    pub fn to_vec(&self, out: &mut Vec<Real>, offset: usize) {
        if out.len() < offset + 3 {
            out.resize(offset + 3, 0.0);
        }
        self.to_slice(out, offset);
    }

    /// Read vertex `index` from an indexed attribute store.
    pub fn from_buffer_attribute<A: VertexAttribute>(
        &mut self,
        attribute: &A,
        index: usize,
    ) -> &mut Self {
        self.x = attribute.x(index);
        self.y = attribute.y(index);
        self.z = attribute.z(index);
        self
    }

    /// Set from spherical coordinates.
    pub fn set_from_spherical(&mut self, s: Spherical) -> &mut Self {
        self.set_from_spherical_coords(s.radius, s.phi, s.theta)
    }

    /// Set from `(radius, phi, theta)` in the physics convention:
    /// `x = r·sinφ·sinθ`, `y = r·cosφ`, `z = r·sinφ·cosθ`.
    ///
    /// `phi = 0` lands on the +y pole regardless of `theta`.
    pub fn set_from_spherical_coords(&mut self, radius: Real, phi: Real, theta: Real) -> &mut Self {
        let sin_phi_radius = phi.sin() * radius;

        self.x = sin_phi_radius * theta.sin();
        self.y = phi.cos() * radius;
        self.z = sin_phi_radius * theta.cos();
        self
    }

    /// Copy the three angles of `e` as plain components, in radians.
    pub fn set_from_euler(&mut self, e: crate::quat::Euler) -> &mut Self {
        self.x = e.x;
        self.y = e.y;
        self.z = e.z;
        self
    }

    /// Set from cylindrical coordinates.
    pub fn set_from_cylindrical(&mut self, c: Cylindrical) -> &mut Self {
        self.set_from_cylindrical_coords(c.radius, c.theta, c.y)
    }

    /// Set from `(radius, theta, y)`: `x = r·sinθ`, `z = r·cosθ`.
    pub fn set_from_cylindrical_coords(&mut self, radius: Real, theta: Real, y: Real) -> &mut Self {
        self.x = radius * theta.sin();
        self.y = y;
        self.z = radius * theta.cos();
        self
    }

    /// Draw each component independently and uniformly from `[0, 1)`.
    ///
    /// This is a componentwise draw, not a uniform point on any shape; for
    /// that see [`Vector3::random_direction`].
    pub fn random<R: Rng + ?Sized>(&mut self, rng: &mut R) -> &mut Self {
        self.x = rng.random();
        self.y = rng.random();
        self.z = rng.random();
        self
    }

    /// Uniform point on the unit sphere via sphere point picking:
    /// `u ∈ [-1, 1)` for z, azimuth `t ∈ [0, 2π)`, ring radius `√(1 - u²)`.
    pub fn random_direction<R: Rng + ?Sized>(&mut self, rng: &mut R) -> &mut Self {
        let u: Real = rng.random::<Real>() * 2.0 - 1.0;
        let t: Real = rng.random::<Real>() * TAU;
        let f = (1.0 - u * u).sqrt();

        self.x = f * t.cos();
        self.y = f * t.sin();
        self.z = u;
        self
    }
}

impl std::ops::Index<usize> for Vector3 {
    type Output = Real;

    /// Unchecked-style access; out-of-range panics like any slice index.
    /// The checked surface is [`Vector3::component`].
    fn index(&self, index: usize) -> &Real {
        match index {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            _ => panic!("index is out of range: {index}"),
        }
    }
}

impl std::ops::IndexMut<usize> for Vector3 {
    fn index_mut(&mut self, index: usize) -> &mut Real {
        match index {
            0 => &mut self.x,
            1 => &mut self.y,
            2 => &mut self.z,
            _ => panic!("index is out of range: {index}"),
        }
    }
}

impl std::fmt::Display for Vector3 {
    /// Formats as `(x, y, z)`.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

impl From<[Real; 3]> for Vector3 {
    fn from(array: [Real; 3]) -> Self {
        Self::new(array[0], array[1], array[2])
    }
}

impl From<Vector3> for [Real; 3] {
    fn from(v: Vector3) -> Self {
        v.to_array()
    }
}

/// Components in index order; finite and restartable, so destructuring
/// `let [x, y, z]`-style loops and `collect` both work.
impl IntoIterator for Vector3 {
    type Item = Real;
    type IntoIter = core::array::IntoIter<Real, 3>;

    fn into_iter(self) -> Self::IntoIter {
        self.to_array().into_iter()
    }
}

impl IntoIterator for &Vector3 {
    type Item = Real;
    type IntoIter = core::array::IntoIter<Real, 3>;

    fn into_iter(self) -> Self::IntoIter {
        self.to_array().into_iter()
    }
}

impl approx::AbsDiffEq for Vector3 {
    type Epsilon = Real;

    fn default_epsilon() -> Self::Epsilon {
        <Real as approx::AbsDiffEq>::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        approx::AbsDiffEq::abs_diff_eq(&self.x, &other.x, epsilon)
            && approx::AbsDiffEq::abs_diff_eq(&self.y, &other.y, epsilon)
            && approx::AbsDiffEq::abs_diff_eq(&self.z, &other.z, epsilon)
    }
}

impl approx::RelativeEq for Vector3 {
    fn default_max_relative() -> Self::Epsilon {
        <Real as approx::RelativeEq>::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: Self::Epsilon, max_relative: Self::Epsilon) -> bool {
        approx::RelativeEq::relative_eq(&self.x, &other.x, epsilon, max_relative)
            && approx::RelativeEq::relative_eq(&self.y, &other.y, epsilon, max_relative)
            && approx::RelativeEq::relative_eq(&self.z, &other.z, epsilon, max_relative)
    }
}

impl approx::UlpsEq for Vector3 {
    fn default_max_ulps() -> u32 {
        <Real as approx::UlpsEq>::default_max_ulps()
    }

    fn ulps_eq(&self, other: &Self, epsilon: Self::Epsilon, max_ulps: u32) -> bool {
        approx::UlpsEq::ulps_eq(&self.x, &other.x, epsilon, max_ulps)
            && approx::UlpsEq::ulps_eq(&self.y, &other.y, epsilon, max_ulps)
            && approx::UlpsEq::ulps_eq(&self.z, &other.z, epsilon, max_ulps)
    }
}
