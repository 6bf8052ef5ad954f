//! Minimal rotation quaternion.
//!
//! The full quaternion algebra lives in whatever rotation library a host
//! application uses; [`Quat`] exists so `apply_euler` and `apply_axis_angle`
//! can build a rotation on the stack and feed it straight into
//! [`Vector3::apply_quaternion`](crate::Vector3::apply_quaternion). Hamilton
//! convention, `w` the scalar part.

use crate::float_types::Real;
use crate::traits::UnitQuaternion;

/// A rotation quaternion `(x, y, z, w)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quat {
    pub x: Real,
    pub y: Real,
    pub z: Real,
    pub w: Real,
}

/// Intrinsic XYZ rotation angles in radians.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Euler {
    pub x: Real,
    pub y: Real,
    pub z: Real,
}

impl Euler {
    pub const fn new(x: Real, y: Real, z: Real) -> Self {
        Self { x, y, z }
    }
}

impl Quat {
    /// The no-op rotation.
    pub const IDENTITY: Self = Self { x: 0.0, y: 0.0, z: 0.0, w: 1.0 };

    pub const fn new(x: Real, y: Real, z: Real, w: Real) -> Self {
        Self { x, y, z, w }
    }

    /// Rotation of `angle` radians about `axis`.
    ///
    /// `axis` must be unit length; it is used as given.
    pub fn from_axis_angle(axis: &crate::Vector3, angle: Real) -> Self {
        let half_angle = angle / 2.0;
        let s = half_angle.sin();

        Self {
            x: axis.x * s,
            y: axis.y * s,
            z: axis.z * s,
            w: half_angle.cos(),
        }
    }

    /// Rotation from intrinsic XYZ euler angles.
    pub fn from_euler(euler: &Euler) -> Self {
        let (s1, c1) = (euler.x / 2.0).sin_cos();
        let (s2, c2) = (euler.y / 2.0).sin_cos();
        let (s3, c3) = (euler.z / 2.0).sin_cos();

        Self {
            x: s1 * c2 * c3 + c1 * s2 * s3,
            y: c1 * s2 * c3 - s1 * c2 * s3,
            z: c1 * c2 * s3 + s1 * s2 * c3,
            w: c1 * c2 * c3 - s1 * s2 * s3,
        }
    }
}

impl Default for Quat {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl UnitQuaternion for Quat {
    fn x(&self) -> Real {
        self.x
    }
    fn y(&self) -> Real {
        self.y
    }
    fn z(&self) -> Real {
        self.z
    }
    fn w(&self) -> Real {
        self.w
    }
}
