//! Narrow contracts [`Vector3`](crate::Vector3) requires from its collaborators.
//!
//! Matrix, quaternion, camera, and vertex-attribute types live elsewhere in a
//! rendering stack; this crate only consumes the numeric shape each one
//! exposes. Element order is column-major throughout.

use crate::float_types::Real;

/// A 3x3 matrix exposed as 9 column-major elements.
///
/// Columns occupy elements 0..3, 3..6, and 6..9.
pub trait Matrix3Elements {
    fn elements(&self) -> &[Real; 9];
}

impl Matrix3Elements for [Real; 9] {
    fn elements(&self) -> &[Real; 9] {
        self
    }
}

/// A 4x4 matrix exposed as 16 column-major elements.
///
/// Columns occupy elements 0..4, 4..8, 8..12, and 12..16; the translation of
/// an affine matrix sits at elements 12, 13, 14.
pub trait Matrix4Elements {
    fn elements(&self) -> &[Real; 16];
}

impl Matrix4Elements for [Real; 16] {
    fn elements(&self) -> &[Real; 16] {
        self
    }
}

/// A rotation quaternion in Hamilton convention, `w` the scalar part.
///
/// Callers of [`Vector3::apply_quaternion`](crate::Vector3::apply_quaternion)
/// guarantee unit length; no normalization happens on this side of the
/// contract.
pub trait UnitQuaternion {
    fn x(&self) -> Real;
    fn y(&self) -> Real;
    fn z(&self) -> Real;
    fn w(&self) -> Real;
}

impl UnitQuaternion for (Real, Real, Real, Real) {
    fn x(&self) -> Real {
        self.0
    }
    fn y(&self) -> Real {
        self.1
    }
    fn z(&self) -> Real {
        self.2
    }
    fn w(&self) -> Real {
        self.3
    }
}

/// The two matrix pairs a camera contributes to screen-space conversion.
///
/// `project` runs world → view → clip, so it needs the world-inverse and
/// projection matrices; `unproject` runs clip → view → world and needs the
/// two inverses of that path.
pub trait ProjectionCamera {
    fn world_matrix(&self) -> &[Real; 16];
    fn world_matrix_inverse(&self) -> &[Real; 16];
    fn projection_matrix(&self) -> &[Real; 16];
    fn projection_matrix_inverse(&self) -> &[Real; 16];
}

/// An indexed per-vertex store with three scalar channels.
pub trait VertexAttribute {
    fn x(&self, index: usize) -> Real;
    fn y(&self, index: usize) -> Real;
    fn z(&self, index: usize) -> Real;
}

/// Plain slices of component triples act as the simplest attribute buffer.
impl VertexAttribute for &[[Real; 3]] {
    fn x(&self, index: usize) -> Real {
        self[index][0]
    }
    fn y(&self, index: usize) -> Real {
        self[index][1]
    }
    fn z(&self, index: usize) -> Real {
        self[index][2]
    }
}
