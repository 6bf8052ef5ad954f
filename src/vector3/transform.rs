//! Applying matrix, quaternion, and camera transforms to a [`Vector3`], and
//! extracting vectors back out of matrices.
//!
//! Matrices arrive through the column-major element contracts in
//! [`crate::traits`]; a 4x4 affine matrix carries its translation at
//! elements 12, 13, 14.

use super::Vector3;
use crate::float_types::Real;
use crate::quat::{Euler, Quat};
use crate::traits::{Matrix3Elements, Matrix4Elements, ProjectionCamera, UnitQuaternion};

impl Vector3 {
    /// Apply a 3x3 linear transform.
    pub fn apply_matrix3<M: Matrix3Elements>(&mut self, m: &M) -> &mut Self {
        let (x, y, z) = (self.x, self.y, self.z);
        let e = m.elements();

        self.x = e[0] * x + e[3] * y + e[6] * z;
        self.y = e[1] * x + e[4] * y + e[7] * z;
        self.z = e[2] * x + e[5] * y + e[8] * z;
        self
    }

    /// Apply a normal matrix (inverse-transpose of a model matrix) and
    /// renormalize, keeping normals perpendicular under non-uniform scale.
    pub fn apply_normal_matrix<M: Matrix3Elements>(&mut self, m: &M) -> &mut Self {
        self.apply_matrix3(m).normalize()
    }

    /// Apply a 4x4 transform, treating this vector as a homogeneous point
    /// with implicit `w = 1` and dividing through by the transformed `w`.
    ///
    /// A projective matrix that maps the point to `w' = 0` produces
    /// infinities/NaNs; the perspective division is deliberately unguarded.
    pub fn apply_matrix4<M: Matrix4Elements>(&mut self, m: &M) -> &mut Self {
        let (x, y, z) = (self.x, self.y, self.z);
        let e = m.elements();

        let w = 1.0 / (e[3] * x + e[7] * y + e[11] * z + e[15]);

        self.x = (e[0] * x + e[4] * y + e[8] * z + e[12]) * w;
        self.y = (e[1] * x + e[5] * y + e[9] * z + e[13]) * w;
        self.z = (e[2] * x + e[6] * y + e[10] * z + e[14]) * w;
        self
    }

    /// Transform this vector as a direction: apply only the 3x3 linear part
    /// of an affine 4x4 matrix, ignore the translation column, renormalize.
    pub fn transform_direction<M: Matrix4Elements>(&mut self, m: &M) -> &mut Self {
        let (x, y, z) = (self.x, self.y, self.z);
        let e = m.elements();

        self.x = e[0] * x + e[4] * y + e[8] * z;
        self.y = e[1] * x + e[5] * y + e[9] * z;
        self.z = e[2] * x + e[6] * y + e[10] * z;
        self.normalize()
    }

    /// **Mathematical Foundation: Quaternion Rotation**
    ///
    /// Rotate by the unit quaternion `q` via the sandwich product
    /// `q v q⁻¹`, expanded into two cross-product passes instead of a
    /// quaternion-to-matrix conversion:
    /// ```text
    /// i = q ⊗ (v, 0)        (intermediate quaternion)
    /// v' = i ⊗ q⁻¹          (vector part)
    /// ```
    /// `q` must be unit length; no normalization is performed here.
    pub fn apply_quaternion<Q: UnitQuaternion>(&mut self, q: &Q) -> &mut Self {
        let (x, y, z) = (self.x, self.y, self.z);
        let (qx, qy, qz, qw) = (q.x(), q.y(), q.z(), q.w());

        // quat * vector
        let ix = qw * x + qy * z - qz * y;
        let iy = qw * y + qz * x - qx * z;
        let iz = qw * z + qx * y - qy * x;
        let iw = -qx * x - qy * y - qz * z;

        // result * inverse quat
        self.x = ix * qw + iw * -qx + iy * -qz - iz * -qy;
        self.y = iy * qw + iw * -qy + iz * -qx - ix * -qz;
        self.z = iz * qw + iw * -qz + ix * -qy - iy * -qx;
        self
    }

    /// Rotate by intrinsic XYZ euler angles.
    ///
    /// Builds the rotation on the stack and delegates to
    /// [`Vector3::apply_quaternion`], so the call is reentrant and
    /// thread-safe.
    pub fn apply_euler(&mut self, euler: Euler) -> &mut Self {
        self.apply_quaternion(&Quat::from_euler(&euler))
    }

    /// Rotate by `angle` radians about the unit-length `axis`.
    pub fn apply_axis_angle(&mut self, axis: Vector3, angle: Real) -> &mut Self {
        self.apply_quaternion(&Quat::from_axis_angle(&axis, angle))
    }

    /// World space → normalized device coordinates through `camera`:
    /// world → view → clip.
    pub fn project<C: ProjectionCamera>(&mut self, camera: &C) -> &mut Self {
        self.apply_matrix4(camera.world_matrix_inverse())
            .apply_matrix4(camera.projection_matrix())
    }

    /// Normalized device coordinates → world space through `camera`:
    /// clip → view → world.
    pub fn unproject<C: ProjectionCamera>(&mut self, camera: &C) -> &mut Self {
        self.apply_matrix4(camera.projection_matrix_inverse())
            .apply_matrix4(camera.world_matrix())
    }

    /// Extract the translation column of an affine 4x4 matrix.
    pub fn set_from_matrix_position<M: Matrix4Elements>(&mut self, m: &M) -> &mut Self {
        let e = m.elements();

        self.x = e[12];
        self.y = e[13];
        self.z = e[14];
        self
    }

    /// Extract the per-axis scale of an affine 4x4 matrix: the length of
    /// each of its three basis columns.
    pub fn set_from_matrix_scale<M: Matrix4Elements>(&mut self, m: &M) -> &mut Self {
        let sx = self.set_from_matrix_column(m, 0).length();
        let sy = self.set_from_matrix_column(m, 1).length();
        let sz = self.set_from_matrix_column(m, 2).length();

        self.set(sx, sy, sz)
    }

    /// Copy column `index` of a 4x4 matrix (stride 4).
    pub fn set_from_matrix_column<M: Matrix4Elements>(&mut self, m: &M, index: usize) -> &mut Self {
        self.from_array(m.elements(), index * 4)
    }

    /// Copy column `index` of a 3x3 matrix (stride 3).
    pub fn set_from_matrix3_column<M: Matrix3Elements>(&mut self, m: &M, index: usize) -> &mut Self {
        self.from_array(m.elements(), index * 3)
    }
}
