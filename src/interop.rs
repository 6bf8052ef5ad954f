//! Conversions to and from `nalgebra` types, for crossing into the wider
//! linear-algebra ecosystem at API boundaries.

use crate::float_types::Real;
use crate::vector3::Vector3;

impl From<nalgebra::Vector3<Real>> for Vector3 {
    fn from(v: nalgebra::Vector3<Real>) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl From<Vector3> for nalgebra::Vector3<Real> {
    fn from(v: Vector3) -> Self {
        nalgebra::Vector3::new(v.x, v.y, v.z)
    }
}

impl From<nalgebra::Point3<Real>> for Vector3 {
    fn from(p: nalgebra::Point3<Real>) -> Self {
        Self::new(p.x, p.y, p.z)
    }
}

impl From<Vector3> for nalgebra::Point3<Real> {
    fn from(v: Vector3) -> Self {
        nalgebra::Point3::new(v.x, v.y, v.z)
    }
}
