//! Componentwise arithmetic for [`Vector3`].
//!
//! Everything here applies independently to x, y, and z. The in-place
//! methods are the hot-path surface; the `std::ops` impls at the bottom are
//! value-returning sugar layered over them.

use super::Vector3;
use crate::float_types::Real;

impl Vector3 {
    /// `self += v`, componentwise.
    ///
    /// # Example
    /// ```rust
    /// # use vec3rs::Vector3;
    /// let mut v = Vector3::new(1.0, 2.0, 3.0);
    /// v.add(Vector3::ONE).multiply_scalar(2.0);
    /// assert_eq!(v, Vector3::new(4.0, 6.0, 8.0));
    /// ```
    pub fn add(&mut self, v: Vector3) -> &mut Self {
        self.x += v.x;
        self.y += v.y;
        self.z += v.z;
        self
    }

    /// Add `s` to every component.
    pub fn add_scalar(&mut self, s: Real) -> &mut Self {
        self.x += s;
        self.y += s;
        self.z += s;
        self
    }

    /// `self = a + b`.
    pub fn add_vectors(&mut self, a: Vector3, b: Vector3) -> &mut Self {
        self.x = a.x + b.x;
        self.y = a.y + b.y;
        self.z = a.z + b.z;
        self
    }

    /// `self += v * s`, the fused step of an integrator loop.
    pub fn add_scaled_vector(&mut self, v: Vector3, s: Real) -> &mut Self {
        self.x += v.x * s;
        self.y += v.y * s;
        self.z += v.z * s;
        self
    }

    /// `self -= v`, componentwise.
    pub fn sub(&mut self, v: Vector3) -> &mut Self {
        self.x -= v.x;
        self.y -= v.y;
        self.z -= v.z;
        self
    }

    /// Subtract `s` from every component.
    pub fn sub_scalar(&mut self, s: Real) -> &mut Self {
        self.x -= s;
        self.y -= s;
        self.z -= s;
        self
    }

    /// `self = a - b`.
    pub fn sub_vectors(&mut self, a: Vector3, b: Vector3) -> &mut Self {
        self.x = a.x - b.x;
        self.y = a.y - b.y;
        self.z = a.z - b.z;
        self
    }

    /// `self *= v`, componentwise.
    pub fn multiply(&mut self, v: Vector3) -> &mut Self {
        self.x *= v.x;
        self.y *= v.y;
        self.z *= v.z;
        self
    }

    /// Scale every component by `scalar`.
    pub fn multiply_scalar(&mut self, scalar: Real) -> &mut Self {
        self.x *= scalar;
        self.y *= scalar;
        self.z *= scalar;
        self
    }

    /// `self = a * b`, componentwise.
    pub fn multiply_vectors(&mut self, a: Vector3, b: Vector3) -> &mut Self {
        self.x = a.x * b.x;
        self.y = a.y * b.y;
        self.z = a.z * b.z;
        self
    }

    /// `self /= v`, componentwise. Zero components in `v` propagate
    /// IEEE-754 infinities/NaNs; nothing is guarded here.
    pub fn divide(&mut self, v: Vector3) -> &mut Self {
        self.x /= v.x;
        self.y /= v.y;
        self.z /= v.z;
        self
    }

    /// Divide every component by `scalar`, as `multiply_scalar(1/scalar)`.
    ///
    /// A zero `scalar` produces ±infinity/NaN components rather than an
    /// error; callers throughout a pipeline rely on that propagation.
    pub fn divide_scalar(&mut self, scalar: Real) -> &mut Self {
        self.multiply_scalar(1.0 / scalar)
    }

    /// Componentwise minimum against `v`.
    ///
    /// Follows `Real::min`: when exactly one operand is NaN the other is
    /// kept, rather than the NaN propagating.
    pub fn min(&mut self, v: Vector3) -> &mut Self {
        self.x = self.x.min(v.x);
        self.y = self.y.min(v.y);
        self.z = self.z.min(v.z);
        self
    }

    /// Componentwise maximum against `v`.
    ///
    /// Follows `Real::max`: when exactly one operand is NaN the other is
    /// kept, rather than the NaN propagating.
    pub fn max(&mut self, v: Vector3) -> &mut Self {
        self.x = self.x.max(v.x);
        self.y = self.y.max(v.y);
        self.z = self.z.max(v.z);
        self
    }

    /// Componentwise clamp between `min` and `max`.
    ///
    /// Assumes `min[i] <= max[i]` for each component; anything else is the
    /// caller's responsibility.
    pub fn clamp(&mut self, min: Vector3, max: Vector3) -> &mut Self {
        self.x = min.x.max(max.x.min(self.x));
        self.y = min.y.max(max.y.min(self.y));
        self.z = min.z.max(max.z.min(self.z));
        self
    }

    /// Clamp every component between `min_val` and `max_val`.
    pub fn clamp_scalar(&mut self, min_val: Real, max_val: Real) -> &mut Self {
        self.x = min_val.max(max_val.min(self.x));
        self.y = min_val.max(max_val.min(self.y));
        self.z = min_val.max(max_val.min(self.z));
        self
    }

    /// Round every component down.
    pub fn floor(&mut self) -> &mut Self {
        self.x = self.x.floor();
        self.y = self.y.floor();
        self.z = self.z.floor();
        self
    }

    /// Round every component up.
    pub fn ceil(&mut self) -> &mut Self {
        self.x = self.x.ceil();
        self.y = self.y.ceil();
        self.z = self.z.ceil();
        self
    }

    /// Round every component to the nearest integer, halves away from zero.
    pub fn round(&mut self) -> &mut Self {
        self.x = self.x.round();
        self.y = self.y.round();
        self.z = self.z.round();
        self
    }

    /// Truncate every component toward zero.
    pub fn round_to_zero(&mut self) -> &mut Self {
        self.x = self.x.trunc();
        self.y = self.y.trunc();
        self.z = self.z.trunc();
        self
    }

    /// Flip the sign of every component.
    pub fn negate(&mut self) -> &mut Self {
        self.x = -self.x;
        self.y = -self.y;
        self.z = -self.z;
        self
    }
}

impl std::ops::Add for Vector3 {
    type Output = Self;

    fn add(mut self, other: Self) -> Self {
        Vector3::add(&mut self, other);
        self
    }
}

impl std::ops::AddAssign for Vector3 {
    fn add_assign(&mut self, other: Self) {
        self.add(other);
    }
}

impl std::ops::Sub for Vector3 {
    type Output = Self;

    fn sub(mut self, other: Self) -> Self {
        Vector3::sub(&mut self, other);
        self
    }
}

impl std::ops::SubAssign for Vector3 {
    fn sub_assign(&mut self, other: Self) {
        self.sub(other);
    }
}

impl std::ops::Mul<Real> for Vector3 {
    type Output = Self;

    fn mul(mut self, scalar: Real) -> Self {
        self.multiply_scalar(scalar);
        self
    }
}

impl std::ops::Mul for Vector3 {
    type Output = Self;

    /// Componentwise product, matching [`Vector3::multiply`].
    fn mul(mut self, other: Self) -> Self {
        self.multiply(other);
        self
    }
}

impl std::ops::MulAssign<Real> for Vector3 {
    fn mul_assign(&mut self, scalar: Real) {
        self.multiply_scalar(scalar);
    }
}

impl std::ops::MulAssign for Vector3 {
    /// Componentwise product, matching [`Vector3::multiply`].
    fn mul_assign(&mut self, other: Self) {
        self.multiply(other);
    }
}

impl std::ops::Div<Real> for Vector3 {
    type Output = Self;

    fn div(mut self, scalar: Real) -> Self {
        self.divide_scalar(scalar);
        self
    }
}

impl std::ops::DivAssign<Real> for Vector3 {
    fn div_assign(&mut self, scalar: Real) {
        self.divide_scalar(scalar);
    }
}

impl std::ops::Neg for Vector3 {
    type Output = Self;

    fn neg(mut self) -> Self {
        self.negate();
        self
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn chained_arithmetic_mutates_in_place() {
        let mut v = Vector3::new(1.0, 2.0, 3.0);
        v.add(Vector3::new(4.0, 5.0, 6.0))
            .sub_scalar(1.0)
            .multiply(Vector3::new(2.0, 2.0, 2.0));
        assert_eq!(v, Vector3::new(8.0, 12.0, 16.0));
    }

    #[test]
    fn binary_vectors_forms_write_into_receiver() {
        let a = Vector3::new(1.0, 2.0, 3.0);
        let b = Vector3::new(10.0, 20.0, 30.0);
        let mut out = Vector3::ZERO;

        out.add_vectors(a, b);
        assert_eq!(out, Vector3::new(11.0, 22.0, 33.0));
        out.sub_vectors(a, b);
        assert_eq!(out, Vector3::new(-9.0, -18.0, -27.0));
        out.multiply_vectors(a, b);
        assert_eq!(out, Vector3::new(10.0, 40.0, 90.0));
    }

    #[test]
    fn add_scaled_vector_fuses_scale_and_accumulate() {
        let mut position = Vector3::new(1.0, 1.0, 1.0);
        let velocity = Vector3::new(2.0, 0.0, -4.0);
        position.add_scaled_vector(velocity, 0.5);
        assert_eq!(position, Vector3::new(2.0, 1.0, -1.0));
    }

    #[test]
    fn divide_scalar_by_zero_propagates_infinities() {
        let mut v = Vector3::new(1.0, -1.0, 0.0);
        v.divide_scalar(0.0);
        assert_eq!(v.x, Real::INFINITY);
        assert_eq!(v.y, Real::NEG_INFINITY);
        assert!(v.z.is_nan(), "0/0 must stay NaN, not become an error");
    }

    #[test]
    fn divide_componentwise_is_unguarded() {
        let mut v = Vector3::new(4.0, 9.0, 1.0);
        v.divide(Vector3::new(2.0, 3.0, 0.0));
        assert_eq!(v.x, 2.0);
        assert_eq!(v.y, 3.0);
        assert_eq!(v.z, Real::INFINITY);
    }

    #[test]
    fn min_max_clamp_are_componentwise() {
        let mut v = Vector3::new(-5.0, 0.5, 5.0);
        v.clamp(Vector3::new(-1.0, -1.0, -1.0), Vector3::new(1.0, 1.0, 1.0));
        assert_eq!(v, Vector3::new(-1.0, 0.5, 1.0));

        let mut lo = Vector3::new(1.0, 5.0, -2.0);
        lo.min(Vector3::new(2.0, 4.0, -3.0));
        assert_eq!(lo, Vector3::new(1.0, 4.0, -3.0));

        let mut hi = Vector3::new(1.0, 5.0, -2.0);
        hi.max(Vector3::new(2.0, 4.0, -3.0));
        assert_eq!(hi, Vector3::new(2.0, 5.0, -2.0));

        let mut s = Vector3::new(-5.0, 0.25, 5.0);
        s.clamp_scalar(-1.0, 1.0);
        assert_eq!(s, Vector3::new(-1.0, 0.25, 1.0));
    }

    #[test]
    fn min_max_keep_the_non_nan_operand() {
        let mut lo = Vector3::new(Real::NAN, 1.0, 2.0);
        lo.min(Vector3::new(0.0, Real::NAN, 3.0));
        assert_eq!(lo, Vector3::new(0.0, 1.0, 2.0));

        let mut hi = Vector3::new(Real::NAN, 1.0, 2.0);
        hi.max(Vector3::new(0.0, Real::NAN, 3.0));
        assert_eq!(hi, Vector3::new(0.0, 1.0, 3.0));
    }

    #[test]
    fn rounding_family() {
        let mut v = Vector3::new(1.6, -1.6, 2.5);
        v.floor();
        assert_eq!(v, Vector3::new(1.0, -2.0, 2.0));

        let mut v = Vector3::new(1.2, -1.8, 2.5);
        v.ceil();
        assert_eq!(v, Vector3::new(2.0, -1.0, 3.0));

        let mut v = Vector3::new(1.4, 1.6, -1.4);
        v.round();
        assert_eq!(v, Vector3::new(1.0, 2.0, -1.0));

        let mut v = Vector3::new(1.9, -1.9, 0.2);
        v.round_to_zero();
        assert_eq!(v, Vector3::new(1.0, -1.0, 0.0), "truncation moves toward zero");
    }

    #[test]
    fn operator_sugar_matches_in_place_ops() {
        let a = Vector3::new(1.0, 2.0, 3.0);
        let b = Vector3::new(4.0, 5.0, 6.0);
        assert_eq!(a + b, Vector3::new(5.0, 7.0, 9.0));
        assert_eq!(b - a, Vector3::new(3.0, 3.0, 3.0));
        assert_eq!(a * 2.0, Vector3::new(2.0, 4.0, 6.0));
        assert_eq!(a * b, Vector3::new(4.0, 10.0, 18.0));
        assert_eq!(b / 2.0, Vector3::new(2.0, 2.5, 3.0));
        assert_eq!(-a, Vector3::new(-1.0, -2.0, -3.0));

        let mut acc = a;
        acc += b;
        acc -= a;
        acc *= 3.0;
        acc /= 3.0;
        assert_eq!(acc, b);

        let mut componentwise = a;
        componentwise *= b;
        assert_eq!(componentwise, a * b);
    }
}
