//! Geometric operations on [`Vector3`]: products, norms, interpolation,
//! projection, and reflection.

use super::Vector3;
use crate::float_types::{FRAC_PI_2, Real};

impl Vector3 {
    /// **Mathematical Foundation: Dot Product**
    ///
    /// ```text
    /// a · b = axbx + ayby + azbz = |a||b|cos θ
    /// ```
    pub fn dot(&self, v: Vector3) -> Real {
        self.x * v.x + self.y * v.y + self.z * v.z
    }

    /// Squared Euclidean length, avoiding the square root for comparisons.
    pub fn length_sq(&self) -> Real {
        self.x * self.x + self.y * self.y + self.z * self.z
    }

    /// Euclidean length.
    pub fn length(&self) -> Real {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    /// Sum of absolute components (L1 norm).
    pub fn manhattan_length(&self) -> Real {
        self.x.abs() + self.y.abs() + self.z.abs()
    }

    /// Scale to unit length.
    ///
    /// A zero-length vector divides by 1 instead of 0 and stays `(0, 0, 0)`;
    /// no NaNs are produced.
    ///
    /// # Example
    /// ```rust
    /// # use vec3rs::Vector3;
    /// let mut v = Vector3::new(3.0, 0.0, 4.0);
    /// v.normalize();
    /// assert_eq!(v, Vector3::new(0.6, 0.0, 0.8));
    ///
    /// let mut zero = Vector3::ZERO;
    /// zero.normalize();
    /// assert_eq!(zero, Vector3::ZERO);
    /// ```
    pub fn normalize(&mut self) -> &mut Self {
        let length = self.length();
        self.divide_scalar(if length == 0.0 { 1.0 } else { length })
    }

    /// Keep the direction, set the length. Zero vectors stay zero.
    pub fn set_length(&mut self, length: Real) -> &mut Self {
        self.normalize().multiply_scalar(length)
    }

    /// Keep the direction, clamp the length into `[min, max]`.
    /// Zero vectors stay zero.
    pub fn clamp_length(&mut self, min: Real, max: Real) -> &mut Self {
        let length = self.length();
        let divisor = if length == 0.0 { 1.0 } else { length };

        self.divide_scalar(divisor)
            .multiply_scalar(min.max(max.min(length)))
    }

    /// Euclidean distance to `v`.
    pub fn distance_to(&self, v: Vector3) -> Real {
        self.distance_to_squared(v).sqrt()
    }

    /// Squared Euclidean distance to `v`.
    pub fn distance_to_squared(&self, v: Vector3) -> Real {
        let dx = self.x - v.x;
        let dy = self.y - v.y;
        let dz = self.z - v.z;
        dx * dx + dy * dy + dz * dz
    }

    /// L1 distance to `v`.
    pub fn manhattan_distance_to(&self, v: Vector3) -> Real {
        (self.x - v.x).abs() + (self.y - v.y).abs() + (self.z - v.z).abs()
    }

    /// **Mathematical Foundation: Angle Between Vectors**
    ///
    /// ```text
    /// θ = arccos(clamp(a · b / √(|a|²|b|²), -1, 1))
    /// ```
    ///
    /// The cosine is clamped to absorb floating-point drift. When either
    /// vector has zero length the denominator is 0 and the result is π/2 by
    /// convention, not an accident of arithmetic.
    pub fn angle_to(&self, v: Vector3) -> Real {
        let denominator = (self.length_sq() * v.length_sq()).sqrt();

        if denominator == 0.0 {
            return FRAC_PI_2;
        }

        let theta = self.dot(v) / denominator;
        theta.clamp(-1.0, 1.0).acos()
    }

    /// Move this vector toward `v` by fraction `alpha` (0 keeps `self`,
    /// 1 lands on `v`).
    pub fn lerp(&mut self, v: Vector3, alpha: Real) -> &mut Self {
        self.x += (v.x - self.x) * alpha;
        self.y += (v.y - self.y) * alpha;
        self.z += (v.z - self.z) * alpha;
        self
    }

    /// Write the interpolation of `v1` toward `v2` into this vector.
    pub fn lerp_vectors(&mut self, v1: Vector3, v2: Vector3, alpha: Real) -> &mut Self {
        self.x = v1.x + (v2.x - v1.x) * alpha;
        self.y = v1.y + (v2.y - v1.y) * alpha;
        self.z = v1.z + (v2.z - v1.z) * alpha;
        self
    }

    /// `self = self × v`.
    pub fn cross(&mut self, v: Vector3) -> &mut Self {
        let this = *self;
        self.cross_vectors(this, v)
    }

    /// **Mathematical Foundation: Cross Product**
    ///
    /// Right-handed cross product written into this vector:
    /// ```text
    /// a × b = (aybz - azby, azbx - axbz, axby - aybx)
    /// ```
    /// Operands arrive by value, so the receiver may alias either one.
    ///
    /// # Example
    /// ```rust
    /// # use vec3rs::Vector3;
    /// let mut n = Vector3::ZERO;
    /// n.cross_vectors(Vector3::X, Vector3::Y);
    /// assert_eq!(n, Vector3::Z);
    /// ```
    pub fn cross_vectors(&mut self, a: Vector3, b: Vector3) -> &mut Self {
        let (ax, ay, az) = (a.x, a.y, a.z);
        let (bx, by, bz) = (b.x, b.y, b.z);

        self.x = ay * bz - az * by;
        self.y = az * bx - ax * bz;
        self.z = ax * by - ay * bx;
        self
    }

    /// **Mathematical Foundation: Vector Projection**
    ///
    /// Projection of this vector onto `v`:
    /// ```text
    /// proj_v(a) = ((a · v) / (v · v)) v
    /// ```
    /// Returns `(0, 0, 0)` when `v` has zero squared length; the division
    /// is never attempted.
    pub fn project_on_vector(&mut self, v: Vector3) -> &mut Self {
        let denominator = v.length_sq();

        if denominator == 0.0 {
            return self.set(0.0, 0.0, 0.0);
        }

        let scalar = v.dot(*self) / denominator;
        self.copy(v).multiply_scalar(scalar)
    }

    /// Remove the component of this vector along `normal`, leaving the part
    /// lying in the plane `normal` defines.
    pub fn project_on_plane(&mut self, normal: Vector3) -> &mut Self {
        let mut along = *self;
        along.project_on_vector(normal);
        self.sub(along)
    }

    /// **Mathematical Foundation: Reflection**
    ///
    /// Reflect off the plane orthogonal to `normal`:
    /// ```text
    /// r = a - 2(a · n̂)n̂
    /// ```
    /// `normal` must already be unit length; it is used as given.
    pub fn reflect(&mut self, normal: Vector3) -> &mut Self {
        let mut twice_along = normal;
        twice_along.multiply_scalar(2.0 * self.dot(normal));
        self.sub(twice_along)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::float_types::{EPSILON, PI};

    #[test]
    fn dot_is_commutative() {
        let a = Vector3::new(1.0, -2.0, 3.0);
        let b = Vector3::new(4.0, 5.0, -6.0);
        assert_eq!(a.dot(b), b.dot(a));
        assert_eq!(a.dot(b), 1.0 * 4.0 - 2.0 * 5.0 - 3.0 * 6.0);
    }

    #[test]
    fn length_squares_consistently() {
        let v = Vector3::new(3.0, 4.0, 12.0);
        assert_eq!(v.length(), 13.0);
        approx::assert_relative_eq!(v.length() * v.length(), v.length_sq(), epsilon = EPSILON);
        assert_eq!(v.manhattan_length(), 19.0);
    }

    #[test]
    fn normalize_is_idempotent() {
        let mut once = Vector3::new(1.0, 2.0, 3.0);
        once.normalize();
        let mut twice = once;
        twice.normalize();
        approx::assert_abs_diff_eq!(once, twice, epsilon = EPSILON);
        approx::assert_abs_diff_eq!(once.length(), 1.0, epsilon = EPSILON);
    }

    #[test]
    fn normalize_zero_length_stays_zero() {
        let mut v = Vector3::ZERO;
        v.normalize();
        assert!(v.equals(Vector3::ZERO), "no NaN from the zero-length guard");
    }

    #[test]
    fn set_length_rescales_direction() {
        let mut v = Vector3::new(0.0, 3.0, 4.0);
        v.set_length(10.0);
        approx::assert_abs_diff_eq!(v, Vector3::new(0.0, 6.0, 8.0), epsilon = EPSILON);

        let mut zero = Vector3::ZERO;
        zero.set_length(5.0);
        assert!(zero.equals(Vector3::ZERO));
    }

    #[test]
    fn clamp_length_only_touches_out_of_range_lengths() {
        let mut long = Vector3::new(0.0, 0.0, 10.0);
        long.clamp_length(1.0, 4.0);
        approx::assert_abs_diff_eq!(long, Vector3::new(0.0, 0.0, 4.0), epsilon = EPSILON);

        let mut short = Vector3::new(0.5, 0.0, 0.0);
        short.clamp_length(1.0, 4.0);
        approx::assert_abs_diff_eq!(short, Vector3::new(1.0, 0.0, 0.0), epsilon = EPSILON);

        let mut inside = Vector3::new(0.0, 2.0, 0.0);
        inside.clamp_length(1.0, 4.0);
        approx::assert_abs_diff_eq!(inside, Vector3::new(0.0, 2.0, 0.0), epsilon = EPSILON);
    }

    #[test]
    fn distances() {
        let a = Vector3::new(1.0, 1.0, 1.0);
        let b = Vector3::new(4.0, 5.0, 1.0);
        assert_eq!(a.distance_to_squared(b), 25.0);
        assert_eq!(a.distance_to(b), 5.0);
        assert_eq!(a.manhattan_distance_to(b), 7.0);
    }

    #[test]
    fn angle_to_basics() {
        let x = Vector3::X;
        let y = Vector3::Y;
        approx::assert_abs_diff_eq!(x.angle_to(y), FRAC_PI_2, epsilon = EPSILON);
        approx::assert_abs_diff_eq!(x.angle_to(x), 0.0, epsilon = EPSILON);

        let mut neg_x = x;
        neg_x.negate();
        approx::assert_abs_diff_eq!(x.angle_to(neg_x), PI, epsilon = EPSILON);
    }

    #[test]
    fn angle_to_zero_vector_is_half_pi_by_convention() {
        assert_eq!(Vector3::ZERO.angle_to(Vector3::X), FRAC_PI_2);
        assert_eq!(Vector3::X.angle_to(Vector3::ZERO), FRAC_PI_2);
    }

    #[test]
    fn lerp_midpoint() {
        let mut v = Vector3::ZERO;
        v.lerp(Vector3::new(10.0, 0.0, 0.0), 0.5);
        assert_eq!(v, Vector3::new(5.0, 0.0, 0.0));

        let mut out = Vector3::ZERO;
        out.lerp_vectors(Vector3::new(1.0, 1.0, 1.0), Vector3::new(3.0, 5.0, 7.0), 0.25);
        assert_eq!(out, Vector3::new(1.5, 2.0, 2.5));
    }

    #[test]
    fn cross_is_anti_commutative() {
        let a = Vector3::new(1.0, 2.0, 3.0);
        let b = Vector3::new(-4.0, 5.0, 0.5);

        let mut ab = Vector3::ZERO;
        ab.cross_vectors(a, b);
        let mut ba = Vector3::ZERO;
        ba.cross_vectors(b, a);
        ba.negate();
        approx::assert_abs_diff_eq!(ab, ba, epsilon = EPSILON);
    }

    #[test]
    fn cross_tolerates_aliasing_receiver() {
        let mut v = Vector3::new(1.0, 2.0, 3.0);
        let w = Vector3::new(0.0, 1.0, 0.0);
        v.cross(w);
        assert_eq!(v, Vector3::new(-3.0, 0.0, 1.0));

        let mut self_cross = Vector3::new(1.0, 2.0, 3.0);
        let copy = self_cross;
        self_cross.cross(copy);
        assert!(self_cross.equals(Vector3::ZERO));
    }

    #[test]
    fn projection_onto_vector_and_plane() {
        let mut v = Vector3::new(3.0, 4.0, 0.0);
        v.project_on_vector(Vector3::new(10.0, 0.0, 0.0));
        approx::assert_abs_diff_eq!(v, Vector3::new(3.0, 0.0, 0.0), epsilon = EPSILON);

        let mut p = Vector3::new(3.0, 4.0, 5.0);
        p.project_on_plane(Vector3::Y);
        approx::assert_abs_diff_eq!(p, Vector3::new(3.0, 0.0, 5.0), epsilon = EPSILON);
    }

    #[test]
    fn projection_onto_zero_vector_is_guarded() {
        let mut v = Vector3::new(1.0, 0.0, 0.0);
        v.project_on_vector(Vector3::ZERO);
        assert!(v.equals(Vector3::ZERO), "explicit degenerate guard, not NaN");
    }

    #[test]
    fn reflection_off_a_plane() {
        let mut v = Vector3::new(1.0, -1.0, 0.0);
        v.reflect(Vector3::Y);
        approx::assert_abs_diff_eq!(v, Vector3::new(1.0, 1.0, 0.0), epsilon = EPSILON);

        // Reflecting twice off the same plane restores the input.
        v.reflect(Vector3::Y);
        approx::assert_abs_diff_eq!(v, Vector3::new(1.0, -1.0, 0.0), epsilon = EPSILON);
    }
}
