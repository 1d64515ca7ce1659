//! Interpolation between values.
//!
//! The functions in this module work with any value type that can be added, subtracted and
//! scaled by the interpolation parameter: plain floats as well as [`Vector`]s.
//!
//! [`Vector`]: crate::Vector

use std::ops::{Add, Mul, Sub};

use crate::{Quaternion, Real};

/// Linearly interpolates from `a` (at `t = 0`) to `b` (at `t = 1`).
///
/// `t` is not clamped, so values outside of `[0, 1]` extrapolate.
///
/// # Examples
///
/// ```
/// use numerics::interpolate::linear;
///
/// assert_eq!(linear(0.75, -10.0, 10.0), 5.0);
/// assert_eq!(linear(2.0, -10.0, 10.0), 30.0);
/// ```
pub fn linear<T, V>(t: T, a: V, b: V) -> V
where
    T: Real,
    V: Add<Output = V> + Mul<T, Output = V>,
{
    a * (T::ONE - t) + b * t
}

/// Interpolates from `a` to `b` along a cosine curve, which eases in and out of both ends.
pub fn cosine<T, V>(t: T, a: V, b: V) -> V
where
    T: Real,
    V: Add<Output = V> + Mul<T, Output = V>,
{
    let f = (T::ONE - (t * T::PI).cos()) * T::from_f64(0.5);
    a * (T::ONE - f) + b * f
}

/// Cubic interpolation between `b` (at `t = 0`) and `c` (at `t = 1`), using the neighbouring
/// values `a` and `d` to shape the curve.
pub fn cubic<T, V>(t: T, a: V, b: V, c: V, d: V) -> V
where
    T: Real,
    V: Add<Output = V> + Sub<Output = V> + Mul<T, Output = V> + Copy,
{
    let p = (d - c) - (a - b);
    let q = (a - b) - p;
    let r = c - a;
    let s = b;

    p * (t * t * t) + q * (t * t) + r * t + s
}

/// Cubic Hermite spline from `p0` (at `t = 0`) to `p1` (at `t = 1`), with tangents `m0` and `m1`.
///
/// ```
/// use numerics::interpolate::hermite;
///
/// assert_eq!(hermite(0.0, 1.0, 5.0, 3.0, -5.0), 1.0);
/// assert_eq!(hermite(1.0, 1.0, 5.0, 3.0, -5.0), 3.0);
/// ```
pub fn hermite<T, V>(t: T, p0: V, m0: V, p1: V, m1: V) -> V
where
    T: Real,
    V: Add<Output = V> + Mul<T, Output = V>,
{
    let (t2, t3) = (t * t, t * t * t);
    let (two, three) = (T::two(), T::from_f64(3.0));

    let h00 = two * t3 - three * t2 + T::ONE;
    let h10 = t3 - two * t2 + t;
    let h01 = three * t2 - two * t3;
    let h11 = t3 - t2;

    p0 * h00 + m0 * h10 + p1 * h01 + m1 * h11
}

/// Spherical linear interpolation ("slerp") between two unit quaternions.
///
/// The result moves along the great circle from `q0` to `q1` at constant angular speed. When the
/// quaternions are nearly parallel, this falls back to a normalized linear interpolation.
///
/// # Examples
///
/// ```
/// # use numerics::*;
/// let q0 = Quatf::IDENTITY;
/// let q1 = Quatf::from_angle_axis(Radiansf::R90, Vec3f::Z);
/// let half = interpolate::spherical_linear(0.5, q0, q1);
/// assert_approx_eq!(half, Quatf::from_angle_axis(Radiansf::R45, Vec3f::Z));
/// ```
pub fn spherical_linear<T: Real>(t: T, q0: Quaternion<T>, q1: Quaternion<T>) -> Quaternion<T> {
    let (v0, v1) = (q0.into_vec(), q1.into_vec());
    let dot = v0.dot(v1);

    if dot > T::from_f64(0.9995) {
        return Quaternion::from_vec((v0 + (v1 - v0) * t).normalize());
    }

    let theta = dot.acos() * t;
    // `v0` and `v2` form an orthonormal basis of the plane containing both quaternions.
    let v2 = (v1 - v0 * dot).normalize();
    Quaternion::from_vec(v0 * theta.cos() + v2 * theta.sin())
}

#[cfg(test)]
mod tests {
    use crate::{assert_approx_eq, vec2, Quatf, Radiansf, Vec3f};

    use super::*;

    #[test]
    fn linear_interpolation() {
        assert_eq!(linear(0.75, -10.0, 10.0), 5.0);
        assert_eq!(linear(-1.0, -10.0, 10.0), -30.0);
        assert_eq!(linear(0.0, -10.0, 10.0), -10.0);
        assert_eq!(linear(1.0, -10.0, 10.0), 10.0);
        assert_eq!(linear(2.0, -10.0, 10.0), 30.0);

        assert_eq!(linear(0.5, vec2(0.0, 2.0), vec2(4.0, 4.0)), vec2(2.0, 3.0));
    }

    #[test]
    fn cosine_interpolation() {
        assert_eq!(cosine(0.0, -10.0, 10.0), -10.0);
        assert_eq!(cosine(1.0, -10.0, 10.0), 10.0);
        assert_approx_eq!(cosine(0.5, -10.0, 10.0), 0.0);
        // Slower than linear near the ends.
        assert!(cosine(0.25, 0.0, 1.0) < linear(0.25, 0.0, 1.0));
    }

    #[test]
    fn cubic_interpolation() {
        assert_eq!(cubic(0.0, 1.0, 2.0, 3.0, 4.0), 2.0);
        assert_eq!(cubic(1.0, 1.0, 2.0, 3.0, 4.0), 3.0);
        // Evenly spaced points stay on the line.
        assert_eq!(cubic(0.5, 1.0, 2.0, 3.0, 4.0), 2.5);
    }

    #[test]
    fn hermite_interpolation() {
        assert_eq!(hermite(0.0, 1.0, 0.0, 3.0, 0.0), 1.0);
        assert_eq!(hermite(1.0, 1.0, 0.0, 3.0, 0.0), 3.0);
        assert_eq!(hermite(0.5, 1.0, 0.0, 3.0, 0.0), 2.0);
        assert_eq!(
            hermite(0.5, vec2(0.0, 0.0), vec2(1.0, 0.0), vec2(1.0, 1.0), vec2(1.0, 0.0)),
            vec2(0.5, 0.5)
        );
    }

    #[test]
    fn slerp() {
        let q0 = Quatf::IDENTITY;
        let q1 = Quatf::from_angle_axis(Radiansf::R90, Vec3f::X);

        assert_approx_eq!(spherical_linear(0.0, q0, q1), q0);
        assert_approx_eq!(spherical_linear(1.0, q0, q1), q1);
        assert_approx_eq!(
            q0.slerp(q1, 1.0 / 3.0),
            Quatf::from_angle_axis(Radiansf::R30, Vec3f::X)
        );

        // Nearly identical rotations take the linear path but stay normalized.
        let q2 = Quatf::from_angle_axis(Radiansf::R0 + crate::radians(0.01), Vec3f::X);
        let mid = q0.slerp(q2, 0.5);
        assert_approx_eq!(mid.length(), 1.0);
        assert_approx_eq!(mid.angle(), crate::radians(0.005)).abs(1e-4);
    }
}
