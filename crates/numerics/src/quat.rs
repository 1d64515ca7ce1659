mod ops;

use std::{fmt, ops::Deref};

use crate::{acos, interpolate, vec4, Matrix, MinMax, One, Radians, Real, Vec3, Vector, Zero};

/// A [`Quaternion`] with [`f32`] components.
pub type Quatf = Quaternion<f32>;
/// A [`Quaternion`] with [`f64`] components.
pub type Quatd = Quaternion<f64>;

/// A quaternion consisting of 3 imaginary numbers and a real number.
///
/// Unit-length quaternions ("*versors*") represent rotations in 3D space: a rotation by `angle`
/// around the unit vector `axis` is stored as `(axis * sin(angle / 2), cos(angle / 2))`.
///
/// Quaternions are stored like a 4-dimensional vector, with `x`, `y` and `z` holding the
/// imaginary parts and `w` holding the real part. They [`Deref`] to their [`Vector`], which gives
/// access to the components and to vector operations like [`Vector::dot`].
///
/// Nothing enforces unit length. Quaternions built from components or from a non-normalized axis
/// will scale vectors in addition to rotating them.
///
/// # Examples
///
/// ```
/// # use numerics::*;
/// let q = Quatf::from_angle_axis(Radiansf::R90, Vec3f::Z);
/// assert_approx_eq!(q * Vec3f::X, Vec3f::Y);
/// assert_approx_eq!(q.angle(), Radiansf::R90);
/// ```
#[derive(Clone, Copy, Hash)]
#[repr(transparent)]
pub struct Quaternion<T>(Vector<T, 4>);

unsafe impl<T: bytemuck::Zeroable> bytemuck::Zeroable for Quaternion<T> {}
unsafe impl<T: bytemuck::Pod> bytemuck::Pod for Quaternion<T> {}

impl<T: Zero + One> Quaternion<T> {
    /// The multiplicative identity.
    ///
    /// This is a unit quaternion that will not change a vector it is multiplied with.
    pub const IDENTITY: Self = Self(vec4(T::ZERO, T::ZERO, T::ZERO, T::ONE));
}

impl<T> Quaternion<T> {
    /// Creates a quaternion from a 4-dimensional [`Vector`].
    ///
    /// The `x`, `y`, and `z` coordinates correspond to the `i`, `j`, and `k` imaginary parts, while
    /// the `w` component corresponds to the real number part of the quaternion.
    pub const fn from_vec(vec: Vector<T, 4>) -> Self {
        Self(vec)
    }

    /// Creates a quaternion from its components.
    pub const fn new(x: T, y: T, z: T, w: T) -> Self {
        Self(vec4(x, y, z, w))
    }

    /// Returns the components of this quaternion as a [`Vector`].
    pub fn into_vec(self) -> Vector<T, 4> {
        self.0
    }
}

impl<T: Real> Quaternion<T> {
    /// Creates a quaternion that rotates by `angle` around `axis`.
    ///
    /// `axis` should have unit length.
    pub fn from_angle_axis(angle: Radians<T>, axis: Vec3<T>) -> Self {
        let half = angle / T::two();
        Self((axis * half.sin()).append([half.cos()]))
    }

    /// Returns the angle this quaternion rotates by.
    pub fn angle(&self) -> Radians<T> {
        // Rounding may push `w` of a unit quaternion slightly past 1.
        acos(MinMax::clamp(self.0[3], -T::ONE, T::ONE)) * T::two()
    }

    /// Returns the (unit length) axis this quaternion rotates around.
    pub fn axis(&self) -> Vec3<T> {
        self.0.reduce::<3>().normalize()
    }

    /// Returns the conjugate of this quaternion, which negates the imaginary parts.
    ///
    /// For unit quaternions, this is the inverse rotation.
    pub fn conjugate(self) -> Self {
        let [x, y, z, w] = self.0.into_array();
        Self::new(-x, -y, -z, w)
    }

    /// Returns the quaternion that rotates from `self` to `other`.
    ///
    /// `self * self.rotation_to(other)` is equivalent to `other`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use numerics::*;
    /// let a = Quatf::from_angle_axis(Radiansf::R90, Vec3f::X);
    /// let b = Quatf::from_angle_axis(Radiansf::R90, Vec3f::Y);
    /// assert_approx_eq!(a * a.rotation_to(b), b);
    /// ```
    pub fn rotation_to(self, other: Self) -> Self {
        self.conjugate() * other
    }

    /// Returns a normalized copy of this quaternion (whose length equals one).
    pub fn normalize(self) -> Self {
        Self(self.0.normalize())
    }

    /// Spherically interpolates between `self` (at `t = 0`) and `other` (at `t = 1`).
    ///
    /// See [`interpolate::spherical_linear`].
    pub fn slerp(self, other: Self, t: T) -> Self {
        interpolate::spherical_linear(t, self, other)
    }
}

impl<T> Deref for Quaternion<T> {
    type Target = Vector<T, 4>;

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<T> From<Vector<T, 4>> for Quaternion<T> {
    fn from(vec: Vector<T, 4>) -> Self {
        Self(vec)
    }
}

impl<T> From<Quaternion<T>> for Vector<T, 4> {
    fn from(q: Quaternion<T>) -> Self {
        q.0
    }
}

/// Converts a unit quaternion to the equivalent rotation matrix.
///
/// The rotation occupies the top-left 3x3 block; the rest of the matrix is the identity.
///
/// # Panics
///
/// In debug builds, this panics if `q` is not (approximately) of unit length.
impl<T: Real, const R: usize, const C: usize> From<Quaternion<T>> for Matrix<T, R, C> {
    fn from(q: Quaternion<T>) -> Self {
        const { assert!(R >= 3 && C >= 3, "rotation matrices must be at least 3x3") };
        debug_assert!(
            (q.length_squared() - T::ONE).absolute() < T::from_f64(1e-3),
            "quaternion is not of unit length"
        );

        let [x, y, z, w] = q.0.into_array();
        let two = T::two();

        let mut m = Matrix::IDENTITY;
        m[(0, 0)] = T::ONE - two * (y * y + z * z);
        m[(0, 1)] = two * (x * y - z * w);
        m[(0, 2)] = two * (x * z + y * w);

        m[(1, 0)] = two * (x * y + z * w);
        m[(1, 1)] = T::ONE - two * (x * x + z * z);
        m[(1, 2)] = two * (y * z - x * w);

        m[(2, 0)] = two * (x * z - y * w);
        m[(2, 1)] = two * (y * z + x * w);
        m[(2, 2)] = T::ONE - two * (x * x + y * y);
        m
    }
}

impl<T: fmt::Debug> fmt::Debug for Quaternion<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [x, y, z, w] = self.0.as_array();
        write!(f, "quat({x:?}, {y:?}, {z:?}, {w:?})")
    }
}

impl<T: fmt::Display> fmt::Display for Quaternion<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        assert_approx_eq, transforms, vec3, vec4, Compose, Mat4, Mat4f, Radians, Radiansf, Vec3f,
    };

    use super::*;

    #[test]
    fn axis_and_angle() {
        let q = Quatd::from_angle_axis(Radians::<f64>::R90, vec3(1.0, 0.0, 0.0));
        assert_approx_eq!(q.axis(), vec3(1.0, 0.0, 0.0));
        assert_approx_eq!(q.angle(), Radians::<f64>::R90);

        let identity = Quatf::IDENTITY;
        assert_approx_eq!(identity.angle(), Radiansf::R0);
    }

    #[test]
    fn rotation_matrix() {
        let q = Quatd::from_angle_axis(Radians::<f64>::R90, vec3(1.0, 0.0, 0.0));
        let a = Mat4::from(transforms::rotate(Radians::<f64>::R90, vec3(1.0, 0.0, 0.0)));
        let b = Mat4::from(q);
        assert_approx_eq!(a, b);

        let m = Mat4f::from(Quatf::IDENTITY);
        assert_eq!(m, Mat4f::IDENTITY);
        assert_approx_eq!(m * Vec3f::X, Vec3f::X);
        assert_approx_eq!(m * Vec3f::Y, Vec3f::Y);
        assert_approx_eq!(m * Vec3f::Z, Vec3f::Z);

        let m = Mat4f::from(Quatf::from_angle_axis(Radiansf::R90, Vec3f::X));
        assert_approx_eq!(m * Vec3f::X, Vec3f::X);
        assert_approx_eq!(m * Vec3f::Y, Vec3f::Z);
        assert_approx_eq!(m * Vec3f::Z, -Vec3f::Y);
    }

    #[test]
    fn rotate_vector() {
        let q = Quatf::from(transforms::rotate(Radiansf::R90, Vec3f::X));
        let m = Mat4f::from(transforms::rotate(Radiansf::R90, Vec3f::X));

        let v = vec3(15.0, -12.5, 4.0);
        assert_approx_eq!(q * v, m * v).abs(1e-5);
    }

    #[test]
    fn composition() {
        let a = Quatf::from_angle_axis(Radiansf::R90, Vec3f::X.normalize());
        let b = Quatf::from_angle_axis(Radiansf::R90, Vec3f::Y.normalize());
        let c = a.rotation_to(b);

        assert_approx_eq!(a, Quatf::from_vec(vec4(0.707107, 0.0, 0.0, 0.707107)));
        assert_approx_eq!(b, Quatf::from_vec(vec4(0.0, 0.707107, 0.0, 0.707107)));
        assert_approx_eq!(c, Quatf::from_vec(vec4(-0.5, 0.5, -0.5, 0.5)));
        assert_approx_eq!(
            a.conjugate(),
            Quatf::from_vec(vec4(-0.707107, 0.0, 0.0, 0.707107))
        );
        assert_approx_eq!(a * c, b);
    }

    #[test]
    fn from_transforms() {
        let q1 = Quatf::from(transforms::rotate(Radiansf::R90, Vec3f::X));
        assert_approx_eq!(q1.angle(), Radiansf::R90);
        assert_approx_eq!(q1.axis(), Vec3f::X);

        let q2 = Quatf::from(transforms::rotate_x(Radiansf::R90));
        assert_approx_eq!(q1, q2);

        let q3 = Quatf::from(
            transforms::rotate(Radiansf::R90, Vec3f::X)
                .then(transforms::rotate(-Radiansf::R90, Vec3f::X)),
        );
        assert_approx_eq!(q3, Quatf::IDENTITY);
    }

    #[test]
    fn fmt() {
        let q = Quaternion::new(1, 2, 3, 4);
        assert_eq!(format!("{q:?}"), "quat(1, 2, 3, 4)");
        assert_eq!(q.to_string(), "{1,2,3,4}");
        assert_eq!(q.w, 4);
    }
}
