use crate::{ApproxEq, Matrix, Number, Quaternion, Radians, Real, Vec3, Vector};

use super::{compose, translate, Compose};

/// A rotation around one of the coordinate axes (X = 0, Y = 1, Z = 2).
///
/// Use [`rotate_x`], [`rotate_y`], [`rotate_z`] or [`rotate_about`] to create one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedAxisRotation<T, const AXIS: usize> {
    pub angle: Radians<T>,
}

impl<T, const AXIS: usize> FixedAxisRotation<T, AXIS> {
    /// Returns the rotation axis as a unit vector with `N` elements.
    pub fn axis<const N: usize>(&self) -> Vector<T, N>
    where
        T: Number,
    {
        let mut axis = Vector::ZERO;
        axis[AXIS] = T::ONE;
        axis
    }

    /// Returns whether this rotation leaves every point in place.
    pub fn is_identity(&self) -> bool
    where
        T: Number,
    {
        self.angle.0 == T::ZERO
    }
}

/// Creates a rotation around the coordinate axis with index `AXIS`.
///
/// ```
/// # use numerics::*;
/// use numerics::axis::Y;
///
/// let m = Mat4f::from(transforms::rotate_about::<Y, _>(Radiansf::R90));
/// assert_approx_eq!(m * vec4(10.0, 0.0, 0.0, 1.0), vec4(0.0, 0.0, -10.0, 1.0));
/// ```
pub fn rotate_about<const AXIS: usize, T>(angle: Radians<T>) -> FixedAxisRotation<T, AXIS> {
    const { assert!(AXIS < 3, "rotation axis must be X, Y or Z") };
    FixedAxisRotation { angle }
}

/// Creates a rotation around the X axis.
pub fn rotate_x<T>(angle: Radians<T>) -> FixedAxisRotation<T, 0> {
    rotate_about(angle)
}

/// Creates a rotation around the Y axis.
pub fn rotate_y<T>(angle: Radians<T>) -> FixedAxisRotation<T, 1> {
    rotate_about(angle)
}

/// Creates a rotation around the Z axis.
pub fn rotate_z<T>(angle: Radians<T>) -> FixedAxisRotation<T, 2> {
    rotate_about(angle)
}

/// Rotates the two axes orthogonal to `AXIS` in an identity matrix.
///
/// A zero angle produces the identity matrix.
impl<T: Real, const AXIS: usize, const R: usize, const C: usize>
    From<FixedAxisRotation<T, AXIS>> for Matrix<T, R, C>
{
    fn from(rotation: FixedAxisRotation<T, AXIS>) -> Self {
        const {
            // A Z rotation only touches the top-left 2x2 block.
            let min = if AXIS == 2 { 2 } else { 3 };
            assert!(AXIS < 3, "rotation axis must be X, Y or Z");
            assert!(R >= min && C >= min, "matrix is too small for this rotation");
        };

        let mut m = Matrix::IDENTITY;
        if rotation.is_identity() {
            return m;
        }

        let (s, c) = (rotation.angle.sin(), rotation.angle.cos());
        let (a, b) = match AXIS {
            0 => (1, 2),
            1 => (2, 0),
            _ => (0, 1),
        };
        m[(a, a)] = c;
        m[(a, b)] = -s;
        m[(b, a)] = s;
        m[(b, b)] = c;
        m
    }
}

impl<T: Real, const AXIS: usize> From<FixedAxisRotation<T, AXIS>> for Quaternion<T> {
    fn from(rotation: FixedAxisRotation<T, AXIS>) -> Self {
        Quaternion::from_angle_axis(rotation.angle, rotation.axis())
    }
}

/// A rotation by `angle` around an arbitrary `axis` through the origin.
///
/// `axis` should have unit length.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AngleAxisRotation<T> {
    pub angle: Radians<T>,
    pub axis: Vec3<T>,
}

/// Creates an [`AngleAxisRotation`].
pub fn rotate<T>(angle: Radians<T>, axis: Vec3<T>) -> AngleAxisRotation<T> {
    AngleAxisRotation { angle, axis }
}

/// Creates the [`AngleAxisRotation`] that rotates `from` onto `to`.
///
/// See [`AngleAxisRotation::between`].
pub fn rotate_between<T: Real>(from: Vec3<T>, to: Vec3<T>, normal: Vec3<T>) -> AngleAxisRotation<T> {
    AngleAxisRotation::between(from, to, normal)
}

impl<T: Real> AngleAxisRotation<T> {
    /// Computes the rotation that takes the direction `from` to the direction `to`.
    ///
    /// The axis is perpendicular to both vectors. When they are parallel the axis is ambiguous, so
    /// `normal` decides it: it is used directly if the vectors point the same way, and
    /// `from × normal` is used if they point in opposite directions.
    ///
    /// # Examples
    ///
    /// ```
    /// # use numerics::*;
    /// let rotation = transforms::rotate_between(Vec3f::X, Vec3f::Y, Vec3f::Z);
    /// assert_approx_eq!(rotation.angle, Radiansf::R90);
    /// assert_approx_eq!(Mat4f::from(rotation) * Vec3f::X, Vec3f::Y);
    /// ```
    pub fn between(from: Vec3<T>, to: Vec3<T>, normal: Vec3<T>) -> Self {
        let angle = to.angle_between(from);
        let axis = if angle.equivalent(&Radians(T::ZERO)) {
            normal
        } else if angle.equivalent(&Radians(T::PI)) {
            from.cross(normal).normalize()
        } else {
            from.cross(to).normalize()
        };
        Self { angle, axis }
    }

    /// Moves the center of this rotation from the origin to `origin`.
    pub fn around_origin(self, origin: Vec3<T>) -> OffsetAngleAxisRotation<T> {
        OffsetAngleAxisRotation {
            rotation: self,
            origin,
        }
    }

    /// Returns whether this rotation leaves every point in place.
    pub fn is_identity(&self) -> bool {
        self.angle.0 == T::ZERO
    }
}

/// Builds the rotation block with Rodrigues' rotation formula.
///
/// A zero angle produces the identity matrix.
impl<T: Real, const R: usize, const C: usize> From<AngleAxisRotation<T>> for Matrix<T, R, C> {
    fn from(rotation: AngleAxisRotation<T>) -> Self {
        const { assert!(R >= 3 && C >= 3, "rotation matrices must be at least 3x3") };

        let mut m = Matrix::IDENTITY;
        if rotation.is_identity() {
            return m;
        }

        let (s, c) = (rotation.angle.sin(), rotation.angle.cos());
        let a = T::ONE - c;
        let [x, y, z] = rotation.axis.into_array();
        let [sx, sy, sz] = (rotation.axis * s).into_array();

        m[(0, 0)] = x * x * a + c;
        m[(0, 1)] = x * y * a - sz;
        m[(0, 2)] = x * z * a + sy;

        m[(1, 0)] = y * x * a + sz;
        m[(1, 1)] = y * y * a + c;
        m[(1, 2)] = y * z * a - sx;

        m[(2, 0)] = z * x * a - sy;
        m[(2, 1)] = z * y * a + sx;
        m[(2, 2)] = z * z * a + c;
        m
    }
}

impl<T: Real> From<AngleAxisRotation<T>> for Quaternion<T> {
    fn from(rotation: AngleAxisRotation<T>) -> Self {
        Quaternion::from_angle_axis(rotation.angle, rotation.axis)
    }
}

/// An [`AngleAxisRotation`] whose axis passes through `origin` instead of the coordinate origin.
///
/// Created by [`AngleAxisRotation::around_origin`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OffsetAngleAxisRotation<T> {
    pub rotation: AngleAxisRotation<T>,
    pub origin: Vec3<T>,
}

impl<T: Real> OffsetAngleAxisRotation<T> {
    /// Returns whether this rotation leaves every point in place.
    pub fn is_identity(&self) -> bool {
        self.rotation.is_identity()
    }
}

/// Composes `translate(-origin)`, the rotation, and `translate(origin)`.
///
/// If `origin` is equivalent to zero, this is the plain rotation matrix.
///
/// ```
/// # use numerics::*;
/// let rotation = transforms::rotate(Radiansf::R180, Vec3f::Y).around_origin(vec3(0.0, 10.0, 10.0));
/// let m = Mat4f::from(rotation);
/// assert_approx_eq!(m * vec4(10.0, 0.0, 0.0, 1.0), vec4(-10.0, 0.0, -20.0, 1.0)).abs(1e-5);
/// ```
impl<T: Real, const R: usize, const C: usize> From<OffsetAngleAxisRotation<T>>
    for Matrix<T, R, C>
{
    fn from(offset: OffsetAngleAxisRotation<T>) -> Self {
        if offset.origin.equivalent(&Vec3::ZERO) {
            return Matrix::from(offset.rotation);
        }

        Matrix::from(
            compose(translate(-offset.origin), offset.rotation).then(translate(offset.origin)),
        )
    }
}
