use crate::{Matrix, Number, One, Quaternion, Real, Zero};

use super::{
    AngleAxisRotation, FixedAxisRotation, OffsetAngleAxisRotation, OrthographicProjection,
    PerspectiveProjection, Scale, Translation, UniformScale,
};

/// A value that can be applied onto a `Target` in place.
///
/// For a [`Matrix`] target, applying a step multiplies the target by the step's matrix
/// (`target = target * step`). For a [`Quaternion`] target, it multiplies by the step's
/// quaternion.
pub trait Step<Target> {
    fn apply_to(&self, target: &mut Target);
}

/// Two chained transforms.
///
/// Created by [`Compose::then`] or [`compose`]. Nothing is computed until the sequence is
/// applied to a target or converted into a [`Matrix`] or [`Quaternion`], which applies `left`
/// and then `right` onto the identity. Nested sequences are applied depth-first, so the steps
/// are always multiplied in the order they were chained.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sequence<A, B> {
    pub left: A,
    pub right: B,
}

impl<A, B, Target> Step<Target> for Sequence<A, B>
where
    A: Step<Target>,
    B: Step<Target>,
{
    fn apply_to(&self, target: &mut Target) {
        self.left.apply_to(target);
        self.right.apply_to(target);
    }
}

/// Chains `first` and `second` into a [`Sequence`].
pub fn compose<A, B>(first: A, second: B) -> Sequence<A, B> {
    Sequence {
        left: first,
        right: second,
    }
}

/// Chaining of transforms.
pub trait Compose: Sized {
    /// Chains `next` after `self`.
    ///
    /// ```
    /// # use numerics::*;
    /// use numerics::transforms::{scale_uniform, translate};
    ///
    /// let m = Mat4f::from(translate(vec3(1.0, 0.0, 0.0)).then(scale_uniform(2.0)));
    /// assert_eq!(m * vec3(1.0, 1.0, 1.0), vec3(3.0, 2.0, 2.0));
    /// ```
    fn then<N>(self, next: N) -> Sequence<Self, N> {
        compose(self, next)
    }
}

impl<A, B> Compose for Sequence<A, B> {}
impl<T, const E: usize> Compose for Translation<T, E> {}
impl<T, const E: usize> Compose for Scale<T, E> {}
impl<T> Compose for UniformScale<T> {}
impl<T, const AXIS: usize> Compose for FixedAxisRotation<T, AXIS> {}
impl<T> Compose for AngleAxisRotation<T> {}
impl<T> Compose for OffsetAngleAxisRotation<T> {}
impl<T> Compose for PerspectiveProjection<T> {}
impl<T> Compose for OrthographicProjection<T> {}
impl<T> Compose for Quaternion<T> {}
impl<T, const R: usize, const C: usize> Compose for Matrix<T, R, C> {}

// Leaves that convert into a square matrix of any size.
macro_rules! matrix_steps {
    ($([$($params:tt)*] $leaf:ty;)+) => {
        $(
            impl<$($params)*, const R: usize, const C: usize> Step<Matrix<T, R, C>> for $leaf {
                fn apply_to(&self, target: &mut Matrix<T, R, C>) {
                    *target *= Matrix::<T, C, C>::from(*self);
                }
            }
        )+
    };
}

matrix_steps! {
    [T: Number, const E: usize] Translation<T, E>;
    [T: Number, const E: usize] Scale<T, E>;
    [T: Number] UniformScale<T>;
    [T: Real, const AXIS: usize] FixedAxisRotation<T, AXIS>;
    [T: Real] AngleAxisRotation<T>;
    [T: Real] OffsetAngleAxisRotation<T>;
    [T: Real] Quaternion<T>;
}

// Projections only exist as 4x4 matrices.
macro_rules! projection_steps {
    ($($leaf:ident),+) => {
        $(
            impl<T: Real, const R: usize> Step<Matrix<T, R, 4>> for $leaf<T> {
                fn apply_to(&self, target: &mut Matrix<T, R, 4>) {
                    *target *= Matrix::<T, 4, 4>::from(*self);
                }
            }
        )+
    };
}

projection_steps!(PerspectiveProjection, OrthographicProjection);

impl<T: Number, const R: usize, const C: usize> Step<Matrix<T, R, C>> for Matrix<T, C, C> {
    fn apply_to(&self, target: &mut Matrix<T, R, C>) {
        *target *= *self;
    }
}

impl<T: Real, const AXIS: usize> Step<Quaternion<T>> for FixedAxisRotation<T, AXIS> {
    fn apply_to(&self, target: &mut Quaternion<T>) {
        *target *= Quaternion::from(*self);
    }
}

impl<T: Real> Step<Quaternion<T>> for AngleAxisRotation<T> {
    fn apply_to(&self, target: &mut Quaternion<T>) {
        *target *= Quaternion::from(*self);
    }
}

impl<T: Number> Step<Quaternion<T>> for Quaternion<T> {
    fn apply_to(&self, target: &mut Quaternion<T>) {
        *target *= *self;
    }
}

/// Applies the sequence onto the identity matrix.
impl<A, B, T, const R: usize, const C: usize> From<Sequence<A, B>> for Matrix<T, R, C>
where
    Sequence<A, B>: Step<Matrix<T, R, C>>,
    T: Zero + One + Copy,
{
    fn from(sequence: Sequence<A, B>) -> Self {
        let mut m = Matrix::IDENTITY;
        sequence.apply_to(&mut m);
        m
    }
}

/// Applies the sequence onto the identity quaternion.
impl<A, B, T> From<Sequence<A, B>> for Quaternion<T>
where
    Sequence<A, B>: Step<Quaternion<T>>,
    T: Zero + One,
{
    fn from(sequence: Sequence<A, B>) -> Self {
        let mut q = Quaternion::IDENTITY;
        sequence.apply_to(&mut q);
        q
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        assert_approx_eq, assert_approx_ne, transforms::*, vec2, vec3, vec4, Mat3f, Mat4f, Quatf,
        Radiansf, Vec3f,
    };

    use super::*;

    #[test]
    fn order_is_preserved() {
        let origin = vec4(0.0, 0.0, 0.0, 1.0);

        let m = Mat4f::from(rotate(Radiansf::R90, Vec3f::X).then(translate(vec3(1.0, 2.0, 3.0))));
        assert_approx_eq!(m * origin, vec4(1.0, -3.0, 2.0, 1.0));

        let reversed =
            Mat4f::from(translate(vec3(1.0, 2.0, 3.0)).then(rotate(Radiansf::R90, Vec3f::X)));
        assert_approx_ne!(m, reversed);
        assert_approx_eq!(reversed * origin, vec4(1.0, 2.0, 3.0, 1.0));
    }

    #[test]
    fn nesting_does_not_change_order() {
        let a = rotate_x(Radiansf::R90);
        let b = scale(vec3(1.0, 2.0, 3.0));
        let c = translate(vec3(4.0, 5.0, 6.0));

        let flat = Mat4f::from(a.then(b).then(c));
        let nested = Mat4f::from(compose(a, compose(b, c)));
        let manual = Mat4f::from(a) * Mat4f::from(b) * Mat4f::from(c);
        assert_eq!(flat, manual);
        assert_eq!(nested, manual);
    }

    #[test]
    fn matrices_are_steps() {
        let m = Mat4f::from(rotate_z(Radiansf::R45));
        let sequence = m.then(translate(vec3(1.0, 0.0, 0.0)));
        assert_eq!(
            Mat4f::from(sequence),
            m * Mat4f::from(translate(vec3(1.0, 0.0, 0.0)))
        );

        let mut target = Mat4f::IDENTITY;
        scale_uniform(3.0).apply_to(&mut target);
        scale_uniform(2.0).apply_to(&mut target);
        assert_eq!(target.into_diagonal(), [6.0, 6.0, 6.0, 1.0]);
    }

    #[test]
    fn projections_are_steps() {
        let projection = perspective_projection(Radiansf::R60, 1.5, 0.1, 10.0);
        let view = translate(vec3(0.0, 0.0, -5.0));
        assert_eq!(
            Mat4f::from(projection.then(view)),
            Mat4f::from(projection) * Mat4f::from(view)
        );

        let ortho = orthographic_projection(Vec3f::ZERO, vec3(1.0, 1.0, 1.0));
        assert_eq!(Mat4f::from(compose(ortho, view)), Mat4f::from(ortho) * Mat4f::from(view));
    }

    #[test]
    fn offset_rotation_matches_manual_composition() {
        let origin = vec3(1.0, 2.0, 3.0);
        let rotation = rotate(Radiansf::R90, Vec3f::Z);
        let manual = Mat4f::from(translate(-origin))
            * Mat4f::from(rotation)
            * Mat4f::from(translate(origin));
        assert_eq!(Mat4f::from(rotation.around_origin(origin)), manual);
    }

    #[test]
    fn smaller_targets() {
        let m = Mat3f::from(rotate_z(Radiansf::R90).then(translate(vec2(1.0, 2.0))));
        assert_approx_eq!(m * vec2(0.0, 0.0), vec2(-2.0, 1.0));
    }

    #[test]
    fn quaternion_target() {
        let q = Quatf::from(rotate_x(Radiansf::R90).then(rotate(Radiansf::R90, Vec3f::Y)));
        let expected = Quatf::from(rotate_x(Radiansf::R90)) * Quatf::from(rotate_y(Radiansf::R90));
        assert_eq!(q, expected);

        let m = Mat4f::from(rotate_x(Radiansf::R90).then(rotate_y(Radiansf::R90)));
        assert_approx_eq!(Mat4f::from(q), m);

        let q = Quatf::from(Quatf::IDENTITY.then(rotate_z(Radiansf::R90)));
        assert_approx_eq!(q * Vec3f::X, Vec3f::Y);
    }
}
