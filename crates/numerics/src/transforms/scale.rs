use crate::{Matrix, Number, Vector};

/// Scales each axis by its own factor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scale<T, const E: usize> {
    pub factor: Vector<T, E>,
}

impl<T: Number, const E: usize> Scale<T, E> {
    /// Returns whether every factor is 1.
    pub fn is_identity(&self) -> bool {
        self.factor == Vector::splat(T::ONE)
    }
}

/// Creates a per-axis [`Scale`].
pub fn scale<T, const E: usize>(factor: Vector<T, E>) -> Scale<T, E> {
    Scale { factor }
}

/// Scales every axis by the same factor, leaving the homogeneous coordinate alone.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UniformScale<T> {
    pub factor: T,
}

impl<T: Number> UniformScale<T> {
    /// Returns whether the factor is 1.
    pub fn is_identity(&self) -> bool {
        self.factor == T::ONE
    }
}

/// Creates a [`UniformScale`].
pub fn scale_uniform<T>(factor: T) -> UniformScale<T> {
    UniformScale { factor }
}

/// Writes the factors onto the diagonal of an identity matrix.
impl<T: Number, const E: usize, const R: usize, const C: usize> From<Scale<T, E>>
    for Matrix<T, R, C>
{
    fn from(scale: Scale<T, E>) -> Self {
        let mut m = Matrix::IDENTITY;
        for i in 0..E.min(R).min(C) {
            m[(i, i)] = scale.factor[i];
        }
        m
    }
}

/// Writes the factor onto every diagonal element of an identity matrix except the last.
///
/// ```
/// # use numerics::*;
/// let m = Mat4f::from(transforms::scale_uniform(2.0));
/// assert_eq!(m.into_diagonal(), [2.0, 2.0, 2.0, 1.0]);
/// ```
impl<T: Number, const R: usize, const C: usize> From<UniformScale<T>> for Matrix<T, R, C> {
    fn from(scale: UniformScale<T>) -> Self {
        let mut m = Matrix::IDENTITY;
        for i in 0..R.min(C).saturating_sub(1) {
            m[(i, i)] = scale.factor;
        }
        m
    }
}

#[cfg(test)]
mod tests {
    use crate::{vec2, vec3, vec4, Mat3, Mat4f};

    use super::*;

    #[test]
    fn uniform() {
        let m = Mat4f::from(scale_uniform(2.0));
        assert_eq!(m * vec4(1.0, 1.0, 1.0, 1.0), vec4(2.0, 2.0, 2.0, 1.0));
        assert!(scale_uniform(1.0).is_identity());
        assert!(!scale_uniform(0.5).is_identity());
    }

    #[test]
    fn per_axis() {
        let m = Mat4f::from(scale(vec3(1.0, 2.0, 3.0)));
        assert_eq!(m.into_diagonal(), [1.0, 2.0, 3.0, 1.0]);
        assert_eq!(m * vec3(1.0, 1.0, 1.0), vec3(1.0, 2.0, 3.0));

        let m = Mat3::<i32>::from(scale(vec4(2, 3, 4, 5)));
        assert_eq!(m.into_diagonal(), [2, 3, 4]);

        assert!(scale(vec2(1, 1)).is_identity());
        assert!(!scale(vec2(1, 0)).is_identity());
    }
}
