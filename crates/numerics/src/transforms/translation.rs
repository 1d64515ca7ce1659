use crate::{Matrix, Number, Vector};

/// Moves points by a fixed offset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Translation<T, const E: usize> {
    pub offset: Vector<T, E>,
}

impl<T: Number, const E: usize> Translation<T, E> {
    /// Returns whether this translation leaves every point in place.
    pub fn is_identity(&self) -> bool {
        self.offset == Vector::ZERO
    }
}

/// Creates a [`Translation`] by `offset`.
pub fn translate<T, const E: usize>(offset: Vector<T, E>) -> Translation<T, E> {
    Translation { offset }
}

/// Writes the offset into the first `E` rows of the last column of an identity matrix.
///
/// ```
/// # use numerics::*;
/// let m = Mat4f::from(transforms::translate(vec3(5.0, 6.0, 7.0)));
/// assert_eq!(m.column(3), [5.0, 6.0, 7.0, 1.0]);
/// assert_eq!(m * vec3(0.0, 0.0, 0.0), vec3(5.0, 6.0, 7.0));
/// ```
impl<T: Number, const E: usize, const R: usize, const C: usize> From<Translation<T, E>>
    for Matrix<T, R, C>
{
    fn from(translation: Translation<T, E>) -> Self {
        const { assert!(C > 0, "cannot translate with a matrix without columns") };

        let mut m = Matrix::IDENTITY;
        for i in 0..E.min(R) {
            m[(i, C - 1)] = translation.offset[i];
        }
        m
    }
}

#[cfg(test)]
mod tests {
    use crate::{vec3, vec4, Mat3f, Mat4f, Matrix};

    use super::*;

    #[test]
    fn homogeneous_offset() {
        let m = Mat4f::from(translate(vec4(5.0, 5.0, 5.0, 1.0)));
        assert_eq!(m * vec3(0.0, 0.0, 0.0), vec3(5.0, 5.0, 5.0));
        assert_eq!(m * vec4(1.0, 2.0, 3.0, 1.0), vec4(6.0, 7.0, 8.0, 1.0));
    }

    #[test]
    fn offset_is_clipped_to_matrix() {
        let m = Mat3f::from(translate(vec3(1.0, 2.0, 3.0)));
        assert_eq!(m.column(2), [1.0, 2.0, 3.0]);

        let m = Matrix::<i32, 2, 3>::from(translate(vec3(4, 5, 6)));
        assert_eq!(m, Matrix::from_rows([[1, 0, 4], [0, 1, 5]]));
    }

    #[test]
    fn identity() {
        assert!(translate(vec3(0.0, 0.0, 0.0)).is_identity());
        assert!(!translate(vec3(0.0, 1.0, 0.0)).is_identity());
        assert_eq!(Mat4f::from(translate(vec3(0.0, 0.0, 0.0))), Mat4f::IDENTITY);
    }
}
