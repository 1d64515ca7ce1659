use std::ops::{Index, IndexMut, Mul, MulAssign};

use crate::{
    approx::ApproxEq,
    traits::{Arithmetic, Number},
    Matrix, Vector,
};

use super::{multiply_matrix_into, multiply_vector_into};

impl<T, const R: usize, const C: usize> Index<(usize, usize)> for Matrix<T, R, C> {
    type Output = T;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        &self.0[col][row]
    }
}

impl<T, const R: usize, const C: usize> IndexMut<(usize, usize)> for Matrix<T, R, C> {
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Self::Output {
        &mut self.0[col][row]
    }
}

impl<T, U, const R: usize, const C: usize> PartialEq<Matrix<U, R, C>> for Matrix<T, R, C>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &Matrix<U, R, C>) -> bool {
        self.0.eq(&other.0)
    }
}

impl<T, const R: usize, const C: usize> Eq for Matrix<T, R, C> where T: Eq {}

impl<T, const R: usize, const C: usize> ApproxEq for Matrix<T, R, C>
where
    T: ApproxEq,
{
    type Tolerance = T::Tolerance;

    fn abs_diff_eq(&self, other: &Self, abs_tolerance: Self::Tolerance) -> bool {
        self.as_slice().abs_diff_eq(other.as_slice(), abs_tolerance)
    }

    fn rel_diff_eq(&self, other: &Self, rel_tolerance: Self::Tolerance) -> bool {
        self.as_slice().rel_diff_eq(other.as_slice(), rel_tolerance)
    }

    fn equivalent(&self, other: &Self) -> bool {
        self.as_slice().equivalent(other.as_slice())
    }
}

/// Matrix * Column Vector.
impl<T, const R: usize, const C: usize> Mul<Vector<T, C>> for Matrix<T, R, C>
where
    T: Arithmetic,
{
    type Output = Vector<T, R>;

    fn mul(self, rhs: Vector<T, C>) -> Self::Output {
        let mut result = Vector::ZERO;
        multiply_vector_into(&mut result, &self, &rhs);
        result
    }
}

// A square matrix multiplied with a vector that is one element shorter treats the vector as a
// point in homogeneous coordinates. These don't overlap with the impl above, since the vector
// length never matches the column count.
macro_rules! homogeneous_mul {
    ($($n:literal => $m:literal),+) => {
        $(
            /// Transforms a point, see [`Matrix::transform_point`].
            impl<T: Number> Mul<Vector<T, $m>> for Matrix<T, $n, $n> {
                type Output = Vector<T, $m>;

                #[inline]
                fn mul(self, rhs: Vector<T, $m>) -> Self::Output {
                    self.transform_point(rhs)
                }
            }
        )+
    };
}
homogeneous_mul!(2 => 1, 3 => 2, 4 => 3);

impl<T: Number, const N: usize> Matrix<T, N, N> {
    /// Transforms a point given in `N - 1` dimensions.
    ///
    /// The point is extended with a `w` component of 1, multiplied with `self`, and divided by the
    /// resulting `w` component before that component is dropped again.
    ///
    /// # Examples
    ///
    /// ```
    /// # use numerics::*;
    /// let m = Mat4f::from(transforms::translate(vec3(5.0, 5.0, 5.0)));
    /// assert_eq!(m.transform_point(vec3(0.0, 0.0, 0.0)), vec3(5.0, 5.0, 5.0));
    /// assert_eq!(m * vec3(1.0, 0.0, 0.0), vec3(6.0, 5.0, 5.0));
    /// ```
    pub fn transform_point<const M: usize>(&self, point: Vector<T, M>) -> Vector<T, M> {
        const { assert!(M + 1 == N, "point must have one dimension less than the matrix") };

        let homogeneous: Vector<T, N> = point.append([T::ONE]);
        let transformed = *self * homogeneous;
        let w = transformed[N - 1];
        (transformed / w).reduce()
    }
}

/// Matrix * Matrix.
impl<T, const R: usize, const K: usize, const C: usize> Mul<Matrix<T, K, C>> for Matrix<T, R, K>
where
    T: Arithmetic,
{
    type Output = Matrix<T, R, C>;

    fn mul(self, rhs: Matrix<T, K, C>) -> Self::Output {
        let mut result = Matrix::ZERO;
        multiply_matrix_into(&mut result, &self, &rhs);
        result
    }
}

/// `lhs *= rhs` is equivalent to `lhs = lhs * rhs`.
impl<T, const R: usize, const C: usize> MulAssign<Matrix<T, C, C>> for Matrix<T, R, C>
where
    T: Arithmetic,
{
    fn mul_assign(&mut self, rhs: Matrix<T, C, C>) {
        *self = *self * rhs;
    }
}

/// Matrix * Scalar.
impl<T, const R: usize, const C: usize> Mul<T> for Matrix<T, R, C>
where
    T: Arithmetic,
{
    type Output = Self;

    fn mul(self, rhs: T) -> Self::Output {
        self.map(|elem| elem * rhs)
    }
}

impl<T, const R: usize, const C: usize> MulAssign<T> for Matrix<T, R, C>
where
    T: Arithmetic,
{
    fn mul_assign(&mut self, rhs: T) {
        self.as_mut_slice().iter_mut().for_each(|elem| *elem = *elem * rhs);
    }
}
