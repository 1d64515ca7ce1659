use std::{array, fmt};

use crate::{Arithmetic, Number, One, Vector, Zero};

mod multiply;
mod ops;

pub use multiply::{multiply_matrix_into, multiply_vector_into, Kernel};

/// A 2x2 matrix.
pub type Mat2<T> = Matrix<T, 2, 2>;
/// A 2x2 matrix with [`f32`] elements.
pub type Mat2f = Mat2<f32>;
/// A 3x3 matrix.
pub type Mat3<T> = Matrix<T, 3, 3>;
/// A 3x3 matrix with [`f32`] elements.
pub type Mat3f = Mat3<f32>;
/// A 4x4 matrix.
pub type Mat4<T> = Matrix<T, 4, 4>;
/// A 4x4 matrix with [`f32`] elements.
pub type Mat4f = Mat4<f32>;
/// A 4x4 matrix with [`f64`] elements.
pub type Mat4d = Mat4<f64>;

/// A column-major matrix with `R` rows and `C` columns, and element type `T`.
///
/// # Construction
///
/// - [`Matrix::from_rows`] and [`Matrix::from_columns`] fill a matrix from nested arrays or
///   vectors, [`Matrix::from_column_major`] from a flat slice in storage order.
/// - [`Matrix::from_fn`] invokes a closure with the row and column of each element.
/// - [`Matrix::from_diagonal`] creates a square matrix with the given diagonal.
/// - [`Matrix::ZERO`] and [`Matrix::IDENTITY`] are the zero and identity matrices. For
///   non-square matrices, the identity has ones on its `min(R, C)` diagonal elements.
/// - Every transform descriptor in [`transforms`] and [`Quaternion`]s convert into a matrix via
///   [`From`].
/// - [`Matrix::resize`] and [`Matrix::copy_from`] move between matrices of different sizes.
///
/// # Element Access
///
/// [`Matrix`] implements [`Index`] and [`IndexMut`] for `(row, column)` tuples, regardless of the
/// column-major storage order. Indices are 0-based.
///
/// ```
/// # use numerics::*;
/// let mut mat = Matrix::from_rows([
///     [0, 1]
/// ]);
/// mat[(0, 0)] = 4;
/// assert_eq!(mat[(0, 0)], 4);
/// assert_eq!(mat[(0, 1)], 1);
/// ```
///
/// Indexing out of bounds panics. [`Matrix::get`] and [`Matrix::get_mut`] return [`Option`]s
/// instead.
///
/// # Comparison
///
/// `==` compares elements exactly. [`ApproxEq::equivalent`] compares each element with the
/// crate's tolerance policy.
///
/// [`Index`]: std::ops::Index
/// [`IndexMut`]: std::ops::IndexMut
/// [`transforms`]: crate::transforms
/// [`Quaternion`]: crate::Quaternion
/// [`ApproxEq::equivalent`]: crate::ApproxEq::equivalent
#[derive(Clone, Copy, Hash)]
#[repr(transparent)]
pub struct Matrix<T, const R: usize, const C: usize>([[T; R]; C]);

#[rustfmt::skip]
unsafe impl<T: bytemuck::Zeroable, const R: usize, const C: usize> bytemuck::Zeroable for Matrix<T, R, C> {}
unsafe impl<T: bytemuck::Pod, const R: usize, const C: usize> bytemuck::Pod for Matrix<T, R, C> {}

impl<T: Zero + Copy, const R: usize, const C: usize> Matrix<T, R, C> {
    /// A matrix with every element set to 0.
    pub const ZERO: Self = Self([[T::ZERO; R]; C]);
}

impl<T: Zero + One + Copy, const R: usize, const C: usize> Matrix<T, R, C> {
    /// The identity matrix.
    ///
    /// The matrix has the value 1 on its diagonal and 0 everywhere else.
    pub const IDENTITY: Self = {
        let mut this = Self::ZERO;
        let mut i = 0;
        while i < Self::MIN_DIMENSION {
            this.0[i][i] = T::ONE;
            i += 1;
        }
        this
    };
}

impl<T, const R: usize, const C: usize> Matrix<T, R, C> {
    /// The smallest dimension of the matrix (`R` or `C`).
    const MIN_DIMENSION: usize = if R > C { C } else { R };

    /// Creates a [`Matrix`] from an array of row vectors.
    ///
    /// # Examples
    ///
    /// ```
    /// # use numerics::*;
    /// let rows = Matrix::from_rows([
    ///     [0, 1],
    ///     [2, 3],
    /// ]);
    /// let columns = Matrix::from_columns([
    ///     [0, 2],
    ///     [1, 3],
    /// ]);
    /// assert_eq!(rows, columns);
    /// ```
    pub fn from_rows<U: Into<Vector<T, C>>>(rows: [U; R]) -> Self
    where
        T: Copy,
    {
        Matrix::from_columns(rows).transpose()
    }

    /// Creates a [`Matrix`] from an array of column vectors.
    pub fn from_columns<U: Into<Vector<T, R>>>(columns: [U; C]) -> Self {
        Self(columns.map(|col| col.into().into_array()))
    }

    /// Creates a [`Matrix`] by invoking a closure with the position (row and column) of each element.
    ///
    /// # Examples
    ///
    /// ```
    /// # use numerics::*;
    /// let mat = Matrix::from_fn(|row, col| row * 10 + col);
    /// assert_eq!(mat, Matrix::from_rows([
    ///     [ 0,  1,  2],
    ///     [10, 11, 12],
    /// ]));
    /// ```
    pub fn from_fn<F>(mut cb: F) -> Self
    where
        F: FnMut(usize, usize) -> T,
    {
        Self(array::from_fn(|col| array::from_fn(|row| cb(row, col))))
    }

    /// Creates a [`Matrix`] from its elements in column-major order.
    ///
    /// # Panics
    ///
    /// Panics if `data` does not contain exactly `R * C` elements.
    ///
    /// # Examples
    ///
    /// ```
    /// # use numerics::*;
    /// let mat = Mat2::from_column_major(&[1, 2, 3, 4]);
    /// assert_eq!(mat[(1, 0)], 2);
    /// assert_eq!(mat[(0, 1)], 3);
    /// ```
    pub fn from_column_major(data: &[T]) -> Self
    where
        T: Copy,
    {
        assert_eq!(
            data.len(),
            R * C,
            "expected {} elements for a {R}x{C} matrix",
            R * C
        );
        Self::from_fn(|row, col| data[col * R + row])
    }

    /// Overwrites every element with `data`, given in column-major order.
    ///
    /// # Panics
    ///
    /// Panics if `data` does not contain exactly `R * C` elements.
    pub fn set_column_major(&mut self, data: &[T])
    where
        T: Copy,
    {
        self.as_mut_slice().copy_from_slice(data);
    }

    /// Returns the elements in storage (column-major) order.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        self.0.as_flattened()
    }

    /// Returns the elements in storage (column-major) order.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        self.0.as_flattened_mut()
    }

    /// Applies a closure to each element, returning a new matrix.
    pub fn map<F, U>(self, mut f: F) -> Matrix<U, R, C>
    where
        F: FnMut(T) -> U,
    {
        Matrix(self.0.map(|column| column.map(&mut f)))
    }

    /// Swaps the rows and columns of this matrix.
    ///
    /// # Examples
    ///
    /// ```
    /// # use numerics::*;
    /// let mat = Matrix::from_rows([
    ///     [0, 1, 2],
    ///     [3, 4, 5],
    /// ]).transpose();
    /// assert_eq!(mat, Matrix::from_rows([
    ///     [0, 3],
    ///     [1, 4],
    ///     [2, 5],
    /// ]));
    /// ```
    pub fn transpose(self) -> Matrix<T, C, R>
    where
        T: Copy,
    {
        Matrix::from_fn(|row, col| self[(col, row)])
    }

    /// Returns the column at index `col` as a vector.
    pub fn column(&self, col: usize) -> Vector<T, R>
    where
        T: Copy,
    {
        Vector::from(self.0[col])
    }

    /// Returns the row at index `row` as a vector.
    pub fn row(&self, row: usize) -> Vector<T, C>
    where
        T: Copy,
    {
        Vector::from_fn(|col| self[(row, col)])
    }

    /// Returns a reference to the element at `(row, col)`, or [`None`] if out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        self.0.get(col).and_then(|col| col.get(row))
    }

    /// Returns a mutable reference to the element at `(row, col)`, or [`None`] if out of bounds.
    pub fn get_mut(&mut self, row: usize, col: usize) -> Option<&mut T> {
        self.0.get_mut(col).and_then(|col| col.get_mut(row))
    }

    /// Copies the overlapping top-left block of `other` into `self`.
    ///
    /// Elements of `self` outside of `other`'s dimensions are left unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// # use numerics::*;
    /// let mut mat = Mat3::<i32>::IDENTITY;
    /// mat.copy_from(&Matrix::from_rows([[7, 8]]));
    /// assert_eq!(mat, Matrix::from_rows([
    ///     [7, 8, 0],
    ///     [0, 1, 0],
    ///     [0, 0, 1],
    /// ]));
    /// ```
    pub fn copy_from<const R2: usize, const C2: usize>(&mut self, other: &Matrix<T, R2, C2>)
    where
        T: Copy,
    {
        for col in 0..C.min(C2) {
            let rows = R.min(R2);
            self.0[col][..rows].copy_from_slice(&other.0[col][..rows]);
        }
    }

    /// Returns a matrix with the contents of `self`, but a potentially different size.
    ///
    /// Elements not present in `self` are set to [`T::ZERO`][`Zero::ZERO`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use numerics::*;
    /// let mat = Matrix::from_rows([
    ///     [1, 2, 3],
    /// ]);
    /// let resized = mat.resize::<2, 2>();
    /// assert_eq!(resized, Matrix::from_rows([
    ///     [1, 2],
    ///     [0, 0],
    /// ]));
    /// ```
    pub fn resize<const R2: usize, const C2: usize>(self) -> Matrix<T, R2, C2>
    where
        T: Zero + Copy,
    {
        let mut out = Matrix::ZERO;
        out.copy_from(&self);
        out
    }

    /// Writes the elements of `values` into consecutive storage locations, starting at
    /// `(row, col)`.
    ///
    /// Since storage is column-major, this writes down a column and continues at the top of the
    /// next one.
    ///
    /// # Panics
    ///
    /// Panics if `(row, col)` is out of bounds, or if `values` does not fit in the remaining
    /// storage.
    pub fn set_vector<const D: usize>(&mut self, row: usize, col: usize, values: Vector<T, D>)
    where
        T: Copy,
    {
        self.set_vector_strided(row, col, values, 1);
    }

    /// Writes the elements of `values` starting at `(row, col)`, with `stride` storage locations
    /// between consecutive elements.
    ///
    /// A stride of `R` writes a row, a stride of `R + 1` writes along the diagonal.
    ///
    /// # Panics
    ///
    /// Panics if `(row, col)` is out of bounds, or if any of the written locations is past the
    /// end of the storage.
    ///
    /// # Examples
    ///
    /// ```
    /// # use numerics::*;
    /// let mut mat = Mat3::<i32>::ZERO;
    /// mat.set_vector_strided(1, 0, vec3(1, 2, 3), 3);
    /// assert_eq!(mat, Matrix::from_rows([
    ///     [0, 0, 0],
    ///     [1, 2, 3],
    ///     [0, 0, 0],
    /// ]));
    /// ```
    pub fn set_vector_strided<const D: usize>(
        &mut self,
        row: usize,
        col: usize,
        values: Vector<T, D>,
        stride: usize,
    ) where
        T: Copy,
    {
        assert!(
            row < R && col < C,
            "position ({row}, {col}) is out of bounds for a {R}x{C} matrix"
        );

        let start = col * R + row;
        let storage = self.as_mut_slice();
        for (i, value) in values.into_array().into_iter().enumerate() {
            storage[start + stride * i] = value;
        }
    }
}

impl<T, const N: usize> Matrix<T, N, N> {
    /// Returns a [`Vector`] holding the diagonal elements of this square matrix.
    pub fn into_diagonal(self) -> Vector<T, N>
    where
        T: Copy,
    {
        Vector::from_fn(|i| self[(i, i)])
    }

    /// Creates a square matrix from its diagonal.
    ///
    /// Elements outside the diagonal are zero.
    ///
    /// # Examples
    ///
    /// ```
    /// # use numerics::*;
    /// let diag = Matrix::from_diagonal([1, 2, 3]);
    /// assert_eq!(diag, Matrix::from_rows([
    ///     [1, 0, 0],
    ///     [0, 2, 0],
    ///     [0, 0, 3],
    /// ]));
    /// ```
    pub fn from_diagonal<D: Into<Vector<T, N>>>(diag: D) -> Self
    where
        T: Zero + Copy,
    {
        let diag = diag.into();
        let mut this = Self::ZERO;
        for i in 0..N {
            this[(i, i)] = diag[i];
        }
        this
    }

    /// Returns the sum of all elements on the diagonal.
    pub fn trace(&self) -> T
    where
        T: Arithmetic,
    {
        (0..N).fold(T::ZERO, |acc, i| acc + self[(i, i)])
    }
}

macro_rules! invert {
    ($($n:literal),+) => {
        $(
            impl<T: Number> Matrix<T, $n, $n> {
                /// Inverts this matrix.
                ///
                /// # Panics
                ///
                /// Panics if `self` is not invertible (ie. if its determinant is zero). Use
                /// `try_invert` to handle that case.
                pub fn invert(&self) -> Self {
                    match self.try_invert() {
                        Some(inverse) => inverse,
                        None => panic!("attempt to invert a non-invertible matrix"),
                    }
                }
            }
        )+
    };
}
invert!(1, 2, 3, 4);

impl<T: Number> Matrix<T, 1, 1> {
    /// Returns the [determinant] of the matrix.
    ///
    /// [determinant]: https://en.wikipedia.org/wiki/Determinant
    #[inline]
    pub fn determinant(&self) -> T {
        self[(0, 0)]
    }

    /// Inverts this matrix, or returns [`None`] if it is not invertible.
    pub fn try_invert(&self) -> Option<Self> {
        let det = self.determinant();
        if det == T::ZERO {
            return None;
        }
        Some(Matrix([[T::ONE / det]]))
    }
}

impl<T: Number> Matrix<T, 2, 2> {
    /// Returns the [determinant] of the matrix.
    ///
    /// [determinant]: https://en.wikipedia.org/wiki/Determinant
    #[inline]
    pub fn determinant(&self) -> T {
        self[(0, 0)] * self[(1, 1)] - self[(0, 1)] * self[(1, 0)]
    }

    /// Inverts this matrix, or returns [`None`] if it is not invertible.
    pub fn try_invert(&self) -> Option<Self> {
        let det = self.determinant();
        if det == T::ZERO {
            return None;
        }

        let [[a, c], [b, d]] = self.0;
        Some(Matrix::from_columns([[d, -c], [-b, a]]) * (T::ONE / det))
    }
}

impl<T: Number> Matrix<T, 3, 3> {
    /// Returns the [determinant] of the matrix.
    ///
    /// [determinant]: https://en.wikipedia.org/wiki/Determinant
    pub fn determinant(&self) -> T {
        let [[a, d, g], [b, e, h], [c, f, i]] = self.0;
        a * (e * i - f * h) - b * (d * i - f * g) + c * (d * h - e * g)
    }

    /// Inverts this matrix, or returns [`None`] if it is not invertible.
    pub fn try_invert(&self) -> Option<Self> {
        let det = self.determinant();
        if det == T::ZERO {
            return None;
        }

        let [[a, d, g], [b, e, h], [c, f, i]] = self.0;
        #[rustfmt::skip]
        let adjugate = Matrix::from_rows([
            [e * i - f * h, c * h - b * i, b * f - c * e],
            [f * g - d * i, a * i - c * g, c * d - a * f],
            [d * h - e * g, b * g - a * h, a * e - b * d],
        ]);
        Some(adjugate * (T::ONE / det))
    }
}

impl<T: Number> Matrix<T, 4, 4> {
    /// The 2x2 minors of the top two rows (`s`) and the bottom two rows (`c`), which both the
    /// determinant and the inverse are built from.
    fn minors(&self) -> ([T; 6], [T; 6]) {
        let m = |row, col| self[(row, col)];
        let s = [
            m(0, 0) * m(1, 1) - m(1, 0) * m(0, 1),
            m(0, 0) * m(1, 2) - m(1, 0) * m(0, 2),
            m(0, 0) * m(1, 3) - m(1, 0) * m(0, 3),
            m(0, 1) * m(1, 2) - m(1, 1) * m(0, 2),
            m(0, 1) * m(1, 3) - m(1, 1) * m(0, 3),
            m(0, 2) * m(1, 3) - m(1, 2) * m(0, 3),
        ];
        let c = [
            m(2, 0) * m(3, 1) - m(3, 0) * m(2, 1),
            m(2, 0) * m(3, 2) - m(3, 0) * m(2, 2),
            m(2, 0) * m(3, 3) - m(3, 0) * m(2, 3),
            m(2, 1) * m(3, 2) - m(3, 1) * m(2, 2),
            m(2, 1) * m(3, 3) - m(3, 1) * m(2, 3),
            m(2, 2) * m(3, 3) - m(3, 2) * m(2, 3),
        ];
        (s, c)
    }

    /// Returns the [determinant] of the matrix.
    ///
    /// [determinant]: https://en.wikipedia.org/wiki/Determinant
    pub fn determinant(&self) -> T {
        let ([s0, s1, s2, s3, s4, s5], [c0, c1, c2, c3, c4, c5]) = self.minors();
        s0 * c5 - s1 * c4 + s2 * c3 + s3 * c2 - s4 * c1 + s5 * c0
    }

    /// Inverts this matrix, or returns [`None`] if it is not invertible.
    ///
    /// # Examples
    ///
    /// ```
    /// # use numerics::*;
    /// let m = Mat4f::from(transforms::translate(vec3(1.0, 2.0, 3.0)));
    /// let inverse = m.try_invert().unwrap();
    /// assert_eq!(inverse, Mat4f::from(transforms::translate(vec3(-1.0, -2.0, -3.0))));
    ///
    /// assert_eq!(Mat4f::ZERO.try_invert(), None);
    /// ```
    pub fn try_invert(&self) -> Option<Self> {
        let (s, c) = self.minors();
        let [s0, s1, s2, s3, s4, s5] = s;
        let [c0, c1, c2, c3, c4, c5] = c;
        let det = s0 * c5 - s1 * c4 + s2 * c3 + s3 * c2 - s4 * c1 + s5 * c0;
        if det == T::ZERO {
            return None;
        }

        let m = |row, col| self[(row, col)];
        #[rustfmt::skip]
        let adjugate = Matrix::from_rows([
            [
                m(1, 1) * c5 - m(1, 2) * c4 + m(1, 3) * c3,
                -(m(0, 1) * c5) + m(0, 2) * c4 - m(0, 3) * c3,
                m(3, 1) * s5 - m(3, 2) * s4 + m(3, 3) * s3,
                -(m(2, 1) * s5) + m(2, 2) * s4 - m(2, 3) * s3,
            ],
            [
                -(m(1, 0) * c5) + m(1, 2) * c2 - m(1, 3) * c1,
                m(0, 0) * c5 - m(0, 2) * c2 + m(0, 3) * c1,
                -(m(3, 0) * s5) + m(3, 2) * s2 - m(3, 3) * s1,
                m(2, 0) * s5 - m(2, 2) * s2 + m(2, 3) * s1,
            ],
            [
                m(1, 0) * c4 - m(1, 1) * c2 + m(1, 3) * c0,
                -(m(0, 0) * c4) + m(0, 1) * c2 - m(0, 3) * c0,
                m(3, 0) * s4 - m(3, 1) * s2 + m(3, 3) * s0,
                -(m(2, 0) * s4) + m(2, 1) * s2 - m(2, 3) * s0,
            ],
            [
                -(m(1, 0) * c3) + m(1, 1) * c1 - m(1, 2) * c0,
                m(0, 0) * c3 - m(0, 1) * c1 + m(0, 2) * c0,
                -(m(3, 0) * s3) + m(3, 1) * s1 - m(3, 2) * s0,
                m(2, 0) * s3 - m(2, 1) * s1 + m(2, 2) * s0,
            ],
        ]);
        Some(adjugate * (T::ONE / det))
    }
}

impl<T, const R: usize, const C: usize> Default for Matrix<T, R, C>
where
    T: Default,
{
    fn default() -> Self {
        Self::from_fn(|_, _| T::default())
    }
}

/// Row-wise debug output, matching the order matrices are written in.
impl<T: fmt::Debug, const R: usize, const C: usize> fmt::Debug for Matrix<T, R, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        struct Row<'a, T, const R: usize, const C: usize>(&'a Matrix<T, R, C>, usize);

        impl<'a, T: fmt::Debug, const R: usize, const C: usize> fmt::Debug for Row<'a, T, R, C> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                // Keep each row on one line, even with `{:#?}`.
                write!(f, "[")?;
                for col in 0..C {
                    if col != 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{:?}", self.0[(self.1, col)])?;
                }
                write!(f, "]")
            }
        }

        f.debug_list()
            .entries((0..R).map(|row| Row(self, row)))
            .finish()
    }
}

/// Fixed-width grid output in storage order: each line holds one column of the matrix.
///
/// Elements are right-aligned in 10 characters with 4 digits after the decimal point.
///
/// ```
/// # use numerics::*;
/// let mat = Matrix::from_rows([
///     [1.0, 2.0],
///     [3.0, 4.5],
/// ]);
/// assert_eq!(
///     mat.to_string(),
///     "    1.0000     3.0000\n    2.0000     4.5000\n",
/// );
/// ```
impl<T: fmt::Display, const R: usize, const C: usize> fmt::Display for Matrix<T, R, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for column in &self.0 {
            for (row, elem) in column.iter().enumerate() {
                write!(f, "{elem:>10.4}")?;
                f.write_str(if row + 1 == R { "\n" } else { " " })?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::{assert_approx_eq, assert_approx_ne, vec2, vec4, ApproxEq, Vec4};

    use super::*;

    /// Fills `matrix` with 0, 1, 2, ... in storage order.
    fn test_pattern<const R: usize, const C: usize>() -> Matrix<f32, R, C> {
        let mut i = 0.0;
        let mut matrix = Matrix::ZERO;
        for col in 0..C {
            for row in 0..R {
                matrix[(row, col)] = i;
                i += 1.0;
            }
        }
        matrix
    }

    #[test]
    fn from_rows_columns() {
        assert_eq!(
            Matrix::<i32, 2, 3>::from_rows([[1, 2, 3], [4, 5, 6]]),
            Matrix::<i32, 2, 3>::from_columns([[1, 4], [2, 5], [3, 6]]),
        );
    }

    #[test]
    fn column_major_data() {
        let data: Vec<f32> = (1..=16).map(|i| i as f32).collect();
        let m = Mat4f::from_column_major(&data);
        assert_eq!(m[(3, 3)], 16.0);
        assert_eq!(m[(1, 0)], 2.0);
        assert_eq!(m.as_slice(), &data[..]);
        assert_eq!(m, test_pattern::<4, 4>().map(|e| e + 1.0));

        let mut n = Mat4f::ZERO;
        n.set_column_major(&data);
        assert_eq!(n, m);
    }

    #[test]
    #[should_panic(expected = "expected 4 elements")]
    fn column_major_data_wrong_length() {
        Mat2::<i32>::from_column_major(&[1, 2, 3]);
    }

    #[test]
    fn identity() {
        let a = test_pattern::<4, 4>();
        assert_eq!(a * Mat4f::IDENTITY, a);
        assert_eq!(Mat4f::IDENTITY * a, a);

        let rect = Matrix::<i32, 2, 3>::IDENTITY;
        assert_eq!(rect, Matrix::from_rows([[1, 0, 0], [0, 1, 0]]));
    }

    #[test]
    fn transpose() {
        let m = test_pattern::<2, 3>();
        let mt = m.transpose();
        assert_eq!(m[(0, 0)], mt[(0, 0)]);
        assert_eq!(m[(1, 1)], mt[(1, 1)]);
        assert_eq!(m[(0, 1)], mt[(1, 0)]);
        assert_eq!(m[(1, 0)], mt[(0, 1)]);
        assert_eq!(mt.transpose(), m);
    }

    #[test]
    fn rows_and_columns() {
        let m = test_pattern::<3, 2>();
        assert_eq!(m.column(1), [3.0, 4.0, 5.0]);
        assert_eq!(m.row(1), [1.0, 4.0]);
    }

    #[test]
    fn set_vectors() {
        let mut a = Mat4f::ZERO;
        a.set_vector_strided(0, 0, Vec4::splat(1.0), 5);
        assert_eq!(a, Mat4f::IDENTITY);

        let mut a = Mat4f::ZERO;
        a.set_vector_strided(0, 0, vec4(0.0, 1.0, 2.0, 3.0), 1);
        a.set_vector_strided(0, 1, vec4(4.0, 5.0, 6.0, 7.0), 1);
        a.set_vector_strided(0, 2, vec4(8.0, 10.0, 12.0, 14.0), 2);
        a.set_vector_strided(1, 2, vec4(9.0, 11.0, 13.0, 15.0), 2);
        assert_eq!(a, test_pattern::<4, 4>());

        let mut b = Matrix::<f32, 2, 3>::ZERO;
        b.set_vector(0, 1, vec2(1.0, 2.0));
        assert_eq!(b.column(1), [1.0, 2.0]);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn set_vector_out_of_bounds() {
        let mut m = Mat2f::ZERO;
        m.set_vector(2, 0, vec2(1.0, 1.0));
    }

    #[test]
    fn fmt() {
        let mat = Matrix::from_rows([[0, 1], [2, 3]]);

        // Natural writing order (row-wise) for debug output.
        assert_eq!(format!("{:?}", mat), "[[0, 1], [2, 3]]");
        assert_eq!(format!("{:#?}", mat), "[\n    [0, 1],\n    [2, 3],\n]");

        // Storage order for display output.
        assert_eq!(format!("{}", mat), "         0          2\n         1          3\n");
        assert_eq!(
            format!("{}", Mat2f::IDENTITY),
            "    1.0000     0.0000\n    0.0000     1.0000\n"
        );
    }

    #[rustfmt::skip]
    #[test]
    fn resize() {
        let mat = Matrix::from_rows([
            [1, 2],
            [3, 4],
        ]);

        let larger = mat.resize::<3, 3>();
        assert_eq!(larger, Matrix::from_rows([
            [1, 2, 0],
            [3, 4, 0],
            [0, 0, 0],
        ]));

        let smaller = mat.resize::<1, 2>();
        assert_eq!(smaller, Matrix::from_rows([
            [1, 2]
        ]));

        let mut target = Mat3::<i32>::IDENTITY * 9;
        target.copy_from(&mat);
        assert_eq!(target, Matrix::from_rows([
            [1, 2, 0],
            [3, 4, 0],
            [0, 0, 9],
        ]));
    }

    #[test]
    fn determinant() {
        assert_eq!(Matrix::<f32, 1, 1>::ZERO.determinant(), 0.0);
        assert_eq!(Mat2f::ZERO.determinant(), 0.0);
        assert_eq!(Mat3f::ZERO.determinant(), 0.0);
        assert_eq!(Mat4f::ZERO.determinant(), 0.0);
        assert_eq!(Mat2f::IDENTITY.determinant(), 1.0);
        assert_eq!(Mat3f::IDENTITY.determinant(), 1.0);
        assert_eq!(Mat4f::IDENTITY.determinant(), 1.0);

        #[rustfmt::skip]
        let testmat = Matrix::from_rows([
            [-2, -1,  2],
            [ 2,  1,  4],
            [-3,  3, -1],
        ]);
        assert_eq!(testmat.determinant(), 54);
        assert_eq!(testmat.transpose().determinant(), 54);

        #[rustfmt::skip]
        let testmat = Matrix::from_rows([
            [1, 0, 2, -1],
            [3, 0, 0,  5],
            [2, 1, 4, -3],
            [1, 0, 5,  0],
        ]);
        assert_eq!(testmat.determinant(), 30);
        assert_eq!(testmat.transpose().determinant(), 30);
    }

    #[test]
    fn invert() {
        assert_eq!(Mat2::<i32>::IDENTITY.invert(), Mat2::<i32>::IDENTITY);
        assert_eq!(Mat4f::IDENTITY.invert(), Mat4f::IDENTITY);
        assert_eq!(Mat3f::ZERO.try_invert(), None);

        #[rustfmt::skip]
        let m = Matrix::from_rows([
            [2.0, 0.0, 1.0],
            [1.0, 3.0, 0.0],
            [0.0, 1.0, 4.0],
        ]);
        assert_approx_eq!(m * m.invert(), Mat3::IDENTITY).abs(1e-12);

        #[rustfmt::skip]
        let m = Matrix::from_rows([
            [1.0, 0.0, 2.0, -1.0],
            [3.0, 0.0, 0.0,  5.0],
            [2.0, 1.0, 4.0, -3.0],
            [1.0, 0.0, 5.0,  0.0],
        ]);
        let inverse = m.invert();
        assert_approx_eq!(m * inverse, Mat4::IDENTITY).abs(1e-12);
        assert_approx_eq!(inverse * m, Mat4::IDENTITY).abs(1e-12);
    }

    #[test]
    #[should_panic(expected = "non-invertible")]
    fn invert_singular() {
        Mat2f::ZERO.invert();
    }

    #[test]
    fn equivalence() {
        let a = test_pattern::<3, 3>();
        let mut b = a;
        b[(2, 1)] += 1e-6;
        assert_ne!(a, b);
        assert!(a.equivalent(&b));
        b[(0, 0)] = 0.1;
        assert_approx_ne!(a, b);
    }
}
