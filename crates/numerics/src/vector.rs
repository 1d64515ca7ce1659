use std::{array, fmt};

use crate::{
    acos, number::Scalar, traits::{Arithmetic, Number}, MinMax, One, Radians, Raise, Real, Zero,
};

mod ops;
mod parse;
mod view;

pub use parse::ParseVectorError;

/// A 1-dimensional vector.
pub type Vec1<T> = Vector<T, 1>;
/// A 2-dimensional vector.
pub type Vec2<T> = Vector<T, 2>;
/// A 2-dimensional vector with [`f32`] elements.
pub type Vec2f = Vec2<f32>;
/// A 3-dimensional vector.
pub type Vec3<T> = Vector<T, 3>;
/// A 3-dimensional vector with [`f32`] elements.
pub type Vec3f = Vec3<f32>;
/// A 4-dimensional vector.
pub type Vec4<T> = Vector<T, 4>;
/// A 4-dimensional vector with [`f32`] elements.
pub type Vec4f = Vec4<f32>;

/// An `N`-element column vector storing elements of type `T`.
///
/// # Construction
///
/// - The freestanding [`vec2`], [`vec3`] and [`vec4`] functions directly create vectors from
///   provided values.
/// - [`Vector::splat`] copies a single value into each element.
/// - [`Vector::from_fn`] invokes a closure with the index of each element.
/// - Vectors can be created from arrays using their [`From`] implementation.
/// - [`Vector::ZERO`] is a vector containing all-zeroes, and for vectors with up to 4 dimensions,
///   `Vector::X`, `Vector::Y`, `Vector::Z` and `Vector::W` are the unit vectors along each axis.
/// - [`Vector::resize`], [`Vector::reduce`] and [`Vector::append`] change the dimension of an
///   existing vector. There is no implicit conversion between dimensions.
///
/// # Element Access
///
/// - For vectors with up to 4 dimensions, elements can be accessed as fields `x`, `y`, `z`, or `w`.
/// - The [`Index`] and [`IndexMut`] impls can be used just like on arrays. The [`axis`] module
///   has readable names for the first four indices.
/// - [`Vector::as_array`], [`Vector::as_slice`], and [`Vector::into_array`] expose the
///   underlying storage.
/// - [`bytemuck::Zeroable`] and [`bytemuck::Pod`] are implemented when the element type `T` also
///   implements them.
///
/// # Comparison
///
/// `==` compares elements exactly. [`ApproxEq::equivalent`] compares each element with the
/// crate's tolerance policy.
///
/// [`Index`]: std::ops::Index
/// [`IndexMut`]: std::ops::IndexMut
/// [`axis`]: crate::axis
/// [`ApproxEq::equivalent`]: crate::ApproxEq::equivalent
#[derive(Clone, Copy, Hash)]
#[repr(transparent)]
pub struct Vector<T, const N: usize>([T; N]);

unsafe impl<T: bytemuck::Zeroable, const N: usize> bytemuck::Zeroable for Vector<T, N> {}
unsafe impl<T: bytemuck::Pod, const N: usize> bytemuck::Pod for Vector<T, N> {}

impl<T: Zero, const N: usize> Vector<T, N> {
    /// A vector with each element initialized to 0.
    pub const ZERO: Self = Self([T::ZERO; N]);
}

impl<T: Zero + One> Vector<T, 2> {
    /// A unit vector pointing in the X direction.
    pub const X: Self = Self([T::ONE, T::ZERO]);
    /// A unit vector pointing in the Y direction.
    pub const Y: Self = Self([T::ZERO, T::ONE]);
}

impl<T: Zero + One> Vector<T, 3> {
    /// A unit vector pointing in the X direction.
    pub const X: Self = Self([T::ONE, T::ZERO, T::ZERO]);
    /// A unit vector pointing in the Y direction.
    pub const Y: Self = Self([T::ZERO, T::ONE, T::ZERO]);
    /// A unit vector pointing in the Z direction.
    pub const Z: Self = Self([T::ZERO, T::ZERO, T::ONE]);
}

impl<T: Zero + One> Vector<T, 4> {
    /// A unit vector pointing in the X direction.
    pub const X: Self = Self([T::ONE, T::ZERO, T::ZERO, T::ZERO]);
    /// A unit vector pointing in the Y direction.
    pub const Y: Self = Self([T::ZERO, T::ONE, T::ZERO, T::ZERO]);
    /// A unit vector pointing in the Z direction.
    pub const Z: Self = Self([T::ZERO, T::ZERO, T::ONE, T::ZERO]);
    /// A unit vector pointing in the W direction.
    pub const W: Self = Self([T::ZERO, T::ZERO, T::ZERO, T::ONE]);
}

impl<T, const N: usize> Vector<T, N> {
    /// Creates a vector with each element initialized to `elem`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use numerics::*;
    /// let v = Vector::splat(2);
    /// assert_eq!(v, vec3(2, 2, 2));
    /// ```
    #[inline]
    pub fn splat(elem: T) -> Self
    where
        T: Copy,
    {
        Self([elem; N])
    }

    /// Creates a vector where each element is initialized by invoking a closure with its index.
    ///
    /// # Examples
    ///
    /// ```
    /// # use numerics::*;
    /// let v = Vector::from_fn(|i| i * 2);
    /// assert_eq!(v, vec4(0, 2, 4, 6));
    /// ```
    pub fn from_fn<F>(cb: F) -> Self
    where
        F: FnMut(usize) -> T,
    {
        Self(array::from_fn(cb))
    }

    /// Applies a closure to each element, returning a new vector.
    pub fn map<F, U>(self, f: F) -> Vector<U, N>
    where
        F: FnMut(T) -> U,
    {
        Vector(self.0.map(f))
    }

    /// Pairs up the elements of `self` and `other`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use numerics::*;
    /// let v = vec2(1, 2).zip(vec2('a', 'b'));
    /// assert_eq!(v, vec2((1, 'a'), (2, 'b')));
    /// ```
    pub fn zip<U>(self, other: Vector<U, N>) -> Vector<(T, U), N> {
        let mut pairs = self.0.into_iter().zip(other.0);
        // Both sides yield exactly `N` elements.
        Vector::from_fn(|_| pairs.next().unwrap())
    }

    /// Returns a reference to the underlying elements as an array of length `N`.
    #[inline]
    pub const fn as_array(&self) -> &[T; N] {
        &self.0
    }

    /// Returns a mutable reference to the underlying elements as an array of length `N`.
    #[inline]
    pub fn as_mut_array(&mut self) -> &mut [T; N] {
        &mut self.0
    }

    /// Returns a reference to the underlying elements as a slice.
    #[inline]
    pub const fn as_slice(&self) -> &[T] {
        &self.0
    }

    /// Returns a mutable reference to the underlying elements as a slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.0
    }

    /// Converts this [`Vector`] into an `N`-element array.
    #[inline]
    pub fn into_array(self) -> [T; N] {
        self.0
    }

    /// Returns a vector with the first `E` elements of `self`.
    ///
    /// Fails to compile if `E` is larger than `N`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use numerics::*;
    /// let v: Vec2<i32> = vec4(1, 2, 3, 4).reduce();
    /// assert_eq!(v, vec2(1, 2));
    /// ```
    pub fn reduce<const E: usize>(self) -> Vector<T, E>
    where
        T: Copy,
    {
        const { assert!(E <= N, "cannot reduce a vector to a larger size") };
        Vector::from_fn(|i| self.0[i])
    }

    /// Returns a vector with `tail` appended to the elements of `self`.
    ///
    /// The resulting dimension `O` must be `N + M`, which is checked at compile time.
    ///
    /// # Examples
    ///
    /// ```
    /// # use numerics::*;
    /// let v: Vec4<f32> = vec2(1.0, 2.0).append([3.0, 4.0]);
    /// assert_eq!(v, vec4(1.0, 2.0, 3.0, 4.0));
    /// ```
    pub fn append<const M: usize, const O: usize>(self, tail: [T; M]) -> Vector<T, O>
    where
        T: Copy,
    {
        const { assert!(O == N + M, "appended vector has the wrong dimension") };
        Vector::from_fn(|i| if i < N { self.0[i] } else { tail[i - N] })
    }

    /// Converts `self` to a vector with `M` elements.
    ///
    /// Excess elements are dropped, missing elements are filled with zero.
    ///
    /// # Examples
    ///
    /// ```
    /// # use numerics::*;
    /// assert_eq!(vec2(7, 8).resize::<4>(), vec4(7, 8, 0, 0));
    /// assert_eq!(vec4(7, 8, 9, 10).resize::<3>(), vec3(7, 8, 9));
    /// ```
    pub fn resize<const M: usize>(self) -> Vector<T, M>
    where
        T: Zero + Copy,
    {
        Vector::from_fn(|i| if i < N { self.0[i] } else { T::ZERO })
    }

    /// Returns the sum of all elements.
    pub fn sum(self) -> T
    where
        T: Arithmetic,
    {
        self.0.into_iter().fold(T::ZERO, |acc, elem| acc + elem)
    }

    /// Returns the product of all elements.
    ///
    /// # Examples
    ///
    /// ```
    /// # use numerics::*;
    /// assert_eq!(vec3(2, 3, 4).product(), 24);
    /// ```
    pub fn product(self) -> T
    where
        T: Arithmetic,
    {
        self.0.into_iter().fold(T::ONE, |acc, elem| acc * elem)
    }

    /// Computes the dot product between `self` and `other`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use numerics::*;
    /// let a = vec3(1, 3, -5);
    /// let b = vec3(4, -2, -1);
    /// assert_eq!(a.dot(b), 3);
    /// ```
    pub fn dot(self, other: Self) -> T
    where
        T: Arithmetic,
    {
        (self * other).sum()
    }

    /// Returns the squared length of this [`Vector`].
    ///
    /// This avoids the square root and is the cheaper choice for comparing relative lengths.
    pub fn length_squared(self) -> T
    where
        T: Arithmetic,
    {
        self.dot(self)
    }

    /// Returns the length of this [`Vector`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use numerics::*;
    /// assert_eq!(Vec4f::splat(4.0).length(), 8.0);
    /// ```
    pub fn length(self) -> T
    where
        T: Real,
    {
        self.length_squared().sqrt()
    }

    /// Scales this vector to unit length.
    ///
    /// Vectors with a length of (approximately) zero cannot be normalized and are returned
    /// unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// # use numerics::*;
    /// assert_eq!(vec3(0.0, 0.0, 2.5).normalize(), vec3(0.0, 0.0, 1.0));
    /// assert_eq!(Vec3f::ZERO.normalize(), Vec3f::ZERO);
    /// ```
    pub fn normalize(self) -> Self
    where
        T: Real,
    {
        self.normalize_to(T::ONE)
    }

    /// Scales this vector to the given length.
    ///
    /// Like [`Vector::normalize`], this returns `self` unchanged if its length is approximately
    /// zero. It also does so if the length is already approximately `length`.
    pub fn normalize_to(self, length: T) -> Self
    where
        T: Real,
    {
        let current = self.length();
        if current.equivalent(&T::ZERO) || current.equivalent(&length) {
            return self;
        }

        self * (length / current)
    }

    /// Computes the smallest angle between `self` and `other`.
    ///
    /// Both vectors must have a non-zero length for the result to be meaningful.
    ///
    /// # Examples
    ///
    /// ```
    /// # use numerics::*;
    /// assert_approx_eq!(Vec3f::X.angle_between(Vec3f::Y), Radians::<f32>::R90);
    /// assert_approx_eq!(Vec3f::X.angle_between(-Vec3f::X), Radians::<f32>::R180);
    /// ```
    pub fn angle_between(self, other: Self) -> Radians<T>
    where
        T: Real,
    {
        let cos = self.dot(other) / (self.length() * other.length());
        // Rounding can push the cosine slightly outside of `[-1, 1]`.
        acos(MinMax::clamp(cos, -T::ONE, T::ONE))
    }

    /// Reflects `self` about the plane with the given `normal`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use numerics::*;
    /// let incoming = vec2(1.0, -1.0);
    /// assert_eq!(incoming.reflect(Vec2f::Y), vec2(1.0, 1.0));
    /// ```
    pub fn reflect(self, normal: Self) -> Self
    where
        T: Number,
    {
        self - normal * ((T::ONE + T::ONE) * self.dot(normal))
    }

    /// Element-wise minimum between `self` and `other`.
    pub fn min(self, other: Self) -> Self
    where
        T: MinMax + Copy,
    {
        Self::from_fn(|i| self[i].min(other[i]))
    }

    /// Element-wise maximum between `self` and `other`.
    pub fn max(self, other: Self) -> Self
    where
        T: MinMax + Copy,
    {
        Self::from_fn(|i| self[i].max(other[i]))
    }

    /// Element-wise clamp of `self` to the range `lower..=upper`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use numerics::*;
    /// let v = vec3(-1.0, 0.5, 3.0).clamp(Vector::splat(0.0), Vector::splat(1.0));
    /// assert_eq!(v, vec3(0.0, 0.5, 1.0));
    /// ```
    pub fn clamp(self, lower: Self, upper: Self) -> Self
    where
        T: MinMax + Copy,
    {
        Self::from_fn(|i| self[i].clamp(lower[i], upper[i]))
    }

    /// Clamps each element to `[0, 1]`.
    pub fn saturate(self) -> Self
    where
        T: Scalar,
    {
        self.map(Scalar::saturate)
    }

    /// Raises each element to the power `exponent`.
    pub fn raise<E: Copy>(self, exponent: E) -> Self
    where
        T: Raise<E>,
    {
        self.map(|elem| elem.raise(exponent))
    }

    /// Returns the absolute value of each element.
    pub fn absolute(self) -> Self
    where
        T: Scalar,
    {
        self.map(Scalar::absolute)
    }

    /// Rounds each element down, or up if `up` is `true`.
    pub fn truncate(self, up: bool) -> Self
    where
        T: Scalar,
    {
        self.map(|elem| elem.truncate(up))
    }

    /// Returns the fractional part of each element.
    pub fn fraction(self) -> Self
    where
        T: Scalar,
    {
        self.map(Scalar::fraction)
    }

    /// Limits each element of `self` by the corresponding element of `limit`.
    ///
    /// If `upper` is `true`, `limit` is an upper bound (the element-wise minimum is taken),
    /// otherwise it is a lower bound.
    ///
    /// # Examples
    ///
    /// ```
    /// # use numerics::*;
    /// let v = vec2(5, -5);
    /// assert_eq!(v.constrain(vec2(3, 3), true), vec2(3, -5));
    /// assert_eq!(v.constrain(vec2(0, 0), false), vec2(5, 0));
    /// ```
    pub fn constrain(self, limit: Self, upper: bool) -> Self
    where
        T: MinMax + Copy,
    {
        if upper {
            self.min(limit)
        } else {
            self.max(limit)
        }
    }

    /// Treats each element of `self` as a fraction and places it within the box spanned by
    /// `a` and `b`.
    ///
    /// The corners do not need to be ordered: on each axis, a fraction of 0 maps to the smaller
    /// and a fraction of 1 to the larger coordinate.
    ///
    /// # Examples
    ///
    /// ```
    /// # use numerics::*;
    /// let p = vec2(0.5, 0.25).place_within(vec2(10.0, 4.0), vec2(0.0, 0.0));
    /// assert_eq!(p, vec2(5.0, 1.0));
    /// ```
    pub fn place_within(self, a: Self, b: Self) -> Self
    where
        T: Number + MinMax,
    {
        let lower = a.min(b);
        let upper = a.max(b);
        lower + (upper - lower) * self
    }
}

impl<const N: usize> Vector<usize, N> {
    /// Converts a flat `index` into a coordinate, treating `self` as the size of an
    /// `N`-dimensional grid.
    ///
    /// The first dimension varies fastest. This is the inverse of [`Vector::index_of`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use numerics::*;
    /// let size = vec3(2, 3, 4);
    /// assert_eq!(size.distribute(0), vec3(0, 0, 0));
    /// assert_eq!(size.distribute(5), vec3(1, 2, 0));
    /// assert_eq!(size.distribute(23), vec3(1, 2, 3));
    /// ```
    pub fn distribute(self, index: usize) -> Self {
        let mut coordinate = Self::ZERO;
        let mut remainder = index;
        for i in (0..N).rev() {
            let stride: usize = self.0[..i].iter().product();
            coordinate[i] = remainder / stride;
            remainder %= stride;
        }
        coordinate
    }

    /// Converts a `coordinate` into a flat index, treating `self` as the size of an
    /// `N`-dimensional grid.
    ///
    /// # Examples
    ///
    /// ```
    /// # use numerics::*;
    /// assert_eq!(vec3(2, 3, 4).index_of(vec3(1, 2, 0)), 5);
    /// ```
    pub fn index_of(self, coordinate: Self) -> usize {
        let mut index = 0;
        let mut stride = 1;
        for i in 0..N {
            index += coordinate[i] * stride;
            stride *= self[i];
        }
        index
    }
}

impl<T> Vector<T, 2> {
    /// Returns the clockwise normal `(y, -x)` of this direction.
    ///
    /// # Examples
    ///
    /// ```
    /// # use numerics::*;
    /// assert_eq!(vec2(0, 1).normal(), vec2(1, 0));
    /// ```
    pub fn normal(self) -> Self
    where
        T: Number,
    {
        let [x, y] = self.0;
        vec2(y, -x)
    }
}

impl<T> Vector<T, 3> {
    /// Computes the cross product of `self` and `other`.
    ///
    /// The result is perpendicular to both inputs. Swapping the arguments inverts its direction.
    ///
    /// # Examples
    ///
    /// ```
    /// # use numerics::*;
    /// assert_eq!(Vec3f::X.cross(Vec3f::Y), Vec3f::Z);
    /// assert_eq!(Vec3f::Y.cross(Vec3f::X), -Vec3f::Z);
    /// ```
    pub fn cross(self, other: Self) -> Self
    where
        T: Number,
    {
        let [a1, a2, a3] = self.0;
        let [b1, b2, b3] = other.0;

        #[rustfmt::skip]
        let cross = vec3(
            a2 * b3 - a3 * b2,
            a3 * b1 - a1 * b3,
            a1 * b2 - a2 * b1,
        );
        cross
    }

    /// Computes the unit normal of the triangle `a`, `b`, `c`.
    ///
    /// The normal points towards the side from which the vertices appear counterclockwise.
    pub fn surface_normal(a: Self, b: Self, c: Self) -> Self
    where
        T: Real,
    {
        (b - a).cross(c - b).normalize()
    }
}

impl<T> Vector<T, 4> {
    /// Computes the 4-dimensional cross product of `self`, `v` and `w`.
    ///
    /// The result is orthogonal to all three inputs.
    ///
    /// # Examples
    ///
    /// ```
    /// # use numerics::*;
    /// assert_eq!(Vec4f::X.cross(Vec4f::Y, Vec4f::Z), -Vec4f::W);
    /// ```
    pub fn cross(self, v: Self, w: Self) -> Self
    where
        T: Number,
    {
        let [u0, u1, u2, u3] = self.0;
        let [v0, v1, v2, v3] = v.0;
        let [w0, w1, w2, w3] = w.0;

        // 2x2 minors of `v` and `w`.
        let a = v0 * w1 - v1 * w0;
        let b = v0 * w2 - v2 * w0;
        let c = v0 * w3 - v3 * w0;
        let d = v1 * w2 - v2 * w1;
        let e = v1 * w3 - v3 * w1;
        let f = v2 * w3 - v3 * w2;

        vec4(
            u1 * f - u2 * e + u3 * d,
            -(u0 * f) + u2 * c - u3 * b,
            u0 * e - u1 * c + u3 * a,
            -(u0 * d) + u1 * b - u2 * a,
        )
    }
}

impl<T, const N: usize> Default for Vector<T, N>
where
    T: Default,
{
    #[inline]
    fn default() -> Self {
        Self::from_fn(|_| T::default())
    }
}

impl<T, const N: usize> From<[T; N]> for Vector<T, N> {
    #[inline]
    fn from(value: [T; N]) -> Self {
        Self(value)
    }
}

impl<T, const N: usize> From<Vector<T, N>> for [T; N] {
    #[inline]
    fn from(value: Vector<T, N>) -> Self {
        value.0
    }
}

impl<T, const N: usize> fmt::Debug for Vector<T, N>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut tup = f.debug_tuple("");
        for elem in &self.0 {
            tup.field(elem);
        }
        tup.finish()
    }
}

/// Formats the vector as a brace-delimited list, eg. `{1,2,3}`.
///
/// The output can be parsed back with [`str::parse`].
impl<T, const N: usize> fmt::Display for Vector<T, N>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, elem) in self.0.iter().enumerate() {
            if i != 0 {
                f.write_str(",")?;
            }
            elem.fmt(f)?;
        }
        f.write_str("}")
    }
}

impl<T, const N: usize> AsRef<[T]> for Vector<T, N> {
    #[inline]
    fn as_ref(&self) -> &[T] {
        &self.0
    }
}

impl<T, const N: usize> AsMut<[T]> for Vector<T, N> {
    #[inline]
    fn as_mut(&mut self) -> &mut [T] {
        &mut self.0
    }
}

/// Constructs a [`Vec2`] from its two elements.
#[inline]
pub const fn vec2<T>(x: T, y: T) -> Vec2<T> {
    Vector([x, y])
}

/// Constructs a [`Vec3`] from its three elements.
#[inline]
pub const fn vec3<T>(x: T, y: T, z: T) -> Vec3<T> {
    Vector([x, y, z])
}

/// Constructs a [`Vec4`] from its four elements.
#[inline]
pub const fn vec4<T>(x: T, y: T, z: T, w: T) -> Vec4<T> {
    Vector([x, y, z, w])
}
