use std::ops;

use crate::{approx::ApproxEq, number::Scalar};

/// Types that support the trigonometric functions.
pub trait Trig {
    /// Computes the sine of the angle `self` (in radians).
    fn sin(self) -> Self;
    /// Computes the cosine of the angle `self` (in radians).
    fn cos(self) -> Self;
    /// Computes the tangent of the angle `self` (in radians).
    fn tan(self) -> Self;
    fn asin(self) -> Self;
    fn acos(self) -> Self;
    fn atan(self) -> Self;
    fn atan2(self, other: Self) -> Self;
}

/// Types that support computing their square root.
pub trait Sqrt {
    fn sqrt(self) -> Self;
}

/// Types that support a `min` and `max` operation.
///
/// [`f32`] and [`f64`] implement this trait in terms of the [`f32::min`] and [`f32::max`] functions
/// ([`f64::min`] and [`f64::max`] respectively). Built-in integer types implement it in terms of
/// [`Ord::min`] and [`Ord::max`].
pub trait MinMax: Sized {
    fn min(self, other: Self) -> Self;
    fn max(self, other: Self) -> Self;

    /// Restricts `self` to the range `lower..=upper`.
    ///
    /// ```
    /// # use numerics::*;
    /// assert_eq!(MinMax::clamp(1, 5, 20), 5);
    /// assert_eq!(MinMax::clamp(25, 5, 20), 20);
    /// assert_eq!(MinMax::clamp(15, 5, 20), 15);
    /// ```
    fn clamp(self, lower: Self, upper: Self) -> Self {
        self.max(lower).min(upper)
    }
}

/// Types that have a "zero" value (an additive identity).
pub trait Zero {
    /// The *0* value of this type.
    const ZERO: Self;
}

/// Types that have a "one" value (a multiplicative identity).
pub trait One {
    /// The *1* value of this type.
    const ONE: Self;
}

/// Numeric types closed under `+`, `-`, `*` and `/`.
///
/// Unlike [`Number`], this includes the unsigned integer types, so sizes and indices stored in a
/// [`Vector`][crate::Vector] can still be summed, multiplied and dotted.
pub trait Arithmetic:
    Zero
    + One
    + ops::Add<Output = Self>
    + ops::Sub<Output = Self>
    + ops::Mul<Output = Self>
    + ops::Div<Output = Self>
    + PartialEq
    + Copy
{
}
impl<T> Arithmetic for T where
    T: Zero
        + One
        + ops::Add<Output = Self>
        + ops::Sub<Output = Self>
        + ops::Mul<Output = Self>
        + ops::Div<Output = Self>
        + PartialEq
        + Copy
{
}

/// Signed numeric types: [`Arithmetic`] plus negation.
pub trait Number: Arithmetic + ops::Neg<Output = Self> {}
impl<T> Number for T where T: Arithmetic + ops::Neg<Output = Self> {}

/// Floating-point element types.
///
/// Most geometric operations (lengths, angles, rotations, projections) are only available for
/// vectors and matrices whose element type implements this trait.
pub trait Real:
    Number
    + Trig
    + Sqrt
    + MinMax
    + Scalar
    + PartialOrd
    + ApproxEq<Tolerance = Self>
{
    /// Archimedes' constant (π).
    const PI: Self;
    /// The difference between 1.0 and the next larger representable number.
    const EPSILON: Self;

    /// Converts an [`f64`] to this type, rounding if necessary.
    fn from_f64(value: f64) -> Self;
    fn powf(self, exponent: Self) -> Self;
    fn powi(self, exponent: i32) -> Self;
    fn is_nan(self) -> bool;

    /// Returns `2` without requiring a conversion.
    #[inline]
    fn two() -> Self {
        Self::ONE + Self::ONE
    }
}

macro_rules! int_impls {
    ($($types:ty),+) => {
        $(
            impl Zero for $types {
                const ZERO: Self = 0;
            }

            impl One for $types {
                const ONE: Self = 1;
            }

            impl MinMax for $types {
                fn min(self, other: Self) -> Self {
                    Ord::min(self, other)
                }

                fn max(self, other: Self) -> Self {
                    Ord::max(self, other)
                }
            }
        )+
    };
}
int_impls!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

macro_rules! float_impls {
    ($($types:ident),+) => {
        $(
            impl Zero for $types {
                const ZERO: Self = 0.0;
            }

            impl One for $types {
                const ONE: Self = 1.0;
            }

            impl MinMax for $types {
                fn min(self, other: Self) -> Self {
                    self.min(other)
                }

                fn max(self, other: Self) -> Self {
                    self.max(other)
                }
            }

            impl Trig for $types {
                fn sin(self) -> Self {
                    self.sin()
                }

                fn cos(self) -> Self {
                    self.cos()
                }

                fn tan(self) -> Self {
                    self.tan()
                }

                fn asin(self) -> Self {
                    self.asin()
                }

                fn acos(self) -> Self {
                    self.acos()
                }

                fn atan(self) -> Self {
                    self.atan()
                }

                fn atan2(self, other: Self) -> Self {
                    self.atan2(other)
                }
            }

            impl Sqrt for $types {
                fn sqrt(self) -> Self {
                    self.sqrt()
                }
            }

            impl Real for $types {
                const PI: Self = std::$types::consts::PI;
                const EPSILON: Self = $types::EPSILON;

                #[inline]
                fn from_f64(value: f64) -> Self {
                    value as $types
                }

                fn powf(self, exponent: Self) -> Self {
                    self.powf(exponent)
                }

                fn powi(self, exponent: i32) -> Self {
                    self.powi(exponent)
                }

                fn is_nan(self) -> bool {
                    self.is_nan()
                }
            }
        )+
    };
}
float_impls!(f32, f64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constants() {
        assert_eq!(<f32 as Zero>::ZERO, 0.0);
        assert_eq!(<f64 as One>::ONE, 1.0);
        assert_eq!(<usize as One>::ONE, 1);
        assert_eq!(<f64 as Real>::two(), 2.0);
        assert_eq!(<f32 as Real>::from_f64(0.5), 0.5);
    }

    fn total<T: Arithmetic>(values: &[T]) -> T {
        values.iter().fold(T::ZERO, |acc, &v| acc + v)
    }

    #[test]
    fn unsigned_arithmetic() {
        assert_eq!(total(&[1u32, 2, 3]), 6);
        assert_eq!(total(&[7usize, 8]), 15);
        assert_eq!(total(&[-1i32, 1]), 0);
    }

    #[test]
    fn min_max() {
        assert_eq!(MinMax::min(3, -4), -4);
        assert_eq!(MinMax::max(3.0, f32::NAN), 3.0);
        assert_eq!(MinMax::clamp(-0.5f64, 0.0, 1.0), 0.0);
    }
}
