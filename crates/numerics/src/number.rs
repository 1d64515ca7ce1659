//! Scalar operations shared by integer and floating-point element types.

use crate::{
    traits::{MinMax, Sqrt},
    Number, Radians, Real, Trig,
};

/// Signed numeric types supporting the scalar operations used throughout the crate.
///
/// Implemented for the signed integer types and for [`f32`] and [`f64`]. Integer types have no
/// fractional part, so [`Scalar::truncate`] is the identity and [`Scalar::fraction`] is always 0.
pub trait Scalar: Number + MinMax + PartialOrd {
    /// Returns the absolute value of `self`.
    fn absolute(self) -> Self;

    /// Removes the fractional part of `self`.
    ///
    /// Rounds toward negative infinity, or toward positive infinity if `up` is `true`.
    ///
    /// ```
    /// # use numerics::*;
    /// assert_eq!(10.1f64.truncate(false), 10.0);
    /// assert_eq!(10.1f64.truncate(true), 11.0);
    /// assert_eq!(12i32.truncate(true), 12);
    /// ```
    fn truncate(self, up: bool) -> Self;

    /// Computes the remainder of dividing `self` by `modulus`.
    ///
    /// The result has the same sign as `self`. Use [`Scalar::wrap`] to always get a non-negative
    /// result.
    fn modulo(self, modulus: Self) -> Self;

    /// Wraps `self` into the range `[0, modulus)`.
    ///
    /// ```
    /// # use numerics::*;
    /// assert_eq!((-55i32).wrap(10), 5);
    /// assert_eq!(55i32.wrap(10), 5);
    /// assert_eq!((-50i32).wrap(10), 0);
    /// ```
    fn wrap(self, modulus: Self) -> Self {
        let remainder = self.modulo(modulus);
        if remainder >= Self::ZERO {
            return remainder;
        }

        // For floats, a tiny negative remainder can round up to `modulus` itself.
        let wrapped = remainder + modulus;
        if wrapped < modulus {
            wrapped
        } else {
            Self::ZERO
        }
    }

    /// Returns the fractional part of `self`, ie. `self - floor(self)`.
    fn fraction(self) -> Self;

    /// Clamps `self` to the unit range `[0, 1]`.
    fn saturate(self) -> Self {
        self.clamp(Self::ZERO, Self::ONE)
    }
}

macro_rules! signed_int_scalar {
    ($($int:ty),+) => {
        $(
            impl Scalar for $int {
                #[inline]
                fn absolute(self) -> Self {
                    self.abs()
                }

                #[inline]
                fn truncate(self, _up: bool) -> Self {
                    self
                }

                #[inline]
                fn modulo(self, modulus: Self) -> Self {
                    self % modulus
                }

                #[inline]
                fn fraction(self) -> Self {
                    0
                }
            }
        )+
    };
}
signed_int_scalar!(i8, i16, i32, i64, i128, isize);

macro_rules! float_scalar {
    ($($float:ty),+) => {
        $(
            impl Scalar for $float {
                #[inline]
                fn absolute(self) -> Self {
                    self.abs()
                }

                #[inline]
                fn truncate(self, up: bool) -> Self {
                    if up {
                        self.ceil()
                    } else {
                        self.floor()
                    }
                }

                #[inline]
                fn modulo(self, modulus: Self) -> Self {
                    // `%` on floats has the semantics of C's `fmod`.
                    self % modulus
                }

                #[inline]
                fn fraction(self) -> Self {
                    self - self.floor()
                }
            }
        )+
    };
}
float_scalar!(f32, f64);

/// Raising a value to a power of type `E`.
///
/// Integer bases support unsigned exponents and are computed by repeated squaring. Floating-point
/// bases support [`u32`] and [`i32`] exponents (integer powers) and exponents of their own type.
///
/// ```
/// # use numerics::*;
/// assert_eq!(5i32.raise(3u32), 125);
/// assert_eq!((-5i32).raise(3u32), -125);
/// assert_eq!(2.0f32.raise(-1i32), 0.5);
/// ```
pub trait Raise<E> {
    fn raise(self, exponent: E) -> Self;
}

macro_rules! int_raise {
    ($($int:ty),+) => {
        $(
            int_raise!(@exponents $int; u8, u16, u32, u64);
        )+
    };
    (@exponents $int:ty; $($exp:ty),+) => {
        $(
            impl Raise<$exp> for $int {
                fn raise(self, exponent: $exp) -> Self {
                    let mut base = self;
                    let mut exponent = exponent;
                    let mut result: $int = 1;
                    loop {
                        if exponent & 1 == 1 {
                            result *= base;
                        }
                        exponent >>= 1;
                        if exponent == 0 {
                            break;
                        }
                        base *= base;
                    }
                    result
                }
            }
        )+
    };
}
int_raise!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize);

macro_rules! float_raise {
    ($($float:ty),+) => {
        $(
            impl Raise<i32> for $float {
                #[inline]
                fn raise(self, exponent: i32) -> Self {
                    self.powi(exponent)
                }
            }

            impl Raise<u32> for $float {
                #[inline]
                fn raise(self, exponent: u32) -> Self {
                    match i32::try_from(exponent) {
                        Ok(exponent) => self.powi(exponent),
                        Err(_) => self.powf(exponent as $float),
                    }
                }
            }

            impl Raise<$float> for $float {
                #[inline]
                fn raise(self, exponent: $float) -> Self {
                    self.powf(exponent)
                }
            }
        )+
    };
}
float_raise!(f32, f64);

/// Conversion to the floating-point type used for operations with non-integral results.
pub trait ToReal: Copy {
    /// The floating-point type `Self` converts to.
    type Real: Real;

    fn to_real(self) -> Self::Real;

    /// Computes the square root of `self`, converting to [`ToReal::Real`] first.
    ///
    /// ```
    /// # use numerics::*;
    /// assert_eq!(1296i32.square_root(), 36.0);
    /// assert_eq!(2.25f64.square_root(), 1.5);
    /// ```
    fn square_root(self) -> Self::Real {
        self.to_real().sqrt()
    }
}

macro_rules! to_real {
    ($($src:ty => $real:ty),+ $(,)?) => {
        $(
            impl ToReal for $src {
                type Real = $real;

                #[inline]
                fn to_real(self) -> $real {
                    self as $real
                }
            }
        )+
    };
}
to_real!(
    u8 => f32, u16 => f32, u32 => f32, i8 => f32, i16 => f32, i32 => f32,
    u64 => f64, i64 => f64, usize => f64, isize => f64,
    f32 => f32, f64 => f64,
);

/// Computes the arcsine of `value`.
#[inline]
pub fn asin<T: Real>(value: T) -> Radians<T> {
    Radians(Trig::asin(value))
}

/// Computes the arccosine of `value`.
///
/// ```
/// # use numerics::*;
/// assert!(acos(0.0f32).equivalent(&Radians::<f32>::R90));
/// ```
#[inline]
pub fn acos<T: Real>(value: T) -> Radians<T> {
    Radians(Trig::acos(value))
}

/// Computes the arctangent of `value`.
#[inline]
pub fn atan<T: Real>(value: T) -> Radians<T> {
    Radians(Trig::atan(value))
}

#[cfg(test)]
mod tests {
    use crate::assert_approx_eq;

    use super::*;

    #[test]
    fn remainder() {
        assert_eq!(10 % 3, 1);
        assert_eq!(10i32.modulo(4), 2);
        assert_approx_eq!(10.2f64.modulo(2.4), 0.6);
        assert_approx_eq!(10.0f64.modulo(2.4), 0.4);
    }

    #[test]
    fn clamp() {
        assert_eq!((-10.0f32).saturate(), 0.0);
        assert_eq!(10.0f32.saturate(), 1.0);
        assert_eq!(0.5f32.saturate(), 0.5);
        assert_eq!((-10i32).saturate(), 0);

        assert_eq!(MinMax::clamp(1, 5, 20), 5);
        assert_eq!(MinMax::clamp(25, 5, 20), 20);
        assert_eq!(MinMax::clamp(15, 5, 20), 15);
    }

    #[test]
    fn truncate() {
        assert_eq!(10.1f64.truncate(false), 10.0);
        assert_eq!(10.1f64.truncate(true), 11.0);
        assert_eq!((-0.5f32).truncate(false), -1.0);
        assert_eq!(12i32.truncate(false), 12);
        assert_eq!(12i32.truncate(true), 12);
    }

    #[test]
    fn wrap() {
        assert_eq!((-55i32).wrap(10), 5);
        assert_eq!(55i32.wrap(10), 5);
        assert_eq!((-50i32).wrap(10), 0);
        assert_approx_eq!((-0.25f32).wrap(1.0), 0.75);
    }

    #[test]
    fn wrap_tiny_negative() {
        assert_eq!((-1e-20f64).wrap(10.0), 0.0);
        assert_eq!((-1e-9f32).wrap(1.0), 0.0);
        assert_eq!((-f32::MIN_POSITIVE).wrap(3.0), 0.0);
        assert!((-1e-6f32).wrap(1.0) < 1.0);
    }

    #[test]
    fn fraction() {
        assert_eq!(1.5f32.fraction(), 0.5);
        assert_eq!((-1.25f64).fraction(), 0.75);
        assert_eq!(7i32.fraction(), 0);
    }

    #[test]
    fn raise() {
        assert_eq!(5i32.raise(3u32), 125);
        assert_eq!((-5i32).raise(3u32), -125);
        assert_eq!(5i32.raise(9u32), 1953125);
        assert_eq!(5i64.raise(0u8), 1);
        assert_eq!(2u8.raise(7u8), 128);
        assert_eq!(36i32.raise(2u32), 1296);
        assert_approx_eq!(5.0f64.raise(9u32), 1953125.0);
        assert_approx_eq!(4.0f32.raise(0.5f32), 2.0);
    }

    #[test]
    fn square_root() {
        assert_eq!(1296i32.square_root(), 36.0);
        assert_eq!(1296i64.square_root(), 36.0f64);
    }

    #[test]
    fn inverse_trig() {
        assert_approx_eq!(asin(1.0f64).0, std::f64::consts::FRAC_PI_2);
        assert_approx_eq!(atan(1.0f32).0, std::f32::consts::FRAC_PI_4);
        assert_approx_eq!(acos(1.0f32).0, 0.0);
    }
}
