//! Approximate equality.
//!
//! `==` on the types in this crate is always exact. [`ApproxEq::equivalent`] is the tolerance
//! policy used everywhere else: floats must be at most [`EQUIVALENCE_UNITS`] epsilons apart when
//! either of them is smaller than 1 in magnitude, and at most [`EQUIVALENCE_UNITS`] representable
//! values apart otherwise. Results that accumulate more rounding error than that can be checked
//! against an explicit absolute or relative tolerance instead.

mod impls;

use std::{fmt, panic::Location};

/// How far apart two [equivalent][ApproxEq::equivalent] floats may be, in epsilons near zero and
/// in representable values elsewhere.
pub const EQUIVALENCE_UNITS: u32 = 8;

/// Types that can be compared for *approximate equality*.
///
/// Compound types compare element by element, and are approximately equal if all of their
/// elements are.
pub trait ApproxEq<Rhs: ?Sized = Self> {
    /// Scalar type of explicit tolerances. [`f32`] or [`f64`] for float-based types, the integer
    /// type itself for integers.
    type Tolerance: Copy;

    /// Checks whether `self` and `other` are *equivalent*.
    ///
    /// `NaN` is never equivalent to anything, including itself. Integers are only equivalent when
    /// they are equal.
    ///
    /// # Examples
    ///
    /// ```
    /// # use numerics::*;
    /// assert!(0.1f32.equivalent(&0.1000000001));
    /// assert!(!0.1f64.equivalent(&0.1000000001));
    /// assert!(1e20f64.equivalent(&(1e20 + 1e5)));
    /// assert!(!f32::NAN.equivalent(&f32::NAN));
    /// ```
    fn equivalent(&self, other: &Rhs) -> bool;

    /// Checks whether the values differ by at most `tolerance`.
    fn abs_diff_eq(&self, other: &Rhs, tolerance: Self::Tolerance) -> bool;

    /// Checks whether the values differ by at most `tolerance` times the larger magnitude.
    fn rel_diff_eq(&self, other: &Rhs, tolerance: Self::Tolerance) -> bool;
}

#[derive(Clone, Copy)]
enum Comparison<T> {
    Equivalent,
    Absolute(T),
    Relative(T),
}

impl<T> Comparison<T> {
    fn describe(&self) -> &'static str {
        match self {
            Comparison::Equivalent => "equivalent",
            Comparison::Absolute(_) => "within the absolute tolerance",
            Comparison::Relative(_) => "within the relative tolerance",
        }
    }
}

/// An approximate (in)equality check that runs when dropped.
///
/// Created by [`assert_approx_eq!`][crate::assert_approx_eq] and
/// [`assert_approx_ne!`][crate::assert_approx_ne]. The operands are compared with
/// [`ApproxEq::equivalent`] unless [`Assertion::abs`] or [`Assertion::rel`] selects an explicit
/// tolerance; the last one called wins.
pub struct Assertion<'a, T>
where
    T: ApproxEq + fmt::Debug,
{
    left: &'a T,
    right: &'a T,
    expect_equal: bool,
    comparison: Comparison<T::Tolerance>,
    location: &'static Location<'static>,
    message: Option<fmt::Arguments<'a>>,
}

impl<'a, T> Assertion<'a, T>
where
    T: ApproxEq + fmt::Debug,
{
    #[doc(hidden)]
    #[track_caller]
    pub fn new(
        left: &'a T,
        right: &'a T,
        expect_equal: bool,
        message: Option<fmt::Arguments<'a>>,
    ) -> Self {
        Self {
            left,
            right,
            expect_equal,
            comparison: Comparison::Equivalent,
            location: Location::caller(),
            message,
        }
    }

    /// Compares with [`ApproxEq::abs_diff_eq`] instead.
    ///
    /// Suited to values near zero, where a relative tolerance shrinks to nothing.
    pub fn abs(&mut self, tolerance: T::Tolerance) -> &mut Self {
        self.comparison = Comparison::Absolute(tolerance);
        self
    }

    /// Compares with [`ApproxEq::rel_diff_eq`] instead.
    pub fn rel(&mut self, tolerance: T::Tolerance) -> &mut Self {
        self.comparison = Comparison::Relative(tolerance);
        self
    }

    fn holds(&self) -> bool {
        let equal = match self.comparison {
            Comparison::Equivalent => self.left.equivalent(self.right),
            Comparison::Absolute(tolerance) => self.left.abs_diff_eq(self.right, tolerance),
            Comparison::Relative(tolerance) => self.left.rel_diff_eq(self.right, tolerance),
        };
        equal == self.expect_equal
    }
}

impl<'a, T> Drop for Assertion<'a, T>
where
    T: ApproxEq + fmt::Debug,
{
    // `#[track_caller]` does not apply to destructors, so the location is captured in `new`.
    fn drop(&mut self) {
        if !self.holds() {
            failed(
                self.left,
                self.right,
                self.expect_equal,
                self.comparison.describe(),
                self.location,
                self.message,
            );
        }
    }
}

fn failed(
    left: &dyn fmt::Debug,
    right: &dyn fmt::Debug,
    expect_equal: bool,
    relation: &str,
    location: &Location<'_>,
    message: Option<fmt::Arguments<'_>>,
) -> ! {
    let negation = if expect_equal { "" } else { "not " };
    let message = match message {
        Some(args) => format!(": {args}"),
        None => String::new(),
    };
    panic!(
        "expected values {negation}to be {relation} at {location}{message}\n  left: {left:?}\n \
         right: {right:?}"
    );
}

/// Asserts that two expressions are approximately equal (using [`ApproxEq`]).
///
/// Works like [`assert_eq!`], but returns an [`Assertion`] that can switch from
/// [`ApproxEq::equivalent`] to an explicit tolerance.
///
/// # Examples
///
/// ```
/// # use numerics::*;
/// let one = (0..10).fold(0.0, |acc, _| acc + 0.1);
/// assert_approx_eq!(one, 1.0);
///
/// assert_approx_eq!(100.0, 99.0).abs(1.0);
/// assert_approx_eq!(100.0, 99.0).rel(0.01);
/// ```
///
/// [`Assertion`]: crate::approx::Assertion
#[macro_export]
macro_rules! assert_approx_eq {
    ($lhs:expr, $rhs:expr $(,)?) => {
        $crate::approx::Assertion::new(&$lhs, &$rhs, true, ::core::option::Option::None)
    };
    ($lhs:expr, $rhs:expr, $($arg:tt)+) => {
        $crate::approx::Assertion::new(
            &$lhs,
            &$rhs,
            true,
            ::core::option::Option::Some(::core::format_args!($($arg)+)),
        )
    };
}

/// Asserts that two expressions are *not* approximately equal (using [`ApproxEq`]).
///
/// ```
/// # use numerics::*;
/// assert_approx_ne!(1.0, 1.1);
/// assert_approx_ne!(100.0, 99.0).abs(0.5);
/// ```
#[macro_export]
macro_rules! assert_approx_ne {
    ($lhs:expr, $rhs:expr $(,)?) => {
        $crate::approx::Assertion::new(&$lhs, &$rhs, false, ::core::option::Option::None)
    };
    ($lhs:expr, $rhs:expr, $($arg:tt)+) => {
        $crate::approx::Assertion::new(
            &$lhs,
            &$rhs,
            false,
            ::core::option::Option::Some(::core::format_args!($($arg)+)),
        )
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[should_panic(expected = "expected values not to be equivalent")]
    fn fail_ne() {
        assert_approx_ne!(1.0, 1.0);
    }

    #[test]
    #[should_panic(expected = "expected values to be equivalent")]
    fn fail_eq() {
        assert_approx_eq!(1.0, 2.0);
    }

    #[test]
    #[should_panic(expected = "to be within the absolute tolerance")]
    fn fail_abs() {
        assert_approx_eq!(1.0, 2.0).abs(0.5);
    }

    #[test]
    #[should_panic(expected = "my message")]
    fn assertion_message() {
        assert_approx_eq!(1.0, 2.0, "my message");
    }

    #[test]
    fn last_tolerance_wins() {
        assert_approx_eq!(1.0, 1.5).rel(0.01).abs(1.0);
        assert_approx_ne!(1.0, 1.5).abs(1.0).rel(0.01);
    }

    #[test]
    fn rel() {
        assert_approx_eq!(1.0, 1.001).rel(0.01);
        assert_approx_eq!(1.0, -1.0).rel(2.0);
        assert_approx_eq!(0.0, 0.00001).rel(1.0);
        assert_approx_ne!(0.0, 0.00001).rel(0.5);
    }

    #[test]
    fn precision() {
        // Single precision is accurate to about 7 places, double precision to more than that.
        assert!(0.1f32.equivalent(&0.1000000001));
        assert!(!0.1f64.equivalent(&0.1000000001));
    }

    #[test]
    fn similar_small_numbers() {
        assert!(0.000001f32.equivalent(&0.0000011));
        assert!(0.0f32.equivalent(&-4.37114e-08));
        assert!(!1.0f64.equivalent(&1.1));
        assert!(0.0f64.equivalent(&-0.0));
        assert!(1.0f64.equivalent(&1.0));
    }

    #[test]
    fn scales_with_magnitude() {
        let big = 1.0e6f32;
        let next = f32::from_bits(big.to_bits() + EQUIVALENCE_UNITS);
        assert!(big.equivalent(&next));
        let far = f32::from_bits(big.to_bits() + EQUIVALENCE_UNITS + 1);
        assert!(!big.equivalent(&far));

        // Below magnitude 1, the tolerance is absolute.
        assert!(0.5f32.equivalent(&(0.5 + 8.0 * f32::EPSILON)));
        assert!(!0.5f32.equivalent(&(0.5 + 16.0 * f32::EPSILON)));
    }

    #[test]
    fn symmetric() {
        let values = [0.0f64, 0.3, 1.0, 1.0 + 1e-15, -2.5, 1e10, 1e10 + 1e-5];
        for a in values {
            assert!(a.equivalent(&a));
            for b in values {
                assert_eq!(a.equivalent(&b), b.equivalent(&a), "{a} vs {b}");
            }
        }
    }

    #[test]
    fn integers_are_exact() {
        assert!(5i32.equivalent(&5));
        assert!(!5i32.equivalent(&6));
        assert_approx_eq!(3u8, 3u8);
        assert_approx_ne!(3usize, 4usize);
        assert_approx_eq!(3usize, 5usize).abs(2);
        assert_approx_eq!(-10i32, -11i32).rel(1);
    }

    #[test]
    fn negative() {
        assert_approx_ne!(1.0, -1.0);
        assert_approx_ne!(1.0, -1.0).abs(1.0);
        assert_approx_eq!(1.0, -1.0).abs(2.0);
        assert_approx_eq!(-1.0, -1.0).abs(0.0);
        assert_approx_eq!(-1.0, -1.0).rel(0.0);
    }

    #[test]
    fn nan() {
        assert_approx_ne!(f32::NAN, f32::NAN);
        assert_approx_ne!(f32::NAN, f32::NAN).abs(1.0);
        assert_approx_ne!(f32::NAN, f32::NAN).rel(1.0);
        assert_approx_ne!(f64::NAN, 0.0);
        assert_approx_ne!(f64::NAN, 0.0).abs(1.0);
    }

    #[test]
    fn inf() {
        assert_approx_eq!(f32::INFINITY, f32::INFINITY);
        assert_approx_eq!(f32::INFINITY, f32::INFINITY).abs(0.0);
        assert_approx_ne!(f32::INFINITY, f32::NEG_INFINITY);
        assert_approx_ne!(f32::INFINITY, f32::MAX).abs(10000.0);
        assert_approx_ne!(f64::MAX, f64::INFINITY).rel(10000.0);
    }
}
