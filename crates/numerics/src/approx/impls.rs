use crate::integer::FloatBits;

use super::{ApproxEq, EQUIVALENCE_UNITS};

macro_rules! float_impls {
    ($($float:ident),+) => {
        $(
            impl ApproxEq for $float {
                type Tolerance = Self;

                fn equivalent(&self, other: &Self) -> bool {
                    if self.is_nan() || other.is_nan() {
                        return false;
                    }
                    if self == other {
                        return true;
                    }

                    if self.abs() < 1.0 || other.abs() < 1.0 {
                        (self - other).abs() <= EQUIVALENCE_UNITS as $float * $float::EPSILON
                    } else {
                        $float::units_between(*self, *other) <= EQUIVALENCE_UNITS.into()
                    }
                }

                fn abs_diff_eq(&self, other: &Self, tolerance: Self) -> bool {
                    if !self.is_finite() || !other.is_finite() {
                        // Ensures that `inf == inf`, `-inf == -inf` and `inf != -inf`.
                        return self == other;
                    }

                    (self - other).abs() <= tolerance
                }

                fn rel_diff_eq(&self, other: &Self, tolerance: Self) -> bool {
                    if !self.is_finite() || !other.is_finite() {
                        return self == other;
                    }

                    let largest = Self::max(self.abs(), other.abs());
                    (self - other).abs() <= largest * tolerance
                }
            }
        )+
    };
}
float_impls!(f32, f64);

// Integers have no rounding error, so every comparison is done on the exact difference.
macro_rules! int_impls {
    ($($int:ty),+) => {
        $(
            impl ApproxEq for $int {
                type Tolerance = Self;

                fn abs_diff_eq(&self, other: &Self, abs_tolerance: Self::Tolerance) -> bool {
                    (*self as i128 - *other as i128).abs() <= abs_tolerance as i128
                }

                fn rel_diff_eq(&self, other: &Self, rel_tolerance: Self::Tolerance) -> bool {
                    let largest = (*self as i128).abs().max((*other as i128).abs());
                    (*self as i128 - *other as i128).abs()
                        <= largest.saturating_mul(rel_tolerance as i128)
                }

                fn equivalent(&self, other: &Self) -> bool {
                    self == other
                }
            }
        )+
    };
}
int_impls!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize);

impl<'a, T: ApproxEq<U> + ?Sized, U: ?Sized> ApproxEq<U> for &'a T {
    type Tolerance = T::Tolerance;

    fn abs_diff_eq(&self, other: &U, abs_tolerance: Self::Tolerance) -> bool {
        T::abs_diff_eq(self, other, abs_tolerance)
    }

    fn rel_diff_eq(&self, other: &U, rel_tolerance: Self::Tolerance) -> bool {
        T::rel_diff_eq(self, other, rel_tolerance)
    }

    fn equivalent(&self, other: &U) -> bool {
        T::equivalent(self, other)
    }
}

impl<T: ApproxEq<U>, U> ApproxEq<[U]> for [T] {
    type Tolerance = T::Tolerance;

    fn abs_diff_eq(&self, other: &[U], abs_tolerance: Self::Tolerance) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .zip(other)
                .all(|(a, b)| T::abs_diff_eq(a, b, abs_tolerance))
    }

    fn rel_diff_eq(&self, other: &[U], rel_tolerance: Self::Tolerance) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .zip(other)
                .all(|(a, b)| T::rel_diff_eq(a, b, rel_tolerance))
    }

    fn equivalent(&self, other: &[U]) -> bool {
        self.len() == other.len() && self.iter().zip(other).all(|(a, b)| a.equivalent(b))
    }
}

impl<T: ApproxEq<U>, U, const N: usize> ApproxEq<[U; N]> for [T; N] {
    type Tolerance = T::Tolerance;

    fn abs_diff_eq(&self, other: &[U; N], abs_tolerance: Self::Tolerance) -> bool {
        self.as_slice().abs_diff_eq(other.as_slice(), abs_tolerance)
    }

    fn rel_diff_eq(&self, other: &[U; N], rel_tolerance: Self::Tolerance) -> bool {
        self.as_slice().rel_diff_eq(other.as_slice(), rel_tolerance)
    }

    fn equivalent(&self, other: &[U; N]) -> bool {
        self.as_slice().equivalent(other.as_slice())
    }
}
