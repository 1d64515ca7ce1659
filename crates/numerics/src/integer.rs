//! Integer type selection by bit size.

use std::mem;

/// Marker type for integers that are `N` bytes wide.
///
/// Implements [`IntegerSize`] to select the signed and unsigned integer type of that width.
///
/// ```
/// # use numerics::*;
/// let bits: <Bytes<4> as IntegerSize>::Unsigned = 1.5f32.to_bits();
/// assert_eq!(bits, 0x3fc0_0000);
/// ```
pub struct Bytes<const N: usize>;

/// Maps a byte width to the primitive integer types of that width.
pub trait IntegerSize {
    type Signed: Copy + Ord;
    type Unsigned: Copy + Ord;
}

impl IntegerSize for Bytes<1> {
    type Signed = i8;
    type Unsigned = u8;
}

impl IntegerSize for Bytes<2> {
    type Signed = i16;
    type Unsigned = u16;
}

impl IntegerSize for Bytes<4> {
    type Signed = i32;
    type Unsigned = u32;
}

impl IntegerSize for Bytes<8> {
    type Signed = i64;
    type Unsigned = u64;
}

impl IntegerSize for Bytes<16> {
    type Signed = i128;
    type Unsigned = u128;
}

/// Floating-point types whose bit patterns can be mapped onto a monotonic integer number line.
///
/// IEEE 754 floats of the same sign are ordered like their bit patterns interpreted as integers.
/// Negative floats are ordered in reverse, so [`FloatBits::to_ordered`] flips them around zero.
/// The resulting integers increase by exactly one between adjacent representable floats, which
/// makes the distance between two floats in *units in the last place* a plain subtraction.
pub trait FloatBits: Copy {
    /// Signed integer with the same width as `Self`.
    type Signed: Copy + Ord;
    /// Unsigned integer with the same width as `Self`.
    type Unsigned: Copy + Ord;

    /// Reinterprets `self` as an integer on the monotonic number line.
    ///
    /// `+0.0` and `-0.0` both map to `0`.
    fn to_ordered(self) -> Self::Signed;

    /// Inverse of [`FloatBits::to_ordered`].
    fn from_ordered(ordered: Self::Signed) -> Self;

    /// Returns the number of representable values between `a` and `b`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use numerics::*;
    /// assert_eq!(f32::units_between(1.0, 1.0 + f32::EPSILON), 1);
    /// assert_eq!(f64::units_between(-0.0, 0.0), 0);
    /// ```
    fn units_between(a: Self, b: Self) -> Self::Unsigned;
}

macro_rules! float_bits {
    ($($float:ty => $signed:ty, $unsigned:ty);+) => {
        $(
            impl FloatBits for $float {
                type Signed = <Bytes<{ mem::size_of::<$float>() }> as IntegerSize>::Signed;
                type Unsigned = <Bytes<{ mem::size_of::<$float>() }> as IntegerSize>::Unsigned;

                #[inline]
                fn to_ordered(self) -> Self::Signed {
                    let bits = self.to_bits() as $signed;
                    if bits < 0 {
                        <$signed>::MIN - bits
                    } else {
                        bits
                    }
                }

                #[inline]
                fn from_ordered(ordered: Self::Signed) -> Self {
                    let bits = if ordered < 0 {
                        <$signed>::MIN - ordered
                    } else {
                        ordered
                    };
                    <$float>::from_bits(bits as $unsigned)
                }

                #[inline]
                fn units_between(a: Self, b: Self) -> Self::Unsigned {
                    a.to_ordered().abs_diff(b.to_ordered())
                }
            }
        )+
    };
}
float_bits!(f32 => i32, u32; f64 => i64, u64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_is_zero() {
        assert_eq!(0.0f32.to_ordered(), 0);
        assert_eq!((-0.0f32).to_ordered(), 0);
        assert_eq!(0.0f64.to_ordered(), 0);
        assert_eq!((-0.0f64).to_ordered(), 0);
    }

    #[test]
    fn lossless() {
        for value in [1.5f32, -1.5, f32::MAX, f32::MIN_POSITIVE, -f32::MIN_POSITIVE] {
            assert_eq!(f32::from_ordered(value.to_ordered()), value);
        }
        for value in [1.5f64, -1.5, f64::MAX, -1e-300] {
            assert_eq!(f64::from_ordered(value.to_ordered()), value);
        }
    }

    #[test]
    fn monotonic() {
        let values = [-10.0f32, -1.0, -f32::MIN_POSITIVE, 0.0, 1e-30, 1.0, 1.5, 1e30];
        for pair in values.windows(2) {
            assert!(pair[0].to_ordered() < pair[1].to_ordered(), "{pair:?}");
        }
    }

    #[test]
    fn units_straddle_zero() {
        let tiny = f32::from_bits(1);
        assert_eq!(f32::units_between(-tiny, tiny), 2);
        assert_eq!(f32::units_between(tiny, -tiny), 2);
    }
}
