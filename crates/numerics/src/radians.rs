use std::{fmt, ops};

use crate::{approx::ApproxEq, Real, Zero};

/// An angle in radians.
///
/// Wrapping angles in a dedicated type keeps them from being confused with degrees or unitless
/// scalars. Use [`degrees`] and [`radians`] to construct one, or one of the named constants like
/// [`Radians::<f32>::R90`].
///
/// Angles wrap around, so [`ApproxEq::equivalent`] compares them by their shortest-arc difference
/// rather than by value:
///
/// ```
/// # use numerics::*;
/// let full = degrees(360.0f32);
/// assert_ne!(full, Radiansf::R0);
/// assert!(full.equivalent(&Radiansf::R0));
/// ```
#[derive(Clone, Copy, Default, PartialEq, PartialOrd, Hash)]
#[repr(transparent)]
pub struct Radians<T>(pub T);

unsafe impl<T: bytemuck::Zeroable> bytemuck::Zeroable for Radians<T> {}
unsafe impl<T: bytemuck::Pod> bytemuck::Pod for Radians<T> {}

/// An angle in radians, stored as an [`f32`].
pub type Radiansf = Radians<f32>;

/// Creates an angle from a value in radians.
#[inline]
pub const fn radians<T>(value: T) -> Radians<T> {
    Radians(value)
}

/// Creates an angle from a value in degrees.
///
/// ```
/// # use numerics::*;
/// assert_approx_eq!(degrees(90.0f64).0, std::f64::consts::FRAC_PI_2);
/// ```
#[inline]
pub fn degrees<T: Real>(value: T) -> Radians<T> {
    Radians(value * (T::PI / T::from_f64(180.0)))
}

macro_rules! named_angles {
    ($($float:ident),+) => {
        $(
            impl Radians<$float> {
                pub const R0: Self = Self(0.0);
                pub const R10: Self = Self(std::$float::consts::PI / 18.0);
                pub const R30: Self = Self(std::$float::consts::FRAC_PI_6);
                pub const R45: Self = Self(std::$float::consts::FRAC_PI_4);
                pub const R60: Self = Self(std::$float::consts::FRAC_PI_3);
                pub const R90: Self = Self(std::$float::consts::FRAC_PI_2);
                pub const R180: Self = Self(std::$float::consts::PI);
                pub const R270: Self = Self(std::$float::consts::PI * 1.5);
                pub const R360: Self = Self(std::$float::consts::TAU);
            }
        )+
    };
}
named_angles!(f32, f64);

impl<T: Real> Radians<T> {
    /// Converts this angle to degrees.
    pub fn to_degrees(self) -> T {
        self.0 * (T::from_f64(180.0) / T::PI)
    }

    #[inline]
    pub fn sin(self) -> T {
        self.0.sin()
    }

    #[inline]
    pub fn cos(self) -> T {
        self.0.cos()
    }

    #[inline]
    pub fn tan(self) -> T {
        self.0.tan()
    }

    /// Returns the signed shortest-arc rotation that takes `self` to `other`.
    ///
    /// The result lies in `[-π, π]`, so wrap-around at a full turn is accounted for.
    ///
    /// ```
    /// # use numerics::*;
    /// let offset = degrees(350.0f64).offset_to(degrees(10.0));
    /// assert_approx_eq!(offset.to_degrees(), 20.0).abs(1e-9);
    /// ```
    pub fn offset_to(self, other: Self) -> Self {
        let delta = other.0 - self.0;
        Radians(delta.sin().atan2(delta.cos()))
    }
}

impl<T: Real> ApproxEq for Radians<T> {
    type Tolerance = T;

    fn abs_diff_eq(&self, other: &Self, abs_tolerance: T) -> bool {
        self.offset_to(*other).0.abs_diff_eq(&T::ZERO, abs_tolerance)
    }

    fn rel_diff_eq(&self, other: &Self, rel_tolerance: T) -> bool {
        self.0.rel_diff_eq(&other.0, rel_tolerance)
    }

    fn equivalent(&self, other: &Self) -> bool {
        self.offset_to(*other).0.equivalent(&T::ZERO)
    }
}

impl<T: fmt::Debug> fmt::Debug for Radians<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}rad", self.0)
    }
}

impl<T: fmt::Display> fmt::Display for Radians<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}rad", self.0)
    }
}

impl<T: ops::Add<Output = T>> ops::Add for Radians<T> {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Radians(self.0 + rhs.0)
    }
}

impl<T: ops::Sub<Output = T>> ops::Sub for Radians<T> {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Radians(self.0 - rhs.0)
    }
}

impl<T: ops::Neg<Output = T>> ops::Neg for Radians<T> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Radians(-self.0)
    }
}

impl<T: ops::Mul<Output = T>> ops::Mul<T> for Radians<T> {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: T) -> Self {
        Radians(self.0 * rhs)
    }
}

impl<T: ops::Div<Output = T>> ops::Div<T> for Radians<T> {
    type Output = Self;

    #[inline]
    fn div(self, rhs: T) -> Self {
        Radians(self.0 / rhs)
    }
}

/// Dividing two angles yields their unitless ratio.
impl<T: ops::Div<Output = T>> ops::Div for Radians<T> {
    type Output = T;

    #[inline]
    fn div(self, rhs: Self) -> T {
        self.0 / rhs.0
    }
}

impl<T: ops::AddAssign> ops::AddAssign for Radians<T> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl<T: ops::SubAssign> ops::SubAssign for Radians<T> {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        self.0 -= rhs.0;
    }
}

impl<T: ops::MulAssign> ops::MulAssign<T> for Radians<T> {
    #[inline]
    fn mul_assign(&mut self, rhs: T) {
        self.0 *= rhs;
    }
}

impl<T: ops::DivAssign> ops::DivAssign<T> for Radians<T> {
    #[inline]
    fn div_assign(&mut self, rhs: T) {
        self.0 /= rhs;
    }
}

impl<T: Zero> Zero for Radians<T> {
    const ZERO: Self = Radians(T::ZERO);
}

#[cfg(test)]
mod tests {
    use crate::{assert_approx_eq, assert_approx_ne};

    use super::*;

    #[test]
    fn arithmetic() {
        assert_approx_eq!(Radiansf::R45 * 2.0, Radiansf::R90);
        assert_approx_eq!(Radiansf::R90 * 2.0, Radiansf::R180);
        assert_approx_eq!(Radiansf::R180 * 2.0, Radiansf::R360);
        assert_approx_eq!(Radiansf::R90 / 2.0, Radiansf::R45);
        assert_approx_eq!(Radiansf::R30 + Radiansf::R60, Radiansf::R90);
        assert_approx_eq!(Radiansf::R270 - Radiansf::R180, Radiansf::R90);
        assert_approx_eq!(Radiansf::R180 / Radiansf::R60, 3.0);

        let mut angle = Radiansf::R10;
        angle *= 3.0;
        angle += Radiansf::R60;
        assert_approx_eq!(angle, Radiansf::R90);
    }

    #[test]
    fn tolerances() {
        assert_approx_eq!(Radiansf::R0, Radiansf::R360).abs(1e-6);
        assert_approx_eq!(degrees(1.0f64), radians(0.0175)).abs(1e-4);
        assert_approx_ne!(degrees(1.0f64), radians(0.0175)).abs(1e-6);
        assert_approx_eq!(Radiansf::R90, Radiansf::R90 * 1.001).rel(1e-2);
    }

    #[test]
    fn constants() {
        assert_approx_eq!((Radians::<f64>::R90).0, std::f64::consts::PI / 2.0);
        assert_approx_eq!(Radians::<f64>::R90.sin(), 1.0);
        assert_approx_eq!(degrees(10.0f32), Radiansf::R10);
        assert_approx_eq!(degrees(270.0f64), Radians::<f64>::R270);
        assert_approx_eq!(Radiansf::R180.to_degrees(), 180.0);
    }

    #[test]
    fn trig() {
        assert_approx_eq!(degrees(90.0f32).cos(), 0.0);
        assert_approx_eq!(degrees(45.0f64).tan(), 1.0);
        assert_approx_eq!(radians(0.0f32).sin(), 0.0);
    }

    #[test]
    fn offset_wraps_around() {
        let a = degrees(170.0f64);
        let b = degrees(-170.0f64);
        assert_approx_eq!(a.offset_to(b).to_degrees(), 20.0).abs(1e-9);
        assert_approx_eq!(b.offset_to(a).to_degrees(), -20.0).abs(1e-9);
        assert_approx_eq!(Radiansf::R0.offset_to(Radiansf::R270), -Radiansf::R90);
    }

    #[test]
    fn equivalence_is_circular() {
        assert_approx_eq!(Radiansf::R0, Radiansf::R360);
        assert_approx_eq!(degrees(-90.0f32), Radiansf::R270);
        assert_approx_ne!(Radiansf::R0, Radiansf::R180);
        assert_approx_ne!(Radians(f32::NAN), Radians(f32::NAN));
    }
}
