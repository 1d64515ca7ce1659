use std::ops::{Mul, MulAssign};

use crate::{approx::ApproxEq, traits::Number, Quaternion, Vec3};

impl<T, U> PartialEq<Quaternion<U>> for Quaternion<T>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &Quaternion<U>) -> bool {
        self.0 == other.0
    }
}

impl<T: Eq> Eq for Quaternion<T> {}

impl<T: ApproxEq> ApproxEq for Quaternion<T> {
    type Tolerance = T::Tolerance;

    fn abs_diff_eq(&self, other: &Self, abs_tolerance: Self::Tolerance) -> bool {
        self.0.abs_diff_eq(&other.0, abs_tolerance)
    }

    fn rel_diff_eq(&self, other: &Self, rel_tolerance: Self::Tolerance) -> bool {
        self.0.rel_diff_eq(&other.0, rel_tolerance)
    }

    fn equivalent(&self, other: &Self) -> bool {
        self.0.equivalent(&other.0)
    }
}

/// Hamilton product.
///
/// When the result is used to rotate a vector, `rhs` is applied first.
impl<T: Number> Mul for Quaternion<T> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        let [x1, y1, z1, w1] = self.0.into_array();
        let [x2, y2, z2, w2] = rhs.0.into_array();

        Quaternion::new(
            (w1 * x2 + x1 * w2 + y1 * z2) - z1 * y2,
            (w1 * y2 + y1 * w2 + z1 * x2) - x1 * z2,
            (w1 * z2 + x1 * y2 + z1 * w2) - y1 * x2,
            w1 * w2 - x1 * x2 - y1 * y2 - z1 * z2,
        )
    }
}

impl<T: Number> MulAssign for Quaternion<T> {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

/// Rotates a vector.
///
/// This computes `v + 2w(q × v) + 2(q × (q × v))`, where `q` is the imaginary part of the
/// quaternion.
impl<T: Number> Mul<Vec3<T>> for Quaternion<T> {
    type Output = Vec3<T>;

    fn mul(self, v: Vec3<T>) -> Self::Output {
        let [x, y, z, w] = self.0.into_array();
        let q = Vec3::from([x, y, z]);
        let two = T::ONE + T::ONE;

        let uv = q.cross(v);
        let uuv = q.cross(uv);
        v + uv * (w * two) + uuv * two
    }
}

#[cfg(test)]
mod tests {
    use crate::{vec3, Quaternion};

    #[test]
    fn hamilton_product() {
        let i = Quaternion::new(1, 0, 0, 0);
        let j = Quaternion::new(0, 1, 0, 0);
        let k = Quaternion::new(0, 0, 1, 0);
        let minus_one = Quaternion::new(0, 0, 0, -1);

        assert_eq!(i * i, minus_one);
        assert_eq!(j * j, minus_one);
        assert_eq!(k * k, minus_one);
        assert_eq!(i * j, k);
        assert_eq!(j * i, Quaternion::new(0, 0, -1, 0));
        assert_eq!(i * j * k, minus_one);

        let mut q = i;
        q *= j;
        assert_eq!(q, k);
    }

    #[test]
    fn identity_keeps_vectors() {
        let v = vec3(3, -1, 7);
        assert_eq!(Quaternion::<i32>::IDENTITY * v, v);
    }
}
