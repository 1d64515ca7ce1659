use crate::{Mat4, Matrix, Radians, Real, Vec3};

/// A perspective projection with a depth range of `0..1`.
///
/// Points in front of the camera (at negative `z`) are mapped into the clip volume with
/// `w = -z`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PerspectiveProjection<T> {
    /// Vertical field of view.
    pub field_of_view: Radians<T>,
    /// Width divided by height.
    pub aspect_ratio: T,
    pub near: T,
    pub far: T,
}

/// Creates a [`PerspectiveProjection`].
pub fn perspective_projection<T>(
    field_of_view: Radians<T>,
    aspect_ratio: T,
    near: T,
    far: T,
) -> PerspectiveProjection<T> {
    PerspectiveProjection {
        field_of_view,
        aspect_ratio,
        near,
        far,
    }
}

impl<T: Real> From<PerspectiveProjection<T>> for Mat4<T> {
    fn from(p: PerspectiveProjection<T>) -> Self {
        let t = (p.field_of_view / T::two()).tan();

        let mut m = Matrix::ZERO;
        m[(0, 0)] = T::ONE / (p.aspect_ratio * t);
        m[(1, 1)] = T::ONE / t;
        m[(2, 2)] = p.far / (p.near - p.far);
        m[(3, 2)] = -T::ONE;
        m[(2, 3)] = -(p.far * p.near) / (p.far - p.near);
        m
    }
}

/// An orthographic projection mapping the box `min..max` to `(-1, -1, 0)..(1, 1, 1)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrthographicProjection<T> {
    pub min: Vec3<T>,
    pub max: Vec3<T>,
}

/// Creates an [`OrthographicProjection`].
pub fn orthographic_projection<T>(min: Vec3<T>, max: Vec3<T>) -> OrthographicProjection<T> {
    OrthographicProjection { min, max }
}

impl<T: Real> From<OrthographicProjection<T>> for Mat4<T> {
    fn from(p: OrthographicProjection<T>) -> Self {
        let size = p.max - p.min;
        let two = T::two();

        let mut m = Matrix::ZERO;
        m[(0, 0)] = two / size.x;
        m[(1, 1)] = two / size.y;
        m[(2, 2)] = T::ONE / size.z;

        m[(0, 3)] = -(p.min.x + p.max.x) / size.x;
        m[(1, 3)] = -(p.min.y + p.max.y) / size.y;
        m[(2, 3)] = -p.min.z / size.z;
        m[(3, 3)] = T::ONE;
        m
    }
}

#[cfg(test)]
mod tests {
    use crate::{assert_approx_eq, vec3, vec4, Mat4f, Radiansf};

    use super::*;

    #[test]
    fn perspective_depth_range() {
        let m = Mat4f::from(perspective_projection(Radiansf::R90, 2.0, 1.0, 100.0));

        let near = m * vec4(0.0, 0.0, -1.0, 1.0);
        assert_approx_eq!(near.w, 1.0);
        assert_approx_eq!(near.z / near.w, 0.0);

        let far = m * vec4(0.0, 0.0, -100.0, 1.0);
        assert_approx_eq!(far.w, 100.0);
        assert_approx_eq!(far.z / far.w, 1.0);

        // The edges of the field of view end up on the clip box edges.
        let edge = m.transform_point(vec3(2.0, 1.0, -1.0));
        assert_approx_eq!(edge.x, 1.0);
        assert_approx_eq!(edge.y, 1.0);
    }

    #[test]
    fn orthographic_box() {
        let m = Mat4f::from(orthographic_projection(
            vec3(-2.0, 0.0, 1.0),
            vec3(2.0, 10.0, 5.0),
        ));

        assert_approx_eq!(m * vec3(-2.0, 0.0, 1.0), vec3(-1.0, -1.0, 0.0));
        assert_approx_eq!(m * vec3(2.0, 10.0, 5.0), vec3(1.0, 1.0, 1.0));
        assert_approx_eq!(m * vec3(0.0, 5.0, 3.0), vec3(0.0, 0.0, 0.5));
        assert_eq!(m * vec4(0.0, 0.0, 0.0, 1.0), vec4(0.0, -1.0, -0.25, 1.0));
    }
}
