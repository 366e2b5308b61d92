//! Conversions between the fixed-size types and `glam`
//!
//! Both sides store matrices column-major, so conversions are plain copies.

use super::matrix::{Mat2, Mat4, Vec2, Vec3, Vec4};

impl From<Vec2> for glam::Vec2 {
    fn from(v: Vec2) -> Self {
        glam::Vec2::new(v.x(), v.y())
    }
}

impl From<glam::Vec2> for Vec2 {
    fn from(v: glam::Vec2) -> Self {
        Vec2::new(v.x, v.y)
    }
}

impl From<Vec3> for glam::Vec3 {
    fn from(v: Vec3) -> Self {
        glam::Vec3::new(v[0], v[1], v[2])
    }
}

impl From<Vec4> for glam::Vec4 {
    fn from(v: Vec4) -> Self {
        glam::Vec4::new(v[0], v[1], v[2], v[3])
    }
}

impl From<Mat2> for glam::Mat2 {
    fn from(m: Mat2) -> Self {
        glam::Mat2::from_cols_array_2d(m.cols())
    }
}

impl From<Mat4> for glam::Mat4 {
    fn from(m: Mat4) -> Self {
        glam::Mat4::from_cols_array_2d(m.cols())
    }
}

impl From<glam::Mat4> for Mat4 {
    fn from(m: glam::Mat4) -> Self {
        Mat4::from_cols(m.to_cols_array_2d())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec2_round_trip() {
        let v = Vec2::new(1.5, -2.0);
        let g: glam::Vec2 = v.into();
        assert_eq!(g, glam::Vec2::new(1.5, -2.0));
        assert_eq!(Vec2::from(g), v);
    }

    #[test]
    fn test_mat4_layout_agrees() {
        let m = Mat4::from_slice(&[
            1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0, 11.0, 12.0, 13.0, 14.0, 15.0, 16.0,
        ]);
        let g: glam::Mat4 = m.into();
        // Element (row 1, col 2) in both
        assert_eq!(g.col(2)[1], m.at(1, 2));
        assert_eq!(g.to_cols_array().as_slice(), m.data());
    }
}
