//! Builders for special 4x4 matrices

use super::matrix::{Mat4, Vec3};

/// 2D orthographic projection mapping `[left, right] x [bottom, top]` to
/// clip space. There is no near/far pair: z is scaled by -1 and not shifted.
pub fn create_ortho(left: f32, right: f32, bottom: f32, top: f32) -> Mat4 {
    let w = right - left;
    let h = top - bottom;
    Mat4::from_cols([
        [2.0 / w, 0.0, 0.0, 0.0],
        [0.0, 2.0 / h, 0.0, 0.0],
        [0.0, 0.0, -1.0, 0.0],
        [-(right + left) / w, -(top + bottom) / h, 0.0, 1.0],
    ])
}

/// Integer bounds, typically a window size in pixels
pub fn create_ortho_i32(left: i32, right: i32, bottom: i32, top: i32) -> Mat4 {
    create_ortho(left as f32, right as f32, bottom as f32, top as f32)
}

/// Compose a translation by `v` into `m` using `m`'s own basis: each column
/// gains `m[0..3] . v` in its last row. `m` is left untouched.
pub fn translate(m: &Mat4, v: &Vec3) -> Mat4 {
    let mut result = *m;
    for col in 0..4 {
        *result.at_mut(3, col) += m.at(0, col) * v[0] + m.at(1, col) * v[1] + m.at(2, col) * v[2];
    }
    result
}

/// Rotation is not implemented: the input comes back unchanged.
// TODO: pick an axis/handedness convention for the renderer before filling this in.
pub fn rotate(m: &Mat4, _angle: f32, _axis: &Vec3) -> Mat4 {
    *m
}

/// Homogeneous 2D translation by `(x, y)`
pub fn create_tr(x: f32, y: f32) -> Mat4 {
    Mat4::from_cols([
        [1.0, 0.0, 0.0, 0.0],
        [0.0, 1.0, 0.0, 0.0],
        [0.0, 0.0, 1.0, 0.0],
        [x, y, 0.0, 1.0],
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::Vec4;

    #[test]
    fn test_ortho_matches_glam() {
        let ours = create_ortho(0.0, 1200.0, 0.0, 800.0);
        let theirs = glam::Mat4::orthographic_rh_gl(0.0, 1200.0, 0.0, 800.0, -1.0, 1.0);
        let diff = glam::Mat4::from(ours) - theirs;
        assert!(diff.to_cols_array().iter().all(|d| d.abs() < 1e-6));
    }

    #[test]
    fn test_ortho_maps_corners() {
        let proj = create_ortho_i32(0, 1200, 0, 800);
        let ll = proj * Vec4::new(0.0, 0.0, 0.0, 1.0);
        let ur = proj * Vec4::new(1200.0, 800.0, 0.0, 1.0);
        assert!((ll[0] + 1.0).abs() < 1e-6 && (ll[1] + 1.0).abs() < 1e-6);
        assert!((ur[0] - 1.0).abs() < 1e-6 && (ur[1] - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_create_tr_moves_points() {
        let tr = create_tr(5.0, -3.0);
        let p = tr * Vec4::new(1.0, 1.0, 0.0, 1.0);
        assert_eq!(p, Vec4::new(6.0, -2.0, 0.0, 1.0));
    }

    #[test]
    fn test_translate_adds_into_last_row() {
        let m = Mat4::identity();
        let t = translate(&m, &Vec3::new(2.0, 3.0, 4.0));
        // Identity basis: column i picks up v[i] in row 3
        assert_eq!(t.at(3, 0), 2.0);
        assert_eq!(t.at(3, 1), 3.0);
        assert_eq!(t.at(3, 2), 4.0);
        assert_eq!(t.at(3, 3), 1.0);
        // Input untouched
        assert_eq!(m, Mat4::identity());
    }

    #[test]
    fn test_rotate_is_identity_op() {
        let m = create_tr(1.0, 2.0);
        assert_eq!(rotate(&m, 1.0, &Vec3::new(0.0, 0.0, 1.0)), m);
    }
}
