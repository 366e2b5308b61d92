//! Fixed-size linear algebra
//!
//! - `matrix`: const-generic column-major matrix and vector value type
//! - `utils`: builders for projection and translation matrices
//! - `interop`: conversions to and from `glam` types for GPU back ends

pub mod interop;
pub mod matrix;
pub mod utils;

pub use matrix::{FixedMatrix, Mat2, Mat3, Mat4, Vec2, Vec3, Vec4};
