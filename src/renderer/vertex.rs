//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

/// Quad corner with clip-space position and texture coordinates
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct QuadVertex {
    pub position: [f32; 2],
    pub uv: [f32; 2],
}

impl QuadVertex {
    pub const fn new(x: f32, y: f32, u: f32, v: f32) -> Self {
        Self {
            position: [x, y],
            uv: [u, v],
        }
    }
}

/// Colors for game elements
pub mod colors {
    use crate::math::Vec4;

    pub const BACKGROUND: Vec4 = Vec4::new(0.0, 0.0, 0.0, 1.0);
    pub const PADDLE: Vec4 = Vec4::new(1.0, 1.0, 1.0, 1.0);
}
