//! Screen-space quad generation

use bytemuck::{Pod, Zeroable};

use super::vertex::QuadVertex;
use crate::math::{Mat2, Vec2};
use crate::platform::Effect;

/// Two triangles over the four corners produced by [`quad`]
pub const QUAD_INDICES: [u32; 6] = [0, 1, 2, 2, 3, 0];

/// Scale and offset taking window pixels to normalized device coordinates
pub fn window_to_ndc(window: (i32, i32)) -> (Mat2, Vec2) {
    let (w, h) = window;
    let scale = Mat2::from_cols([[2.0 / w as f32, 0.0], [0.0, 2.0 / h as f32]]);
    (scale, Vec2::new(-1.0, -1.0))
}

#[inline]
pub fn pixel_to_ndc(p: Vec2, window: (i32, i32)) -> Vec2 {
    let (scale, offset) = window_to_ndc(window);
    scale * p + offset
}

/// Corners of the pixel rectangle `ll..ur` in NDC, counter-clockwise from
/// the lower left, with uv spanning the unit square
pub fn quad(ll: Vec2, ur: Vec2, window: (i32, i32)) -> [QuadVertex; 4] {
    let ll = pixel_to_ndc(ll, window);
    let ur = pixel_to_ndc(ur, window);
    [
        QuadVertex::new(ll.x(), ll.y(), 0.0, 0.0),
        QuadVertex::new(ur.x(), ll.y(), 1.0, 0.0),
        QuadVertex::new(ur.x(), ur.y(), 1.0, 1.0),
        QuadVertex::new(ll.x(), ur.y(), 0.0, 1.0),
    ]
}

/// Uniform block shared by the animated effects
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct EffectUniforms {
    /// `u_Time`: session time in seconds
    pub time: f32,
    pub _padding: f32,
    /// `u_HighlightPos`: pixel position the background glows around
    pub highlight_pos: [f32; 2],
    /// `u_WindDim`: window size in pixels
    pub window_dim: [f32; 2],
}

impl EffectUniforms {
    pub fn new(effect: Effect, time: f32, highlight: Vec2, window: (i32, i32)) -> Self {
        let time = if effect.is_animated() { time } else { 0.0 };
        Self {
            time,
            _padding: 0.0,
            highlight_pos: [highlight.x(), highlight.y()],
            window_dim: [window.0 as f32, window.1 as f32],
        }
    }

    /// Uniform names an effect's shader reads
    pub fn names(effect: Effect) -> &'static [&'static str] {
        match effect {
            Effect::WhiteFill => &[],
            Effect::ColorFill => &["u_Color"],
            Effect::Background => &["u_Time", "u_HighlightPos", "u_WindDim"],
            Effect::BlackHole => &["u_Time"],
        }
    }
}
