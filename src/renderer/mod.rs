//! Rendering data for a GPU back end
//!
//! Everything is drawn as screen-space quads: pixel rectangles are converted
//! to normalized device coordinates here, and effect shaders get their
//! uniform block from [`EffectUniforms`].

pub mod shapes;
pub mod vertex;

pub use shapes::{EffectUniforms, QUAD_INDICES, pixel_to_ndc, quad, window_to_ndc};
pub use vertex::{QuadVertex, colors};
