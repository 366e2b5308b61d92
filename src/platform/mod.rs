//! Platform abstraction layer
//!
//! The simulation never talks to a window or GPU directly. It goes through
//! [`RenderSurface`], which hands out:
//! - Window size, frame and session timing
//! - Cursor position and key state
//! - Rectangle drawing, by colour or by visual effect
//!
//! [`HeadlessSurface`] implements it in memory for tests and the native runner.

mod headless;

pub use headless::{DrawCommand, Fill, HeadlessSurface};

use crate::math::{Vec2, Vec4};

/// Keys the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    W,
    S,
    Up,
    Down,
    Escape,
}

/// Named visual effects a rectangle or the background can be drawn with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Effect {
    WhiteFill,
    ColorFill,
    Background,
    BlackHole,
}

impl Effect {
    pub const ALL: [Effect; 4] = [
        Effect::WhiteFill,
        Effect::ColorFill,
        Effect::Background,
        Effect::BlackHole,
    ];

    /// Fragment shader source file for this effect
    pub fn fragment_file(&self) -> &'static str {
        match self {
            Effect::WhiteFill => "whiteFill.frag",
            Effect::ColorFill => "colorFill.frag",
            Effect::Background => "background.frag",
            Effect::BlackHole => "blackHole.frag",
        }
    }

    /// Whether the effect animates with session time
    pub fn is_animated(&self) -> bool {
        matches!(self, Effect::Background | Effect::BlackHole)
    }
}

/// Window, timing, input and drawing, as seen by the game.
///
/// Coordinates are pixels with the origin at the bottom-left corner.
pub trait RenderSurface {
    /// Current window size; may change between frames
    fn window_size(&self) -> (i32, i32);

    fn window_width(&self) -> i32 {
        self.window_size().0
    }

    fn window_height(&self) -> i32 {
        self.window_size().1
    }

    /// Duration of the previous frame in seconds
    fn frame_time(&self) -> f32;

    /// Seconds since the session started
    fn elapsed_secs(&self) -> f32;

    fn cursor_pos(&self) -> Vec2;

    fn is_key_down(&self, key: Key) -> bool;

    fn clear(&mut self, color: Vec4);

    /// Fill the whole window with an effect, highlighting a point
    fn background(&mut self, effect: Effect, highlight: Vec2);

    /// Fill the rectangle spanned by two opposite corners with a colour
    fn draw_rect(&mut self, ll: Vec2, ur: Vec2, color: Vec4);

    /// Fill the rectangle spanned by two opposite corners with an effect
    fn draw_rect_effect(&mut self, ll: Vec2, ur: Vec2, effect: Effect);
}
