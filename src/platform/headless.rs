//! In-memory render surface
//!
//! Holds scripted window/timing/input state and records every draw call as a
//! [`DrawCommand`], already converted to quad vertices.

use std::collections::HashSet;

use super::{Effect, Key, RenderSurface};
use crate::channels;
use crate::math::{Vec2, Vec4};
use crate::renderer::{EffectUniforms, QuadVertex, quad};

/// How a rectangle is filled
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Fill {
    Color(Vec4),
    Effect(Effect),
}

/// A recorded draw call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear(Vec4),
    Background {
        effect: Effect,
        uniforms: EffectUniforms,
    },
    Rect {
        ll: Vec2,
        ur: Vec2,
        fill: Fill,
        vertices: [QuadVertex; 4],
    },
}

#[derive(Debug, Clone)]
pub struct HeadlessSurface {
    size: (i32, i32),
    frame_time: f32,
    elapsed: f32,
    cursor: Vec2,
    keys: HashSet<Key>,
    commands: Vec<DrawCommand>,
}

impl HeadlessSurface {
    pub fn new(width: i32, height: i32) -> Self {
        log::info!(target: channels::RENDERER, "Headless surface {}x{}", width, height);
        Self {
            size: (width, height),
            frame_time: 1.0 / 60.0,
            elapsed: 0.0,
            cursor: Vec2::zeros(),
            keys: HashSet::new(),
            commands: Vec::new(),
        }
    }

    pub fn set_window_size(&mut self, width: i32, height: i32) {
        self.size = (width, height);
    }

    pub fn set_cursor(&mut self, pos: Vec2) {
        self.cursor = pos;
    }

    pub fn press(&mut self, key: Key) {
        self.keys.insert(key);
    }

    pub fn release(&mut self, key: Key) {
        self.keys.remove(&key);
    }

    pub fn release_all(&mut self) {
        self.keys.clear();
    }

    /// Start a new frame that took `dt` seconds
    pub fn advance(&mut self, dt: f32) {
        self.frame_time = dt;
        self.elapsed += dt;
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Drain the recorded commands, typically once per frame
    pub fn take_commands(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    fn push_rect(&mut self, ll: Vec2, ur: Vec2, fill: Fill) {
        let vertices = quad(ll, ur, self.size);
        self.commands.push(DrawCommand::Rect {
            ll,
            ur,
            fill,
            vertices,
        });
    }
}

impl RenderSurface for HeadlessSurface {
    fn window_size(&self) -> (i32, i32) {
        self.size
    }

    fn frame_time(&self) -> f32 {
        self.frame_time
    }

    fn elapsed_secs(&self) -> f32 {
        self.elapsed
    }

    fn cursor_pos(&self) -> Vec2 {
        self.cursor
    }

    fn is_key_down(&self, key: Key) -> bool {
        self.keys.contains(&key)
    }

    fn clear(&mut self, color: Vec4) {
        self.commands.push(DrawCommand::Clear(color));
    }

    fn background(&mut self, effect: Effect, highlight: Vec2) {
        let uniforms = EffectUniforms::new(effect, self.elapsed, highlight, self.size);
        self.commands.push(DrawCommand::Background { effect, uniforms });
    }

    fn draw_rect(&mut self, ll: Vec2, ur: Vec2, color: Vec4) {
        self.push_rect(ll, ur, Fill::Color(color));
    }

    fn draw_rect_effect(&mut self, ll: Vec2, ur: Vec2, effect: Effect) {
        self.push_rect(ll, ur, Fill::Effect(effect));
    }
}
