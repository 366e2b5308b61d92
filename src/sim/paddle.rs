//! Vertically moving paddles
//!
//! A paddle accelerates toward its speed limit while a direction is held and
//! decays exponentially otherwise. It is not kept on screen.

use crate::consts::*;
use crate::math::Vec2;
use crate::platform::RenderSurface;
use crate::renderer::colors;

/// Which window edge a paddle guards
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

/// What the projectile needs to know about a paddle to collide with it
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaddleFace {
    /// Vertical center (pixels)
    pub y: f32,
    pub half_height: f32,
    /// X of the collision plane (pixels)
    pub plane_x: f32,
    /// Vertical speed (pixels/s)
    pub y_vel: f32,
}

impl PaddleFace {
    #[inline]
    pub fn top(&self) -> f32 {
        self.y + self.half_height
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y - self.half_height
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Paddle {
    side: Side,
    y_pos: f32,
    y_vel: f32,
}

impl Paddle {
    pub const HALF_HEIGHT: f32 = PADDLE_HALF_HEIGHT;
    pub const MAX_SPEED: f32 = PADDLE_MAX_SPEED;

    /// Paddle at rest, vertically centered
    pub fn new(side: Side, window_height: f32) -> Self {
        Self::with_state(side, window_height * 0.5, 0.0)
    }

    pub fn with_state(side: Side, y_pos: f32, y_vel: f32) -> Self {
        Self { side, y_pos, y_vel }
    }

    #[inline]
    pub fn side(&self) -> Side {
        self.side
    }

    #[inline]
    pub fn y(&self) -> f32 {
        self.y_pos
    }

    #[inline]
    pub fn y_vel(&self) -> f32 {
        self.y_vel
    }

    /// Accelerate upward, capped at [`Self::MAX_SPEED`]
    pub fn up(&mut self, dt: f32) {
        self.y_vel = (self.y_vel + PADDLE_ACC * dt).min(Self::MAX_SPEED);
        self.y_pos += self.y_vel * dt;
    }

    /// Accelerate downward, capped at [`Self::MAX_SPEED`]
    pub fn down(&mut self, dt: f32) {
        self.y_vel = (self.y_vel - PADDLE_ACC * dt).max(-Self::MAX_SPEED);
        self.y_pos += self.y_vel * dt;
    }

    /// Exponential slow-down, independent of frame rate
    pub fn brake(&mut self, dt: f32) {
        self.y_vel *= PADDLE_BRAKE_FACTOR.powf(dt * PADDLE_BRAKE_REFERENCE_HZ);
        self.y_pos += self.y_vel * dt;
    }

    /// X of the plane the projectile collides with
    pub fn collision_x(&self, window_width: f32) -> f32 {
        match self.side {
            Side::Left => PADDLE_INDENT,
            Side::Right => window_width - PADDLE_INDENT,
        }
    }

    pub fn face(&self, window_width: f32) -> PaddleFace {
        PaddleFace {
            y: self.y_pos,
            half_height: Self::HALF_HEIGHT,
            plane_x: self.collision_x(window_width),
            y_vel: self.y_vel,
        }
    }

    pub fn draw(&self, surface: &mut impl RenderSurface) {
        let x = match self.side {
            Side::Left => 2.0 * PADDLE_SIZE,
            Side::Right => surface.window_width() as f32 - 2.0 * PADDLE_SIZE,
        };
        let mid = Vec2::new(x, self.y_pos);
        let extent = Vec2::new(PADDLE_SIZE, Self::HALF_HEIGHT);
        surface.draw_rect(mid - extent, mid + extent, colors::PADDLE);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::{DrawCommand, HeadlessSurface};

    #[test]
    fn test_up_accelerates_and_clamps() {
        let mut paddle = Paddle::new(Side::Left, 800.0);
        assert_eq!(paddle.y(), 400.0);

        paddle.up(0.1);
        assert_eq!(paddle.y_vel(), 600.0);
        assert!((paddle.y() - 460.0).abs() < 1e-3);

        // One huge step lands exactly on the limit
        paddle.up(10.0);
        assert_eq!(paddle.y_vel(), Paddle::MAX_SPEED);
        assert!((paddle.y() - (460.0 + 12000.0)).abs() < 1e-2);
    }

    #[test]
    fn test_down_clamps() {
        let mut paddle = Paddle::new(Side::Right, 800.0);
        for _ in 0..100 {
            paddle.down(0.05);
            assert!(paddle.y_vel() >= -Paddle::MAX_SPEED);
        }
        assert_eq!(paddle.y_vel(), -Paddle::MAX_SPEED);
        assert!(paddle.y() < 0.0, "paddles are not kept on screen");
    }

    #[test]
    fn test_brake_reference_frame() {
        let mut paddle = Paddle::with_state(Side::Left, 0.0, 1000.0);
        paddle.brake(1.0 / 144.0);
        assert!((paddle.y_vel() - 930.0).abs() < 1e-2);
    }

    #[test]
    fn test_brake_frame_rate_independent() {
        let mut fine = Paddle::with_state(Side::Left, 0.0, 1000.0);
        let mut coarse = fine.clone();
        for _ in 0..144 {
            fine.brake(1.0 / 144.0);
        }
        for _ in 0..30 {
            coarse.brake(1.0 / 30.0);
        }
        let expected = 1000.0 * 0.93_f32.powf(144.0);
        assert!((fine.y_vel() - expected).abs() < 1e-3);
        assert!((coarse.y_vel() - expected).abs() < 1e-3);
    }

    #[test]
    fn test_collision_plane_and_face() {
        let left = Paddle::new(Side::Left, 800.0);
        let right = Paddle::with_state(Side::Right, 300.0, -50.0);
        assert_eq!(left.side(), Side::Left);
        assert_eq!(right.side(), Side::Right);
        assert_eq!(left.collision_x(1200.0), 30.0);
        assert_eq!(right.collision_x(1200.0), 1170.0);

        let face = right.face(1200.0);
        assert_eq!(face.top(), 370.0);
        assert_eq!(face.bottom(), 230.0);
        assert_eq!(face.y_vel, -50.0);
    }

    #[test]
    fn test_draw_positions() {
        let mut surface = HeadlessSurface::new(1200, 800);
        Paddle::new(Side::Left, 800.0).draw(&mut surface);
        Paddle::new(Side::Right, 800.0).draw(&mut surface);

        let rects: Vec<(Vec2, Vec2)> = surface
            .commands()
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Rect { ll, ur, .. } => Some((*ll, *ur)),
                _ => None,
            })
            .collect();
        assert_eq!(rects[0], (Vec2::new(10.0, 330.0), Vec2::new(30.0, 470.0)));
        assert_eq!(rects[1], (Vec2::new(1170.0, 330.0), Vec2::new(1190.0, 470.0)));
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn speed_never_exceeds_limit(
                steps in prop::collection::vec((0u8..3, 0.0f32..0.5), 1..200)
            ) {
                let mut paddle = Paddle::new(Side::Left, 800.0);
                for (action, dt) in steps {
                    match action {
                        0 => paddle.up(dt),
                        1 => paddle.down(dt),
                        _ => paddle.brake(dt),
                    }
                    prop_assert!(paddle.y_vel().abs() <= Paddle::MAX_SPEED);
                }
            }
        }
    }
}
