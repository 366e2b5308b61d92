//! The projectile and its per-frame physics
//!
//! Each frame runs, in this order:
//! 1. [`Projectile::gravity_to_point`]
//! 2. [`Projectile::apply_air_res`]
//! 3. [`Projectile::check_y_collision`]
//! 4. [`Projectile::check_left_collision`] / [`Projectile::check_right_collision`]
//! 5. [`Projectile::advance`]
//!
//! Position is in pixels, velocity in meters per second, with 1 px = 1 mm.
//! Collision response only flips velocity signs; position is never corrected.

use rand::Rng;

use super::paddle::PaddleFace;
use crate::consts::*;
use crate::math::{Vec2, Vec4};
use crate::platform::RenderSurface;

#[derive(Debug, Clone, PartialEq)]
pub struct Projectile {
    pos: Vec2,
    vel: Vec2,
}

impl Projectile {
    pub const RADIUS: f32 = PROJECTILE_RADIUS;

    /// Spawn at the left edge, mid-height, heading up to one radian off
    /// horizontal at [`PROJECTILE_SPEED`]
    pub fn new(window_height: f32, rng: &mut impl Rng) -> Self {
        let dir: f32 = rng.random_range(-1.0..1.0);
        Self {
            pos: Vec2::new(Self::RADIUS, window_height * 0.5),
            vel: Vec2::new(PROJECTILE_SPEED * dir.cos(), PROJECTILE_SPEED * dir.sin()),
        }
    }

    pub fn with_state(pos: Vec2, vel: Vec2) -> Self {
        Self { pos, vel }
    }

    #[inline]
    pub fn pos(&self) -> Vec2 {
        self.pos
    }

    #[inline]
    pub fn vel(&self) -> Vec2 {
        self.vel
    }

    /// Inverse-square pull toward a point mass at `point` (pixels).
    ///
    /// The squared distance is floored at [`GRAVITY_MIN_DIST_SQ`] so the pull
    /// stays bounded close to the source.
    pub fn gravity_to_point(&mut self, point: Vec2, mass: f32, dt: f32) {
        let diff = (point - self.pos) * (1.0 / PIXELS_PER_METER);
        let dist_sq = diff.length_sqr().max(GRAVITY_MIN_DIST_SQ);
        let acc = diff.normalized() * (mass / dist_sq);
        self.vel = self.vel + acc * dt;
    }

    /// Speed-dependent drag, active only above [`AIR_RES_MIN_SPEED`] so the
    /// projectile never stalls. Direction is preserved.
    pub fn apply_air_res(&mut self, air_res_coef: f32, dt: f32) {
        let speed = self.vel.length();
        if speed > AIR_RES_MIN_SPEED {
            let new_speed = PROJECTILE_MASS
                / ((PROJECTILE_MASS / (speed * air_res_coef) + dt) * air_res_coef);
            self.vel = self.vel * (new_speed / speed);
        }
    }

    /// Bounce off the bottom and top window edges
    pub fn check_y_collision(&mut self, window_height: f32) {
        if self.pos.y() < Self::RADIUS {
            self.vel[1] = self.vel.y().abs();
        }
        if self.pos.y() > window_height - Self::RADIUS {
            self.vel[1] = -self.vel.y().abs();
        }
    }

    /// Collide with the left paddle, whose face is the plane `face.plane_x`.
    ///
    /// Beyond the paddle's vertical span the projectile may be grazing a
    /// corner: the velocity direction is compared against the direction from
    /// the corner to the projectile's nearest bounding-box corner to decide
    /// between a face hit and a corner hit.
    pub fn check_left_collision(&mut self, face: &PaddleFace, transfer_coef: f32) {
        if self.pos.x() >= face.plane_x + Self::RADIUS {
            return;
        }

        let r = Self::RADIUS;
        if self.pos.y() > face.top() {
            let corner = Vec2::new(face.plane_x, face.top());
            let near = self.pos + Vec2::new(-r, -r);
            let diff_norm = (near - corner).normalized();
            let vel_norm = self.vel.normalized();
            if vel_norm.y() >= diff_norm.y() {
                self.face_hit(1.0, face, transfer_coef);
            } else if self.pos.y() - r <= face.top() {
                self.vel[1] = self.vel.y().abs();
            }
        } else if self.pos.y() < face.bottom() {
            let corner = Vec2::new(face.plane_x, face.bottom());
            let near = self.pos + Vec2::new(-r, r);
            let diff_norm = (near - corner).normalized();
            let vel_norm = self.vel.normalized();
            if vel_norm.y() <= diff_norm.y() {
                self.face_hit(1.0, face, transfer_coef);
            } else if self.pos.y() + r >= face.bottom() {
                self.vel[1] = -self.vel.y().abs();
            }
        } else {
            self.face_hit(1.0, face, transfer_coef);
        }
    }

    /// Collide with the right paddle, mirroring [`Self::check_left_collision`].
    ///
    /// Without a second player there is no paddle and the right window edge
    /// reflects instead.
    pub fn check_right_collision(
        &mut self,
        face: &PaddleFace,
        transfer_coef: f32,
        two_player: bool,
        window_width: f32,
    ) {
        let r = Self::RADIUS;
        if two_player && self.pos.x() > face.plane_x - r {
            if self.pos.y() > face.top() {
                let corner = Vec2::new(face.plane_x, face.top());
                let near = self.pos + Vec2::new(r, -r);
                let diff_norm = (near - corner).normalized();
                let vel_norm = self.vel.normalized();
                if vel_norm.y() >= diff_norm.y() {
                    self.face_hit(-1.0, face, transfer_coef);
                } else if self.pos.y() - r <= face.top() {
                    self.vel[1] = self.vel.y().abs();
                }
            } else if self.pos.y() < face.bottom() {
                let corner = Vec2::new(face.plane_x, face.bottom());
                let near = self.pos + Vec2::new(r, r);
                let diff_norm = (near - corner).normalized();
                let vel_norm = self.vel.normalized();
                if vel_norm.y() <= diff_norm.y() {
                    self.face_hit(-1.0, face, transfer_coef);
                } else if self.pos.y() + r >= face.bottom() {
                    self.vel[1] = -self.vel.y().abs();
                }
            } else {
                self.face_hit(-1.0, face, transfer_coef);
            }
        } else if self.pos.x() >= window_width - r {
            self.vel[0] = -self.vel.x().abs();
        }
    }

    /// Send the projectile away from the paddle (`away` is the sign of the
    /// new horizontal velocity) and pass on some of the paddle's motion
    fn face_hit(&mut self, away: f32, face: &PaddleFace, transfer_coef: f32) {
        self.vel[0] = away * self.vel.x().abs();
        self.vel[1] += face.y_vel * transfer_coef;
    }

    /// Move by one frame, converting m/s to px/s
    pub fn advance(&mut self, dt: f32) {
        self.pos = self.pos + self.vel * (dt * PIXELS_PER_METER);
    }

    /// Colour encodes heading and height
    pub fn color(&self) -> Vec4 {
        Vec4::new(
            self.vel.x() / PROJECTILE_SPEED,
            self.vel.y() / PROJECTILE_SPEED,
            self.pos.y() / 1000.0,
            1.0,
        )
    }

    pub fn draw(&self, surface: &mut impl RenderSurface) {
        let extent = Vec2::new(Self::RADIUS, Self::RADIUS);
        surface.draw_rect(self.pos - extent, self.pos + extent, self.color());
    }
}
