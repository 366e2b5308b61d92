//! Per-frame driver
//!
//! Reads timing and input from the surface, steps both paddles and then the
//! projectile in a fixed order, and draws the scene. All logging for a game
//! session happens here, on the `game` channel.

use log::info;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::paddle::{Paddle, Side};
use super::projectile::Projectile;
use crate::channels;
use crate::consts::*;
use crate::math::Vec2;
use crate::platform::{Effect, Key, RenderSurface};
use crate::renderer::colors;
use crate::settings::Settings;

/// Key bindings for one paddle
#[derive(Debug, Clone, Copy)]
struct Controls {
    up: Key,
    down: Key,
}

const LEFT_CONTROLS: Controls = Controls {
    up: Key::W,
    down: Key::S,
};

const RIGHT_CONTROLS: Controls = Controls {
    up: Key::Up,
    down: Key::Down,
};

#[derive(Debug, Clone)]
pub struct Session {
    settings: Settings,
    projectile: Projectile,
    left: Paddle,
    right: Paddle,
    frame_count: u64,
    log_counter: u32,
    last_size: (i32, i32),
}

impl Session {
    /// Start a session sized to `surface`, launching with a heading drawn from `seed`
    pub fn new(settings: Settings, surface: &impl RenderSurface, seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let height = surface.window_height() as f32;
        info!(target: channels::GAME, "Game started with seed {}", seed);
        Self {
            projectile: Projectile::new(height, &mut rng),
            left: Paddle::new(Side::Left, height),
            right: Paddle::new(Side::Right, height),
            settings,
            frame_count: 0,
            log_counter: 0,
            last_size: surface.window_size(),
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn projectile(&self) -> &Projectile {
        &self.projectile
    }

    pub fn left_paddle(&self) -> &Paddle {
        &self.left
    }

    pub fn right_paddle(&self) -> &Paddle {
        &self.right
    }

    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// The player asked to quit
    pub fn close_requested(&self, surface: &impl RenderSurface) -> bool {
        surface.is_key_down(Key::Escape)
    }

    /// Run one full frame: bookkeeping, physics, drawing
    pub fn frame(&mut self, surface: &mut impl RenderSurface) {
        self.log_frame(surface);
        self.step(surface);
        self.draw(surface);
        self.frame_count += 1;
    }

    /// Advance paddles, then the projectile, by the surface's frame time
    pub fn step(&mut self, surface: &impl RenderSurface) {
        let dt = surface.frame_time();
        let (w, h) = surface.window_size();
        let (w, h) = (w as f32, h as f32);

        drive_paddle(&mut self.left, LEFT_CONTROLS, surface, dt);
        if self.settings.two_player {
            drive_paddle(&mut self.right, RIGHT_CONTROLS, surface, dt);
        }

        let center = Vec2::new(w * 0.5, h * 0.5);
        let transfer = self.settings.velocity_transfer;
        let p = &mut self.projectile;
        p.gravity_to_point(center, self.settings.central_mass, dt);
        p.apply_air_res(self.settings.air_resistance, dt);
        p.check_y_collision(h);
        p.check_left_collision(&self.left.face(w), transfer);
        p.check_right_collision(&self.right.face(w), transfer, self.settings.two_player, w);
        p.advance(dt);
    }

    pub fn draw(&self, surface: &mut impl RenderSurface) {
        surface.clear(colors::BACKGROUND);
        surface.background(Effect::Background, self.projectile.pos());

        let (w, h) = surface.window_size();
        let center = Vec2::new(w as f32 * 0.5, h as f32 * 0.5);
        let extent = Vec2::new(BLACK_HOLE_HALF_SIZE, BLACK_HOLE_HALF_SIZE);
        surface.draw_rect_effect(center - extent, center + extent, Effect::BlackHole);

        self.left.draw(surface);
        if self.settings.two_player {
            self.right.draw(surface);
        }
        self.projectile.draw(surface);
    }

    fn log_frame(&mut self, surface: &impl RenderSurface) {
        let dt = surface.frame_time();
        self.log_counter += 1;
        if self.log_counter >= LOG_EVERY_FRAMES || dt > SLOW_FRAME_SECS {
            self.log_counter = 0;
            info!(
                target: channels::GAME,
                "Frame time {:.5}s, ({:.0} FPS), elapsed {:.5}s",
                dt,
                1.0 / dt,
                surface.elapsed_secs()
            );
            let cursor = surface.cursor_pos();
            let pos = self.projectile.pos();
            info!(
                target: channels::GAME,
                "Mouse at ({}, {}), dot at ({}, {})",
                cursor.x(),
                cursor.y(),
                pos.x(),
                pos.y()
            );
        }

        let size = surface.window_size();
        if size != self.last_size {
            info!(target: channels::GAME, "Size changed, new size {}x{}", size.0, size.1);
            self.last_size = size;
        }
    }
}

/// Held direction accelerates, otherwise brake; up wins if both are held
fn drive_paddle(paddle: &mut Paddle, controls: Controls, surface: &impl RenderSurface, dt: f32) {
    if surface.is_key_down(controls.up) {
        paddle.up(dt);
    } else if surface.is_key_down(controls.down) {
        paddle.down(dt);
    } else {
        paddle.brake(dt);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::{DrawCommand, Fill, HeadlessSurface};

    fn setup(two_player: bool) -> (Session, HeadlessSurface) {
        let surface = HeadlessSurface::new(1200, 800);
        let settings = Settings {
            two_player,
            ..Default::default()
        };
        (Session::new(settings, &surface, 1234), surface)
    }

    #[test]
    fn test_new_session_layout() {
        let (session, _) = setup(true);
        assert_eq!(session.left_paddle().y(), 400.0);
        assert_eq!(session.right_paddle().y(), 400.0);
        assert_eq!(session.projectile().pos(), Vec2::new(Projectile::RADIUS, 400.0));
        assert_eq!(session.frame_count(), 0);
    }

    #[test]
    fn test_keys_drive_paddles() {
        let (mut session, mut surface) = setup(true);
        surface.press(Key::W);
        surface.press(Key::Down);
        surface.advance(1.0 / 144.0);
        session.step(&surface);
        assert!(session.left_paddle().y_vel() > 0.0);
        assert!(session.right_paddle().y_vel() < 0.0);

        surface.release_all();
        let before = session.left_paddle().y_vel();
        session.step(&surface);
        assert!(session.left_paddle().y_vel() < before);
        assert!(session.left_paddle().y_vel() > 0.0);
    }

    #[test]
    fn test_right_paddle_idle_in_single_player() {
        let (mut session, mut surface) = setup(false);
        surface.press(Key::Up);
        surface.advance(1.0 / 144.0);
        session.step(&surface);
        assert_eq!(session.right_paddle().y_vel(), 0.0);
    }

    #[test]
    fn test_frame_draw_order() {
        let (mut session, mut surface) = setup(true);
        surface.advance(1.0 / 144.0);
        session.frame(&mut surface);
        let cmds = surface.take_commands();
        assert_eq!(cmds.len(), 6);
        assert!(matches!(cmds[0], DrawCommand::Clear(_)));
        assert!(matches!(
            cmds[1],
            DrawCommand::Background {
                effect: Effect::Background,
                ..
            }
        ));
        assert!(matches!(
            cmds[2],
            DrawCommand::Rect {
                fill: Fill::Effect(Effect::BlackHole),
                ..
            }
        ));
        assert_eq!(session.frame_count(), 1);

        // No right paddle without a second player
        let (mut session, mut surface) = setup(false);
        session.frame(&mut surface);
        assert_eq!(surface.commands().len(), 5);
    }

    #[test]
    fn test_gravity_pulls_toward_center() {
        let (mut session, mut surface) = setup(true);
        let start = session.projectile().pos();
        let start_dist = (Vec2::new(600.0, 400.0) - start).length();
        for _ in 0..72 {
            surface.advance(1.0 / 144.0);
            session.frame(&mut surface);
            surface.take_commands();
        }
        let end_dist = (Vec2::new(600.0, 400.0) - session.projectile().pos()).length();
        assert!(end_dist < start_dist);
    }

    #[test]
    fn test_escape_requests_close() {
        let (session, mut surface) = setup(true);
        assert!(!session.close_requested(&surface));
        surface.press(Key::Escape);
        assert!(session.close_requested(&surface));
    }

    #[test]
    fn test_resize_tracked_between_frames() {
        let (mut session, mut surface) = setup(true);
        surface.set_cursor(Vec2::new(100.0, 200.0));
        surface.advance(1.0 / 144.0);
        session.frame(&mut surface);
        assert_eq!(session.last_size, (1200, 800));

        surface.set_window_size(1000, 600);
        // Slow frame, so the statistics and cursor get logged too
        surface.advance(0.05);
        session.frame(&mut surface);
        assert_eq!(session.last_size, (1000, 600));

        // Background and black hole follow the new size
        let cmds = surface.take_commands();
        let frame = &cmds[cmds.len() - 6..];
        match &frame[1] {
            DrawCommand::Background { uniforms, .. } => {
                assert_eq!(uniforms.window_dim, [1000.0, 600.0])
            }
            other => panic!("expected background, got {:?}", other),
        }
        match &frame[2] {
            DrawCommand::Rect { ll, ur, .. } => {
                assert_eq!(*ll, Vec2::new(460.0, 260.0));
                assert_eq!(*ur, Vec2::new(540.0, 340.0));
            }
            other => panic!("expected black hole, got {:?}", other),
        }
    }

    #[test]
    fn test_right_paddle_plane_follows_resize() {
        let (mut session, mut surface) = setup(true);
        surface.set_window_size(1000, 600);
        surface.advance(1.0 / 144.0);
        session.right = Paddle::with_state(Side::Right, 300.0, 0.0);
        // Inside the new plane at 970, far short of the old one at 1170
        session.projectile = Projectile::with_state(Vec2::new(965.0, 300.0), Vec2::new(0.5, 0.0));
        session.step(&surface);
        assert!(session.projectile().vel().x() < 0.0);
    }

    #[test]
    fn test_single_player_wall_follows_resize() {
        let (mut session, mut surface) = setup(false);
        surface.set_window_size(1000, 600);
        surface.advance(1.0 / 144.0);
        session.projectile = Projectile::with_state(Vec2::new(995.0, 300.0), Vec2::new(0.5, 0.0));
        session.step(&surface);
        assert!(session.projectile().vel().x() < 0.0);

        // The same spot in the default window is open space
        let (mut session, mut surface) = setup(false);
        surface.advance(1.0 / 144.0);
        session.projectile = Projectile::with_state(Vec2::new(995.0, 400.0), Vec2::new(0.5, 0.0));
        session.step(&surface);
        assert!(session.projectile().vel().x() > 0.0);
    }

    #[test]
    fn test_same_seed_same_run() {
        let (mut a, mut surface_a) = setup(true);
        let (mut b, mut surface_b) = setup(true);
        for _ in 0..300 {
            surface_a.advance(1.0 / 144.0);
            surface_b.advance(1.0 / 144.0);
            a.step(&surface_a);
            b.step(&surface_b);
        }
        assert_eq!(a.projectile(), b.projectile());
    }
}
