//! Gravity Pong - a two-paddle Pong with a black hole in the middle
//!
//! Core modules:
//! - `math`: Fixed-size matrices and vectors, projection helpers
//! - `sim`: Deterministic projectile and paddle physics, frame driver
//! - `platform`: Rendering surface abstraction (window, timing, input, drawing)
//! - `renderer`: Quad geometry and effect uniforms for a GPU back end
//! - `settings`: Data-driven game configuration

pub mod math;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use math::{FixedMatrix, Mat2, Mat3, Mat4, Vec2, Vec3, Vec4};
pub use settings::Settings;

/// Log targets standing in for the per-subsystem channels
pub mod channels {
    pub const GAME: &str = "game";
    pub const RENDERER: &str = "renderer";
}

/// Game configuration constants
pub mod consts {
    /// Pixels per meter (1 pixel is 1 millimeter)
    pub const PIXELS_PER_METER: f32 = 1000.0;

    /// Projectile radius in pixels
    pub const PROJECTILE_RADIUS: f32 = 10.0;
    /// Initial projectile speed (m/s)
    pub const PROJECTILE_SPEED: f32 = 1.0;
    /// Projectile mass used by the drag model
    pub const PROJECTILE_MASS: f32 = 3.0;
    /// Drag only applies above this speed (m/s)
    pub const AIR_RES_MIN_SPEED: f32 = 3.0;
    /// Floor on squared distance (m^2) to a gravity source
    pub const GRAVITY_MIN_DIST_SQ: f32 = 1e-4;

    /// Paddle half-width in pixels
    pub const PADDLE_SIZE: f32 = 10.0;
    /// Distance of the collision plane from the window edge
    pub const PADDLE_INDENT: f32 = 3.0 * PADDLE_SIZE;
    /// Paddle half-height in pixels
    pub const PADDLE_HALF_HEIGHT: f32 = 7.0 * PADDLE_SIZE;
    /// Paddle acceleration (px/s^2)
    pub const PADDLE_ACC: f32 = 6000.0;
    /// Paddle speed limit (px/s)
    pub const PADDLE_MAX_SPEED: f32 = 1200.0;
    /// Share of paddle vertical speed (px/s) handed to the projectile (m/s)
    pub const PADDLE_VEL_TRANSFER: f32 = 0.04 * 0.001;
    /// Per-frame velocity retention while braking, at the reference rate
    pub const PADDLE_BRAKE_FACTOR: f32 = 0.93;
    /// Frame rate the brake factor is tuned for
    pub const PADDLE_BRAKE_REFERENCE_HZ: f32 = 144.0;

    /// Half-size of the black hole sprite in pixels
    pub const BLACK_HOLE_HALF_SIZE: f32 = 40.0;

    /// Log frame statistics at least this often
    pub const LOG_EVERY_FRAMES: u32 = 700;
    /// Frames slower than this are always logged
    pub const SLOW_FRAME_SECS: f32 = 1.0 / 60.0;
}
