//! Deterministic simulation module
//!
//! All gameplay logic lives here:
//! - Time comes from the surface's frame time, never a clock
//! - Seeded RNG only
//! - Paddles always step before the projectile
//! - Drawing goes through [`crate::platform::RenderSurface`] only

pub mod paddle;
pub mod projectile;
pub mod session;

pub use paddle::{Paddle, PaddleFace, Side};
pub use projectile::Projectile;
pub use session::Session;
