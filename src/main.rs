//! Gravity Pong entry point
//!
//! Runs a session against the in-memory surface for a fixed number of frames
//! and logs a summary. Usage: `gravity-pong [settings.json]`

use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::Context;
use gravity_pong::Settings;
use gravity_pong::channels;
use gravity_pong::platform::HeadlessSurface;
use gravity_pong::sim::Session;

fn clock_seed() -> anyhow::Result<u64> {
    let since_epoch = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .context("system clock is before the Unix epoch")?;
    Ok(since_epoch.as_nanos() as u64)
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let settings = match std::env::args().nth(1) {
        Some(path) => Settings::load(&path)?,
        None => Settings::default(),
    };
    let seed = match settings.seed {
        Some(seed) => seed,
        None => clock_seed()?,
    };

    log::info!(
        target: channels::GAME,
        "{} (headless) starting, {}x{}, {} frames",
        settings.title,
        settings.window_width,
        settings.window_height,
        settings.frames
    );

    let mut surface = HeadlessSurface::new(settings.window_width, settings.window_height);
    let frames = settings.frames;
    let frame_time = settings.frame_time;
    let mut session = Session::new(settings, &surface, seed);

    let mut draws = 0usize;
    for _ in 0..frames {
        if session.close_requested(&surface) {
            log::info!(target: channels::GAME, "Close requested, stopping early");
            break;
        }
        surface.advance(frame_time);
        session.frame(&mut surface);
        draws += surface.take_commands().len();
    }

    let pos = session.projectile().pos();
    let vel = session.projectile().vel();
    log::info!(
        target: channels::GAME,
        "Finished {} frames ({} draw calls), dot at ({:.1}, {:.1}) moving ({:.3}, {:.3}) m/s",
        session.frame_count(),
        draws,
        pos.x(),
        pos.y(),
        vel.x(),
        vel.y()
    );
    Ok(())
}
