//! Netcast - a single-screen net-casting arcade game core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (fish motion, net state machine, captures)
//! - `config`: Data-driven game tuning
//!
//! Rendering, DOM/window wiring, and the score/timer display are external
//! collaborators: the host drives `GameSession::frame` once per animation
//! frame and `GameSession::countdown_tick` once per second, feeds in
//! `launch`/`start`/`reset` commands, and draws from read-only [`sim::Snapshot`]s
//! plus drained [`sim::GameEvent`]s.

pub mod config;
pub mod sim;

pub use config::GameConfig;
pub use sim::GameSession;

use glam::Vec2;

/// Game tuning constants that are not host-configurable
pub mod consts {
    /// Net radius when launched and when fully retracted
    pub const NET_MIN_RADIUS: f32 = 5.0;
    /// Flight distance from the launcher at which the net starts expanding
    pub const NET_DEPLOY_DISTANCE: f32 = 150.0;
    /// Retraction speed toward the launcher (px per tick)
    pub const NET_RETRACT_SPEED: f32 = 5.0;
    /// Radius shrink while retracting (px per tick)
    pub const NET_SHRINK_PER_TICK: f32 = 2.0;
    /// Distance to the launcher at which retraction completes
    pub const NET_HOME_DISTANCE: f32 = 10.0;

    /// Chance per flight tick to emit a trail particle
    pub const TRAIL_EMIT_CHANCE: f32 = 0.3;
    /// Trail particle buffer cap (oldest evicted first)
    pub const TRAIL_MAX_PARTICLES: usize = 10;
    /// Initial trail particle opacity
    pub const TRAIL_START_ALPHA: f32 = 0.7;
    /// Opacity lost per tick; particles at zero are dropped
    pub const TRAIL_FADE_PER_TICK: f32 = 0.02;

    /// Delay before a captured fish is replaced (milliseconds)
    pub const RESPAWN_DELAY_MS: f64 = 500.0;
    /// Launcher sits centered this many px above the bottom edge
    pub const LAUNCHER_OFFSET_Y: f32 = 30.0;

    /// Fish speed jitter range applied to the configured base speed
    pub const SPEED_JITTER_MIN: f32 = 0.8;
    pub const SPEED_JITTER_MAX: f32 = 1.2;
    /// Ticks between heading changes, rolled uniformly per fish
    pub const TURN_INTERVAL_MIN: u32 = 50;
    pub const TURN_INTERVAL_MAX: u32 = 150;
}

/// Fixed launcher position for a surface of the given bounds
#[inline]
pub fn launcher_position(bounds: Vec2) -> Vec2 {
    Vec2::new(bounds.x / 2.0, bounds.y - consts::LAUNCHER_OFFSET_Y)
}

/// Unit vector for a heading angle (radians, y-down screen coordinates)
#[inline]
pub fn heading_to_vec(angle: f32) -> Vec2 {
    Vec2::new(angle.cos(), angle.sin())
}

/// Wrap a single coordinate into [-margin, max + margin] toroidally
#[inline]
pub fn wrap_coord(v: f32, max: f32, margin: f32) -> f32 {
    if v < -margin {
        max + margin
    } else if v > max + margin {
        -margin
    } else {
        v
    }
}
