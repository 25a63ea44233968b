//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Seeded RNG only
//! - Host-supplied clock only (no wall-clock reads)
//! - Stable iteration order (spawn order)
//! - No rendering or platform dependencies

pub mod capture;
pub mod fish;
pub mod net;
pub mod session;
pub mod state;

pub use capture::check_hits;
pub use fish::FishPool;
pub use session::GameSession;
pub use state::{ColorClass, Fish, GameEvent, Net, NetPhase, Snapshot, TrailParticle};
