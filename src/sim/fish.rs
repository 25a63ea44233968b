//! Fish pool: spawning, free motion, wrap-around, delayed respawns
//!
//! Fish roam the surface with a jittered base speed and re-roll their
//! heading every `turn_interval` ticks. The surface is toroidal: a fish
//! leaving one edge (plus its own radius as margin) re-enters opposite.

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;

use super::state::{ColorClass, Fish};
use crate::config::GameConfig;
use crate::consts::*;
use crate::{heading_to_vec, wrap_coord};

/// Owns the set of active fish plus the delayed respawn queue
#[derive(Debug, Clone, Default)]
pub struct FishPool {
    /// Active fish, in spawn order (stable iteration for determinism)
    pub fishes: Vec<Fish>,
    /// Host-clock due times (ms) for pending replacement spawns
    respawns: Vec<f64>,
    next_id: u32,
}

impl FishPool {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.fishes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fishes.is_empty()
    }

    /// Pending replacement spawns not yet due
    pub fn pending_respawns(&self) -> usize {
        self.respawns.len()
    }

    /// Drop all fish and cancel pending respawns
    pub fn clear(&mut self) {
        self.fishes.clear();
        self.respawns.clear();
    }

    fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Spawn one fish at a uniformly random position with a random heading,
    /// jittered speed, random color class, and a rolled turn interval
    pub fn spawn(&mut self, bounds: Vec2, config: &GameConfig, rng: &mut Pcg32) {
        let class = ColorClass::ALL[rng.random_range(0..ColorClass::ALL.len())];

        let angle = rng.random_range(0.0..std::f32::consts::TAU);
        let jitter = rng.random_range(SPEED_JITTER_MIN..SPEED_JITTER_MAX);
        let speed = config.base_fish_speed * jitter;

        let fish = Fish {
            id: self.next_entity_id(),
            pos: Vec2::new(
                rng.random_range(0.0..bounds.x),
                rng.random_range(0.0..bounds.y),
            ),
            vel: heading_to_vec(angle) * speed,
            radius: class.radius(),
            class,
            turn_ticks: 0,
            turn_interval: rng.random_range(TURN_INTERVAL_MIN..TURN_INTERVAL_MAX),
        };
        self.fishes.push(fish);
    }

    /// Queue one replacement spawn at the given host-clock time
    pub fn schedule_respawn(&mut self, due_ms: f64) {
        self.respawns.push(due_ms);
    }

    /// Remove a fish by identity; called only by the capture engine
    pub fn remove(&mut self, id: u32) -> Option<Fish> {
        let idx = self.fishes.iter().position(|f| f.id == id)?;
        Some(self.fishes.remove(idx))
    }

    /// Advance the pool one frame: drain due respawns, move every fish,
    /// wrap positions, and apply periodic re-heading
    pub fn tick(&mut self, bounds: Vec2, config: &GameConfig, rng: &mut Pcg32, now_ms: f64) {
        let due = self.respawns.iter().filter(|&&t| t <= now_ms).count();
        self.respawns.retain(|&t| t > now_ms);
        for _ in 0..due {
            self.spawn(bounds, config, rng);
        }

        for fish in &mut self.fishes {
            fish.pos += fish.vel * fish.class.speed_multiplier();

            fish.pos.x = wrap_coord(fish.pos.x, bounds.x, fish.radius);
            fish.pos.y = wrap_coord(fish.pos.y, bounds.y, fish.radius);

            fish.turn_ticks += 1;
            if fish.turn_ticks >= fish.turn_interval {
                let speed = fish.vel.length();
                let angle = rng.random_range(0.0..std::f32::consts::TAU);
                fish.vel = heading_to_vec(angle) * speed;
                fish.turn_ticks = 0;
                fish.turn_interval = rng.random_range(TURN_INTERVAL_MIN..TURN_INTERVAL_MAX);
            }
        }
    }
}
