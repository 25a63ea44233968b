//! Net controller: the launch/flight/expand/deploy/retract state machine
//!
//! A single net instance cycles Idle -> Flying -> Expanding -> Deployed ->
//! Retracting -> Idle, driven by the host clock and per-tick motion. Flight
//! that exits the surface drops straight back to Idle (net lost). Hit
//! checks run in every visible phase, including Flying; that is by design
//! and handled by the capture engine, not here.

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;

use super::state::{Net, NetPhase, TrailParticle};
use crate::config::GameConfig;
use crate::consts::*;
use crate::heading_to_vec;

impl Net {
    /// Return the net to its invisible launch-ready state
    pub fn reset(&mut self) {
        *self = Net::default();
    }

    /// Launch toward a target point. Silent no-op unless Idle.
    pub fn launch(&mut self, target: Vec2, launcher: Vec2, now_ms: f64) {
        if self.phase != NetPhase::Idle {
            log::debug!("launch ignored: net is {:?}", self.phase);
            return;
        }

        self.angle = (target.y - launcher.y).atan2(target.x - launcher.x);
        self.pos = launcher;
        self.radius = NET_MIN_RADIUS;
        self.trail.clear();
        self.enter(NetPhase::Flying, now_ms);
    }

    fn enter(&mut self, phase: NetPhase, now_ms: f64) {
        log::debug!("net {:?} -> {:?}", self.phase, phase);
        self.phase = phase;
        self.entered_ms = now_ms;
    }

    /// Advance the state machine one frame
    pub fn tick(
        &mut self,
        bounds: Vec2,
        config: &GameConfig,
        launcher: Vec2,
        now_ms: f64,
        rng: &mut Pcg32,
    ) {
        match self.phase {
            NetPhase::Idle => {}

            NetPhase::Flying => {
                let dir = heading_to_vec(self.angle);
                self.pos += dir * config.net_speed;

                if rng.random::<f32>() < TRAIL_EMIT_CHANCE {
                    if self.trail.len() >= TRAIL_MAX_PARTICLES {
                        self.trail.pop_front();
                    }
                    self.trail.push_back(TrailParticle {
                        offset: -dir * config.net_speed * rng.random_range(0.0..5.0),
                        size: 1.0 + rng.random_range(0.0..2.0),
                        alpha: TRAIL_START_ALPHA,
                    });
                }
                for p in &mut self.trail {
                    p.alpha -= TRAIL_FADE_PER_TICK;
                }
                self.trail.retain(|p| p.alpha > 0.0);

                let out = self.pos.x < 0.0
                    || self.pos.x > bounds.x
                    || self.pos.y < 0.0
                    || self.pos.y > bounds.y;
                if out {
                    // Net lost over the edge - no retraction, no capture
                    self.enter(NetPhase::Idle, now_ms);
                } else if self.pos.distance(launcher) >= NET_DEPLOY_DISTANCE {
                    self.enter(NetPhase::Expanding, now_ms);
                }
            }

            NetPhase::Expanding => {
                let progress = if config.net_expand_time > 0.0 {
                    ((now_ms - self.entered_ms) / config.net_expand_time).clamp(0.0, 1.0)
                } else {
                    1.0
                };
                self.radius = NET_MIN_RADIUS + (config.net_size - NET_MIN_RADIUS) * progress as f32;
                if progress >= 1.0 {
                    self.enter(NetPhase::Deployed, now_ms);
                }
            }

            NetPhase::Deployed => {
                self.radius = config.net_size;
                if now_ms - self.entered_ms >= config.net_stay_time {
                    self.enter(NetPhase::Retracting, now_ms);
                }
            }

            NetPhase::Retracting => {
                let to_home = launcher - self.pos;
                let dist = to_home.length();
                if dist < NET_HOME_DISTANCE {
                    self.enter(NetPhase::Idle, now_ms);
                } else {
                    self.pos += to_home / dist * NET_RETRACT_SPEED;
                    self.radius = (self.radius - NET_SHRINK_PER_TICK).max(NET_MIN_RADIUS);
                }
            }
        }
    }
}
