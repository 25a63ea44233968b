//! Game session: start/stop/reset lifecycle and the two host timelines
//!
//! The host drives two unsynchronized callbacks: `frame` once per animation
//! frame and `countdown_tick` once per second. Both consult the running
//! flag before doing any work, so they may interleave in either order
//! within the same wall-clock second. All shared state (score, pool, net)
//! is mutated only from inside these calls on a single logical thread.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::capture::check_hits;
use super::fish::FishPool;
use super::state::{GameEvent, Net, Snapshot};
use crate::config::GameConfig;
use crate::launcher_position;

/// One game instance: owns the fish pool, the net, score and countdown.
/// Construct one per concurrent game; there are no process-wide globals.
#[derive(Debug)]
pub struct GameSession {
    config: GameConfig,
    bounds: Vec2,
    score: u32,
    time_left: u32,
    running: bool,
    pool: FishPool,
    net: Net,
    rng: Pcg32,
    events: Vec<GameEvent>,
}

impl GameSession {
    /// Create a stopped session for a surface of the given bounds
    pub fn new(config: GameConfig, bounds: Vec2, seed: u64) -> Self {
        let time_left = config.game_time;
        Self {
            config,
            bounds,
            score: 0,
            time_left,
            running: false,
            pool: FishPool::new(),
            net: Net::default(),
            rng: Pcg32::seed_from_u64(seed),
            events: Vec::new(),
        }
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn time_left(&self) -> u32 {
        self.time_left
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn net(&self) -> &Net {
        &self.net
    }

    pub fn fishes(&self) -> &[super::state::Fish] {
        &self.pool.fishes
    }

    /// Fixed launcher position for the current bounds
    pub fn launcher(&self) -> Vec2 {
        launcher_position(self.bounds)
    }

    /// Track a host surface resize
    pub fn set_bounds(&mut self, bounds: Vec2) {
        self.bounds = bounds;
    }

    /// Read-only view for the render surface
    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            score: self.score,
            time_left: self.time_left,
            running: self.running,
            fishes: &self.pool.fishes,
            net: &self.net,
        }
    }

    /// Take all pending presentation events
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Begin a round. Silent no-op while already running.
    pub fn start(&mut self, now_ms: f64) {
        if self.running {
            log::debug!("start ignored: session already running");
            return;
        }

        self.score = 0;
        self.time_left = self.config.game_time;
        self.pool.clear();
        self.net.reset();
        for _ in 0..self.config.fish_count {
            self.pool.spawn(self.bounds, &self.config, &mut self.rng);
        }
        self.running = true;

        self.events.push(GameEvent::ScoreChanged(0));
        self.events.push(GameEvent::TimeChanged(self.time_left));
        log::info!(
            "session started: {} fish, {} s, t={:.0} ms",
            self.config.fish_count,
            self.time_left,
            now_ms
        );
    }

    /// Force the session back to its stopped initial state
    pub fn reset(&mut self) {
        self.running = false;
        self.score = 0;
        self.time_left = self.config.game_time;
        self.pool.clear();
        self.net.reset();

        self.events.push(GameEvent::ScoreChanged(0));
        self.events.push(GameEvent::TimeChanged(self.time_left));
        log::info!("session reset");
    }

    /// Launch the net toward a target point. No-op while stopped or while
    /// the previous net is still out.
    pub fn launch(&mut self, target: Vec2, now_ms: f64) {
        if !self.running {
            log::debug!("launch ignored: session stopped");
            return;
        }
        let launcher = self.launcher();
        self.net.launch(target, launcher, now_ms);
    }

    /// Per-frame tick: advance fish, advance the net, run hit checks
    pub fn frame(&mut self, now_ms: f64) {
        if !self.running {
            return;
        }

        self.pool
            .tick(self.bounds, &self.config, &mut self.rng, now_ms);

        let launcher = self.launcher();
        self.net
            .tick(self.bounds, &self.config, launcher, now_ms, &mut self.rng);

        if self.net.is_visible() {
            check_hits(
                &self.net,
                &mut self.pool,
                &self.config,
                &mut self.score,
                &mut self.events,
                now_ms,
            );
        }
    }

    /// 1 Hz countdown: decrement time-left and end the round at zero
    pub fn countdown_tick(&mut self) {
        if !self.running {
            return;
        }

        self.time_left = self.time_left.saturating_sub(1);
        self.events.push(GameEvent::TimeChanged(self.time_left));
        if self.time_left == 0 {
            self.end();
        }
    }

    /// Terminal event: surface the final score and clear visible entities
    fn end(&mut self) {
        self.running = false;
        self.events.push(GameEvent::GameOver {
            final_score: self.score,
        });
        self.pool.clear();
        self.net.reset();
        log::info!("game over, final score {}", self.score);
    }
}
