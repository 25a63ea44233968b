//! Netcast headless demo driver
//!
//! Runs one full session against a simulated 60 Hz frame clock and a 1 Hz
//! countdown, with a simple aim-at-nearest-fish policy standing in for the
//! player. Useful for tuning and as a reference host implementation.
//!
//! Usage: `netcast [config.json] [seed]`

use std::cmp::Ordering;

use glam::Vec2;
use netcast::sim::{GameEvent, NetPhase};
use netcast::{GameConfig, GameSession};

const FRAME_MS: f64 = 1000.0 / 60.0;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let config = match std::env::args().nth(1) {
        Some(path) => GameConfig::from_json(&std::fs::read_to_string(path)?)?,
        None => GameConfig::default(),
    };
    let seed = match std::env::args().nth(2) {
        Some(s) => s.parse()?,
        None => 0xCA57,
    };

    let bounds = Vec2::new(800.0, 600.0);
    let mut session = GameSession::new(config, bounds, seed);
    log::info!("netcast demo starting with seed {seed}");

    let mut now = 0.0;
    let mut next_second = 1000.0;
    session.start(now);

    while session.is_running() {
        now += FRAME_MS;

        // The two host timelines: per-frame tick plus 1 Hz countdown
        if now >= next_second {
            session.countdown_tick();
            next_second += 1000.0;
        }

        // Stand-in player: whenever the net is home, cast at the nearest fish
        if session.net().phase == NetPhase::Idle {
            let launcher = session.launcher();
            let target = session
                .fishes()
                .iter()
                .min_by(|a, b| {
                    a.pos
                        .distance(launcher)
                        .partial_cmp(&b.pos.distance(launcher))
                        .unwrap_or(Ordering::Equal)
                })
                .map(|f| f.pos);
            if let Some(target) = target {
                session.launch(target, now);
            }
        }

        session.frame(now);

        for event in session.drain_events() {
            match event {
                GameEvent::FishCaptured { class, value, .. } => {
                    log::info!("caught a {:?} fish (+{})", class, value);
                }
                GameEvent::GameOver { final_score } => {
                    println!("Game over! Final score: {final_score}");
                }
                _ => {}
            }
        }
    }

    Ok(())
}
