//! Collision and capture engine
//!
//! Circle-vs-circle overlap between the net and every fish, using the
//! classic half-sum-of-radii threshold: a hit needs
//! `distance < (net_r * pixel_ratio + fish_r * pixel_ratio) / 2`.
//! That is half the standard overlap distance, which tightens the hit zone
//! and is kept on purpose - gameplay feel depends on it.

use super::fish::FishPool;
use super::state::{GameEvent, Net};
use crate::config::GameConfig;
use crate::consts::RESPAWN_DELAY_MS;

/// Test every fish against the net, applying score, removal, respawn
/// scheduling, and capture events. Runs in every visible net phase.
/// A single call may register multiple hits.
pub fn check_hits(
    net: &Net,
    pool: &mut FishPool,
    config: &GameConfig,
    score: &mut u32,
    events: &mut Vec<GameEvent>,
    now_ms: f64,
) {
    let scaled_net = net.radius * config.pixel_ratio;

    let captured: Vec<u32> = pool
        .fishes
        .iter()
        .filter(|fish| {
            let scaled_fish = fish.radius * config.pixel_ratio;
            net.pos.distance(fish.pos) < (scaled_net + scaled_fish) / 2.0
        })
        .map(|fish| fish.id)
        .collect();

    for id in captured {
        if let Some(fish) = pool.remove(id) {
            let value = fish.class.score();
            *score += value;
            log::debug!("captured {:?} fish #{} for {}", fish.class, fish.id, value);

            events.push(GameEvent::ScoreChanged(*score));
            events.push(GameEvent::FishCaptured {
                pos: fish.pos,
                class: fish.class,
                value,
            });
            pool.schedule_respawn(now_ms + RESPAWN_DELAY_MS);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::{ColorClass, Fish, NetPhase};
    use glam::Vec2;

    fn deployed_net(pos: Vec2, radius: f32) -> Net {
        Net {
            pos,
            radius,
            phase: NetPhase::Deployed,
            ..Net::default()
        }
    }

    fn fish_at(id: u32, pos: Vec2, class: ColorClass) -> Fish {
        Fish {
            id,
            pos,
            vel: Vec2::ZERO,
            radius: class.radius(),
            class,
            turn_ticks: 0,
            turn_interval: 100,
        }
    }

    #[test]
    fn test_half_sum_threshold_exact() {
        // Net radius 30, Blue fish radius 20: hit zone is (30+20)/2 = 25,
        // not the geometric 50. The tighter rule must be preserved.
        let config = GameConfig::default();
        let net = deployed_net(Vec2::new(100.0, 100.0), 30.0);
        let mut score = 0;
        let mut events = Vec::new();

        let mut pool = FishPool::new();
        pool.fishes
            .push(fish_at(1, Vec2::new(125.1, 100.0), ColorClass::Blue));
        check_hits(&net, &mut pool, &config, &mut score, &mut events, 0.0);
        assert_eq!(pool.len(), 1, "fish at 25.1 px must survive");
        assert_eq!(score, 0);

        pool.fishes[0].pos = Vec2::new(124.9, 100.0);
        check_hits(&net, &mut pool, &config, &mut score, &mut events, 0.0);
        assert_eq!(pool.len(), 0, "fish at 24.9 px must be captured");
        assert_eq!(score, ColorClass::Blue.score());
    }

    #[test]
    fn test_capture_effects_and_respawn_scheduling() {
        let config = GameConfig::default();
        let net = deployed_net(Vec2::new(100.0, 100.0), 30.0);
        let mut score = 0;
        let mut events = Vec::new();

        let mut pool = FishPool::new();
        pool.fishes
            .push(fish_at(1, Vec2::new(100.0, 100.0), ColorClass::Amethyst));

        check_hits(&net, &mut pool, &config, &mut score, &mut events, 2000.0);

        assert_eq!(score, 100);
        assert_eq!(pool.len(), 0);
        assert_eq!(pool.pending_respawns(), 1);
        assert_eq!(
            events,
            vec![
                GameEvent::ScoreChanged(100),
                GameEvent::FishCaptured {
                    pos: Vec2::new(100.0, 100.0),
                    class: ColorClass::Amethyst,
                    value: 100,
                },
            ]
        );
    }

    #[test]
    fn test_multiple_hits_in_one_tick() {
        let config = GameConfig::default();
        let net = deployed_net(Vec2::new(100.0, 100.0), 30.0);
        let mut score = 0;
        let mut events = Vec::new();

        let mut pool = FishPool::new();
        pool.fishes
            .push(fish_at(1, Vec2::new(105.0, 100.0), ColorClass::Red));
        pool.fishes
            .push(fish_at(2, Vec2::new(100.0, 95.0), ColorClass::Gold));
        pool.fishes
            .push(fish_at(3, Vec2::new(400.0, 400.0), ColorClass::Blue));

        check_hits(&net, &mut pool, &config, &mut score, &mut events, 0.0);

        assert_eq!(score, 50 + 30);
        assert_eq!(pool.len(), 1);
        assert_eq!(pool.fishes[0].id, 3);
        assert_eq!(pool.pending_respawns(), 2);
    }

    #[test]
    fn test_pixel_ratio_scales_hit_zone() {
        // Threshold scales with the pixel ratio: at 2x, (60+40)/2 = 50
        let config = GameConfig {
            pixel_ratio: 2.0,
            ..GameConfig::default()
        };
        let net = deployed_net(Vec2::new(100.0, 100.0), 30.0);
        let mut score = 0;
        let mut events = Vec::new();

        let mut pool = FishPool::new();
        pool.fishes
            .push(fish_at(1, Vec2::new(140.0, 100.0), ColorClass::Blue));

        check_hits(&net, &mut pool, &config, &mut score, &mut events, 0.0);
        assert_eq!(pool.len(), 0, "40 px is a hit at pixel_ratio 2.0");
    }
}
