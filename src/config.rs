//! Game configuration
//!
//! Fixed at session construction. Defaults match the classic tuning; hosts
//! may override individual fields via JSON.

use serde::{Deserialize, Serialize};

/// Effect-bearing game configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Initial fish population
    pub fish_count: usize,
    /// Net flight speed (px per tick)
    pub net_speed: f32,
    /// Session length (seconds)
    pub game_time: u32,
    /// Base fish speed before per-class multiplier and jitter (px per tick)
    pub base_fish_speed: f32,
    /// Maximum net radius when fully deployed
    pub net_size: f32,
    /// Time for the net to expand from minimum to maximum radius (ms)
    pub net_expand_time: f64,
    /// Time the deployed net stays open (ms)
    pub net_stay_time: f64,
    /// Rendering pixel ratio; scales radii in the hit test
    pub pixel_ratio: f32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            fish_count: 10,
            net_speed: 8.0,
            game_time: 60,
            base_fish_speed: 0.8,
            net_size: 30.0,
            net_expand_time: 300.0,
            net_stay_time: 500.0,
            pixel_ratio: 1.0,
        }
    }
}

impl GameConfig {
    /// Parse a config from JSON; missing fields fall back to defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
