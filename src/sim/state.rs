//! Game state and core simulation types
//!
//! Everything the render surface and presentation sink need to observe
//! lives here as plain serializable data.

use std::collections::VecDeque;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Fish color class - fixes score value, speed multiplier, and body size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColorClass {
    Red,
    Gold,
    Blue,
    /// The rare gem fish - bigger, faster, worth the most
    Amethyst,
}

impl ColorClass {
    /// All classes, in spawn-roll order
    pub const ALL: [ColorClass; 4] = [
        ColorClass::Red,
        ColorClass::Gold,
        ColorClass::Blue,
        ColorClass::Amethyst,
    ];

    /// Score credited when a fish of this class is captured
    pub fn score(&self) -> u32 {
        match self {
            ColorClass::Red => 50,
            ColorClass::Gold => 30,
            ColorClass::Blue => 10,
            ColorClass::Amethyst => 100,
        }
    }

    /// Speed multiplier applied on top of the configured base speed
    pub fn speed_multiplier(&self) -> f32 {
        match self {
            ColorClass::Red => 1.2,
            ColorClass::Gold => 1.0,
            ColorClass::Blue => 0.8,
            ColorClass::Amethyst => 1.5,
        }
    }

    /// Body radius in px
    pub fn radius(&self) -> f32 {
        match self {
            ColorClass::Amethyst => 25.0,
            _ => 20.0,
        }
    }

    /// CSS color for the render surface
    pub fn hex_color(&self) -> &'static str {
        match self {
            ColorClass::Red => "#FF4444",
            ColorClass::Gold => "#FFD700",
            ColorClass::Blue => "#00BFFF",
            ColorClass::Amethyst => "#9932CC",
        }
    }
}

/// A fish entity roaming the surface
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Fish {
    pub id: u32,
    pub pos: Vec2,
    /// Velocity: unit heading scaled by jittered base speed
    pub vel: Vec2,
    pub radius: f32,
    pub class: ColorClass,
    /// Ticks since the last heading change
    pub turn_ticks: u32,
    /// Ticks between heading changes, rolled per fish
    pub turn_interval: u32,
}

/// Phase of the single net instance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum NetPhase {
    /// Invisible, ready to launch
    #[default]
    Idle,
    /// Traveling from the launcher toward the aim point
    Flying,
    /// Opening up to full radius
    Expanding,
    /// Held open at full radius
    Deployed,
    /// Pulling back toward the launcher
    Retracting,
}

/// A fading trail particle emitted behind the flying net
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TrailParticle {
    /// Position relative to the net center
    pub offset: Vec2,
    pub size: f32,
    pub alpha: f32,
}

/// The single net entity
///
/// At most one net is ever active; `phase == Idle` means invisible.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Net {
    pub pos: Vec2,
    /// Launch angle (radians, y-down)
    pub angle: f32,
    pub radius: f32,
    pub phase: NetPhase,
    /// Host-clock timestamp of the last phase entry (ms)
    pub entered_ms: f64,
    /// Bounded trail buffer, oldest first
    pub trail: VecDeque<TrailParticle>,
}

impl Default for Net {
    fn default() -> Self {
        Self {
            pos: Vec2::ZERO,
            angle: -std::f32::consts::FRAC_PI_2, // Aim straight up
            radius: NET_MIN_RADIUS,
            phase: NetPhase::Idle,
            entered_ms: 0.0,
            trail: VecDeque::with_capacity(TRAIL_MAX_PARTICLES),
        }
    }
}

impl Net {
    /// Whether the net is drawn and participates in hit checks
    pub fn is_visible(&self) -> bool {
        self.phase != NetPhase::Idle
    }
}

/// Events surfaced to the presentation layer, drained once per frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    ScoreChanged(u32),
    TimeChanged(u32),
    /// A fish was netted; the render surface draws the capture effect here
    FishCaptured {
        pos: Vec2,
        class: ColorClass,
        value: u32,
    },
    GameOver {
        final_score: u32,
    },
}

/// Read-only view of the session for the render surface
#[derive(Debug, Serialize)]
pub struct Snapshot<'a> {
    pub score: u32,
    pub time_left: u32,
    pub running: bool,
    pub fishes: &'a [Fish],
    pub net: &'a Net,
}
