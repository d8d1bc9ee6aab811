//! Game state and core simulation types
//!
//! Everything a session needs between ticks lives in `GameState`; the update
//! functions in the sibling modules take it by reference and never reach for
//! globals.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::track;
use crate::tuning::Tuning;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Running,
    /// Game is paused (frames still arrive, nothing advances)
    Paused,
    /// Run ended; only a restart leaves this phase
    GameOver,
}

/// Why a session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EndCause {
    /// Craft left the top or bottom of the viewport
    OutOfBounds,
    /// Craft overlapped an obstacle
    Collision,
}

/// Externally supplied drawing area, in pixels
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Sizes derived from the viewport so proportions hold at any resolution
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Dimensions {
    pub craft_width: f32,
    pub craft_height: f32,
    /// Fixed horizontal position of the craft's left edge
    pub craft_x: f32,
    pub obstacle_width: f32,
    pub obstacle_gap: f32,
    pub obstacle_min_height: f32,
}

impl Dimensions {
    pub fn from_viewport(viewport: Viewport, tuning: &Tuning) -> Self {
        let h = viewport.height;
        Self {
            craft_width: h * tuning.craft_width_ratio,
            craft_height: h * tuning.craft_height_ratio,
            craft_x: viewport.width * tuning.craft_x_ratio,
            obstacle_width: h * tuning.obstacle_width_ratio,
            obstacle_gap: h * tuning.obstacle_gap_ratio,
            obstacle_min_height: h * tuning.obstacle_min_height_ratio,
        }
    }
}

/// The player's craft (vertical motion only)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Craft {
    /// Top edge, pixels from the top of the viewport
    pub y: f32,
    /// Pixels per tick, positive = down
    pub vel_y: f32,
}

impl Craft {
    /// Craft centered vertically, at rest
    pub fn centered(viewport: Viewport, dims: &Dimensions) -> Self {
        Self {
            y: viewport.height / 2.0 - dims.craft_height / 2.0,
            vel_y: 0.0,
        }
    }
}

/// A pair of columns with a gap between them
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    /// Left edge
    pub x: f32,
    /// Height of the top column
    pub top_height: f32,
    /// Where the bottom column starts (`top_height + gap`)
    pub gap_start_y: f32,
}

/// Complete session state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Session seed for reproducibility
    pub seed: u64,
    /// Obstacle RNG
    pub rng: Pcg32,
    pub viewport: Viewport,
    pub dims: Dimensions,
    pub craft: Craft,
    /// Obstacles, leftmost first
    pub obstacles: Vec<Obstacle>,
    /// Ticks survived
    pub score: u64,
    /// Completed ticks
    pub time_ticks: u64,
    /// Current phase
    pub phase: GamePhase,
    /// Latched lift input
    pub lifting: bool,
    /// Set on the transition into GameOver
    pub end_cause: Option<EndCause>,
}

impl GameState {
    /// Create a fresh session with the given seed
    ///
    /// The first obstacle is placed immediately, closer than usual, to cut
    /// the empty warmup stretch. `tuning` must be `Tuning::sanitized()`.
    pub fn new(seed: u64, viewport: Viewport, tuning: &Tuning) -> Self {
        let dims = Dimensions::from_viewport(viewport, tuning);
        let mut state = Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            viewport,
            dims,
            craft: Craft::centered(viewport, &dims),
            obstacles: Vec::new(),
            score: 0,
            time_ticks: 0,
            phase: GamePhase::Running,
            lifting: false,
            end_cause: None,
        };

        track::generate(&mut state.obstacles, &dims, viewport, &mut state.rng);
        if let Some(first) = state.obstacles.first_mut() {
            first.x = viewport.width * tuning.first_obstacle_offset;
        }

        state
    }

    /// Apply a new viewport between ticks
    ///
    /// Derived sizes are recomputed at once; positions are kept.
    pub fn resize(&mut self, viewport: Viewport, tuning: &Tuning) {
        self.viewport = viewport;
        self.dims = Dimensions::from_viewport(viewport, tuning);
        log::debug!("Viewport resized to {}x{}", viewport.width, viewport.height);
    }

    pub fn is_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimensions_at_base_height() {
        let dims = Dimensions::from_viewport(Viewport::new(800.0, 400.0), &Tuning::default());
        assert!((dims.craft_width - 60.0).abs() < 1e-4);
        assert!((dims.craft_height - 25.0).abs() < 1e-4);
        assert!((dims.craft_x - 120.0).abs() < 1e-4);
        assert!((dims.obstacle_width - 70.0).abs() < 1e-4);
        assert!((dims.obstacle_gap - 140.0).abs() < 1e-4);
        assert!((dims.obstacle_min_height - 40.0).abs() < 1e-4);
    }

    #[test]
    fn test_new_session() {
        let state = GameState::new(7, Viewport::new(800.0, 400.0), &Tuning::default());
        assert_eq!(state.phase, GamePhase::Running);
        assert_eq!(state.score, 0);
        assert_eq!(state.time_ticks, 0);
        assert!((state.craft.y - 187.5).abs() < 1e-4);
        assert_eq!(state.craft.vel_y, 0.0);

        assert_eq!(state.obstacles.len(), 1);
        assert!((state.obstacles[0].x - 720.0).abs() < 1e-3);
    }

    #[test]
    fn test_degenerate_viewport_has_no_first_obstacle() {
        let tuning = Tuning {
            obstacle_gap_ratio: 0.9,
            ..Default::default()
        };
        let state = GameState::new(7, Viewport::new(800.0, 400.0), &tuning);
        assert!(state.obstacles.is_empty());
    }

    #[test]
    fn test_resize_recomputes_dimensions() {
        let tuning = Tuning::default();
        let mut state = GameState::new(7, Viewport::new(800.0, 400.0), &tuning);
        let y = state.craft.y;
        state.resize(Viewport::new(1600.0, 800.0), &tuning);
        assert!((state.dims.craft_height - 50.0).abs() < 1e-4);
        assert!((state.dims.craft_x - 240.0).abs() < 1e-4);
        assert_eq!(state.craft.y, y);
    }
}
