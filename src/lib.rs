//! Heli Run - A side-scrolling cave flyer arcade game
//!
//! Core modules:
//! - `sim`: Frame-stepped simulation (craft physics, obstacle track, collisions, session phases)
//! - `game`: Session orchestration (best score, leaderboard qualification, commands)
//! - `highscores`: Top-10 leaderboard and personal best
//! - `persistence`: Key/value storage backends
//! - `renderer`: Read-only render snapshots for the presentation layer
//! - `platform`: Frame loop and native/web shells
//! - `tuning`: Data-driven game balance

pub mod autopilot;
pub mod game;
pub mod highscores;
pub mod persistence;
pub mod platform;
pub mod renderer;
pub mod sim;
pub mod tuning;

pub use game::{Command, Game, GameOverReport};
pub use highscores::{BestScore, Leaderboard, ScoreEntry};
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Viewport height the size ratios below were authored against
    pub const BASE_VIEWPORT_HEIGHT: f32 = 400.0;

    /// Craft size, as a fraction of viewport height
    pub const CRAFT_WIDTH_RATIO: f32 = 60.0 / BASE_VIEWPORT_HEIGHT;
    pub const CRAFT_HEIGHT_RATIO: f32 = 25.0 / BASE_VIEWPORT_HEIGHT;
    /// Craft horizontal position, as a fraction of viewport width
    pub const CRAFT_X_RATIO: f32 = 0.15;

    /// Obstacle geometry, as fractions of viewport height
    pub const OBSTACLE_WIDTH_RATIO: f32 = 70.0 / BASE_VIEWPORT_HEIGHT;
    pub const OBSTACLE_GAP_RATIO: f32 = 140.0 / BASE_VIEWPORT_HEIGHT;
    pub const OBSTACLE_MIN_HEIGHT_RATIO: f32 = 40.0 / BASE_VIEWPORT_HEIGHT;

    /// Downward acceleration per tick (pixels/tick²)
    pub const GRAVITY: f32 = 0.14;
    /// Upward acceleration per tick while lifting (negative = up)
    pub const LIFT: f32 = -0.35;
    /// Velocity clamp in either direction (pixels/tick)
    pub const MAX_VELOCITY: f32 = 6.0;

    /// Leftward obstacle motion per tick (pixels/tick)
    pub const OBSTACLE_SPEED: f32 = 3.5;
    /// A new obstacle every N ticks
    pub const OBSTACLE_FREQUENCY: u64 = 100;
    /// The session's first obstacle starts this far across the viewport
    pub const FIRST_OBSTACLE_OFFSET: f32 = 0.9;
}
