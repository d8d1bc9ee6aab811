//! Frame-stepped simulation module
//!
//! All gameplay logic lives here. This module must stay pure:
//! - One discrete step per frame, no wall-clock time
//! - Seeded RNG only
//! - No rendering, storage or platform dependencies

pub mod collision;
pub mod physics;
pub mod state;
pub mod tick;
pub mod track;

pub use collision::{Rect, check as check_collision, craft_rect, obstacle_rects};
pub use physics::PhysicsOutcome;
pub use state::{Craft, Dimensions, EndCause, GamePhase, GameState, Obstacle, Viewport};
pub use tick::{TickInput, TickOutcome, end_session, tick, toggle_pause};
