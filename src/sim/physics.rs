//! Craft vertical integration
//!
//! One explicit Euler step per tick. There is no timestep normalization:
//! the game assumes a steady frame cadence, so gameplay speed follows the
//! display refresh rate.

use super::state::{Craft, Dimensions, Viewport};
use crate::tuning::Tuning;

/// Result of a physics step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhysicsOutcome {
    /// False once any part of the craft leaves the viewport vertically
    pub in_bounds: bool,
}

/// Advance the craft by one tick
///
/// Expects a `Tuning::sanitized()` value; an invalid clamp gives
/// meaningless motion but never panics.
pub fn update(
    craft: &mut Craft,
    lifting: bool,
    tuning: &Tuning,
    dims: &Dimensions,
    viewport: Viewport,
) -> PhysicsOutcome {
    craft.vel_y += if lifting { tuning.lift } else { tuning.gravity };
    craft.vel_y = craft
        .vel_y
        .max(-tuning.max_velocity)
        .min(tuning.max_velocity);
    craft.y += craft.vel_y;

    PhysicsOutcome {
        in_bounds: craft.y >= 0.0 && craft.y + dims.craft_height <= viewport.height,
    }
}
