//! Demo autopilot
//!
//! Steers the craft toward the middle of the next gap. Used by the headless
//! runner for attract-mode style runs; it only reads state and returns the
//! lift signal a player would send.

use crate::sim::GameState;

/// Ticks of velocity to project when deciding whether to lift
const LOOKAHEAD_TICKS: f32 = 8.0;

/// Vertical target for the craft's center: the next gap's middle, or the
/// middle of the viewport when no obstacle is ahead
pub fn target_center_y(state: &GameState) -> f32 {
    let craft_left = state.dims.craft_x;
    state
        .obstacles
        .iter()
        .find(|o| o.x + state.dims.obstacle_width >= craft_left)
        .map(|o| (o.top_height + o.gap_start_y) / 2.0)
        .unwrap_or(state.viewport.height / 2.0)
}

/// Lift when the projected craft center would sink below the target
pub fn should_lift(state: &GameState) -> bool {
    let center = state.craft.y + state.dims.craft_height / 2.0;
    let projected = center + state.craft.vel_y * LOOKAHEAD_TICKS;
    projected > target_center_y(state)
}
