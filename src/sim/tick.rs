//! Per-frame simulation tick
//!
//! Core game loop step. Strictly ordered: craft physics, obstacle track,
//! collision check, then scoring. The caller renders after `tick` returns.

use super::state::{EndCause, GamePhase, GameState};
use super::{collision, physics, track};
use crate::tuning::Tuning;

/// Input commands for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Lift held this frame
    pub lift: bool,
}

/// What a tick did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Paused or already over; nothing moved
    Skipped,
    /// Full pipeline ran and the score went up
    Advanced,
    /// This tick ended the session
    Ended(EndCause),
}

/// Flip between Running and Paused; no effect once the game is over
///
/// Returns the resulting phase.
pub fn toggle_pause(state: &mut GameState) -> GamePhase {
    match state.phase {
        GamePhase::Running => {
            state.phase = GamePhase::Paused;
            state.lifting = false;
            log::info!("Paused at score {}", state.score);
        }
        GamePhase::Paused => {
            state.phase = GamePhase::Running;
            log::info!("Resumed");
        }
        GamePhase::GameOver => {}
    }
    state.phase
}

/// Move the session into GameOver
///
/// Returns false (and changes nothing) if it was already over, so repeated
/// triggers are harmless.
pub fn end_session(state: &mut GameState, cause: EndCause) -> bool {
    if state.phase == GamePhase::GameOver {
        return false;
    }
    state.phase = GamePhase::GameOver;
    state.lifting = false;
    state.end_cause = Some(cause);
    log::info!(
        "Game over ({:?}) after {} ticks, score {}",
        cause,
        state.time_ticks,
        state.score
    );
    true
}

/// Advance the game state by one frame
///
/// Pausing goes through `toggle_pause` between frames. `tuning` must be
/// `Tuning::sanitized()`.
pub fn tick(state: &mut GameState, input: &TickInput, tuning: &Tuning) -> TickOutcome {
    // Don't tick if paused or game over
    if state.phase != GamePhase::Running {
        return TickOutcome::Skipped;
    }

    state.lifting = input.lift;

    let outcome = physics::update(
        &mut state.craft,
        state.lifting,
        tuning,
        &state.dims,
        state.viewport,
    );
    if !outcome.in_bounds {
        end_session(state, EndCause::OutOfBounds);
        return TickOutcome::Ended(EndCause::OutOfBounds);
    }

    if track::maybe_generate(
        &mut state.obstacles,
        state.time_ticks,
        tuning.obstacle_frequency,
        &state.dims,
        state.viewport,
        &mut state.rng,
    ) {
        log::debug!(
            "Tick {}: obstacle spawned ({} on track)",
            state.time_ticks,
            state.obstacles.len()
        );
    }
    track::advance(&mut state.obstacles, tuning.obstacle_speed, &state.dims);

    if collision::check(&state.craft, &state.obstacles, &state.dims, state.viewport) {
        end_session(state, EndCause::Collision);
        return TickOutcome::Ended(EndCause::Collision);
    }

    state.score += 1;
    state.time_ticks += 1;
    TickOutcome::Advanced
}
