//! Platform abstraction layer
//!
//! The simulation never schedules itself. A platform shell receives frame
//! signals (a native loop, `requestAnimationFrame` on the web) and calls
//! `FrameLoop::step` once per signal; the loop decides whether the frame runs,
//! is skipped, or ends the loop.
//!
//! - `native`: headless runner driven by the autopilot
//! - `web`: wasm-bindgen surface for a browser presentation layer

#[cfg(not(target_arch = "wasm32"))]
pub mod native;
#[cfg(target_arch = "wasm32")]
pub mod web;

use crate::game::Game;
use crate::persistence::Storage;
use crate::renderer::Renderer;
use crate::sim::{GamePhase, TickOutcome};

/// Whether the shell should request another frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Stop,
}

/// Start/stop state of the frame-driven loop
#[derive(Debug, Clone, Default)]
pub struct FrameLoop {
    running: bool,
    frames: u64,
}

impl FrameLoop {
    /// A loop ready to run
    pub fn new() -> Self {
        Self {
            running: true,
            frames: 0,
        }
    }

    /// (Re)start after a restart
    pub fn start(&mut self) {
        self.running = true;
    }

    /// Cancel; the next step returns Stop
    pub fn stop(&mut self) {
        self.running = false;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Frames that ran the simulation
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Handle one frame signal
    ///
    /// Paused frames are skipped but keep the loop alive so an unpause can
    /// land. The frame that ends the session is still rendered, then the loop
    /// stops.
    pub fn step<S: Storage, R: Renderer>(
        &mut self,
        game: &mut Game<S>,
        renderer: &mut R,
    ) -> LoopControl {
        if !self.running {
            return LoopControl::Stop;
        }

        match game.phase() {
            GamePhase::GameOver => {
                self.running = false;
                LoopControl::Stop
            }
            GamePhase::Paused => LoopControl::Continue,
            GamePhase::Running => {
                let outcome = game.frame();
                self.frames += 1;
                renderer.render(&game.snapshot());
                if let TickOutcome::Ended(_) = outcome {
                    self.running = false;
                    LoopControl::Stop
                } else {
                    LoopControl::Continue
                }
            }
        }
    }
}
