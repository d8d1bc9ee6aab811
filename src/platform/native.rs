//! Native headless shell
//!
//! Runs sessions as fast as possible with the autopilot on the stick. Frames
//! are unpaced: gameplay is frame-coupled, so running faster than a display
//! changes nothing about the outcome.

use super::{FrameLoop, LoopControl};
use crate::autopilot;
use crate::game::{Game, GameOverReport};
use crate::persistence::Storage;
use crate::renderer::{RenderSnapshot, Renderer};

/// Renderer that logs a summary line every `every` frames at debug level
#[derive(Debug, Clone)]
pub struct LogRenderer {
    every: u64,
    seen: u64,
}

impl LogRenderer {
    pub fn new(every: u64) -> Self {
        Self {
            every: every.max(1),
            seen: 0,
        }
    }
}

impl Renderer for LogRenderer {
    fn render(&mut self, snapshot: &RenderSnapshot) {
        self.seen += 1;
        if self.seen.is_multiple_of(self.every) {
            log::debug!(
                "score {:>6} | craft y {:>7.2} | {} obstacles | {:?}",
                snapshot.score,
                snapshot.craft.pos.y,
                snapshot.obstacles.len(),
                snapshot.phase
            );
        }
    }
}

/// How a headless session finished
#[derive(Debug, Clone)]
pub struct RunSummary {
    /// Frames simulated
    pub frames: u64,
    /// Set if the session ended; None if the frame budget ran out first
    pub report: Option<GameOverReport>,
}

/// Drive one session with the autopilot for at most `max_frames` frames
pub fn run_session<S: Storage, R: Renderer>(
    game: &mut Game<S>,
    renderer: &mut R,
    max_frames: u64,
) -> RunSummary {
    let mut frame_loop = FrameLoop::new();

    while frame_loop.frames() < max_frames {
        let lift = autopilot::should_lift(game.state());
        game.set_lift(lift);
        if frame_loop.step(game, renderer) == LoopControl::Stop {
            break;
        }
    }

    RunSummary {
        frames: frame_loop.frames(),
        report: game.last_report(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::MemoryStorage;
    use crate::renderer::NullRenderer;
    use crate::sim::{GamePhase, Viewport};

    #[test]
    fn test_frame_budget_respected() {
        let mut game = Game::new(MemoryStorage::new(), Viewport::new(800.0, 400.0), 4);
        let summary = run_session(&mut game, &mut NullRenderer, 50);
        assert_eq!(summary.frames, 50);
        assert!(summary.report.is_none());
        assert_eq!(game.phase(), GamePhase::Running);
        assert_eq!(game.state().score, 50);
    }

    #[test]
    fn test_log_renderer_counts_frames() {
        let mut game = Game::new(MemoryStorage::new(), Viewport::new(800.0, 400.0), 4);
        let mut renderer = LogRenderer::new(10);
        run_session(&mut game, &mut renderer, 25);
        assert_eq!(renderer.seen, 25);
    }
}
