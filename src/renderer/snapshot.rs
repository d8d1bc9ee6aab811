//! Per-tick render snapshot

use serde::{Deserialize, Serialize};

use crate::sim::{GamePhase, GameState, Rect, Viewport, craft_rect, obstacle_rects};

/// One obstacle's two columns
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ObstacleRects {
    pub top: Rect,
    pub bottom: Rect,
}

/// Everything needed to draw one frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderSnapshot {
    pub viewport: Viewport,
    pub craft: Rect,
    /// Leftmost first
    pub obstacles: Vec<ObstacleRects>,
    pub score: u64,
    pub best_score: u64,
    pub phase: GamePhase,
    /// Game over with a qualifying score; the name prompt should be shown
    pub awaiting_name: bool,
}

impl RenderSnapshot {
    pub fn capture(state: &GameState, best_score: u64, awaiting_name: bool) -> Self {
        let obstacles = state
            .obstacles
            .iter()
            .map(|o| {
                let (top, bottom) = obstacle_rects(o, &state.dims, state.viewport);
                ObstacleRects { top, bottom }
            })
            .collect();

        Self {
            viewport: state.viewport,
            craft: craft_rect(&state.craft, &state.dims),
            obstacles,
            score: state.score,
            best_score,
            phase: state.phase,
            awaiting_name,
        }
    }
}
