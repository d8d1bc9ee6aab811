//! Browser shell (wasm32 only)
//!
//! The page owns the canvas, the DOM and `requestAnimationFrame`; it calls
//! `frame()` once per animation frame and keeps requesting frames while it
//! returns true. Input handlers forward to the command methods, and the
//! page draws from the JSON snapshot.

use wasm_bindgen::prelude::*;

use super::{FrameLoop, LoopControl};
use crate::game::{Command, Game};
use crate::persistence::{LocalStorage, MemoryStorage, Storage, StorageError};
use crate::renderer::{RenderSnapshot, Renderer};
use crate::sim::Viewport;

/// LocalStorage when the page has it, otherwise an in-memory fallback
#[derive(Debug)]
enum WebStorage {
    Local(LocalStorage),
    Memory(MemoryStorage),
}

impl WebStorage {
    fn open() -> Self {
        match LocalStorage::open() {
            Ok(storage) => Self::Local(storage),
            Err(e) => {
                log::warn!("{}; scores will not persist", e);
                Self::Memory(MemoryStorage::new())
            }
        }
    }
}

impl Storage for WebStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        match self {
            Self::Local(s) => s.get(key),
            Self::Memory(s) => s.get(key),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        match self {
            Self::Local(s) => s.set(key, value),
            Self::Memory(s) => s.set(key, value),
        }
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        match self {
            Self::Local(s) => s.remove(key),
            Self::Memory(s) => s.remove(key),
        }
    }
}

/// Keeps the latest snapshot for the page to pull
#[derive(Debug, Default)]
struct LatestFrame {
    snapshot: Option<RenderSnapshot>,
}

impl Renderer for LatestFrame {
    fn render(&mut self, snapshot: &RenderSnapshot) {
        self.snapshot = Some(snapshot.clone());
    }
}

/// Game handle exported to JavaScript
#[wasm_bindgen]
pub struct WebGame {
    game: Game<WebStorage>,
    frame_loop: FrameLoop,
    latest: LatestFrame,
}

#[wasm_bindgen]
impl WebGame {
    #[wasm_bindgen(constructor)]
    pub fn new(width: f32, height: f32) -> WebGame {
        let seed = js_sys::Date::now() as u64;
        let game = Game::new(WebStorage::open(), Viewport::new(width, height), seed);
        log::info!("Game initialized with seed: {}", seed);
        WebGame {
            game,
            frame_loop: FrameLoop::new(),
            latest: LatestFrame::default(),
        }
    }

    /// Run one animation frame; false means stop requesting frames
    pub fn frame(&mut self) -> bool {
        self.frame_loop.step(&mut self.game, &mut self.latest) == LoopControl::Continue
    }

    pub fn set_lift(&mut self, pressed: bool) {
        self.game.handle(Command::Lift(pressed));
    }

    pub fn toggle_pause(&mut self) {
        self.game.handle(Command::TogglePause);
    }

    /// Returns true if a new session started (the page restarts its frames)
    pub fn restart(&mut self) -> bool {
        let restarted = self.game.restart();
        if restarted {
            self.frame_loop.start();
        }
        restarted
    }

    /// Returns the rank achieved, or 0 if the score was not kept
    pub fn submit_name(&mut self, name: &str) -> u32 {
        let rank = self.game.submit_name(name);
        if self.game.phase() != crate::sim::GamePhase::GameOver {
            self.frame_loop.start();
        }
        rank.map_or(0, |r| r as u32)
    }

    /// Call only after the player confirmed
    pub fn clear_scores(&mut self) {
        self.game.handle(Command::ClearScores);
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        self.game.handle(Command::Resize(Viewport::new(width, height)));
    }

    /// Current render snapshot as JSON
    pub fn snapshot_json(&self) -> String {
        let snapshot = self
            .latest
            .snapshot
            .clone()
            .unwrap_or_else(|| self.game.snapshot());
        serde_json::to_string(&snapshot).unwrap_or_default()
    }

    /// Fresh snapshot regardless of the loop (after pause, resize, restart)
    pub fn current_json(&self) -> String {
        serde_json::to_string(&self.game.snapshot()).unwrap_or_default()
    }

    /// Leaderboard as a JSON array of `{name, score}`
    pub fn leaderboard_json(&self) -> String {
        serde_json::to_string(self.game.leaderboard()).unwrap_or_default()
    }

    pub fn best_score(&self) -> f64 {
        self.game.best_score() as f64
    }
}

#[wasm_bindgen(start)]
pub fn wasm_start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        web_sys::console::warn_1(&"Logger already initialized".into());
    }
    log::info!("Heli Run starting...");
}
