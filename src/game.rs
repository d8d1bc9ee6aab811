//! Session orchestration
//!
//! `Game` wraps the pure simulation with everything that outlives a single
//! session: the personal best, the leaderboard and the storage they live in.
//! Presentation layers talk to it through `Command`s and read it back through
//! `RenderSnapshot`s; it never schedules frames itself.

use rand::{RngCore, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::highscores::{BestScore, Leaderboard, ScoreEntry};
use crate::persistence::Storage;
use crate::renderer::RenderSnapshot;
use crate::sim::{self, EndCause, GamePhase, GameState, TickInput, TickOutcome, Viewport};
use crate::tuning::Tuning;

/// Inputs the presentation layer can send
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Lift pressed (true) or released (false)
    Lift(bool),
    TogglePause,
    Restart,
    /// Name for a qualifying score; trimmed and capped on the way in
    SubmitName(String),
    /// Wipe the leaderboard. The caller must have confirmed with the player.
    ClearScores,
    Resize(Viewport),
}

/// Summary produced when a session ends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameOverReport {
    pub final_score: u64,
    pub cause: EndCause,
    /// The personal best was raised by this run
    pub new_best: bool,
    /// The leaderboard will take this score; a name is needed before restart
    pub qualifies: bool,
    /// Rank the entry would land at, if it would be kept
    pub potential_rank: Option<usize>,
}

/// A running game: current session plus persistent score state
#[derive(Debug)]
pub struct Game<S: Storage> {
    state: GameState,
    tuning: Tuning,
    best: BestScore,
    leaderboard: Leaderboard,
    storage: S,
    /// Seeds each new session
    seeds: Pcg32,
    lift_held: bool,
    report: Option<GameOverReport>,
    awaiting_name: bool,
}

impl<S: Storage> Game<S> {
    /// Start a game, loading tuning and scores from `storage`
    pub fn new(storage: S, viewport: Viewport, seed: u64) -> Self {
        let tuning = Tuning::load(&storage);
        Self::with_tuning(storage, tuning, viewport, seed)
    }

    /// Start a game with explicit tuning, loading scores from `storage`
    pub fn with_tuning(mut storage: S, tuning: Tuning, viewport: Viewport, seed: u64) -> Self {
        let tuning = tuning.sanitized();
        let best = BestScore::load(&storage);
        let leaderboard = Leaderboard::load(&mut storage);
        let mut seeds = Pcg32::seed_from_u64(seed);
        let state = GameState::new(seeds.next_u64(), viewport, &tuning);
        log::info!(
            "Game initialized: {}x{}, best {}, {} leaderboard entries",
            viewport.width,
            viewport.height,
            best.get(),
            leaderboard.len()
        );

        Self {
            state,
            tuning,
            best,
            leaderboard,
            storage,
            seeds,
            lift_held: false,
            report: None,
            awaiting_name: false,
        }
    }

    /// Apply one input
    pub fn handle(&mut self, command: Command) {
        match command {
            Command::Lift(pressed) => self.set_lift(pressed),
            Command::TogglePause => {
                self.toggle_pause();
            }
            Command::Restart => {
                self.restart();
            }
            Command::SubmitName(name) => {
                self.submit_name(&name);
            }
            Command::ClearScores => self.clear_scores(),
            Command::Resize(viewport) => self.resize(viewport),
        }
    }

    /// Latch the lift signal; ignored unless the session is running
    pub fn set_lift(&mut self, pressed: bool) {
        self.lift_held = pressed && self.state.phase == GamePhase::Running;
    }

    /// Pause or resume; returns the resulting phase
    pub fn toggle_pause(&mut self) -> GamePhase {
        self.lift_held = false;
        sim::toggle_pause(&mut self.state)
    }

    /// Run one frame of simulation
    pub fn frame(&mut self) -> TickOutcome {
        let input = TickInput {
            lift: self.lift_held,
        };
        let outcome = sim::tick(&mut self.state, &input, &self.tuning);
        if let TickOutcome::Ended(_) = outcome {
            self.on_game_over();
        }
        outcome
    }

    /// End the session from outside the tick pipeline
    ///
    /// Only the first trigger has any effect; later ones return None.
    pub fn trigger_game_over(&mut self, cause: EndCause) -> Option<GameOverReport> {
        if !sim::end_session(&mut self.state, cause) {
            return None;
        }
        self.on_game_over();
        self.report
    }

    fn on_game_over(&mut self) {
        self.lift_held = false;
        let final_score = self.state.score;

        let new_best = self.best.record(final_score);
        if new_best {
            self.best.save(&mut self.storage);
            log::info!("New personal best: {}", final_score);
        }

        let qualifies = self.leaderboard.qualifies(final_score);
        if qualifies {
            log::info!("Score {} qualifies for the leaderboard", final_score);
        }
        self.awaiting_name = qualifies;
        self.report = Some(GameOverReport {
            final_score,
            cause: self.state.end_cause.unwrap_or(EndCause::Collision),
            new_best,
            qualifies,
            potential_rank: self.leaderboard.potential_rank(final_score),
        });
    }

    /// Start a fresh session after a game over
    ///
    /// Refused while a qualifying score still waits for its name, and outside
    /// GameOver. Returns whether a new session started.
    pub fn restart(&mut self) -> bool {
        if self.state.phase != GamePhase::GameOver {
            log::debug!("Restart ignored in {:?}", self.state.phase);
            return false;
        }
        if self.awaiting_name {
            log::info!("Restart ignored: waiting for a leaderboard name");
            return false;
        }

        let seed = self.seeds.next_u64();
        self.state = GameState::new(seed, self.state.viewport, &self.tuning);
        self.lift_held = false;
        self.report = None;
        log::info!("Game restarted with seed: {}", seed);
        true
    }

    /// Store the pending qualifying score under `name`, then restart
    ///
    /// Returns the rank achieved, or None if no name was pending or the entry
    /// tied out of the table.
    pub fn submit_name(&mut self, name: &str) -> Option<usize> {
        if !self.awaiting_name {
            log::debug!("Name submission ignored: nothing pending");
            return None;
        }

        let entry = ScoreEntry::new(name, self.state.score);
        log::info!("Recording {} for {}", entry.score, entry.name);
        let rank = self.leaderboard.insert(entry);
        self.leaderboard.save(&mut self.storage);

        self.awaiting_name = false;
        self.restart();
        rank
    }

    /// Wipe the leaderboard, in memory and in storage
    pub fn clear_scores(&mut self) {
        self.leaderboard.clear();
        Leaderboard::erase(&mut self.storage);
    }

    /// Apply a new viewport; takes effect from the next tick
    pub fn resize(&mut self, viewport: Viewport) {
        self.state.resize(viewport, &self.tuning);
    }

    /// Read-only view for rendering
    pub fn snapshot(&self) -> RenderSnapshot {
        RenderSnapshot::capture(&self.state, self.best.get(), self.awaiting_name)
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn phase(&self) -> GamePhase {
        self.state.phase
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    pub fn best_score(&self) -> u64 {
        self.best.get()
    }

    pub fn leaderboard(&self) -> &Leaderboard {
        &self.leaderboard
    }

    /// Report for the most recent game over, cleared on restart
    pub fn last_report(&self) -> Option<GameOverReport> {
        self.report
    }

    pub fn awaiting_name(&self) -> bool {
        self.awaiting_name
    }

    pub fn lift_held(&self) -> bool {
        self.lift_held
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn into_storage(self) -> S {
        self.storage
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::MemoryStorage;

    fn new_game() -> Game<MemoryStorage> {
        Game::new(MemoryStorage::new(), Viewport::new(800.0, 400.0), 1)
    }

    /// Run frames until the session ends
    fn play_out(game: &mut Game<MemoryStorage>) {
        for _ in 0..10_000 {
            if let TickOutcome::Ended(_) = game.frame() {
                return;
            }
        }
        panic!("session never ended");
    }

    #[test]
    fn test_falling_craft_ends_and_records_best() {
        let mut game = new_game();
        play_out(&mut game);

        let report = game.last_report().unwrap();
        assert_eq!(report.cause, EndCause::OutOfBounds);
        assert!(report.final_score > 0);
        assert!(report.new_best);
        assert!(report.qualifies);
        assert_eq!(report.potential_rank, Some(1));
        assert_eq!(game.best_score(), report.final_score);

        let stored = BestScore::load(game.storage()).get();
        assert_eq!(stored, report.final_score);
    }

    #[test]
    fn test_game_over_trigger_is_idempotent() {
        let mut game = new_game();
        for _ in 0..5 {
            game.frame();
        }
        let first = game.trigger_game_over(EndCause::Collision);
        let snapshot = game.snapshot();
        assert!(first.is_some());
        assert_eq!(game.trigger_game_over(EndCause::OutOfBounds), None);
        assert_eq!(game.snapshot(), snapshot);
        assert_eq!(game.last_report(), first);
    }

    #[test]
    fn test_restart_waits_for_name() {
        let mut game = new_game();
        play_out(&mut game);
        let score = game.state().score;

        assert!(game.awaiting_name());
        assert!(!game.restart());
        assert_eq!(game.phase(), GamePhase::GameOver);

        assert_eq!(game.submit_name("  Ada Lovelace  "), Some(1));
        assert_eq!(game.phase(), GamePhase::Running);
        assert_eq!(game.state().score, 0);
        assert_eq!(game.state().time_ticks, 0);

        let entry = &game.leaderboard().entries()[0];
        assert_eq!(entry.name, "Ada Lovela");
        assert_eq!(entry.score, score);

        let stored = Leaderboard::load(&mut game.into_storage());
        assert_eq!(stored.len(), 1);
    }

    #[test]
    fn test_restart_only_from_game_over() {
        let mut game = new_game();
        assert!(!game.restart());
        assert_eq!(game.submit_name("x"), None);
    }

    #[test]
    fn test_zero_score_restarts_without_name() {
        let mut game = new_game();
        game.trigger_game_over(EndCause::Collision);
        let report = game.last_report().unwrap();
        assert_eq!(report.final_score, 0);
        assert!(!report.qualifies);
        assert!(!report.new_best);
        assert!(game.restart());
    }

    #[test]
    fn test_lift_ignored_while_paused() {
        let mut game = new_game();
        game.handle(Command::TogglePause);
        game.handle(Command::Lift(true));
        assert!(!game.lift_held());
        assert_eq!(game.frame(), TickOutcome::Skipped);

        game.handle(Command::TogglePause);
        game.handle(Command::Lift(true));
        assert!(game.lift_held());
        game.frame();
        assert!(game.state().craft.vel_y < 0.0);
    }

    #[test]
    fn test_best_score_persists_across_games() {
        let mut game = new_game();
        play_out(&mut game);
        let best = game.best_score();
        game.submit_name("");

        let game = Game::new(game.into_storage(), Viewport::new(800.0, 400.0), 2);
        assert_eq!(game.best_score(), best);
        assert_eq!(game.leaderboard().entries()[0].name, "Player");
    }

    #[test]
    fn test_clear_scores() {
        let mut game = new_game();
        play_out(&mut game);
        game.submit_name("a");
        game.handle(Command::ClearScores);
        assert!(game.leaderboard().is_empty());
        let storage = game.into_storage();
        assert!(!storage.contains(Leaderboard::STORAGE_KEY));
    }

    #[test]
    fn test_resize_between_frames() {
        let mut game = new_game();
        game.handle(Command::Resize(Viewport::new(400.0, 200.0)));
        let snap = game.snapshot();
        assert!((snap.craft.size.y - 12.5).abs() < 1e-4);
        assert_eq!(snap.viewport, Viewport::new(400.0, 200.0));
    }
}
