//! Property tests for simulation and leaderboard invariants.
//!
//! These tests use `proptest` to generate random input sequences, seeds and
//! score streams, and check that the invariants hold after every step.

use heli_run::highscores::{Leaderboard, MAX_HIGH_SCORES, ScoreEntry};
use heli_run::sim::{GamePhase, GameState, TickInput, Viewport, tick, track};
use heli_run::Tuning;
use proptest::prelude::*;
use rand::SeedableRng;
use rand_pcg::Pcg32;

/// Viewport sizes from tiny (degenerate) to large
fn viewport_strategy() -> impl Strategy<Value = Viewport> {
    (100u32..2000, 50u32..1200).prop_map(|(w, h)| Viewport::new(w as f32, h as f32))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn velocity_stays_clamped(
        seed in any::<u64>(),
        inputs in prop::collection::vec(any::<bool>(), 1..400),
    ) {
        let tuning = Tuning::default();
        let mut state = GameState::new(seed, Viewport::new(800.0, 400.0), &tuning);

        for lift in inputs {
            let was_running = state.phase == GamePhase::Running;
            tick(&mut state, &TickInput { lift }, &tuning);
            if was_running {
                prop_assert!(state.craft.vel_y.abs() <= tuning.max_velocity);
            }
        }
    }

    #[test]
    fn generated_obstacles_within_bounds(seed in any::<u64>(), viewport in viewport_strategy()) {
        let tuning = Tuning::default();
        let dims = heli_run::sim::Dimensions::from_viewport(viewport, &tuning);
        let mut rng = Pcg32::seed_from_u64(seed);
        let mut obstacles = Vec::new();

        for _ in 0..32 {
            track::generate(&mut obstacles, &dims, viewport, &mut rng);
        }

        match track::top_height_range(&dims, viewport) {
            Some((min, max)) => {
                prop_assert_eq!(obstacles.len(), 32);
                for o in &obstacles {
                    prop_assert!(o.top_height >= min && o.top_height <= max);
                    prop_assert_eq!(o.gap_start_y, o.top_height + dims.obstacle_gap);
                    prop_assert_eq!(o.x, viewport.width);
                }
            }
            None => prop_assert!(obstacles.is_empty()),
        }
    }

    #[test]
    fn obstacles_stay_leftmost_first(
        seed in any::<u64>(),
        inputs in prop::collection::vec(any::<bool>(), 1..600),
    ) {
        let tuning = Tuning::default();
        let mut state = GameState::new(seed, Viewport::new(800.0, 400.0), &tuning);

        for lift in inputs {
            tick(&mut state, &TickInput { lift }, &tuning);
            for pair in state.obstacles.windows(2) {
                prop_assert!(pair[0].x <= pair[1].x);
            }
            for o in &state.obstacles {
                prop_assert!(o.x + state.dims.obstacle_width >= 0.0);
            }
        }
    }

    #[test]
    fn leaderboard_bounded_and_sorted(scores in prop::collection::vec(0u64..500, 0..60)) {
        let mut board = Leaderboard::new();
        for (i, score) in scores.iter().enumerate() {
            let qualified = board.qualifies(*score);
            let rank = board.insert(ScoreEntry::new(&format!("n{i}"), *score));
            if rank.is_some() {
                prop_assert!(qualified || *score == 0);
            }
            prop_assert!(board.len() <= MAX_HIGH_SCORES);
            for pair in board.entries().windows(2) {
                prop_assert!(pair[0].score >= pair[1].score);
            }
        }
    }

    #[test]
    fn names_are_normalized(name in ".{0,40}", score in 1u64..1000) {
        let entry = ScoreEntry::new(&name, score);
        prop_assert!(!entry.name.is_empty());
        prop_assert!(entry.name.chars().count() <= 10);
        prop_assert_eq!(entry.name.trim(), entry.name.as_str());
    }
}
