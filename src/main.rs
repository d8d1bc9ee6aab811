//! Heli Run entry point
//!
//! Native builds run headless autopilot sessions against a data directory
//! and print the leaderboard. The browser build is driven from JavaScript
//! through `heli_run::platform::web`.

#[cfg(not(target_arch = "wasm32"))]
mod native_cli {
    use std::path::PathBuf;
    use std::process::ExitCode;

    use clap::Parser;

    use heli_run::persistence::{FileStorage, Storage, StorageError};
    use heli_run::platform::native::{LogRenderer, run_session};
    use heli_run::sim::Viewport;
    use heli_run::{Game, Leaderboard, Tuning};

    /// Headless Heli Run: autopilot sessions with a persistent leaderboard
    #[derive(Debug, Parser)]
    #[command(name = "heli-run", version, about)]
    struct Args {
        /// Directory holding scores and tuning overrides
        #[arg(long, default_value = ".heli-run")]
        data_dir: PathBuf,
        /// Seed for the first session (later sessions derive from it)
        #[arg(long, default_value_t = 1)]
        seed: u64,
        /// Number of sessions to play
        #[arg(long, default_value_t = 1)]
        sessions: u32,
        /// Frame budget per session
        #[arg(long, default_value_t = 10_000)]
        frames: u64,
        /// Viewport width in pixels
        #[arg(long, default_value_t = 800.0)]
        width: f32,
        /// Viewport height in pixels
        #[arg(long, default_value_t = 400.0)]
        height: f32,
        /// Name recorded for qualifying scores
        #[arg(long, default_value = "Autopilot")]
        name: String,
        /// Log a frame summary every N frames (debug level)
        #[arg(long, default_value_t = 60)]
        log_every: u64,
        /// Print the leaderboard and exit
        #[arg(long)]
        show_scores: bool,
        /// Clear the leaderboard (requires --yes)
        #[arg(long)]
        clear_scores: bool,
        /// Confirm destructive actions
        #[arg(long)]
        yes: bool,
        /// Write the effective tuning to the data directory and exit
        #[arg(long)]
        write_tuning: bool,
    }

    fn print_leaderboard(board: &Leaderboard) {
        if board.is_empty() {
            println!("No scores yet!");
            return;
        }
        for (rank, entry) in board.entries().iter().enumerate() {
            println!("{:>2}. {:<10} {:>8}", rank + 1, entry.name, entry.score);
        }
    }

    fn run(args: Args) -> Result<(), StorageError> {
        let mut storage = FileStorage::open(&args.data_dir)?;

        if args.write_tuning {
            let tuning = Tuning::load(&storage);
            tuning.save(&mut storage);
            println!("Tuning written to {}", storage.dir().display());
            return Ok(());
        }

        if args.show_scores {
            print_leaderboard(&Leaderboard::load(&mut storage));
            return Ok(());
        }

        if args.clear_scores {
            if !args.yes {
                println!("Refusing to clear high scores without --yes");
                return Ok(());
            }
            storage.remove(Leaderboard::STORAGE_KEY)?;
            println!("High scores cleared");
            return Ok(());
        }

        let viewport = Viewport::new(args.width, args.height);
        let mut game = Game::new(storage, viewport, args.seed);
        let mut renderer = LogRenderer::new(args.log_every);

        for session in 1..=args.sessions {
            let summary = run_session(&mut game, &mut renderer, args.frames);
            match summary.report {
                Some(report) => {
                    println!(
                        "Session {}: score {} ({:?}){}",
                        session,
                        report.final_score,
                        report.cause,
                        if report.new_best { " - new best!" } else { "" }
                    );
                    if report.qualifies {
                        match game.submit_name(&args.name) {
                            Some(rank) => println!("  Ranked #{}", rank),
                            None => println!("  Tied out of the table"),
                        }
                    } else {
                        game.restart();
                    }
                }
                None => {
                    println!(
                        "Session {}: still flying after {} frames (score {})",
                        session,
                        summary.frames,
                        game.state().score
                    );
                    break;
                }
            }
        }

        println!("\nBest: {}", game.best_score());
        print_leaderboard(game.leaderboard());
        Ok(())
    }

    pub fn main() -> ExitCode {
        env_logger::init();
        log::info!("Heli Run (native) starting...");

        match run(Args::parse()) {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                eprintln!("heli-run: {e}");
                ExitCode::FAILURE
            }
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> std::process::ExitCode {
    native_cli::main()
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is platform::web::wasm_start, this is just to satisfy the compiler
}
