//! Flip 4 Speed entry point
//!
//! Runs the game in the current terminal. Logs go to stderr (filter with
//! `RUST_LOG`); redirect stderr to keep them off the playfield.

use flip4speed::GameConfig;
use flip4speed::platform::TerminalPlatform;

fn main() {
    env_logger::init();
    log::info!("Flip 4 Speed (terminal) starting...");

    let mut platform = TerminalPlatform::new();
    match flip4speed::run(&mut platform, GameConfig::default()) {
        Ok(summary) => {
            log::info!(
                "Session over: {}",
                serde_json::to_string(&summary).unwrap_or_else(|_| format!("{summary:?}"))
            );
            println!("Best score: {}", summary.best_score);
        }
        Err(e) => {
            log::error!("Flip 4 Speed failed: {e}");
            eprintln!("flip4speed: {e}");
            std::process::exit(1);
        }
    }
}
