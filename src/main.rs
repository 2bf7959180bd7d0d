use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use quiznight::config::{Config, USAGE};
use quiznight::console::Terminal;
use quiznight::game::TriviaGame;
use quiznight::loader::{self, BankError};

fn main() {
    // Load .env file if present (before any env var reads)
    if let Err(e) = dotenvy::dotenv() {
        // Not an error if .env doesn't exist, only log if it's a different issue
        if !matches!(e, dotenvy::Error::Io(_)) {
            eprintln!("Warning: Failed to load .env file: {e}");
        }
    }

    // Initialize tracing; logs go to stderr so the game UI on stdout stays
    // clean
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "quiznight=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = match Config::from_args(std::env::args().skip(1)) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}");
            eprintln!("{USAGE}");
            std::process::exit(2);
        }
    };

    let mut rng = rand::rng();
    let state = match loader::load_bank(&config.bank_path, &mut rng) {
        Ok(state) => state,
        Err(e @ BankError::Io(_)) => {
            eprintln!("Error: {e}");
            eprintln!("{USAGE}");
            std::process::exit(2);
        }
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    tracing::info!(
        "Starting quiznight: {} questions, {} players",
        state.question_count(),
        config.player_count
    );

    let mut game = TriviaGame::new(state, Terminal::new(), rng);
    if let Err(e) = game.setup_players(config.player_count) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
    if let Err(e) = game.run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
