//! Wordle CLI
//!
//! Terminal word-guessing game with a resumable daily puzzle and statistics.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use wordle_cli::{
    commands::{print_last_share, print_statistics, run_play},
    config::Config,
    wordlists::{WordList, loader::load_from_file},
};

#[derive(Parser)]
#[command(
    name = "wordle_cli",
    about = "Guess the five-letter word in six tries",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Directory for save files (default: $WORDLE_CLI_SAVE_DIR or the platform data dir)
    #[arg(long, global = true)]
    save_dir: Option<PathBuf>,

    /// Do not read or write save files
    #[arg(long, global = true)]
    no_save: bool,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a puzzle (default: today's daily puzzle)
    Play {
        /// Free play with a random word (never saved)
        #[arg(short, long)]
        random: bool,

        /// Seed for free play; the same seed gives the same word
        #[arg(long)]
        seed: Option<u64>,

        /// Play a specific daily puzzle number
        #[arg(long, conflicts_with_all = ["random", "seed"])]
        day: Option<u64>,

        /// File with extra accepted guess words, one per line
        #[arg(long)]
        dictionary: Option<PathBuf>,
    },

    /// Show daily statistics
    Stats,

    /// Print the share string of the last finished daily puzzle
    Share,
}

/// Initialize tracing with output to stderr so stdout stays the game
fn init_tracing(verbose: bool) {
    let default = if verbose {
        "wordle_cli=debug"
    } else {
        "wordle_cli=warn"
    };
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| default.into()),
    );

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut config = Config {
        save_dir: cli.save_dir,
        no_save: cli.no_save,
        ..Config::default()
    };

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play {
        random: false,
        seed: None,
        day: None,
        dictionary: None,
    });

    let store = config.open_store()?;

    match command {
        Commands::Play {
            random,
            seed,
            day,
            dictionary,
        } => {
            config.random = random;
            config.seed = seed;
            config.day = day;
            config.dictionary = dictionary;

            let words = load_words(&config)?;
            let stdin = io::stdin();
            run_play(
                stdin.lock(),
                io::stdout(),
                &words,
                store.as_ref(),
                config.play_mode(),
            )
        }
        Commands::Stats => print_statistics(store.as_ref(), io::stdout()),
        Commands::Share => print_last_share(store.as_ref(), io::stdout()),
    }
}

fn load_words(config: &Config) -> Result<WordList> {
    let mut words = WordList::default();

    if let Some(path) = &config.dictionary {
        let extra = load_from_file(path)
            .with_context(|| format!("failed to read dictionary {}", path.display()))?;
        tracing::info!(count = extra.len(), "loaded extra dictionary words");
        words.extend_accepted(extra);
    }

    Ok(words)
}
