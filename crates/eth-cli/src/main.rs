//! CLI frontend for the Ethoria offline adventure narrator.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use eth_adventure::config::DEFAULT_HISTORY_LIMIT;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "ethoria",
    about = "Ethoria: an offline text adventure narrator",
    version,
    propagate_version = true
)]
struct Cli {
    /// Log engine decisions to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Narrate a single action and print the reply
    Act {
        /// The player's action, e.g. "look" or "Story: I wait"
        action: String,

        /// Game state JSON file (default: a fresh traveler)
        #[arg(short, long)]
        state: Option<PathBuf>,

        /// Conversation history JSON file (array of messages)
        #[arg(long)]
        history: Option<PathBuf>,

        /// RNG seed for reproducible narration
        #[arg(long)]
        seed: Option<u64>,

        /// Skip the content safety filter
        #[arg(long)]
        no_filter: bool,
    },

    /// Play interactively
    Play {
        /// Game state JSON file used when starting a new session
        #[arg(short, long)]
        state: Option<PathBuf>,

        /// Session file to resume from and save to on exit
        #[arg(long)]
        session: Option<PathBuf>,

        /// RNG seed for reproducible narration
        #[arg(long)]
        seed: Option<u64>,

        /// Skip the content safety filter
        #[arg(long)]
        no_filter: bool,

        /// Number of history messages to keep (0 keeps all)
        #[arg(long, default_value_t = DEFAULT_HISTORY_LIMIT)]
        history_limit: usize,
    },

    /// Run text through the content safety filter
    Check {
        /// Text to screen
        text: String,
    },

    /// Write a starter game state file
    New {
        /// Output file
        file: PathBuf,

        /// Player name
        #[arg(short, long)]
        name: Option<String>,
    },
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Act {
            action,
            state,
            history,
            seed,
            no_filter,
        } => commands::act::run(
            &action,
            state.as_deref(),
            history.as_deref(),
            seed,
            !no_filter,
        ),
        Commands::Play {
            state,
            session,
            seed,
            no_filter,
            history_limit,
        } => {
            let config =
                commands::session_config(seed, !no_filter).with_history_limit(history_limit);
            commands::play::run(state.as_deref(), session.as_deref(), config)
        }
        Commands::Check { text } => commands::check::run(&text),
        Commands::New { file, name } => commands::new::run(&file, name.as_deref()),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
