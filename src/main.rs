//! # Studyboard CLI (`sboard`)
//!
//! Runs the canvas alignment engine and the conversation search engine
//! over JSON files, printing human-readable or `--json` output.
//!
//! ## Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `sboard guides <board> <item>` | Alignment guides and snap offset for one item |
//! | `sboard search <transcript> "<query>"` | Every match in a conversation, with navigation |
//!
//! ## Examples
//!
//! ```bash
//! # Guides for the "cmu" card with a tighter threshold
//! sboard guides ./board.json cmu --threshold 4
//!
//! # Search, focusing the third match
//! sboard search ./chat.json "robotics" --step 2
//!
//! # Focus the last match
//! sboard search ./chat.json "robotics" --step -1 --json
//! ```

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use studyboard::{board, config, logging, transcript};

/// Studyboard CLI — alignment guides and conversation search for the
/// Studyboard study planner.
#[derive(Parser)]
#[command(
    name = "sboard",
    about = "Studyboard — canvas alignment guides and conversation search",
    version
)]
struct Cli {
    /// Path to configuration file (TOML).
    ///
    /// Defaults to `./config/sboard.toml`; built-in defaults are used when
    /// that file does not exist.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log Studyboard internals at debug level (stderr).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute alignment guides for one item on a board.
    ///
    /// Compares the item's edges and center against every other item and
    /// prints the sibling coordinates within the snap threshold, plus the
    /// smallest translation that would snap the item onto them.
    Guides {
        /// Board file (JSON with an `items` array).
        board: PathBuf,

        /// Id of the item being moved.
        item: String,

        /// Alignment distance; overrides `[canvas].snap_threshold`.
        #[arg(long)]
        threshold: Option<f64>,

        /// Print JSON instead of text.
        #[arg(long)]
        json: bool,
    },

    /// Search a conversation transcript.
    ///
    /// Case-insensitive substring search over every message, with a
    /// snippet around each match. The first match is focused; `--step`
    /// moves the focus with wrap-around.
    Search {
        /// Transcript file (JSON with a `messages` array).
        transcript: PathBuf,

        /// Text to look for.
        query: String,

        /// Move the focused match: positive for next, negative for previous.
        #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
        step: i64,

        /// Print JSON instead of text.
        #[arg(long)]
        json: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cfg = config::load_or_default(cli.config.as_deref())?;
    logging::init(&cfg.log, cli.verbose);

    match cli.command {
        Commands::Guides {
            board: board_path,
            item,
            threshold,
            json,
        } => {
            board::run_guides(&cfg, &board_path, &item, threshold, json)?;
        }
        Commands::Search {
            transcript: transcript_path,
            query,
            step,
            json,
        } => {
            transcript::run_search(&cfg, &transcript_path, &query, step, json)?;
        }
    }

    Ok(())
}
