//! Wordham - CLI
//!
//! Play the daily word game in the terminal. Progress is saved after every
//! guess, so quitting and restarting resumes the same word.

use anyhow::{Context, Result, anyhow};
use clap::{Parser, Subcommand};
use log::{LevelFilter, debug};
use std::io;
use std::path::PathBuf;
use wordham::{
    commands::{run_play, run_reset_history, run_share, run_status},
    selector::ThreadRandom,
    session::Session,
    store::{FileBackend, StateStore},
    wordlists::Dictionary,
};

#[derive(Parser)]
#[command(
    name = "wordham",
    about = "Guess the five-letter word in six tries",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Directory holding the saved game (default: platform data directory)
    #[arg(short = 'd', long, global = true)]
    store_dir: Option<PathBuf>,

    /// Newline-delimited word list to play with instead of the built-in one
    #[arg(short = 'w', long, global = true)]
    wordlist: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace); RUST_LOG overrides
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Play interactively (default)
    Play,

    /// Print the shareable result of the last finished game
    Share,

    /// Show the game in progress and play history
    Status,

    /// Forget which words have been played
    ResetHistory,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn load_dictionary(path: Option<&PathBuf>) -> Result<Dictionary> {
    match path {
        Some(path) => Dictionary::from_file(path)
            .with_context(|| format!("Failed to load word list from '{}'", path.display())),
        None => Ok(Dictionary::embedded()),
    }
}

fn open_store(dir: Option<PathBuf>) -> Result<StateStore<FileBackend>> {
    let backend = match dir {
        Some(dir) => FileBackend::new(dir),
        None => FileBackend::default_location()
            .ok_or_else(|| anyhow!("No data directory on this platform, pass --store-dir"))?,
    };
    debug!("Saved game lives in {}", backend.dir().display());
    Ok(StateStore::new(backend))
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let dictionary = load_dictionary(cli.wordlist.as_ref())?;
    let mut store = open_store(cli.store_dir)?;
    let mut stdout = io::stdout();

    match cli.command.unwrap_or(Commands::Play) {
        Commands::Play => {
            let mut session = Session::start(&dictionary, store, ThreadRandom)
                .context("Failed to load saved game")?;
            run_play(&mut session, io::stdin().lock(), &mut stdout)
        }
        Commands::Share => run_share(&store, &mut stdout),
        Commands::Status => run_status(&store, &dictionary, &mut stdout),
        Commands::ResetHistory => run_reset_history(&mut store, &mut stdout),
    }
}
