use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use liftlog::cli::{
    handle_backup, handle_history, handle_init, handle_restore, handle_status, handle_validate,
};
use liftlog::config::paths::LiftlogPaths;

#[derive(Parser)]
#[command(
    name = "liftlog",
    version,
    about = "Local-data core for the LiftLog fitness tracker",
    long_about = "LiftLog keeps your exercises, workouts, plans and calendar \
                  locally and lets you back up the entire dataset to a single \
                  portable file and restore it later."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize the local data directory
    Init,

    /// Show dataset and configuration status
    Status,

    /// Back up the entire dataset to a single file
    Backup {
        /// Target directory (defaults to the exports directory)
        #[arg(short, long)]
        dir: Option<PathBuf>,
    },

    /// Restore the entire dataset from a backup file
    Restore {
        /// Backup file to restore from
        file: PathBuf,

        /// Skip confirmation and overwrite all current data
        #[arg(short, long)]
        force: bool,
    },

    /// Validate a backup file without restoring it
    Validate {
        /// Backup file to validate
        file: PathBuf,
    },

    /// Show recent backup/restore operations
    History {
        /// Number of entries to show
        #[arg(short = 'n', long, default_value = "10")]
        count: usize,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let paths = LiftlogPaths::new()?;

    match cli.command {
        Commands::Init => handle_init(&paths)?,
        Commands::Status => handle_status(&paths)?,
        Commands::Backup { dir } => handle_backup(&paths, dir)?,
        Commands::Restore { file, force } => handle_restore(&paths, file, force)?,
        Commands::Validate { file } => handle_validate(file)?,
        Commands::History { count } => handle_history(&paths, count)?,
    }

    Ok(())
}
