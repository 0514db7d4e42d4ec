//! chore-tracker
//!
//! Replays a command log against flat-file task, wish and achievement stores.

use anyhow::{Context, Result};
use chore_tracker::cli::{Cli, Command};
use chore_tracker::commands::Interpreter;
use chore_tracker::config::{Config, ConfigLoader};
use chore_tracker::format::{OutputFormat, StoreSummary, check_report};
use chore_tracker::logging::{self, LogSink};
use chore_tracker::store::{AchievementStore, TaskStore, WishStore};
use clap::Parser;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::PathBuf;
use tracing::{debug, info, warn};

fn main() -> Result<()> {
    let cli = Cli::parse();

    logging::init(&LogSink::parse(&cli.log), cli.verbose)?;

    let mut loader = match &cli.config {
        Some(path) => ConfigLoader::load_file(path)?,
        None => ConfigLoader::load()?,
    };
    for source in loader.sources() {
        debug!(path = %source.display(), "Using config file");
    }

    // Override paths from CLI arguments
    if let Some(data_dir) = &cli.data_dir {
        loader.config_mut().storage.data_dir = data_dir.clone();
    }
    let config = loader.into_config();

    match cli.command {
        Some(Command::Check { format }) => run_check(&config, format),
        Some(Command::Run { file }) => run_commands(&config, file),
        None => run_commands(&config, None),
    }
}

/// Process every line of the command log. Only failing to open or read the
/// log is fatal; each command error is reported and skipped.
fn run_commands(config: &Config, file: Option<PathBuf>) -> Result<()> {
    let path = file.unwrap_or_else(|| config.commands.file.clone());
    let file = File::open(&path)
        .with_context(|| format!("Failed to open command file {}", path.display()))?;
    info!(path = %path.display(), "Processing commands");

    let paths = config.storage.resolve();
    let mut interpreter = Interpreter::new(
        TaskStore::open(paths.tasks),
        WishStore::open(paths.wishes),
        AchievementStore::open(paths.achievements),
        config.reminders.default_days,
    );

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut processed = 0usize;
    let mut failed = 0usize;

    for (index, line) in BufReader::new(file).lines().enumerate() {
        let line =
            line.with_context(|| format!("Failed to read command file {}", path.display()))?;
        match interpreter.execute(&line) {
            Ok(None) => {}
            Ok(Some(output)) => {
                processed += 1;
                writeln!(out, "{}", output)?;
            }
            Err(e) => {
                processed += 1;
                failed += 1;
                warn!(line = index + 1, code = e.code().as_str(), error = %e, "Command failed");
                eprintln!("Error processing command: {}: {}", line, e);
            }
        }
    }

    info!(processed, failed, "All commands processed");
    writeln!(
        out,
        "All commands processed ({} commands, {} failed)",
        processed, failed
    )?;
    Ok(())
}

/// Load each store once and report what was read.
fn run_check(config: &Config, format: OutputFormat) -> Result<()> {
    let paths = config.storage.resolve();

    let mut tasks = TaskStore::new(paths.tasks);
    tasks.load()?;
    let mut wishes = WishStore::new(paths.wishes);
    wishes.load()?;
    let mut achievements = AchievementStore::new(paths.achievements);
    achievements.load()?;

    let summaries = vec![
        StoreSummary::of(&tasks),
        StoreSummary::of(&wishes),
        StoreSummary::of(&achievements),
    ];
    println!("{}", check_report(&summaries, format));
    Ok(())
}
