use std::path::PathBuf;

use clap::{Parser, Subcommand};
use scorelytics_analytics::record::{InvalidRecordError, UserId};
use tracing_subscriber::EnvFilter;

use crate::store::ScoreStore;

use self::{analyze::AnalyzeArg, list::ListArg, save::SaveArg, user_trend::UserTrendArg};

mod analyze;
mod list;
mod save;
mod user_trend;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    /// Path to the JSON file holding saved scores
    #[arg(long, global = true, default_value = "scores.json")]
    store: PathBuf,

    #[command(subcommand)]
    mode: Mode,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Save a score for a user
    Save(#[clap(flatten)] SaveArg),
    /// List saved scores, newest first
    List(#[clap(flatten)] ListArg),
    /// Compute statistics over every saved score
    Analyze(#[clap(flatten)] AnalyzeArg),
    /// Compute the score trend of one user
    UserTrend(#[clap(flatten)] UserTrendArg),
}

fn parse_user_id(value: &str) -> Result<UserId, InvalidRecordError> {
    UserId::new(value)
}

fn init_logging() {
    // Logs go to stderr so that stdout carries only JSON
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

pub fn run() -> anyhow::Result<()> {
    init_logging();

    let args = CommandArgs::parse();
    let store = ScoreStore::new(args.store);
    match args.mode {
        Mode::Save(arg) => save::run(&store, &arg)?,
        Mode::List(arg) => list::run(&store, &arg)?,
        Mode::Analyze(arg) => analyze::run(&store, &arg)?,
        Mode::UserTrend(arg) => user_trend::run(&store, &arg)?,
    }
    Ok(())
}
