use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use scorelytics_analytics::engine;
use tracing::info;

use crate::{
    store::ScoreStore,
    util::{JsonStyle, Output},
};

#[derive(Debug, Clone, Args)]
pub(crate) struct AnalyzeArg {
    /// Output file path (stdout if omitted)
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Layout of the printed report
    #[arg(long, value_enum, default_value_t)]
    pub format: JsonStyle,
}

pub(crate) fn run(store: &ScoreStore, arg: &AnalyzeArg) -> anyhow::Result<()> {
    let collection = store.load()?;
    let report = engine::compute_global_statistics(collection.scores()).with_context(|| {
        format!(
            "Failed to compute statistics over {}",
            store.path().display()
        )
    })?;
    info!(count = report.count(), "computed global statistics");
    Output::save_json(&report, arg.output.as_deref(), arg.format)
}
