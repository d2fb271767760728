use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use scorelytics_analytics::{engine, record::UserId};
use tracing::info;

use crate::{
    store::ScoreStore,
    util::{JsonStyle, Output},
};

#[derive(Debug, Clone, Args)]
pub(crate) struct UserTrendArg {
    /// User to analyze
    #[arg(value_parser = super::parse_user_id)]
    pub user: UserId,

    /// Output file path (stdout if omitted)
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Layout of the printed report
    #[arg(long, value_enum, default_value_t)]
    pub format: JsonStyle,
}

pub(crate) fn run(store: &ScoreStore, arg: &UserTrendArg) -> anyhow::Result<()> {
    let user_scores = store.load()?.for_user(&arg.user);
    let report = engine::compute_user_trend(&arg.user, user_scores.records())
        .with_context(|| format!("Failed to compute the trend of user {}", arg.user))?;
    info!(user_id = %arg.user, count = report.count(), "computed user trend");
    Output::save_json(&report, arg.output.as_deref(), arg.format)
}
