use std::path::PathBuf;

use clap::Args;
use scorelytics_analytics::record::UserId;
use tracing::info;

use crate::{
    store::ScoreStore,
    util::{JsonStyle, Output},
};

#[derive(Debug, Clone, Args)]
pub(crate) struct ListArg {
    /// Only list scores of this user
    #[arg(long, value_parser = super::parse_user_id)]
    pub user: Option<UserId>,

    /// Output file path (stdout if omitted)
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Layout of the printed records
    #[arg(long, value_enum, default_value_t)]
    pub format: JsonStyle,
}

pub(crate) fn run(store: &ScoreStore, arg: &ListArg) -> anyhow::Result<()> {
    let mut collection = store.load()?;
    if let Some(user) = &arg.user {
        collection = collection.for_user(user);
    }
    info!(records = collection.len(), "listing scores");
    Output::save_json(&collection, arg.output.as_deref(), arg.format)
}
