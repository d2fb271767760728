use clap::Args;
use scorelytics_analytics::record::UserId;

use crate::{
    store::ScoreStore,
    util::{JsonStyle, Output},
};

#[derive(Debug, Clone, Args)]
pub(crate) struct SaveArg {
    /// User the score belongs to
    #[arg(long, value_parser = super::parse_user_id)]
    pub user: UserId,

    /// Score to record
    #[arg(long, allow_negative_numbers = true)]
    pub score: f64,

    /// Layout of the printed record
    #[arg(long, value_enum, default_value_t)]
    pub format: JsonStyle,
}

pub(crate) fn run(store: &ScoreStore, arg: &SaveArg) -> anyhow::Result<()> {
    let record = store.append(arg.user.clone(), arg.score)?;
    Output::save_json(&record, None, arg.format)
}
