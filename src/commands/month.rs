//! Required outcomes for a calendar month.

use super::apply;
use super::record::{self, RecordCommand};
use crate::db::store::Store;
use crate::libs::document::StoredRecord;
use crate::libs::messages::Message;
use crate::libs::period::YearMonth;
use crate::libs::record::MonthRecord;
use crate::{msg_print, msg_success};
use anyhow::Result;
use clap::{Args, Subcommand};

#[derive(Debug, Args)]
pub struct MonthArgs {
    /// Month to work on: `current` or YYYY-MM
    #[arg(short, long, default_value = "current")]
    month: String,

    #[command(subcommand)]
    command: Option<MonthCommand>,
}

#[derive(Debug, Subcommand)]
enum MonthCommand {
    #[command(flatten)]
    Record(RecordCommand),
    /// Set the month deadline (YYYY-MM-DD); no date clears it
    Deadline { date: Option<String> },
}

pub fn cmd(args: MonthArgs) -> Result<()> {
    let key = args.month.parse::<YearMonth>()?.to_string();
    let mut store = Store::new()?;

    match args.command.unwrap_or(MonthCommand::Record(RecordCommand::Show)) {
        MonthCommand::Record(RecordCommand::Show) => {
            let month = MonthRecord::load(store.document(), &key);
            record::show(&month, &store.document().settings);
            if let Some(deadline) = &month.deadline_iso {
                msg_print!(Message::DeadlineShown(deadline.clone()));
            }
        }
        MonthCommand::Record(command) => record::run::<MonthRecord>(&mut store, &key, command)?,
        MonthCommand::Deadline { date } => {
            let deadline = apply(&mut store, |doc| {
                let month = doc.month_mut(&key);
                month.set_deadline(date.as_deref())?;
                Ok(month.deadline_iso.clone())
            })?;
            match deadline {
                Some(date) => msg_success!(Message::DeadlineSaved(date)),
                None => msg_success!(Message::DeadlineCleared),
            }
        }
    }
    Ok(())
}
