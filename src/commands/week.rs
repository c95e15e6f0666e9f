//! Required tasks for a week. Weeks are keyed by their Monday.

use super::{apply, join_words};
use super::record::{self, RecordCommand};
use crate::db::store::Store;
use crate::libs::document::StoredRecord;
use crate::libs::messages::Message;
use crate::libs::period::{parse_date, week_key};
use crate::libs::record::WeekRecord;
use crate::{msg_print, msg_success};
use anyhow::Result;
use clap::{Args, Subcommand};

#[derive(Debug, Args)]
pub struct WeekArgs {
    /// Any day of the week: `today` or YYYY-MM-DD
    #[arg(short, long, default_value = "today")]
    date: String,

    #[command(subcommand)]
    command: Option<WeekCommand>,
}

#[derive(Debug, Subcommand)]
enum WeekCommand {
    #[command(flatten)]
    Record(RecordCommand),
    /// Rename the week
    Title {
        #[arg(num_args = 0..)]
        title: Vec<String>,
    },
    /// Set the week deadline (YYYY-MM-DD); no date clears it
    Deadline { date: Option<String> },
}

pub fn cmd(args: WeekArgs) -> Result<()> {
    let key = week_key(parse_date(&args.date)?);
    let mut store = Store::new()?;

    match args.command.unwrap_or(WeekCommand::Record(RecordCommand::Show)) {
        WeekCommand::Record(RecordCommand::Show) => show(&store, &key),
        WeekCommand::Record(command) => record::run::<WeekRecord>(&mut store, &key, command)?,
        WeekCommand::Title { title } => {
            let title = join_words(&title);
            apply(&mut store, |doc| doc.week_mut(&key).set_title(&title))?;
            msg_success!(Message::WeekTitleSaved(title));
        }
        WeekCommand::Deadline { date } => {
            let deadline = apply(&mut store, |doc| {
                let week = doc.week_mut(&key);
                week.set_deadline(date.as_deref())?;
                Ok(week.deadline_iso.clone())
            })?;
            match deadline {
                Some(date) => msg_success!(Message::DeadlineSaved(date)),
                None => msg_success!(Message::DeadlineCleared),
            }
        }
    }
    Ok(())
}

fn show(store: &Store, key: &str) {
    let week = WeekRecord::load(store.document(), key);
    msg_print!(week.title);
    record::show(&week, &store.document().settings);
    if let Some(deadline) = &week.deadline_iso {
        msg_print!(Message::DeadlineShown(deadline.clone()));
    }
}
