//! Required tasks for a single day.
//!
//! ```bash
//! dtrack day add Write the report
//! dtrack day sub task_1f3c Outline
//! dtrack day toggle task_1f3c
//! dtrack day --date 2026-03-02 show
//! dtrack day fail --reason "Sick"
//! ```

use super::apply;
use super::join_words;
use super::record::{self, RecordCommand};
use crate::db::store::Store;
use crate::libs::document::StoredRecord;
use crate::libs::messages::Message;
use crate::libs::period::{day_key, parse_date};
use crate::libs::record::DayRecord;
use crate::{msg_print, msg_success};
use anyhow::Result;
use clap::{Args, Subcommand};

#[derive(Debug, Args)]
pub struct DayArgs {
    /// Day to work on: `today` or YYYY-MM-DD
    #[arg(short, long, default_value = "today")]
    date: String,

    #[command(subcommand)]
    command: Option<DayCommand>,
}

#[derive(Debug, Subcommand)]
enum DayCommand {
    #[command(flatten)]
    Record(RecordCommand),
    /// Set the free-form notes of the day
    Notes {
        #[arg(num_args = 0..)]
        text: Vec<String>,
    },
}

pub fn cmd(args: DayArgs) -> Result<()> {
    let key = day_key(parse_date(&args.date)?);
    let mut store = Store::new()?;

    match args.command.unwrap_or(DayCommand::Record(RecordCommand::Show)) {
        DayCommand::Record(RecordCommand::Show) => show(&store, &key),
        DayCommand::Record(command) => record::run::<DayRecord>(&mut store, &key, command)?,
        DayCommand::Notes { text } => {
            let notes = join_words(&text);
            apply(&mut store, |doc| doc.day_mut(&key).set_notes(&notes))?;
            msg_success!(Message::RecordNotesSaved);
        }
    }
    Ok(())
}

fn show(store: &Store, key: &str) {
    let day = DayRecord::load(store.document(), key);
    record::show(&day, &store.document().settings);
    if let Some(notes) = day.notes.as_deref().filter(|n| !n.is_empty()) {
        msg_print!(Message::RecordNotes(notes.to_string()));
    }
}
