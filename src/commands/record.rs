//! Subcommands shared by the day, week and month records.

use super::{apply, join_words};
use crate::db::store::Store;
use crate::libs::document::{Settings, StoredRecord};
use crate::libs::formatter::format_timestamp;
use crate::libs::messages::Message;
use crate::libs::period::now_millis;
use crate::libs::record::{Lock, Record};
use crate::libs::view::View;
use crate::{msg_info, msg_print, msg_success, msg_warning};
use anyhow::Result;
use clap::Subcommand;
use dialoguer::{theme::ColorfulTheme, Input};

#[derive(Debug, Subcommand)]
pub enum RecordCommand {
    /// Show the record and its task tree
    Show,
    /// Add a required top-level task
    Add {
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },
    /// Add a subtask under an existing task
    Sub {
        /// Parent task id
        parent: String,
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },
    /// Check or uncheck a task
    Toggle { id: String },
    /// Remove a task and all of its subtasks
    Remove { id: String },
    /// Set the notes of a task (no text clears them)
    Note {
        id: String,
        #[arg(num_args = 0..)]
        text: Vec<String>,
    },
    /// Close as completed/passed; every required task must be done
    Complete,
    /// Close as failed; a reason is required
    Fail {
        #[arg(short, long)]
        reason: Option<String>,
    },
}

pub fn run<R: StoredRecord>(store: &mut Store, key: &str, command: RecordCommand) -> Result<()> {
    let settings = store.document().settings.clone();
    match command {
        RecordCommand::Show => {
            show(&R::load(store.document(), key), &settings);
        }
        RecordCommand::Add { text } => {
            let text = join_words(&text);
            let id = apply(store, |doc| R::slot(doc, key).add_task(&settings, &text, now_millis()))?;
            msg_success!(Message::TaskAdded(id));
        }
        RecordCommand::Sub { parent, text } => {
            let text = join_words(&text);
            let id = apply(store, |doc| R::slot(doc, key).add_subtask(&settings, &parent, &text, now_millis()))?;
            msg_success!(Message::SubtaskAdded(id));
        }
        RecordCommand::Toggle { id } => {
            let (text, done) = apply(store, |doc| {
                let record = R::slot(doc, key);
                let done = record.toggle_task(&id)?;
                let text = record.tasks().find(&id).map(|t| t.text.clone()).unwrap_or_default();
                Ok((text, done))
            })?;
            msg_success!(Message::TaskToggled { text, done });
        }
        RecordCommand::Remove { id } => {
            let removed = apply(store, |doc| R::slot(doc, key).remove_task(&settings, &id))?;
            msg_success!(Message::TaskRemoved {
                text: removed.text,
                subtasks: removed.subtasks.len(),
            });
        }
        RecordCommand::Note { id, text } => {
            let notes = join_words(&text);
            apply(store, |doc| R::slot(doc, key).set_task_notes(&id, &notes))?;
            msg_success!(Message::TaskNotesSaved);
        }
        RecordCommand::Complete => {
            let status = apply(store, |doc| R::slot(doc, key).close_success(now_millis()))?;
            msg_success!(Message::RecordClosed {
                kind: R::KIND.to_string(),
                status: status.to_string(),
            });
        }
        RecordCommand::Fail { reason } => {
            let reason = match reason {
                Some(reason) => reason,
                None => Input::with_theme(&ColorfulTheme::default())
                    .with_prompt(Message::PromptFailReason.to_string())
                    .interact_text()?,
            };
            let status = apply(store, |doc| R::slot(doc, key).close_failed(&reason, now_millis()))?;
            msg_success!(Message::RecordClosed {
                kind: R::KIND.to_string(),
                status: status.to_string(),
            });
        }
    }
    Ok(())
}

pub fn show<R: Record>(record: &R, settings: &Settings) {
    msg_print!(
        Message::RecordHeader {
            kind: R::KIND.to_string(),
            key: record.key().to_string(),
            status: record.status().to_string(),
        },
        true
    );

    let tasks = record.tasks();
    match record.lock(settings) {
        Lock::Open => {
            let limit = R::task_limit(settings);
            msg_info!(Message::TaskLimitInfo {
                limit,
                remaining: limit.saturating_sub(tasks.len()),
            });
        }
        Lock::Structure => msg_warning!(Message::TasksLocked),
        Lock::Frozen => msg_info!(Message::TasksFrozen),
    }

    if tasks.is_empty() {
        msg_info!(Message::NoTasksYet);
    } else {
        View::tasks(tasks);
        msg_print!(Message::TasksDone {
            done: tasks.done_count(),
            total: tasks.len(),
        });
    }

    if let Some(reason) = record.fail_reason().filter(|r| !r.is_empty()) {
        msg_print!(Message::RecordFailReason(reason.to_string()));
    }
    if let Some(closed_at) = record.closed_at() {
        msg_print!(Message::RecordClosedAt(format_timestamp(closed_at)));
    }
}
