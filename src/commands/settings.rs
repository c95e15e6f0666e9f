//! Discipline rules stored with the document.

use super::apply;
use crate::db::store::Store;
use crate::libs::messages::Message;
use crate::libs::view::View;
use crate::{msg_print, msg_success};
use anyhow::Result;
use clap::{Args, Subcommand};

#[derive(Debug, Args)]
pub struct SettingsArgs {
    #[command(subcommand)]
    command: Option<SettingsCommand>,
}

#[derive(Debug, Subcommand)]
enum SettingsCommand {
    /// Show the current settings and the data file location
    Show,
    /// Change one or more settings
    Set {
        /// Maximum number of required tasks per day (1-50)
        #[arg(short, long, allow_hyphen_values = true)]
        limit: Option<i64>,
        /// Lock a day's task list once it has tasks
        #[arg(long)]
        lock: Option<bool>,
    },
}

pub fn cmd(args: SettingsArgs) -> Result<()> {
    let mut store = Store::new()?;

    match args.command.unwrap_or(SettingsCommand::Show) {
        SettingsCommand::Show => {
            msg_print!(Message::SettingsHeader, true);
            View::settings(&store.document().settings);
            msg_print!(Message::DataFileLocation(store.path().display().to_string()));
        }
        SettingsCommand::Set { limit, lock } => {
            let settings = apply(&mut store, |doc| {
                if let Some(limit) = limit {
                    doc.settings.set_daily_task_limit(limit);
                }
                if let Some(lock) = lock {
                    doc.settings.lock_after_start = lock;
                }
                Ok(doc.settings.clone())
            })?;
            msg_success!(Message::SettingsSaved);
            View::settings(&settings);
        }
    }
    Ok(())
}
