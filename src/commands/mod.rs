//! Command-line interface.
//!
//! Each subcommand lives in its own module with an `Args` struct and a `cmd`
//! entry point. Record-editing subcommands shared by `day`, `week` and
//! `month` are defined once in [`record`].

pub mod calendar;
pub mod day;
pub mod export;
pub mod goal;
pub mod import;
pub mod init;
pub mod month;
pub mod record;
pub mod settings;
pub mod timer;
pub mod week;

use crate::db::store::Store;
use crate::libs::document::Document;
use crate::libs::error::{TrackerError, TrackerResult};
use crate::libs::messages::Message;
use crate::msg_bail_anyhow;
use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Required tasks for a day")]
    Day(day::DayArgs),
    #[command(about = "Required tasks for a week")]
    Week(week::WeekArgs),
    #[command(about = "Required outcomes for a month")]
    Month(month::MonthArgs),
    #[command(about = "Goals and milestones")]
    Goal(goal::GoalArgs),
    #[command(about = "Month view of deadlines")]
    Calendar(calendar::CalendarArgs),
    #[command(about = "Show or change discipline rules")]
    Settings(settings::SettingsArgs),
    #[command(about = "Focus timer and Pomodoro cycles")]
    Timer(timer::TimerArgs),
    #[command(about = "Export all data as JSON")]
    Export(export::ExportArgs),
    #[command(about = "Import data from a JSON export (overwrites local data)")]
    Import(import::ImportArgs),
    #[command(about = "Configure timer preferences interactively")]
    Init,
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub async fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Day(args) => day::cmd(args),
            Commands::Week(args) => week::cmd(args),
            Commands::Month(args) => month::cmd(args),
            Commands::Goal(args) => goal::cmd(args),
            Commands::Calendar(args) => calendar::cmd(args),
            Commands::Settings(args) => settings::cmd(args),
            Commands::Timer(args) => timer::cmd(args).await,
            Commands::Export(args) => export::cmd(args),
            Commands::Import(args) => import::cmd(args),
            Commands::Init => init::cmd(),
        }
    }
}

/// Runs a mutation through the store. Domain rejections become a user-facing
/// error message; storage failures propagate as they are.
pub(crate) fn apply<T, F>(store: &mut Store, mutator: F) -> Result<T>
where
    F: FnOnce(&mut Document) -> TrackerResult<T>,
{
    match store.update(mutator) {
        Ok(out) => Ok(out),
        Err(e @ (TrackerError::Io(_) | TrackerError::Json(_))) => Err(e.into()),
        Err(e) => msg_bail_anyhow!(Message::Rejected(e.to_string())),
    }
}

/// Joins positional words into one text argument.
pub(crate) fn join_words(words: &[String]) -> String {
    words.join(" ")
}
