//! # dtrack - Discipline Tracker
//!
//! A command-line utility for keeping yourself honest: required daily,
//! weekly and monthly tasks that are closed as passed or failed, yearly
//! goals with milestones, a calendar of deadlines and a focus timer.
//!
//! ## Features
//!
//! - **Required Tasks**: Nested task checklists per day, week and month
//! - **Closing Rules**: Success only when everything is done, failure only with a reason
//! - **Goals**: Goals with deadlines, rationale and milestones
//! - **Calendar**: Month grid of goal, week and month deadlines
//! - **Timer**: Custom countdown and Pomodoro cycles
//! - **Backup**: Export and import of the whole local document
//!
//! ## Usage
//!
//! ```rust,no_run
//! use dtrack::commands::Cli;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Cli::menu().await
//! }
//! ```

pub mod commands;
pub mod db;
pub mod libs;
