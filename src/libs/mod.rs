//! Core library modules for dtrack.
//!
//! - **Domain**: tasks, records, goals and the document that holds them
//! - **Projections**: calendar aggregation
//! - **Timer**: the Pomodoro/custom countdown state machine
//! - **Infrastructure**: configuration, data directory, errors, logging, messages
//! - **Presentation**: terminal tables and formatting
//!
//! ## Usage
//!
//! ```rust
//! use dtrack::libs::document::Settings;
//! use dtrack::libs::record::{DayRecord, Record};
//!
//! let settings = Settings::default();
//! let mut day = DayRecord::new("2026-03-02");
//! let id = day.add_task(&settings, "Read 20 pages", 0)?;
//! day.toggle_task(&id)?;
//! day.close_success(1)?;
//! # Ok::<(), dtrack::libs::error::TrackerError>(())
//! ```

pub mod calendar;
pub mod config;
pub mod data_storage;
pub mod document;
pub mod error;
pub mod formatter;
pub mod goal;
pub mod logging;
pub mod messages;
pub mod period;
pub mod record;
pub mod task;
pub mod timer;
pub mod view;
