//! Domain errors for tracker mutations.
//!
//! Every rejected edit maps to one variant. The store's mutation gateway
//! discards the working copy when a mutator returns one of these, so a
//! rejection never reaches disk.

use crate::libs::record::RecordStatus;

#[derive(Debug, thiserror::Error)]
pub enum TrackerError {
    #[error("record is closed ({0}) and can no longer be edited")]
    Locked(RecordStatus),
    #[error("tasks are locked after the day has started")]
    StructureLocked,
    #[error("task limit reached ({0})")]
    LimitReached(usize),
    #[error("text must not be empty")]
    EmptyText,
    #[error("a failure reason is required")]
    EmptyReason,
    #[error("task not found: {0}")]
    TaskNotFound(String),
    #[error("goal not found: {0}")]
    GoalNotFound(String),
    #[error("milestone not found: {0}")]
    MilestoneNotFound(String),
    #[error("every required task must be done first ({done}/{total})")]
    NotAllDone { done: usize, total: usize },
    #[error("record is already closed as {0}")]
    AlreadyClosed(RecordStatus),
    #[error("invalid date: {0}")]
    InvalidDate(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type TrackerResult<T> = Result<T, TrackerError>;
