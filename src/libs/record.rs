//! Day, week and month records and their closing lifecycle.
//!
//! Every record starts `open` and can be closed exactly once, either as a
//! success (`completed` for days, `passed` for weeks and months) or as
//! `failed` with a written reason. A closed record is frozen: the [`Record`]
//! trait rejects every further edit, including toggles and notes.

use super::document::Settings;
use super::error::{TrackerError, TrackerResult};
use super::period::normalize_deadline;
use super::task::{Task, TaskTree};
use serde::{Deserialize, Serialize};
use std::fmt;

pub const WEEK_TASK_LIMIT: usize = 50;
pub const MONTH_OUTCOME_LIMIT: usize = 12;
pub const DEFAULT_WEEK_TITLE: &str = "This Week";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordStatus {
    Open,
    Completed,
    Passed,
    Failed,
}

impl RecordStatus {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, RecordStatus::Open)
    }
}

impl fmt::Display for RecordStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            RecordStatus::Open => "open",
            RecordStatus::Completed => "completed",
            RecordStatus::Passed => "passed",
            RecordStatus::Failed => "failed",
        };
        write!(f, "{}", s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    Day,
    Week,
    Month,
}

impl RecordKind {
    pub fn success_status(&self) -> RecordStatus {
        match self {
            RecordKind::Day => RecordStatus::Completed,
            RecordKind::Week | RecordKind::Month => RecordStatus::Passed,
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            RecordKind::Day => "Day",
            RecordKind::Week => "Week",
            RecordKind::Month => "Month",
        };
        write!(f, "{}", s)
    }
}

/// How far a record may currently be edited.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lock {
    Open,
    /// Tasks may be toggled and annotated but not added or removed.
    Structure,
    /// Terminal status; nothing may change.
    Frozen,
}

pub trait Record {
    const KIND: RecordKind;

    fn key(&self) -> &str;
    fn tasks(&self) -> &TaskTree;
    fn tasks_mut(&mut self) -> &mut TaskTree;
    fn status(&self) -> RecordStatus;
    fn fail_reason(&self) -> Option<&str>;
    fn closed_at(&self) -> Option<i64>;
    fn set_closed(&mut self, status: RecordStatus, fail_reason: Option<String>, closed_at: i64);

    /// Maximum number of root tasks.
    fn task_limit(settings: &Settings) -> usize;

    fn structure_locked(&self, _settings: &Settings) -> bool {
        false
    }

    fn lock(&self, settings: &Settings) -> Lock {
        if self.status().is_terminal() {
            Lock::Frozen
        } else if self.structure_locked(settings) {
            Lock::Structure
        } else {
            Lock::Open
        }
    }

    fn ensure_open(&self) -> TrackerResult<()> {
        match self.status() {
            RecordStatus::Open => Ok(()),
            status => Err(TrackerError::Locked(status)),
        }
    }

    fn ensure_structure_editable(&self, settings: &Settings) -> TrackerResult<()> {
        match self.lock(settings) {
            Lock::Open => Ok(()),
            Lock::Structure => Err(TrackerError::StructureLocked),
            Lock::Frozen => Err(TrackerError::Locked(self.status())),
        }
    }

    fn add_task(&mut self, settings: &Settings, text: &str, now: i64) -> TrackerResult<String> {
        self.ensure_structure_editable(settings)?;
        let limit = Self::task_limit(settings);
        self.tasks_mut().add_root(text, limit, now)
    }

    fn add_subtask(&mut self, settings: &Settings, parent_id: &str, text: &str, now: i64) -> TrackerResult<String> {
        self.ensure_structure_editable(settings)?;
        self.tasks_mut().add_child(parent_id, text, now)
    }

    fn remove_task(&mut self, settings: &Settings, id: &str) -> TrackerResult<Task> {
        self.ensure_structure_editable(settings)?;
        self.tasks_mut().remove(id)
    }

    fn toggle_task(&mut self, id: &str) -> TrackerResult<bool> {
        self.ensure_open()?;
        self.tasks_mut().toggle(id)
    }

    fn set_task_notes(&mut self, id: &str, notes: &str) -> TrackerResult<()> {
        self.ensure_open()?;
        self.tasks_mut().set_notes(id, notes)
    }

    /// Closes the record as completed/passed. Every root task must be done.
    fn close_success(&mut self, now: i64) -> TrackerResult<RecordStatus> {
        if self.status().is_terminal() {
            return Err(TrackerError::AlreadyClosed(self.status()));
        }
        let tasks = self.tasks();
        if !tasks.all_done() {
            return Err(TrackerError::NotAllDone {
                done: tasks.done_count(),
                total: tasks.len(),
            });
        }
        let status = Self::KIND.success_status();
        self.set_closed(status, None, now);
        Ok(status)
    }

    fn close_failed(&mut self, reason: &str, now: i64) -> TrackerResult<RecordStatus> {
        if self.status().is_terminal() {
            return Err(TrackerError::AlreadyClosed(self.status()));
        }
        let reason = reason.trim();
        if reason.is_empty() {
            return Err(TrackerError::EmptyReason);
        }
        self.set_closed(RecordStatus::Failed, Some(reason.to_string()), now);
        Ok(RecordStatus::Failed)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayRecord {
    #[serde(rename = "dateISO")]
    pub date_iso: String,
    #[serde(default)]
    pub tasks: TaskTree,
    pub status: RecordStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fail_reason: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub closed_at: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl DayRecord {
    pub fn new(date_iso: &str) -> Self {
        DayRecord {
            date_iso: date_iso.to_string(),
            tasks: TaskTree::new(),
            status: RecordStatus::Open,
            fail_reason: None,
            closed_at: None,
            notes: Some(String::new()),
        }
    }

    pub fn set_notes(&mut self, notes: &str) -> TrackerResult<()> {
        self.ensure_open()?;
        self.notes = Some(notes.to_string());
        Ok(())
    }
}

impl Record for DayRecord {
    const KIND: RecordKind = RecordKind::Day;

    fn key(&self) -> &str {
        &self.date_iso
    }
    fn tasks(&self) -> &TaskTree {
        &self.tasks
    }
    fn tasks_mut(&mut self) -> &mut TaskTree {
        &mut self.tasks
    }
    fn status(&self) -> RecordStatus {
        self.status
    }
    fn fail_reason(&self) -> Option<&str> {
        self.fail_reason.as_deref()
    }
    fn closed_at(&self) -> Option<i64> {
        self.closed_at
    }
    fn set_closed(&mut self, status: RecordStatus, fail_reason: Option<String>, closed_at: i64) {
        self.status = status;
        self.fail_reason = fail_reason;
        self.closed_at = Some(closed_at);
    }

    fn task_limit(settings: &Settings) -> usize {
        settings.daily_task_limit as usize
    }

    // The day counts as started once it has a task.
    fn structure_locked(&self, settings: &Settings) -> bool {
        settings.lock_after_start && !self.tasks.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeekRecord {
    #[serde(rename = "weekStartISO")]
    pub week_start_iso: String,
    #[serde(default)]
    pub title: String,
    #[serde(rename = "deadlineISO", default, skip_serializing_if = "Option::is_none")]
    pub deadline_iso: Option<String>,
    #[serde(default)]
    pub tasks: TaskTree,
    pub status: RecordStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fail_reason: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub closed_at: Option<i64>,
}

impl WeekRecord {
    pub fn new(week_start_iso: &str) -> Self {
        WeekRecord {
            week_start_iso: week_start_iso.to_string(),
            title: DEFAULT_WEEK_TITLE.to_string(),
            deadline_iso: None,
            tasks: TaskTree::new(),
            status: RecordStatus::Open,
            fail_reason: None,
            closed_at: None,
        }
    }

    pub fn set_title(&mut self, title: &str) -> TrackerResult<()> {
        self.ensure_open()?;
        self.title = title.to_string();
        Ok(())
    }

    pub fn set_deadline(&mut self, deadline: Option<&str>) -> TrackerResult<()> {
        self.ensure_open()?;
        self.deadline_iso = normalize_deadline(deadline)?;
        Ok(())
    }
}

impl Record for WeekRecord {
    const KIND: RecordKind = RecordKind::Week;

    fn key(&self) -> &str {
        &self.week_start_iso
    }
    fn tasks(&self) -> &TaskTree {
        &self.tasks
    }
    fn tasks_mut(&mut self) -> &mut TaskTree {
        &mut self.tasks
    }
    fn status(&self) -> RecordStatus {
        self.status
    }
    fn fail_reason(&self) -> Option<&str> {
        self.fail_reason.as_deref()
    }
    fn closed_at(&self) -> Option<i64> {
        self.closed_at
    }
    fn set_closed(&mut self, status: RecordStatus, fail_reason: Option<String>, closed_at: i64) {
        self.status = status;
        self.fail_reason = fail_reason;
        self.closed_at = Some(closed_at);
    }

    fn task_limit(_settings: &Settings) -> usize {
        WEEK_TASK_LIMIT
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthRecord {
    #[serde(rename = "monthISO")]
    pub month_iso: String,
    #[serde(rename = "deadlineISO", default, skip_serializing_if = "Option::is_none")]
    pub deadline_iso: Option<String>,
    #[serde(default)]
    pub outcomes: TaskTree,
    pub status: RecordStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fail_reason: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub closed_at: Option<i64>,
}

impl MonthRecord {
    pub fn new(month_iso: &str) -> Self {
        MonthRecord {
            month_iso: month_iso.to_string(),
            deadline_iso: None,
            outcomes: TaskTree::new(),
            status: RecordStatus::Open,
            fail_reason: None,
            closed_at: None,
        }
    }

    pub fn set_deadline(&mut self, deadline: Option<&str>) -> TrackerResult<()> {
        self.ensure_open()?;
        self.deadline_iso = normalize_deadline(deadline)?;
        Ok(())
    }
}

impl Record for MonthRecord {
    const KIND: RecordKind = RecordKind::Month;

    fn key(&self) -> &str {
        &self.month_iso
    }
    fn tasks(&self) -> &TaskTree {
        &self.outcomes
    }
    fn tasks_mut(&mut self) -> &mut TaskTree {
        &mut self.outcomes
    }
    fn status(&self) -> RecordStatus {
        self.status
    }
    fn fail_reason(&self) -> Option<&str> {
        self.fail_reason.as_deref()
    }
    fn closed_at(&self) -> Option<i64> {
        self.closed_at
    }
    fn set_closed(&mut self, status: RecordStatus, fail_reason: Option<String>, closed_at: i64) {
        self.status = status;
        self.fail_reason = fail_reason;
        self.closed_at = Some(closed_at);
    }

    fn task_limit(_settings: &Settings) -> usize {
        MONTH_OUTCOME_LIMIT
    }
}
