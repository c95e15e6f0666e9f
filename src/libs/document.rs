//! The persisted tracker document.
//!
//! One [`Document`] holds every day, week and month record, all goals and
//! the settings. It is always read and written as a whole. Missing fields
//! take their defaults, so a partial document (an older export, a
//! hand-edited file) merges over the default state.

use super::error::{TrackerError, TrackerResult};
use super::goal::Goal;
use super::record::{DayRecord, MonthRecord, Record, WeekRecord};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

pub const DEFAULT_DAILY_TASK_LIMIT: u32 = 8;
pub const MIN_DAILY_TASK_LIMIT: u32 = 1;
pub const MAX_DAILY_TASK_LIMIT: u32 = 50;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    #[serde(deserialize_with = "deserialize_daily_task_limit")]
    pub daily_task_limit: u32,
    pub lock_after_start: bool,
    /// Keys this version does not know about, kept so they survive a rewrite.
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            daily_task_limit: DEFAULT_DAILY_TASK_LIMIT,
            lock_after_start: false,
            extra: BTreeMap::new(),
        }
    }
}

impl Settings {
    /// Sets the daily limit, clamped to 1..=50. Returns the stored value.
    pub fn set_daily_task_limit(&mut self, limit: i64) -> u32 {
        self.daily_task_limit = clamp_daily_task_limit(limit);
        self.daily_task_limit
    }
}

fn clamp_daily_task_limit(limit: i64) -> u32 {
    limit.clamp(MIN_DAILY_TASK_LIMIT as i64, MAX_DAILY_TASK_LIMIT as i64) as u32
}

fn deserialize_daily_task_limit<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u32, D::Error> {
    let limit = lenient_int(deserializer)?.unwrap_or(DEFAULT_DAILY_TASK_LIMIT as i64);
    Ok(clamp_daily_task_limit(limit))
}

/// Reads any JSON number as an integer, rounding down. Values that are not
/// numbers (strings, booleans, null) read as `None`.
pub fn lenient_int<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<i64>, D::Error> {
    let value = Value::deserialize(deserializer)?;
    Ok(value
        .as_i64()
        .or_else(|| value.as_f64().filter(|n| n.is_finite()).map(|n| n.floor() as i64)))
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Document {
    pub days: BTreeMap<String, DayRecord>,
    pub weeks: BTreeMap<String, WeekRecord>,
    pub months: BTreeMap<String, MonthRecord>,
    pub goals: BTreeMap<String, Goal>,
    pub settings: Settings,
    /// Top-level keys this version does not know about.
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl Document {
    /// Parses a document and merges it over the defaults.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// The record for `key`, or a fresh open one if the day was never touched.
    pub fn day(&self, key: &str) -> DayRecord {
        self.days.get(key).cloned().unwrap_or_else(|| DayRecord::new(key))
    }

    pub fn day_mut(&mut self, key: &str) -> &mut DayRecord {
        self.days.entry(key.to_string()).or_insert_with(|| DayRecord::new(key))
    }

    pub fn week(&self, key: &str) -> WeekRecord {
        self.weeks.get(key).cloned().unwrap_or_else(|| WeekRecord::new(key))
    }

    pub fn week_mut(&mut self, key: &str) -> &mut WeekRecord {
        self.weeks.entry(key.to_string()).or_insert_with(|| WeekRecord::new(key))
    }

    pub fn month(&self, key: &str) -> MonthRecord {
        self.months.get(key).cloned().unwrap_or_else(|| MonthRecord::new(key))
    }

    pub fn month_mut(&mut self, key: &str) -> &mut MonthRecord {
        self.months.entry(key.to_string()).or_insert_with(|| MonthRecord::new(key))
    }

    /// Goals ordered by creation time, newest first.
    pub fn goals_newest_first(&self) -> Vec<&Goal> {
        let mut goals: Vec<&Goal> = self.goals.values().collect();
        goals.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        goals
    }

    pub fn add_goal(&mut self, goal: Goal) -> String {
        let id = goal.id.clone();
        self.goals.insert(id.clone(), goal);
        id
    }

    pub fn goal(&self, id: &str) -> TrackerResult<&Goal> {
        self.goals.get(id).ok_or_else(|| TrackerError::GoalNotFound(id.to_string()))
    }

    pub fn goal_mut(&mut self, id: &str) -> TrackerResult<&mut Goal> {
        self.goals.get_mut(id).ok_or_else(|| TrackerError::GoalNotFound(id.to_string()))
    }

    pub fn remove_goal(&mut self, id: &str) -> TrackerResult<Goal> {
        self.goals.remove(id).ok_or_else(|| TrackerError::GoalNotFound(id.to_string()))
    }
}

/// Keyed access to one kind of record inside the document.
pub trait StoredRecord: Record + Sized {
    /// Reads the record, materializing a default open one if absent.
    fn load(doc: &Document, key: &str) -> Self;
    /// Mutable slot for the record, inserted on first access.
    fn slot<'a>(doc: &'a mut Document, key: &str) -> &'a mut Self;
}

impl StoredRecord for DayRecord {
    fn load(doc: &Document, key: &str) -> Self {
        doc.day(key)
    }
    fn slot<'a>(doc: &'a mut Document, key: &str) -> &'a mut Self {
        doc.day_mut(key)
    }
}

impl StoredRecord for WeekRecord {
    fn load(doc: &Document, key: &str) -> Self {
        doc.week(key)
    }
    fn slot<'a>(doc: &'a mut Document, key: &str) -> &'a mut Self {
        doc.week_mut(key)
    }
}

impl StoredRecord for MonthRecord {
    fn load(doc: &Document, key: &str) -> Self {
        doc.month(key)
    }
    fn slot<'a>(doc: &'a mut Document, key: &str) -> &'a mut Self {
        doc.month_mut(key)
    }
}
