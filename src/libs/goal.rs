//! Yearly goals with milestones.

use super::error::{TrackerError, TrackerResult};
use super::period::normalize_deadline;
use super::task::uid;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Milestone {
    pub id: String,
    pub text: String,
    pub done: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Goal {
    pub id: String,
    pub title: String,
    #[serde(rename = "deadlineISO", default, skip_serializing_if = "Option::is_none")]
    pub deadline_iso: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub why: Option<String>,
    #[serde(default)]
    pub milestones: Vec<Milestone>,
    pub created_at: i64,
}

impl Goal {
    /// Builds a goal from form input. The title is required; a blank
    /// deadline or rationale is stored as absent.
    pub fn new(title: &str, deadline: Option<&str>, why: Option<&str>, created_at: i64) -> TrackerResult<Self> {
        let title = title.trim();
        if title.is_empty() {
            return Err(TrackerError::EmptyText);
        }
        Ok(Goal {
            id: uid("goal"),
            title: title.to_string(),
            deadline_iso: normalize_deadline(deadline)?,
            why: why.map(str::trim).filter(|w| !w.is_empty()).map(str::to_string),
            milestones: Vec::new(),
            created_at,
        })
    }

    pub fn set_deadline(&mut self, deadline: Option<&str>) -> TrackerResult<()> {
        self.deadline_iso = normalize_deadline(deadline)?;
        Ok(())
    }

    pub fn set_why(&mut self, why: &str) {
        self.why = Some(why.to_string());
    }

    pub fn progress(&self) -> (usize, usize) {
        (self.milestones.iter().filter(|m| m.done).count(), self.milestones.len())
    }

    pub fn add_milestone(&mut self, text: &str) -> TrackerResult<String> {
        let text = text.trim();
        if text.is_empty() {
            return Err(TrackerError::EmptyText);
        }
        let milestone = Milestone {
            id: uid("ms"),
            text: text.to_string(),
            done: false,
            notes: None,
        };
        let id = milestone.id.clone();
        self.milestones.push(milestone);
        Ok(id)
    }

    pub fn toggle_milestone(&mut self, id: &str) -> TrackerResult<bool> {
        let milestone = self.milestone_mut(id)?;
        milestone.done = !milestone.done;
        Ok(milestone.done)
    }

    pub fn set_milestone_notes(&mut self, id: &str, notes: &str) -> TrackerResult<()> {
        self.milestone_mut(id)?.notes = Some(notes.to_string());
        Ok(())
    }

    pub fn remove_milestone(&mut self, id: &str) -> TrackerResult<Milestone> {
        let pos = self
            .milestones
            .iter()
            .position(|m| m.id == id)
            .ok_or_else(|| TrackerError::MilestoneNotFound(id.to_string()))?;
        Ok(self.milestones.remove(pos))
    }

    fn milestone_mut(&mut self, id: &str) -> TrackerResult<&mut Milestone> {
        self.milestones
            .iter_mut()
            .find(|m| m.id == id)
            .ok_or_else(|| TrackerError::MilestoneNotFound(id.to_string()))
    }
}
