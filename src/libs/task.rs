//! Recursive required-task tree.
//!
//! A [`TaskTree`] is the ordered list of root tasks owned by a day, week or
//! month record. Nodes are addressed by id; every lookup goes through the
//! same depth-first walk, which yields the index path of a node inside the
//! tree. Completion is stored per node and never propagates to parents or
//! children.

use super::error::{TrackerError, TrackerResult};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

/// Generates an identifier of the form `<prefix>_<uuid>`.
pub fn uid(prefix: &str) -> String {
    format!("{}_{}", prefix, Uuid::new_v4().simple())
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    pub text: String,
    pub done: bool,
    /// Creation time in epoch milliseconds.
    pub created_at: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default)]
    pub subtasks: Vec<Task>,
}

impl Task {
    pub fn new(id: String, text: &str, created_at: i64) -> Self {
        Task {
            id,
            text: text.to_string(),
            done: false,
            created_at,
            notes: Some(String::new()),
            subtasks: Vec::new(),
        }
    }
}

/// Index path from the root list down to a node.
pub type TaskPath = Vec<usize>;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskTree(Vec<Task>);

impl TaskTree {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn roots(&self) -> &[Task] {
        &self.0
    }

    /// Number of root (required) tasks.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn done_count(&self) -> usize {
        self.0.iter().filter(|t| t.done).count()
    }

    /// True when there is at least one root task and every root task is done.
    pub fn all_done(&self) -> bool {
        !self.0.is_empty() && self.0.iter().all(|t| t.done)
    }

    /// Pre-order traversal yielding `(depth, task)` pairs.
    pub fn walk(&self) -> Vec<(usize, &Task)> {
        let mut out = Vec::new();
        visit(&self.0, &mut Vec::new(), &mut |path, task| out.push((path.len() - 1, task)));
        out
    }

    /// Id to index-path map over the whole tree. On duplicate ids the first
    /// node in pre-order wins.
    pub fn index(&self) -> HashMap<String, TaskPath> {
        let mut index = HashMap::new();
        visit(&self.0, &mut Vec::new(), &mut |path, task| {
            index.entry(task.id.clone()).or_insert_with(|| path.to_vec());
        });
        index
    }

    pub fn find(&self, id: &str) -> Option<&Task> {
        let path = self.path_of(id)?;
        self.node(&path)
    }

    pub fn find_mut(&mut self, id: &str) -> Option<&mut Task> {
        let path = self.path_of(id)?;
        self.node_mut(&path)
    }

    /// Direct children progress of a node as `(done, total)`.
    pub fn subtask_progress(&self, id: &str) -> Option<(usize, usize)> {
        self.find(id).map(|t| (t.subtasks.iter().filter(|s| s.done).count(), t.subtasks.len()))
    }

    /// Appends a root task unless the text is blank or `limit` root tasks
    /// already exist. Returns the new task id.
    pub fn add_root(&mut self, text: &str, limit: usize, now: i64) -> TrackerResult<String> {
        let text = text.trim();
        if text.is_empty() {
            return Err(TrackerError::EmptyText);
        }
        if self.0.len() >= limit {
            return Err(TrackerError::LimitReached(limit));
        }
        let task = Task::new(uid("task"), text, now);
        let id = task.id.clone();
        self.0.push(task);
        Ok(id)
    }

    /// Appends a child under `parent_id`. Returns the new task id.
    pub fn add_child(&mut self, parent_id: &str, text: &str, now: i64) -> TrackerResult<String> {
        let text = text.trim();
        if text.is_empty() {
            return Err(TrackerError::EmptyText);
        }
        let parent = self.find_mut(parent_id).ok_or_else(|| TrackerError::TaskNotFound(parent_id.to_string()))?;
        let child = Task::new(uid("sub"), text, now);
        let id = child.id.clone();
        parent.subtasks.push(child);
        Ok(id)
    }

    /// Flips the done flag of one node and returns its new value.
    pub fn toggle(&mut self, id: &str) -> TrackerResult<bool> {
        let task = self.find_mut(id).ok_or_else(|| TrackerError::TaskNotFound(id.to_string()))?;
        task.done = !task.done;
        Ok(task.done)
    }

    pub fn set_notes(&mut self, id: &str, notes: &str) -> TrackerResult<()> {
        let task = self.find_mut(id).ok_or_else(|| TrackerError::TaskNotFound(id.to_string()))?;
        task.notes = Some(notes.to_string());
        Ok(())
    }

    /// Detaches a node together with its subtree.
    pub fn remove(&mut self, id: &str) -> TrackerResult<Task> {
        let not_found = || TrackerError::TaskNotFound(id.to_string());
        let path = self.path_of(id).ok_or_else(not_found)?;
        let (last, parent_path) = path.split_last().ok_or_else(not_found)?;
        let siblings = if parent_path.is_empty() {
            &mut self.0
        } else {
            &mut self.node_mut(parent_path).ok_or_else(not_found)?.subtasks
        };
        Ok(siblings.remove(*last))
    }

    fn path_of(&self, id: &str) -> Option<TaskPath> {
        let mut found = None;
        visit(&self.0, &mut Vec::new(), &mut |path, task| {
            if found.is_none() && task.id == id {
                found = Some(path.to_vec());
            }
        });
        found
    }

    fn node(&self, path: &[usize]) -> Option<&Task> {
        let (first, rest) = path.split_first()?;
        let mut node = self.0.get(*first)?;
        for i in rest {
            node = node.subtasks.get(*i)?;
        }
        Some(node)
    }

    fn node_mut(&mut self, path: &[usize]) -> Option<&mut Task> {
        let (first, rest) = path.split_first()?;
        let mut node = self.0.get_mut(*first)?;
        for i in rest {
            node = node.subtasks.get_mut(*i)?;
        }
        Some(node)
    }
}

impl From<Vec<Task>> for TaskTree {
    fn from(tasks: Vec<Task>) -> Self {
        Self(tasks)
    }
}

fn visit<'a, F>(tasks: &'a [Task], path: &mut TaskPath, f: &mut F)
where
    F: FnMut(&[usize], &'a Task),
{
    for (i, task) in tasks.iter().enumerate() {
        path.push(i);
        f(path, task);
        visit(&task.subtasks, path, f);
        path.pop();
    }
}
