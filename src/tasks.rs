//! Local view of the server's scheduled tasks.
//!
//! The list is fetched once and mutated locally after each successful
//! delete; there is no re-fetch, so a delete the server silently ignores
//! leaves the two sides diverged until the next full listing.

use anyhow::Result;

use crate::api::{AdminApi, TaskDescriptor, TaskMap};

pub const NO_TASKS_MESSAGE: &str = "No tasks available";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskEntry {
    pub id: String,
    pub descriptor: TaskDescriptor,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskList {
    entries: Vec<TaskEntry>,
}

impl TaskList {
    /// The map iterates in id order, so listings are stable across fetches.
    pub fn from_map(tasks: TaskMap) -> Self {
        let entries = tasks
            .into_iter()
            .map(|(id, descriptor)| TaskEntry { id, descriptor })
            .collect();
        Self { entries }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn entries(&self) -> &[TaskEntry] {
        &self.entries
    }

    /// Removes the entry with the given id, if present. At most one entry
    /// is removed; unknown ids are a no-op.
    pub fn remove(&mut self, task_id: &str) -> bool {
        match self.entries.iter().position(|entry| entry.id == task_id) {
            Some(index) => {
                self.entries.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn render_lines(&self) -> Vec<String> {
        if self.entries.is_empty() {
            return vec![NO_TASKS_MESSAGE.to_string()];
        }
        self.entries
            .iter()
            .map(|entry| {
                format!(
                    "{}  {}  (id: {})",
                    entry.descriptor.task_type, entry.descriptor.url, entry.id
                )
            })
            .collect()
    }
}

/// Deletes a task on the server, then drops it from the local list. The
/// list is untouched when the request fails.
pub async fn delete_task(api: &dyn AdminApi, list: &mut TaskList, task_id: &str) -> Result<bool> {
    api.delete_task(task_id).await?;
    Ok(list.remove(task_id))
}
