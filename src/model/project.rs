use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::filter;
use super::status::Status;
use super::task::Task;

/// A trackable unit of work with a date range and the tasks it owns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: Uuid,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub start: Option<NaiveDate>,
    #[serde(default)]
    pub end: Option<NaiveDate>,
    #[serde(default)]
    pub status: Status,
    #[serde(default)]
    pub tasks: Vec<Task>,
}

impl Project {
    pub fn new(name: impl Into<String>, start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: Some(name.into()),
            start: Some(start),
            end: Some(end),
            status: Status::OnTime,
            tasks: Vec::new(),
        }
    }

    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("Unnamed Project")
    }

    /// Whether the project's inclusive date range contains `date`.
    /// A project missing either date never matches.
    pub fn covers(&self, date: NaiveDate) -> bool {
        match (self.start, self.end) {
            (Some(start), Some(end)) => start <= date && date <= end,
            _ => false,
        }
    }

    /// Append a task, pointing its back-reference at this project.
    pub fn add_task(&mut self, mut task: Task) -> Uuid {
        task.project_id = self.id;
        let id = task.id;
        self.tasks.push(task);
        id
    }

    pub fn remove_task(&mut self, task_id: Uuid) -> Option<Task> {
        let idx = self.tasks.iter().position(|t| t.id == task_id)?;
        Some(self.tasks.remove(idx))
    }

    pub fn task(&self, task_id: Uuid) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == task_id)
    }

    pub fn task_mut(&mut self, task_id: Uuid) -> Option<&mut Task> {
        self.tasks.iter_mut().find(|t| t.id == task_id)
    }

    /// Tasks in display order (by name, see [`filter::sorted_tasks`]).
    pub fn sorted_tasks(&self) -> Vec<&Task> {
        filter::sorted_tasks(&self.tasks)
    }

    /// Re-point every task's back-reference at this project.
    pub fn relink_tasks(&mut self) {
        for task in &mut self.tasks {
            task.project_id = self.id;
        }
    }
}
