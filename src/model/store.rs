use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{info, trace};
use uuid::Uuid;

use super::filter;
use super::project::Project;
use super::task::Task;
use crate::error::{Error, Result};

/// Owner of every project (and through them, every task).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Store {
    #[serde(default)]
    pub projects: Vec<Project>,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_project(&mut self, mut project: Project) -> Uuid {
        project.relink_tasks();
        let id = project.id;
        info!(%id, name = project.display_name(), "project added");
        self.projects.push(project);
        id
    }

    /// Remove a project together with the tasks it owns.
    pub fn delete_project(&mut self, id: Uuid) -> Option<Project> {
        let idx = self.projects.iter().position(|p| p.id == id)?;
        let project = self.projects.remove(idx);
        info!(%id, tasks = project.tasks.len(), "project deleted");
        Some(project)
    }

    pub fn add_task(&mut self, project_id: Uuid, task: Task) -> Result<Uuid> {
        let project = self
            .project_mut(project_id)
            .ok_or(Error::ProjectNotFound(project_id))?;
        let id = project.add_task(task);
        info!(%project_id, task_id = %id, "task added");
        Ok(id)
    }

    pub fn delete_task(&mut self, project_id: Uuid, task_id: Uuid) -> Option<Task> {
        let task = self.project_mut(project_id)?.remove_task(task_id)?;
        info!(%project_id, %task_id, "task deleted");
        Some(task)
    }

    pub fn project(&self, id: Uuid) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }

    pub fn project_mut(&mut self, id: Uuid) -> Option<&mut Project> {
        self.projects.iter_mut().find(|p| p.id == id)
    }

    pub fn task(&self, project_id: Uuid, task_id: Uuid) -> Option<&Task> {
        self.project(project_id)?.task(task_id)
    }

    pub fn task_mut(&mut self, project_id: Uuid, task_id: Uuid) -> Option<&mut Task> {
        self.project_mut(project_id)?.task_mut(task_id)
    }

    /// All projects by start date ascending. Projects without a start date
    /// come first; ties keep insertion order.
    pub fn projects_by_start(&self) -> Vec<&Project> {
        let mut sorted: Vec<&Project> = self.projects.iter().collect();
        sorted.sort_by_key(|p| p.start);
        sorted
    }

    /// Projects running on `date`, in start-date order.
    pub fn projects_on(&self, date: NaiveDate) -> Vec<&Project> {
        let matching = filter::projects_on_date(date, self.projects_by_start());
        trace!(%date, matching = matching.len(), total = self.projects.len(), "filtered projects");
        matching
    }

    /// Re-point task back-references after deserialization.
    pub fn relink(&mut self) {
        for project in &mut self.projects {
            project.relink_tasks();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn add_and_delete_project() {
        let mut store = Store::new();
        let id = store.add_project(Project::new("Garden", date(2024, 4, 1), date(2024, 4, 30)));
        assert_eq!(store.project(id).unwrap().display_name(), "Garden");
        let removed = store.delete_project(id).unwrap();
        assert_eq!(removed.id, id);
        assert!(store.project(id).is_none());
        assert!(store.delete_project(id).is_none());
    }

    #[test]
    fn deleting_a_project_drops_its_tasks() {
        let mut store = Store::new();
        let pid = store.add_project(Project::new("Garden", date(2024, 4, 1), date(2024, 4, 30)));
        let tid = store
            .add_task(pid, Task::new(pid, "Seeds", date(2024, 4, 2), date(2024, 4, 3)))
            .unwrap();
        store.delete_project(pid);
        assert!(store.task(pid, tid).is_none());
    }

    #[test]
    fn add_task_to_missing_project_fails() {
        let mut store = Store::new();
        let missing = Uuid::new_v4();
        let task = Task::new(missing, "Orphan", date(2024, 1, 1), date(2024, 1, 2));
        match store.add_task(missing, task) {
            Err(Error::ProjectNotFound(id)) => assert_eq!(id, missing),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn add_and_delete_task() {
        let mut store = Store::new();
        let pid = store.add_project(Project::new("Garden", date(2024, 4, 1), date(2024, 4, 30)));
        let tid = store
            .add_task(pid, Task::new(Uuid::nil(), "Seeds", date(2024, 4, 2), date(2024, 4, 3)))
            .unwrap();
        assert_eq!(store.task(pid, tid).unwrap().project_id, pid);

        store.task_mut(pid, tid).unwrap().name = Some("Bulbs".into());
        assert_eq!(store.task(pid, tid).unwrap().display_name(), "Bulbs");

        assert!(store.delete_task(pid, tid).is_some());
        assert!(store.delete_task(pid, tid).is_none());
    }

    #[test]
    fn projects_by_start_puts_undated_first() {
        let mut store = Store::new();
        let late = store.add_project(Project::new("Late", date(2024, 5, 1), date(2024, 5, 2)));
        let early = store.add_project(Project::new("Early", date(2024, 1, 1), date(2024, 1, 2)));
        let mut undated = Project::new("Undated", date(2024, 1, 1), date(2024, 1, 2));
        undated.start = None;
        let undated = store.add_project(undated);

        let order: Vec<Uuid> = store.projects_by_start().iter().map(|p| p.id).collect();
        assert_eq!(order, vec![undated, early, late]);
    }

    #[test]
    fn projects_on_filters_in_start_order() {
        let mut store = Store::new();
        let b = store.add_project(Project::new("B", date(2024, 1, 5), date(2024, 1, 20)));
        let a = store.add_project(Project::new("A", date(2024, 1, 1), date(2024, 1, 31)));
        store.add_project(Project::new("C", date(2024, 2, 1), date(2024, 2, 28)));

        let on: Vec<Uuid> = store.projects_on(date(2024, 1, 10)).iter().map(|p| p.id).collect();
        assert_eq!(on, vec![a, b]);
        assert!(store.projects_on(date(2023, 1, 1)).is_empty());
    }
}
