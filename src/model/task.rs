use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::status::Status;

/// Short date format used in task rows.
const SHORT_DATE: &str = "%m/%d/%y";

/// A unit of work belonging to exactly one project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: Uuid,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub start: Option<NaiveDate>,
    #[serde(default)]
    pub end: Option<NaiveDate>,
    #[serde(default)]
    pub status: Status,
    /// Owning project. Non-owning; the project holds the task.
    /// Re-pointed on load, so a missing value is harmless.
    #[serde(default)]
    pub project_id: Uuid,
}

impl Task {
    /// Create a task for the given project.
    pub fn new(
        project_id: Uuid,
        name: impl Into<String>,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: Some(name.into()),
            start: Some(start),
            end: Some(end),
            status: Status::OnTime,
            project_id,
        }
    }

    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("Unnamed Task")
    }

    /// Name used for ordering; a missing name sorts as the empty string.
    pub fn sort_key(&self) -> &str {
        self.name.as_deref().unwrap_or("")
    }

    pub fn start_date_string(&self) -> String {
        self.start
            .map(|d| d.format(SHORT_DATE).to_string())
            .unwrap_or_else(|| "No start date".to_string())
    }

    pub fn end_date_string(&self) -> String {
        self.end
            .map(|d| d.format(SHORT_DATE).to_string())
            .unwrap_or_else(|| "No end date".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn date_strings_fall_back_when_missing() {
        let project = Uuid::new_v4();
        let d = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();
        let mut task = Task::new(project, "Write report", d, d);
        assert_eq!(task.start_date_string(), "03/09/24");
        task.start = None;
        task.end = None;
        assert_eq!(task.start_date_string(), "No start date");
        assert_eq!(task.end_date_string(), "No end date");
    }

    #[test]
    fn unnamed_task_display() {
        let d = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();
        let mut task = Task::new(Uuid::new_v4(), "x", d, d);
        task.name = None;
        assert_eq!(task.display_name(), "Unnamed Task");
        assert_eq!(task.sort_key(), "");
    }
}
