use std::path::Path;

use tracing::{debug, info};

use crate::error::Result;
use crate::model::Store;

/// Save the store to a JSON file.
///
/// Writes to a sibling temp file first and renames it over `path`, so a failed
/// write leaves the previous file intact.
pub fn save_store(store: &Store, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(store)?;
    let tmp = path.with_extension("json.tmp");
    std::fs::write(&tmp, json)?;
    std::fs::rename(&tmp, path)?;
    info!(path = %path.display(), projects = store.projects.len(), "store saved");
    Ok(())
}

/// Load the store from a JSON file. A missing file is an empty store.
pub fn load_store(path: &Path) -> Result<Store> {
    if !path.exists() {
        debug!(path = %path.display(), "no data file yet, starting empty");
        return Ok(Store::new());
    }
    let json = std::fs::read_to_string(path)?;
    let mut store: Store = serde_json::from_str(&json)?;
    store.relink();
    info!(path = %path.display(), projects = store.projects.len(), "store loaded");
    Ok(store)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::model::{Project, Status, Task};
    use chrono::NaiveDate;
    use uuid::Uuid;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn missing_file_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = load_store(&dir.path().join("nothing.json")).unwrap();
        assert!(store.projects.is_empty());
    }

    #[test]
    fn saved_store_loads_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("projex.json");

        let mut store = Store::new();
        let mut project = Project::new("Renovation", date(2024, 1, 1), date(2024, 3, 31));
        project.status = Status::RunningBehind;
        let pid = store.add_project(project);
        let mut task = Task::new(pid, "Demolition", date(2024, 1, 2), date(2024, 1, 9));
        task.status = Status::Completed;
        task.end = None;
        let tid = store.add_task(pid, task).unwrap();

        save_store(&store, &path).unwrap();
        let loaded = load_store(&path).unwrap();

        assert_eq!(loaded, store);
        let task = loaded.task(pid, tid).unwrap();
        assert_eq!(task.status, Status::Completed);
        assert_eq!(task.end, None);
        assert_eq!(task.project_id, pid);
    }

    #[test]
    fn status_codes_are_written_as_integers() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("projex.json");
        let mut store = Store::new();
        let mut project = Project::new("Codes", date(2024, 1, 1), date(2024, 1, 1));
        project.status = Status::Completed;
        store.add_project(project);
        save_store(&store, &path).unwrap();

        let raw: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(raw["projects"][0]["status"], serde_json::json!(2));
    }

    #[test]
    fn unknown_codes_and_stale_back_references_are_repaired() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("projex.json");
        let pid = Uuid::new_v4();
        let wide = Uuid::new_v4();
        let json = serde_json::json!({
            "projects": [{
                "id": wide,
                "status": u64::MAX,
                "tasks": [{
                    "id": Uuid::new_v4(),
                    "status": 9_223_372_036_854_775_808u64,
                }],
            }, {
                "id": pid,
                "name": null,
                "start": "2024-01-01",
                "status": 9,
                "tasks": [{
                    "id": Uuid::new_v4(),
                    "name": "Legacy",
                    "status": -3,
                    "project_id": Uuid::nil(),
                }],
            }],
        });
        std::fs::write(&path, json.to_string()).unwrap();

        let store = load_store(&path).unwrap();
        let project = store.project(pid).unwrap();
        assert_eq!(project.status, Status::OnTime);
        assert_eq!(project.end, None);
        assert_eq!(project.display_name(), "Unnamed Project");
        assert_eq!(project.tasks[0].status, Status::OnTime);
        assert_eq!(project.tasks[0].project_id, pid);

        let wide = store.project(wide).unwrap();
        assert_eq!(wide.status, Status::OnTime);
        assert_eq!(wide.tasks[0].status, Status::OnTime);
        assert_eq!(wide.tasks[0].project_id, wide.id);
    }

    #[test]
    fn corrupt_file_is_a_json_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("projex.json");
        std::fs::write(&path, "{ not json").unwrap();
        assert!(matches!(load_store(&path), Err(Error::Json(_))));
    }
}
