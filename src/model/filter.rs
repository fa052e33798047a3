//! Date filtering for the project list and name ordering for task lists.

use chrono::NaiveDate;

use super::project::Project;
use super::task::Task;

/// Projects whose inclusive `[start, end]` range contains `date`.
///
/// Projects missing either date are skipped. The input order is kept.
pub fn projects_on_date<'a, I>(date: NaiveDate, projects: I) -> Vec<&'a Project>
where
    I: IntoIterator<Item = &'a Project>,
{
    projects.into_iter().filter(|p| p.covers(date)).collect()
}

/// Tasks ordered by name, case-sensitive, missing names first.
/// Equal names keep their insertion order.
pub fn sorted_tasks(tasks: &[Task]) -> Vec<&Task> {
    let mut sorted: Vec<&Task> = tasks.iter().collect();
    sorted.sort_by(|a, b| a.sort_key().cmp(b.sort_key()));
    sorted
}
