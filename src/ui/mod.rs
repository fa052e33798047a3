pub mod dialogs;
pub mod project_editor;
pub mod project_list;
pub mod task_editor;
pub mod theme;
pub mod toolbar;

use chrono::NaiveDate;
use egui::Ui;

/// Date picker over an optional date. A missing date shows as `fallback`;
/// picking a date stores it. Returns true when the value changed.
pub fn optional_date_picker(
    ui: &mut Ui,
    value: &mut Option<NaiveDate>,
    fallback: NaiveDate,
    id_salt: &str,
) -> bool {
    let mut date = value.unwrap_or(fallback);
    let changed = ui
        .add(egui_extras::DatePickerButton::new(&mut date).id_salt(id_salt))
        .changed();
    if changed {
        *value = Some(date);
    }
    changed
}

/// Keep `start <= end` after one side was edited. `start_moved` says which.
pub fn clamp_range(start: &mut Option<NaiveDate>, end: &mut Option<NaiveDate>, start_moved: bool) {
    if let (Some(s), Some(e)) = (*start, *end) {
        if s > e {
            if start_moved {
                *end = Some(s);
            } else {
                *start = Some(e);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, d).unwrap()
    }

    #[test]
    fn moving_start_past_end_drags_end() {
        let (mut s, mut e) = (Some(date(12)), Some(date(10)));
        clamp_range(&mut s, &mut e, true);
        assert_eq!((s, e), (Some(date(12)), Some(date(12))));
    }

    #[test]
    fn moving_end_before_start_drags_start() {
        let (mut s, mut e) = (Some(date(12)), Some(date(10)));
        clamp_range(&mut s, &mut e, false);
        assert_eq!((s, e), (Some(date(10)), Some(date(10))));
    }

    #[test]
    fn missing_dates_are_left_alone() {
        let (mut s, mut e) = (None, Some(date(10)));
        clamp_range(&mut s, &mut e, false);
        assert_eq!((s, e), (None, Some(date(10))));
    }
}
