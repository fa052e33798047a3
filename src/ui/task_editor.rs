use chrono::NaiveDate;
use egui::{RichText, Ui};
use egui_phosphor::regular as icons;

use crate::model::Task;
use crate::ui::project_editor::status_combo;
use crate::ui::{self, theme};

/// Actions the task editor can request.
pub enum TaskEditorAction {
    None,
    Changed,
    Back,
}

/// Render the detail form for a single task.
pub fn show_task_editor(
    task: &mut Task,
    project_name: &str,
    today: NaiveDate,
    ui: &mut Ui,
) -> TaskEditorAction {
    let mut action = TaskEditorAction::None;

    ui.add_space(6.0);
    let back = ui.add(
        egui::Button::new(
            RichText::new(format!("{}  {}", icons::ARROW_LEFT, project_name))
                .size(11.0)
                .color(theme::TEXT_SECONDARY),
        )
        .frame(false),
    );
    if back.clicked() {
        return TaskEditorAction::Back;
    }
    ui.heading(RichText::new(task.display_name()).strong());
    ui.add_space(6.0);

    let frame = egui::Frame {
        fill: theme::BG_DARK,
        rounding: egui::Rounding::same(6.0),
        inner_margin: egui::Margin::same(10.0),
        outer_margin: egui::Margin::ZERO,
        stroke: egui::Stroke::new(1.0, theme::BORDER_SUBTLE),
        shadow: egui::epaint::Shadow::NONE,
    };

    frame.show(ui, |ui| {
        ui.spacing_mut().item_spacing.y = 6.0;

        ui.label(theme::field_label("Name"));
        let mut name = task.name.clone().unwrap_or_default();
        let name_edit = ui.add_sized(
            [ui.available_width(), theme::FIELD_HEIGHT],
            egui::TextEdit::singleline(&mut name)
                .hint_text("Task Name")
                .text_color(theme::TEXT_PRIMARY),
        );
        if name_edit.changed() {
            task.name = Some(name);
            action = TaskEditorAction::Changed;
        }

        ui.horizontal(|ui| {
            ui.vertical(|ui| {
                ui.label(theme::field_label("Start"));
                if ui::optional_date_picker(ui, &mut task.start, today, "task_start") {
                    ui::clamp_range(&mut task.start, &mut task.end, true);
                    action = TaskEditorAction::Changed;
                }
            });
            ui.add_space(8.0);
            ui.vertical(|ui| {
                ui.label(theme::field_label("End"));
                if ui::optional_date_picker(ui, &mut task.end, today, "task_end") {
                    ui::clamp_range(&mut task.start, &mut task.end, false);
                    action = TaskEditorAction::Changed;
                }
            });
        });

        ui.label(theme::field_label("Status"));
        if status_combo(ui, "task_status", &mut task.status) {
            action = TaskEditorAction::Changed;
        }
    });

    action
}
