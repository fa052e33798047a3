use chrono::NaiveDate;
use egui::{Color32, RichText, Ui};
use egui_phosphor::regular as icons;
use uuid::Uuid;

use crate::model::{Project, Status};
use crate::ui::{self, theme};

/// Actions the project editor can request.
pub enum ProjectEditorAction {
    None,
    Changed,
    OpenTask(Uuid),
    DeleteTask(Uuid),
    AddTask,
}

/// Status picker shared by the project and task forms.
pub fn status_combo(ui: &mut Ui, id_salt: &str, status: &mut Status) -> bool {
    let mut changed = false;
    egui::ComboBox::from_id_salt(id_salt)
        .selected_text(RichText::new(status.label()).color(theme::status_color(*status)))
        .width(ui.available_width().min(220.0))
        .show_ui(ui, |ui| {
            for s in Status::all() {
                let text = RichText::new(s.label()).color(theme::status_color(*s));
                if ui.selectable_value(status, *s, text).changed() {
                    changed = true;
                }
            }
        });
    changed
}

/// Render the detail form for a project and its task list.
pub fn show_project_editor(
    project: &mut Project,
    today: NaiveDate,
    edit_mode: bool,
    ui: &mut Ui,
) -> ProjectEditorAction {
    let mut action = ProjectEditorAction::None;

    ui.add_space(6.0);
    ui.heading(RichText::new(project.display_name()).strong());
    ui.add_space(6.0);

    let frame = egui::Frame {
        fill: theme::BG_DARK,
        rounding: egui::Rounding::same(6.0),
        inner_margin: egui::Margin::same(10.0),
        outer_margin: egui::Margin::ZERO,
        stroke: egui::Stroke::new(1.0, theme::BORDER_SUBTLE),
        shadow: egui::epaint::Shadow::NONE,
    };

    // ── Project Details ─────────────────────────────────────────────
    ui.label(theme::field_label("PROJECT DETAILS"));
    frame.show(ui, |ui| {
        ui.spacing_mut().item_spacing.y = 6.0;

        ui.label(theme::field_label("Name"));
        let mut name = project.name.clone().unwrap_or_default();
        let name_edit = ui.add_sized(
            [ui.available_width(), theme::FIELD_HEIGHT],
            egui::TextEdit::singleline(&mut name)
                .hint_text("Project Name")
                .text_color(theme::TEXT_PRIMARY),
        );
        if name_edit.changed() {
            project.name = Some(name);
            action = ProjectEditorAction::Changed;
        }

        ui.horizontal(|ui| {
            ui.vertical(|ui| {
                ui.label(theme::field_label("Start"));
                if ui::optional_date_picker(ui, &mut project.start, today, "project_start") {
                    ui::clamp_range(&mut project.start, &mut project.end, true);
                    action = ProjectEditorAction::Changed;
                }
            });
            ui.add_space(8.0);
            ui.vertical(|ui| {
                ui.label(theme::field_label("End"));
                if ui::optional_date_picker(ui, &mut project.end, today, "project_end") {
                    ui::clamp_range(&mut project.start, &mut project.end, false);
                    action = ProjectEditorAction::Changed;
                }
            });
        });

        ui.label(theme::field_label("Status"));
        if status_combo(ui, "project_status", &mut project.status) {
            action = ProjectEditorAction::Changed;
        }
    });

    ui.add_space(10.0);

    // ── Tasks ───────────────────────────────────────────────────────
    ui.horizontal(|ui| {
        ui.label(theme::field_label("TASKS"));
        ui.label(
            RichText::new(format!("({})", project.tasks.len()))
                .size(10.0)
                .color(theme::TEXT_DIM),
        );
    });
    frame.show(ui, |ui| {
        ui.set_width(ui.available_width());

        for task in project.sorted_tasks() {
            ui.horizontal(|ui| {
                let color = theme::status_color(task.status);
                let row = ui.vertical(|ui| {
                    ui.label(RichText::new(task.display_name()).size(12.5).color(color));
                    ui.label(
                        RichText::new(format!(
                            "{} - {}",
                            task.start_date_string(),
                            task.end_date_string()
                        ))
                        .size(10.5)
                        .color(theme::TEXT_SECONDARY),
                    );
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if edit_mode {
                        let del = ui.add(
                            egui::Button::new(
                                RichText::new(icons::TRASH).size(11.0).color(theme::DANGER),
                            )
                            .frame(false),
                        );
                        if del.on_hover_text("Delete task").clicked() {
                            action = ProjectEditorAction::DeleteTask(task.id);
                        }
                    }
                    let open = ui.add(
                        egui::Button::new(
                            RichText::new(icons::PENCIL_SIMPLE)
                                .size(11.0)
                                .color(theme::TEXT_DIM),
                        )
                        .frame(false),
                    );
                    let row_click = ui.interact(
                        row.response.rect,
                        egui::Id::new(("task-row", task.id)),
                        egui::Sense::click(),
                    );
                    if open.on_hover_text("Edit task").clicked() || row_click.clicked() {
                        action = ProjectEditorAction::OpenTask(task.id);
                    }
                });
            });
            ui.separator();
        }

        let btn = egui::Button::new(
            RichText::new(format!("{}  Add Task", icons::PLUS))
                .color(Color32::WHITE)
                .size(12.0),
        )
        .fill(theme::ACCENT)
        .rounding(egui::Rounding::same(4.0));
        if ui.add_sized([ui.available_width(), 26.0], btn).clicked() {
            action = ProjectEditorAction::AddTask;
        }
    });

    action
}
