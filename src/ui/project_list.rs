use chrono::NaiveDate;
use egui::{Color32, RichText, Ui};
use egui_phosphor::regular as icons;
use uuid::Uuid;

use crate::model::Project;
use crate::ui::theme;

/// Actions that the project list can request.
pub enum ProjectListAction {
    None,
    Select(Uuid),
    Delete(Uuid),
    Add,
}

fn short_date(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format("%m/%d").to_string())
        .unwrap_or_else(|| "—".to_string())
}

/// Render the projects running on the selected date.
pub fn show_project_list(
    projects: &[&Project],
    selected_project: Option<Uuid>,
    edit_mode: bool,
    ui: &mut Ui,
) -> ProjectListAction {
    let mut action = ProjectListAction::None;

    ui.add_space(2.0);
    ui.horizontal(|ui| {
        ui.label(
            RichText::new("Projects")
                .strong()
                .size(15.0)
                .color(theme::TEXT_PRIMARY),
        );
        ui.add_space(4.0);
        ui.label(
            RichText::new(format!("({})", projects.len()))
                .size(11.0)
                .color(theme::TEXT_DIM),
        );
    });
    ui.add_space(4.0);

    let btn = egui::Button::new(
        RichText::new(format!("{}  Add Project", icons::PLUS))
            .color(Color32::WHITE)
            .size(12.0),
    )
    .fill(theme::ACCENT)
    .rounding(egui::Rounding::same(5.0));
    if ui.add_sized([ui.available_width(), 30.0], btn).clicked() {
        action = ProjectListAction::Add;
    }

    ui.add_space(6.0);
    ui.separator();
    ui.add_space(2.0);

    if projects.is_empty() {
        ui.add_space(8.0);
        ui.label(
            RichText::new("No projects on this date")
                .size(11.0)
                .color(theme::TEXT_DIM),
        );
        return action;
    }

    egui::ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui| {
            for (i, project) in projects.iter().enumerate() {
                let is_selected = selected_project == Some(project.id);

                let row_bg = if is_selected {
                    theme::BG_SELECTED
                } else if i % 2 == 0 {
                    theme::BG_PANEL
                } else {
                    theme::BG_DARK
                };

                let frame = egui::Frame {
                    fill: row_bg,
                    rounding: egui::Rounding::same(4.0),
                    inner_margin: egui::Margin::symmetric(6.0, 4.0),
                    outer_margin: egui::Margin::ZERO,
                    stroke: egui::Stroke::NONE,
                    shadow: egui::epaint::Shadow::NONE,
                };

                let frame_resp = frame.show(ui, |ui| {
                    ui.horizontal(|ui| {
                        ui.spacing_mut().item_spacing.x = 6.0;

                        let color = theme::status_color(project.status);
                        let (dot_rect, _) =
                            ui.allocate_exact_size(egui::vec2(6.0, 6.0), egui::Sense::hover());
                        ui.painter().circle_filled(dot_rect.center(), 3.0, color);

                        ui.add(
                            egui::Label::new(
                                RichText::new(project.display_name()).size(12.0).color(color),
                            )
                            .truncate(),
                        );

                        ui.with_layout(
                            egui::Layout::right_to_left(egui::Align::Center),
                            |ui| {
                                ui.spacing_mut().item_spacing.x = 4.0;

                                if edit_mode {
                                    let del_btn = ui.add(
                                        egui::Button::new(
                                            RichText::new(icons::TRASH)
                                                .size(11.0)
                                                .color(theme::DANGER),
                                        )
                                        .frame(false),
                                    );
                                    if del_btn.on_hover_text("Delete project").clicked() {
                                        action = ProjectListAction::Delete(project.id);
                                    }
                                }

                                ui.label(
                                    RichText::new(short_date(project.end))
                                        .size(10.0)
                                        .color(theme::TEXT_SECONDARY),
                                );
                                ui.label(
                                    RichText::new(icons::ARROW_RIGHT)
                                        .size(9.0)
                                        .color(theme::TEXT_DIM),
                                );
                                ui.label(
                                    RichText::new(short_date(project.start))
                                        .size(10.0)
                                        .color(theme::TEXT_SECONDARY),
                                );
                            },
                        );
                    });
                });

                let row_click = ui.interact(
                    frame_resp.response.rect,
                    egui::Id::new(("project-row", project.id)),
                    egui::Sense::click(),
                );
                if row_click.clicked() && !matches!(action, ProjectListAction::Delete(_)) {
                    action = ProjectListAction::Select(project.id);
                }

                ui.add_space(1.0);
            }
        });

    action
}
