use crate::app::ProjexApp;
use crate::ui::project_editor::status_combo;
use crate::ui::theme;
use egui::{Color32, Context, RichText, Window};

fn dialog_buttons(ui: &mut egui::Ui, create_label: &str) -> (bool, bool) {
    let mut create = false;
    let mut cancel = false;
    ui.horizontal(|ui| {
        let create_btn = egui::Button::new(RichText::new(create_label).color(Color32::WHITE))
            .fill(theme::ACCENT)
            .rounding(egui::Rounding::same(4.0));
        if ui.add_sized([100.0, 28.0], create_btn).clicked() {
            create = true;
        }
        if ui.add_sized([80.0, 28.0], egui::Button::new("Cancel")).clicked() {
            cancel = true;
        }
    });
    (create, cancel)
}

/// Render the "New Project" dialog.
pub fn show_add_project_dialog(app: &mut ProjexApp, ctx: &Context) {
    let mut should_close = false;
    let mut should_create = false;
    Window::new(RichText::new("New Project").strong().size(14.0))
        .resizable(false)
        .collapsible(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .fixed_size([theme::DIALOG_WIDTH, 0.0])
        .show(ctx, |ui| {
            ui.visuals_mut().extreme_bg_color = theme::BG_FIELD;
            ui.add_space(4.0);

            egui::Grid::new("add_project_grid")
                .num_columns(2)
                .spacing([12.0, 8.0])
                .show(ui, |ui| {
                    ui.label(RichText::new("Name").color(theme::TEXT_SECONDARY));
                    ui.add_sized(
                        [220.0, theme::FIELD_HEIGHT],
                        egui::TextEdit::singleline(&mut app.new_project.name)
                            .hint_text("Project Name"),
                    );
                    ui.end_row();

                    ui.label(RichText::new("Start").color(theme::TEXT_SECONDARY));
                    ui.add(
                        egui_extras::DatePickerButton::new(&mut app.new_project.start)
                            .id_salt("dlg_project_start"),
                    );
                    ui.end_row();

                    ui.label(RichText::new("End").color(theme::TEXT_SECONDARY));
                    ui.add(
                        egui_extras::DatePickerButton::new(&mut app.new_project.end)
                            .id_salt("dlg_project_end"),
                    );
                    ui.end_row();
                });

            ui.add_space(6.0);
            ui.separator();
            ui.add_space(4.0);
            let (create, cancel) = dialog_buttons(ui, "Add Project");
            should_create = create;
            should_close = cancel;
            ui.add_space(2.0);
        });

    if should_create {
        app.create_project_from_dialog();
        should_close = true;
    }
    if should_close || ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
        app.show_add_project = false;
    }
}

/// Render the "New Task" dialog for the project being viewed.
pub fn show_add_task_dialog(app: &mut ProjexApp, ctx: &Context) {
    let mut should_close = false;
    let mut should_create = false;
    Window::new(RichText::new("New Task").strong().size(14.0))
        .resizable(false)
        .collapsible(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .fixed_size([theme::DIALOG_WIDTH, 0.0])
        .show(ctx, |ui| {
            ui.visuals_mut().extreme_bg_color = theme::BG_FIELD;
            ui.add_space(4.0);

            egui::Grid::new("add_task_grid")
                .num_columns(2)
                .spacing([12.0, 8.0])
                .show(ui, |ui| {
                    ui.label(RichText::new("Name").color(theme::TEXT_SECONDARY));
                    ui.add_sized(
                        [220.0, theme::FIELD_HEIGHT],
                        egui::TextEdit::singleline(&mut app.new_task.name).hint_text("Task Name"),
                    );
                    ui.end_row();

                    ui.label(RichText::new("Start").color(theme::TEXT_SECONDARY));
                    ui.add(
                        egui_extras::DatePickerButton::new(&mut app.new_task.start)
                            .id_salt("dlg_task_start"),
                    );
                    ui.end_row();

                    ui.label(RichText::new("End").color(theme::TEXT_SECONDARY));
                    ui.add(
                        egui_extras::DatePickerButton::new(&mut app.new_task.end)
                            .id_salt("dlg_task_end"),
                    );
                    ui.end_row();

                    ui.label(RichText::new("Status").color(theme::TEXT_SECONDARY));
                    status_combo(ui, "dlg_task_status", &mut app.new_task.status);
                    ui.end_row();
                });

            ui.add_space(6.0);
            ui.separator();
            ui.add_space(4.0);
            let (create, cancel) = dialog_buttons(ui, "Add Task");
            should_create = create;
            should_close = cancel;
            ui.add_space(2.0);
        });

    if should_create {
        app.create_task_from_dialog();
        should_close = true;
    }
    if should_close || ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
        app.show_add_task = false;
    }
}

/// Render the "About" dialog.
pub fn show_about_dialog(app: &mut ProjexApp, ctx: &Context) {
    let mut should_close = false;
    Window::new("About")
        .resizable(false)
        .collapsible(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .fixed_size([300.0, 180.0])
        .show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(12.0);
                ui.heading(RichText::new("ProjeX Manager").strong());
                ui.add_space(2.0);
                ui.label(
                    RichText::new(format!("Version {}", env!("CARGO_PKG_VERSION")))
                        .color(theme::TEXT_SECONDARY),
                );
                ui.add_space(10.0);
                ui.label("Track projects and tasks by date.");
                ui.label(
                    RichText::new(app.data_path.display().to_string())
                        .size(10.0)
                        .color(theme::TEXT_DIM),
                );
                ui.add_space(14.0);
                if ui.add_sized([100.0, 28.0], egui::Button::new("Close")).clicked() {
                    should_close = true;
                }
            });
        });
    if should_close || ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
        app.show_about = false;
    }
}
