use crate::app::ProjexApp;
use crate::ui::theme;
use egui::{menu, RichText, Ui};

/// Render the top toolbar / menu bar.
pub fn show_toolbar(app: &mut ProjexApp, ui: &mut Ui) {
    menu::bar(ui, |ui| {
        ui.menu_button(RichText::new("  File  ").font(theme::font_menu()), |ui| {
            if ui.button("  New Project...").clicked() {
                app.open_add_project_dialog();
                ui.close_menu();
            }
            ui.separator();
            if ui.button("  Save          Ctrl+S").clicked() {
                app.persist();
                ui.close_menu();
            }
            if ui.button("  Reload").clicked() {
                app.reload();
                ui.close_menu();
            }
        });

        ui.menu_button(RichText::new("  Edit  ").font(theme::font_menu()), |ui| {
            let label = if app.edit_mode { "  Done Editing" } else { "  Edit Lists" };
            if ui.button(label).clicked() {
                app.edit_mode = !app.edit_mode;
                ui.close_menu();
            }
        });

        ui.menu_button(RichText::new("  Help  ").font(theme::font_menu()), |ui| {
            if ui.button("About").clicked() {
                app.show_about = true;
                ui.close_menu();
            }
        });

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let file = app
                .data_path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();
            ui.label(RichText::new(file).size(11.0).weak());
        });
    });
}
