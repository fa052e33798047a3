use chrono::NaiveDate;
use std::path::PathBuf;
use tracing::{error, info, warn};
use uuid::Uuid;

use crate::model::{Project, Status, Store, Task};
use crate::ui;

/// What the central panel is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Empty,
    Project(Uuid),
    Task { project_id: Uuid, task_id: Uuid },
}

impl View {
    fn project_id(self) -> Option<Uuid> {
        match self {
            View::Empty => None,
            View::Project(id) => Some(id),
            View::Task { project_id, .. } => Some(project_id),
        }
    }
}

/// Form state of the "New Project" dialog.
pub struct ProjectDraft {
    pub name: String,
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl ProjectDraft {
    fn new(today: NaiveDate) -> Self {
        Self {
            name: String::new(),
            start: today,
            end: today,
        }
    }
}

/// Form state of the "New Task" dialog.
pub struct TaskDraft {
    pub name: String,
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub status: Status,
}

impl TaskDraft {
    fn new(today: NaiveDate) -> Self {
        Self {
            name: String::new(),
            start: today,
            end: today,
            status: Status::OnTime,
        }
    }
}

fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Empty or whitespace-only names are stored as missing.
fn entered_name(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Main application state.
pub struct ProjexApp {
    pub store: Store,
    pub data_path: PathBuf,
    pub selected_date: NaiveDate,
    pub view: View,
    pub edit_mode: bool,

    // Dialog state
    pub show_add_project: bool,
    pub show_add_task: bool,
    pub show_about: bool,
    pub new_project: ProjectDraft,
    pub new_task: TaskDraft,

    pub status_message: String,

    /// Unsaved form edits, flushed when leaving the form.
    dirty: bool,
    /// Set when the data file could not be read; saving would overwrite it.
    load_failed: bool,
}

impl ProjexApp {
    pub fn new(cc: &eframe::CreationContext<'_>, data_path: PathBuf) -> Self {
        let mut fonts = egui::FontDefinitions::default();
        egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
        cc.egui_ctx.set_fonts(fonts);

        Self::with_data_path(data_path)
    }

    /// Build the app state around the store at `data_path`.
    pub fn with_data_path(data_path: PathBuf) -> Self {
        let today = today();
        let mut app = Self {
            store: Store::new(),
            data_path,
            selected_date: today,
            view: View::Empty,
            edit_mode: false,
            show_add_project: false,
            show_add_task: false,
            show_about: false,
            new_project: ProjectDraft::new(today),
            new_task: TaskDraft::new(today),
            status_message: String::new(),
            dirty: false,
            load_failed: false,
        };
        app.reload();
        app
    }

    // --- Persistence ---

    pub fn reload(&mut self) {
        match crate::io::load_store(&self.data_path) {
            Ok(store) => {
                self.store = store;
                self.load_failed = false;
                self.dirty = false;
                if self.view.project_id().and_then(|id| self.store.project(id)).is_none() {
                    self.view = View::Empty;
                }
                self.status_message = format!("Loaded {} projects", self.store.projects.len());
            }
            Err(e) => {
                error!(path = %self.data_path.display(), "failed to load store: {e}");
                self.load_failed = true;
                self.status_message = format!("Error loading: {}", e);
            }
        }
    }

    /// Write the store to disk. Returns false when nothing was written; the
    /// store then stays dirty and the status bar carries the reason.
    pub fn persist(&mut self) -> bool {
        if self.load_failed {
            warn!("refusing to save over a data file that failed to load");
            self.dirty = true;
            self.status_message = "Not saved: data file failed to load (use File → Reload)".into();
            return false;
        }
        match crate::io::save_store(&self.store, &self.data_path) {
            Ok(()) => {
                self.dirty = false;
                self.status_message = "Saved".to_string();
                true
            }
            Err(e) => {
                error!(path = %self.data_path.display(), "failed to save store: {e}");
                self.dirty = true;
                self.status_message = format!("Error saving: {}", e);
                false
            }
        }
    }

    /// Switch views, saving pending form edits first.
    pub fn set_view(&mut self, view: View) {
        if self.dirty {
            self.persist();
        }
        self.view = view;
    }

    // --- Project operations ---

    pub fn open_add_project_dialog(&mut self) {
        self.new_project = ProjectDraft::new(today());
        self.show_add_project = true;
    }

    pub fn create_project_from_dialog(&mut self) {
        let draft = &self.new_project;
        let end = draft.end.max(draft.start);
        let mut project = Project::new("", draft.start, end);
        project.name = entered_name(&draft.name);

        let covers_selected = project.covers(self.selected_date);
        let name = project.display_name().to_string();
        self.store.add_project(project);
        if self.persist() {
            self.status_message = if covers_selected {
                format!("Added '{}'", name)
            } else {
                format!("Added '{}' (not running on the selected date)", name)
            };
        }
        self.new_project = ProjectDraft::new(today());
    }

    pub fn delete_project(&mut self, id: Uuid) {
        if let Some(project) = self.store.delete_project(id) {
            if self.view.project_id() == Some(id) {
                self.view = View::Empty;
                self.dirty = false;
            }
            if self.persist() {
                self.status_message = format!("Deleted '{}'", project.display_name());
            }
        }
    }

    // --- Task operations ---

    pub fn open_add_task_dialog(&mut self) {
        self.new_task = TaskDraft::new(today());
        self.show_add_task = true;
    }

    pub fn create_task_from_dialog(&mut self) {
        let Some(project_id) = self.view.project_id() else {
            self.status_message = "Select a project first".to_string();
            return;
        };
        let draft = &self.new_task;
        let end = draft.end.max(draft.start);
        let mut task = Task::new(project_id, "", draft.start, end);
        task.name = entered_name(&draft.name);
        task.status = draft.status;
        let name = task.display_name().to_string();

        match self.store.add_task(project_id, task) {
            Ok(_) => {
                if self.persist() {
                    self.status_message = format!("Added task '{}'", name);
                }
            }
            Err(e) => {
                warn!("could not add task: {e}");
                self.status_message = e.to_string();
            }
        }
        self.new_task = TaskDraft::new(today());
    }

    pub fn delete_task(&mut self, project_id: Uuid, task_id: Uuid) {
        if let Some(task) = self.store.delete_task(project_id, task_id) {
            if self.view == (View::Task { project_id, task_id }) {
                self.view = View::Project(project_id);
            }
            if self.persist() {
                self.status_message = format!("Deleted task '{}'", task.display_name());
            }
        }
    }

    fn mark_changed(&mut self) {
        self.dirty = true;
        self.status_message = "Edited".to_string();
    }
}

impl eframe::App for ProjexApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        ui::theme::apply_theme(ctx);

        let should_save = ctx.input(|i| i.modifiers.command && i.key_pressed(egui::Key::S));
        if should_save {
            self.persist();
        }
        if ctx.input(|i| i.viewport().close_requested()) && self.dirty {
            info!("saving pending edits before exit");
            self.persist();
        }

        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            ui::toolbar::show_toolbar(self, ui);
        });

        egui::TopBottomPanel::bottom("status_bar")
            .exact_height(ui::theme::STATUS_BAR_HEIGHT)
            .frame(
                egui::Frame::default()
                    .fill(ui::theme::STATUS_BAR_BG)
                    .inner_margin(egui::Margin::symmetric(10.0, 0.0)),
            )
            .show(ctx, |ui| {
                ui.horizontal_centered(|ui| {
                    ui.label(
                        egui::RichText::new(&self.status_message)
                            .font(ui::theme::font_status())
                            .color(ui::theme::TEXT_SECONDARY),
                    );
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.label(
                            egui::RichText::new(format!(
                                "Projects: {}",
                                self.store.projects.len()
                            ))
                            .size(10.5)
                            .color(ui::theme::TEXT_DIM),
                        );
                    });
                });
            });

        // Left panel: date picker + filtered project list
        let mut list_action = ui::project_list::ProjectListAction::None;
        egui::SidePanel::left("project_panel")
            .default_width(ui::theme::SIDE_PANEL_WIDTH)
            .min_width(ui::theme::SIDE_PANEL_MIN_WIDTH)
            .resizable(true)
            .frame(
                egui::Frame::default()
                    .fill(ui::theme::BG_PANEL)
                    .inner_margin(egui::Margin::same(8.0))
                    .stroke(egui::Stroke::new(1.0, ui::theme::BORDER_SUBTLE)),
            )
            .show(ctx, |ui| {
                ui.label(ui::theme::field_label("SELECT DATE"));
                ui.horizontal(|ui| {
                    ui.add(
                        egui_extras::DatePickerButton::new(&mut self.selected_date)
                            .id_salt("selected_date"),
                    );
                    if ui.button("Today").clicked() {
                        self.selected_date = today();
                    }
                    ui.toggle_value(&mut self.edit_mode, "Edit");
                });
                ui.add_space(6.0);

                let projects = self.store.projects_on(self.selected_date);
                list_action = ui::project_list::show_project_list(
                    &projects,
                    self.view.project_id(),
                    self.edit_mode,
                    ui,
                );
            });

        match list_action {
            ui::project_list::ProjectListAction::Select(id) => self.set_view(View::Project(id)),
            ui::project_list::ProjectListAction::Delete(id) => self.delete_project(id),
            ui::project_list::ProjectListAction::Add => self.open_add_project_dialog(),
            ui::project_list::ProjectListAction::None => {}
        }

        // Central panel: project or task detail
        let today = today();
        let mut project_action = ui::project_editor::ProjectEditorAction::None;
        let mut task_action = ui::task_editor::TaskEditorAction::None;
        let mut missing = false;
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| match self.view {
                View::Empty => {
                    ui.centered_and_justified(|ui| {
                        ui.label(
                            egui::RichText::new("Select a project")
                                .size(14.0)
                                .color(ui::theme::TEXT_DIM),
                        );
                    });
                }
                View::Project(id) => match self.store.project_mut(id) {
                    Some(project) => {
                        project_action = ui::project_editor::show_project_editor(
                            project,
                            today,
                            self.edit_mode,
                            ui,
                        );
                    }
                    None => missing = true,
                },
                View::Task { project_id, task_id } => {
                    let project_name = self
                        .store
                        .project(project_id)
                        .map(|p| p.display_name().to_string())
                        .unwrap_or_default();
                    match self.store.task_mut(project_id, task_id) {
                        Some(task) => {
                            task_action =
                                ui::task_editor::show_task_editor(task, &project_name, today, ui);
                        }
                        None => missing = true,
                    }
                }
            });
        });

        if missing {
            self.view = View::Empty;
        }

        match project_action {
            ui::project_editor::ProjectEditorAction::Changed => self.mark_changed(),
            ui::project_editor::ProjectEditorAction::OpenTask(task_id) => {
                if let Some(project_id) = self.view.project_id() {
                    self.set_view(View::Task { project_id, task_id });
                }
            }
            ui::project_editor::ProjectEditorAction::DeleteTask(task_id) => {
                if let Some(project_id) = self.view.project_id() {
                    self.delete_task(project_id, task_id);
                }
            }
            ui::project_editor::ProjectEditorAction::AddTask => self.open_add_task_dialog(),
            ui::project_editor::ProjectEditorAction::None => {}
        }

        match task_action {
            ui::task_editor::TaskEditorAction::Changed => self.mark_changed(),
            ui::task_editor::TaskEditorAction::Back => {
                if let Some(project_id) = self.view.project_id() {
                    self.set_view(View::Project(project_id));
                }
            }
            ui::task_editor::TaskEditorAction::None => {}
        }

        // Dialogs
        if self.show_add_project {
            ui::dialogs::show_add_project_dialog(self, ctx);
        }
        if self.show_add_task {
            ui::dialogs::show_add_task_dialog(self, ctx);
        }
        if self.show_about {
            ui::dialogs::show_about_dialog(self, ctx);
        }
    }
}
