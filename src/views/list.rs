//! Home screen: every question the backend offers for revision.

use super::format_revision_date;
use crate::api::ApiError;
use crate::models::Question;
use crate::router::Route;
use crate::task::{Activation, Backend, Pending, take_ready};
use eframe::egui;

pub const EMPTY_MESSAGE: &str = "No questions yet. Add one!";
const LOAD_FAILED: &str = "Failed to load questions.";

#[derive(Debug, PartialEq)]
pub enum ListState {
    Loading,
    Loaded(Vec<Question>),
    Failed(String),
}

pub struct ListView {
    state: ListState,
    activation: Activation,
    pending: Option<Pending<Vec<Question>>>,
}

impl ListView {
    /// Enters `Loading` and requests the question list.
    pub fn activate(backend: &Backend) -> Self {
        let mut view = Self {
            state: ListState::Loading,
            activation: Activation::default(),
            pending: None,
        };
        view.reload(backend);
        view
    }

    /// Starts a fresh activation; any result still in flight is dropped.
    pub fn reload(&mut self, backend: &Backend) {
        self.activation = self.activation.next();
        self.state = ListState::Loading;
        log::debug!("Loading question list");
        self.pending = Some(backend.spawn(self.activation, |api| async move {
            api.list_questions().await
        }));
    }

    pub fn state(&self) -> &ListState {
        &self.state
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, ListState::Loading)
    }

    pub fn poll(&mut self) {
        if let Some((activation, result)) = take_ready(&mut self.pending) {
            self.apply_loaded(activation, result);
        }
    }

    pub fn apply_loaded(
        &mut self,
        activation: Activation,
        result: Result<Vec<Question>, ApiError>,
    ) {
        if activation != self.activation {
            log::debug!("Ignoring question list from a previous activation");
            return;
        }
        self.state = match result {
            Ok(questions) => {
                log::info!("Loaded {} questions", questions.len());
                ListState::Loaded(questions)
            }
            Err(e) => {
                log::warn!("Error fetching questions: {}", e);
                ListState::Failed(e.user_message(LOAD_FAILED))
            }
        };
    }

    /// Renders the list. Returns the route the user picked, if any.
    pub fn ui(&mut self, ui: &mut egui::Ui, backend: &Backend) -> Option<Route> {
        let mut navigate = None;
        let mut reload = false;

        ui.heading("Spaced Repetition Questions");
        ui.horizontal(|ui| {
            if ui.button("Add New Question").clicked() {
                navigate = Some(Route::Create);
            }
            if ui
                .add_enabled(!self.is_loading(), egui::Button::new("Refresh"))
                .clicked()
            {
                reload = true;
            }
        });
        ui.separator();

        match &self.state {
            ListState::Loading => {
                ui.horizontal(|ui| {
                    ui.spinner();
                    ui.label("Loading questions...");
                });
            }
            ListState::Failed(message) => {
                ui.colored_label(egui::Color32::RED, message);
            }
            ListState::Loaded(questions) if questions.is_empty() => {
                ui.label(EMPTY_MESSAGE);
            }
            ListState::Loaded(questions) => {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    for question in questions {
                        ui.horizontal(|ui| {
                            if ui.link(&question.question_text).clicked() {
                                navigate = Some(Route::Detail(question.id.clone()));
                            }
                            ui.weak(format!(
                                "next revision {} ({} days)",
                                format_revision_date(question.next_revision_date),
                                question.current_interval_days
                            ));
                        });
                    }
                });
            }
        }

        if reload {
            self.reload(backend);
        }
        navigate
    }
}
