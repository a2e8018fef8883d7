//! Review screen for a single question.
//!
//! The solution stays hidden until the user asks for it. Once revealed, the
//! user picks how long to wait before the next revision; the choice is sent
//! to the backend and the app returns to the list.

use crate::api::ApiError;
use crate::models::{Interval, Question, QuestionId};
use crate::router::Route;
use crate::task::{Activation, Backend, Pending, take_ready};
use eframe::egui;

const FETCH_FAILED: &str = "Failed to fetch question.";
const UPDATE_FAILED: &str = "Failed to update schedule.";
const DELETE_FAILED: &str = "Failed to delete question.";

#[derive(Debug, PartialEq)]
pub enum DetailState {
    Loading,
    /// Terminal: the backend does not know this id.
    NotFound,
    Failed(String),
    Loaded(Review),
}

/// A loaded question and everything the user has done with it so far.
#[derive(Debug, PartialEq)]
pub struct Review {
    pub question: Question,
    solution_shown: bool,
    updating: bool,
    deleting: bool,
    update_error: Option<String>,
    delete_error: Option<String>,
}

impl Review {
    fn new(question: Question) -> Self {
        Self {
            question,
            solution_shown: false,
            updating: false,
            deleting: false,
            update_error: None,
            delete_error: None,
        }
    }

    pub fn solution_shown(&self) -> bool {
        self.solution_shown
    }

    /// The solution text, only once it has been revealed.
    pub fn visible_solution(&self) -> Option<&str> {
        self.solution_shown.then_some(self.question.solution.as_str())
    }

    pub fn is_updating(&self) -> bool {
        self.updating
    }

    pub fn is_busy(&self) -> bool {
        self.updating || self.deleting
    }

    pub fn update_error(&self) -> Option<&str> {
        self.update_error.as_deref()
    }

    pub fn delete_error(&self) -> Option<&str> {
        self.delete_error.as_deref()
    }
}

pub struct DetailView {
    id: QuestionId,
    state: DetailState,
    activation: Activation,
    fetch: Option<Pending<Question>>,
    update: Option<Pending<Question>>,
    delete: Option<Pending<()>>,
}

impl DetailView {
    pub fn activate(id: QuestionId, backend: &Backend) -> Self {
        let mut view = Self {
            id: id.clone(),
            state: DetailState::Loading,
            activation: Activation::default(),
            fetch: None,
            update: None,
            delete: None,
        };
        view.reactivate(id, backend);
        view
    }

    /// Starts over for `id`: nothing from the previous activation survives.
    pub fn reactivate(&mut self, id: QuestionId, backend: &Backend) {
        self.activation = self.activation.next();
        self.id = id;
        self.state = DetailState::Loading;
        self.update = None;
        self.delete = None;

        log::debug!("Fetching question with ID: {}", self.id);
        let id = self.id.clone();
        self.fetch = Some(backend.spawn(self.activation, |api| async move {
            api.get_question(&id).await
        }));
    }

    pub fn id(&self) -> &QuestionId {
        &self.id
    }

    pub fn activation(&self) -> Activation {
        self.activation
    }

    pub fn state(&self) -> &DetailState {
        &self.state
    }

    pub fn review(&self) -> Option<&Review> {
        match &self.state {
            DetailState::Loaded(review) => Some(review),
            _ => None,
        }
    }

    fn review_mut(&mut self) -> Option<&mut Review> {
        match &mut self.state {
            DetailState::Loaded(review) => Some(review),
            _ => None,
        }
    }

    pub fn not_found_message(&self) -> String {
        format!("Question with ID {} not found.", self.id)
    }

    /// One-way: there is no way back to hidden within an activation.
    pub fn reveal_solution(&mut self) {
        if let Some(review) = self.review_mut() {
            review.solution_shown = true;
        }
    }

    /// Sends the chosen interval. Only possible once the solution is shown
    /// and while no other request for this question is running.
    pub fn choose_interval(&mut self, interval: Interval, backend: &Backend) {
        let activation = self.activation;
        let id = self.id.clone();
        let Some(review) = self.review_mut() else {
            return;
        };
        if !review.solution_shown || review.is_busy() {
            return;
        }

        review.updating = true;
        review.update_error = None;
        log::debug!("Updating question {} with interval {}", id, interval.days());
        self.update = Some(backend.spawn(activation, |api| async move {
            api.update_schedule(&id, interval).await
        }));
    }

    pub fn delete(&mut self, backend: &Backend) {
        let activation = self.activation;
        let id = self.id.clone();
        let Some(review) = self.review_mut() else {
            return;
        };
        if review.is_busy() {
            return;
        }

        review.deleting = true;
        review.delete_error = None;
        log::debug!("Deleting question {}", id);
        self.delete = Some(backend.spawn(activation, |api| async move {
            api.delete_question(&id).await
        }));
    }

    /// Applies finished requests. Returns `Route::List` after a successful
    /// update or delete.
    pub fn poll(&mut self) -> Option<Route> {
        if let Some((activation, result)) = take_ready(&mut self.fetch) {
            self.apply_fetched(activation, result);
        }
        if let Some((activation, result)) = take_ready(&mut self.update) {
            if let Some(route) = self.apply_updated(activation, result) {
                return Some(route);
            }
        }
        if let Some((activation, result)) = take_ready(&mut self.delete) {
            return self.apply_deleted(activation, result);
        }
        None
    }

    pub fn apply_fetched(&mut self, activation: Activation, result: Result<Question, ApiError>) {
        if activation != self.activation {
            log::debug!("Ignoring question from a previous activation");
            return;
        }
        self.state = match result {
            Ok(question) => DetailState::Loaded(Review::new(question)),
            Err(ApiError::NotFound) => {
                log::warn!("Question {} not found", self.id);
                DetailState::NotFound
            }
            Err(e) => {
                log::warn!("Error fetching question {}: {}", self.id, e);
                DetailState::Failed(e.user_message(FETCH_FAILED))
            }
        };
    }

    pub fn apply_updated(
        &mut self,
        activation: Activation,
        result: Result<Question, ApiError>,
    ) -> Option<Route> {
        if activation != self.activation {
            return None;
        }
        let id = self.id.clone();
        let review = self.review_mut()?;
        review.updating = false;
        match result {
            Ok(question) => {
                log::info!(
                    "Question {} scheduled in {} days",
                    id,
                    question.current_interval_days
                );
                Some(Route::List)
            }
            Err(e) => {
                log::warn!("Error updating question {}: {}", id, e);
                review.update_error = Some(e.user_message(UPDATE_FAILED));
                None
            }
        }
    }

    pub fn apply_deleted(
        &mut self,
        activation: Activation,
        result: Result<(), ApiError>,
    ) -> Option<Route> {
        if activation != self.activation {
            return None;
        }
        let id = self.id.clone();
        let review = self.review_mut()?;
        review.deleting = false;
        match result {
            Ok(()) => {
                log::info!("Deleted question {}", id);
                Some(Route::List)
            }
            Err(e) => {
                log::warn!("Error deleting question {}: {}", id, e);
                review.delete_error = Some(e.user_message(DELETE_FAILED));
                None
            }
        }
    }

    pub fn ui(&mut self, ui: &mut egui::Ui, backend: &Backend) -> Option<Route> {
        let not_found = self.not_found_message();
        let review = match &self.state {
            DetailState::Loading => {
                ui.horizontal(|ui| {
                    ui.spinner();
                    ui.label("Loading question details...");
                });
                return None;
            }
            DetailState::NotFound => {
                ui.colored_label(egui::Color32::RED, not_found);
                return None;
            }
            DetailState::Failed(message) => {
                ui.colored_label(egui::Color32::RED, message);
                return None;
            }
            DetailState::Loaded(review) => review,
        };

        // Store actions to execute after UI rendering
        let mut action_reveal = false;
        let mut action_interval: Option<Interval> = None;
        let mut action_delete = false;
        let mut navigate = None;

        ui.heading("Revise Question");
        ui.group(|ui| {
            ui.set_min_width(ui.available_width());
            ui.strong("Question:");
            ui.label(egui::RichText::new(&review.question.question_text).size(18.0));
        });
        ui.add_space(10.0);

        match review.visible_solution() {
            None => {
                if ui.button("Show Solution").clicked() {
                    action_reveal = true;
                }
            }
            Some(solution) => {
                ui.group(|ui| {
                    ui.set_min_width(ui.available_width());
                    ui.strong("Solution:");
                    ui.label(solution);
                    ui.separator();
                    ui.strong("How well did you remember? (Choose next revision interval):");
                    ui.horizontal_wrapped(|ui| {
                        for interval in Interval::all() {
                            let label = if review.is_updating() {
                                "Updating...".to_string()
                            } else {
                                interval.to_string()
                            };
                            if ui
                                .add_enabled(!review.is_busy(), egui::Button::new(label))
                                .clicked()
                            {
                                action_interval = Some(interval);
                            }
                        }
                    });
                    if let Some(error) = review.update_error() {
                        ui.colored_label(egui::Color32::RED, error);
                    }
                });
            }
        }

        ui.add_space(10.0);
        ui.horizontal(|ui| {
            if ui
                .add_enabled(!review.is_updating(), egui::Button::new("Back to List"))
                .clicked()
            {
                navigate = Some(Route::List);
            }
            if ui
                .add_enabled(!review.is_busy(), egui::Button::new("Delete Question"))
                .clicked()
            {
                action_delete = true;
            }
        });
        if let Some(error) = review.delete_error() {
            ui.colored_label(egui::Color32::RED, error);
        }

        // Execute deferred actions
        if action_reveal {
            self.reveal_solution();
        }
        if let Some(interval) = action_interval {
            self.choose_interval(interval, backend);
        }
        if action_delete {
            self.delete(backend);
        }
        navigate
    }
}
