//! Form for adding a question/solution pair.

use crate::api::ApiError;
use crate::models::{NewQuestion, Question};
use crate::router::Route;
use crate::task::{Activation, Backend, Pending, take_ready};
use eframe::egui;

pub const MISSING_FIELDS: &str = "Both question text and solution are required.";
const ADD_FAILED: &str = "Failed to add question.";

pub struct CreateView {
    pub question_text: String,
    pub solution: String,
    submitting: bool,
    error: Option<String>,
    activation: Activation,
    pending: Option<Pending<Question>>,
}

impl CreateView {
    pub fn activate() -> Self {
        Self {
            question_text: String::new(),
            solution: String::new(),
            submitting: false,
            error: None,
            activation: Activation::default().next(),
            pending: None,
        }
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Validates the form and sends it. Ignored while a submit is running.
    pub fn submit(&mut self, backend: &Backend) {
        if self.submitting {
            return;
        }
        self.error = None;

        let question = NewQuestion {
            question_text: self.question_text.clone(),
            solution: self.solution.clone(),
        };
        if !question.is_complete() {
            self.error = Some(MISSING_FIELDS.to_string());
            return;
        }

        self.submitting = true;
        log::debug!("Submitting new question");
        self.pending = Some(backend.spawn(self.activation, |api| async move {
            api.create_question(&question).await
        }));
    }

    /// Returns `Route::List` once the question has been created.
    pub fn poll(&mut self) -> Option<Route> {
        let (activation, result) = take_ready(&mut self.pending)?;
        self.apply_created(activation, result)
    }

    pub fn apply_created(
        &mut self,
        activation: Activation,
        result: Result<Question, ApiError>,
    ) -> Option<Route> {
        if activation != self.activation {
            return None;
        }
        self.submitting = false;
        match result {
            Ok(question) => {
                log::info!("Created question {}", question.id);
                Some(Route::List)
            }
            Err(e) => {
                log::warn!("Error adding question: {}", e);
                self.error = Some(e.user_message(ADD_FAILED));
                None
            }
        }
    }

    pub fn ui(&mut self, ui: &mut egui::Ui, backend: &Backend) -> Option<Route> {
        let mut navigate = None;
        let mut submit = false;

        ui.heading("Add New Question");

        ui.label("Question Text:");
        ui.add(
            egui::TextEdit::multiline(&mut self.question_text)
                .desired_rows(3)
                .desired_width(f32::INFINITY),
        );
        ui.label("Solution:");
        ui.add(
            egui::TextEdit::multiline(&mut self.solution)
                .desired_rows(5)
                .desired_width(f32::INFINITY),
        );

        if let Some(error) = &self.error {
            ui.colored_label(egui::Color32::RED, error);
        }

        ui.horizontal(|ui| {
            let label = if self.submitting {
                "Adding..."
            } else {
                "Add Question"
            };
            if ui
                .add_enabled(!self.submitting, egui::Button::new(label))
                .clicked()
            {
                submit = true;
            }
            if ui
                .add_enabled(!self.submitting, egui::Button::new("Cancel"))
                .clicked()
            {
                navigate = Some(Route::List);
            }
        });

        if submit {
            self.submit(backend);
        }
        navigate
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::views::testing::{Call, FakeApi, backend_with, render_texts, wait_until};
    use std::sync::Arc;

    fn filled(question_text: &str, solution: &str) -> CreateView {
        let mut view = CreateView::activate();
        view.question_text = question_text.to_string();
        view.solution = solution.to_string();
        view
    }

    #[test]
    fn test_blank_fields_never_reach_backend() {
        let api = Arc::new(FakeApi::default());
        let (_runtime, backend) = backend_with(&api);

        for (q, s) in [("", "S"), ("Q", ""), ("   ", "S"), ("Q", "\n\t "), ("", "")] {
            let mut view = filled(q, s);
            view.submit(&backend);
            assert!(!view.is_submitting());
            assert_eq!(view.error(), Some(MISSING_FIELDS));
        }

        std::thread::sleep(std::time::Duration::from_millis(20));
        assert!(api.calls().is_empty());
    }

    #[test]
    fn test_successful_submit_navigates_to_list() {
        let api = Arc::new(FakeApi::default());
        let (_runtime, backend) = backend_with(&api);

        let mut view = filled("Q", "S");
        view.submit(&backend);
        assert!(view.is_submitting());

        let mut navigation = None;
        wait_until(|| {
            navigation = view.poll();
            !view.is_submitting()
        });

        assert_eq!(navigation, Some(Route::List));
        assert_eq!(
            api.calls(),
            vec![Call::Create(NewQuestion {
                question_text: "Q".to_string(),
                solution: "S".to_string(),
            })]
        );
    }

    #[test]
    fn test_resubmit_while_submitting_is_ignored() {
        let api = Arc::new(FakeApi::default());
        let (_runtime, backend) = backend_with(&api);

        let mut view = filled("Q", "S");
        view.submit(&backend);
        view.submit(&backend);
        view.submit(&backend);

        wait_until(|| {
            view.poll();
            !view.is_submitting()
        });
        assert_eq!(api.calls().len(), 1);
    }

    #[test]
    fn test_failure_keeps_form_and_reenables_submit() {
        let api = Arc::new(FakeApi::default());
        *api.create.lock().unwrap() = Err(ApiError::Server { status: 422 });
        let (_runtime, backend) = backend_with(&api);

        let mut view = filled("Q", "S");
        view.submit(&backend);

        let mut navigation = Some(Route::Create);
        wait_until(|| {
            navigation = view.poll();
            !view.is_submitting()
        });

        assert_eq!(navigation, None);
        assert_eq!(
            view.error(),
            Some("Failed to add question. Server responded with status: 422")
        );
        assert_eq!(view.question_text, "Q");
        assert_eq!(view.solution, "S");

        *api.create.lock().unwrap() = Err(ApiError::Network);
        view.submit(&backend);
        assert!(view.is_submitting());
        assert_eq!(view.error(), None);
        wait_until(|| {
            view.poll();
            !view.is_submitting()
        });
        assert_eq!(
            view.error(),
            Some("Failed to add question. No response from server.")
        );
        assert_eq!(api.calls().len(), 2);
    }

    #[test]
    fn test_render_busy_label_while_submitting() {
        let api = Arc::new(FakeApi::default());
        let (_runtime, backend) = backend_with(&api);

        let mut view = filled("Q", "S");
        let texts = render_texts(|ui| {
            view.ui(ui, &backend);
        });
        assert!(texts.iter().any(|t| t == "Add Question"));

        view.submit(&backend);
        let texts = render_texts(|ui| {
            view.ui(ui, &backend);
        });
        assert!(texts.iter().any(|t| t == "Adding..."));
        assert!(!texts.iter().any(|t| t == "Add Question"));
    }
}
