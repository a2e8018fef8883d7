//! In-memory backend used by the view tests.

use crate::api::{ApiError, QuestionsApi};
use crate::models::{Interval, NewQuestion, Question, QuestionId};
use crate::task::Backend;
use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use eframe::egui;
use std::sync::{Arc, Mutex};
use std::time::Duration;

#[derive(Clone, Debug, PartialEq)]
pub enum Call {
    List,
    Get(QuestionId),
    Create(NewQuestion),
    Update(QuestionId, u32),
    Delete(QuestionId),
}

/// Answers every call from canned results and records what was asked.
pub struct FakeApi {
    pub list: Mutex<Result<Vec<Question>, ApiError>>,
    pub get: Mutex<Result<Question, ApiError>>,
    pub create: Mutex<Result<Question, ApiError>>,
    pub update: Mutex<Result<Question, ApiError>>,
    pub delete: Mutex<Result<(), ApiError>>,
    pub calls: Mutex<Vec<Call>>,
}

impl Default for FakeApi {
    fn default() -> Self {
        Self {
            list: Mutex::new(Ok(Vec::new())),
            get: Mutex::new(Ok(sample_question(1))),
            create: Mutex::new(Ok(sample_question(1))),
            update: Mutex::new(Ok(sample_question(1))),
            delete: Mutex::new(Ok(())),
            calls: Mutex::new(Vec::new()),
        }
    }
}

impl FakeApi {
    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl QuestionsApi for FakeApi {
    async fn list_questions(&self) -> Result<Vec<Question>, ApiError> {
        self.record(Call::List);
        self.list.lock().unwrap().clone()
    }

    async fn get_question(&self, id: &QuestionId) -> Result<Question, ApiError> {
        self.record(Call::Get(id.clone()));
        self.get.lock().unwrap().clone()
    }

    async fn create_question(&self, question: &NewQuestion) -> Result<Question, ApiError> {
        self.record(Call::Create(question.clone()));
        self.create.lock().unwrap().clone()
    }

    async fn update_schedule(
        &self,
        id: &QuestionId,
        interval: Interval,
    ) -> Result<Question, ApiError> {
        self.record(Call::Update(id.clone(), interval.days()));
        self.update.lock().unwrap().clone()
    }

    async fn delete_question(&self, id: &QuestionId) -> Result<(), ApiError> {
        self.record(Call::Delete(id.clone()));
        self.delete.lock().unwrap().clone()
    }
}

pub fn sample_question(id: i64) -> Question {
    Question {
        id: QuestionId::from(id),
        question_text: format!("Question {}", id),
        solution: format!("Solution {}", id),
        next_revision_date: Utc.with_ymd_and_hms(2026, 10, 14, 9, 0, 0).unwrap(),
        current_interval_days: 0,
    }
}

/// A runtime plus a backend wired to `api`. Keep the runtime alive for the
/// whole test.
pub fn backend_with(api: &Arc<FakeApi>) -> (tokio::runtime::Runtime, Backend) {
    let runtime = tokio::runtime::Runtime::new().unwrap();
    let backend = Backend::new(api.clone(), runtime.handle().clone());
    (runtime, backend)
}

/// Simulates frames until `done` reports true.
pub fn wait_until(mut done: impl FnMut() -> bool) {
    for _ in 0..400 {
        if done() {
            return;
        }
        std::thread::sleep(Duration::from_millis(5));
    }
    panic!("condition not reached in time");
}

/// Runs one headless frame and returns every piece of text that was drawn.
pub fn render_texts(mut draw: impl FnMut(&mut egui::Ui)) -> Vec<String> {
    let ctx = egui::Context::default();
    let output = ctx.run(egui::RawInput::default(), |ctx| {
        egui::CentralPanel::default().show(ctx, |ui| draw(ui));
    });

    let mut texts = Vec::new();
    for clipped in &output.shapes {
        collect_text(&clipped.shape, &mut texts);
    }
    texts
}

fn collect_text(shape: &egui::Shape, texts: &mut Vec<String>) {
    match shape {
        egui::Shape::Text(text) => texts.push(text.galley.text().to_string()),
        egui::Shape::Vec(shapes) => {
            for shape in shapes {
                collect_text(shape, texts);
            }
        }
        _ => {}
    }
}
