//! A question is a pair <question text, solution> plus the scheduling fields
//! the backend maintains for it.
use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Backend-assigned identifier. Opaque to the client: it may arrive as a
/// JSON string (document ids) or a number, and is kept as text either way.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct QuestionId(String);

impl QuestionId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<i64> for QuestionId {
    fn from(id: i64) -> Self {
        Self(id.to_string())
    }
}

impl From<&str> for QuestionId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl<'de> Deserialize<'de> for QuestionId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Text(String),
            Signed(i64),
            Unsigned(u64),
        }

        Ok(match RawId::deserialize(deserializer)? {
            RawId::Text(s) => QuestionId(s),
            RawId::Signed(n) => QuestionId(n.to_string()),
            RawId::Unsigned(n) => QuestionId(n.to_string()),
        })
    }
}

/// A question as the backend returns it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawQuestion")]
pub struct Question {
    pub id: QuestionId,
    pub question_text: String,
    pub solution: String,
    pub next_revision_date: DateTime<Utc>,
    pub current_interval_days: u32,
}

/// Wire shape of a question. Document stores send the id as `_id`; when a
/// payload carries both keys, `id` wins.
#[derive(Deserialize)]
struct RawQuestion {
    id: Option<QuestionId>,
    #[serde(rename = "_id")]
    document_id: Option<QuestionId>,
    question_text: String,
    solution: String,
    #[serde(deserialize_with = "deserialize_revision_date")]
    next_revision_date: DateTime<Utc>,
    #[serde(default)]
    current_interval_days: u32,
}

#[derive(Debug, thiserror::Error)]
#[error("question has neither `id` nor `_id`")]
pub struct MissingId;

impl TryFrom<RawQuestion> for Question {
    type Error = MissingId;

    fn try_from(raw: RawQuestion) -> Result<Self, Self::Error> {
        let id = raw.id.or(raw.document_id).ok_or(MissingId)?;
        Ok(Question {
            id,
            question_text: raw.question_text,
            solution: raw.solution,
            next_revision_date: raw.next_revision_date,
            current_interval_days: raw.current_interval_days,
        })
    }
}

/// Accepts RFC 3339 timestamps as well as naive ones, which the backend
/// emits for dates it computed itself. Naive values are taken as UTC.
fn deserialize_revision_date<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    if let Ok(date) = DateTime::parse_from_rfc3339(&raw) {
        return Ok(date.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(&raw, "%Y-%m-%dT%H:%M:%S%.f")
        .map(|naive| naive.and_utc())
        .map_err(serde::de::Error::custom)
}

/// User input for a question that does not exist yet.
#[derive(Clone, Debug, PartialEq)]
pub struct NewQuestion {
    pub question_text: String,
    pub solution: String,
}

impl NewQuestion {
    /// Both fields must contain something other than whitespace.
    pub fn is_complete(&self) -> bool {
        !self.question_text.trim().is_empty() && !self.solution.trim().is_empty()
    }
}

/// Body of `POST /questions/`. The client fills the scheduling fields with
/// placeholders; the backend owns their real values.
#[derive(Debug, Serialize)]
pub(crate) struct CreateQuestionBody<'a> {
    pub question_text: &'a str,
    pub solution: &'a str,
    pub next_revision_date: DateTime<Utc>,
    pub current_interval_days: u32,
}

impl<'a> CreateQuestionBody<'a> {
    pub fn new(question: &'a NewQuestion, now: DateTime<Utc>) -> Self {
        Self {
            question_text: &question.question_text,
            solution: &question.solution,
            next_revision_date: now,
            current_interval_days: 0,
        }
    }
}

/// Body of `PUT /questions/{id}`. Only the interval is ever sent.
#[derive(Debug, Serialize)]
pub(crate) struct ScheduleUpdateBody {
    pub current_interval_days: u32,
}
