//! JSON shapes exchanged with the quiz backend and their domain mappings.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use wikiquiz_core::model::{
    Difficulty, EntityGroup, HistoryStats, Question, Quiz, QuizId, QuizSummary, UrlCheck,
};

use crate::error::ApiError;

#[derive(Debug, Serialize)]
pub(crate) struct UrlRequest<'a> {
    pub url: &'a str,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionDto {
    pub question: String,
    pub options: Vec<String>,
    pub answer: String,
    #[serde(default)]
    pub difficulty: String,
    #[serde(default)]
    pub explanation: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizResponse {
    #[serde(default)]
    pub id: Option<u64>,
    #[serde(default)]
    pub url: String,
    pub title: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub key_entities: Map<String, Value>,
    #[serde(default)]
    pub sections: Vec<String>,
    #[serde(default)]
    pub quiz: Vec<QuestionDto>,
    #[serde(default)]
    pub related_topics: Vec<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizSummaryDto {
    pub id: u64,
    pub url: String,
    pub title: String,
    #[serde(default)]
    pub summary: String,
    pub created_at: String,
    #[serde(default)]
    pub quiz_count: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryStatsDto {
    pub total_quizzes: u32,
    pub recent_quizzes: u32,
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidateUrlResponse {
    pub valid: bool,
    #[serde(default)]
    pub message: String,
}

/// Acknowledgement body of `DELETE /history/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteResponse {
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct HealthResponse {
    #[serde(default)]
    pub status: String,
}

/// FastAPI error body. `detail` is a string for handled errors and a list
/// for request validation failures.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ErrorBody {
    #[serde(default)]
    pub detail: Option<Value>,
}

impl ErrorBody {
    pub(crate) fn detail_text(&self) -> Option<String> {
        match self.detail.as_ref()? {
            Value::String(text) => Some(text.clone()),
            _ => None,
        }
    }
}

/// Parse a backend timestamp.
///
/// The backend emits naive ISO-8601 timestamps in UTC; RFC 3339 is also
/// accepted.
pub(crate) fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>, ApiError> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Ok(parsed.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .map(|naive| naive.and_utc())
        .map_err(|_| ApiError::Decode(format!("invalid timestamp: {raw}")))
}

fn entity_groups(raw: Map<String, Value>) -> Vec<EntityGroup> {
    raw.into_iter()
        .map(|(category, value)| {
            let items = match value {
                Value::Array(values) => values
                    .into_iter()
                    .filter_map(|item| match item {
                        Value::String(text) => Some(text),
                        _ => None,
                    })
                    .collect(),
                _ => Vec::new(),
            };
            EntityGroup { category, items }
        })
        .collect()
}

impl From<QuestionDto> for Question {
    fn from(dto: QuestionDto) -> Self {
        Question::new(dto.question, dto.options, dto.answer)
            .with_difficulty(Difficulty::from_label(&dto.difficulty))
            .with_explanation(dto.explanation)
    }
}

impl TryFrom<QuizResponse> for Quiz {
    type Error = ApiError;

    fn try_from(dto: QuizResponse) -> Result<Self, Self::Error> {
        let created_at = dto
            .created_at
            .as_deref()
            .map(parse_timestamp)
            .transpose()?;

        Ok(Quiz {
            id: dto.id.map(QuizId::new),
            url: dto.url,
            title: dto.title,
            summary: dto.summary,
            key_entities: entity_groups(dto.key_entities),
            sections: dto.sections,
            related_topics: dto.related_topics,
            questions: dto.quiz.into_iter().map(Question::from).collect(),
            created_at,
        })
    }
}

impl TryFrom<QuizSummaryDto> for QuizSummary {
    type Error = ApiError;

    fn try_from(dto: QuizSummaryDto) -> Result<Self, Self::Error> {
        Ok(QuizSummary {
            id: QuizId::new(dto.id),
            url: dto.url,
            title: dto.title,
            summary: dto.summary,
            created_at: parse_timestamp(&dto.created_at)?,
            question_count: dto.quiz_count,
        })
    }
}

impl From<HistoryStatsDto> for HistoryStats {
    fn from(dto: HistoryStatsDto) -> Self {
        HistoryStats {
            total_quizzes: dto.total_quizzes,
            recent_quizzes: dto.recent_quizzes,
        }
    }
}

impl From<ValidateUrlResponse> for UrlCheck {
    fn from(dto: ValidateUrlResponse) -> Self {
        UrlCheck {
            valid: dto.valid,
            message: dto.message,
        }
    }
}
