use serde::{Deserialize, Serialize};

use crate::domain::{Category, TriviaQuestion, TriviaResponse};

/// Core -> bridge requests. The serialized shapes are the host message
/// protocol verbatim: `{"type":"category"}` and
/// `{"type":"questions","url":"..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum BridgeRequest {
    Category,
    Questions { url: String },
}

impl BridgeRequest {
    pub fn kind(&self) -> &'static str {
        match self {
            BridgeRequest::Category => "category",
            BridgeRequest::Questions { .. } => "questions",
        }
    }
}

/// Bridge -> core replies carrying the raw API payload under `response`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "response", rename_all = "snake_case")]
pub enum BridgeReply {
    Category(CategoryListPayload),
    Questions(QuestionBatchPayload),
}

impl BridgeReply {
    pub fn kind(&self) -> &'static str {
        match self {
            BridgeReply::Category(_) => "category",
            BridgeReply::Questions(_) => "questions",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawCategory {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryListPayload {
    pub trivia_categories: Vec<RawCategory>,
}

impl CategoryListPayload {
    pub fn into_categories(self) -> Vec<Category> {
        self.trivia_categories
            .into_iter()
            .map(Category::from)
            .collect()
    }
}

impl From<RawCategory> for Category {
    fn from(raw: RawCategory) -> Self {
        Self {
            name: raw.name,
            data: raw.id,
        }
    }
}

/// One question exactly as the API serves it, snake_case fields included.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawQuestion {
    pub category: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub difficulty: String,
    pub question: String,
    pub correct_answer: String,
    pub incorrect_answers: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionBatchPayload {
    pub response_code: i64,
    pub results: Vec<RawQuestion>,
}

impl QuestionBatchPayload {
    pub fn into_response(self) -> TriviaResponse {
        TriviaResponse {
            response_code: self.response_code,
            results: self.results.into_iter().map(TriviaQuestion::from).collect(),
        }
    }
}

impl From<RawQuestion> for TriviaQuestion {
    fn from(raw: RawQuestion) -> Self {
        Self {
            category: raw.category,
            kind: raw.kind,
            difficulty: raw.difficulty,
            question: raw.question,
            correct_answer: raw.correct_answer,
            incorrect_answers: raw.incorrect_answers,
        }
    }
}
