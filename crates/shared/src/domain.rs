use serde::{Deserialize, Serialize};

/// One trivia category, mapped from the raw `{id, name}` wire shape at load
/// time and immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub name: String,
    pub data: i64,
}

/// User selections exactly as the host hands them over: the count arrives as
/// typed text, the category as the picked suggestion's id, the rest as the
/// picked suggestion's value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawParameters {
    pub number: Option<String>,
    pub category: Option<i64>,
    pub difficulty: Option<String>,
    pub kind: Option<String>,
}

/// Validated selections. Created once per run, never mutated afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TriviaParameters {
    pub number: Option<u32>,
    pub category: Option<i64>,
    pub difficulty: Option<String>,
    pub kind: Option<String>,
}

/// Normalized question shape forwarded to the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TriviaQuestion {
    pub category: String,
    pub kind: String,
    pub difficulty: String,
    pub question: String,
    pub correct_answer: String,
    pub incorrect_answers: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TriviaResponse {
    pub response_code: i64,
    pub results: Vec<TriviaQuestion>,
}
