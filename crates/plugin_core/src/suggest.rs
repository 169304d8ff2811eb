//! Suggestion lists for the four parameter input fields.

use shared::domain::Category;

const NUMBERS: [&str; 6] = ["5", "10", "15", "20", "25", "30"];
const DIFFICULTIES: [&str; 3] = ["easy", "medium", "hard"];
const KINDS: [(&str, &str); 2] = [("multiple choice", "multiple"), ("true/false", "boolean")];

/// One suggestion entry. `label` is what the user sees while typing; `value`
/// is what gets submitted when the entry is picked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suggestion {
    pub label: String,
    pub value: String,
}

impl Suggestion {
    fn plain(text: &str) -> Self {
        Self {
            label: text.to_string(),
            value: text.to_string(),
        }
    }

    fn labeled(label: &str, value: impl ToString) -> Self {
        Self {
            label: label.to_string(),
            value: value.to_string(),
        }
    }
}

/// Produce the filtered suggestion list for one input field.
///
/// Matching is a case-sensitive substring test of `query` against the
/// display label. Unknown field keys yield `None`; an empty list is a valid
/// result (the host shows no suggestions). Never blocks, never fails.
pub fn suggestions(field: &str, query: &str, categories: &[Category]) -> Option<Vec<Suggestion>> {
    let filtered = match field {
        "number" => NUMBERS
            .iter()
            .filter(|candidate| candidate.contains(query))
            .map(|candidate| Suggestion::plain(candidate))
            .collect(),
        "category" => categories
            .iter()
            .filter(|category| category.name.contains(query))
            .map(|category| Suggestion::labeled(&category.name, category.data))
            .collect(),
        "difficulty" => DIFFICULTIES
            .iter()
            .filter(|candidate| candidate.contains(query))
            .map(|candidate| Suggestion::plain(candidate))
            .collect(),
        "type" => KINDS
            .iter()
            .filter(|(label, _)| label.contains(query))
            .map(|(label, value)| Suggestion::labeled(label, value))
            .collect(),
        _ => return None,
    };
    Some(filtered)
}
