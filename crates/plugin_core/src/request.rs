//! Parameter validation and request URL construction.

use shared::domain::{RawParameters, TriviaParameters};
use thiserror::Error;

/// Question count used when the user leaves `number` unset.
pub const DEFAULT_AMOUNT: u32 = 10;

/// The single distinguished validation failure: a typed count that is not a
/// number. The caller surfaces the fixed notification and ends the session.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParameterError {
    #[error("'{value}' is not a valid question count")]
    InvalidNumber { value: String },
}

/// Check the raw selections and produce the validated set.
///
/// Only the count is validated; the remaining fields pass through unchanged.
/// An empty count entry counts as unset and falls back to the default at
/// serialization time, not here.
pub fn validate(raw: &RawParameters) -> Result<TriviaParameters, ParameterError> {
    let number = match raw.number.as_deref() {
        None | Some("") => None,
        Some(value) => Some(value.parse::<u32>().map_err(|_| ParameterError::InvalidNumber {
            value: value.to_string(),
        })?),
    };

    Ok(TriviaParameters {
        number,
        category: raw.category,
        difficulty: raw.difficulty.clone(),
        kind: raw.kind.clone(),
    })
}

/// Serialize validated parameters onto the endpoint.
///
/// Field order is fixed: amount, category, difficulty, type. The amount is
/// always present and always followed by a separator; the type, when
/// selected, is always last and never followed by one. Values are appended
/// verbatim; the candidate vocabularies contain nothing that needs
/// percent-encoding.
pub fn build_url(base: &str, parameters: &TriviaParameters) -> String {
    let mut url = format!("{base}?");

    let amount = parameters.number.unwrap_or(DEFAULT_AMOUNT);
    url.push_str(&format!("amount={amount}&"));

    if let Some(category) = parameters.category {
        url.push_str(&format!("category={category}&"));
    }
    if let Some(difficulty) = &parameters.difficulty {
        url.push_str(&format!("difficulty={difficulty}&"));
    }
    if let Some(kind) = &parameters.kind {
        url.push_str(&format!("type={kind}"));
    }

    url
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "https://opentdb.com/api.php";

    #[test]
    fn validate_accepts_numeric_count() {
        let raw = RawParameters {
            number: Some("10".to_string()),
            ..Default::default()
        };
        let validated = validate(&raw).expect("valid");
        assert_eq!(validated.number, Some(10));
    }

    #[test]
    fn validate_rejects_non_numeric_count() {
        let raw = RawParameters {
            number: Some("abc".to_string()),
            ..Default::default()
        };
        assert_eq!(
            validate(&raw),
            Err(ParameterError::InvalidNumber {
                value: "abc".to_string(),
            })
        );
    }

    #[test]
    fn validate_treats_empty_count_as_unset() {
        let raw = RawParameters {
            number: Some(String::new()),
            ..Default::default()
        };
        let validated = validate(&raw).expect("valid");
        assert_eq!(validated.number, None);
    }

    #[test]
    fn validate_passes_other_fields_through_unchanged() {
        let raw = RawParameters {
            number: None,
            category: Some(9),
            difficulty: Some("easy".to_string()),
            kind: Some("multiple".to_string()),
        };
        let validated = validate(&raw).expect("valid");
        assert_eq!(validated.category, Some(9));
        assert_eq!(validated.difficulty.as_deref(), Some("easy"));
        assert_eq!(validated.kind.as_deref(), Some("multiple"));
    }

    #[test]
    fn build_url_defaults_amount_and_keeps_trailing_separator() {
        let url = build_url(BASE, &TriviaParameters::default());
        assert_eq!(url, "https://opentdb.com/api.php?amount=10&");
    }

    #[test]
    fn build_url_appends_all_fields_in_fixed_order() {
        let parameters = TriviaParameters {
            number: Some(5),
            category: Some(9),
            difficulty: Some("easy".to_string()),
            kind: Some("multiple".to_string()),
        };
        let url = build_url(BASE, &parameters);
        assert_eq!(
            url,
            "https://opentdb.com/api.php?amount=5&category=9&difficulty=easy&type=multiple"
        );
    }

    #[test]
    fn build_url_skips_unselected_fields() {
        let parameters = TriviaParameters {
            number: Some(20),
            category: None,
            difficulty: Some("hard".to_string()),
            kind: None,
        };
        let url = build_url(BASE, &parameters);
        assert_eq!(
            url,
            "https://opentdb.com/api.php?amount=20&difficulty=hard&"
        );
    }
}
