use serde_json::Value;
use thiserror::Error;

use crate::domain::todo::{TodoId, TodoInput};

/// First violated rule of a request; the message is what clients see.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Expected an object body")]
    NotAnObject,
    #[error("Text is required")]
    TextRequired,
    #[error("Text must be a string")]
    TextNotString,
    #[error("Completed must be a boolean")]
    CompletedNotBoolean,
    #[error("Todo ID is required")]
    IdRequired,
}

pub fn validate_todo(candidate: &Value) -> Result<TodoInput, ValidationError> {
    let fields = candidate.as_object().ok_or(ValidationError::NotAnObject)?;

    let text = match fields.get("text") {
        None | Some(Value::Null) => return Err(ValidationError::TextRequired),
        Some(Value::String(s)) => s.trim(),
        Some(_) => return Err(ValidationError::TextNotString),
    };
    if text.is_empty() {
        return Err(ValidationError::TextRequired);
    }

    let completed = match fields.get("completed") {
        None | Some(Value::Null) => None,
        Some(Value::Bool(b)) => Some(*b),
        Some(_) => return Err(ValidationError::CompletedNotBoolean),
    };

    Ok(TodoInput { text: text.to_string(), completed })
}

pub fn validate_id(raw: &str) -> Result<TodoId, ValidationError> {
    if raw.is_empty() {
        return Err(ValidationError::IdRequired);
    }
    Ok(TodoId(raw.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn trims_text_and_keeps_optional_completed() {
        let input = validate_todo(&json!({ "text": "  Buy milk \n" })).unwrap();
        assert_eq!(input, TodoInput { text: "Buy milk".into(), completed: None });

        let input = validate_todo(&json!({ "text": "x", "completed": true })).unwrap();
        assert_eq!(input.completed, Some(true));
    }

    #[test]
    fn missing_or_blank_text_is_required() {
        for candidate in [json!({}), json!({ "text": "" }), json!({ "text": "   " }), json!({ "text": null })] {
            assert_eq!(validate_todo(&candidate), Err(ValidationError::TextRequired));
        }
    }

    #[test]
    fn rejects_wrong_types_with_first_failure() {
        assert_eq!(validate_todo(&json!([1])), Err(ValidationError::NotAnObject));
        assert_eq!(validate_todo(&json!({ "text": 5 })), Err(ValidationError::TextNotString));
        assert_eq!(
            validate_todo(&json!({ "text": "ok", "completed": "true" })),
            Err(ValidationError::CompletedNotBoolean)
        );
        assert_eq!(
            validate_todo(&json!({ "completed": "nope" })),
            Err(ValidationError::TextRequired)
        );
    }

    #[test]
    fn id_must_be_non_empty() {
        assert_eq!(validate_id(""), Err(ValidationError::IdRequired));
        assert_eq!(validate_id("42").unwrap(), TodoId("42".into()));
        assert_eq!(ValidationError::IdRequired.to_string(), "Todo ID is required");
    }
}
