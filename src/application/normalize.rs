//! Turns the body encodings accepted on `/todos` into one candidate shape.
//!
//! The candidate is a JSON value so that JSON bodies pass through untouched
//! and every other encoding is folded into an object with the same keys.

use serde_json::{Map, Value};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyFormat {
    Json,
    FormUrlEncoded,
    Multipart,
    PlainText,
}

impl BodyFormat {
    /// Picks the format from a `content-type` header. Unknown or missing
    /// types are read as plain text.
    pub fn from_content_type(content_type: Option<&str>) -> Self {
        let Some(ct) = content_type.map(str::to_ascii_lowercase) else { return Self::PlainText };
        if ct.contains("application/json") {
            Self::Json
        } else if ct.contains("multipart/form-data") {
            Self::Multipart
        } else if ct.contains("application/x-www-form-urlencoded") {
            Self::FormUrlEncoded
        } else {
            Self::PlainText
        }
    }
}

/// A request body after transport decoding.
#[derive(Debug, Clone, PartialEq)]
pub enum RawBody {
    Json(Value),
    Fields(Vec<(String, String)>),
    Text(String),
}

/// Never fails: a string that does not carry a non-empty `text` parameter is
/// taken literally.
pub fn normalize(raw: RawBody) -> Value {
    match raw {
        RawBody::Json(value) => value,
        RawBody::Fields(fields) => Value::Object(candidate_from_fields(fields)),
        RawBody::Text(body) => normalize_text(body),
    }
}

fn normalize_text(body: String) -> Value {
    let params: Vec<(String, String)> = form_urlencoded::parse(body.as_bytes()).into_owned().collect();
    let has_text = params.iter().rev().find(|(name, _)| name == "text").is_some_and(|(_, value)| !value.is_empty());
    if has_text {
        let fields = params.into_iter().filter(|(name, _)| name == "text" || name == "completed");
        return Value::Object(candidate_from_fields(fields));
    }
    let mut candidate = Map::new();
    candidate.insert("text".into(), Value::String(body));
    Value::Object(candidate)
}

fn candidate_from_fields(fields: impl IntoIterator<Item = (String, String)>) -> Map<String, Value> {
    fields
        .into_iter()
        .map(|(name, value)| {
            let value = if name == "completed" { coerce_flag(value) } else { Value::String(value) };
            (name, value)
        })
        .collect()
}

// Form encodings have no booleans; only the exact literals are promoted.
fn coerce_flag(value: String) -> Value {
    match value.as_str() {
        "true" => Value::Bool(true),
        "false" => Value::Bool(false),
        _ => Value::String(value),
    }
}
