use crate::generation::error::GenerationError;
use regex::Regex;
use serde_json::Value;
use std::sync::LazyLock;

static JSON_ARRAY: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?s)\[.*\]").expect("json array regex is invalid"));

/// The span from the first `[` to the last `]`, if any.
#[must_use]
pub fn extract_json_array(text: &str) -> Option<&str> {
    JSON_ARRAY.find(text).map(|m| m.as_str())
}

/// Extracts and parses the array of generated questions. Elements are not validated here.
pub fn parse_question_array(text: &str) -> Result<Vec<Value>, GenerationError> {
    let json = extract_json_array(text).ok_or(GenerationError::NoJsonFound)?;
    Ok(serde_json::from_str(json)?)
}
