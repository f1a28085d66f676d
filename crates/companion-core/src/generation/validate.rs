use serde_json::Value;

/// One element of a generated question array after validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GeneratedQuestion {
    Valid {
        question: String,
        options: Vec<String>,
        correct_index: usize,
    },
    Malformed {
        reason: &'static str,
    },
}

impl GeneratedQuestion {
    #[must_use]
    pub fn classify(value: &Value) -> Self {
        let Some(object) = value.as_object() else {
            return Self::Malformed { reason: "not an object" };
        };
        let Some(question) = object.get("question").and_then(Value::as_str) else {
            return Self::Malformed {
                reason: "missing question",
            };
        };
        let Some(options) = object.get("options").and_then(Value::as_array) else {
            return Self::Malformed {
                reason: "missing options",
            };
        };
        let Some(options) = options
            .iter()
            .map(|option| option.as_str().map(ToOwned::to_owned))
            .collect::<Option<Vec<String>>>()
        else {
            return Self::Malformed {
                reason: "options are not strings",
            };
        };
        if options.is_empty() {
            return Self::Malformed { reason: "no options" };
        }
        let Some(answer) = object.get("correct_answer") else {
            return Self::Malformed {
                reason: "missing correct answer",
            };
        };

        Self::Valid {
            correct_index: resolve_correct_index(answer, &options),
            question: question.to_owned(),
            options,
        }
    }
}

/// Maps the correct answer indicator of a generated question to an index into `options`.
///
/// A single letter counts from `A` (case-insensitive), a non-negative integer is an index and a string equal to
/// one of the options points at that option. Anything else, including an index past the end, resolves to 0.
#[must_use]
pub fn resolve_correct_index(answer: &Value, options: &[String]) -> usize {
    let index = match answer {
        Value::Number(number) => number.as_u64().and_then(|n| usize::try_from(n).ok()),
        Value::String(text) => letter_index(text).or_else(|| options.iter().position(|option| option == text)),
        _ => None,
    };
    match index {
        Some(index) if index < options.len() => index,
        _ => 0,
    }
}

fn letter_index(text: &str) -> Option<usize> {
    let mut chars = text.trim().chars();
    let letter = chars.next()?.to_ascii_uppercase();
    if chars.next().is_some() || !letter.is_ascii_uppercase() {
        return None;
    }
    Some(usize::from(letter as u8 - b'A'))
}
