/// Request payload parsing for task operations
///
/// Clients send a JSON array and only its first element is read. Both
/// parsers reject anything else as malformed before the store is touched.
///
/// ```text
/// add:    [{"text": "buy milk"}]
/// delete: [{"id": 7}]  or  [{"id": "7"}]
/// ```

use super::{RepositoryError, RepositoryResult};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use validator::Validate;

/// Validated input for creating a task
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct NewTask {
    /// Trimmed task text
    #[validate(length(min = 1, max = 255, message = "text must be 1-255 characters"))]
    pub text: String,
}

impl NewTask {
    /// Builds a task from raw text, trimming surrounding whitespace
    ///
    /// # Errors
    ///
    /// Returns `Malformed` if the trimmed text is empty or too long
    pub fn new(text: &str) -> RepositoryResult<Self> {
        let task = Self {
            text: text.trim().to_string(),
        };
        task.validate()
            .map_err(|e| RepositoryError::Malformed(e.to_string()))?;
        Ok(task)
    }

    /// Parses `[{"text": "..."}, ...]`
    ///
    /// # Errors
    ///
    /// Returns `Malformed` if the payload is not a non-empty array or the
    /// first element has no usable `text` string
    pub fn from_payload(payload: &Value) -> RepositoryResult<Self> {
        let item = first_item(payload)?;

        let text = item
            .get("text")
            .and_then(Value::as_str)
            .ok_or_else(|| RepositoryError::Malformed("text must be a string".to_string()))?;

        Self::new(text)
    }
}

/// Parses the task ID out of `[{"id": ...}, ...]`
///
/// Accepts a JSON integer or a string holding one (surrounding whitespace
/// allowed).
///
/// # Errors
///
/// Returns `Malformed` if the payload is not a non-empty array, `id` is
/// missing or null, or it cannot be read as an integer
pub fn parse_task_id(payload: &Value) -> RepositoryResult<i64> {
    let item = first_item(payload)?;

    let id = match item.get("id") {
        None | Some(Value::Null) => {
            return Err(RepositoryError::Malformed("id is required".to_string()))
        }
        Some(Value::Number(n)) => n.as_i64(),
        Some(Value::String(s)) => s.trim().parse::<i64>().ok(),
        Some(_) => None,
    };

    id.ok_or_else(|| RepositoryError::Malformed("id must be an integer".to_string()))
}

fn first_item(payload: &Value) -> RepositoryResult<&Map<String, Value>> {
    let first = payload
        .as_array()
        .and_then(|items| items.first())
        .ok_or_else(|| {
            RepositoryError::Malformed("expected a non-empty JSON array".to_string())
        })?;

    first
        .as_object()
        .ok_or_else(|| RepositoryError::Malformed("array items must be objects".to_string()))
}
