//! Document validation at the store boundary.

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RecordError {
    #[error("{collection} document must be a JSON object")]
    NotAnObject { collection: String },
    #[error("{collection} field `{field}` is required")]
    MissingField { collection: String, field: String },
    #[error("{collection} field `{field}` cannot be empty")]
    EmptyField { collection: String, field: String },
    #[error("malformed {collection} record {id}: {reason}")]
    Malformed {
        collection: String,
        id: String,
        reason: String,
    },
}

/// Validate that a document has every required field with a usable value.
///
/// A locale map counts as filled when its default-locale entry is filled.
pub fn validate_required_fields(
    collection: &str,
    required: &[&str],
    data: &Map<String, Value>,
) -> Result<(), RecordError> {
    for field in required {
        match data.get(*field) {
            None | Some(Value::Null) => {
                return Err(RecordError::MissingField {
                    collection: collection.to_string(),
                    field: field.to_string(),
                })
            }
            Some(value) if is_blank(value) => {
                return Err(RecordError::EmptyField {
                    collection: collection.to_string(),
                    field: field.to_string(),
                })
            }
            _ => {}
        }
    }
    Ok(())
}

fn is_blank(value: &Value) -> bool {
    match value {
        Value::String(s) => s.trim().is_empty(),
        Value::Object(map) if map.contains_key("en") => {
            map.get("en").map(|en| en.is_null() || is_blank(en)).unwrap_or(true)
        }
        Value::Object(map) => map.is_empty(),
        _ => false,
    }
}

/// Parse an untrusted document into a typed record.
pub fn parse_record<T: DeserializeOwned>(collection: &str, value: &Value) -> Result<T, RecordError> {
    if !value.is_object() {
        return Err(RecordError::NotAnObject {
            collection: collection.to_string(),
        });
    }
    serde_json::from_value(value.clone()).map_err(|err| RecordError::Malformed {
        collection: collection.to_string(),
        id: value
            .get("id")
            .map(|id| match id {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            })
            .unwrap_or_else(|| "<unknown>".to_string()),
        reason: err.to_string(),
    })
}
