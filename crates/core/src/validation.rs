//! Presence checks for client-supplied JSON bodies.
//!
//! Request bodies are accepted as raw JSON objects first so that the error
//! messages stay stable (`Not a JSON`, `Missing <field>`) regardless of how
//! the typed DTO would have failed to deserialize.

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::error::CoreError;

/// A request body that parsed as a JSON object.
pub type JsonObject = Map<String, Value>;

/// Message used when the body is absent or not a JSON object.
pub const NOT_A_JSON: &str = "Not a JSON";

/// Parse raw body bytes into a JSON object.
pub fn parse_object(bytes: &[u8]) -> Result<JsonObject, CoreError> {
    match serde_json::from_slice::<Value>(bytes) {
        Ok(Value::Object(map)) => Ok(map),
        _ => Err(CoreError::Validation(NOT_A_JSON.into())),
    }
}

/// Ensure every field in `required` is present, reporting the first missing
/// one in declaration order.
pub fn require_fields(body: &JsonObject, required: &[&str]) -> Result<(), CoreError> {
    match required.iter().find(|field| !body.contains_key(**field)) {
        Some(field) => Err(CoreError::Validation(format!("Missing {field}"))),
        None => Ok(()),
    }
}

/// Deserialize a validated object into its typed form.
///
/// A value of the wrong type is reported as `Invalid <field>`.
pub fn into_typed<T: DeserializeOwned>(body: JsonObject) -> Result<T, CoreError> {
    match serde_json::from_value(Value::Object(body.clone())) {
        Ok(typed) => Ok(typed),
        Err(_) => Err(CoreError::Validation(match invalid_field::<T>(&body) {
            Some(field) => format!("Invalid {field}"),
            None => INVALID_BODY.into(),
        })),
    }
}

/// Message used when no single field can be blamed for a failed conversion.
pub const INVALID_BODY: &str = "Invalid body";

/// Find the first field whose value prevents `body` from deserializing.
///
/// Missing-field errors are only raised once every present value has
/// converted, so dropping the culprit either fixes the body or turns the
/// failure into `missing field` for that same key.
fn invalid_field<T: DeserializeOwned>(body: &JsonObject) -> Option<&str> {
    body.keys().map(String::as_str).find(|key| {
        let mut rest = body.clone();
        rest.remove(*key);
        match serde_json::from_value::<T>(Value::Object(rest)) {
            Ok(_) => true,
            Err(e) => e.to_string() == format!("missing field `{key}`"),
        }
    })
}
