//! Response normalization.
//!
//! The admin API is inconsistent: list endpoints answer with a bare array or
//! with `{success, data}` / `{success, <named list>}`, summary endpoints with a
//! bare object that may or may not carry `success`, and failures with
//! `{success: false, error}`. [`Envelope`] folds all of these into either a
//! payload or a rejection reason.

use serde::de::{DeserializeOwned, Error as _};
use serde_json::Value;

use crate::error::{ApiError, Result};

const DEFAULT_REJECTION: &str = "Request failed";

#[derive(Debug, Clone, PartialEq)]
pub enum Envelope {
    Payload(Value),
    Rejected(String),
}

impl Envelope {
    pub fn new(body: Value) -> Self {
        if let Value::Object(map) = &body
            && map.get("success") == Some(&Value::Bool(false))
        {
            let reason = ["error", "message"]
                .iter()
                .find_map(|key| map.get(*key).and_then(Value::as_str))
                .filter(|s| !s.is_empty())
                .unwrap_or(DEFAULT_REJECTION);
            return Envelope::Rejected(reason.to_string());
        }
        Envelope::Payload(body)
    }

    pub fn into_payload(self) -> Result<Value> {
        match self {
            Envelope::Payload(value) => Ok(value),
            Envelope::Rejected(reason) => Err(ApiError::Rejected(reason)),
        }
    }

    /// Decode a list that is either the whole body, `body[key]` or `body.data`.
    pub fn into_list<T: DeserializeOwned>(self, key: &str) -> Result<Vec<T>> {
        let items = match self.into_payload()? {
            Value::Array(items) => items,
            Value::Object(mut map) => match map.remove(key).or_else(|| map.remove("data")) {
                Some(Value::Array(items)) => items,
                Some(Value::Null) => Vec::new(),
                Some(other) => {
                    return Err(ApiError::Decode(serde_json::Error::custom(format!(
                        "expected a list under `{}`, found {}",
                        key,
                        kind(&other)
                    ))));
                }
                None => {
                    return Err(ApiError::Decode(serde_json::Error::custom(format!(
                        "response has no `{}` list",
                        key
                    ))));
                }
            },
            other => {
                return Err(ApiError::Decode(serde_json::Error::custom(format!(
                    "expected a list, found {}",
                    kind(&other)
                ))));
            }
        };
        items
            .into_iter()
            .map(|item| serde_json::from_value(item).map_err(ApiError::from))
            .collect()
    }

    /// Decode an object that is either `body[key]` or the body itself.
    pub fn into_object<T: DeserializeOwned>(self, key: Option<&str>) -> Result<T> {
        let mut payload = self.into_payload()?;
        if let Some(key) = key {
            payload = match payload {
                Value::Object(mut map) => map.remove(key).ok_or_else(|| {
                    ApiError::Decode(serde_json::Error::custom(format!("response has no `{}` object", key)))
                })?,
                other => other,
            };
        }
        Ok(serde_json::from_value(payload)?)
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "an object",
    }
}
