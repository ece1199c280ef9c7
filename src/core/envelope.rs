// src/core/envelope.rs
//! Response envelope classification
//!
//! Backends answer either with the payload itself or with a
//! `{ success, data, error }` wrapper. Both shapes are accepted on every
//! endpoint; the classification happens once, here.

use serde_json::Value;

use super::error::{ApiError, ApiResult, FALLBACK_ERROR_MESSAGE};

#[derive(Debug, Clone, PartialEq)]
pub enum ApiEnvelope {
    Wrapped {
        success: bool,
        data: Value,
        error: Option<String>,
    },
    Raw(Value),
}

impl ApiEnvelope {
    /// Any JSON object carrying a `success` key is a wrapper, whatever the key's type.
    pub fn classify(value: Value) -> Self {
        match value {
            Value::Object(mut map) if map.contains_key("success") => {
                let success = map.remove("success").map(|v| is_truthy(&v)).unwrap_or(false);
                let data = map.remove("data").unwrap_or(Value::Null);
                let error = map
                    .remove("error")
                    .and_then(|v| v.as_str().map(str::to_string))
                    .filter(|msg| !msg.is_empty());
                ApiEnvelope::Wrapped {
                    success,
                    data,
                    error,
                }
            }
            other => ApiEnvelope::Raw(other),
        }
    }

    /// Yield the payload or the application failure the wrapper reports
    pub fn into_payload(self) -> ApiResult<Value> {
        match self {
            ApiEnvelope::Raw(value) => Ok(value),
            ApiEnvelope::Wrapped {
                success: true,
                data,
                ..
            } => Ok(data),
            ApiEnvelope::Wrapped {
                success: false,
                error,
                ..
            } => Err(ApiError::Application {
                message: error.unwrap_or_else(|| FALLBACK_ERROR_MESSAGE.to_string()),
            }),
        }
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0 && !f.is_nan()).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
