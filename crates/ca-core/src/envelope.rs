//! Response envelope used by every backend endpoint.
//!
//! ```json
//! { "success": true, "message": "...", "data": { ... } }
//! ```
//!
//! Some endpoints name the message `msg` and send `data: []` when there is
//! nothing to return; both are accepted.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::ApiError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiEnvelope<T> {
    #[serde(default)]
    pub success: bool,
    #[serde(alias = "msg", default)]
    pub message: Option<String>,
    #[serde(default)]
    pub data: Option<T>,
}

impl<T> ApiEnvelope<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            message: None,
            data: Some(data),
        }
    }

    /// Unwrap `data`, treating `success: false` and a missing `data` as failures.
    pub fn into_data(self) -> Result<T, ApiError> {
        if !self.success {
            return Err(ApiError::Rejected(self.message.unwrap_or_default()));
        }
        self.data
            .ok_or_else(|| ApiError::Malformed("envelope has no data".to_string()))
    }

    /// Like [`Self::into_data`] but for endpoints whose `data` is irrelevant.
    pub fn into_ack(self) -> Result<Option<String>, ApiError> {
        if !self.success {
            return Err(ApiError::Rejected(self.message.unwrap_or_default()));
        }
        Ok(self.message)
    }
}

impl ApiEnvelope<serde_json::Value> {
    /// Re-type a loosely parsed envelope.
    pub fn decode<T: DeserializeOwned>(self) -> Result<ApiEnvelope<T>, ApiError> {
        let data = match self.data {
            Some(serde_json::Value::Null) | None => None,
            Some(serde_json::Value::Array(items)) if items.is_empty() => None,
            Some(value) => Some(
                serde_json::from_value(value).map_err(|e| ApiError::Malformed(e.to_string()))?,
            ),
        };
        Ok(ApiEnvelope {
            success: self.success,
            message: self.message,
            data,
        })
    }
}
