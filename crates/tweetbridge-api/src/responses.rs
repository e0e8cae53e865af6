//! Success response envelopes.

use serde::Serialize;
use serde_json::Value;
use utoipa::ToSchema;

/// `{success, message}` envelope for operations with no row data.
#[derive(Debug, Serialize, ToSchema)]
pub struct MessageResponse {
    pub success: bool,
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }
}

/// `{success, data, message}` envelope carrying inserted rows verbatim.
#[derive(Debug, Serialize, ToSchema)]
pub struct PostResponse {
    pub success: bool,
    #[schema(value_type = Vec<Object>)]
    pub data: Vec<Value>,
    pub message: String,
}

impl PostResponse {
    pub fn new(data: Vec<Value>, message: impl Into<String>) -> Self {
        Self {
            success: true,
            data,
            message: message.into(),
        }
    }
}
