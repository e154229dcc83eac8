//! Wire types specific to the Messages API.

use serde::{Deserialize, Serialize};

/// Error body, e.g.
/// `{"type": "error", "error": {"type": "overloaded_error", "message": "Overloaded"}}`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiErrorBody {
    pub error: ApiErrorDetail,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiErrorDetail {
    #[serde(rename = "type", default)]
    pub error_type: Option<String>,
    pub message: String,
}

impl ApiErrorBody {
    /// Parse an error body, if it has the documented shape.
    pub fn parse(body: &str) -> Option<Self> {
        serde_json::from_str(body).ok()
    }
}
