//! Query strings and response bodies for admin endpoints.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AdvanceTimeParams {
    pub fail: Option<String>,
}

impl AdvanceTimeParams {
    /// Only the exact value `true` simulates a declined payment.
    pub fn payment_fails(&self) -> bool {
        self.fail.as_deref() == Some("true")
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct TriggeredResponse {
    pub status: &'static str,
    pub event_type: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct StatusResponse {
    pub status: &'static str,
}
