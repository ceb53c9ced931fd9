//! Common transport-layer types shared between the dashboard and the
//! prediction service. These structs mirror the service's request/response
//! payloads so the frontend can deserialize API responses without
//! duplicating shapes.

mod forecast;
mod risk;

pub use forecast::{ForecastResult, PredictRequest};
pub use risk::{RiskIndexResult, RiskTier};

use serde::{Deserialize, Serialize};

/// Error body returned by the service on any non-success status.
///
/// The `error` field is optional on our side: a proxy or a crashed worker
/// may answer with an empty or foreign JSON body.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ErrorResponse {
    #[serde(default)]
    pub error: Option<String>,
}

impl ErrorResponse {
    /// The server-supplied message, if it carries any text.
    pub fn message(&self) -> Option<&str> {
        self.error
            .as_deref()
            .map(str::trim)
            .filter(|message| !message.is_empty())
    }
}
