use serde::{Deserialize, Serialize};
use tracing::warn;

/// Request body for `POST /predict`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PredictRequest {
    pub company: String,
    pub days: u32,
}

impl PredictRequest {
    pub fn new(company: impl Into<String>, days: u32) -> Self {
        Self {
            company: company.into(),
            days,
        }
    }
}

/// Forecast returned by `POST /predict`.
///
/// Every field except `plot_url` is required; a payload missing any of them
/// fails to deserialize.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ForecastResult {
    pub company: String,
    pub low_likely: f64,
    pub high_likely: f64,
    pub forecast: Vec<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plot_url: Option<String>,
}

impl ForecastResult {
    /// Checks the invariants a deserialized payload cannot express.
    ///
    /// An inverted likely-range is tolerated and only logged.
    pub fn validate(&self) -> Result<(), String> {
        if self.forecast.is_empty() {
            return Err("forecast contains no values".to_string());
        }

        if let Some(day) = self.forecast.iter().position(|value| !value.is_finite()) {
            return Err(format!("forecast value for day {} is not a number", day + 1));
        }

        if !self.low_likely.is_finite() || !self.high_likely.is_finite() {
            return Err("likely range is not a number".to_string());
        }

        if self.has_inverted_range() {
            warn!(
                company = %self.company,
                low = self.low_likely,
                high = self.high_likely,
                "Forecast likely-range is inverted"
            );
        }

        Ok(())
    }

    pub fn has_inverted_range(&self) -> bool {
        self.low_likely > self.high_likely
    }

    /// Chart labels keyed by day index, starting at `Day 1`.
    pub fn day_labels(&self) -> Vec<String> {
        (1..=self.forecast.len()).map(|day| format!("Day {}", day)).collect()
    }

    /// File name offered when downloading the plot image.
    pub fn plot_file_name(&self) -> String {
        format!("{}_plot.png", self.company)
    }

    pub fn plot_url(&self) -> Option<&str> {
        self.plot_url.as_deref().filter(|url| !url.trim().is_empty())
    }
}
