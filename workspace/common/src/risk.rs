use serde::{Deserialize, Serialize};

/// Lower bound of the medium GRSI tier.
pub const MEDIUM_RISK_THRESHOLD: f64 = 30.0;
/// Lower bound of the high GRSI tier.
pub const HIGH_RISK_THRESHOLD: f64 = 70.0;

/// GeoRisk Signal Index returned by `GET /grsi`.
///
/// The service omits `GRSI` (or sends `null`) when no score can be computed
/// for a company.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RiskIndexResult {
    pub company: String,
    #[serde(rename = "GRSI", default, skip_serializing_if = "Option::is_none")]
    pub grsi: Option<f64>,
}

impl RiskIndexResult {
    /// The score, if one was supplied and is a finite number.
    pub fn score(&self) -> Option<f64> {
        self.grsi.filter(|score| score.is_finite())
    }

    pub fn tier(&self) -> Option<RiskTier> {
        self.score().map(RiskTier::classify)
    }
}

/// Severity tier of a GRSI score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RiskTier {
    Low,
    Medium,
    High,
}

impl RiskTier {
    pub fn classify(score: f64) -> Self {
        if score < MEDIUM_RISK_THRESHOLD {
            RiskTier::Low
        } else if score < HIGH_RISK_THRESHOLD {
            RiskTier::Medium
        } else {
            RiskTier::High
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RiskTier::Low => "Low geopolitical risk",
            RiskTier::Medium => "Moderate geopolitical risk",
            RiskTier::High => "High geopolitical risk",
        }
    }
}
