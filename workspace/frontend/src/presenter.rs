//! Display values derived from view state, kept free of Yew so the
//! formatting rules can be tested natively.

use chrono::NaiveDateTime;
use common::{ForecastResult, RiskIndexResult, RiskTier};

use crate::state::{OperationKind, OperationStatus};

#[derive(Debug, Clone, PartialEq)]
pub struct PlotLink {
    pub url: String,
    pub file_name: String,
}

/// Numeric summary and chart series of a forecast.
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastSummary {
    pub company: String,
    pub low: String,
    pub high: String,
    pub labels: Vec<String>,
    pub values: Vec<f64>,
    pub plot: Option<PlotLink>,
    pub inverted_range: bool,
}

impl From<&ForecastResult> for ForecastSummary {
    fn from(result: &ForecastResult) -> Self {
        Self {
            company: result.company.clone(),
            low: format_price(result.low_likely),
            high: format_price(result.high_likely),
            labels: result.day_labels(),
            values: result.forecast.clone(),
            plot: result.plot_url().map(|url| PlotLink {
                url: url.to_string(),
                file_name: result.plot_file_name(),
            }),
            inverted_range: result.has_inverted_range(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RiskBadge {
    pub company: String,
    pub value: String,
    pub tier: RiskTier,
}

impl RiskBadge {
    /// `None` when the service had no score for the company.
    pub fn from_result(result: &RiskIndexResult) -> Option<Self> {
        let score = result.score()?;
        Some(Self {
            company: result.company.clone(),
            value: format!("{:.2}", score),
            tier: RiskTier::classify(score),
        })
    }

    pub fn color_class(&self) -> &'static str {
        tier_color_class(self.tier)
    }

    pub fn label(&self) -> &'static str {
        self.tier.label()
    }
}

pub fn tier_color_class(tier: RiskTier) -> &'static str {
    match tier {
        RiskTier::Low => "text-success",
        RiskTier::Medium => "text-warning",
        RiskTier::High => "text-error",
    }
}

pub fn format_price(value: f64) -> String {
    format!("{:.2}", value)
}

/// Trigger button text for an operation in `status`.
pub fn button_label(kind: OperationKind, status: OperationStatus) -> &'static str {
    match (kind, status == OperationStatus::Pending) {
        (OperationKind::Forecast, true) => "Predicting...",
        (OperationKind::Forecast, false) => "Predict",
        (OperationKind::RiskIndex, true) => "Loading GRSI...",
        (OperationKind::RiskIndex, false) => "Show GeoRisk Index",
    }
}

/// Notice naming the failed operation, e.g. `Prediction failed: Invalid company`.
pub fn failure_notice(kind: OperationKind, message: &str) -> String {
    format!("{} failed: {}", kind.label(), message)
}

pub fn updated_label(at: NaiveDateTime) -> String {
    format!("Updated {}", at.format("%H:%M:%S"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn tcs_forecast() -> ForecastResult {
        ForecastResult {
            company: "TCS".to_string(),
            low_likely: 140.5,
            high_likely: 162.3,
            forecast: vec![150.0, 151.0, 152.0, 153.0, 154.0, 155.0, 156.0],
            plot_url: None,
        }
    }

    #[test]
    fn test_forecast_summary() {
        let summary = ForecastSummary::from(&tcs_forecast());
        assert_eq!(summary.company, "TCS");
        assert_eq!(summary.low, "140.50");
        assert_eq!(summary.high, "162.30");
        assert_eq!(
            summary.labels,
            (1..=7).map(|d| format!("Day {}", d)).collect::<Vec<_>>()
        );
        assert_eq!(summary.values.len(), 7);
        assert_eq!(summary.plot, None);
        assert!(!summary.inverted_range);
    }

    #[test]
    fn test_forecast_summary_plot_link() {
        let mut result = tcs_forecast();
        result.plot_url = Some("http://127.0.0.1:5000/plots/tcs.png".to_string());

        let summary = ForecastSummary::from(&result);
        assert_eq!(
            summary.plot,
            Some(PlotLink {
                url: "http://127.0.0.1:5000/plots/tcs.png".to_string(),
                file_name: "TCS_plot.png".to_string(),
            })
        );
    }

    #[test]
    fn test_risk_badge_high_tier() {
        let badge = RiskBadge::from_result(&RiskIndexResult {
            company: "TCS".to_string(),
            grsi: Some(82.4),
        })
        .unwrap();

        assert_eq!(badge.value, "82.40");
        assert_eq!(badge.tier, RiskTier::High);
        assert_eq!(badge.color_class(), "text-error");
        assert_eq!(badge.label(), "High geopolitical risk");
    }

    #[test]
    fn test_risk_badge_tiers() {
        let badge = |score: f64| {
            RiskBadge::from_result(&RiskIndexResult {
                company: "Sony".to_string(),
                grsi: Some(score),
            })
            .unwrap()
        };
        assert_eq!(badge(12.0).color_class(), "text-success");
        assert_eq!(badge(30.0).color_class(), "text-warning");
        assert_eq!(badge(0.0).value, "0.00");
    }

    #[test]
    fn test_no_badge_without_score() {
        let result = RiskIndexResult {
            company: "Sony".to_string(),
            grsi: None,
        };
        assert_eq!(RiskBadge::from_result(&result), None);
    }

    #[test]
    fn test_button_labels() {
        assert_eq!(button_label(OperationKind::Forecast, OperationStatus::Idle), "Predict");
        assert_eq!(button_label(OperationKind::Forecast, OperationStatus::Pending), "Predicting...");
        assert_eq!(button_label(OperationKind::RiskIndex, OperationStatus::Failed), "Show GeoRisk Index");
        assert_eq!(button_label(OperationKind::RiskIndex, OperationStatus::Pending), "Loading GRSI...");
    }

    #[test]
    fn test_failure_notice_names_operation() {
        assert_eq!(
            failure_notice(OperationKind::Forecast, "Invalid company"),
            "Prediction failed: Invalid company"
        );
        assert_eq!(
            failure_notice(OperationKind::RiskIndex, "Request timed out after 20000 ms"),
            "GeoRisk Index failed: Request timed out after 20000 ms"
        );
    }

    #[test]
    fn test_updated_label() {
        let at = NaiveDate::from_ymd_opt(2024, 6, 1)
            .unwrap()
            .and_hms_opt(14, 3, 22)
            .unwrap();
        assert_eq!(updated_label(at), "Updated 14:03:22");
    }
}
