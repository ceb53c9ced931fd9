use common::RiskIndexResult;

use super::{decode_response, require_company, GatewayError, RawResponse};
use crate::{api_client, settings};

const FALLBACK_MESSAGE: &str = "Failed to fetch GeoRisk Signal Index";

/// Fetch the GeoRisk Signal Index of a company.
///
/// A response without a `GRSI` value is a success with no score.
pub async fn request_risk_index(company: &str) -> Result<RiskIndexResult, GatewayError> {
    require_company(company).inspect_err(|_| {
        log::warn!("Refusing to request a GeoRisk Index without a company");
    })?;

    let timeout_ms = settings::get_settings().risk_timeout_ms;
    let result = api_client::get("/grsi", &[("company", company)], timeout_ms)
        .await
        .and_then(|response| decode_risk_index(&response));

    match &result {
        Ok(risk) => match risk.score() {
            Some(score) => log::info!("Fetched GRSI {:.2} for {}", score, risk.company),
            None => log::info!("No GRSI available for {}", risk.company),
        },
        Err(e) => log::error!("Failed to fetch GRSI for {}: {}", company, e),
    }
    result
}

pub fn decode_risk_index(response: &RawResponse) -> Result<RiskIndexResult, GatewayError> {
    decode_response(response, FALLBACK_MESSAGE)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(status: u16, body: &str) -> RawResponse {
        RawResponse {
            status,
            body: body.to_string(),
        }
    }

    #[test]
    fn test_decode_score() {
        let risk = decode_risk_index(&raw(200, r#"{"company": "TCS", "GRSI": 82.4}"#)).unwrap();
        assert_eq!(risk.score(), Some(82.4));
    }

    #[test]
    fn test_missing_score_is_not_an_error() {
        let risk = decode_risk_index(&raw(200, r#"{"company": "Honda"}"#)).unwrap();
        assert_eq!(risk.company, "Honda");
        assert_eq!(risk.score(), None);
    }

    #[test]
    fn test_non_numeric_score_is_malformed() {
        let err = decode_risk_index(&raw(200, r#"{"company": "TCS", "GRSI": "n/a"}"#)).unwrap_err();
        assert!(matches!(err, GatewayError::Remote(ref m) if m.starts_with("Malformed response")));
    }

    #[test]
    fn test_missing_company_is_malformed() {
        let err = decode_risk_index(&raw(200, r#"{"GRSI": 10.0}"#)).unwrap_err();
        assert!(matches!(err, GatewayError::Remote(_)));
    }

    #[test]
    fn test_error_status_uses_generic_message() {
        let err = decode_risk_index(&raw(404, "Not Found")).unwrap_err();
        assert_eq!(
            err,
            GatewayError::Remote("Failed to fetch GeoRisk Signal Index (HTTP 404)".to_string())
        );
    }
}
