use common::{ForecastResult, PredictRequest};

use super::{decode_response, require_company, GatewayError, RawResponse};
use crate::{api_client, settings};

const FALLBACK_MESSAGE: &str = "Unexpected error occurred";

/// Request a multi-day price forecast for a company.
pub async fn request_forecast(request: &PredictRequest) -> Result<ForecastResult, GatewayError> {
    require_company(&request.company).inspect_err(|_| {
        log::warn!("Refusing to request a forecast without a company");
    })?;

    log::trace!("Requesting {}-day forecast for {}", request.days, request.company);
    let timeout_ms = settings::get_settings().forecast_timeout_ms;
    let result = api_client::post("/predict", request, timeout_ms)
        .await
        .and_then(|response| decode_forecast(&response));

    match &result {
        Ok(forecast) => log::info!(
            "Fetched {}-day forecast for {} ({:.2}..{:.2})",
            forecast.forecast.len(),
            forecast.company,
            forecast.low_likely,
            forecast.high_likely
        ),
        Err(e) => log::error!("Failed to fetch forecast for {}: {}", request.company, e),
    }
    result
}

/// Decode a `/predict` response, rejecting payloads without forecast values.
pub fn decode_forecast(response: &RawResponse) -> Result<ForecastResult, GatewayError> {
    let forecast: ForecastResult = decode_response(response, FALLBACK_MESSAGE)?;
    forecast
        .validate()
        .map_err(|e| GatewayError::Remote(format!("Malformed response: {}", e)))?;
    Ok(forecast)
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
    fn test_decode_forecast() {
        let forecast = decode_forecast(&raw(
            200,
            r#"{"company": "TCS", "low_likely": 140.5, "high_likely": 162.3,
                "forecast": [150, 151, 152, 153, 154, 155, 156]}"#,
        ))
        .unwrap();

        assert_eq!(forecast.company, "TCS");
        assert_eq!(forecast.forecast.len(), 7);
        assert_eq!(forecast.plot_url, None);
    }

    #[test]
    fn test_decode_forecast_with_plot() {
        let forecast = decode_forecast(&raw(
            200,
            r#"{"company": "Sony", "low_likely": 1.0, "high_likely": 2.0,
                "forecast": [1.5], "plot_url": "data:image/png;base64,AAAA"}"#,
        ))
        .unwrap();
        assert_eq!(forecast.plot_url(), Some("data:image/png;base64,AAAA"));
    }

    #[test]
    fn test_missing_field_is_remote_error() {
        let err = decode_forecast(&raw(200, r#"{"company": "TCS", "forecast": [1.0]}"#)).unwrap_err();
        assert!(matches!(err, GatewayError::Remote(ref m) if m.starts_with("Malformed response")));
    }

    #[test]
    fn test_empty_forecast_is_remote_error() {
        let err = decode_forecast(&raw(
            200,
            r#"{"company": "TCS", "low_likely": 1.0, "high_likely": 2.0, "forecast": []}"#,
        ))
        .unwrap_err();
        assert_eq!(
            err,
            GatewayError::Remote("Malformed response: forecast contains no values".to_string())
        );
    }

    #[test]
    fn test_invalid_company_message_from_server() {
        let err = decode_forecast(&raw(400, r#"{"error": "Invalid company"}"#)).unwrap_err();
        assert_eq!(err.to_string(), "Invalid company");
    }

    #[test]
    fn test_server_failure_without_message() {
        let err = decode_forecast(&raw(500, "")).unwrap_err();
        assert_eq!(err.to_string(), "Unexpected error occurred (HTTP 500)");
    }
}
