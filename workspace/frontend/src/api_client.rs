pub mod forecast;
pub mod risk_index;

use std::cell::Cell;
use std::rc::Rc;

use common::ErrorResponse;
use gloo_net::http::{Request, RequestBuilder};
use gloo_timers::callback::Timeout;
use serde::de::DeserializeOwned;
use serde::Serialize;
use web_sys::{AbortController, AbortSignal};

use crate::settings;

fn api_url(endpoint: &str) -> String {
    settings::get_settings().api_url(endpoint)
}

/// Reject a call that has no company to ask about.
pub fn require_company(company: &str) -> Result<(), GatewayError> {
    if company.trim().is_empty() {
        return Err(GatewayError::Validation("Please select a company first!".to_string()));
    }
    Ok(())
}

/// Failure of a remote call, already phrased for the user.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GatewayError {
    /// A required selection is missing; no request was sent.
    #[error("{0}")]
    Validation(String),
    /// The service answered with an error status or an unusable payload.
    #[error("{0}")]
    Remote(String),
    /// The service could not be reached or did not answer in time.
    #[error("{0}")]
    Network(String),
}

/// Status and body of a completed HTTP exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

/// Turn a raw response into `T`.
///
/// Non-success statuses prefer the server's `error` text over `fallback`;
/// a success body that does not deserialize is reported as malformed.
pub fn decode_response<T>(response: &RawResponse, fallback: &str) -> Result<T, GatewayError>
where
    T: DeserializeOwned,
{
    if !(200..300).contains(&response.status) {
        let message = serde_json::from_str::<ErrorResponse>(&response.body)
            .ok()
            .and_then(|err| err.message().map(str::to_string))
            .unwrap_or_else(|| format!("{} (HTTP {})", fallback, response.status));
        return Err(GatewayError::Remote(message));
    }

    serde_json::from_str(&response.body)
        .map_err(|e| GatewayError::Remote(format!("Malformed response: {}", e)))
}

/// Aborts the request in flight once `timeout_ms` elapses.
///
/// Dropping the deadline cancels the timer.
struct Deadline {
    controller: Option<AbortController>,
    timed_out: Rc<Cell<bool>>,
    timeout_ms: u32,
    _timer: Option<Timeout>,
}

impl Deadline {
    fn arm(timeout_ms: u32) -> Self {
        let timed_out = Rc::new(Cell::new(false));

        let controller = match AbortController::new() {
            Ok(controller) => Some(controller),
            Err(e) => {
                log::warn!("AbortController unavailable, request has no timeout: {:?}", e);
                None
            }
        };

        let timer = controller.clone().map(|controller| {
            let timed_out = timed_out.clone();
            Timeout::new(timeout_ms, move || {
                timed_out.set(true);
                controller.abort();
            })
        });

        Self {
            controller,
            timed_out,
            timeout_ms,
            _timer: timer,
        }
    }

    fn signal(&self) -> Option<AbortSignal> {
        self.controller.as_ref().map(|controller| controller.signal())
    }

    fn network_error(&self, context: &str, err: gloo_net::Error) -> GatewayError {
        if self.timed_out.get() {
            GatewayError::Network(format!("Request timed out after {} ms", self.timeout_ms))
        } else {
            GatewayError::Network(format!("{}: {}", context, err))
        }
    }
}

async fn execute(endpoint: &str, request: Request, deadline: Deadline) -> Result<RawResponse, GatewayError> {
    let response = request.send().await.map_err(|e| {
        let err = deadline.network_error("Request failed", e);
        log::error!("{} - {}", endpoint, err);
        err
    })?;

    let status = response.status();
    let body = response.text().await.map_err(|e| {
        let err = deadline.network_error("Failed to read response", e);
        log::error!("{} - {}", endpoint, err);
        err
    })?;

    if !response.ok() {
        log::warn!("{} - Non-OK response: {}", endpoint, status);
    }
    log::trace!("{} - Response received ({} bytes)", endpoint, body.len());
    Ok(RawResponse { status, body })
}

fn with_signal(builder: RequestBuilder, deadline: &Deadline) -> RequestBuilder {
    builder.abort_signal(deadline.signal().as_ref())
}

/// Common GET request handler
pub async fn get(endpoint: &str, query: &[(&str, &str)], timeout_ms: u32) -> Result<RawResponse, GatewayError> {
    let url = api_url(endpoint);
    log::debug!("GET request to: {} {:?}", url, query);

    let deadline = Deadline::arm(timeout_ms);
    let request = with_signal(Request::get(&url), &deadline)
        .query(query.iter().copied())
        .build()
        .map_err(|e| {
            let error_msg = format!("Failed to build request: {}", e);
            log::error!("GET {} - {}", endpoint, error_msg);
            GatewayError::Network(error_msg)
        })?;

    execute(endpoint, request, deadline).await
}

/// Common POST request handler
pub async fn post<B>(endpoint: &str, body: &B, timeout_ms: u32) -> Result<RawResponse, GatewayError>
where
    B: Serialize,
{
    let url = api_url(endpoint);
    log::debug!("POST request to: {}", url);

    let deadline = Deadline::arm(timeout_ms);
    let request = with_signal(Request::post(&url), &deadline)
        .json(body)
        .map_err(|e| {
            let error_msg = format!("Failed to serialize request: {}", e);
            log::error!("POST {} - {}", endpoint, error_msg);
            GatewayError::Network(error_msg)
        })?;

    execute(endpoint, request, deadline).await
}
