//! Distance-matrix API integration.
//!
//! One GET per (origin, destination) pair; only `rows[0].elements[0]` of the
//! reply is consulted. Every failure is folded into a `TravelOutcome` so a bad
//! pair never fails the surrounding resolution.

use std::time::Duration;

use reqwest::blocking::Client;
use serde::Deserialize;

use crate::domain::TravelOutcome;
use crate::engine::TravelTimeProvider;
use crate::error::AppError;

pub const DEFAULT_BASE_URL: &str = "https://maps.googleapis.com/maps/api/distancematrix/json";

const API_KEY_VAR: &str = "MAPS_API_KEY";
const BASE_URL_VAR: &str = "REACH_DISTANCE_MATRIX_URL";
const STATUS_OK: &str = "OK";

pub struct DistanceMatrixClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl DistanceMatrixClient {
    /// Build a client from `.env` / process environment.
    ///
    /// A missing credential fails here rather than on the first request.
    pub fn from_env(timeout: Duration) -> Result<Self, AppError> {
        dotenvy::dotenv().ok();
        Self::from_vars(
            std::env::var(API_KEY_VAR).ok(),
            std::env::var(BASE_URL_VAR).ok(),
            timeout,
        )
    }

    /// Build a client from already-read `MAPS_API_KEY` / `REACH_DISTANCE_MATRIX_URL`
    /// values. A blank URL falls back to the public endpoint.
    pub fn from_vars(
        api_key: Option<String>,
        base_url: Option<String>,
        timeout: Duration,
    ) -> Result<Self, AppError> {
        let api_key =
            api_key.ok_or_else(|| AppError::config(format!("Missing {API_KEY_VAR} in environment (.env).")))?;
        let base_url = base_url
            .map(|url| url.trim().to_string())
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        log::debug!("distance matrix endpoint: {base_url}");
        Self::new(base_url, api_key, timeout)
    }

    pub fn new(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, AppError> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(AppError::config(format!("{API_KEY_VAR} is empty.")));
        }
        if timeout.is_zero() {
            return Err(AppError::config("Provider timeout must be greater than zero."));
        }

        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AppError::config(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: base_url.into(),
            api_key,
        })
    }

    fn fetch_pair(&self, origin: &str, destination: &str) -> TravelOutcome {
        // `query` URL-encodes both addresses.
        let resp = match self
            .client
            .get(&self.base_url)
            .query(&[
                ("origins", origin),
                ("destinations", destination),
                ("key", self.api_key.as_str()),
            ])
            .send()
        {
            Ok(resp) => resp,
            Err(e) => return TravelOutcome::transport(describe_request_error(e)),
        };

        if !resp.status().is_success() {
            return TravelOutcome::transport(format!(
                "distance matrix request failed with status {}",
                resp.status()
            ));
        }

        match resp.json::<DistanceMatrixResponse>() {
            Ok(body) => classify_response(body),
            Err(e) => TravelOutcome::transport(format!(
                "failed to parse distance matrix response: {}",
                describe_request_error(e)
            )),
        }
    }
}

impl TravelTimeProvider for DistanceMatrixClient {
    fn travel_time(&self, origin: &str, destination: &str) -> TravelOutcome {
        self.fetch_pair(origin, destination)
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct DistanceMatrixResponse {
    #[serde(default)]
    status: Option<String>,
    #[serde(default)]
    error_message: Option<String>,
    #[serde(default)]
    rows: Vec<MatrixRow>,
}

#[derive(Debug, Deserialize)]
struct MatrixRow {
    #[serde(default)]
    elements: Vec<MatrixElement>,
}

#[derive(Debug, Deserialize)]
struct MatrixElement {
    #[serde(default)]
    status: Option<String>,
    #[serde(default)]
    duration: Option<TextValue>,
}

#[derive(Debug, Deserialize)]
struct TextValue {
    // Kept untyped so a bad value only matters when the element is OK.
    #[serde(default)]
    value: Option<serde_json::Value>,
}

/// Map a decoded reply onto an outcome for its single pair.
pub(crate) fn classify_response(body: DistanceMatrixResponse) -> TravelOutcome {
    if let Some(status) = body.status.as_deref() {
        if status != STATUS_OK {
            let reason = match body.error_message.as_deref() {
                Some(msg) => format!("provider rejected request ({status}): {msg}"),
                None => format!("provider rejected request ({status})"),
            };
            return TravelOutcome::transport(reason);
        }
    }

    let Some(element) = body
        .rows
        .into_iter()
        .next()
        .and_then(|row| row.elements.into_iter().next())
    else {
        return TravelOutcome::transport("reply has no rows[0].elements[0]");
    };

    match element.status.as_deref() {
        Some(STATUS_OK) => {}
        Some(other) => return TravelOutcome::unreachable(other),
        None => return TravelOutcome::transport("element has no status"),
    }

    match element.duration.and_then(|d| d.value) {
        Some(value) => match value.as_u64() {
            Some(secs) => TravelOutcome::Duration(secs),
            None => TravelOutcome::transport(format!("invalid duration value: {value}")),
        },
        None => TravelOutcome::transport("OK element without duration.value"),
    }
}

/// Describe a reqwest failure without echoing the URL (it carries the key).
fn describe_request_error(e: reqwest::Error) -> String {
    if e.is_timeout() {
        return "request timed out".to_string();
    }
    if e.is_connect() {
        return format!("connection failed: {}", e.without_url());
    }
    e.without_url().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify(json: &str) -> TravelOutcome {
        let body: DistanceMatrixResponse = serde_json::from_str(json).unwrap();
        classify_response(body)
    }

    #[test]
    fn ok_element_yields_duration() {
        let outcome = classify(
            r#"{"status":"OK","rows":[{"elements":[{"status":"OK","duration":{"text":"20 mins","value":1200}}]}]}"#,
        );
        assert_eq!(outcome, TravelOutcome::Duration(1200));
    }

    #[test]
    fn missing_top_level_status_is_tolerated() {
        let outcome = classify(r#"{"rows":[{"elements":[{"status":"OK","duration":{"value":0}}]}]}"#);
        assert_eq!(outcome, TravelOutcome::Duration(0));
    }

    #[test]
    fn non_ok_element_is_unreachable() {
        let outcome = classify(r#"{"status":"OK","rows":[{"elements":[{"status":"ZERO_RESULTS"}]}]}"#);
        assert_eq!(outcome, TravelOutcome::unreachable("ZERO_RESULTS"));
    }

    #[test]
    fn non_ok_element_ignores_bad_duration() {
        let outcome = classify(
            r#"{"rows":[{"elements":[{"status":"NOT_FOUND","duration":{"value":"soon"}}]}]}"#,
        );
        assert_eq!(outcome, TravelOutcome::unreachable("NOT_FOUND"));
    }

    #[test]
    fn ok_without_duration_is_transport_error() {
        let outcome = classify(r#"{"rows":[{"elements":[{"status":"OK"}]}]}"#);
        assert_eq!(outcome.label(), "transport_error");
    }

    #[test]
    fn negative_or_fractional_duration_is_transport_error() {
        let negative = classify(r#"{"rows":[{"elements":[{"status":"OK","duration":{"value":-5}}]}]}"#);
        assert_eq!(negative.label(), "transport_error");

        let fractional = classify(r#"{"rows":[{"elements":[{"status":"OK","duration":{"value":12.5}}]}]}"#);
        assert_eq!(fractional.label(), "transport_error");
    }

    #[test]
    fn rejected_request_is_transport_error_with_message() {
        let outcome = classify(
            r#"{"status":"REQUEST_DENIED","error_message":"The provided API key is invalid.","rows":[]}"#,
        );
        match outcome {
            TravelOutcome::TransportError { reason } => {
                assert!(reason.contains("REQUEST_DENIED"));
                assert!(reason.contains("API key is invalid"));
            }
            other => panic!("expected transport error, got {other:?}"),
        }
    }

    #[test]
    fn empty_rows_is_transport_error() {
        assert_eq!(classify(r#"{"status":"OK","rows":[]}"#).label(), "transport_error");
        assert_eq!(classify(r#"{"status":"OK","rows":[{"elements":[]}]}"#).label(), "transport_error");
    }

    #[test]
    fn only_first_element_is_consulted() {
        let outcome = classify(
            r#"{"rows":[{"elements":[{"status":"OK","duration":{"value":60}},{"status":"OK","duration":{"value":1}}]}]}"#,
        );
        assert_eq!(outcome, TravelOutcome::Duration(60));
    }

    #[test]
    fn blank_key_fails_at_construction() {
        let err = DistanceMatrixClient::new(DEFAULT_BASE_URL, "  ", Duration::from_secs(1))
            .err()
            .unwrap();
        assert_eq!(err.kind(), crate::error::ErrorKind::Config);
    }

    #[test]
    fn missing_key_fails_before_any_request() {
        let err = DistanceMatrixClient::from_vars(None, None, Duration::from_secs(1))
            .err()
            .unwrap();
        assert_eq!(err.kind(), crate::error::ErrorKind::Config);
        assert!(err.message().contains(API_KEY_VAR));
    }

    #[test]
    fn present_key_with_blank_url_builds() {
        let client =
            DistanceMatrixClient::from_vars(Some("key".to_string()), Some("  ".to_string()), Duration::from_secs(1));
        assert!(client.is_ok());
    }

    #[test]
    fn zero_timeout_fails_at_construction() {
        let err = DistanceMatrixClient::new(DEFAULT_BASE_URL, "key", Duration::ZERO)
            .err()
            .unwrap();
        assert_eq!(err.kind(), crate::error::ErrorKind::Config);
    }
}
