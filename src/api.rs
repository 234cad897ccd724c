//! Inbound request handling, independent of any HTTP framework.
//!
//! Request body: `{ "hospitalAddress": "..." }` (or `{ "origin": "..." }`;
//! `hospitalAddress` wins when both are present).
//! Reply: `{ "agencies": [...] }` with status 200, or `{ "error": "..." }` with
//! 400 for a malformed request and 500 for anything else. Per-candidate
//! provider failures never produce an error reply.

use serde::{Deserialize, Serialize};

use crate::domain::ResolutionResult;
use crate::engine::{ProximityEngine, TravelTimeProvider};
use crate::error::{AppError, ErrorKind};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProximityRequest {
    #[serde(default)]
    pub hospital_address: Option<String>,
    #[serde(default)]
    pub origin: Option<String>,
}

impl ProximityRequest {
    /// The first non-blank address, `hospitalAddress` first.
    pub fn origin_address(self) -> Option<String> {
        [self.hospital_address, self.origin]
            .into_iter()
            .flatten()
            .map(|address| address.trim().to_string())
            .find(|address| !address.is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ProximityReply {
    Agencies(ResolutionResult),
    Error { error: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiReply {
    pub status: u16,
    pub body: ProximityReply,
}

impl ApiReply {
    fn ok(result: ResolutionResult) -> Self {
        Self {
            status: 200,
            body: ProximityReply::Agencies(result),
        }
    }

    fn from_error(err: &AppError) -> Self {
        let status = match err.kind() {
            ErrorKind::RequestMalformed => 400,
            _ => 500,
        };
        Self {
            status,
            body: ProximityReply::Error {
                error: err.message().to_string(),
            },
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == 200
    }

    pub fn to_json(&self) -> String {
        // Serializing these shapes cannot fail; fall back to a fixed body anyway.
        serde_json::to_string(&self.body)
            .unwrap_or_else(|_| r#"{"error":"Failed to process request"}"#.to_string())
    }
}

/// Parse the request and extract a non-blank origin address.
pub fn parse_request(body: &str) -> Result<String, AppError> {
    let request: ProximityRequest =
        serde_json::from_str(body).map_err(|e| AppError::malformed(format!("Invalid request body: {e}")))?;
    request
        .origin_address()
        .ok_or_else(|| AppError::malformed("Missing origin address (`hospitalAddress`)."))
}

/// Serve one proximity request against `engine`.
pub fn handle_proximity_request<P: TravelTimeProvider>(engine: &ProximityEngine<P>, body: &str) -> ApiReply {
    let reply = parse_request(body)
        .and_then(|origin| engine.resolve_address(&origin))
        .map(|resolution| ApiReply::ok(resolution.result));

    match reply {
        Ok(reply) => reply,
        Err(err) => {
            log::warn!("proximity request failed: {err}");
            ApiReply::from_error(&err)
        }
    }
}
