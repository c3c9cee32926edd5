//! JSON request boundary for the generator.
//!
//! [`handle_generate_request`] is transport-agnostic: it takes the raw request
//! body and returns the status, content type and JSON body to send back. Any
//! decode failure collapses to one generic 400; the detail is only logged.

use crate::engine::generate;
use crate::selection::Selection;
use serde::Serialize;
use serde_json::{Value, json};
use tracing::debug;

pub const CONTENT_TYPE_JSON: &str = "application/json";
pub const STATUS_OK: u16 = 200;
pub const STATUS_BAD_REQUEST: u16 = 400;
pub const INVALID_CONFIGURATION: &str = "Invalid configuration";

/// Why a request body could not be turned into a [`Selection`].
#[derive(Debug, thiserror::Error)]
pub enum RequestError {
    #[error("request body is empty")]
    EmptyBody,

    #[error("request body is not a valid selection: {0}")]
    Decode(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
/// Response ready to hand to whatever server hosts the endpoint.
pub struct ApiResponse {
    pub status: u16,
    pub content_type: &'static str,
    pub body: Value,
}

impl ApiResponse {
    pub fn is_success(&self) -> bool {
        self.status == STATUS_OK
    }

    fn invalid() -> Self {
        Self {
            status: STATUS_BAD_REQUEST,
            content_type: CONTENT_TYPE_JSON,
            body: json!({ "error": INVALID_CONFIGURATION }),
        }
    }
}

/// Decode a request body into a selection.
pub fn parse_selection(body: &[u8]) -> Result<Selection, RequestError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Err(RequestError::EmptyBody);
    }
    Ok(serde_json::from_slice(body)?)
}

/// Handle one generate request end to end.
pub fn handle_generate_request(body: &[u8]) -> ApiResponse {
    let selection = match parse_selection(body) {
        Ok(selection) => selection,
        Err(err) => {
            debug!(error = %err, "rejecting generate request");
            return ApiResponse::invalid();
        }
    };

    let result = generate(&selection);
    match serde_json::to_value(&result) {
        Ok(body) => ApiResponse {
            status: STATUS_OK,
            content_type: CONTENT_TYPE_JSON,
            body,
        },
        Err(err) => {
            debug!(error = %err, "failed to encode generate response");
            ApiResponse::invalid()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_body_returns_result() {
        let body = br#"{
            "transports": ["tcp"],
            "streamMuxers": ["yamux"],
            "connectionEncryption": ["noise"],
            "peerDiscovery": ["mdns"],
            "protocols": ["pubsub"],
            "maxConnections": 20,
            "connectionManager": "basic"
        }"#;
        let response = handle_generate_request(body);
        assert!(response.is_success());
        assert_eq!(response.content_type, "application/json");
        assert_eq!(
            response.body["packages"],
            json!([
                "libp2p",
                "@libp2p/tcp",
                "@libp2p/yamux",
                "@libp2p/noise",
                "@libp2p/mdns",
                "@libp2p/gossipsub"
            ])
        );
        let code = response.body["code"].as_str().unwrap();
        assert!(code.contains("      pubsub: gossipsub(),\n"));
        assert!(code.contains("      minConnections: 5\n"));
    }

    #[test]
    fn malformed_bodies_return_generic_error() {
        for body in [
            &b""[..],
            b"   ",
            b"{not json",
            b"[]",
            br#"{"transports": ["tcp"], "maxConnections": 10}"#,
            br#"{"transports": "tcp", "streamMuxers": [], "connectionEncryption": [], "peerDiscovery": [], "protocols": [], "maxConnections": 10}"#,
            br#"{"transports": [], "streamMuxers": [], "connectionEncryption": [], "peerDiscovery": [], "protocols": [], "maxConnections": "ten"}"#,
        ] {
            let response = handle_generate_request(body);
            assert_eq!(response.status, 400, "body {:?}", String::from_utf8_lossy(body));
            assert_eq!(response.content_type, "application/json");
            assert_eq!(response.body, json!({ "error": "Invalid configuration" }));
        }
    }

    #[test]
    fn parse_selection_reports_cause() {
        assert!(matches!(parse_selection(b"\n"), Err(RequestError::EmptyBody)));
        let err = parse_selection(b"{}").unwrap_err();
        assert!(matches!(err, RequestError::Decode(_)));
        assert!(err.to_string().starts_with("request body is not a valid selection"));
    }
}
