// SPDX-License-Identifier: MPL-2.0
//! HTTP gateway to the external enhancement service.
//!
//! The service is an external collaborator reached through a single
//! request/response contract: `POST {base_url}/enhance` with a JSON body.
//! One best-effort attempt per submission; no retry, no timeout, no
//! cancellation.

pub mod types;

pub use types::{Algorithm, EnhancementMetrics, EnhancementRequest, EnhancementResponse};

use crate::error::ServiceError;
use crate::media::{data_uri, ImageData};

/// Default base URL of the local development backend.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";

/// A fully validated enhancement outcome, ready for display.
#[derive(Debug, Clone)]
pub struct EnhancementOutcome {
    pub image: ImageData,
    pub metrics: Option<EnhancementMetrics>,
}

/// Submits an enhancement request and validates the response down to a
/// decodable image.
///
/// # Errors
///
/// - [`ServiceError::Transport`] when the backend is unreachable or the
///   connection fails mid-flight.
/// - [`ServiceError::Status`] for any non-2xx answer.
/// - [`ServiceError::MalformedResponse`] when the body is not the expected
///   JSON or the `enhanced_image` field is not a base64 data URI.
/// - [`ServiceError::InvalidImage`] when the payload decodes but is not a
///   valid image.
pub async fn enhance(
    base_url: String,
    request: EnhancementRequest,
) -> Result<EnhancementOutcome, ServiceError> {
    // Build client with explicit redirect policy and user agent
    let client = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::limited(10))
        .user_agent(concat!("MedEnhancer/", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(|e| ServiceError::Transport(e.to_string()))?;

    let url = endpoint_url(&base_url);
    let response = client
        .post(&url)
        .json(&request)
        .send()
        .await
        .map_err(|e| ServiceError::Transport(e.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        return Err(ServiceError::Status(status.as_u16()));
    }

    let body: EnhancementResponse = response
        .json()
        .await
        .map_err(|e| ServiceError::MalformedResponse(e.to_string()))?;

    let (_mime, bytes) = data_uri::decode(&body.enhanced_image)
        .map_err(|e| ServiceError::MalformedResponse(e.to_string()))?;

    let image =
        ImageData::from_encoded(bytes).map_err(|e| ServiceError::InvalidImage(e.to_string()))?;

    Ok(EnhancementOutcome {
        image,
        metrics: body.metrics,
    })
}

/// Joins the base URL and the `/enhance` path, tolerating a trailing slash.
fn endpoint_url(base_url: &str) -> String {
    format!("{}/enhance", base_url.trim_end_matches('/'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_url_joins_without_double_slash() {
        assert_eq!(
            endpoint_url("http://127.0.0.1:5000"),
            "http://127.0.0.1:5000/enhance"
        );
        assert_eq!(
            endpoint_url("http://127.0.0.1:5000/"),
            "http://127.0.0.1:5000/enhance"
        );
    }

    #[tokio::test]
    async fn enhance_against_unreachable_backend_is_a_transport_error() {
        // Port 1 on loopback refuses the connection immediately.
        let request = EnhancementRequest {
            image: "data:image/png;base64,AAA".to_string(),
            algorithm: Algorithm::Clahe,
            clip_limit: 2.0,
            tile_size: 8,
        };

        let result = enhance("http://127.0.0.1:1".to_string(), request).await;
        match result {
            Err(ServiceError::Transport(_)) => {}
            other => panic!("expected Transport error, got {other:?}"),
        }
    }
}
