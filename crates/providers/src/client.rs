//! HTTP dispatch of a built request to a resolved backend.

use serde_json::Value;
use tracing::{debug, warn};

use crate::ProviderError;
use crate::backend::ResolvedBackend;

/// POST `body` to the backend and return the decoded JSON reply.
pub async fn send_request(backend: &ResolvedBackend, body: &Value) -> Result<Value, ProviderError> {
    let client = reqwest::Client::builder()
        .timeout(backend.timeout)
        .build()
        .map_err(|e| ProviderError::Client(e.to_string()))?;

    let mut request = client.post(&backend.url).json(body);
    for (key, value) in &backend.headers {
        request = request.header(key.as_str(), value.as_str());
    }
    if let Some(key) = &backend.api_key {
        request = request.bearer_auth(key);
    }

    debug!(url = %backend.url, model = %backend.model, "Sending request");

    let response = request.send().await.map_err(|e| {
        if e.is_timeout() {
            ProviderError::Timeout(u64::try_from(backend.timeout.as_millis()).unwrap_or(u64::MAX))
        } else {
            ProviderError::Network(e.to_string())
        }
    })?;

    let status = response.status();
    if !status.is_success() {
        let error_body = response.text().await.unwrap_or_default();
        warn!(status = status.as_u16(), body = %error_body, "Backend returned error");
        return Err(ProviderError::ApiError {
            status_code: status.as_u16(),
            message: error_body,
        });
    }

    response
        .json()
        .await
        .map_err(|e| ProviderError::InvalidResponse(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn unreachable_backend_is_network_error() {
        let backend = ResolvedBackend {
            url: "http://127.0.0.1:1/v1/chat/completions".into(),
            timeout: std::time::Duration::from_secs(5),
            ..ResolvedBackend::default()
        };
        let err = send_request(&backend, &json!({})).await.unwrap_err();
        assert!(matches!(
            err,
            ProviderError::Network(_) | ProviderError::Timeout(_)
        ));
    }

    #[tokio::test]
    async fn sub_second_timeout_reports_millis() {
        // Accepts connections but never answers.
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let backend = ResolvedBackend {
            url: format!("http://{addr}/v1/chat/completions"),
            timeout: std::time::Duration::from_millis(150),
            ..ResolvedBackend::default()
        };
        let err = send_request(&backend, &json!({})).await.unwrap_err();
        assert!(matches!(err, ProviderError::Timeout(150)), "got {err:?}");
        assert_eq!(err.to_string(), "Request timed out after 150ms");
        drop(listener);
    }
}
