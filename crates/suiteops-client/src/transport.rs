//! Shared request plumbing for the sub-clients.
//!
//! Centralizes the status check and error mapping so every endpoint
//! method reads the same way: build the request, name the endpoint, pick
//! the decode shape.

use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::ApiError;

/// Send a request and decode a JSON body on success.
pub(crate) async fn request_json<T: DeserializeOwned>(
    request: reqwest::RequestBuilder,
    endpoint: &str,
) -> Result<T, ApiError> {
    let resp = expect_success(request, endpoint).await?;
    resp.json().await.map_err(|e| ApiError::Deserialization {
        endpoint: endpoint.to_string(),
        source: e,
    })
}

/// Send a singular-lookup request. A 404, or a success with a `null`
/// body, is `Ok(None)`.
pub(crate) async fn request_json_opt<T: DeserializeOwned>(
    request: reqwest::RequestBuilder,
    endpoint: &str,
) -> Result<Option<T>, ApiError> {
    let resp = send(request, endpoint).await?;

    if resp.status() == reqwest::StatusCode::NOT_FOUND {
        return Ok(None);
    }
    if !resp.status().is_success() {
        return Err(api_error(resp, endpoint).await);
    }

    resp.json::<Option<T>>()
        .await
        .map_err(|e| ApiError::Deserialization {
            endpoint: endpoint.to_string(),
            source: e,
        })
}

/// Send a request and discard the body on success.
pub(crate) async fn request_unit(
    request: reqwest::RequestBuilder,
    endpoint: &str,
) -> Result<(), ApiError> {
    expect_success(request, endpoint).await.map(|_| ())
}

async fn send(
    request: reqwest::RequestBuilder,
    endpoint: &str,
) -> Result<reqwest::Response, ApiError> {
    let resp = request.send().await.map_err(|e| ApiError::Http {
        endpoint: endpoint.to_string(),
        source: e,
    })?;
    debug!(endpoint, status = resp.status().as_u16(), "PMS service responded");
    Ok(resp)
}

async fn expect_success(
    request: reqwest::RequestBuilder,
    endpoint: &str,
) -> Result<reqwest::Response, ApiError> {
    let resp = send(request, endpoint).await?;
    if !resp.status().is_success() {
        return Err(api_error(resp, endpoint).await);
    }
    Ok(resp)
}

async fn api_error(resp: reqwest::Response, endpoint: &str) -> ApiError {
    let status = resp.status().as_u16();
    let body = resp.text().await.unwrap_or_default();
    ApiError::Api {
        endpoint: endpoint.to_string(),
        status,
        body,
    }
}
