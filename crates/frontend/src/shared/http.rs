//! JSON and multipart requests against the academy backend

use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

use super::api_utils::api_url;
use crate::system::auth::storage;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("Failed to send request: {0}")]
    Network(String),
    #[error("Request failed ({status}): {message}")]
    Status { status: u16, message: String },
    #[error("Failed to parse response: {0}")]
    Decode(String),
    #[error("Failed to serialize request: {0}")]
    Serialize(String),
    #[error("Not authenticated")]
    Unauthorized,
}

impl ApiError {
    /// Text suitable for showing to the user
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Status { message, .. } if !message.is_empty() => message.clone(),
            ApiError::Unauthorized => "Your session has expired. Please log in again.".to_string(),
            ApiError::Network(_) => {
                "Could not reach the server. Check your connection and try again.".to_string()
            }
            _ => "Something went wrong. Please try again.".to_string(),
        }
    }
}

/// Whether the request carries the staff bearer token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Auth {
    Public,
    Staff,
}

fn authorize(builder: RequestBuilder, auth: Auth) -> Result<RequestBuilder, ApiError> {
    match auth {
        Auth::Public => Ok(builder),
        Auth::Staff => {
            let header = storage::bearer_header().ok_or(ApiError::Unauthorized)?;
            Ok(builder.header("Authorization", &header))
        }
    }
}

pub async fn get_json<T: DeserializeOwned>(path: &str, auth: Auth) -> Result<T, ApiError> {
    let response = authorize(Request::get(&api_url(path)), auth)?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    read_json(response).await
}

pub async fn post_json<B, T>(path: &str, body: &B, auth: Auth) -> Result<T, ApiError>
where
    B: Serialize,
    T: DeserializeOwned,
{
    let response = authorize(Request::post(&api_url(path)), auth)?
        .json(body)
        .map_err(|e| ApiError::Serialize(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    read_json(response).await
}

pub async fn put_json<B, T>(path: &str, body: &B, auth: Auth) -> Result<T, ApiError>
where
    B: Serialize,
    T: DeserializeOwned,
{
    let response = authorize(Request::put(&api_url(path)), auth)?
        .json(body)
        .map_err(|e| ApiError::Serialize(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    read_json(response).await
}

pub async fn put_json_no_content<B: Serialize>(
    path: &str,
    body: &B,
    auth: Auth,
) -> Result<(), ApiError> {
    let response = authorize(Request::put(&api_url(path)), auth)?
        .json(body)
        .map_err(|e| ApiError::Serialize(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    expect_ok(response).await
}

pub async fn delete(path: &str, auth: Auth) -> Result<(), ApiError> {
    let response = authorize(Request::delete(&api_url(path)), auth)?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    expect_ok(response).await
}

/// `POST` a multipart form; the browser sets the boundary header
pub async fn post_form<T: DeserializeOwned>(
    path: &str,
    form: web_sys::FormData,
    auth: Auth,
) -> Result<T, ApiError> {
    let response = authorize(Request::post(&api_url(path)), auth)?
        .body(form)
        .map_err(|e| ApiError::Serialize(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    read_json(response).await
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    check_status(&response).await?;
    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

async fn expect_ok(response: Response) -> Result<(), ApiError> {
    check_status(&response).await
}

async fn check_status(response: &Response) -> Result<(), ApiError> {
    if response.status() == 401 {
        return Err(ApiError::Unauthorized);
    }
    if !response.ok() {
        let body = response.text().await.unwrap_or_default();
        return Err(ApiError::Status {
            status: response.status(),
            message: error_message_from_body(&body),
        });
    }
    Ok(())
}

/// Pull a human-readable message out of an error body.
///
/// The backend answers errors as `{"message": ...}` or `{"error": ...}`;
/// anything else is passed through trimmed.
pub fn error_message_from_body(body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
        for key in ["message", "error"] {
            if let Some(text) = value.get(key).and_then(|v| v.as_str()) {
                return text.to_string();
            }
        }
    }
    body.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_message_from_json_body() {
        assert_eq!(
            error_message_from_body(r#"{"message": "Phone already registered"}"#),
            "Phone already registered"
        );
        assert_eq!(error_message_from_body(r#"{"error": "Bad plan"}"#), "Bad plan");
    }

    #[test]
    fn test_error_message_from_plain_body() {
        assert_eq!(error_message_from_body("  Gateway Timeout \n"), "Gateway Timeout");
        assert_eq!(error_message_from_body(r#"{"code": 3}"#), r#"{"code": 3}"#);
    }

    #[test]
    fn test_user_message() {
        let err = ApiError::Status {
            status: 409,
            message: "Phone already registered".to_string(),
        };
        assert_eq!(err.user_message(), "Phone already registered");
        assert_eq!(
            ApiError::Decode("eof".to_string()).user_message(),
            "Something went wrong. Please try again."
        );
    }
}
