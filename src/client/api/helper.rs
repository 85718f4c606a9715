use reqwasm::http::{Request, RequestCredentials, Response};
use serde::de::DeserializeOwned;

use crate::client::{
    api::parse::{endpoint, failure, is_success, parse_body},
    model::error::ApiError,
};

async fn read_body(response: Response) -> Result<(u16, String), ApiError> {
    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| ApiError::transport(Some(status), format!("Failed to read response: {}", e)))?;

    Ok((status, body))
}

/// Helper function to parse API responses with consistent error handling
pub async fn parse_response<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let (status, body) = read_body(response).await?;
    parse_body(status, &body)
}

/// Helper function to parse responses whose success body is ignored
pub async fn parse_empty_response(response: Response) -> Result<(), ApiError> {
    let (status, body) = read_body(response).await?;

    if is_success(status) {
        Ok(())
    } else {
        Err(failure(status, &body))
    }
}

/// Create a GET request with credentials
pub fn get(path: &str) -> Request {
    Request::get(&endpoint(path)).credentials(RequestCredentials::Include)
}

/// Create a POST request with credentials and JSON content type
pub fn post(path: &str) -> Request {
    Request::post(&endpoint(path))
        .credentials(RequestCredentials::Include)
        .header("Content-Type", "application/json")
}

/// Create a DELETE request with credentials
pub fn delete(path: &str) -> Request {
    Request::delete(&endpoint(path)).credentials(RequestCredentials::Include)
}

/// Send a request and handle common errors
pub async fn send_request(request: Request) -> Result<Response, ApiError> {
    request
        .send()
        .await
        .map_err(|e| ApiError::transport(None, format!("Failed to send request: {}", e)))
}

/// Serialize a payload to JSON string
pub fn serialize_json<T: serde::Serialize>(payload: &T) -> Result<String, ApiError> {
    serde_json::to_string(payload)
        .map_err(|e| ApiError::validation(format!("Failed to serialize request: {}", e)))
}
