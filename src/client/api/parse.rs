//! Body parsing shared by every API call, kept free of the browser fetch
//! types so it runs under native tests.

use serde::de::DeserializeOwned;

use crate::{
    client::{constant::API_URL, model::error::ApiError},
    model::api::ErrorDto,
};

/// Join an endpoint path onto the configured API base.
pub fn endpoint(path: &str) -> String {
    format!(
        "{}/{}",
        API_URL.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

pub fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

/// Decode a successful response body. A body that does not match `T` is a
/// validation failure, not a transport one.
pub fn decode<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    serde_json::from_str::<T>(body)
        .map_err(|e| ApiError::validation(format!("Failed to parse response: {}", e)))
}

/// Build the error for a non-2xx response from whatever body the server sent.
pub fn failure(status: u16, body: &str) -> ApiError {
    let message = if let Ok(error_dto) = serde_json::from_str::<ErrorDto>(body) {
        error_dto.error
    } else if !body.trim().is_empty() {
        body.trim().to_string()
    } else {
        format!("Request failed with status {}", status)
    };

    ApiError::transport(Some(status), message)
}

/// Turn a status and body into the typed result of a call.
pub fn parse_body<T: DeserializeOwned>(status: u16, body: &str) -> Result<T, ApiError> {
    if is_success(status) {
        decode(body)
    } else {
        Err(failure(status, body))
    }
}
