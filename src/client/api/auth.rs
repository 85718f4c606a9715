use crate::{
    client::{
        api::helper::{delete, parse_empty_response, parse_response, post, send_request, serialize_json},
        model::error::ApiError,
    },
    model::user::{LoginModel, RedactedUser},
};

pub async fn login(credentials: &LoginModel) -> Result<RedactedUser, ApiError> {
    let body = serialize_json(credentials)?;
    let request = post("/auth/login").body(body);
    let response = send_request(request).await?;
    parse_response(response).await
}

/// Drop the user from the current session. Callers reload the session store
/// afterwards to pick up the anonymous snapshot.
pub async fn logout() -> Result<(), ApiError> {
    let request = delete("/auth/login");
    let response = send_request(request).await?;
    parse_empty_response(response).await
}
