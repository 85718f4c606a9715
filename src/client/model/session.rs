use crate::{
    client::model::error::ApiError,
    model::{
        session::{IndexInfo, Session},
        user::RedactedUser,
    },
};

/// Connection to the management API as last observed by the session store.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum ConnectionState {
    /// Nothing has loaded successfully yet
    #[default]
    Disconnected,
    /// Last identity fetch succeeded
    Ready(IndexInfo),
    /// Last identity fetch failed; any earlier snapshot is gone
    Error(String),
}

/// Tag of a [`ConnectionState`], for consumers that only branch on the variant.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ApiState {
    Disconnected,
    Ready,
    Error,
}

impl From<Result<IndexInfo, ApiError>> for ConnectionState {
    fn from(result: Result<IndexInfo, ApiError>) -> Self {
        match result {
            Ok(info) => ConnectionState::Ready(info),
            Err(err) => ConnectionState::Error(err.to_string()),
        }
    }
}

impl ConnectionState {
    pub fn state(&self) -> ApiState {
        match self {
            ConnectionState::Disconnected => ApiState::Disconnected,
            ConnectionState::Ready(_) => ApiState::Ready,
            ConnectionState::Error(_) => ApiState::Error,
        }
    }

    pub fn info(&self) -> Option<&IndexInfo> {
        match self {
            ConnectionState::Ready(info) => Some(info),
            _ => None,
        }
    }

    pub fn session(&self) -> Option<&Session> {
        self.info().map(|info| &info.session)
    }

    /// Get the authenticated user, if any
    pub fn user(&self) -> Option<&RedactedUser> {
        self.info().and_then(|info| info.user.as_ref())
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            ConnectionState::Error(reason) => Some(reason),
            _ => None,
        }
    }
}
