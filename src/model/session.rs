use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::user::RedactedUser;

/// Reference to a document owned by the server.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Link {
    pub collection: String,
    pub id: String,
}

/// Server-owned session snapshot. The console never edits it, it only swaps
/// in whatever the identity endpoint last returned.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Session {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub created: DateTime<Utc>,
    pub last_connection: DateTime<Utc>,
    #[serde(default)]
    pub user: Option<Link>,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum RunnerMode {
    #[default]
    DockerHost,
}

/// Payload of `GET /`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct IndexInfo {
    pub session: Session,
    #[serde(default)]
    pub runner_mode: RunnerMode,
    #[serde(default)]
    pub user: Option<RedactedUser>,
}
