use serde::{Deserialize, Serialize};

/// User record with credentials stripped, safe to hold and display client-side.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct RedactedUser {
    pub id: String,
    pub username: String,
    #[serde(default)]
    pub superuser: bool,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
pub struct LoginModel {
    pub username: String,
    pub password: String,
}
