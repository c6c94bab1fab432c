use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

/// `created_at` is stamped by the store; a client-supplied value is ignored.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserInput {
    #[serde(alias = "Name", deserialize_with = "crate::null_as_default")]
    pub name: String,
}
