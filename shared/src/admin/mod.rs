pub mod handle;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A privileged account. Only existing admins may create or delete these.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Admin {
    pub id: i32,
    /// Identity provider subject this record is linked to, if any.
    pub user_id: Option<String>,
    pub name: String,
    pub email: lettre::Address,
    pub role: AdminRole,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdminRole {
    Admin,
    SuperAdmin,
}
