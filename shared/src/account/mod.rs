pub mod handle;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An identity record mirrored from the external identity provider.
///
/// The provider owns these records: they are created or refreshed when a
/// caller resolves its own identity, and never deleted by this system.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Subject identifier assigned by the identity provider.
    pub id: String,
    pub email: Option<lettre::Address>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub profile_image_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// The role an authenticated identity resolves to.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Listed in the admins table.
    Admin,
    /// Linked to a student record.
    Student,
    /// Authenticated but matching neither table.
    Pending,
}
