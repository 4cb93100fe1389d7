pub mod handle;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Cohort label attached to registrations that don't specify one.
pub const DEFAULT_BATCH: &str = "VIS-2025";

/// A student registration record.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    pub id: i32,
    /// Identity provider subject this record is linked to, if any.
    pub user_id: Option<String>,
    pub name: String,
    pub email: lettre::Address,
    pub reg_no: String,
    pub batch: String,
    pub status: StudentStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Review status of a registration.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StudentStatus {
    Pending,
    Approved,
    Rejected,
}

impl StudentStatus {
    /// Whether an admin may move a record from this status to `next`.
    ///
    /// Re-asserting the current status is always allowed; rejection is
    /// terminal.
    pub fn can_become(self, next: StudentStatus) -> bool {
        match (self, next) {
            (a, b) if a == b => true,
            (StudentStatus::Pending, _) => true,
            (StudentStatus::Approved, StudentStatus::Rejected) => true,
            _ => false,
        }
    }
}

impl std::fmt::Display for StudentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            StudentStatus::Pending => "pending",
            StudentStatus::Approved => "approved",
            StudentStatus::Rejected => "rejected",
        })
    }
}
