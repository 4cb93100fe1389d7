use serde::{Deserialize, Serialize};

/// Aggregate counters recomputed on every request.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_students: usize,
    /// Records for today's date with present status.
    pub present_today: usize,
    pub pending_approvals: usize,
    /// Events scheduled for today.
    pub upcoming_events: usize,
}
