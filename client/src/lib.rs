mod raw;

pub use raw::{call, Request};

pub use vis_portal_shared::account::Role;
pub use vis_portal_shared::attendance::AttendanceStatus;
pub use vis_portal_shared::student::StudentStatus;

/// A connection to one portal backend.
pub struct Context {
    /// Base URL of the backend, without a trailing slash.
    pub url_prefix: String,
    pub req_client: reqwest::Client,
}

/// Identity the external auth layer asserts for this caller, forwarded
/// as headers on every authenticated request.
#[derive(Debug, Clone, Default)]
pub struct Identity {
    pub user_id: String,
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}
