use serde::{Deserialize, Serialize};

/// The caller's identity merged with its resolved role and, when one of the
/// companion tables matches, the corresponding profile record.
#[derive(Serialize, Deserialize, Debug)]
pub struct AuthUserResult {
    #[serde(flatten)]
    pub user: super::User,
    pub role: super::Role,
    pub profile: Option<Profile>,
}

#[derive(Serialize, Deserialize, Debug)]
#[serde(untagged)]
pub enum Profile {
    Admin(crate::admin::Admin),
    Student(crate::student::Student),
}
