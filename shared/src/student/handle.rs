use serde::{Deserialize, Serialize};

/// Public self-registration. The created record is always pending review
/// and falls back to the default batch.
#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct RegisterStudentDescriptor {
    pub name: String,
    pub email: lettre::Address,
    pub reg_no: String,
    #[serde(default)]
    pub batch: Option<String>,
}

/// Admin-side creation. The created record is always approved.
#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct MakeStudentDescriptor {
    #[serde(default)]
    pub user_id: Option<String>,
    pub name: String,
    pub email: lettre::Address,
    pub reg_no: String,
    #[serde(default)]
    pub batch: Option<String>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct SetStudentStatusDescriptor {
    pub status: super::StudentStatus,
}

/// Partial profile update; absent fields keep their value.
#[derive(Serialize, Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct EditStudentDescriptor {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<lettre::Address>,
    #[serde(default)]
    pub reg_no: Option<String>,
    #[serde(default)]
    pub batch: Option<String>,
}
