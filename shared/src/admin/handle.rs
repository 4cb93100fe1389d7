use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct MakeAdminDescriptor {
    #[serde(default)]
    pub user_id: Option<String>,
    pub name: String,
    pub email: lettre::Address,
    #[serde(default)]
    pub role: Option<super::AdminRole>,
}
