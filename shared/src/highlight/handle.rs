use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug)]
pub struct HighlightDescriptor {
    pub date: NaiveDate,
    pub title: String,
    pub description: String,
}

/// Partial update; absent fields keep their value.
#[derive(Serialize, Deserialize, Debug, Default)]
pub struct EditHighlightDescriptor {
    #[serde(default)]
    pub date: Option<NaiveDate>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}
