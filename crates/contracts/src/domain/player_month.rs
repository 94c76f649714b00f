use serde::{Deserialize, Serialize};

/// Player-of-the-month entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerOfMonth {
    pub id: i64,
    pub name: String,
    /// `YYYY-MM`
    pub month: String,
    #[serde(default)]
    pub description: Option<String>,
    pub image_url: String,
}
