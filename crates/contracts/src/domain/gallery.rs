use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GalleryItem {
    pub id: i64,
    pub title: String,
    pub image_url: String,
    #[serde(default)]
    pub created_at: Option<String>,
}
