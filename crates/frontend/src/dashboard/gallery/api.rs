use contracts::domain::gallery::GalleryItem;
use web_sys::File;

use crate::dashboard::upload::build_form;
use crate::shared::http::{self, ApiError, Auth};

pub async fn fetch_gallery() -> Result<Vec<GalleryItem>, ApiError> {
    http::get_json("gallery", Auth::Staff).await
}

pub async fn upload_image(title: &str, image: &File) -> Result<GalleryItem, ApiError> {
    let form = build_form(&[("title", title.trim())], image)?;
    http::post_form("gallery", form, Auth::Staff).await
}

pub async fn delete_image(id: i64) -> Result<(), ApiError> {
    http::delete(&format!("gallery/{}", id), Auth::Staff).await
}
