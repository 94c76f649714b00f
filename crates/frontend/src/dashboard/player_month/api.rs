use contracts::domain::player_month::PlayerOfMonth;
use web_sys::File;

use super::form::PlayerMonthForm;
use crate::dashboard::upload::build_form;
use crate::shared::http::{self, ApiError, Auth};

pub async fn fetch_entries() -> Result<Vec<PlayerOfMonth>, ApiError> {
    http::get_json("player_month", Auth::Staff).await
}

pub async fn upload_entry(form: &PlayerMonthForm, image: &File) -> Result<PlayerOfMonth, ApiError> {
    let body = build_form(
        &[
            ("name", form.name.trim()),
            ("month", form.month.trim()),
            ("description", form.description.trim()),
        ],
        image,
    )?;
    http::post_form("player_month", body, Auth::Staff).await
}

pub async fn delete_entry(id: i64) -> Result<(), ApiError> {
    http::delete(&format!("player_month/{}", id), Auth::Staff).await
}
