//! Public (unauthenticated) reads and the contact form

use contracts::domain::gallery::GalleryItem;
use contracts::domain::matches::MatchDto;
use contracts::domain::messages::{MessageDto, NewMessage};
use contracts::domain::player_month::PlayerOfMonth;

use crate::shared::http::{self, ApiError, Auth};

pub async fn fetch_matches() -> Result<Vec<MatchDto>, ApiError> {
    http::get_json("matches", Auth::Public).await
}

pub async fn fetch_gallery() -> Result<Vec<GalleryItem>, ApiError> {
    http::get_json("gallery", Auth::Public).await
}

pub async fn fetch_player_month() -> Result<Vec<PlayerOfMonth>, ApiError> {
    http::get_json("player_month", Auth::Public).await
}

pub async fn send_message(message: &NewMessage) -> Result<MessageDto, ApiError> {
    http::post_json("messages", message, Auth::Public).await
}
