use contracts::domain::messages::MessageDto;

use crate::shared::http::{self, ApiError, Auth};

pub async fn fetch_messages() -> Result<Vec<MessageDto>, ApiError> {
    http::get_json("messages", Auth::Staff).await
}

pub async fn delete_message(id: i64) -> Result<(), ApiError> {
    http::delete(&format!("messages/{}", id), Auth::Staff).await
}
