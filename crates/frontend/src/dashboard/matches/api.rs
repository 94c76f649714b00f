use contracts::domain::matches::{MatchDto, MatchInput};

use crate::shared::http::{self, ApiError, Auth};

pub async fn fetch_matches() -> Result<Vec<MatchDto>, ApiError> {
    http::get_json("matches", Auth::Staff).await
}

pub async fn create_match(input: &MatchInput) -> Result<MatchDto, ApiError> {
    http::post_json("matches", input, Auth::Staff).await
}

pub async fn update_match(id: i64, input: &MatchInput) -> Result<MatchDto, ApiError> {
    http::put_json(&format!("matches/{}", id), input, Auth::Staff).await
}

pub async fn delete_match(id: i64) -> Result<(), ApiError> {
    http::delete(&format!("matches/{}", id), Auth::Staff).await
}
