use contracts::system::auth::{AdminProfile, LoginRequest, LoginResponse, UpdateAdminProfile};

use crate::shared::http::{self, ApiError, Auth};

/// Login with email and password
pub async fn login(email: String, password: String) -> Result<LoginResponse, ApiError> {
    let request = LoginRequest { email, password };
    http::post_json("admin/login", &request, Auth::Public).await
}

/// Profile of the staff member the stored token belongs to
pub async fn get_current_admin() -> Result<AdminProfile, ApiError> {
    http::get_json("admin/me", Auth::Staff).await
}

pub async fn update_current_admin(update: &UpdateAdminProfile) -> Result<AdminProfile, ApiError> {
    http::put_json("admin/me", update, Auth::Staff).await
}
