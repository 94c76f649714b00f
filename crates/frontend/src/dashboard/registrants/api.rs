use contracts::domain::registration::{PaymentStatus, Registrant, UpdateRegistrant};

use crate::shared::http::{self, ApiError, Auth};

/// Fetch every registrant
pub async fn fetch_registrants() -> Result<Vec<Registrant>, ApiError> {
    http::get_json("users", Auth::Staff).await
}

/// Look a registrant up by the phone given at registration
pub async fn fetch_by_phone(phone: &str) -> Result<Registrant, ApiError> {
    let path = format!("users/phone/{}", urlencoding::encode(phone.trim()));
    http::get_json(&path, Auth::Staff).await
}

/// Mark a registrant paid or unpaid
pub async fn update_payment_status(id: i64, status: PaymentStatus) -> Result<(), ApiError> {
    let body = UpdateRegistrant {
        payment_status: status,
    };
    http::put_json_no_content(&format!("users/{}", id), &body, Auth::Staff).await
}
