use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub admin: AdminProfile,
}

/// Staff account as returned by `GET admin/me`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdminProfile {
    pub id: i64,
    pub name: String,
    pub email: String,
}

/// Body of `PUT admin/me`; `password` is only sent when it changes
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct UpdateAdminProfile {
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}
