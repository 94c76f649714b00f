use async_trait::async_trait;
use contracts::domain::registration::{RegistrationPayload, RegistrationResponse};

use super::submission::RegistrationApi;
use crate::shared::http::{self, ApiError, Auth};

/// Registration endpoints of the academy backend
pub struct HttpRegistrationApi;

#[async_trait(?Send)]
impl RegistrationApi for HttpRegistrationApi {
    async fn create_registration(
        &self,
        payload: &RegistrationPayload,
    ) -> Result<RegistrationResponse, ApiError> {
        http::post_json("users", payload, Auth::Public).await
    }
}
