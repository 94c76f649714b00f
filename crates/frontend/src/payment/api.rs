use async_trait::async_trait;
use contracts::domain::payments::{
    PaymentStatusUpdate, SubscriptionRequest, SubscriptionResponse, TransferConfirmation,
    TransferConfirmationResponse, TransferInstructions, TransferRecord, TransferRequest,
};

use super::card::PaymentApi;
use super::transfer::TransferApi;
use crate::shared::http::{self, ApiError, Auth};

/// Backend payment endpoints over HTTP
pub struct HttpPaymentApi;

#[async_trait(?Send)]
impl PaymentApi for HttpPaymentApi {
    async fn subscribe(
        &self,
        request: &SubscriptionRequest,
    ) -> Result<SubscriptionResponse, ApiError> {
        http::post_json("payments/subscribe", request, Auth::Public).await
    }

    async fn update_status(&self, update: &PaymentStatusUpdate) -> Result<(), ApiError> {
        http::put_json_no_content("payments/status", update, Auth::Public).await
    }
}

/// Backend e-transfer endpoints over HTTP
pub struct HttpTransferApi;

#[async_trait(?Send)]
impl TransferApi for HttpTransferApi {
    async fn initiate(&self, request: &TransferRequest) -> Result<TransferRecord, ApiError> {
        http::post_json("transfer", request, Auth::Public).await
    }

    async fn instructions(
        &self,
        record: &TransferRecord,
    ) -> Result<TransferInstructions, ApiError> {
        let path = format!(
            "transfer/{}?token={}",
            urlencoding::encode(&record.id),
            urlencoding::encode(&record.token)
        );
        http::get_json(&path, Auth::Public).await
    }

    async fn confirm(
        &self,
        record: &TransferRecord,
    ) -> Result<TransferConfirmationResponse, ApiError> {
        let path = format!("transfer/{}/confirm", urlencoding::encode(&record.id));
        let body = TransferConfirmation {
            token: record.token.clone(),
        };
        http::post_json(&path, &body, Auth::Public).await
    }
}
