//! Interac e-transfer: initiate, show instructions, payer confirms
//!
//! The backend verifies the deposit out of band, so the flow never reaches a
//! paid state on its own; it ends at [`TransferState::PendingVerification`].

use async_trait::async_trait;
use contracts::domain::payments::{
    RegistrantRef, TransferConfirmationResponse, TransferInstructions, TransferRecord,
    TransferRequest,
};
use contracts::enums::CanonicalPlan;
use thiserror::Error;

use crate::shared::http::ApiError;

#[async_trait(?Send)]
pub trait TransferApi {
    async fn initiate(&self, request: &TransferRequest) -> Result<TransferRecord, ApiError>;

    async fn instructions(&self, record: &TransferRecord)
        -> Result<TransferInstructions, ApiError>;

    async fn confirm(&self, record: &TransferRecord)
        -> Result<TransferConfirmationResponse, ApiError>;
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum TransferState {
    #[default]
    NotStarted,
    /// Backend created the pending transfer
    Initiated(TransferRecord),
    /// Payer is looking at the bank instructions
    AwaitingTransfer {
        record: TransferRecord,
        instructions: TransferInstructions,
    },
    /// Payer says the money was sent; staff will verify
    PendingVerification {
        record: TransferRecord,
        message: Option<String>,
    },
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum TransferError {
    #[error("This transfer has already been submitted for verification")]
    AlreadyPending,
    #[error("{}", .0.user_message())]
    Api(#[from] ApiError),
}

impl TransferState {
    pub fn record(&self) -> Option<&TransferRecord> {
        match self {
            TransferState::NotStarted => None,
            TransferState::Initiated(record)
            | TransferState::AwaitingTransfer { record, .. }
            | TransferState::PendingVerification { record, .. } => Some(record),
        }
    }

    pub fn instructions(&self) -> Option<&TransferInstructions> {
        match self {
            TransferState::AwaitingTransfer { instructions, .. } => Some(instructions),
            _ => None,
        }
    }

    pub fn is_pending_verification(&self) -> bool {
        matches!(self, TransferState::PendingVerification { .. })
    }

    /// Perform the single round trip that leads out of this state.
    ///
    /// On error the caller keeps the current state; nothing is retried.
    pub async fn advance(
        &self,
        api: &dyn TransferApi,
        plan: CanonicalPlan,
        registrant: &RegistrantRef,
    ) -> Result<TransferState, TransferError> {
        match self {
            TransferState::NotStarted => {
                let request = TransferRequest {
                    plan: plan.code().to_string(),
                    registrant: registrant.clone(),
                };
                let record = api.initiate(&request).await?;
                log::info!("E-transfer {} initiated", record.id);
                Ok(TransferState::Initiated(record))
            }
            TransferState::Initiated(record) => {
                let instructions = api.instructions(record).await?;
                Ok(TransferState::AwaitingTransfer {
                    record: record.clone(),
                    instructions,
                })
            }
            TransferState::AwaitingTransfer { record, .. } => {
                let response = api.confirm(record).await?;
                log::info!(
                    "E-transfer {} marked sent, status {}",
                    record.id,
                    response.status
                );
                Ok(TransferState::PendingVerification {
                    record: record.clone(),
                    message: response.message,
                })
            }
            TransferState::PendingVerification { .. } => Err(TransferError::AlreadyPending),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use std::cell::RefCell;

    #[derive(Default)]
    struct FakeTransferApi {
        calls: RefCell<Vec<String>>,
        fail_instructions: bool,
    }

    fn record() -> TransferRecord {
        TransferRecord {
            id: "tr_5".to_string(),
            token: "tok".to_string(),
        }
    }

    #[async_trait(?Send)]
    impl TransferApi for FakeTransferApi {
        async fn initiate(&self, request: &TransferRequest) -> Result<TransferRecord, ApiError> {
            self.calls
                .borrow_mut()
                .push(format!("initiate {}", request.plan));
            Ok(record())
        }

        async fn instructions(
            &self,
            record: &TransferRecord,
        ) -> Result<TransferInstructions, ApiError> {
            self.calls
                .borrow_mut()
                .push(format!("instructions {}", record.id));
            if self.fail_instructions {
                return Err(ApiError::Network("offline".to_string()));
            }
            Ok(TransferInstructions {
                recipient_email: "pay@academy.example".to_string(),
                recipient_name: "Academy".to_string(),
                amount: "$90.00".to_string(),
                reference: "REG-42".to_string(),
                security_question: None,
                security_answer: None,
            })
        }

        async fn confirm(
            &self,
            record: &TransferRecord,
        ) -> Result<TransferConfirmationResponse, ApiError> {
            self.calls
                .borrow_mut()
                .push(format!("confirm {}", record.id));
            Ok(TransferConfirmationResponse {
                status: "pending_verification".to_string(),
                message: Some("We will confirm within 2 business days".to_string()),
            })
        }
    }

    fn registrant() -> RegistrantRef {
        RegistrantRef {
            user_id: Some(42),
            phone: "6045550100".to_string(),
        }
    }

    #[test]
    fn test_three_round_trips_end_pending() {
        let api = FakeTransferApi::default();
        let mut state = TransferState::default();
        for _ in 0..3 {
            state = block_on(state.advance(&api, CanonicalPlan::U11U12, &registrant())).unwrap();
        }

        assert!(state.is_pending_verification());
        assert_eq!(state.record(), Some(&record()));
        assert_eq!(
            *api.calls.borrow(),
            vec!["initiate U11_U12", "instructions tr_5", "confirm tr_5"]
        );
    }

    #[test]
    fn test_pending_is_final() {
        let api = FakeTransferApi::default();
        let state = TransferState::PendingVerification {
            record: record(),
            message: None,
        };
        assert_eq!(
            block_on(state.advance(&api, CanonicalPlan::U5U8, &registrant())),
            Err(TransferError::AlreadyPending)
        );
        assert!(api.calls.borrow().is_empty());
    }

    #[test]
    fn test_failure_leaves_state_for_caller() {
        let api = FakeTransferApi {
            fail_instructions: true,
            ..Default::default()
        };
        let state = TransferState::Initiated(record());
        let result = block_on(state.advance(&api, CanonicalPlan::U5U8, &registrant()));

        assert!(matches!(result, Err(TransferError::Api(ApiError::Network(_)))));
        assert_eq!(state, TransferState::Initiated(record()));
        assert_eq!(api.calls.borrow().len(), 1);
    }
}
