//! Card checkout: tokenize, subscribe, confirm, record

use async_trait::async_trait;
use contracts::domain::payments::{
    BillingDetails, PaymentStatusUpdate, RegistrantRef, SubscriptionRequest, SubscriptionResponse,
};
use contracts::enums::CanonicalPlan;

use super::outcome::{
    classify_provider_error, next_after_subscription, outcome_from_intent, PaymentOutcome,
    ProviderError, ProviderIntent, SubscriptionNext,
};
use crate::shared::http::ApiError;

/// Status written to the registrant once the charge went through
pub const PAID_STATUS: &str = "paid";

/// The hosted card widget
#[async_trait(?Send)]
pub trait PaymentWidget {
    /// Tokenize the card currently entered in the widget
    async fn create_payment_method(&self, billing: &BillingDetails)
        -> Result<String, ProviderError>;

    /// Run the provider's confirmation (3-D Secure and the like)
    async fn confirm_payment(&self, client_secret: &str) -> Result<ProviderIntent, ProviderError>;
}

/// Backend payment endpoints
#[async_trait(?Send)]
pub trait PaymentApi {
    async fn subscribe(&self, request: &SubscriptionRequest)
        -> Result<SubscriptionResponse, ApiError>;

    async fn update_status(&self, update: &PaymentStatusUpdate) -> Result<(), ApiError>;
}

#[derive(Debug, Clone, PartialEq)]
pub struct CardPayment {
    pub plan: CanonicalPlan,
    pub registrant: RegistrantRef,
    pub billing: BillingDetails,
    pub customer_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CardPaymentResult {
    pub outcome: PaymentOutcome,
    /// Provider customer created or reused by the backend
    pub customer_id: Option<String>,
}

pub struct CardCheckout<'a> {
    widget: &'a dyn PaymentWidget,
    api: &'a dyn PaymentApi,
}

impl<'a> CardCheckout<'a> {
    pub fn new(widget: &'a dyn PaymentWidget, api: &'a dyn PaymentApi) -> Self {
        Self { widget, api }
    }

    /// One pass through the card flow. Never retries.
    pub async fn pay(&self, payment: &CardPayment) -> CardPaymentResult {
        let payment_method_id = match self.widget.create_payment_method(&payment.billing).await {
            Ok(id) => id,
            Err(e) => {
                log::warn!("Payment method creation failed: {:?}", e);
                return CardPaymentResult {
                    outcome: classify_provider_error(&e),
                    customer_id: payment.customer_id.clone(),
                };
            }
        };

        let request = SubscriptionRequest {
            plan: payment.plan.code().to_string(),
            payment_method_id,
            registrant: payment.registrant.clone(),
            customer_id: payment.customer_id.clone(),
        };

        let response = match self.api.subscribe(&request).await {
            Ok(response) => response,
            Err(e) => {
                log::error!("Subscription request failed: {}", e);
                return CardPaymentResult {
                    outcome: PaymentOutcome::TransientError {
                        message: e.user_message(),
                    },
                    customer_id: payment.customer_id.clone(),
                };
            }
        };
        let customer_id = response
            .customer_id
            .clone()
            .or_else(|| payment.customer_id.clone());

        let outcome = match next_after_subscription(&response) {
            SubscriptionNext::Done(outcome) => outcome,
            SubscriptionNext::Confirm { client_secret } => {
                match self.widget.confirm_payment(&client_secret).await {
                    Ok(intent) => outcome_from_intent(&intent),
                    Err(e) => {
                        log::warn!("Payment confirmation failed: {:?}", e);
                        classify_provider_error(&e)
                    }
                }
            }
        };

        CardPaymentResult {
            outcome: record_outcome(self.api, &payment.registrant, outcome).await,
            customer_id,
        }
    }
}

/// Mark the registrant paid when `outcome` is a success.
///
/// Also used for payments the provider confirmed off-page and reported
/// through the return URL.
pub async fn record_outcome(
    api: &dyn PaymentApi,
    registrant: &RegistrantRef,
    outcome: PaymentOutcome,
) -> PaymentOutcome {
    let PaymentOutcome::Success { payment_intent_id } = &outcome else {
        return outcome;
    };

    let update = PaymentStatusUpdate {
        registrant: registrant.clone(),
        status: PAID_STATUS.to_string(),
        payment_intent_id: payment_intent_id.clone(),
    };
    match api.update_status(&update).await {
        Ok(()) => {
            log::info!("Payment recorded for registrant {:?}", registrant.user_id);
            outcome
        }
        Err(e) => {
            log::error!("Charge succeeded but status update failed: {}", e);
            PaymentOutcome::TransientError {
                message: "Your payment went through but we could not update your registration. Please contact us with your receipt.".to_string(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use std::cell::RefCell;

    struct FakeWidget {
        method: Result<String, ProviderError>,
        confirm: Result<ProviderIntent, ProviderError>,
        confirmed_with: RefCell<Option<String>>,
    }

    impl FakeWidget {
        fn ok() -> Self {
            Self {
                method: Ok("pm_1".to_string()),
                confirm: Ok(ProviderIntent {
                    id: Some("pi_1".to_string()),
                    status: "succeeded".to_string(),
                }),
                confirmed_with: RefCell::new(None),
            }
        }
    }

    #[async_trait(?Send)]
    impl PaymentWidget for FakeWidget {
        async fn create_payment_method(
            &self,
            _billing: &BillingDetails,
        ) -> Result<String, ProviderError> {
            self.method.clone()
        }

        async fn confirm_payment(
            &self,
            client_secret: &str,
        ) -> Result<ProviderIntent, ProviderError> {
            *self.confirmed_with.borrow_mut() = Some(client_secret.to_string());
            self.confirm.clone()
        }
    }

    struct FakeApi {
        subscribe: Result<SubscriptionResponse, ApiError>,
        update: Result<(), ApiError>,
        subscribed: RefCell<Vec<SubscriptionRequest>>,
        updates: RefCell<Vec<PaymentStatusUpdate>>,
    }

    impl FakeApi {
        fn answering(status: &str, client_secret: Option<&str>) -> Self {
            Self {
                subscribe: Ok(SubscriptionResponse {
                    status: status.to_string(),
                    client_secret: client_secret.map(str::to_string),
                    customer_id: Some("cus_1".to_string()),
                    subscription_id: Some("sub_1".to_string()),
                    error: None,
                }),
                update: Ok(()),
                subscribed: RefCell::default(),
                updates: RefCell::default(),
            }
        }
    }

    #[async_trait(?Send)]
    impl PaymentApi for FakeApi {
        async fn subscribe(
            &self,
            request: &SubscriptionRequest,
        ) -> Result<SubscriptionResponse, ApiError> {
            self.subscribed.borrow_mut().push(request.clone());
            self.subscribe.clone()
        }

        async fn update_status(&self, update: &PaymentStatusUpdate) -> Result<(), ApiError> {
            self.updates.borrow_mut().push(update.clone());
            self.update.clone()
        }
    }

    fn payment() -> CardPayment {
        CardPayment {
            plan: CanonicalPlan::U9U10,
            registrant: RegistrantRef {
                user_id: Some(42),
                phone: "6045550100".to_string(),
            },
            billing: BillingDetails {
                name: "Li Chen".to_string(),
                email: "li@example.com".to_string(),
                phone: "6045550100".to_string(),
                postal_code: None,
            },
            customer_id: None,
        }
    }

    #[test]
    fn test_immediate_success_marks_paid() {
        let widget = FakeWidget::ok();
        let api = FakeApi::answering("succeeded", None);
        let result = block_on(CardCheckout::new(&widget, &api).pay(&payment()));

        assert!(result.outcome.is_success());
        assert_eq!(result.customer_id.as_deref(), Some("cus_1"));
        assert_eq!(api.subscribed.borrow()[0].plan, "U9_U10");
        assert_eq!(api.subscribed.borrow()[0].payment_method_id, "pm_1");
        assert_eq!(api.updates.borrow().len(), 1);
        assert_eq!(api.updates.borrow()[0].status, PAID_STATUS);
        assert!(widget.confirmed_with.borrow().is_none());
    }

    #[test]
    fn test_confirmation_uses_client_secret() {
        let widget = FakeWidget::ok();
        let api = FakeApi::answering("requires_action", Some("pi_1_secret_x"));
        let result = block_on(CardCheckout::new(&widget, &api).pay(&payment()));

        assert_eq!(
            widget.confirmed_with.borrow().as_deref(),
            Some("pi_1_secret_x")
        );
        assert_eq!(
            result.outcome,
            PaymentOutcome::Success {
                payment_intent_id: Some("pi_1".to_string())
            }
        );
        assert_eq!(
            api.updates.borrow()[0].payment_intent_id.as_deref(),
            Some("pi_1")
        );
    }

    #[test]
    fn test_processing_confirmation_does_not_mark_paid() {
        let widget = FakeWidget {
            confirm: Ok(ProviderIntent {
                id: Some("pi_1".to_string()),
                status: "processing".to_string(),
            }),
            ..FakeWidget::ok()
        };
        let api = FakeApi::answering("requires_confirmation", Some("secret"));
        let result = block_on(CardCheckout::new(&widget, &api).pay(&payment()));

        assert_eq!(result.outcome, PaymentOutcome::Processing);
        assert!(api.updates.borrow().is_empty());
    }

    #[test]
    fn test_tokenization_failure_skips_backend() {
        let widget = FakeWidget {
            method: Err(ProviderError {
                error_type: Some("validation_error".to_string()),
                message: Some("Your card number is incomplete.".to_string()),
                ..Default::default()
            }),
            ..FakeWidget::ok()
        };
        let api = FakeApi::answering("succeeded", None);
        let result = block_on(CardCheckout::new(&widget, &api).pay(&payment()));

        assert_eq!(
            result.outcome,
            PaymentOutcome::Declined {
                message: "Your card number is incomplete.".to_string()
            }
        );
        assert!(api.subscribed.borrow().is_empty());
    }

    #[test]
    fn test_network_failure_halts_without_retry() {
        let widget = FakeWidget::ok();
        let api = FakeApi {
            subscribe: Err(ApiError::Network("offline".to_string())),
            ..FakeApi::answering("succeeded", None)
        };
        let result = block_on(CardCheckout::new(&widget, &api).pay(&payment()));

        assert!(matches!(result.outcome, PaymentOutcome::TransientError { .. }));
        assert_eq!(api.subscribed.borrow().len(), 1);
        assert!(api.updates.borrow().is_empty());
    }

    #[test]
    fn test_explicit_backend_error_is_surfaced() {
        let widget = FakeWidget::ok();
        let api = FakeApi {
            subscribe: Ok(SubscriptionResponse {
                status: "error".to_string(),
                client_secret: None,
                customer_id: None,
                subscription_id: None,
                error: Some("Your card was declined.".to_string()),
            }),
            ..FakeApi::answering("succeeded", None)
        };
        let result = block_on(CardCheckout::new(&widget, &api).pay(&payment()));

        assert_eq!(
            result.outcome,
            PaymentOutcome::Declined {
                message: "Your card was declined.".to_string()
            }
        );
    }

    #[test]
    fn test_already_succeeded_intent_counts_as_success() {
        let widget = FakeWidget {
            confirm: Err(ProviderError {
                code: Some("payment_intent_unexpected_state".to_string()),
                error_type: Some("invalid_request_error".to_string()),
                payment_intent: Some(ProviderIntent {
                    id: Some("pi_7".to_string()),
                    status: "succeeded".to_string(),
                }),
                ..Default::default()
            }),
            ..FakeWidget::ok()
        };
        let api = FakeApi::answering("requires_action", Some("secret"));
        let result = block_on(CardCheckout::new(&widget, &api).pay(&payment()));

        assert!(result.outcome.is_success());
        assert_eq!(api.updates.borrow().len(), 1);
    }

    #[test]
    fn test_redirect_success_is_recorded_like_in_page_success() {
        let api = FakeApi::answering("succeeded", None);
        let outcome = block_on(record_outcome(
            &api,
            &payment().registrant,
            PaymentOutcome::Success {
                payment_intent_id: Some("pi_r".to_string()),
            },
        ));

        assert!(outcome.is_success());
        assert_eq!(
            api.updates.borrow()[0].payment_intent_id.as_deref(),
            Some("pi_r")
        );
    }

    #[test]
    fn test_failed_status_update_is_reported() {
        let widget = FakeWidget::ok();
        let api = FakeApi {
            update: Err(ApiError::Network("offline".to_string())),
            ..FakeApi::answering("succeeded", None)
        };
        let result = block_on(CardCheckout::new(&widget, &api).pay(&payment()));
        assert!(matches!(result.outcome, PaymentOutcome::TransientError { .. }));
    }
}
