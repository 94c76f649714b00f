//! Provider statuses and errors → one tagged result
//!
//! The card provider reports progress through intent statuses and error
//! objects with string codes. Everything downstream works with
//! [`PaymentOutcome`] only.

use contracts::domain::payments::SubscriptionResponse;
use serde::Deserialize;

/// Terminal (for this page) result of a card payment attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaymentOutcome {
    Success { payment_intent_id: Option<String> },
    /// Accepted by the provider, settlement still pending
    Processing,
    /// The provider needs something the page cannot do in-line
    RequiresAction { message: String },
    /// Card refused or invalid details; user must change something
    Declined { message: String },
    /// Network or provider hiccup; the user may try again
    TransientError { message: String },
}

impl PaymentOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, PaymentOutcome::Success { .. })
    }

    pub fn user_message(&self) -> String {
        match self {
            PaymentOutcome::Success { .. } => "Payment complete. Welcome to the academy!".to_string(),
            PaymentOutcome::Processing => {
                "Your payment is processing. We will email you once it clears.".to_string()
            }
            PaymentOutcome::RequiresAction { message }
            | PaymentOutcome::Declined { message }
            | PaymentOutcome::TransientError { message } => message.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IntentStatus {
    Succeeded,
    Processing,
    RequiresAction,
    RequiresConfirmation,
    RequiresPaymentMethod,
    Canceled,
    Other(String),
}

impl IntentStatus {
    pub fn parse(status: &str) -> Self {
        match status {
            "succeeded" => IntentStatus::Succeeded,
            "processing" => IntentStatus::Processing,
            "requires_action" => IntentStatus::RequiresAction,
            "requires_confirmation" => IntentStatus::RequiresConfirmation,
            "requires_payment_method" => IntentStatus::RequiresPaymentMethod,
            "canceled" => IntentStatus::Canceled,
            other => IntentStatus::Other(other.to_string()),
        }
    }
}

/// Payment intent summary as the provider returns it
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct ProviderIntent {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub status: String,
}

/// Error object as the provider returns it
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct ProviderError {
    #[serde(default)]
    pub code: Option<String>,
    #[serde(rename = "type", default)]
    pub error_type: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub decline_code: Option<String>,
    #[serde(default)]
    pub payment_intent: Option<ProviderIntent>,
}

impl ProviderError {
    /// Error raised on our side of the binding (script missing, bad reply)
    pub fn local(message: impl Into<String>) -> Self {
        Self {
            error_type: Some("local_error".to_string()),
            message: Some(message.into()),
            ..Default::default()
        }
    }
}

const UNEXPECTED_STATE: &str = "payment_intent_unexpected_state";

pub fn outcome_from_intent(intent: &ProviderIntent) -> PaymentOutcome {
    match IntentStatus::parse(&intent.status) {
        IntentStatus::Succeeded => PaymentOutcome::Success {
            payment_intent_id: intent.id.clone(),
        },
        IntentStatus::Processing => PaymentOutcome::Processing,
        IntentStatus::RequiresAction | IntentStatus::RequiresConfirmation => {
            PaymentOutcome::RequiresAction {
                message: "Your bank needs you to authorize this payment. Please try again and complete the verification.".to_string(),
            }
        }
        IntentStatus::RequiresPaymentMethod => PaymentOutcome::Declined {
            message: "Your card was declined. Please try a different card.".to_string(),
        },
        IntentStatus::Canceled => PaymentOutcome::Declined {
            message: "The payment was canceled.".to_string(),
        },
        IntentStatus::Other(status) => PaymentOutcome::TransientError {
            message: format!("Unexpected payment status \"{}\". Please contact us.", status),
        },
    }
}

/// Classify a provider error.
///
/// An "unexpected state" error on an intent that has already succeeded
/// means an earlier confirmation went through; it is a success.
pub fn classify_provider_error(error: &ProviderError) -> PaymentOutcome {
    if error.code.as_deref() == Some(UNEXPECTED_STATE) {
        if let Some(intent) = &error.payment_intent {
            if IntentStatus::parse(&intent.status) == IntentStatus::Succeeded {
                return PaymentOutcome::Success {
                    payment_intent_id: intent.id.clone(),
                };
            }
        }
    }

    let message = || {
        error
            .message
            .clone()
            .unwrap_or_else(|| "Your payment could not be completed.".to_string())
    };

    match error.error_type.as_deref() {
        Some("card_error") => PaymentOutcome::Declined {
            message: error
                .decline_code
                .as_deref()
                .and_then(decline_message)
                .map(str::to_string)
                .unwrap_or_else(message),
        },
        Some("validation_error") | Some("invalid_request_error") => {
            PaymentOutcome::Declined { message: message() }
        }
        _ => PaymentOutcome::TransientError { message: message() },
    }
}

fn decline_message(decline_code: &str) -> Option<&'static str> {
    match decline_code {
        "insufficient_funds" => Some("Your card has insufficient funds."),
        "expired_card" => Some("Your card has expired."),
        "incorrect_cvc" => Some("Your card's security code is incorrect."),
        "lost_card" | "stolen_card" | "pickup_card" => {
            Some("Your card was declined. Please contact your bank.")
        }
        "generic_decline" | "do_not_honor" => {
            Some("Your card was declined. Please try a different card.")
        }
        _ => None,
    }
}

/// What the page must do after the backend answered a subscription request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubscriptionNext {
    Done(PaymentOutcome),
    /// Run the provider's confirmation with this secret
    Confirm { client_secret: String },
}

pub fn next_after_subscription(response: &SubscriptionResponse) -> SubscriptionNext {
    if let Some(error) = response.error.as_deref().filter(|e| !e.is_empty()) {
        return SubscriptionNext::Done(PaymentOutcome::Declined {
            message: error.to_string(),
        });
    }

    match (response.status.as_str(), response.client_secret.as_deref()) {
        ("succeeded" | "active", _) => SubscriptionNext::Done(PaymentOutcome::Success {
            payment_intent_id: None,
        }),
        ("processing", _) => SubscriptionNext::Done(PaymentOutcome::Processing),
        ("requires_action" | "requires_confirmation" | "incomplete", Some(secret))
            if !secret.is_empty() =>
        {
            SubscriptionNext::Confirm {
                client_secret: secret.to_string(),
            }
        }
        ("requires_payment_method", _) => SubscriptionNext::Done(PaymentOutcome::Declined {
            message: "Your card was declined. Please try a different card.".to_string(),
        }),
        (status, _) => SubscriptionNext::Done(PaymentOutcome::TransientError {
            message: format!("Unexpected subscription status \"{}\"", status),
        }),
    }
}
