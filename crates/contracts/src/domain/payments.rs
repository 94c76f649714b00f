use serde::{Deserialize, Serialize};

/// Who a payment belongs to. The backend resolves by `user_id` when present
/// and falls back to `phone` for registrations made before ids were stored.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RegistrantRef {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<i64>,
    pub phone: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BillingDetails {
    pub name: String,
    pub email: String,
    pub phone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
}

/// Body of `POST payments/subscribe`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubscriptionRequest {
    pub plan: String,
    pub payment_method_id: String,
    #[serde(flatten)]
    pub registrant: RegistrantRef,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<String>,
}

/// Backend answer to a subscription attempt
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubscriptionResponse {
    /// `succeeded`, `requires_action`, `requires_confirmation`, `processing` or `error`
    pub status: String,
    #[serde(default)]
    pub client_secret: Option<String>,
    #[serde(default)]
    pub customer_id: Option<String>,
    #[serde(default)]
    pub subscription_id: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Body of `PUT payments/status`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentStatusUpdate {
    #[serde(flatten)]
    pub registrant: RegistrantRef,
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_intent_id: Option<String>,
}

/// Body of `POST transfer`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransferRequest {
    pub plan: String,
    #[serde(flatten)]
    pub registrant: RegistrantRef,
}

/// Pending e-transfer handle
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferRecord {
    pub id: String,
    pub token: String,
}

/// Bank instructions shown to the payer for a pending transfer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransferInstructions {
    pub recipient_email: String,
    pub recipient_name: String,
    pub amount: String,
    pub reference: String,
    #[serde(default)]
    pub security_question: Option<String>,
    #[serde(default)]
    pub security_answer: Option<String>,
}

/// Body of `POST transfer/{id}/confirm`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferConfirmation {
    pub token: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransferConfirmationResponse {
    pub status: String,
    #[serde(default)]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subscription_request_flattens_registrant() {
        let req = SubscriptionRequest {
            plan: "U9_U10".to_string(),
            payment_method_id: "pm_1".to_string(),
            registrant: RegistrantRef {
                user_id: Some(12),
                phone: "6045550100".to_string(),
            },
            customer_id: None,
        };
        let value = serde_json::to_value(&req).unwrap();
        assert_eq!(value["user_id"], 12);
        assert_eq!(value["phone"], "6045550100");
        assert!(value.get("customer_id").is_none());
    }

    #[test]
    fn test_subscription_response_defaults() {
        let resp: SubscriptionResponse =
            serde_json::from_str(r#"{"status": "succeeded"}"#).unwrap();
        assert_eq!(resp.status, "succeeded");
        assert!(resp.client_secret.is_none());
    }
}
