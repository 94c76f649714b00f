use serde::{Deserialize, Serialize};

/// File attached to a registration, carried inline as base64
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DocumentRef {
    pub file_name: String,
    pub content_type: String,
    pub data_base64: String,
}

impl DocumentRef {
    pub fn is_empty(&self) -> bool {
        self.data_base64.is_empty()
    }
}

/// Body of `POST users`: the whole draft flattened, plus the normalized plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegistrationPayload {
    pub full_name: String,
    pub date_of_birth: String,
    pub gender: String,

    pub guardian_name: String,
    pub phone: String,
    pub email: String,
    pub address: String,
    pub city: String,
    pub province: String,
    pub postal_code: String,
    pub emergency_contact_name: String,
    pub emergency_contact_phone: String,

    pub height_cm: f64,
    pub weight_kg: f64,
    pub jersey_size: String,
    pub shorts_size: String,
    pub sock_size: String,
    pub jacket_size: String,

    pub skill_level: String,
    pub position: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_position: Option<String>,

    pub available_day: String,
    pub available_time: String,

    pub medical_notes: String,
    pub comments: String,
    pub consent: bool,

    pub photo: DocumentRef,
    pub id_card: DocumentRef,

    /// Canonical plan key, e.g. `U13_U14`
    pub plan: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegistrationResponse {
    pub id: i64,
    #[serde(default)]
    pub message: Option<String>,
}

/// Registrant record as listed in the staff dashboard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Registrant {
    pub id: i64,
    pub full_name: String,
    #[serde(default)]
    pub date_of_birth: Option<String>,
    #[serde(default)]
    pub guardian_name: Option<String>,
    pub phone: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub plan: Option<String>,
    #[serde(default)]
    pub payment_status: PaymentStatus,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    #[default]
    Unpaid,
    Pending,
    Paid,
}

impl PaymentStatus {
    pub fn display_name(&self) -> &'static str {
        match self {
            PaymentStatus::Unpaid => "Unpaid",
            PaymentStatus::Pending => "Pending verification",
            PaymentStatus::Paid => "Paid",
        }
    }
}

/// Body of `PUT users/{id}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateRegistrant {
    pub payment_status: PaymentStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registrant_tolerates_sparse_rows() {
        let json = r#"{"id": 7, "full_name": "Sam Lee", "phone": "4165550100"}"#;
        let r: Registrant = serde_json::from_str(json).unwrap();
        assert_eq!(r.id, 7);
        assert_eq!(r.payment_status, PaymentStatus::Unpaid);
        assert!(r.email.is_none());
    }

    #[test]
    fn test_payment_status_wire_format() {
        let body = UpdateRegistrant {
            payment_status: PaymentStatus::Paid,
        };
        assert_eq!(
            serde_json::to_string(&body).unwrap(),
            r#"{"payment_status":"paid"}"#
        );
    }
}
