//! In-progress registration record
//!
//! One slice per wizard step. Setters replace a slice wholesale and never
//! validate; validation belongs to the step that owns the slice.

use super::steps::{
    AcknowledgmentForm, AdditionalInfoForm, AvailabilityForm, BackgroundForm, ContactForm,
    IdentityForm, PhysicalForm,
};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct RegistrationDraft {
    identity: IdentityForm,
    contact: ContactForm,
    physical: PhysicalForm,
    background: BackgroundForm,
    availability: AvailabilityForm,
    additional: AdditionalInfoForm,
    acknowledgment: AcknowledgmentForm,
    customer_id: Option<String>,
}

impl RegistrationDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn identity(&self) -> &IdentityForm {
        &self.identity
    }

    pub fn set_identity(&mut self, value: IdentityForm) {
        self.identity = value;
    }

    pub fn contact(&self) -> &ContactForm {
        &self.contact
    }

    pub fn set_contact(&mut self, value: ContactForm) {
        self.contact = value;
    }

    pub fn physical(&self) -> &PhysicalForm {
        &self.physical
    }

    pub fn set_physical(&mut self, value: PhysicalForm) {
        self.physical = value;
    }

    pub fn background(&self) -> &BackgroundForm {
        &self.background
    }

    pub fn set_background(&mut self, value: BackgroundForm) {
        self.background = value;
    }

    pub fn availability(&self) -> &AvailabilityForm {
        &self.availability
    }

    pub fn set_availability(&mut self, value: AvailabilityForm) {
        self.availability = value;
    }

    pub fn additional(&self) -> &AdditionalInfoForm {
        &self.additional
    }

    pub fn set_additional(&mut self, value: AdditionalInfoForm) {
        self.additional = value;
    }

    pub fn acknowledgment(&self) -> &AcknowledgmentForm {
        &self.acknowledgment
    }

    pub fn set_acknowledgment(&mut self, value: AcknowledgmentForm) {
        self.acknowledgment = value;
    }

    /// Payment-provider customer, known once a card payment has been attempted
    pub fn customer_id(&self) -> Option<&str> {
        self.customer_id.as_deref()
    }

    pub fn set_customer_id(&mut self, value: Option<String>) {
        self.customer_id = value;
    }

    /// Back to the all-empty state
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registration::fixtures;

    #[test]
    fn test_defaults_are_empty() {
        let draft = RegistrationDraft::new();
        assert!(draft.identity().full_name.is_empty());
        assert!(!draft.acknowledgment().consent);
        assert!(draft.additional().photo.is_none());
        assert_eq!(draft.customer_id(), None);
    }

    #[test]
    fn test_setter_replaces_whole_slice() {
        let mut draft = RegistrationDraft::new();
        draft.set_contact(fixtures::contact());
        draft.set_contact(ContactForm {
            city: "Ottawa".to_string(),
            ..Default::default()
        });
        assert_eq!(draft.contact().city, "Ottawa");
        assert!(draft.contact().phone.is_empty());
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut draft = fixtures::complete_draft();
        draft.set_customer_id(Some("cus_1".to_string()));
        draft.reset();
        assert_eq!(draft, RegistrationDraft::default());
    }
}
