use super::{Step, StepForm};
use crate::registration::draft::RegistrationDraft;
use crate::shared::validation::{FieldErrors, Format, ValidationRules};

/// Guardian, home address and emergency contact
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ContactForm {
    pub guardian_name: String,
    pub phone: String,
    pub email: String,
    pub address: String,
    pub city: String,
    pub province: String,
    pub postal_code: String,
    pub emergency_contact_name: String,
    pub emergency_contact_phone: String,
}

impl StepForm for ContactForm {
    const STEP: Step = Step::Contact;

    fn from_draft(draft: &RegistrationDraft) -> Self {
        draft.contact().clone()
    }

    fn validate(&self) -> Result<(), FieldErrors> {
        let required = ValidationRules::required();
        let phone = required.with_format(Format::Phone);

        let mut errors = FieldErrors::new();
        errors.check("guardian_name", "Guardian name", &self.guardian_name, required);
        errors.check("phone", "Phone", &self.phone, phone);
        errors.check("email", "Email", &self.email, required.with_format(Format::Email));
        errors.check("address", "Address", &self.address, required);
        errors.check("city", "City", &self.city, required);
        errors.check("province", "Province", &self.province, required);
        errors.check(
            "postal_code",
            "Postal code",
            &self.postal_code,
            required.with_max_length(10),
        );
        errors.check(
            "emergency_contact_name",
            "Emergency contact",
            &self.emergency_contact_name,
            required,
        );
        errors.check(
            "emergency_contact_phone",
            "Emergency phone",
            &self.emergency_contact_phone,
            phone,
        );
        errors.into_result()
    }

    fn write_to(self, draft: &mut RegistrationDraft) {
        draft.set_contact(self);
    }
}
