use super::{Step, StepForm};
use crate::registration::draft::RegistrationDraft;
use crate::shared::validation::{FieldErrors, Format, ValidationRules};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct IdentityForm {
    pub full_name: String,
    /// `YYYY-MM-DD`, as produced by a date input
    pub date_of_birth: String,
    pub gender: String,
}

impl StepForm for IdentityForm {
    const STEP: Step = Step::Identity;

    fn from_draft(draft: &RegistrationDraft) -> Self {
        draft.identity().clone()
    }

    fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        errors.check(
            "full_name",
            "Full name",
            &self.full_name,
            ValidationRules::required().with_min_length(2).with_max_length(100),
        );
        errors.check(
            "date_of_birth",
            "Date of birth",
            &self.date_of_birth,
            ValidationRules::required().with_format(Format::PastDate),
        );
        errors.check("gender", "Gender", &self.gender, ValidationRules::required());
        errors.into_result()
    }

    fn write_to(self, draft: &mut RegistrationDraft) {
        draft.set_identity(self);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_date_of_birth() {
        let form = IdentityForm {
            full_name: "Maya Chen".to_string(),
            date_of_birth: String::new(),
            gender: "female".to_string(),
        };
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get("date_of_birth"), Some("Date of birth is required"));
    }

    #[test]
    fn test_valid_identity() {
        let form = IdentityForm {
            full_name: "Maya Chen".to_string(),
            date_of_birth: "2015-03-09".to_string(),
            gender: "female".to_string(),
        };
        assert!(form.validate().is_ok());
    }
}
