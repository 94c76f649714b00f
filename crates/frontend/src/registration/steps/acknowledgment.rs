use super::{Step, StepForm};
use crate::registration::draft::RegistrationDraft;
use crate::shared::validation::FieldErrors;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AcknowledgmentForm {
    pub consent: bool,
}

impl StepForm for AcknowledgmentForm {
    const STEP: Step = Step::Acknowledgment;

    fn from_draft(draft: &RegistrationDraft) -> Self {
        draft.acknowledgment().clone()
    }

    fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        if !self.consent {
            errors.insert("consent", "You must accept the terms to continue");
        }
        errors.into_result()
    }

    fn write_to(self, draft: &mut RegistrationDraft) {
        draft.set_acknowledgment(self);
    }
}
