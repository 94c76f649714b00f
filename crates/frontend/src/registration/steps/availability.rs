use super::{Step, StepForm};
use crate::registration::draft::RegistrationDraft;
use crate::shared::validation::{FieldErrors, ValidationRules};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AvailabilityForm {
    pub day: String,
    pub time_of_day: String,
}

impl StepForm for AvailabilityForm {
    const STEP: Step = Step::Availability;

    fn from_draft(draft: &RegistrationDraft) -> Self {
        draft.availability().clone()
    }

    fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        errors.check("day", "Day", &self.day, ValidationRules::required());
        errors.check(
            "time_of_day",
            "Time of day",
            &self.time_of_day,
            ValidationRules::required(),
        );
        errors.into_result()
    }

    fn write_to(self, draft: &mut RegistrationDraft) {
        draft.set_availability(self);
    }
}
