use super::{Step, StepForm, OTHER_POSITION};
use crate::registration::draft::RegistrationDraft;
use crate::shared::validation::{FieldErrors, ValidationRules};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct BackgroundForm {
    pub skill_level: String,
    pub position: String,
    /// Only meaningful when `position` is `other`
    pub custom_position: String,
}

impl BackgroundForm {
    pub fn custom_position_required(&self) -> bool {
        self.position == OTHER_POSITION
    }

    /// Custom position to send, if the chosen position calls for one
    pub fn effective_custom_position(&self) -> Option<String> {
        if self.custom_position_required() {
            Some(self.custom_position.trim().to_string())
        } else {
            None
        }
    }
}

impl StepForm for BackgroundForm {
    const STEP: Step = Step::Background;

    fn from_draft(draft: &RegistrationDraft) -> Self {
        draft.background().clone()
    }

    fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        errors.check(
            "skill_level",
            "Skill level",
            &self.skill_level,
            ValidationRules::required(),
        );
        errors.check("position", "Position", &self.position, ValidationRules::required());
        if self.custom_position_required() {
            errors.check(
                "custom_position",
                "Custom position",
                &self.custom_position,
                ValidationRules::required().with_max_length(50),
            );
        }
        errors.into_result()
    }

    fn write_to(self, draft: &mut RegistrationDraft) {
        draft.set_background(self);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_custom_position_only_required_for_other() {
        let mut form = BackgroundForm {
            skill_level: "beginner".to_string(),
            position: "defender".to_string(),
            custom_position: String::new(),
        };
        assert!(form.validate().is_ok());
        assert_eq!(form.effective_custom_position(), None);

        form.position = OTHER_POSITION.to_string();
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.get("custom_position"), Some("Custom position is required"));

        form.custom_position = " Sweeper ".to_string();
        assert!(form.validate().is_ok());
        assert_eq!(form.effective_custom_position(), Some("Sweeper".to_string()));
    }
}
