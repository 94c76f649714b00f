use super::{Step, StepForm};
use crate::registration::draft::RegistrationDraft;
use crate::shared::validation::{FieldErrors, Format, ValidationRules};

/// Height, weight and kit sizes. Numbers stay as typed until submission.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PhysicalForm {
    pub height_cm: String,
    pub weight_kg: String,
    pub jersey_size: String,
    pub shorts_size: String,
    pub sock_size: String,
    pub jacket_size: String,
}

impl PhysicalForm {
    /// Height and weight as numbers, `None` if either does not parse
    pub fn measurements(&self) -> Option<(f64, f64)> {
        let height = self.height_cm.trim().parse().ok()?;
        let weight = self.weight_kg.trim().parse().ok()?;
        Some((height, weight))
    }
}

impl StepForm for PhysicalForm {
    const STEP: Step = Step::Physical;

    fn from_draft(draft: &RegistrationDraft) -> Self {
        draft.physical().clone()
    }

    fn validate(&self) -> Result<(), FieldErrors> {
        let required = ValidationRules::required();
        let positive = required.with_format(Format::PositiveNumber);

        let mut errors = FieldErrors::new();
        errors.check("height_cm", "Height", &self.height_cm, positive);
        errors.check("weight_kg", "Weight", &self.weight_kg, positive);
        errors.check("jersey_size", "Jersey size", &self.jersey_size, required);
        errors.check("shorts_size", "Shorts size", &self.shorts_size, required);
        errors.check("sock_size", "Sock size", &self.sock_size, required);
        errors.check("jacket_size", "Jacket size", &self.jacket_size, required);
        errors.into_result()
    }

    fn write_to(self, draft: &mut RegistrationDraft) {
        draft.set_physical(self);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> PhysicalForm {
        PhysicalForm {
            height_cm: "142".to_string(),
            weight_kg: "36.5".to_string(),
            jersey_size: "YM".to_string(),
            shorts_size: "YM".to_string(),
            sock_size: "YS".to_string(),
            jacket_size: "YL".to_string(),
        }
    }

    #[test]
    fn test_measurements_parse() {
        assert_eq!(form().measurements(), Some((142.0, 36.5)));
    }

    #[test]
    fn test_non_positive_weight_rejected() {
        let f = PhysicalForm {
            weight_kg: "-3".to_string(),
            ..form()
        };
        let errors = f.validate().unwrap_err();
        assert_eq!(errors.get("weight_kg"), Some("Weight must be greater than zero"));
    }
}
