//! Step sequencing for the registration flow
//!
//! The wizard owns the draft, the cursor and the division chosen before the
//! flow started. It lives exactly as long as the registration page.

use thiserror::Error;

use super::cursor::StepCursor;
use super::draft::RegistrationDraft;
use super::steps::{Step, StepForm};
use crate::shared::validation::FieldErrors;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardPhase {
    Editing,
    /// Every step passed; waiting for the submission to be started
    ReadyToSubmit,
    Submitting,
    Submitted { registrant_id: i64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    Advanced(Step),
    ReadyToSubmit,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum StepError {
    #[error("Please correct the highlighted fields")]
    Invalid(FieldErrors),
    #[error("{submitted:?} is not the current step ({current:?})")]
    NotCurrentStep { current: Step, submitted: Step },
    #[error("This registration can no longer be edited")]
    Closed,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RegistrationWizard {
    draft: RegistrationDraft,
    cursor: StepCursor,
    division: String,
    phase: WizardPhase,
}

impl RegistrationWizard {
    pub fn new(division: impl Into<String>) -> Self {
        Self {
            draft: RegistrationDraft::new(),
            cursor: StepCursor::new(),
            division: division.into(),
            phase: WizardPhase::Editing,
        }
    }

    pub fn draft(&self) -> &RegistrationDraft {
        &self.draft
    }

    /// Raw division text as selected on the programs page
    pub fn division(&self) -> &str {
        &self.division
    }

    pub fn current_step(&self) -> Step {
        self.cursor.current()
    }

    pub fn phase(&self) -> WizardPhase {
        self.phase
    }

    pub fn can_retreat(&self) -> bool {
        matches!(self.phase, WizardPhase::Editing | WizardPhase::ReadyToSubmit)
            && !self.cursor.is_first()
    }

    /// Validate `form` and, if it passes, store it and move on.
    ///
    /// On any error the draft and the cursor are left untouched.
    pub fn submit_step<F: StepForm>(&mut self, form: F) -> Result<StepOutcome, StepError> {
        if !matches!(self.phase, WizardPhase::Editing | WizardPhase::ReadyToSubmit) {
            return Err(StepError::Closed);
        }
        let current = self.cursor.current();
        if F::STEP != current {
            return Err(StepError::NotCurrentStep {
                current,
                submitted: F::STEP,
            });
        }

        form.validate().map_err(StepError::Invalid)?;
        form.write_to(&mut self.draft);

        if self.cursor.is_last() {
            self.phase = WizardPhase::ReadyToSubmit;
            log::info!("Registration steps complete, ready to submit");
            Ok(StepOutcome::ReadyToSubmit)
        } else {
            self.cursor.advance();
            let next = self.cursor.current();
            log::info!("Registration advanced to step {}", next.number());
            Ok(StepOutcome::Advanced(next))
        }
    }

    /// Go back one step; a no-op on the first step or once submitting
    pub fn retreat(&mut self) -> bool {
        if !self.can_retreat() {
            return false;
        }
        self.phase = WizardPhase::Editing;
        self.cursor.retreat()
    }

    /// Enter `Submitting`; only possible once every step has passed
    pub fn begin_submission(&mut self) -> bool {
        if self.phase != WizardPhase::ReadyToSubmit {
            return false;
        }
        self.phase = WizardPhase::Submitting;
        true
    }

    /// Back to `ReadyToSubmit` so the user can try again by hand
    pub fn submission_failed(&mut self) {
        if self.phase == WizardPhase::Submitting {
            self.phase = WizardPhase::ReadyToSubmit;
        }
    }

    pub fn mark_submitted(&mut self, registrant_id: i64) {
        self.phase = WizardPhase::Submitted { registrant_id };
    }

    pub fn set_customer_id(&mut self, customer_id: Option<String>) {
        self.draft.set_customer_id(customer_id);
    }

    /// Start over with an empty draft, keeping the division
    pub fn reset(&mut self) {
        self.draft.reset();
        self.cursor = StepCursor::new();
        self.phase = WizardPhase::Editing;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registration::fixtures;
    use crate::registration::steps::{ContactForm, IdentityForm};

    #[test]
    fn test_missing_date_of_birth_keeps_step_one() {
        let mut wizard = RegistrationWizard::new("U9-U10");
        let form = IdentityForm {
            date_of_birth: String::new(),
            ..fixtures::identity()
        };

        let err = wizard.submit_step(form).unwrap_err();
        match err {
            StepError::Invalid(errors) => assert!(errors.get("date_of_birth").is_some()),
            other => panic!("unexpected error: {other:?}"),
        }
        assert_eq!(wizard.current_step(), Step::Identity);
        assert_eq!(wizard.draft().identity(), &IdentityForm::default());
    }

    #[test]
    fn test_valid_identity_advances_and_stores() {
        let mut wizard = RegistrationWizard::new("U9-U10");
        let outcome = wizard.submit_step(fixtures::identity()).unwrap();
        assert_eq!(outcome, StepOutcome::Advanced(Step::Contact));
        assert_eq!(wizard.current_step(), Step::Contact);
        assert_eq!(wizard.draft().identity(), &fixtures::identity());
    }

    #[test]
    fn test_empty_required_field_leaves_previous_values() {
        let mut wizard = RegistrationWizard::new("U9-U10");
        wizard.submit_step(fixtures::identity()).unwrap();
        wizard.submit_step(fixtures::contact()).unwrap();
        wizard.retreat();
        assert_eq!(wizard.current_step(), Step::Contact);

        let broken = ContactForm {
            guardian_name: String::new(),
            city: "Ottawa".to_string(),
            ..fixtures::contact()
        };
        assert!(wizard.submit_step(broken).is_err());
        assert_eq!(wizard.current_step(), Step::Contact);
        assert_eq!(wizard.draft().contact(), &fixtures::contact());
    }

    #[test]
    fn test_form_for_other_step_is_rejected() {
        let mut wizard = RegistrationWizard::new("U9-U10");
        let err = wizard.submit_step(fixtures::contact()).unwrap_err();
        assert_eq!(
            err,
            StepError::NotCurrentStep {
                current: Step::Identity,
                submitted: Step::Contact
            }
        );
        assert_eq!(wizard.draft().contact(), &ContactForm::default());
    }

    #[test]
    fn test_retreat_unavailable_on_first_step() {
        let mut wizard = RegistrationWizard::new("U9-U10");
        assert!(!wizard.can_retreat());
        assert!(!wizard.retreat());
        assert_eq!(wizard.current_step(), Step::Identity);
    }

    #[test]
    fn test_all_steps_reach_ready_to_submit() {
        let wizard = fixtures::completed_wizard("U13-U14");
        assert_eq!(wizard.phase(), WizardPhase::ReadyToSubmit);
        assert_eq!(wizard.current_step(), Step::Acknowledgment);
        assert_eq!(wizard.draft(), &fixtures::complete_draft());
    }

    #[test]
    fn test_submission_phases() {
        let mut wizard = RegistrationWizard::new("U9-U10");
        assert!(!wizard.begin_submission());

        let mut wizard = fixtures::completed_wizard("U9-U10");
        assert!(wizard.begin_submission());
        assert!(!wizard.retreat());
        assert_eq!(
            wizard.submit_step(fixtures::acknowledgment()),
            Err(StepError::Closed)
        );

        wizard.submission_failed();
        assert_eq!(wizard.phase(), WizardPhase::ReadyToSubmit);

        wizard.begin_submission();
        wizard.mark_submitted(31);
        assert_eq!(wizard.phase(), WizardPhase::Submitted { registrant_id: 31 });
    }

    #[test]
    fn test_retreat_from_ready_reopens_editing() {
        let mut wizard = fixtures::completed_wizard("U9-U10");
        assert!(wizard.retreat());
        assert_eq!(wizard.phase(), WizardPhase::Editing);
        assert_eq!(wizard.current_step(), Step::AdditionalInfo);
    }

    #[test]
    fn test_reset_starts_over() {
        let mut wizard = fixtures::completed_wizard("U9-U10");
        wizard.reset();
        assert_eq!(wizard.current_step(), Step::Identity);
        assert_eq!(wizard.phase(), WizardPhase::Editing);
        assert_eq!(wizard.draft(), &RegistrationDraft::default());
        assert_eq!(wizard.division(), "U9-U10");
    }
}
