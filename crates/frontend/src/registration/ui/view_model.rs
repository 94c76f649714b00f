use contracts::enums::CanonicalPlan;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::registration::api::HttpRegistrationApi;
use crate::registration::steps::{Step, StepForm};
use crate::registration::submission::submit_registration;
use crate::registration::{RegistrationWizard, StepError, StepOutcome, WizardPhase};
use crate::shared::config::AppConfig;
use crate::shared::division::normalize_division;
use crate::shared::forms::field_error;
use crate::shared::retry::TimerDelay;
use crate::shared::storage;
use crate::shared::validation::FieldErrors;

/// ViewModel for the registration wizard page
#[derive(Clone, Copy)]
pub struct RegistrationViewModel {
    pub wizard: RwSignal<RegistrationWizard>,
    pub errors: RwSignal<FieldErrors>,
    pub message: RwSignal<Option<String>>,
}

impl RegistrationViewModel {
    pub fn new() -> Self {
        let division = storage::get_selected_division().unwrap_or_default();
        let mut wizard = RegistrationWizard::new(division);
        // A customer from an unfinished card payment in this browser is reused
        wizard.set_customer_id(storage::get_customer_id());
        Self {
            wizard: RwSignal::new(wizard),
            errors: RwSignal::new(FieldErrors::new()),
            message: RwSignal::new(None),
        }
    }

    pub fn current_step(&self) -> Step {
        self.wizard.with(|w| w.current_step())
    }

    pub fn phase(&self) -> WizardPhase {
        self.wizard.with(|w| w.phase())
    }

    pub fn plan(&self) -> CanonicalPlan {
        self.wizard.with(|w| normalize_division(w.division()))
    }

    pub fn is_submitting(&self) -> bool {
        self.phase() == WizardPhase::Submitting
    }

    /// Message for `field` from the last failed step submission
    pub fn error_for(&self, field: &'static str) -> Signal<Option<String>> {
        field_error(self.errors, field)
    }

    /// Seed a step form from the draft
    pub fn load_form<F: StepForm>(&self) -> F {
        self.wizard.with_untracked(|w| F::from_draft(w.draft()))
    }

    /// Validate and store the current step; the last step hands off to
    /// submission.
    pub fn submit_step<F: StepForm>(&self, form: F, on_submitted: Callback<i64>) {
        let Some(result) = self.wizard.try_update(|w| w.submit_step(form)) else {
            return;
        };
        match result {
            Ok(StepOutcome::Advanced(_)) => {
                self.errors.set(FieldErrors::new());
                self.message.set(None);
            }
            Ok(StepOutcome::ReadyToSubmit) => {
                self.errors.set(FieldErrors::new());
                self.submit_command(on_submitted);
            }
            Err(e) => {
                if let StepError::Invalid(errors) = &e {
                    log::debug!("Step rejected: {} field(s) invalid", errors.len());
                    self.errors.set(errors.clone());
                }
                self.message.set(Some(e.to_string()));
            }
        }
    }

    pub fn back_command(&self) {
        if self.wizard.try_update(|w| w.retreat()).unwrap_or(false) {
            self.errors.set(FieldErrors::new());
            self.message.set(None);
        }
    }

    /// Send the completed draft. The wizard stays in `Submitting` while the
    /// request (and its retries) are in flight.
    pub fn submit_command(&self, on_submitted: Callback<i64>) {
        if !self.wizard.try_update(|w| w.begin_submission()).unwrap_or(false) {
            return;
        }
        self.message.set(None);

        let wizard = self.wizard;
        let message = self.message;
        let snapshot = wizard.get_untracked();
        spawn_local(async move {
            let config = AppConfig::load();
            let result = submit_registration(
                &HttpRegistrationApi,
                &TimerDelay,
                config.submission_retry,
                snapshot.draft(),
                snapshot.division(),
            )
            .await;

            match result {
                Ok(response) => {
                    storage::start_registrant(
                        response.id,
                        snapshot.draft().contact().phone.trim(),
                        snapshot.draft().customer_id(),
                    );
                    storage::save_selected_division(snapshot.division());
                    wizard.update(|w| w.mark_submitted(response.id));
                    on_submitted.run(response.id);
                }
                Err(e) => {
                    log::error!("Registration submission failed: {:?}", e);
                    wizard.update(|w| w.submission_failed());
                    message.set(Some(e.to_string()));
                }
            }
        });
    }

    /// Clear every step and start again
    pub fn reset_command(&self) {
        self.wizard.update(|w| w.reset());
        storage::clear(storage::ClearScope::Registrant);
        self.errors.set(FieldErrors::new());
        self.message.set(None);
    }
}
