pub mod api;
pub mod cursor;
pub mod draft;
pub mod steps;
pub mod submission;
pub mod ui;
pub mod wizard;

#[cfg(test)]
pub(crate) mod fixtures;

pub use draft::RegistrationDraft;
pub use wizard::{RegistrationWizard, StepError, StepOutcome, WizardPhase};
