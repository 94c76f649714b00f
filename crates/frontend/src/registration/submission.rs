//! Turning a finished draft into a registrant on the backend

use async_trait::async_trait;
use contracts::domain::registration::{RegistrationPayload, RegistrationResponse};
use thiserror::Error;

use super::draft::RegistrationDraft;
use crate::shared::division::normalize_division;
use crate::shared::http::ApiError;
use crate::shared::retry::{retry_fixed, Delay, Exhausted, RetryPolicy};

#[async_trait(?Send)]
pub trait RegistrationApi {
    async fn create_registration(
        &self,
        payload: &RegistrationPayload,
    ) -> Result<RegistrationResponse, ApiError>;
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SubmissionError {
    #[error("Please upload both the player photo and the ID card before submitting")]
    MissingDocuments,
    #[error("Please complete every step before submitting")]
    Incomplete,
    #[error("We could not submit your registration. Please try again in a moment.")]
    Exhausted { attempts: u32, last: ApiError },
}

/// Flatten the draft into the request body.
///
/// Fails without side effects when the documents are missing or a numeric
/// field does not parse.
pub fn build_payload(
    draft: &RegistrationDraft,
    division: &str,
) -> Result<RegistrationPayload, SubmissionError> {
    let additional = draft.additional();
    let (photo, id_card) = match (&additional.photo, &additional.id_card) {
        (Some(photo), Some(id_card)) if additional.has_documents() => {
            (photo.clone(), id_card.clone())
        }
        _ => return Err(SubmissionError::MissingDocuments),
    };
    let (height_cm, weight_kg) = draft
        .physical()
        .measurements()
        .ok_or(SubmissionError::Incomplete)?;

    let identity = draft.identity();
    let contact = draft.contact();
    let physical = draft.physical();
    let background = draft.background();
    let availability = draft.availability();

    Ok(RegistrationPayload {
        full_name: identity.full_name.trim().to_string(),
        date_of_birth: identity.date_of_birth.clone(),
        gender: identity.gender.clone(),

        guardian_name: contact.guardian_name.trim().to_string(),
        phone: contact.phone.trim().to_string(),
        email: contact.email.trim().to_string(),
        address: contact.address.trim().to_string(),
        city: contact.city.trim().to_string(),
        province: contact.province.trim().to_string(),
        postal_code: contact.postal_code.trim().to_uppercase(),
        emergency_contact_name: contact.emergency_contact_name.trim().to_string(),
        emergency_contact_phone: contact.emergency_contact_phone.trim().to_string(),

        height_cm,
        weight_kg,
        jersey_size: physical.jersey_size.clone(),
        shorts_size: physical.shorts_size.clone(),
        sock_size: physical.sock_size.clone(),
        jacket_size: physical.jacket_size.clone(),

        skill_level: background.skill_level.clone(),
        position: background.position.clone(),
        custom_position: background.effective_custom_position(),

        available_day: availability.day.clone(),
        available_time: availability.time_of_day.clone(),

        medical_notes: additional.medical_notes.trim().to_string(),
        comments: additional.comments.trim().to_string(),
        consent: draft.acknowledgment().consent,

        photo,
        id_card,

        plan: normalize_division(division).code().to_string(),
        customer_id: draft.customer_id().map(str::to_string),
    })
}

/// Create the registrant, retrying every failure on a fixed delay.
pub async fn submit_registration(
    api: &dyn RegistrationApi,
    delay: &dyn Delay,
    policy: RetryPolicy,
    draft: &RegistrationDraft,
    division: &str,
) -> Result<RegistrationResponse, SubmissionError> {
    let payload = build_payload(draft, division)?;

    let result = retry_fixed(policy, delay, "Registration submission", |_| {
        api.create_registration(&payload)
    })
    .await;

    match result {
        Ok(response) => {
            log::info!("Registration created with id {}", response.id);
            Ok(response)
        }
        Err(Exhausted { attempts, last }) => Err(SubmissionError::Exhausted { attempts, last }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registration::fixtures;
    use crate::registration::steps::{AdditionalInfoForm, StepForm};
    use crate::shared::retry::testing::RecordingDelay;
    use futures::executor::block_on;
    use std::cell::RefCell;
    use std::collections::VecDeque;

    /// Answers from a script, counting calls
    #[derive(Default)]
    struct ScriptedApi {
        answers: RefCell<VecDeque<Result<RegistrationResponse, ApiError>>>,
        calls: RefCell<Vec<RegistrationPayload>>,
    }

    impl ScriptedApi {
        fn new(answers: Vec<Result<RegistrationResponse, ApiError>>) -> Self {
            Self {
                answers: RefCell::new(answers.into()),
                calls: RefCell::default(),
            }
        }
    }

    #[async_trait(?Send)]
    impl RegistrationApi for ScriptedApi {
        async fn create_registration(
            &self,
            payload: &RegistrationPayload,
        ) -> Result<RegistrationResponse, ApiError> {
            self.calls.borrow_mut().push(payload.clone());
            self.answers
                .borrow_mut()
                .pop_front()
                .unwrap_or_else(|| Err(ApiError::Network("no scripted answer".to_string())))
        }
    }

    fn network_error() -> ApiError {
        ApiError::Network("connection reset".to_string())
    }

    fn created(id: i64) -> RegistrationResponse {
        RegistrationResponse { id, message: None }
    }

    #[test]
    fn test_payload_carries_normalized_plan() {
        let payload = build_payload(&fixtures::complete_draft(), "u13–u14").unwrap();
        assert_eq!(payload.plan, "U13_U14");
        assert_eq!(payload.full_name, "Maya Chen");
        assert_eq!(payload.height_cm, 152.0);
        assert_eq!(payload.custom_position, None);
        assert!(payload.consent);
    }

    #[test]
    fn test_missing_document_makes_no_request() {
        for (photo, id_card) in [
            (None, Some(fixtures::document("id.jpg"))),
            (Some(fixtures::document("p.jpg")), None),
            (None, None),
        ] {
            let mut draft = fixtures::complete_draft();
            AdditionalInfoForm {
                photo,
                id_card,
                ..fixtures::additional()
            }
            .write_to(&mut draft);

            let api = ScriptedApi::new(vec![Ok(created(1))]);
            let delay = RecordingDelay::default();
            let result = block_on(submit_registration(
                &api,
                &delay,
                RetryPolicy::default(),
                &draft,
                "U9_U10",
            ));
            assert_eq!(result, Err(SubmissionError::MissingDocuments));
            assert!(api.calls.borrow().is_empty());
        }
    }

    #[test]
    fn test_three_attempts_then_failure() {
        let api = ScriptedApi::new(vec![
            Err(network_error()),
            Err(ApiError::Status {
                status: 500,
                message: "db down".to_string(),
            }),
            Err(network_error()),
            Ok(created(9)),
        ]);
        let delay = RecordingDelay::default();
        let result = block_on(submit_registration(
            &api,
            &delay,
            RetryPolicy::default(),
            &fixtures::complete_draft(),
            "U9_U10",
        ));

        assert_eq!(
            result,
            Err(SubmissionError::Exhausted {
                attempts: 3,
                last: network_error()
            })
        );
        assert_eq!(api.calls.borrow().len(), 3);
        assert_eq!(*delay.waits.borrow(), vec![1000, 1000]);
    }

    #[test]
    fn test_fail_twice_then_succeed_marks_wizard_submitted() {
        let mut wizard = fixtures::completed_wizard("U13-U14");
        assert!(wizard.begin_submission());

        let api = ScriptedApi::new(vec![
            Err(network_error()),
            Err(network_error()),
            Ok(created(42)),
        ]);
        let delay = RecordingDelay::default();
        let response = block_on(submit_registration(
            &api,
            &delay,
            RetryPolicy::default(),
            wizard.draft(),
            wizard.division(),
        ))
        .unwrap();
        wizard.mark_submitted(response.id);

        assert_eq!(
            wizard.phase(),
            crate::registration::wizard::WizardPhase::Submitted { registrant_id: 42 }
        );
        assert_eq!(api.calls.borrow().len(), 3);
        assert!(api.calls.borrow().iter().all(|p| p.plan == "U13_U14"));
    }

    #[test]
    fn test_seeded_customer_travels_with_payload() {
        let mut wizard = fixtures::completed_wizard("U9_U10");
        wizard.set_customer_id(Some("cus_9Qx".to_string()));
        assert!(wizard.begin_submission());

        let api = ScriptedApi::new(vec![Ok(created(7))]);
        let delay = RecordingDelay::default();
        block_on(submit_registration(
            &api,
            &delay,
            RetryPolicy::default(),
            wizard.draft(),
            wizard.division(),
        ))
        .unwrap();
        assert_eq!(api.calls.borrow()[0].customer_id.as_deref(), Some("cus_9Qx"));

        wizard.reset();
        let payload = build_payload(&fixtures::complete_draft(), wizard.division()).unwrap();
        assert_eq!(wizard.draft().customer_id(), None);
        assert_eq!(payload.customer_id, None);
    }
}
