use contracts::domain::payments::{BillingDetails, RegistrantRef};
use contracts::enums::CanonicalPlan;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::payment::api::{HttpPaymentApi, HttpTransferApi};
use crate::payment::card::{record_outcome, CardCheckout, CardPayment};
use crate::payment::redirect::{current_redirect, forget_current_redirect};
use crate::payment::stripe::StripeCardWidget;
use crate::payment::transfer::TransferState;
use crate::payment::PaymentOutcome;
use crate::shared::config::AppConfig;
use crate::shared::division::normalize_division;
use crate::shared::forms::field_error;
use crate::shared::storage;
use crate::shared::validation::{FieldErrors, Format, ValidationRules};

pub const CARD_ELEMENT_ID: &str = "card-element";

pub const METHOD_CARD: &str = "card";
pub const METHOD_TRANSFER: &str = "transfer";
pub const METHOD_OPTIONS: &[(&str, &str)] = &[
    (METHOD_CARD, "Credit / debit card (monthly subscription)"),
    (METHOD_TRANSFER, "Interac e-Transfer"),
];

/// Registrant stored by the registration page, if any
pub fn stored_registrant() -> Option<RegistrantRef> {
    let phone = storage::get_registrant_phone()?;
    Some(RegistrantRef {
        user_id: storage::get_registrant_id(),
        phone,
    })
}

pub fn validate_billing(billing: &BillingDetails) -> Result<(), FieldErrors> {
    let mut errors = FieldErrors::new();
    errors.check(
        "name",
        "Cardholder name",
        &billing.name,
        ValidationRules::required().with_max_length(100),
    );
    errors.check(
        "email",
        "Email",
        &billing.email,
        ValidationRules::required().with_format(Format::Email),
    );
    errors.check(
        "phone",
        "Phone",
        &billing.phone,
        ValidationRules::required().with_format(Format::Phone),
    );
    errors.into_result()
}

/// What the payment page shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentScreen {
    Checkout,
    /// Only the outcome; nothing left to pay from this page
    Finished,
    MissingRegistration,
}

pub fn payment_screen(has_registrant: bool, outcome: Option<&PaymentOutcome>) -> PaymentScreen {
    match outcome {
        Some(o) if o.is_success() => PaymentScreen::Finished,
        Some(_) if !has_registrant => PaymentScreen::Finished,
        _ if has_registrant => PaymentScreen::Checkout,
        _ => PaymentScreen::MissingRegistration,
    }
}

/// Paid, or handed to staff for verification
pub fn settles_registration(outcome: Option<&PaymentOutcome>, transfer: &TransferState) -> bool {
    outcome.is_some_and(PaymentOutcome::is_success) || transfer.is_pending_verification()
}

/// Nothing stored for this registration is needed once it is settled
fn forget_settled_registration() {
    log::debug!("Registration settled, clearing hand-off values");
    storage::clear(storage::ClearScope::Everything);
}

/// ViewModel for the payment page
#[derive(Clone, Copy)]
pub struct PaymentViewModel {
    pub plan: CanonicalPlan,
    pub registrant: StoredValue<Option<RegistrantRef>>,
    pub method: RwSignal<String>,
    pub billing: RwSignal<BillingDetails>,
    pub billing_errors: RwSignal<FieldErrors>,
    pub outcome: RwSignal<Option<PaymentOutcome>>,
    pub transfer: RwSignal<TransferState>,
    pub busy: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
    widget: StoredValue<Option<StripeCardWidget>, LocalStorage>,
}

impl PaymentViewModel {
    pub fn new() -> Self {
        let division = storage::get_selected_division().unwrap_or_default();
        let registrant = stored_registrant();
        let billing = BillingDetails {
            phone: registrant
                .as_ref()
                .map(|r| r.phone.clone())
                .unwrap_or_default(),
            ..Default::default()
        };
        Self {
            plan: normalize_division(&division),
            registrant: StoredValue::new(registrant),
            method: RwSignal::new(METHOD_CARD.to_string()),
            billing: RwSignal::new(billing),
            billing_errors: RwSignal::new(FieldErrors::new()),
            outcome: RwSignal::new(None),
            transfer: RwSignal::new(TransferState::NotStarted),
            busy: RwSignal::new(false),
            error: RwSignal::new(None),
            widget: StoredValue::new_local(None),
        }
    }

    pub fn has_registrant(&self) -> bool {
        self.registrant.with_value(Option::is_some)
    }

    pub fn screen(&self) -> PaymentScreen {
        let has_registrant = self.has_registrant();
        self.outcome
            .with(|outcome| payment_screen(has_registrant, outcome.as_ref()))
    }

    pub fn billing_error(&self, field: &'static str) -> Signal<Option<String>> {
        field_error(self.billing_errors, field)
    }

    /// Mount the card element once its container is in the DOM
    pub fn mount_card(&self) {
        if self.widget.with_value(Option::is_some) {
            return;
        }
        let key = AppConfig::load().stripe_publishable_key;
        match StripeCardWidget::mount(&key, &format!("#{}", CARD_ELEMENT_ID)) {
            Ok(widget) => self.widget.set_value(Some(widget)),
            Err(e) => {
                log::error!("Card widget unavailable: {}", e);
                self.error.set(Some(e));
            }
        }
    }

    pub fn unmount_card(&self) {
        if let Some(widget) = self.widget.get_value() {
            widget.unmount();
        }
        self.widget.set_value(None);
    }

    /// Finish a payment the provider confirmed off-page
    pub fn check_redirect(&self) {
        let Some(redirect) = current_redirect() else {
            return;
        };
        forget_current_redirect();
        let Some(registrant) = self.registrant.get_value() else {
            self.outcome.set(Some(redirect.outcome()));
            return;
        };
        log::info!("Returning from payment redirect: {}", redirect.redirect_status);

        let outcome = self.outcome;
        let busy = self.busy;
        busy.set(true);
        spawn_local(async move {
            let result = record_outcome(&HttpPaymentApi, &registrant, redirect.outcome()).await;
            if settles_registration(Some(&result), &TransferState::NotStarted) {
                forget_settled_registration();
            }
            outcome.set(Some(result));
            busy.set(false);
        });
    }

    pub fn pay_card_command(&self) {
        let Some(registrant) = self.registrant.get_value() else {
            return;
        };
        let billing = self.billing.get_untracked();
        if let Err(errors) = validate_billing(&billing) {
            self.billing_errors.set(errors);
            return;
        }
        self.billing_errors.set(FieldErrors::new());

        let Some(widget) = self.widget.get_value() else {
            self.error
                .set(Some("The card form is not ready yet. Please reload the page.".to_string()));
            return;
        };

        let payment = CardPayment {
            plan: self.plan,
            registrant,
            billing,
            customer_id: storage::get_customer_id(),
        };
        let outcome = self.outcome;
        let busy = self.busy;
        let error = self.error;
        busy.set(true);
        error.set(None);
        spawn_local(async move {
            let result = CardCheckout::new(&widget, &HttpPaymentApi).pay(&payment).await;
            if let Some(customer_id) = &result.customer_id {
                storage::save_customer_id(customer_id);
            }
            if result.outcome.is_success() {
                log::info!("Card payment succeeded for plan {}", payment.plan);
                forget_settled_registration();
            }
            outcome.set(Some(result.outcome));
            busy.set(false);
        });
    }

    /// Create the transfer and fetch its instructions
    pub fn start_transfer_command(&self) {
        if self.transfer.with_untracked(|t| *t != TransferState::NotStarted) {
            return;
        }
        self.advance_transfer(2);
    }

    /// Payer says the e-transfer was sent
    pub fn confirm_transfer_command(&self) {
        if self.transfer.with_untracked(|t| t.instructions().is_none()) {
            return;
        }
        self.advance_transfer(1);
    }

    fn advance_transfer(&self, round_trips: usize) {
        let Some(registrant) = self.registrant.get_value() else {
            return;
        };
        let plan = self.plan;
        let transfer = self.transfer;
        let busy = self.busy;
        let error = self.error;
        busy.set(true);
        error.set(None);
        spawn_local(async move {
            for _ in 0..round_trips {
                let state = transfer.get_untracked();
                match state.advance(&HttpTransferApi, plan, &registrant).await {
                    Ok(next) => {
                        if settles_registration(None, &next) {
                            forget_settled_registration();
                        }
                        transfer.set(next);
                    }
                    Err(e) => {
                        log::error!("E-transfer step failed: {}", e);
                        error.set(Some(e.to_string()));
                        break;
                    }
                }
            }
            busy.set(false);
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_billing_requires_contact_details() {
        let errors = validate_billing(&BillingDetails::default()).unwrap_err();
        assert_eq!(errors.fields().collect::<Vec<_>>(), vec!["name", "email", "phone"]);

        let billing = BillingDetails {
            name: "Li Chen".to_string(),
            email: "li@example.com".to_string(),
            phone: "604 555 0100".to_string(),
            postal_code: None,
        };
        assert!(validate_billing(&billing).is_ok());
    }

    #[test]
    fn test_redirect_outcome_shown_without_stored_registrant() {
        assert_eq!(
            payment_screen(false, Some(&PaymentOutcome::Processing)),
            PaymentScreen::Finished
        );
        assert_eq!(payment_screen(false, None), PaymentScreen::MissingRegistration);
        let paid = PaymentOutcome::Success {
            payment_intent_id: None,
        };
        assert_eq!(payment_screen(true, Some(&paid)), PaymentScreen::Finished);
        assert_eq!(
            payment_screen(true, Some(&PaymentOutcome::Processing)),
            PaymentScreen::Checkout
        );
        assert_eq!(payment_screen(true, None), PaymentScreen::Checkout);
    }

    #[test]
    fn test_settled_only_when_paid_or_pending_verification() {
        let paid = PaymentOutcome::Success {
            payment_intent_id: Some("pi_1".to_string()),
        };
        assert!(settles_registration(Some(&paid), &TransferState::NotStarted));
        assert!(!settles_registration(
            Some(&PaymentOutcome::Processing),
            &TransferState::NotStarted
        ));
        let declined = PaymentOutcome::Declined {
            message: "Card declined".to_string(),
        };
        assert!(!settles_registration(Some(&declined), &TransferState::NotStarted));
        assert!(!settles_registration(None, &TransferState::NotStarted));

        let record = contracts::domain::payments::TransferRecord {
            id: "tr_5".to_string(),
            token: "tok".to_string(),
        };
        assert!(!settles_registration(None, &TransferState::Initiated(record.clone())));
        assert!(settles_registration(
            None,
            &TransferState::PendingVerification {
                record,
                message: None,
            }
        ));
    }
}
