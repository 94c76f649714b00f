//! Stripe.js binding behind [`PaymentWidget`]
//!
//! Expects `https://js.stripe.com/v3/` to be loaded by `index.html`.

use async_trait::async_trait;
use contracts::domain::payments::BillingDetails;
use serde::Deserialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;

use super::card::PaymentWidget;
use super::outcome::{ProviderError, ProviderIntent};

#[wasm_bindgen]
extern "C" {
    #[derive(Clone)]
    pub type StripeJs;

    #[wasm_bindgen(js_name = Stripe, catch)]
    fn stripe_init(publishable_key: &str) -> Result<StripeJs, JsValue>;

    #[wasm_bindgen(method)]
    fn elements(this: &StripeJs) -> StripeElements;

    #[wasm_bindgen(method, js_name = createPaymentMethod)]
    fn create_payment_method(this: &StripeJs, data: &JsValue) -> js_sys::Promise;

    #[wasm_bindgen(method, js_name = confirmCardPayment)]
    fn confirm_card_payment(this: &StripeJs, client_secret: &str) -> js_sys::Promise;

    #[derive(Clone)]
    pub type StripeElements;

    #[wasm_bindgen(method)]
    fn create(this: &StripeElements, kind: &str) -> CardElement;

    #[derive(Clone)]
    pub type CardElement;

    #[wasm_bindgen(method)]
    fn mount(this: &CardElement, selector: &str);

    #[wasm_bindgen(method)]
    fn destroy(this: &CardElement);
}

/// Shape shared by `createPaymentMethod` and `confirmCardPayment` results
#[derive(Debug, Deserialize)]
struct StripeResult {
    #[serde(rename = "paymentMethod", default)]
    payment_method: Option<PaymentMethodRef>,
    #[serde(rename = "paymentIntent", default)]
    payment_intent: Option<ProviderIntent>,
    #[serde(default)]
    error: Option<ProviderError>,
}

#[derive(Debug, Deserialize)]
struct PaymentMethodRef {
    id: String,
}

/// Card element mounted in the page plus the client that owns it
#[derive(Clone)]
pub struct StripeCardWidget {
    stripe: StripeJs,
    card: CardElement,
}

impl StripeCardWidget {
    /// Create the client and mount a card element at `selector`
    pub fn mount(publishable_key: &str, selector: &str) -> Result<Self, String> {
        if publishable_key.is_empty() {
            return Err("Card payments are not configured".to_string());
        }
        let stripe = stripe_init(publishable_key)
            .map_err(|e| format!("Stripe.js is not available: {:?}", e))?;
        let card = stripe.elements().create("card");
        card.mount(selector);
        Ok(Self { stripe, card })
    }

    pub fn unmount(&self) {
        self.card.destroy();
    }
}

fn set(target: &js_sys::Object, key: &str, value: &JsValue) -> Result<(), ProviderError> {
    js_sys::Reflect::set(target, &JsValue::from_str(key), value)
        .map(|_| ())
        .map_err(|e| ProviderError::local(format!("Failed to build request: {:?}", e)))
}

fn billing_object(billing: &BillingDetails) -> Result<js_sys::Object, ProviderError> {
    let details = js_sys::Object::new();
    set(&details, "name", &JsValue::from_str(&billing.name))?;
    set(&details, "email", &JsValue::from_str(&billing.email))?;
    set(&details, "phone", &JsValue::from_str(&billing.phone))?;
    if let Some(postal_code) = &billing.postal_code {
        let address = js_sys::Object::new();
        set(&address, "postal_code", &JsValue::from_str(postal_code))?;
        set(&details, "address", &address)?;
    }
    Ok(details)
}

async fn resolve(promise: js_sys::Promise) -> Result<StripeResult, ProviderError> {
    let value = JsFuture::from(promise).await.map_err(|e| ProviderError {
        error_type: Some("api_connection_error".to_string()),
        message: Some(format!("{:?}", e)),
        ..Default::default()
    })?;
    serde_wasm_bindgen::from_value(value)
        .map_err(|e| ProviderError::local(format!("Unexpected Stripe response: {}", e)))
}

#[async_trait(?Send)]
impl PaymentWidget for StripeCardWidget {
    async fn create_payment_method(
        &self,
        billing: &BillingDetails,
    ) -> Result<String, ProviderError> {
        let data = js_sys::Object::new();
        set(&data, "type", &JsValue::from_str("card"))?;
        set(&data, "card", self.card.as_ref())?;
        set(&data, "billing_details", &billing_object(billing)?.into())?;

        let result = resolve(self.stripe.create_payment_method(&data)).await?;
        match (result.error, result.payment_method) {
            (Some(error), _) => Err(error),
            (None, Some(method)) => Ok(method.id),
            (None, None) => Err(ProviderError::local("Stripe returned no payment method")),
        }
    }

    async fn confirm_payment(&self, client_secret: &str) -> Result<ProviderIntent, ProviderError> {
        let result = resolve(self.stripe.confirm_card_payment(client_secret)).await?;
        match (result.error, result.payment_intent) {
            (Some(error), _) => Err(error),
            (None, Some(intent)) => Ok(intent),
            (None, None) => Err(ProviderError::local("Stripe returned no payment intent")),
        }
    }
}
