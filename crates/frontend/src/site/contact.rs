use contracts::domain::messages::NewMessage;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::api;
use crate::shared::components::ui::{Button, Input, Textarea};
use crate::shared::validation::{FieldErrors, Format, ValidationRules};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct MessageForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

impl MessageForm {
    pub fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        errors.check(
            "name",
            "Name",
            &self.name,
            ValidationRules::required().with_max_length(100),
        );
        errors.check(
            "email",
            "Email",
            &self.email,
            ValidationRules::required().with_format(Format::Email),
        );
        errors.check(
            "phone",
            "Phone",
            &self.phone,
            ValidationRules::none().with_format(Format::Phone),
        );
        errors.check(
            "message",
            "Message",
            &self.message,
            ValidationRules::required().with_min_length(10).with_max_length(2000),
        );
        errors.into_result()
    }

    pub fn to_new_message(&self) -> NewMessage {
        let phone = self.phone.trim();
        NewMessage {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: (!phone.is_empty()).then(|| phone.to_string()),
            message: self.message.trim().to_string(),
        }
    }
}

#[component]
pub fn ContactPage() -> impl IntoView {
    let form = RwSignal::new(MessageForm::default());
    let errors = RwSignal::new(FieldErrors::new());
    let sending = RwSignal::new(false);
    let sent = RwSignal::new(false);
    let error_message = RwSignal::new(None::<String>);

    let error_for = move |field: &'static str| {
        Signal::derive(move || errors.with(|e| e.get(field).map(str::to_string)))
    };

    let on_send = move |_: leptos::ev::MouseEvent| {
        let current = form.get_untracked();
        if let Err(e) = current.validate() {
            errors.set(e);
            return;
        }
        errors.set(FieldErrors::new());
        error_message.set(None);
        sending.set(true);

        spawn_local(async move {
            match api::send_message(&current.to_new_message()).await {
                Ok(_) => {
                    log::info!("Contact message sent");
                    form.set(MessageForm::default());
                    sent.set(true);
                }
                Err(e) => {
                    log::error!("Contact message failed: {}", e);
                    error_message.set(Some(e.user_message()));
                }
            }
            sending.set(false);
        });
    };

    view! {
        <section class="page contact">
            <h1>"Contact us"</h1>
            <p class="page__lead">"Questions about programs, tryouts or payments? Send us a note."</p>

            <Show when=move || sent.get()>
                <div class="alert alert--success">"Thanks! We will get back to you within two business days."</div>
            </Show>
            {move || error_message.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

            <div class="contact__form">
                <Input label="Name" id="contact_name" required=true
                    value=Signal::derive(move || form.with(|f| f.name.clone()))
                    on_input=Callback::new(move |v| form.update(|f| f.name = v))
                    error=error_for("name") />
                <div class="form__row">
                    <Input label="Email" id="contact_email" input_type="email" required=true
                        value=Signal::derive(move || form.with(|f| f.email.clone()))
                        on_input=Callback::new(move |v| form.update(|f| f.email = v))
                        error=error_for("email") />
                    <Input label="Phone (optional)" id="contact_phone" input_type="tel"
                        value=Signal::derive(move || form.with(|f| f.phone.clone()))
                        on_input=Callback::new(move |v| form.update(|f| f.phone = v))
                        error=error_for("phone") />
                </div>
                <Textarea label="Message" id="contact_message" rows=6 max_length=2000
                    value=Signal::derive(move || form.with(|f| f.message.clone()))
                    on_input=Callback::new(move |v| form.update(|f| f.message = v))
                    error=error_for("message") />
                <Button busy=sending on_click=Callback::new(on_send)>"Send message"</Button>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> MessageForm {
        MessageForm {
            name: "Sam Okafor".to_string(),
            email: "sam@example.com".to_string(),
            phone: String::new(),
            message: "Do you run winter futsal sessions?".to_string(),
        }
    }

    #[test]
    fn test_phone_is_optional() {
        assert!(valid().validate().is_ok());
        assert_eq!(valid().to_new_message().phone, None);
    }

    #[test]
    fn test_bad_fields_are_reported() {
        let form = MessageForm {
            email: "sam".to_string(),
            phone: "123".to_string(),
            message: "Hi".to_string(),
            ..valid()
        };
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.fields().collect::<Vec<_>>(), vec!["email", "phone", "message"]);
    }
}
