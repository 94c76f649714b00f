use leptos::prelude::*;

use super::view_model::{
    PaymentScreen, PaymentViewModel, CARD_ELEMENT_ID, METHOD_CARD, METHOD_OPTIONS,
};
use crate::layout::global_context::use_global_context;
use crate::payment::transfer::TransferState;
use crate::payment::PaymentOutcome;
use crate::routes::page::Page;
use crate::shared::components::ui::{Button, Input, RadioGroup};
use crate::shared::forms::bind;

#[component]
fn OutcomePanel(outcome: PaymentOutcome) -> impl IntoView {
    let class = match &outcome {
        PaymentOutcome::Success { .. } => "alert alert--success",
        PaymentOutcome::Processing | PaymentOutcome::RequiresAction { .. } => "alert alert--info",
        PaymentOutcome::Declined { .. } | PaymentOutcome::TransientError { .. } => {
            "alert alert--error"
        }
    };
    view! { <div class=class>{outcome.user_message()}</div> }
}

#[component]
fn CardForm(vm: PaymentViewModel) -> impl IntoView {
    let (name, set_name) = bind(vm.billing, |b| b.name.clone(), |b, v| b.name = v);
    let (email, set_email) = bind(vm.billing, |b| b.email.clone(), |b, v| b.email = v);
    let (phone, set_phone) = bind(vm.billing, |b| b.phone.clone(), |b, v| b.phone = v);

    // The card element needs its container in the DOM
    Effect::new(move |_| vm.mount_card());
    on_cleanup(move || vm.unmount_card());

    view! {
        <div class="payment__card">
            <Input label="Cardholder name" id="billing_name" required=true autocomplete="cc-name"
                value=name on_input=set_name
                error=vm.billing_error("name") />
            <div class="form__row">
                <Input label="Email" id="billing_email" input_type="email" required=true
                    value=email on_input=set_email
                    error=vm.billing_error("email") />
                <Input label="Phone" id="billing_phone" input_type="tel" required=true
                    value=phone on_input=set_phone
                    error=vm.billing_error("phone") />
            </div>
            <label class="form__label" for=CARD_ELEMENT_ID>"Card"</label>
            <div id=CARD_ELEMENT_ID class="payment__card-element"></div>
            <Button
                busy=vm.busy
                on_click=Callback::new(move |_| vm.pay_card_command())
            >
                {format!("Subscribe - {}", vm.plan.monthly_fee_label())}
            </Button>
        </div>
    }
}

#[component]
fn TransferPanel(vm: PaymentViewModel) -> impl IntoView {
    let instructions = move || {
        vm.transfer.with(|state| {
            state.instructions().cloned().map(|i| {
                view! {
                    <dl class="payment__instructions">
                        <dt>"Send to"</dt><dd>{i.recipient_email} " (" {i.recipient_name} ")"</dd>
                        <dt>"Amount"</dt><dd>{i.amount}</dd>
                        <dt>"Message / reference"</dt><dd>{i.reference}</dd>
                        {i.security_question.map(|q| view! {
                            <dt>"Security question"</dt><dd>{q}</dd>
                        })}
                        {i.security_answer.map(|a| view! {
                            <dt>"Answer"</dt><dd>{a}</dd>
                        })}
                    </dl>
                }
            })
        })
    };

    view! {
        <div class="payment__transfer">
            {move || match vm.transfer.get() {
                TransferState::NotStarted | TransferState::Initiated(_) => view! {
                    <p>"We will give you the bank details to send an Interac e-Transfer from your online banking."</p>
                    <Button busy=vm.busy on_click=Callback::new(move |_| vm.start_transfer_command())>
                        "Get transfer instructions"
                    </Button>
                }.into_any(),
                TransferState::AwaitingTransfer { .. } => view! {
                    {instructions}
                    <p>"Once you have sent the transfer from your bank, let us know below."</p>
                    <Button busy=vm.busy on_click=Callback::new(move |_| vm.confirm_transfer_command())>
                        "I have sent the transfer"
                    </Button>
                }.into_any(),
                TransferState::PendingVerification { message, .. } => view! {
                    <div class="alert alert--info">
                        {message.unwrap_or_else(|| {
                            "Thanks! Your transfer is pending verification. We will email you once it is received.".to_string()
                        })}
                    </div>
                }.into_any(),
            }}
        </div>
    }
}

#[component]
pub fn PaymentPage() -> impl IntoView {
    let ctx = use_global_context();
    let vm = PaymentViewModel::new();
    vm.check_redirect();
    let screen = Memo::new(move |_| vm.screen());

    view! {
        <section class="page payment">
            <h1>"Payment"</h1>
            {move || match screen.get() {
                PaymentScreen::MissingRegistration => view! {
                    <div class="alert alert--info">
                        "We could not find your registration. Please register first."
                    </div>
                    <Button on_click=Callback::new(move |_| ctx.navigate(Page::Register))>
                        "Go to registration"
                    </Button>
                }.into_any(),
                PaymentScreen::Finished => view! {
                    {vm.outcome.get_untracked().map(|outcome| view! { <OutcomePanel outcome=outcome /> })}
                    <Button on_click=Callback::new(move |_| ctx.navigate(Page::Home))>
                        "Back to home"
                    </Button>
                }.into_any(),
                PaymentScreen::Checkout => view! {
                    <p class="payment__plan">
                        {vm.plan.display_name()} " - " {vm.plan.monthly_fee_label()}
                    </p>
                    {move || vm.error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}
                    {move || vm.outcome.get().map(|outcome| view! { <OutcomePanel outcome=outcome /> })}
                    <RadioGroup
                        label="How would you like to pay?"
                        name="payment_method"
                        options=METHOD_OPTIONS
                        value=vm.method
                        on_change=Callback::new(move |m| vm.method.set(m))
                        disabled=vm.busy
                    />
                    <Show
                        when=move || vm.method.get() == METHOD_CARD
                        fallback=move || view! { <TransferPanel vm=vm /> }
                    >
                        <CardForm vm=vm />
                    </Show>
                }.into_any(),
            }}
        </section>
    }
}
