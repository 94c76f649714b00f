//! One component per wizard step
//!
//! Each step keeps its own form signal seeded from the draft; the draft is
//! only written through [`RegistrationViewModel::submit_step`].

use leptos::prelude::*;
use leptos::task::spawn_local;

use super::documents::read_document;
use super::view_model::RegistrationViewModel;
use crate::registration::steps::*;
use crate::shared::components::ui::{options, Button, Checkbox, FileInput, Input, Select, Textarea};
use crate::shared::forms::bind;

#[component]
fn StepActions(vm: RegistrationViewModel, on_next: Callback<()>) -> impl IntoView {
    let is_last = move || vm.current_step() == Step::Acknowledgment;
    view! {
        <div class="wizard__actions">
            <Show when=move || vm.wizard.with(|w| w.can_retreat())>
                <Button
                    variant="secondary"
                    disabled=Signal::derive(move || vm.is_submitting())
                    on_click=Callback::new(move |_| vm.back_command())
                >
                    "Back"
                </Button>
            </Show>
            <Button
                busy=Signal::derive(move || vm.is_submitting())
                on_click=Callback::new(move |_| on_next.run(()))
            >
                {move || if is_last() { "Submit registration" } else { "Next" }}
            </Button>
        </div>
    }
}

#[component]
pub fn IdentityStep(vm: RegistrationViewModel, on_submitted: Callback<i64>) -> impl IntoView {
    let form = RwSignal::new(vm.load_form::<IdentityForm>());
    let (full_name, set_full_name) = bind(form, |f| f.full_name.clone(), |f, v| f.full_name = v);
    let (dob, set_dob) = bind(form, |f| f.date_of_birth.clone(), |f, v| f.date_of_birth = v);
    let (gender, set_gender) = bind(form, |f| f.gender.clone(), |f, v| f.gender = v);

    view! {
        <Input label="Player's full name" id="full_name" required=true
            value=full_name on_input=set_full_name error=vm.error_for("full_name") />
        <Input label="Date of birth" id="date_of_birth" input_type="date" required=true
            value=dob on_input=set_dob error=vm.error_for("date_of_birth") />
        <Select label="Gender" id="gender" required=true options=options(GENDER_OPTIONS)
            value=gender on_change=set_gender error=vm.error_for("gender") />
        <StepActions vm=vm on_next=Callback::new(move |_| vm.submit_step(form.get_untracked(), on_submitted)) />
    }
}

#[component]
pub fn ContactStep(vm: RegistrationViewModel, on_submitted: Callback<i64>) -> impl IntoView {
    let form = RwSignal::new(vm.load_form::<ContactForm>());
    let (guardian, set_guardian) =
        bind(form, |f| f.guardian_name.clone(), |f, v| f.guardian_name = v);
    let (phone, set_phone) = bind(form, |f| f.phone.clone(), |f, v| f.phone = v);
    let (email, set_email) = bind(form, |f| f.email.clone(), |f, v| f.email = v);
    let (address, set_address) = bind(form, |f| f.address.clone(), |f, v| f.address = v);
    let (city, set_city) = bind(form, |f| f.city.clone(), |f, v| f.city = v);
    let (province, set_province) = bind(form, |f| f.province.clone(), |f, v| f.province = v);
    let (postal, set_postal) = bind(form, |f| f.postal_code.clone(), |f, v| f.postal_code = v);
    let (emergency_name, set_emergency_name) = bind(
        form,
        |f| f.emergency_contact_name.clone(),
        |f, v| f.emergency_contact_name = v,
    );
    let (emergency_phone, set_emergency_phone) = bind(
        form,
        |f| f.emergency_contact_phone.clone(),
        |f, v| f.emergency_contact_phone = v,
    );

    view! {
        <Input label="Parent / guardian name" id="guardian_name" required=true
            value=guardian on_input=set_guardian error=vm.error_for("guardian_name") />
        <div class="form__row">
            <Input label="Phone" id="phone" input_type="tel" required=true autocomplete="tel"
                value=phone on_input=set_phone error=vm.error_for("phone") />
            <Input label="Email" id="email" input_type="email" required=true autocomplete="email"
                value=email on_input=set_email error=vm.error_for("email") />
        </div>
        <Input label="Street address" id="address" required=true autocomplete="street-address"
            value=address on_input=set_address error=vm.error_for("address") />
        <div class="form__row">
            <Input label="City" id="city" required=true
                value=city on_input=set_city error=vm.error_for("city") />
            <Input label="Province" id="province" required=true
                value=province on_input=set_province error=vm.error_for("province") />
            <Input label="Postal code" id="postal_code" required=true autocomplete="postal-code"
                value=postal on_input=set_postal error=vm.error_for("postal_code") />
        </div>
        <h4 class="wizard__subheading">"Emergency contact"</h4>
        <div class="form__row">
            <Input label="Name" id="emergency_contact_name" required=true
                value=emergency_name on_input=set_emergency_name
                error=vm.error_for("emergency_contact_name") />
            <Input label="Phone" id="emergency_contact_phone" input_type="tel" required=true
                value=emergency_phone on_input=set_emergency_phone
                error=vm.error_for("emergency_contact_phone") />
        </div>
        <StepActions vm=vm on_next=Callback::new(move |_| vm.submit_step(form.get_untracked(), on_submitted)) />
    }
}

#[component]
pub fn PhysicalStep(vm: RegistrationViewModel, on_submitted: Callback<i64>) -> impl IntoView {
    let form = RwSignal::new(vm.load_form::<PhysicalForm>());
    let (height, set_height) = bind(form, |f| f.height_cm.clone(), |f, v| f.height_cm = v);
    let (weight, set_weight) = bind(form, |f| f.weight_kg.clone(), |f, v| f.weight_kg = v);
    let (jersey, set_jersey) = bind(form, |f| f.jersey_size.clone(), |f, v| f.jersey_size = v);
    let (shorts, set_shorts) = bind(form, |f| f.shorts_size.clone(), |f, v| f.shorts_size = v);
    let (socks, set_socks) = bind(form, |f| f.sock_size.clone(), |f, v| f.sock_size = v);
    let (jacket, set_jacket) = bind(form, |f| f.jacket_size.clone(), |f, v| f.jacket_size = v);

    view! {
        <div class="form__row">
            <Input label="Height (cm)" id="height_cm" input_type="number" required=true
                value=height on_input=set_height error=vm.error_for("height_cm") />
            <Input label="Weight (kg)" id="weight_kg" input_type="number" required=true
                value=weight on_input=set_weight error=vm.error_for("weight_kg") />
        </div>
        <div class="form__row">
            <Select label="Jersey size" id="jersey_size" required=true options=options(SIZE_OPTIONS)
                value=jersey on_change=set_jersey error=vm.error_for("jersey_size") />
            <Select label="Shorts size" id="shorts_size" required=true options=options(SIZE_OPTIONS)
                value=shorts on_change=set_shorts error=vm.error_for("shorts_size") />
        </div>
        <div class="form__row">
            <Select label="Sock size" id="sock_size" required=true options=options(SIZE_OPTIONS)
                value=socks on_change=set_socks error=vm.error_for("sock_size") />
            <Select label="Jacket size" id="jacket_size" required=true options=options(SIZE_OPTIONS)
                value=jacket on_change=set_jacket error=vm.error_for("jacket_size") />
        </div>
        <StepActions vm=vm on_next=Callback::new(move |_| vm.submit_step(form.get_untracked(), on_submitted)) />
    }
}

#[component]
pub fn BackgroundStep(vm: RegistrationViewModel, on_submitted: Callback<i64>) -> impl IntoView {
    let form = RwSignal::new(vm.load_form::<BackgroundForm>());
    let (skill, set_skill) = bind(form, |f| f.skill_level.clone(), |f, v| f.skill_level = v);
    let (position, set_position) = bind(form, |f| f.position.clone(), |f, v| f.position = v);
    let (custom, set_custom) =
        bind(form, |f| f.custom_position.clone(), |f, v| f.custom_position = v);

    view! {
        <Select label="Skill level" id="skill_level" required=true options=options(SKILL_LEVEL_OPTIONS)
            value=skill on_change=set_skill error=vm.error_for("skill_level") />
        <Select label="Preferred position" id="position" required=true options=options(POSITION_OPTIONS)
            value=position on_change=set_position error=vm.error_for("position") />
        <Show when=move || form.with(|f| f.custom_position_required())>
            <Input label="Which position?" id="custom_position" required=true
                value=custom on_input=set_custom error=vm.error_for("custom_position") />
        </Show>
        <StepActions vm=vm on_next=Callback::new(move |_| vm.submit_step(form.get_untracked(), on_submitted)) />
    }
}

#[component]
pub fn AvailabilityStep(vm: RegistrationViewModel, on_submitted: Callback<i64>) -> impl IntoView {
    let form = RwSignal::new(vm.load_form::<AvailabilityForm>());
    let (day, set_day) = bind(form, |f| f.day.clone(), |f, v| f.day = v);
    let (time, set_time) = bind(form, |f| f.time_of_day.clone(), |f, v| f.time_of_day = v);

    view! {
        <Select label="Preferred day" id="day" required=true options=options(DAY_OPTIONS)
            value=day on_change=set_day error=vm.error_for("day") />
        <Select label="Preferred time" id="time_of_day" required=true options=options(TIME_OPTIONS)
            value=time on_change=set_time error=vm.error_for("time_of_day") />
        <StepActions vm=vm on_next=Callback::new(move |_| vm.submit_step(form.get_untracked(), on_submitted)) />
    }
}

#[derive(Clone, Copy)]
enum Slot {
    Photo,
    IdCard,
}

#[component]
pub fn AdditionalInfoStep(vm: RegistrationViewModel, on_submitted: Callback<i64>) -> impl IntoView {
    let form = RwSignal::new(vm.load_form::<AdditionalInfoForm>());
    let (medical, set_medical) =
        bind(form, |f| f.medical_notes.clone(), |f, v| f.medical_notes = v);
    let (comments, set_comments) = bind(form, |f| f.comments.clone(), |f, v| f.comments = v);
    let upload_error = RwSignal::new(None::<String>);

    let on_file = move |slot: Slot| {
        Callback::new(move |file: web_sys::File| {
            upload_error.set(None);
            spawn_local(async move {
                match read_document(file).await {
                    Ok(doc) => form.update(|f| match slot {
                        Slot::Photo => f.photo = Some(doc),
                        Slot::IdCard => f.id_card = Some(doc),
                    }),
                    Err(e) => upload_error.set(Some(e)),
                }
            });
        })
    };
    let file_name = move |slot: Slot| {
        Signal::derive(move || {
            form.with(|f| match slot {
                Slot::Photo => f.photo.as_ref().map(|d| d.file_name.clone()),
                Slot::IdCard => f.id_card.as_ref().map(|d| d.file_name.clone()),
            })
        })
    };

    view! {
        <Textarea label="Medical notes (allergies, conditions, medication)" id="medical_notes"
            rows=4 max_length=2000
            value=medical on_input=set_medical error=vm.error_for("medical_notes") />
        <Textarea label="Anything else we should know?" id="comments"
            rows=4 max_length=2000
            value=comments on_input=set_comments error=vm.error_for("comments") />
        <FileInput label="Player photo" id="photo" accept="image/*" required=true
            file_name=file_name(Slot::Photo) on_file=on_file(Slot::Photo) />
        <FileInput label="Proof of age (birth certificate, passport or health card)" id="id_card"
            accept="image/*,application/pdf" required=true
            file_name=file_name(Slot::IdCard) on_file=on_file(Slot::IdCard) />
        {move || upload_error.get().map(|e| view! { <div class="form__error">{e}</div> })}
        <StepActions vm=vm on_next=Callback::new(move |_| vm.submit_step(form.get_untracked(), on_submitted)) />
    }
}

#[component]
pub fn AcknowledgmentStep(vm: RegistrationViewModel, on_submitted: Callback<i64>) -> impl IntoView {
    let form = RwSignal::new(vm.load_form::<AcknowledgmentForm>());
    let summary = vm.wizard.with_untracked(|w| {
        let draft = w.draft();
        vec![
            ("Player", draft.identity().full_name.clone()),
            ("Date of birth", draft.identity().date_of_birth.clone()),
            ("Guardian", draft.contact().guardian_name.clone()),
            ("Phone", draft.contact().phone.clone()),
            ("Email", draft.contact().email.clone()),
            ("Position", draft.background().position.clone()),
        ]
    });

    view! {
        <div class="wizard__summary">
            <p>
                "Program: " <strong>{move || vm.plan().display_name()}</strong>
                " (" {move || vm.plan().monthly_fee_label()} ")"
            </p>
            <dl>
                {summary.into_iter().map(|(label, value)| view! {
                    <dt>{label}</dt>
                    <dd>{value}</dd>
                }).collect_view()}
            </dl>
        </div>
        <p class="wizard__terms">
            "I confirm the information above is accurate, that the player is fit to take part in "
            "training, and I accept the academy's code of conduct, photo policy and monthly fee terms."
        </p>
        <Checkbox
            id="consent"
            label="I agree to the terms and conditions"
            checked=Signal::derive(move || form.with(|f| f.consent))
            on_change=Callback::new(move |checked| form.update(|f| f.consent = checked))
            error=vm.error_for("consent")
        />
        <StepActions vm=vm on_next=Callback::new(move |_| vm.submit_step(form.get_untracked(), on_submitted)) />
    }
}
