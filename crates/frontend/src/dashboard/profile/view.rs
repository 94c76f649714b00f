use leptos::prelude::*;
use leptos::task::spawn_local;

use super::form::ProfileForm;
use crate::shared::components::ui::{Button, Input};
use crate::shared::forms::{bind, field_error};
use crate::shared::validation::FieldErrors;
use crate::system::auth::api;
use crate::system::auth::context::use_auth;

#[component]
pub fn ProfilePage() -> impl IntoView {
    let (_, set_auth_state) = use_auth();
    let form = RwSignal::new(ProfileForm::default());
    let errors = RwSignal::new(FieldErrors::new());
    let (loading, set_loading) = signal(true);
    let saving = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);
    let saved = RwSignal::new(false);

    let (name, set_name) = bind(form, |f| f.name.clone(), |f, v| f.name = v);
    let (email, set_email) = bind(form, |f| f.email.clone(), |f, v| f.email = v);
    let (password, set_password) = bind(form, |f| f.password.clone(), |f, v| f.password = v);
    let (confirm, set_confirm) =
        bind(form, |f| f.confirm_password.clone(), |f, v| f.confirm_password = v);

    Effect::new(move |_| {
        spawn_local(async move {
            match api::get_current_admin().await {
                Ok(profile) => form.set(ProfileForm::from_profile(&profile)),
                Err(e) => {
                    log::error!("Failed to load profile: {}", e);
                    error.set(Some(e.user_message()));
                }
            }
            set_loading.set(false);
        });
    });

    let save = move |_| {
        let update = match form.get_untracked().validate() {
            Ok(update) => update,
            Err(e) => {
                errors.set(e);
                return;
            }
        };
        errors.set(FieldErrors::new());
        error.set(None);
        saved.set(false);
        saving.set(true);

        spawn_local(async move {
            match api::update_current_admin(&update).await {
                Ok(profile) => {
                    log::info!("Profile updated for {}", profile.email);
                    form.set(ProfileForm::from_profile(&profile));
                    set_auth_state.update(|s| s.admin = Some(profile));
                    saved.set(true);
                }
                Err(e) => {
                    log::error!("Failed to update profile: {}", e);
                    error.set(Some(e.user_message()));
                }
            }
            saving.set(false);
        });
    };

    view! {
        <div class="page">
            <div class="page__header">
                <h1 class="page__title">"My profile"</h1>
            </div>
            <div class="page__content">
                {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}
                <Show when=move || saved.get()>
                    <div class="alert alert--success">"Profile saved."</div>
                </Show>

                <div class="card editor">
                    <Input label="Name" id="profile_name" required=true
                        value=name on_input=set_name error=field_error(errors, "name")
                        disabled=loading />
                    <Input label="Email" id="profile_email" input_type="email" required=true
                        value=email on_input=set_email error=field_error(errors, "email")
                        disabled=loading />
                    <div class="form__row">
                        <Input label="New password" id="profile_password" input_type="password"
                            autocomplete="new-password" placeholder="Leave blank to keep"
                            value=password on_input=set_password error=field_error(errors, "password") />
                        <Input label="Confirm password" id="profile_confirm" input_type="password"
                            autocomplete="new-password"
                            value=confirm on_input=set_confirm error=field_error(errors, "confirm_password") />
                    </div>
                    <Button busy=saving on_click=Callback::new(save)>"Save changes"</Button>
                </div>
            </div>
        </div>
    }
}
