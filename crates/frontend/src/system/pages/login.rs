use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::components::ui::{Button, Input};
use crate::system::auth::context::{do_login, use_auth};

#[component]
pub fn LoginPage() -> impl IntoView {
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error_message, set_error_message) = signal(Option::<String>::None);
    let (is_loading, set_is_loading) = signal(false);

    let (auth_state, set_auth_state) = use_auth();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let email_val = email.get_untracked().trim().to_string();
        let password_val = password.get_untracked();
        if email_val.is_empty() || password_val.is_empty() {
            set_error_message.set(Some("Enter your email and password".to_string()));
            return;
        }

        set_is_loading.set(true);
        set_error_message.set(None);

        spawn_local(async move {
            if let Err(e) = do_login(email_val, password_val, set_auth_state).await {
                log::warn!("Staff login failed: {}", e);
                let message = match e {
                    crate::shared::http::ApiError::Unauthorized => {
                        "Incorrect email or password".to_string()
                    }
                    other => other.user_message(),
                };
                set_error_message.set(Some(message));
            }
            set_is_loading.set(false);
        });
    };

    view! {
        <div class="login-container">
            <div class="login-box">
                <h1>"Staff sign in"</h1>

                <Show when=move || auth_state.with(|s| s.restoring)>
                    <p class="login-box__hint">"Checking your session..."</p>
                </Show>

                {move || error_message.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

                <form on:submit=on_submit>
                    <Input
                        label="Email"
                        id="login_email"
                        input_type="email"
                        autocomplete="username"
                        value=email
                        on_input=Callback::new(move |v| set_email.set(v))
                        disabled=is_loading
                    />
                    <Input
                        label="Password"
                        id="login_password"
                        input_type="password"
                        autocomplete="current-password"
                        value=password
                        on_input=Callback::new(move |v| set_password.set(v))
                        disabled=is_loading
                    />
                    <Button button_type="submit" busy=is_loading>"Sign in"</Button>
                </form>
            </div>
        </div>
    }
}
