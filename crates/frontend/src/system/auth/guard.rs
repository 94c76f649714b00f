use leptos::prelude::*;

use super::context::use_auth;
use crate::system::pages::login::LoginPage;

/// Renders `children` for a signed-in staff member, the login form otherwise
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let (auth_state, _) = use_auth();

    view! {
        <Show
            when=move || auth_state.with(|s| s.is_authenticated())
            fallback=|| view! { <LoginPage /> }
        >
            {children()}
        </Show>
    }
}
