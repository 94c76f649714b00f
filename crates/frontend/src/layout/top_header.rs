use leptos::prelude::*;

use crate::layout::global_context::use_global_context;
use crate::routes::page::Page;
use crate::shared::icons::icon;
use crate::system::auth::context::{do_logout, use_auth};

/// Dashboard top bar: section title, signed-in staff member, logout
#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx = use_global_context();
    let (auth_state, set_auth_state) = use_auth();

    let title = move || match ctx.page.get() {
        Page::Dashboard(section) => section.title(),
        _ => "Dashboard",
    };
    let admin_name = move || auth_state.with(|s| s.admin.as_ref().map(|a| a.name.clone()));

    let logout = move |_| {
        do_logout(set_auth_state);
        ctx.navigate(Page::StaffLogin);
    };

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <a class="top-header__home" href="/"
                    on:click=move |ev| {
                        ev.prevent_default();
                        ctx.navigate(Page::Home);
                    }>
                    "Academy"
                </a>
                <span class="top-header__title">{title}</span>
            </div>
            <div class="top-header__actions">
                {move || admin_name().map(|name| view! {
                    <span class="top-header__user">{icon("user")}{name}</span>
                })}
                <button class="top-header__icon-btn" title="Log out" on:click=logout>
                    {icon("logout")}
                </button>
            </div>
        </div>
    }
}
