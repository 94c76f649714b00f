use leptos::prelude::*;

use crate::layout::global_context::use_global_context;
use crate::routes::page::{DashboardSection, Page};
use crate::shared::icons::icon;

const NAV_ITEMS: &[(Page, &str)] = &[
    (Page::Home, "Home"),
    (Page::Programs, "Programs"),
    (Page::Contact, "Contact"),
];

/// Public site header with the main navigation
#[component]
pub fn Header() -> impl IntoView {
    let ctx = use_global_context();

    view! {
        <header data-zone="header" class="site-header">
            <a class="site-header__brand" href="/"
                on:click=move |ev| {
                    ev.prevent_default();
                    ctx.navigate(Page::Home);
                }>
                "Northside Youth Soccer Academy"
            </a>
            <button class="site-header__toggle" title="Menu" on:click=move |_| ctx.toggle_nav()>
                {icon("menu")}
            </button>
            <nav class="site-header__nav" class:site-header__nav--open=move || ctx.nav_open.get()>
                {NAV_ITEMS.iter().map(|&(page, title)| view! {
                    <a
                        href=page.path()
                        class="site-header__link"
                        class:site-header__link--active=move || ctx.page.get() == page
                        on:click=move |ev| {
                            ev.prevent_default();
                            ctx.navigate(page);
                        }
                    >
                        {title}
                    </a>
                }).collect_view()}
                <a href=Page::Register.path() class="button button--primary"
                    on:click=move |ev| {
                        ev.prevent_default();
                        ctx.navigate(Page::Register);
                    }>
                    "Register"
                </a>
                <a href=Page::Dashboard(DashboardSection::Registrants).path() class="site-header__link site-header__link--staff"
                    on:click=move |ev| {
                        ev.prevent_default();
                        ctx.navigate(Page::Dashboard(DashboardSection::Registrants));
                    }>
                    "Staff"
                </a>
            </nav>
        </header>
    }
}
