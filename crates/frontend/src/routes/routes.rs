use leptos::prelude::*;

use crate::dashboard::DashboardPage;
use crate::layout::global_context::use_global_context;
use crate::layout::Shell;
use crate::payment::ui::PaymentPage;
use crate::registration::ui::RegistrationPage;
use crate::routes::page::{DashboardSection, Page};
use crate::site::{ContactPage, HomePage, ProgramsPage};
use crate::system::auth::context::use_auth;
use crate::system::pages::login::LoginPage;

#[component]
fn NotFoundPage() -> impl IntoView {
    let ctx = use_global_context();
    view! {
        <section class="page not-found">
            <h1>"Page not found"</h1>
            <p>"The page you were looking for does not exist."</p>
            <button class="button button--primary" on:click=move |_| ctx.navigate(Page::Home)>
                "Back to home"
            </button>
        </section>
    }
}

/// Staff login route; a signed-in member goes straight to the dashboard
#[component]
fn StaffLoginPage() -> impl IntoView {
    let ctx = use_global_context();
    let (auth_state, _) = use_auth();

    Effect::new(move |_| {
        if auth_state.with(|s| s.is_authenticated()) {
            ctx.navigate(Page::Dashboard(DashboardSection::Registrants));
        }
    });

    view! { <LoginPage /> }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    let ctx = use_global_context();

    // Initialize router integration. This runs once when the component is created.
    ctx.init_router_integration();

    move || match ctx.page.get() {
        Page::Dashboard(section) => view! { <DashboardPage section=section /> }.into_any(),
        Page::StaffLogin => view! { <StaffLoginPage /> }.into_any(),
        page => view! {
            <Shell>
                {match page {
                    Page::Home => view! { <HomePage /> }.into_any(),
                    Page::Programs => view! { <ProgramsPage /> }.into_any(),
                    Page::Contact => view! { <ContactPage /> }.into_any(),
                    Page::Register => view! { <RegistrationPage /> }.into_any(),
                    Page::Payment => view! { <PaymentPage /> }.into_any(),
                    _ => view! { <NotFoundPage /> }.into_any(),
                }}
            </Shell>
        }
        .into_any(),
    }
}
