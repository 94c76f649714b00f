use crate::layout::global_context::AppGlobalContext;
use crate::routes::routes::AppRoutes;
use crate::site::programs::capture_division_from_location;
use crate::system::auth::context::AuthProvider;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Provide the AppGlobalContext store to the whole app via context.
    provide_context(AppGlobalContext::new());

    // Program links land with ?division=...; remember it before any page reads storage
    capture_division_from_location();

    view! {
        <AuthProvider>
            <AppRoutes />
        </AuthProvider>
    }
}
