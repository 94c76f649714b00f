use contracts::domain::registration::PaymentStatus;
use leptos::prelude::*;

/// Badge component with different variants
#[component]
pub fn Badge(
    /// Badge variant: "primary", "success", "warning", "error", "neutral" (default)
    #[prop(optional, into)]
    variant: MaybeProp<String>,
    /// Badge content
    children: Children,
) -> impl IntoView {
    let variant_class = move || match variant.get().as_deref().unwrap_or("neutral") {
        "primary" => "badge--primary",
        "success" => "badge--success",
        "warning" => "badge--warning",
        "error" => "badge--error",
        _ => "badge--neutral",
    };

    view! {
        <span class=move || format!("badge {}", variant_class())>
            {children()}
        </span>
    }
}

/// Registrant payment state as a colored badge
#[component]
pub fn PaymentBadge(#[prop(into)] status: Signal<PaymentStatus>) -> impl IntoView {
    let status_class = move || match status.get() {
        PaymentStatus::Paid => "badge badge--status badge--success",
        PaymentStatus::Pending => "badge badge--status badge--warning",
        PaymentStatus::Unpaid => "badge badge--status badge--error",
    };

    view! {
        <span class=status_class>
            {move || status.get().display_name()}
        </span>
    }
}
