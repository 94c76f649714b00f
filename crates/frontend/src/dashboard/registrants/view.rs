use contracts::domain::registration::{PaymentStatus, Registrant};
use contracts::enums::CanonicalPlan;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::api;
use super::state::create_state;
use crate::shared::components::ui::{options, Badge, Button, Input, PaymentBadge, Select};
use crate::shared::date_utils::format_datetime;
use crate::shared::icons::icon;
use crate::shared::list_utils::{get_sort_indicator, SearchInput};

const STATUS_FILTER_OPTIONS: &[(&str, &str)] = &[
    ("unpaid", "Unpaid"),
    ("pending", "Pending verification"),
    ("paid", "Paid"),
];

fn status_from_value(value: &str) -> Option<PaymentStatus> {
    match value {
        "unpaid" => Some(PaymentStatus::Unpaid),
        "pending" => Some(PaymentStatus::Pending),
        "paid" => Some(PaymentStatus::Paid),
        _ => None,
    }
}

fn status_value(status: Option<PaymentStatus>) -> &'static str {
    match status {
        Some(PaymentStatus::Unpaid) => "unpaid",
        Some(PaymentStatus::Pending) => "pending",
        Some(PaymentStatus::Paid) => "paid",
        None => "",
    }
}

fn plan_label(plan: Option<&str>) -> String {
    plan.and_then(CanonicalPlan::from_code)
        .map(|p| p.display_name().to_string())
        .or_else(|| plan.map(str::to_string))
        .unwrap_or_else(|| "-".to_string())
}

#[component]
pub fn RegistrantsPage() -> impl IntoView {
    let state = create_state();
    let (error, set_error) = signal::<Option<String>>(None);
    let (loading, set_loading) = signal(false);
    let updating = RwSignal::new(None::<i64>);

    let load_data = move || {
        set_loading.set(true);
        set_error.set(None);
        spawn_local(async move {
            match api::fetch_registrants().await {
                Ok(data) => {
                    log::info!("Loaded {} registrants", data.len());
                    state.update(|s| {
                        s.items = data;
                        s.is_loaded = true;
                    });
                }
                Err(e) => {
                    log::error!("Failed to load registrants: {}", e);
                    set_error.set(Some(format!("Could not load registrants: {}", e.user_message())));
                }
            }
            set_loading.set(false);
        });
    };

    Effect::new(move |_| {
        if !state.with_untracked(|s| s.is_loaded) {
            load_data();
        }
    });

    let set_payment = move |id: i64, status: PaymentStatus| {
        updating.set(Some(id));
        set_error.set(None);
        spawn_local(async move {
            match api::update_payment_status(id, status).await {
                Ok(()) => {
                    log::info!("Registrant {} marked {}", id, status.display_name());
                    state.update(|s| s.set_status(id, status));
                }
                Err(e) => {
                    log::error!("Failed to update registrant {}: {}", id, e);
                    set_error.set(Some(e.user_message()));
                }
            }
            updating.set(None);
        });
    };

    let header = move |field: &'static str, title: &'static str| {
        view! {
            <th class="table__header--sortable" on:click=move |_| state.update(|s| s.toggle_sort(field))>
                {title}
                {move || state.with(|s| get_sort_indicator(&s.sort_field, field, s.sort_ascending))}
            </th>
        }
    };

    view! {
        <div class="page">
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Registrants"</h1>
                    <Badge>{move || state.with(|s| s.items.len().to_string())}</Badge>
                    <Badge variant="success">
                        {move || format!("{} paid", state.with(|s| s.count_with(PaymentStatus::Paid)))}
                    </Badge>
                </div>
                <div class="page__header-right">
                    <Button variant="secondary" busy=loading on_click=Callback::new(move |_| load_data())>
                        {icon("refresh")}
                        " Refresh"
                    </Button>
                </div>
            </div>

            <div class="page__content">
                {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

                <div class="filter-panel">
                    <SearchInput
                        value=Signal::derive(move || state.with(|s| s.search_query.clone()))
                        on_change=Callback::new(move |q| state.update(|s| s.search_query = q))
                        placeholder="Search by name or phone"
                    />
                    <Select
                        value=Signal::derive(move || state.with(|s| status_value(s.status_filter).to_string()))
                        on_change=Callback::new(move |v: String| state.update(|s| s.status_filter = status_from_value(&v)))
                        options=options(STATUS_FILTER_OPTIONS)
                        placeholder="All statuses"
                    />
                </div>

                <PhoneLookup />

                <table class="table">
                    <thead>
                        <tr>
                            {header("full_name", "Player")}
                            {header("phone", "Phone")}
                            {header("plan", "Division")}
                            {header("payment_status", "Payment")}
                            {header("created_at", "Registered")}
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || state.with(|s| s.visible())
                            key=|r| (r.id, r.payment_status)
                            children=move |r: Registrant| {
                                let id = r.id;
                                let status = r.payment_status;
                                let busy = Signal::derive(move || updating.get() == Some(id));
                                let (next, next_label, variant) = if status == PaymentStatus::Paid {
                                    (PaymentStatus::Unpaid, "Mark unpaid", "ghost")
                                } else {
                                    (PaymentStatus::Paid, "Mark paid", "primary")
                                };
                                view! {
                                    <tr>
                                        <td>
                                            <div class="table__primary">{r.full_name.clone()}</div>
                                            {r.guardian_name.clone().map(|g| view! {
                                                <div class="table__secondary">{format!("Guardian: {}", g)}</div>
                                            })}
                                        </td>
                                        <td>{r.phone.clone()}</td>
                                        <td>{plan_label(r.plan.as_deref())}</td>
                                        <td><PaymentBadge status=status /></td>
                                        <td>{r.created_at.as_deref().map(format_datetime).unwrap_or_else(|| "-".to_string())}</td>
                                        <td>
                                            <Button variant=variant busy=busy
                                                on_click=Callback::new(move |_| set_payment(id, next))>
                                                {next_label}
                                            </Button>
                                        </td>
                                    </tr>
                                }
                            }
                        />
                    </tbody>
                </table>

                <Show when=move || state.with(|s| s.is_loaded && s.visible().is_empty())>
                    <p class="table__empty">"No registrants match the current filters."</p>
                </Show>
            </div>
        </div>
    }
}

/// Direct lookup by the phone a family registered with
#[component]
fn PhoneLookup() -> impl IntoView {
    let phone = RwSignal::new(String::new());
    let result = RwSignal::new(None::<Registrant>);
    let message = RwSignal::new(None::<String>);
    let searching = RwSignal::new(false);

    let lookup = move |_| {
        let value = phone.get_untracked();
        if value.trim().is_empty() {
            message.set(Some("Enter a phone number".to_string()));
            return;
        }
        searching.set(true);
        message.set(None);
        result.set(None);
        spawn_local(async move {
            match api::fetch_by_phone(&value).await {
                Ok(found) => result.set(Some(found)),
                Err(e) => {
                    log::warn!("Phone lookup for {} failed: {}", value, e);
                    message.set(Some(match e {
                        crate::shared::http::ApiError::Status { status: 404, .. } => {
                            "No registrant with that phone number".to_string()
                        }
                        other => other.user_message(),
                    }));
                }
            }
            searching.set(false);
        });
    };

    view! {
        <div class="lookup">
            <Input label="Find by phone" id="lookup_phone" input_type="tel"
                value=phone
                on_input=Callback::new(move |v| phone.set(v)) />
            <Button variant="secondary" busy=searching on_click=Callback::new(lookup)>"Look up"</Button>
            {move || message.get().map(|m| view! { <p class="lookup__message">{m}</p> })}
            {move || result.get().map(|r| view! {
                <div class="lookup__result">
                    <strong>{r.full_name.clone()}</strong>
                    " · "
                    {plan_label(r.plan.as_deref())}
                    " · "
                    <PaymentBadge status=r.payment_status />
                    {r.email.clone().map(|e| view! { <span class="lookup__email">{format!(" · {}", e)}</span> })}
                </div>
            })}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_filter_values() {
        for status in [PaymentStatus::Unpaid, PaymentStatus::Pending, PaymentStatus::Paid] {
            assert_eq!(status_from_value(status_value(Some(status))), Some(status));
        }
        assert_eq!(status_from_value(""), None);
    }

    #[test]
    fn test_plan_label() {
        assert_eq!(plan_label(Some("U5_U8")), "Under 5 – Under 8");
        assert_eq!(plan_label(Some("legacy")), "legacy");
        assert_eq!(plan_label(None), "-");
    }
}
