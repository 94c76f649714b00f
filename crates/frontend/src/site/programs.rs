use contracts::enums::CanonicalPlan;
use leptos::prelude::*;
use std::collections::HashMap;

use crate::layout::global_context::use_global_context;
use crate::routes::page::Page;
use crate::shared::division::try_normalize_division;
use crate::shared::storage;

/// `division` from a landing URL such as `/register?division=u9-u10`
pub fn division_from_query(search: &str) -> Option<String> {
    let params: HashMap<String, String> =
        serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
    params
        .get("division")
        .map(|d| d.trim().to_string())
        .filter(|d| !d.is_empty())
}

/// Remember a division passed in the address bar. Stored as given; every
/// reader normalizes.
pub fn capture_division_from_location() {
    let search = web_sys::window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default();
    if let Some(division) = division_from_query(&search) {
        log::info!("Division {:?} selected from link", division);
        storage::save_selected_division(&division);
    }
}

fn program_blurb(plan: CanonicalPlan) -> &'static str {
    match plan {
        CanonicalPlan::U5U8 => "First touches, coordination and fun small-sided games.",
        CanonicalPlan::U9U10 => "Ball mastery, passing patterns and 7v7 match play.",
        CanonicalPlan::U11U12 => "Positional play, 9v9 tactics and weekend fixtures.",
        CanonicalPlan::U13U14 => "11v11 systems, strength and league competition.",
        CanonicalPlan::U15U18 => "High-performance training and showcase tournaments.",
    }
}

#[component]
pub fn ProgramsPage() -> impl IntoView {
    let ctx = use_global_context();
    let selected = storage::get_selected_division().and_then(|d| try_normalize_division(&d));

    let choose = move |plan: CanonicalPlan| {
        storage::save_selected_division(plan.code());
        ctx.navigate(Page::Register);
    };

    view! {
        <section class="page programs">
            <h1>"Programs"</h1>
            <p class="page__lead">
                "Year-round training in five age groups. Pick your player's group to start registration."
            </p>
            <div class="programs__grid">
                {CanonicalPlan::all().into_iter().map(|plan| {
                    let (lo, hi) = plan.age_range();
                    let is_selected = selected == Some(plan);
                    view! {
                        <article class="program-card" class:program-card--selected=is_selected>
                            <h2>{plan.display_name()}</h2>
                            <p class="program-card__ages">{format!("Ages {}-{}", lo, hi)}</p>
                            <p>{program_blurb(plan)}</p>
                            <p class="program-card__fee">{plan.monthly_fee_label()}</p>
                            <button class="button button--primary" on:click=move |_| choose(plan)>
                                "Register"
                            </button>
                        </article>
                    }
                }).collect_view()}
            </div>
        </section>
    }
}
