//! Dashboard navigation

use leptos::prelude::*;

use crate::layout::global_context::use_global_context;
use crate::routes::page::{DashboardSection, Page};
use crate::shared::icons::icon;

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_global_context();

    view! {
        <nav class="app-sidebar__content">
            {DashboardSection::all().into_iter().map(|section| {
                let page = Page::Dashboard(section);
                view! {
                    <div
                        class="app-sidebar__item"
                        class:app-sidebar__item--active=move || ctx.page.get() == page
                        on:click=move |_| ctx.navigate(page)
                    >
                        {icon(section.icon())}
                        <span class="app-sidebar__label">{section.title()}</span>
                    </div>
                }
            }).collect_view()}
        </nav>
    }
}
