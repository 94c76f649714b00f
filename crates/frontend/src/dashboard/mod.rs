//! Staff dashboard: content management and registrant payments

pub mod gallery;
pub mod matches;
pub mod messages;
pub mod player_month;
pub mod profile;
pub mod registrants;
pub mod upload;

use leptos::prelude::*;

use crate::layout::DashboardShell;
use crate::routes::page::DashboardSection;
use crate::system::auth::guard::RequireAuth;

/// Ask before deleting; `false` when the browser refuses to show the dialog
pub fn confirm_delete(what: &str) -> bool {
    web_sys::window()
        .and_then(|w| {
            w.confirm_with_message(&format!("Delete {}? This cannot be undone.", what))
                .ok()
        })
        .unwrap_or(false)
}

/// A dashboard section behind the staff login
#[component]
pub fn DashboardPage(section: DashboardSection) -> impl IntoView {
    view! {
        <RequireAuth>
            <DashboardShell>
                {match section {
                    DashboardSection::Registrants => view! { <registrants::RegistrantsPage /> }.into_any(),
                    DashboardSection::Matches => view! { <matches::MatchesPage /> }.into_any(),
                    DashboardSection::Messages => view! { <messages::MessagesPage /> }.into_any(),
                    DashboardSection::Gallery => view! { <gallery::GalleryPage /> }.into_any(),
                    DashboardSection::PlayerMonth => view! { <player_month::PlayerMonthPage /> }.into_any(),
                    DashboardSection::Profile => view! { <profile::ProfilePage /> }.into_any(),
                }}
            </DashboardShell>
        </RequireAuth>
    }
}
