pub mod footer;
pub mod global_context;
pub mod header;
pub mod sidebar;
pub mod top_header;

use leptos::prelude::*;

use footer::Footer;
use header::Header;
use sidebar::Sidebar;
use top_header::TopHeader;

/// Public site layout
///
/// ```text
/// +------------------------------+
/// |           Header             |
/// +------------------------------+
/// |           Content            |
/// +------------------------------+
/// |           Footer             |
/// +------------------------------+
/// ```
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    view! {
        <div class="site-layout">
            <Header />
            <main class="site-main">{children()}</main>
            <Footer />
        </div>
    }
}

/// Staff dashboard layout
///
/// ```text
/// +------------------------------+
/// |          TopHeader           |
/// +---------+--------------------+
/// | Sidebar |      Content       |
/// +---------+--------------------+
/// ```
#[component]
pub fn DashboardShell(children: Children) -> impl IntoView {
    view! {
        <div class="app-layout">
            <TopHeader />
            <div class="app-body">
                <aside data-zone="left" class="app-sidebar">
                    <Sidebar />
                </aside>
                <div class="app-main">{children()}</div>
            </div>
        </div>
    }
}
