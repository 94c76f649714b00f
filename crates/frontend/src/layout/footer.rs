use chrono::Datelike;
use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    let year = chrono::Local::now().year();

    view! {
        <footer data-zone="footer" class="site-footer">
            <span>{format!("© {} Northside Youth Soccer Academy", year)}</span>
            <span class="site-footer__contact">"info@northsidesoccer.ca"</span>
        </footer>
    }
}
