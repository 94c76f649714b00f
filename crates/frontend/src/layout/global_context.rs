use leptos::prelude::*;
use web_sys::window;

use crate::routes::page::Page;

/// App-wide navigation state; the address bar mirrors `page`
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub page: RwSignal<Page>,
    pub nav_open: RwSignal<bool>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        let path = window()
            .and_then(|w| w.location().pathname().ok())
            .unwrap_or_default();
        Self {
            page: RwSignal::new(Page::from_path(&path)),
            nav_open: RwSignal::new(false),
        }
    }

    /// Keep the page in sync with back/forward buttons
    pub fn init_router_integration(&self) {
        let page = self.page;
        let handle = window_event_listener(leptos::ev::popstate, move |_| {
            let path = window()
                .and_then(|w| w.location().pathname().ok())
                .unwrap_or_default();
            page.set(Page::from_path(&path));
        });
        on_cleanup(move || handle.remove());
    }

    /// Show `target` and push its path
    pub fn navigate(&self, target: Page) {
        self.navigate_with_query(target, None);
    }

    pub fn navigate_with_query(&self, target: Page, query: Option<&str>) {
        let url = match query {
            Some(q) if !q.is_empty() => format!("{}?{}", target.path(), q),
            _ => target.path(),
        };
        if let Some(w) = window() {
            if let Ok(history) = w.history() {
                let _ = history.push_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(&url));
            }
            w.scroll_to_with_x_and_y(0.0, 0.0);
        }
        log::debug!("navigate: {}", url);
        self.nav_open.set(false);
        self.page.set(target);
    }

    pub fn toggle_nav(&self) {
        self.nav_open.update(|open| *open = !*open);
    }
}

pub fn use_global_context() -> AppGlobalContext {
    use_context::<AppGlobalContext>().unwrap_or_else(|| {
        let ctx = AppGlobalContext::new();
        provide_context(ctx);
        ctx
    })
}
