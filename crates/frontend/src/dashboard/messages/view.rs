use contracts::domain::messages::MessageDto;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::api;
use crate::dashboard::confirm_delete;
use crate::shared::components::ui::{Badge, Button};
use crate::shared::date_utils::format_datetime;
use crate::shared::icons::icon;

/// Newest first; undated messages go last
fn newest_first(items: &mut [MessageDto]) {
    items.sort_by(|a, b| b.created_at.cmp(&a.created_at));
}

#[component]
pub fn MessagesPage() -> impl IntoView {
    let items = RwSignal::new(Vec::<MessageDto>::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (loading, set_loading) = signal(false);

    let load_data = move || {
        set_loading.set(true);
        set_error.set(None);
        spawn_local(async move {
            match api::fetch_messages().await {
                Ok(mut data) => {
                    newest_first(&mut data);
                    items.set(data);
                }
                Err(e) => {
                    log::error!("Failed to load messages: {}", e);
                    set_error.set(Some(format!("Could not load messages: {}", e.user_message())));
                }
            }
            set_loading.set(false);
        });
    };

    Effect::new(move |_| load_data());

    let delete = move |id: i64, sender: String| {
        if !confirm_delete(&format!("the message from {}", sender)) {
            return;
        }
        spawn_local(async move {
            match api::delete_message(id).await {
                Ok(()) => {
                    log::info!("Message {} deleted", id);
                    items.update(|list| list.retain(|m| m.id != id));
                }
                Err(e) => set_error.set(Some(e.user_message())),
            }
        });
    };

    view! {
        <div class="page">
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Messages"</h1>
                    <Badge>{move || items.with(|m| m.len().to_string())}</Badge>
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

                <Show when=move || items.with(|m| m.is_empty()) && !loading.get()>
                    <p class="table__empty">"No messages yet."</p>
                </Show>

                <div class="messages">
                    <For
                        each=move || items.get()
                        key=|m| m.id
                        children=move |m: MessageDto| {
                            let id = m.id;
                            let sender = m.name.clone();
                            let reply_to = format!("mailto:{}", m.email);
                            view! {
                                <article class="card message">
                                    <header class="message__header">
                                        <strong>{m.name.clone()}</strong>
                                        <a href=reply_to>{m.email.clone()}</a>
                                        {m.phone.clone().map(|p| view! { <span>{p}</span> })}
                                        <span class="message__date">
                                            {m.created_at.as_deref().map(format_datetime)}
                                        </span>
                                    </header>
                                    <p class="message__body">{m.message.clone()}</p>
                                    <Button variant="danger"
                                        on_click=Callback::new(move |_| delete(id, sender.clone()))>
                                        {icon("trash")}
                                        " Delete"
                                    </Button>
                                </article>
                            }
                        }
                    />
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message(id: i64, created_at: Option<&str>) -> MessageDto {
        MessageDto {
            id,
            name: "Parent".to_string(),
            email: "parent@example.com".to_string(),
            phone: None,
            message: "When do tryouts start?".to_string(),
            created_at: created_at.map(str::to_string),
        }
    }

    #[test]
    fn test_newest_first() {
        let mut items = vec![
            message(1, Some("2026-09-01T10:00:00Z")),
            message(2, None),
            message(3, Some("2026-10-02T08:00:00Z")),
        ];
        newest_first(&mut items);
        assert_eq!(items.iter().map(|m| m.id).collect::<Vec<_>>(), vec![3, 1, 2]);
    }
}
