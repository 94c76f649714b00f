use contracts::domain::player_month::PlayerOfMonth;
use leptos::prelude::*;
use leptos::task::spawn_local;
use web_sys::File;

use super::api;
use super::form::PlayerMonthForm;
use crate::dashboard::confirm_delete;
use crate::dashboard::upload::ImageMeta;
use crate::shared::components::ui::{Button, FileInput, Input, Textarea};
use crate::shared::date_utils::format_month;
use crate::shared::forms::{bind, field_error};
use crate::shared::icons::icon;
use crate::shared::validation::FieldErrors;

#[component]
pub fn PlayerMonthPage() -> impl IntoView {
    let items = RwSignal::new(Vec::<PlayerOfMonth>::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (loading, set_loading) = signal(false);

    let load_data = move || {
        set_loading.set(true);
        set_error.set(None);
        spawn_local(async move {
            match api::fetch_entries().await {
                Ok(mut data) => {
                    data.sort_by(|a, b| b.month.cmp(&a.month));
                    items.set(data);
                }
                Err(e) => {
                    log::error!("Failed to load player of the month entries: {}", e);
                    set_error.set(Some(format!("Could not load entries: {}", e.user_message())));
                }
            }
            set_loading.set(false);
        });
    };

    Effect::new(move |_| load_data());

    let delete = move |id: i64, name: String| {
        if !confirm_delete(&name) {
            return;
        }
        spawn_local(async move {
            match api::delete_entry(id).await {
                Ok(()) => {
                    log::info!("Player of the month {} deleted", id);
                    items.update(|list| list.retain(|p| p.id != id));
                }
                Err(e) => set_error.set(Some(e.user_message())),
            }
        });
    };

    view! {
        <div class="page">
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Player of the month"</h1>
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

                <PlayerMonthUpload on_uploaded=Callback::new(move |_| load_data()) />

                <div class="player-list">
                    <For
                        each=move || items.get()
                        key=|p| p.id
                        children=move |p: PlayerOfMonth| {
                            let id = p.id;
                            let name = p.name.clone();
                            view! {
                                <article class="card player">
                                    <img class="player__photo" src=p.image_url.clone() alt=p.name.clone() />
                                    <div class="player__body">
                                        <span class="player__month">{format_month(&p.month)}</span>
                                        <h3 class="player__name">{p.name.clone()}</h3>
                                        {p.description.clone().map(|d| view! { <p>{d}</p> })}
                                    </div>
                                    <Button variant="danger"
                                        on_click=Callback::new(move |_| delete(id, name.clone()))>
                                        {icon("trash")}
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

#[component]
fn PlayerMonthUpload(on_uploaded: Callback<PlayerOfMonth>) -> impl IntoView {
    let form = RwSignal::new(PlayerMonthForm::default());
    let image = StoredValue::new_local(None::<File>);
    let image_name = RwSignal::new(None::<String>);
    let errors = RwSignal::new(FieldErrors::new());
    let uploading = RwSignal::new(false);
    let upload_error = RwSignal::new(None::<String>);

    let (name, set_name) = bind(form, |f| f.name.clone(), |f, v| f.name = v);
    let (month, set_month) = bind(form, |f| f.month.clone(), |f, v| f.month = v);
    let (description, set_description) = bind(form, |f| f.description.clone(), |f, v| f.description = v);

    let on_file = Callback::new(move |file: File| {
        image_name.set(Some(file.name()));
        image.set_value(Some(file));
    });

    let upload = move |_| {
        let current = form.get_untracked();
        let file = image.get_value();
        let meta = file.as_ref().map(ImageMeta::from_file);
        if let Err(e) = current.validate(meta.as_ref()) {
            errors.set(e);
            return;
        }
        let Some(file) = file else { return };
        errors.set(FieldErrors::new());
        upload_error.set(None);
        uploading.set(true);

        spawn_local(async move {
            match api::upload_entry(&current, &file).await {
                Ok(entry) => {
                    log::info!("Player of the month {} uploaded for {}", entry.id, entry.month);
                    form.set(PlayerMonthForm::default());
                    image.set_value(None);
                    image_name.set(None);
                    on_uploaded.run(entry);
                }
                Err(e) => {
                    log::error!("Player of the month upload failed: {}", e);
                    upload_error.set(Some(e.user_message()));
                }
            }
            uploading.set(false);
        });
    };

    view! {
        <div class="card editor">
            <h2 class="card__title">"New player of the month"</h2>
            {move || upload_error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}
            <div class="form__row">
                <Input label="Player name" id="potm_name" required=true
                    value=name on_input=set_name error=field_error(errors, "name") />
                <Input label="Month" id="potm_month" input_type="month" required=true
                    value=month on_input=set_month error=field_error(errors, "month") />
            </div>
            <Textarea label="Description" id="potm_description" rows=3 max_length=500
                value=description on_input=set_description error=field_error(errors, "description") />
            <FileInput label="Photo" id="potm_image" accept="image/*" required=true
                file_name=image_name
                error=field_error(errors, "image")
                on_file=on_file />
            <Button busy=uploading on_click=Callback::new(upload)>
                {icon("plus")}
                " Publish"
            </Button>
        </div>
    }
}
