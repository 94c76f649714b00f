use contracts::domain::gallery::GalleryItem;
use leptos::prelude::*;
use leptos::task::spawn_local;
use web_sys::File;

use super::api;
use crate::dashboard::confirm_delete;
use crate::dashboard::upload::{require_image, ImageMeta};
use crate::shared::components::ui::{Button, FileInput, Input};
use crate::shared::forms::field_error;
use crate::shared::icons::icon;
use crate::shared::validation::{FieldErrors, ValidationRules};

fn validate_upload(title: &str, image: Option<&ImageMeta>) -> Result<(), FieldErrors> {
    let mut errors = FieldErrors::new();
    errors.check("title", "Title", title, ValidationRules::required().with_max_length(100));
    require_image(&mut errors, image);
    errors.into_result()
}

#[component]
pub fn GalleryPage() -> impl IntoView {
    let items = RwSignal::new(Vec::<GalleryItem>::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (loading, set_loading) = signal(false);

    let load_data = move || {
        set_loading.set(true);
        set_error.set(None);
        spawn_local(async move {
            match api::fetch_gallery().await {
                Ok(data) => items.set(data),
                Err(e) => {
                    log::error!("Failed to load gallery: {}", e);
                    set_error.set(Some(format!("Could not load the gallery: {}", e.user_message())));
                }
            }
            set_loading.set(false);
        });
    };

    Effect::new(move |_| load_data());

    let delete = move |id: i64, title: String| {
        if !confirm_delete(&title) {
            return;
        }
        spawn_local(async move {
            match api::delete_image(id).await {
                Ok(()) => {
                    log::info!("Gallery image {} deleted", id);
                    items.update(|list| list.retain(|i| i.id != id));
                }
                Err(e) => set_error.set(Some(e.user_message())),
            }
        });
    };

    let on_uploaded = Callback::new(move |item: GalleryItem| {
        items.update(|list| list.insert(0, item));
    });

    view! {
        <div class="page">
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Gallery"</h1>
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

                <GalleryUpload on_uploaded=on_uploaded />

                <div class="gallery-grid">
                    <For
                        each=move || items.get()
                        key=|i| i.id
                        children=move |item: GalleryItem| {
                            let id = item.id;
                            let title = item.title.clone();
                            view! {
                                <figure class="gallery-grid__item">
                                    <img src=item.image_url.clone() alt=item.title.clone() loading="lazy" />
                                    <figcaption>{item.title.clone()}</figcaption>
                                    <Button variant="danger"
                                        on_click=Callback::new(move |_| delete(id, title.clone()))>
                                        {icon("trash")}
                                    </Button>
                                </figure>
                            }
                        }
                    />
                </div>
            </div>
        </div>
    }
}

#[component]
fn GalleryUpload(on_uploaded: Callback<GalleryItem>) -> impl IntoView {
    let title = RwSignal::new(String::new());
    let image = StoredValue::new_local(None::<File>);
    let image_name = RwSignal::new(None::<String>);
    let errors = RwSignal::new(FieldErrors::new());
    let uploading = RwSignal::new(false);
    let upload_error = RwSignal::new(None::<String>);

    let on_file = Callback::new(move |file: File| {
        image_name.set(Some(file.name()));
        image.set_value(Some(file));
    });

    let upload = move |_| {
        let current_title = title.get_untracked();
        let file = image.get_value();
        let meta = file.as_ref().map(ImageMeta::from_file);
        if let Err(e) = validate_upload(&current_title, meta.as_ref()) {
            errors.set(e);
            return;
        }
        let Some(file) = file else { return };
        errors.set(FieldErrors::new());
        upload_error.set(None);
        uploading.set(true);

        spawn_local(async move {
            match api::upload_image(&current_title, &file).await {
                Ok(item) => {
                    log::info!("Gallery image {} uploaded", item.id);
                    title.set(String::new());
                    image.set_value(None);
                    image_name.set(None);
                    on_uploaded.run(item);
                }
                Err(e) => {
                    log::error!("Gallery upload failed: {}", e);
                    upload_error.set(Some(e.user_message()));
                }
            }
            uploading.set(false);
        });
    };

    view! {
        <div class="card editor">
            <h2 class="card__title">"Add a photo"</h2>
            {move || upload_error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}
            <div class="form__row">
                <Input label="Title" id="gallery_title" required=true
                    value=title
                    on_input=Callback::new(move |v| title.set(v))
                    error=field_error(errors, "title") />
                <FileInput label="Image" id="gallery_image" accept="image/*" required=true
                    file_name=image_name
                    error=field_error(errors, "image")
                    on_file=on_file />
            </div>
            <Button busy=uploading on_click=Callback::new(upload)>
                {icon("plus")}
                " Upload"
            </Button>
        </div>
    }
}
