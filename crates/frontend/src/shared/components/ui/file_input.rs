use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// File picker that hands the first chosen file to `on_file`
#[component]
pub fn FileInput(
    #[prop(optional, into)]
    label: MaybeProp<String>,
    /// Name of the file currently held, if any
    #[prop(optional, into)]
    file_name: MaybeProp<String>,
    /// `accept` attribute, e.g. "image/*"
    #[prop(optional, into)]
    accept: MaybeProp<String>,
    #[prop(optional, into)]
    error: MaybeProp<String>,
    #[prop(optional)]
    required: bool,
    #[prop(optional, into)]
    id: MaybeProp<String>,
    on_file: Callback<web_sys::File>,
) -> impl IntoView {
    let input_id = move || id.get().unwrap_or_default();
    let accept_attr = move || accept.get().unwrap_or_default();

    let on_change = move |ev: leptos::ev::Event| {
        let Some(input) = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
        else {
            return;
        };
        if let Some(file) = input.files().and_then(|files| files.get(0)) {
            on_file.run(file);
        }
    };

    view! {
        <div class="form__group">
            {move || label.get().map(|l| view! {
                <label class="form__label" for=input_id>
                    {l}
                    {required.then(|| view! { <span class="form__required">" *"</span> })}
                </label>
            })}
            <input
                id=input_id
                type="file"
                class="form__file"
                accept=accept_attr
                on:change=on_change
            />
            {move || file_name.get().map(|name| view! {
                <span class="form__file-name">{name}</span>
            })}
            {move || error.get().map(|e| view! { <span class="form__error">{e}</span> })}
        </div>
    }
}
