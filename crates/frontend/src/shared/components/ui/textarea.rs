use leptos::prelude::*;

/// Textarea component with label support
#[component]
pub fn Textarea(
    /// Label text (optional)
    #[prop(optional, into)]
    label: MaybeProp<String>,
    /// Textarea value
    #[prop(into)]
    value: Signal<String>,
    /// Input event handler
    #[prop(optional)]
    on_input: Option<Callback<String>>,
    /// Validation message shown under the field
    #[prop(optional, into)]
    error: MaybeProp<String>,
    /// Placeholder text
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
    /// Disabled state
    #[prop(optional)]
    disabled: bool,
    /// Rows attribute
    #[prop(optional)]
    rows: Option<u32>,
    /// `maxlength` attribute
    #[prop(optional)]
    max_length: Option<usize>,
    /// ID for the textarea element
    #[prop(optional, into)]
    id: MaybeProp<String>,
) -> impl IntoView {
    let textarea_id = move || id.get().unwrap_or_default();
    let textarea_placeholder = move || placeholder.get().unwrap_or_default();
    let textarea_rows = rows.unwrap_or(3);

    view! {
        <div class="form__group">
            {move || label.get().map(|l| view! {
                <label class="form__label" for=textarea_id>
                    {l}
                </label>
            })}
            <textarea
                id=textarea_id
                class="form__textarea"
                class:form__textarea--invalid=move || error.get().is_some()
                placeholder=textarea_placeholder
                disabled=disabled
                rows=textarea_rows
                maxlength=max_length
                prop:value=move || value.get()
                on:input=move |ev| {
                    if let Some(handler) = on_input {
                        handler.run(event_target_value(&ev));
                    }
                }
            />
            {move || error.get().map(|e| view! { <span class="form__error">{e}</span> })}
        </div>
    }
}
