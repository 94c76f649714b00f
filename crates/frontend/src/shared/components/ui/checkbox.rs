use leptos::prelude::*;

/// Checkbox component
#[component]
pub fn Checkbox(
    /// Label text
    #[prop(into)]
    label: Signal<String>,
    /// Checked state
    #[prop(into)]
    checked: Signal<bool>,
    /// Change event handler
    #[prop(optional)]
    on_change: Option<Callback<bool>>,
    /// Validation message shown under the box
    #[prop(optional, into)]
    error: MaybeProp<String>,
    /// Disabled state
    #[prop(optional)]
    disabled: bool,
    /// ID for the checkbox element
    #[prop(optional, into)]
    id: MaybeProp<String>,
) -> impl IntoView {
    let checkbox_id = move || id.get().unwrap_or_default();
    let wrapper_class = if disabled {
        "form__checkbox-wrapper form__checkbox-wrapper--disabled"
    } else {
        "form__checkbox-wrapper"
    };

    view! {
        <div class="form__group">
            <div class=wrapper_class>
                <input
                    id=checkbox_id
                    type="checkbox"
                    class="form__checkbox"
                    prop:checked=move || checked.get()
                    disabled=disabled
                    on:change=move |ev| {
                        if let Some(handler) = on_change {
                            handler.run(event_target_checked(&ev));
                        }
                    }
                />
                <label class="form__checkbox-label" for=checkbox_id>
                    {label}
                </label>
            </div>
            {move || error.get().map(|e| view! { <span class="form__error">{e}</span> })}
        </div>
    }
}
