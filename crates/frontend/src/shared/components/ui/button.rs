use leptos::prelude::*;

/// Button with variants ("primary", "secondary", "ghost", "danger")
#[component]
pub fn Button(
    #[prop(optional, into)]
    variant: MaybeProp<String>,
    /// "button" (default) or "submit"
    #[prop(optional, into)]
    button_type: MaybeProp<String>,
    /// Disabled state (reactive)
    #[prop(optional, into)]
    disabled: MaybeProp<bool>,
    /// Request in flight: disables the button and swaps the label
    #[prop(optional, into)]
    busy: MaybeProp<bool>,
    #[prop(optional)]
    on_click: Option<Callback<leptos::ev::MouseEvent>>,
    children: ChildrenFn,
) -> impl IntoView {
    let variant_class = move || match variant.get().as_deref().unwrap_or("primary") {
        "secondary" => "button--secondary",
        "ghost" => "button--ghost",
        "danger" => "button--danger",
        _ => "button--primary",
    };
    let is_busy = move || busy.get().unwrap_or(false);
    let btn_type = move || button_type.get().unwrap_or_else(|| "button".to_string());

    view! {
        <button
            type=btn_type
            class=move || format!("button {}", variant_class())
            class:button--busy=is_busy
            disabled=move || disabled.get().unwrap_or(false) || is_busy()
            on:click=move |ev| {
                if let Some(handler) = on_click {
                    handler.run(ev);
                }
            }
        >
            {move || {
                if is_busy() {
                    view! { "Please wait..." }.into_any()
                } else {
                    children()
                }
            }}
        </button>
    }
}
