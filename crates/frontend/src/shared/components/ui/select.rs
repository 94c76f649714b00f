use leptos::prelude::*;

/// Turn a static option table into the shape [`Select`] takes
pub fn options(table: &[(&str, &str)]) -> Vec<(String, String)> {
    table
        .iter()
        .map(|(value, label)| (value.to_string(), label.to_string()))
        .collect()
}

/// Select component with label support
#[component]
pub fn Select(
    /// Label text (optional)
    #[prop(optional, into)]
    label: MaybeProp<String>,
    /// Current value
    #[prop(into)]
    value: Signal<String>,
    /// Change event handler
    #[prop(optional)]
    on_change: Option<Callback<String>>,
    /// Options: Vec of (value, label) tuples
    #[prop(into)]
    options: Signal<Vec<(String, String)>>,
    /// First, empty option shown while nothing is chosen
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
    /// Validation message shown under the field
    #[prop(optional, into)]
    error: MaybeProp<String>,
    /// Disabled state
    #[prop(optional)]
    disabled: bool,
    /// Marks the label as required
    #[prop(optional)]
    required: bool,
    /// ID for the select element
    #[prop(optional, into)]
    id: MaybeProp<String>,
    /// Additional CSS classes
    #[prop(optional, into)]
    class: MaybeProp<String>,
) -> impl IntoView {
    let select_id = move || id.get().unwrap_or_default();
    let additional_class = move || class.get().unwrap_or_default();
    let placeholder_text = move || placeholder.get().unwrap_or_else(|| "Select...".to_string());

    view! {
        <div class="form__group">
            {move || label.get().map(|l| view! {
                <label class="form__label" for=select_id>
                    {l}
                    {required.then(|| view! { <span class="form__required">" *"</span> })}
                </label>
            })}
            <select
                id=select_id
                class=move || format!("form__select {}", additional_class())
                class:form__select--invalid=move || error.get().is_some()
                disabled=disabled
                on:change=move |ev| {
                    if let Some(handler) = on_change {
                        handler.run(event_target_value(&ev));
                    }
                }
            >
                <option value="" selected=move || value.get().is_empty()>
                    {placeholder_text}
                </option>
                <For
                    each=move || options.get()
                    key=|(val, _)| val.clone()
                    children=move |(val, label)| {
                        let val_clone = val.clone();
                        let is_selected = move || value.get() == val_clone;
                        view! {
                            <option value=val selected=is_selected>
                                {label}
                            </option>
                        }
                    }
                />
            </select>
            {move || error.get().map(|e| view! { <span class="form__error">{e}</span> })}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_options_keep_order() {
        let opts = options(&[("m", "Male"), ("f", "Female")]);
        assert_eq!(
            opts,
            vec![
                ("m".to_string(), "Male".to_string()),
                ("f".to_string(), "Female".to_string())
            ]
        );
    }
}
