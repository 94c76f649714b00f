use leptos::prelude::*;

/// Group of radio buttons over a static option table
#[component]
pub fn RadioGroup(
    /// Label for the group
    #[prop(optional, into)]
    label: MaybeProp<String>,
    /// Current selected value
    #[prop(into)]
    value: Signal<String>,
    on_change: Callback<String>,
    /// Name attribute shared by the inputs
    #[prop(into)]
    name: String,
    /// `(value, label)` pairs
    options: &'static [(&'static str, &'static str)],
    #[prop(optional, into)]
    disabled: MaybeProp<bool>,
) -> impl IntoView {
    let radios = options
        .iter()
        .map(|(option_value, option_label)| {
            let radio_id = format!("{}-{}", name, option_value);
            view! {
                <div class="form__radio-wrapper">
                    <input
                        id=radio_id.clone()
                        type="radio"
                        class="form__radio"
                        name=name.clone()
                        value=*option_value
                        prop:checked=move || value.get() == *option_value
                        disabled=move || disabled.get().unwrap_or(false)
                        on:change=move |_| on_change.run(option_value.to_string())
                    />
                    <label class="form__radio-label" for=radio_id>
                        {*option_label}
                    </label>
                </div>
            }
        })
        .collect_view();

    view! {
        <div class="form__group">
            {move || label.get().map(|l| view! {
                <label class="form__label">{l}</label>
            })}
            <div class="form__radio-group">{radios}</div>
        </div>
    }
}
