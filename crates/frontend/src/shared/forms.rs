//! Signal plumbing shared by the form components

use leptos::prelude::*;

use super::validation::FieldErrors;

/// Read/write pair for one text field of a form held in a signal
pub fn bind<F: Send + Sync + 'static>(
    form: RwSignal<F>,
    get: fn(&F) -> String,
    set: fn(&mut F, String),
) -> (Signal<String>, Callback<String>) {
    (
        Signal::derive(move || form.with(get)),
        Callback::new(move |value| form.update(|f| set(f, value))),
    )
}

/// Message for `field`, if the last validation rejected it
pub fn field_error(errors: RwSignal<FieldErrors>, field: &'static str) -> Signal<Option<String>> {
    Signal::derive(move || errors.with(|e| e.get(field).map(str::to_string)))
}
