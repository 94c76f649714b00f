use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use std::cmp::Ordering;

/// Trait for items that can be sorted by a named column
pub trait Sortable {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering;
}

/// Trait for items that match a free-text search
pub trait Searchable {
    /// `filter` is already trimmed and lowercased
    fn matches_filter(&self, filter: &str) -> bool;
}

/// Sort in place by `field`
pub fn sort_list<T: Sortable>(items: &mut [T], field: &str, ascending: bool) {
    items.sort_by(|a, b| {
        let cmp = a.compare_by_field(b, field);
        if ascending {
            cmp
        } else {
            cmp.reverse()
        }
    });
}

/// Keep the items matching `filter`; a blank filter keeps everything
pub fn filter_list<T: Searchable + Clone>(items: &[T], filter: &str) -> Vec<T> {
    let needle = filter.trim().to_lowercase();
    if needle.is_empty() {
        return items.to_vec();
    }
    items
        .iter()
        .filter(|item| item.matches_filter(&needle))
        .cloned()
        .collect()
}

/// Case-insensitive comparison of two optional strings, blanks last
pub fn compare_text(a: Option<&str>, b: Option<&str>) -> Ordering {
    match (a.filter(|s| !s.is_empty()), b.filter(|s| !s.is_empty())) {
        (Some(a), Some(b)) => a.to_lowercase().cmp(&b.to_lowercase()),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Indicator for a sortable column header
pub fn get_sort_indicator(current_field: &str, field: &str, ascending: bool) -> &'static str {
    if current_field == field {
        if ascending {
            " ▲"
        } else {
            " ▼"
        }
    } else {
        " ⇅"
    }
}

/// Search box that reports its value after 300 ms of quiet
#[component]
pub fn SearchInput(
    #[prop(into)]
    value: Signal<String>,
    #[prop(into)]
    on_change: Callback<String>,
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
) -> impl IntoView {
    let (input_value, set_input_value) = signal(value.get_untracked());
    let pending = StoredValue::new_local(None::<Timeout>);

    let handle_input = move |new_value: String| {
        set_input_value.set(new_value.clone());
        // Dropping the previous timeout cancels it
        let timeout = Timeout::new(300, move || on_change.run(new_value));
        pending.set_value(Some(timeout));
    };

    let clear = move |_| {
        pending.set_value(None);
        set_input_value.set(String::new());
        on_change.run(String::new());
    };

    view! {
        <div class="search">
            <input
                type="search"
                class="form__input search__input"
                placeholder=move || placeholder.get().unwrap_or_else(|| "Search...".to_string())
                prop:value=move || input_value.get()
                on:input=move |ev| handle_input(event_target_value(&ev))
            />
            <Show when=move || !input_value.get().is_empty()>
                <button class="search__clear" title="Clear" on:click=clear>
                    "×"
                </button>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Row(&'static str, u32);

    impl Sortable for Row {
        fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
            match field {
                "n" => self.1.cmp(&other.1),
                _ => self.0.cmp(other.0),
            }
        }
    }

    impl Searchable for Row {
        fn matches_filter(&self, filter: &str) -> bool {
            self.0.to_lowercase().contains(filter)
        }
    }

    #[test]
    fn test_sort_both_directions() {
        let mut rows = vec![Row("b", 2), Row("a", 3), Row("c", 1)];
        sort_list(&mut rows, "n", true);
        assert_eq!(rows.iter().map(|r| r.1).collect::<Vec<_>>(), vec![1, 2, 3]);
        sort_list(&mut rows, "name", false);
        assert_eq!(rows.iter().map(|r| r.0).collect::<Vec<_>>(), vec!["c", "b", "a"]);
    }

    #[test]
    fn test_filter_is_trimmed_and_case_insensitive() {
        let rows = vec![Row("Maya", 1), Row("Omar", 2)];
        assert_eq!(filter_list(&rows, "  MAY "), vec![Row("Maya", 1)]);
        assert_eq!(filter_list(&rows, "   ").len(), 2);
    }

    #[test]
    fn test_compare_text_puts_blanks_last() {
        assert_eq!(compare_text(Some("b"), None), Ordering::Less);
        assert_eq!(compare_text(Some(""), Some("a")), Ordering::Greater);
        assert_eq!(compare_text(Some("A"), Some("a")), Ordering::Equal);
    }
}
