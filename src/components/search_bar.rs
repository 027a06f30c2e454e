//! Search Bar Component
//!
//! Controlled input driving the title search term.

use leptos::prelude::*;

#[component]
pub fn SearchBar(
    search_value: ReadSignal<Option<String>>,
    set_search_value: WriteSignal<Option<String>>,
) -> impl IntoView {
    view! {
        <input
            class="search-input"
            type="search"
            placeholder="Search movies..."
            prop:value=move || search_value.get().unwrap_or_default()
            on:input=move |ev| {
                let value = event_target_value(&ev);
                set_search_value.set(if value.is_empty() { None } else { Some(value) });
            }
        />
    }
}
