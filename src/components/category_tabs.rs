//! Category Tab Bar Component
//!
//! Tab bar for switching between movie categories.

use leptos::prelude::*;

/// Category key of the user's favourites collection
pub const FAVOURITES_KEY: &str = "favourites";

/// Category options as (key, label)
const CATEGORIES: &[(&str, &str)] = &[
    ("popular", "Popular"),
    ("top_rated", "Top Rated"),
    ("upcoming", "Upcoming"),
    (FAVOURITES_KEY, "My Favourites"),
];

/// Category tab bar component
#[component]
pub fn CategoryTabs(
    active_key: ReadSignal<String>,
    set_active_key: WriteSignal<String>,
) -> impl IntoView {
    view! {
        <div class="category-tab-bar">
            {CATEGORIES.iter().map(|(key, label)| {
                let key = *key;
                let is_active = move || active_key.get() == key;
                let tab_class = move || {
                    if is_active() { "category-tab active" } else { "category-tab" }
                };

                view! {
                    <button
                        class=tab_class
                        on:click=move |_| set_active_key.set(key.to_string())
                    >
                        {*label}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}
