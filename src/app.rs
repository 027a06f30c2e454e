//! Movies Frontend App
//!
//! Application shell: category tabs, search bar, movie list.

use leptos::prelude::*;

use crate::components::{CategoryTabs, MoviesList, SearchBar};

#[component]
pub fn App() -> impl IntoView {
    // State
    let (active_key, set_active_key) = signal(String::from("popular"));
    let (search_value, set_search_value) = signal::<Option<String>>(None);

    view! {
        <div class="app-layout">
            <header class="app-header">
                <h1>"Movies"</h1>
                <SearchBar search_value=search_value set_search_value=set_search_value />
            </header>

            <CategoryTabs active_key=active_key set_active_key=set_active_key />

            <MoviesList active_key=active_key search_value=search_value />
        </div>
    }
}
