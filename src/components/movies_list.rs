//! Movies List Component
//!
//! The catalog core: loads the movie list for the selected category,
//! filters it by the search term, renders one card per movie and hosts
//! the action toast.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::components::{MovieCard, Toast};
use crate::models::{Movie, Status};
use crate::search::filter_movies;
use crate::services;
use crate::store::{
    store_begin_action, store_clear_movies, store_remove_movie, store_set_movies,
    store_show_toast, CatalogState, CatalogStateStoreFields,
};

#[component]
pub fn MoviesList(
    active_key: ReadSignal<String>,
    search_value: ReadSignal<Option<String>>,
) -> impl IntoView {
    let store = Store::new(CatalogState::default());

    // Monotonic fetch counter. A resolved fetch only lands when its number
    // is still the latest, so a stale category response never overwrites a
    // fresher one.
    let fetch_seq = StoredValue::new(0u32);

    // Load movies when the category changes
    Effect::new(move |_| {
        let category = active_key.get();
        let seq = fetch_seq.with_value(|seq| seq + 1);
        fetch_seq.set_value(seq);
        web_sys::console::log_1(&format!("[MoviesList] Loading category {:?}", category).into());
        spawn_local(async move {
            let result = services::get_movies(&category).await;
            if fetch_seq.get_value() != seq {
                // A newer category fetch is in flight
                return;
            }
            match result {
                Ok(loaded) => {
                    web_sys::console::log_1(
                        &format!("[MoviesList] Loaded {} movies", loaded.len()).into(),
                    );
                    store_set_movies(&store, loaded);
                    store.status().set(Status::Loaded);
                }
                Err(err) => {
                    web_sys::console::error_1(
                        &format!("[MoviesList] Load failed for {:?}: {}", category, err).into(),
                    );
                    store_clear_movies(&store);
                    store_show_toast(&store, Status::Error, err.to_string());
                }
            }
        });
    });

    let add_to_favourites = Callback::new(move |movie: Movie| {
        store_begin_action(&store);
        spawn_local(async move {
            match services::add_movie_to_favourites(&movie).await {
                Ok(()) => {
                    web_sys::console::log_1(&"[MoviesList] Movie added to favourites".into());
                    store_show_toast(&store, Status::Loaded, "Successfully added to favourites");
                }
                Err(err) => {
                    store_show_toast(&store, Status::Error, err.to_string());
                }
            }
        });
    });

    let remove_from_favourites = Callback::new(move |id: String| {
        store_begin_action(&store);
        spawn_local(async move {
            match services::remove_movie_from_favourites(&id).await {
                Ok(()) => {
                    web_sys::console::log_1(&"[MoviesList] Movie removed from favourites".into());
                    store_show_toast(
                        &store,
                        Status::Loaded,
                        "Successfully removed from favourites",
                    );
                    store_remove_movie(&store, &id);
                }
                Err(err) => {
                    store_show_toast(&store, Status::Error, err.to_string());
                }
            }
        });
    });

    // Pure derivation, recomputed on every render; not memoized
    let filtered = move || {
        let movies = store.movies().get();
        let search = search_value.get();
        filter_movies(&movies, search.as_deref())
    };

    view! {
        <Show
            when=move || !filtered().is_empty()
            fallback=|| {
                view! {
                    <div class="no-data">
                        <h4>"No Data found"</h4>
                    </div>
                }
            }
        >
            <div class="movie-grid">
                <For
                    each=filtered
                    key=|movie| movie.id.clone()
                    children=move |movie| {
                        view! {
                            <MovieCard
                                movie=movie
                                active_key=active_key
                                on_add=add_to_favourites
                                on_remove=remove_from_favourites
                            />
                        }
                    }
                />
            </div>
        </Show>
        <Toast store=store />
    }
}
