//! Movie Card Component
//!
//! Display card for a single movie with the favourite action matching the
//! current category.

use leptos::prelude::*;

use crate::components::FAVOURITES_KEY;
use crate::models::Movie;

#[component]
pub fn MovieCard(
    movie: Movie,
    active_key: ReadSignal<String>,
    #[prop(into)] on_add: Callback<Movie>,
    #[prop(into)] on_remove: Callback<String>,
) -> impl IntoView {
    let title = movie.title.clone();
    let poster_alt = movie.title.clone();
    let poster_url = movie.poster_url.clone();
    let overview = movie.overview.clone();
    let release_date = movie.release_date.clone();
    let rating = movie.rating;
    let remove_id = movie.id.clone();
    let candidate = movie;

    let in_favourites_view = move || active_key.get() == FAVOURITES_KEY;

    view! {
        <div class="movie-card">
            {poster_url.map(|url| view! { <img class="movie-poster" src=url alt=poster_alt /> })}
            <div class="movie-body">
                <h5 class="movie-title">{title}</h5>
                <div class="movie-meta">
                    <span class="movie-date">{release_date}</span>
                    <span class="movie-rating">{rating.map(|r| format!("{:.1}", r))}</span>
                </div>
                <p class="movie-overview">{overview}</p>

                {move || if in_favourites_view() {
                    let id = remove_id.clone();
                    view! {
                        <button
                            class="fav-btn remove"
                            on:click=move |ev| {
                                ev.stop_propagation();
                                on_remove.run(id.clone());
                            }
                        >
                            "Remove from favourites"
                        </button>
                    }.into_any()
                } else {
                    let movie = candidate.clone();
                    view! {
                        <button
                            class="fav-btn add"
                            on:click=move |ev| {
                                ev.stop_propagation();
                                on_add.run(movie.clone());
                            }
                        >
                            "Add to favourites"
                        </button>
                    }.into_any()
                }}
            </div>
        </div>
    }
}
