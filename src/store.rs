//! Catalog State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. Every piece of
//! state the views depend on lives here as an observable field, so a write
//! to a field re-renders exactly the views reading it.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{Movie, Status};

/// Catalog state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct CatalogState {
    /// Movies of the currently selected category
    pub movies: Vec<Movie>,
    /// Outcome of the most recent asynchronous action
    pub status: Status,
    /// Toast visibility, independent of status so the toast can be
    /// dismissed or auto-hidden on its own
    pub show_toast: bool,
    /// Toast body text
    pub toast_message: String,
}

/// Type alias for the store
pub type CatalogStore = Store<CatalogState>;

// ========================
// Pure List Helpers
// ========================

/// Drop the movie with `movie_id` from `movies`.
/// Returns true when a movie was removed.
pub fn remove_by_id(movies: &mut Vec<Movie>, movie_id: &str) -> bool {
    let before = movies.len();
    movies.retain(|movie| movie.id != movie_id);
    movies.len() != before
}

// ========================
// Store Helper Functions
// ========================

/// Replace the whole movie list (category fetch resolved)
pub fn store_set_movies(store: &CatalogStore, movies: Vec<Movie>) {
    store.movies().set(movies);
}

/// Empty the movie list (category fetch failed)
pub fn store_clear_movies(store: &CatalogStore) {
    store.movies().write().clear();
}

/// Remove a movie from the store by ID
pub fn store_remove_movie(store: &CatalogStore, movie_id: &str) {
    remove_by_id(&mut store.movies().write(), movie_id);
}

/// Mark an action as started; the toast stays hidden while loading
pub fn store_begin_action(store: &CatalogStore) {
    store.status().set(Status::Loading);
}

/// Record an action outcome and surface it in the toast
pub fn store_show_toast(store: &CatalogStore, status: Status, message: impl Into<String>) {
    store.status().set(status);
    store.toast_message().set(message.into());
    store.show_toast().set(true);
}

/// Hide the toast without touching status or the list
pub fn store_dismiss_toast(store: &CatalogStore) {
    store.show_toast().set(false);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_movie(id: &str, title: &str) -> Movie {
        Movie {
            id: id.to_string(),
            title: title.to_string(),
            overview: None,
            poster_url: None,
            rating: None,
            release_date: None,
        }
    }

    #[test]
    fn test_remove_by_id_drops_only_the_matching_movie() {
        let mut movies = vec![
            make_movie("1", "Dune"),
            make_movie("2", "Dune Part Two"),
            make_movie("3", "Alien"),
        ];

        assert!(remove_by_id(&mut movies, "2"));
        assert_eq!(movies.len(), 2);
        assert!(movies.iter().all(|movie| movie.id != "2"));
    }

    #[test]
    fn test_remove_by_id_with_unknown_id_is_a_no_op() {
        let mut movies = vec![make_movie("1", "Dune")];

        assert!(!remove_by_id(&mut movies, "99"));
        assert_eq!(movies.len(), 1);
    }
}
