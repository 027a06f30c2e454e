//! Favourites
//!
//! Bindings for the user's saved movie collection.

use super::{favourite_url, favourites_url, fetch_ok, ServiceError};
use crate::models::Movie;

/// Add a movie to the favourites collection.
/// The backend answers 409 when the movie is already saved.
pub async fn add_movie_to_favourites(movie: &Movie) -> Result<(), ServiceError> {
    let body = serde_json::to_string(movie).map_err(|_| ServiceError::Encode)?;
    fetch_ok("POST", &favourites_url(), Some(&body)).await
}

/// Remove a movie from the favourites collection by id.
/// The backend answers 404 when the movie is not saved.
pub async fn remove_movie_from_favourites(id: &str) -> Result<(), ServiceError> {
    fetch_ok("DELETE", &favourite_url(id), None).await
}
