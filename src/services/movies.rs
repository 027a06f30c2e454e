//! Movie Listing
//!
//! Binding for the per-category movie collection.

use super::{fetch_json, movies_url, ServiceError};
use crate::models::Movie;

/// Fetch the movie list for one category key
pub async fn get_movies(category: &str) -> Result<Vec<Movie>, ServiceError> {
    fetch_json("GET", &movies_url(category), None).await
}
