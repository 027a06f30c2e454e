//! Search Utilities
//!
//! Title filtering for the movie list.

use crate::models::Movie;

/// Case-insensitive substring match of `term` against `title`.
/// An empty term matches everything.
pub fn matches_title(title: &str, term: &str) -> bool {
    title.to_lowercase().contains(&term.to_lowercase())
}

/// Derive the displayed subset of `movies` for a search term.
/// `None` behaves the same as an empty term.
pub fn filter_movies(movies: &[Movie], search: Option<&str>) -> Vec<Movie> {
    let term = search.unwrap_or("");
    movies
        .iter()
        .filter(|movie| matches_title(&movie.title, term))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Movie;

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
    fn test_no_search_shows_everything() {
        let movies = vec![make_movie("1", "Dune"), make_movie("2", "Alien")];

        assert_eq!(filter_movies(&movies, None), movies);
        assert_eq!(filter_movies(&movies, Some("")), movies);
    }

    #[test]
    fn test_match_is_case_insensitive() {
        let movies = vec![make_movie("1", "The GODFATHER")];

        assert_eq!(filter_movies(&movies, Some("godfather")).len(), 1);
        assert_eq!(filter_movies(&movies, Some("GoDfAtHeR")).len(), 1);
        assert!(matches_title("Dune", "DUNE"));
    }

    #[test]
    fn test_substring_narrows_the_list() {
        let movies = vec![
            make_movie("1", "Dune"),
            make_movie("2", "Dune Part Two"),
        ];

        let both = filter_movies(&movies, Some("dune"));
        assert_eq!(both.len(), 2);

        let only_sequel = filter_movies(&movies, Some("part"));
        assert_eq!(only_sequel.len(), 1);
        assert_eq!(only_sequel[0].id, "2");

        let none = filter_movies(&movies, Some("zzz"));
        assert!(none.is_empty());
    }
}
