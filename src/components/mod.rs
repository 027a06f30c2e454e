//! UI Components
//!
//! Reusable Leptos components.

mod category_tabs;
mod movie_card;
mod movies_list;
mod search_bar;
mod toast;

pub use category_tabs::{CategoryTabs, FAVOURITES_KEY};
pub use movie_card::MovieCard;
pub use movies_list::MoviesList;
pub use search_bar::SearchBar;
pub use toast::Toast;
