//! Catalog Models
//!
//! Data structures matching backend entities.

use serde::{Deserialize, Serialize};

/// Movie data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub overview: Option<String>,
    #[serde(default)]
    pub poster_url: Option<String>,
    #[serde(default)]
    pub rating: Option<f32>,
    #[serde(default)]
    pub release_date: Option<String>,
}

/// Outcome flag of the most recent asynchronous action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Status {
    #[default]
    Loading,
    Loaded,
    Error,
}

impl Status {
    pub fn is_loading(&self) -> bool {
        matches!(self, Status::Loading)
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Status::Error)
    }
}
