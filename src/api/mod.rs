//! HTTP API
//!
//! Client functions and DTOs for the MovieDB backend endpoints.

pub mod client;

pub use client::{
    fetch_movie_catalog, fetch_recommendations, send_chat, submit_review, CatalogResponse,
    Recommendation, ReviewRequest,
};

/// Default API base URL (same origin)
pub const DEFAULT_API_BASE: &str = "/api";

/// Get the API base URL from local storage (`moviedb_api_url`) or use the
/// same-origin default
pub fn get_api_base() -> String {
    let url = if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(url)) = storage.get_item("moviedb_api_url") {
                url
            } else {
                DEFAULT_API_BASE.to_string()
            }
        } else {
            DEFAULT_API_BASE.to_string()
        }
    } else {
        DEFAULT_API_BASE.to_string()
    };
    // Normalize: remove trailing slash
    url.trim_end_matches('/').to_string()
}
