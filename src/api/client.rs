//! HTTP API Client
//!
//! Functions for communicating with the MovieDB REST API.

use gloo_net::http::Request;
use std::collections::HashMap;

use crate::api::get_api_base;

// ============ Response Types ============

#[derive(Debug, serde::Deserialize)]
pub struct ApiError {
    pub error: String,
}

#[derive(Debug, serde::Deserialize)]
pub struct ChatResponse {
    #[serde(default)]
    pub response: String,
}

/// A scored recommendation from the engine.
///
/// Catalog fields use the string sentinel `"N/A"` when unknown; `year` can
/// additionally arrive as a bare number depending on how the catalog row was
/// stored, so it is normalized to a string while decoding.
#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
pub struct Recommendation {
    #[serde(default)]
    pub title: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub year: Option<String>,
    #[serde(default)]
    pub genres: Option<String>,
    #[serde(default)]
    pub tconst: Option<String>,
    #[serde(default)]
    pub score: f64,
    #[serde(default)]
    pub synopsis: String,
}

fn string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::Deserialize;

    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| match v {
        serde_json::Value::String(s) => Some(s),
        serde_json::Value::Number(n) => Some(n.to_string()),
        _ => None,
    }))
}

#[derive(Debug, serde::Deserialize)]
pub struct RecommendationsResponse {
    /// Previously rated movies as `[title, rating]` pairs
    #[serde(default)]
    pub reference_movies: Vec<(String, f64)>,
    #[serde(default)]
    pub recommendations: Vec<Recommendation>,
}

/// The `/api/movies` endpoint answers in one of two shapes depending on the
/// backend build: an id-keyed title mapping or a flat title list. Decoded
/// once here; everything downstream works on [`crate::state::CatalogIndex`].
#[derive(Debug, Clone, PartialEq, serde::Deserialize)]
#[serde(untagged)]
pub enum CatalogResponse {
    Movies { movies: HashMap<String, String> },
    Titles { titles: Vec<String> },
}

// ============ Request Types ============

#[derive(Debug, Clone, serde::Serialize)]
pub struct ReviewRequest {
    pub movie_id: String,
    pub title: String,
    pub rating: f64,
    pub spoiler: bool,
    pub text: String,
    pub username: String,
}

// ============ API Functions ============

/// Send a chat message to the agent and return its reply
pub async fn send_chat(message: &str) -> Result<String, String> {
    #[derive(serde::Serialize)]
    struct ChatRequest {
        message: String,
    }

    let api_base = get_api_base();

    let response = Request::post(&format!("{}/chat", api_base))
        .json(&ChatRequest {
            message: message.to_string(),
        })
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        let error: ApiError = response.json().await.unwrap_or(ApiError {
            error: "Chat error".to_string(),
        });
        return Err(error.error);
    }

    let result: ChatResponse = response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))?;

    Ok(result.response)
}

/// Fetch recommendations and reference movies for a user
pub async fn fetch_recommendations(username: &str) -> Result<RecommendationsResponse, String> {
    let api_base = get_api_base();
    let encoded: String = js_sys::encode_uri_component(username).into();

    let response = Request::get(&format!("{}/recommendations?username={}", api_base, encoded))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        let error: ApiError = response.json().await.unwrap_or(ApiError {
            error: "Recommendation error".to_string(),
        });
        return Err(error.error);
    }

    response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Fetch the movie catalog used to resolve review titles
pub async fn fetch_movie_catalog() -> Result<CatalogResponse, String> {
    let api_base = get_api_base();

    let response = Request::get(&format!("{}/movies", api_base))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        let error: ApiError = response.json().await.unwrap_or(ApiError {
            error: "Catalog error".to_string(),
        });
        return Err(error.error);
    }

    response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Submit a user review
pub async fn submit_review(review: &ReviewRequest) -> Result<(), String> {
    let api_base = get_api_base();

    let response = Request::post(&format!("{}/reviews", api_base))
        .json(review)
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        let error: ApiError = response.json().await.unwrap_or(ApiError {
            error: "Erreur lors de l'envoi.".to_string(),
        });
        return Err(error.error);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_response_id_mapping() {
        let decoded: CatalogResponse =
            serde_json::from_str(r#"{"movies": {"1": "Matrix", "2": "Alien"}}"#).unwrap();
        match decoded {
            CatalogResponse::Movies { movies } => {
                assert_eq!(movies.len(), 2);
                assert_eq!(movies.get("1").map(String::as_str), Some("Matrix"));
            }
            CatalogResponse::Titles { .. } => panic!("decoded as flat list"),
        }
    }

    #[test]
    fn test_catalog_response_flat_list() {
        let decoded: CatalogResponse =
            serde_json::from_str(r#"{"titles": ["Matrix", "Alien"]}"#).unwrap();
        match decoded {
            CatalogResponse::Titles { titles } => assert_eq!(titles, vec!["Matrix", "Alien"]),
            CatalogResponse::Movies { .. } => panic!("decoded as id mapping"),
        }
    }

    #[test]
    fn test_recommendation_year_as_number() {
        let rec: Recommendation = serde_json::from_str(
            r#"{"title": "Alien", "year": 1979, "tconst": "tt0078748", "score": 0.5}"#,
        )
        .unwrap();
        assert_eq!(rec.year.as_deref(), Some("1979"));
        assert_eq!(rec.genres, None);
        assert_eq!(rec.synopsis, "");
    }

    #[test]
    fn test_recommendation_year_as_string() {
        let rec: Recommendation =
            serde_json::from_str(r#"{"title": "Alien", "year": "1979", "score": 0.5}"#).unwrap();
        assert_eq!(rec.year.as_deref(), Some("1979"));
    }

    #[test]
    fn test_reference_movies_tuples() {
        let decoded: RecommendationsResponse = serde_json::from_str(
            r#"{"reference_movies": [["Matrix", 9], ["Alien", 8.5]], "recommendations": []}"#,
        )
        .unwrap();
        assert_eq!(decoded.reference_movies.len(), 2);
        assert_eq!(decoded.reference_movies[0].0, "Matrix");
        assert_eq!(decoded.reference_movies[1].1, 8.5);
    }

    #[test]
    fn test_recommendations_response_defaults() {
        let decoded: RecommendationsResponse = serde_json::from_str(r#"{}"#).unwrap();
        assert!(decoded.reference_movies.is_empty());
        assert!(decoded.recommendations.is_empty());
    }
}
