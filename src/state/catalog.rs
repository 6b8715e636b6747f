//! Movie Catalog Index
//!
//! Client-side lookup from movie title to its backend identifier, loaded
//! once per app-page visit and used to validate review submissions and feed
//! the title autocomplete.

use std::collections::HashMap;

use crate::api::CatalogResponse;

/// Maximum number of autocomplete suggestions
pub const MAX_SUGGESTIONS: usize = 12;

/// Validation messages shown inline in the review form
pub const ERR_TITLE_REQUIRED: &str = "Le titre du film est obligatoire.";
pub const ERR_RATING_REQUIRED: &str = "La note est obligatoire.";

/// Case-insensitive title-to-id lookup over the movie catalog.
///
/// Empty by default; a failed catalog fetch leaves it empty, which makes
/// every review submission fail title resolution instead of fabricating ids.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CatalogIndex {
    titles: Vec<String>,
    title_to_id: HashMap<String, String>,
}

impl CatalogIndex {
    /// Build the index from a decoded `/api/movies` response.
    ///
    /// The flat title list carries no ids, so each title resolves to itself.
    pub fn from_response(response: CatalogResponse) -> Self {
        match response {
            CatalogResponse::Movies { movies } => {
                let mut titles = Vec::with_capacity(movies.len());
                let mut title_to_id = HashMap::with_capacity(movies.len());
                for (id, title) in movies {
                    title_to_id.insert(title.to_lowercase(), id);
                    titles.push(title);
                }
                Self {
                    titles,
                    title_to_id,
                }
            }
            CatalogResponse::Titles { titles } => {
                let title_to_id = titles
                    .iter()
                    .map(|title| (title.to_lowercase(), title.clone()))
                    .collect();
                Self {
                    titles,
                    title_to_id,
                }
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.title_to_id.is_empty()
    }

    /// Resolve a free-text title to its catalog id (case-insensitive exact match)
    pub fn resolve(&self, title: &str) -> Option<&str> {
        self.title_to_id
            .get(&title.trim().to_lowercase())
            .map(String::as_str)
    }

    /// Case-insensitive substring filter over known titles, capped at
    /// [`MAX_SUGGESTIONS`]. An empty query yields no suggestions.
    pub fn suggestions(&self, query: &str) -> Vec<String> {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return Vec::new();
        }
        self.titles
            .iter()
            .filter(|title| title.to_lowercase().contains(&query))
            .take(MAX_SUGGESTIONS)
            .cloned()
            .collect()
    }

    /// Validate a review draft and resolve its movie id.
    ///
    /// Checks run in order (title present, rating present, title known) and
    /// the first failure produces the inline message without touching the
    /// server.
    pub fn validate_review(&self, title: &str, rating: &str) -> Result<String, String> {
        let title = title.trim();
        if title.is_empty() {
            return Err(ERR_TITLE_REQUIRED.to_string());
        }
        if rating.is_empty() {
            return Err(ERR_RATING_REQUIRED.to_string());
        }
        match self.resolve(title) {
            Some(id) => Ok(id.to_string()),
            None => Err(format!(
                "Le film {} n'existe pas dans la base de donnees.",
                title
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id_catalog() -> CatalogIndex {
        CatalogIndex::from_response(CatalogResponse::Movies {
            movies: HashMap::from([
                ("1".to_string(), "Matrix".to_string()),
                ("2".to_string(), "Alien".to_string()),
            ]),
        })
    }

    #[test]
    fn test_resolve_case_insensitive() {
        let catalog = id_catalog();
        assert_eq!(catalog.resolve("matrix"), Some("1"));
        assert_eq!(catalog.resolve("MATRIX"), Some("1"));
        assert_eq!(catalog.resolve("  Matrix  "), Some("1"));
        assert_eq!(catalog.resolve("Matrix Reloaded"), None);
    }

    #[test]
    fn test_flat_list_resolves_to_title() {
        let catalog = CatalogIndex::from_response(CatalogResponse::Titles {
            titles: vec!["Matrix".to_string()],
        });
        assert_eq!(catalog.resolve("matrix"), Some("Matrix"));
    }

    #[test]
    fn test_default_is_empty() {
        let catalog = CatalogIndex::default();
        assert!(catalog.is_empty());
        assert_eq!(catalog.resolve("Matrix"), None);
        assert!(catalog.suggestions("ma").is_empty());
    }

    #[test]
    fn test_suggestions_substring_case_insensitive() {
        let catalog = id_catalog();
        let matches = catalog.suggestions("LiE");
        assert_eq!(matches, vec!["Alien".to_string()]);
    }

    #[test]
    fn test_suggestions_empty_query_yields_nothing() {
        let catalog = id_catalog();
        assert!(catalog.suggestions("").is_empty());
        assert!(catalog.suggestions("   ").is_empty());
    }

    #[test]
    fn test_suggestions_capped() {
        let titles = (0..30).map(|i| format!("Movie {}", i)).collect();
        let catalog = CatalogIndex::from_response(CatalogResponse::Titles { titles });
        assert_eq!(catalog.suggestions("movie").len(), MAX_SUGGESTIONS);
    }

    #[test]
    fn test_validate_review_order() {
        let catalog = id_catalog();

        assert_eq!(
            catalog.validate_review("", "5"),
            Err(ERR_TITLE_REQUIRED.to_string())
        );
        // Empty title is reported before the missing rating
        assert_eq!(
            catalog.validate_review("   ", ""),
            Err(ERR_TITLE_REQUIRED.to_string())
        );
        assert_eq!(
            catalog.validate_review("Matrix", ""),
            Err(ERR_RATING_REQUIRED.to_string())
        );
        assert_eq!(
            catalog.validate_review("Dune", "5"),
            Err("Le film Dune n'existe pas dans la base de donnees.".to_string())
        );
        assert_eq!(catalog.validate_review("matrix", "5"), Ok("1".to_string()));
    }
}
