//! Session Identity
//!
//! The username is the whole session: chosen on the landing page, carried to
//! the app page through the `?user=` query parameter and local storage. The
//! app page only reads; the landing page is the only writer.

/// Local storage key holding the chosen username
pub const USERNAME_STORAGE_KEY: &str = "moviedb_username";

/// Resolve the session username from the query parameter and stored value.
///
/// A non-empty query parameter wins over storage; the winner is trimmed and
/// a blank name resolves to `None`. A whitespace-only query still takes
/// precedence (and then trims away), it does not fall back to storage.
pub fn resolve(from_query: Option<&str>, from_storage: Option<&str>) -> Option<String> {
    let raw = match from_query {
        Some(query) if !query.is_empty() => query,
        _ => from_storage.unwrap_or(""),
    };
    let name = raw.trim();
    if name.is_empty() {
        None
    } else {
        Some(name.to_string())
    }
}

/// Read the stored username from local storage
pub fn stored_username() -> Option<String> {
    let window = web_sys::window()?;
    let storage = window.local_storage().ok()??;
    storage.get_item(USERNAME_STORAGE_KEY).ok()?
}

/// Persist the chosen username (landing page only)
pub fn store_username(username: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            let _ = storage.set_item(USERNAME_STORAGE_KEY, username);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_wins_over_storage() {
        assert_eq!(
            resolve(Some("alice"), Some("bob")),
            Some("alice".to_string())
        );
    }

    #[test]
    fn test_storage_fallback() {
        assert_eq!(resolve(None, Some("bob")), Some("bob".to_string()));
    }

    #[test]
    fn test_trims_whitespace() {
        assert_eq!(resolve(Some("  alice  "), None), Some("alice".to_string()));
    }

    #[test]
    fn test_empty_everywhere_is_none() {
        assert_eq!(resolve(None, None), None);
        assert_eq!(resolve(Some(""), Some("")), None);
        assert_eq!(resolve(Some("   "), None), None);
    }

    #[test]
    fn test_empty_query_falls_back_to_storage() {
        assert_eq!(resolve(Some(""), Some(" bob ")), Some("bob".to_string()));
    }

    #[test]
    fn test_whitespace_query_masks_storage() {
        assert_eq!(resolve(Some("   "), Some("bob")), None);
    }
}
