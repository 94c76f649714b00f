//! API utilities for frontend-backend communication
//!
//! Provides helper functions for constructing API URLs.

use super::config::AppConfig;

/// Get the base URL for API requests, without a trailing slash
pub fn api_base() -> String {
    AppConfig::load().api_base
}

/// Build a full API URL from a resource path
///
/// # Example
/// ```rust,ignore
/// let url = api_url("matches/12");
/// ```
pub fn api_url(path: &str) -> String {
    join_url(&api_base(), path)
}

fn join_url(base: &str, path: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_url_normalizes_slashes() {
        assert_eq!(join_url("http://h:3000/api/", "/users"), "http://h:3000/api/users");
        assert_eq!(join_url("http://h:3000/api", "users/3"), "http://h:3000/api/users/3");
    }
}
