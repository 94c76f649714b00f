//! Client configuration
//!
//! Values are baked in at build time through environment variables and
//! fall back to sensible defaults derived from the page location.

use super::retry::RetryPolicy;

/// Backend base URL, e.g. `https://api.example.org/api`
const API_BASE_ENV: Option<&str> = option_env!("ACADEMY_API_BASE");
/// Publishable key for the hosted card widget
const STRIPE_KEY_ENV: Option<&str> = option_env!("ACADEMY_STRIPE_KEY");

const DEFAULT_BACKEND_PORT: u16 = 3000;

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub api_base: String,
    pub stripe_publishable_key: String,
    pub submission_retry: RetryPolicy,
}

/// Page origin parts used when no explicit API base is configured
#[derive(Debug, Clone, PartialEq)]
pub struct PageLocation {
    pub protocol: String,
    pub hostname: String,
}

impl AppConfig {
    /// Resolve the configuration for the running page
    pub fn load() -> Self {
        Self::resolve(API_BASE_ENV, STRIPE_KEY_ENV, page_location())
    }

    pub fn resolve(
        api_base: Option<&str>,
        stripe_key: Option<&str>,
        location: Option<PageLocation>,
    ) -> Self {
        let api_base = match api_base.map(str::trim).filter(|s| !s.is_empty()) {
            Some(base) => base.trim_end_matches('/').to_string(),
            None => match location {
                Some(loc) => format!(
                    "{}//{}:{}/api",
                    loc.protocol, loc.hostname, DEFAULT_BACKEND_PORT
                ),
                None => String::new(),
            },
        };

        Self {
            api_base,
            stripe_publishable_key: stripe_key.unwrap_or_default().to_string(),
            submission_retry: RetryPolicy::default(),
        }
    }
}

fn page_location() -> Option<PageLocation> {
    let location = web_sys::window()?.location();
    Some(PageLocation {
        protocol: location.protocol().unwrap_or_else(|_| "http:".to_string()),
        hostname: location
            .hostname()
            .unwrap_or_else(|_| "127.0.0.1".to_string()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn location() -> Option<PageLocation> {
        Some(PageLocation {
            protocol: "https:".to_string(),
            hostname: "academy.test".to_string(),
        })
    }

    #[test]
    fn test_explicit_base_wins_and_loses_trailing_slash() {
        let config = AppConfig::resolve(Some("https://api.academy.test/v1/"), None, location());
        assert_eq!(config.api_base, "https://api.academy.test/v1");
    }

    #[test]
    fn test_falls_back_to_page_host() {
        let config = AppConfig::resolve(Some("  "), Some("pk_test_1"), location());
        assert_eq!(config.api_base, "https://academy.test:3000/api");
        assert_eq!(config.stripe_publishable_key, "pk_test_1");
    }

    #[test]
    fn test_default_submission_retry() {
        let config = AppConfig::resolve(None, None, None);
        assert_eq!(config.api_base, "");
        assert_eq!(config.submission_retry.max_attempts, 3);
        assert_eq!(config.submission_retry.delay_ms, 1000);
    }
}
