//! Staff bearer token kept in a browser cookie

use wasm_bindgen::JsCast;
use web_sys::{window, HtmlDocument};

const TOKEN_COOKIE: &str = "admin_token";
const TOKEN_MAX_AGE_SECS: u32 = 60 * 60 * 24;

fn html_document() -> Option<HtmlDocument> {
    window()?.document()?.dyn_into::<HtmlDocument>().ok()
}

/// Save the staff token
pub fn save_token(token: &str) {
    if let Some(doc) = html_document() {
        let _ = doc.set_cookie(&build_cookie(TOKEN_COOKIE, token, TOKEN_MAX_AGE_SECS));
    }
}

/// Get the staff token, if any
pub fn get_token() -> Option<String> {
    let cookies = html_document()?.cookie().ok()?;
    read_cookie(&cookies, TOKEN_COOKIE)
}

/// `Authorization` header value for the current session
pub fn bearer_header() -> Option<String> {
    get_token().map(|token| format!("Bearer {}", token))
}

/// Drop the staff token
pub fn clear_token() {
    if let Some(doc) = html_document() {
        let _ = doc.set_cookie(&build_cookie(TOKEN_COOKIE, "", 0));
    }
}

pub(crate) fn build_cookie(name: &str, value: &str, max_age_secs: u32) -> String {
    format!(
        "{}={}; Path=/; Max-Age={}; SameSite=Strict",
        name,
        urlencoding::encode(value),
        max_age_secs
    )
}

pub(crate) fn read_cookie(cookies: &str, name: &str) -> Option<String> {
    cookies
        .split(';')
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| {
            urlencoding::decode(value)
                .map(|v| v.into_owned())
                .unwrap_or_else(|_| value.to_string())
        })
        .filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_cookie_picks_named_pair() {
        let cookies = "theme=dark; admin_token=abc.def; other=1";
        assert_eq!(read_cookie(cookies, "admin_token"), Some("abc.def".to_string()));
        assert_eq!(read_cookie(cookies, "missing"), None);
    }

    #[test]
    fn test_cleared_cookie_reads_as_absent() {
        assert_eq!(read_cookie("admin_token=", "admin_token"), None);
    }

    #[test]
    fn test_cookie_value_is_encoded() {
        let cookie = build_cookie("admin_token", "a b;c", 60);
        assert!(cookie.starts_with("admin_token=a%20b%3Bc; Path=/; Max-Age=60"));
        assert_eq!(
            read_cookie("admin_token=a%20b%3Bc", "admin_token"),
            Some("a b;c".to_string())
        );
    }
}
