//! Reading the payment result the provider puts in the return URL

use std::collections::HashMap;

use super::outcome::{outcome_from_intent, PaymentOutcome, ProviderIntent};

/// Parameters appended to the return URL after an off-page confirmation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RedirectResult {
    pub redirect_status: String,
    pub payment_intent: Option<String>,
}

impl RedirectResult {
    pub fn outcome(&self) -> PaymentOutcome {
        match self.redirect_status.as_str() {
            "failed" => PaymentOutcome::Declined {
                message: "Your bank did not authorize the payment. Please try again."
                    .to_string(),
            },
            status => outcome_from_intent(&ProviderIntent {
                id: self.payment_intent.clone(),
                status: status.to_string(),
            }),
        }
    }
}

/// Look for `redirect_status` in the query string, then in the fragment.
///
/// Returns `None` on a normal page load.
pub fn parse_redirect(search: &str, hash: &str) -> Option<RedirectResult> {
    [search, hash].into_iter().find_map(|part| {
        let params = parse_params(part);
        let redirect_status = params.get("redirect_status")?.trim().to_string();
        if redirect_status.is_empty() {
            return None;
        }
        Some(RedirectResult {
            redirect_status,
            payment_intent: params
                .get("payment_intent")
                .filter(|v| !v.is_empty())
                .cloned(),
        })
    })
}

fn parse_params(part: &str) -> HashMap<String, String> {
    let trimmed = part.trim_start_matches(['?', '#']);
    // Fragments produced by hash routing look like "/payment?redirect_status=..."
    let query = trimmed.split_once('?').map(|(_, q)| q).unwrap_or(trimmed);
    serde_qs::from_str(query).unwrap_or_default()
}

const REDIRECT_KEYS: &[&str] = &[
    "redirect_status",
    "payment_intent",
    "payment_intent_client_secret",
];

fn without_redirect_keys(query: &str) -> String {
    query
        .split('&')
        .filter(|pair| {
            let key = pair.split_once('=').map(|(k, _)| k).unwrap_or(pair);
            !pair.is_empty() && !REDIRECT_KEYS.contains(&key)
        })
        .collect::<Vec<_>>()
        .join("&")
}

/// `pathname` + `search` + `hash` with the provider's parameters removed
pub fn url_without_redirect(pathname: &str, search: &str, hash: &str) -> String {
    let mut url = pathname.to_string();

    let query = without_redirect_keys(search.trim_start_matches('?'));
    if !query.is_empty() {
        url.push('?');
        url.push_str(&query);
    }

    let fragment = hash.trim_start_matches('#');
    let fragment = match fragment.split_once('?') {
        Some((route, query)) => {
            let query = without_redirect_keys(query);
            if query.is_empty() {
                route.to_string()
            } else {
                format!("{}?{}", route, query)
            }
        }
        None if fragment.contains('=') => without_redirect_keys(fragment),
        None => fragment.to_string(),
    };
    if !fragment.is_empty() {
        url.push('#');
        url.push_str(&fragment);
    }
    url
}

/// Drop the redirect parameters from the address bar so a reload does not
/// record the payment again
pub fn forget_current_redirect() {
    let Some(window) = web_sys::window() else {
        return;
    };
    let location = window.location();
    let url = url_without_redirect(
        &location.pathname().unwrap_or_default(),
        &location.search().unwrap_or_default(),
        &location.hash().unwrap_or_default(),
    );
    if let Ok(history) = window.history() {
        if let Err(e) = history.replace_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(&url)) {
            log::warn!("Could not clean the return URL: {:?}", e);
        }
    }
}

/// The current page's redirect parameters, if any
pub fn current_redirect() -> Option<RedirectResult> {
    let location = web_sys::window()?.location();
    let search = location.search().unwrap_or_default();
    let hash = location.hash().unwrap_or_default();
    parse_redirect(&search, &hash)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_load_has_no_redirect() {
        assert_eq!(parse_redirect("", ""), None);
        assert_eq!(parse_redirect("?division=U5_U8", ""), None);
    }

    #[test]
    fn test_query_redirect() {
        let result = parse_redirect(
            "?payment_intent=pi_3Nx&payment_intent_client_secret=pi_3Nx_secret&redirect_status=succeeded",
            "",
        )
        .unwrap();
        assert_eq!(result.redirect_status, "succeeded");
        assert_eq!(result.payment_intent.as_deref(), Some("pi_3Nx"));
        assert_eq!(
            result.outcome(),
            PaymentOutcome::Success {
                payment_intent_id: Some("pi_3Nx".to_string())
            }
        );
    }

    #[test]
    fn test_fragment_redirect() {
        let result = parse_redirect("", "#/payment?redirect_status=processing").unwrap();
        assert_eq!(result.payment_intent, None);
        assert_eq!(result.outcome(), PaymentOutcome::Processing);
    }

    #[test]
    fn test_failed_redirect_is_declined() {
        let result = parse_redirect("?redirect_status=failed&payment_intent=pi_1", "").unwrap();
        assert!(matches!(result.outcome(), PaymentOutcome::Declined { .. }));
    }

    #[test]
    fn test_url_without_redirect_keeps_other_params() {
        assert_eq!(
            url_without_redirect(
                "/payment",
                "?payment_intent=pi_3Nx&payment_intent_client_secret=pi_3Nx_secret&redirect_status=succeeded",
                "",
            ),
            "/payment"
        );
        assert_eq!(
            url_without_redirect("/payment", "?division=U5_U8&redirect_status=processing", ""),
            "/payment?division=U5_U8"
        );
        assert_eq!(
            url_without_redirect("/", "", "#/payment?redirect_status=succeeded&payment_intent=pi_1"),
            "/#/payment"
        );
        assert_eq!(url_without_redirect("/contact", "", "#top"), "/contact#top");
    }

    #[test]
    fn test_cleaned_url_parses_as_plain_load() {
        let url = url_without_redirect("/payment", "?redirect_status=succeeded&ref=mail", "");
        let (_, search) = url.split_once('?').unwrap();
        assert_eq!(parse_redirect(search, ""), None);
    }
}
