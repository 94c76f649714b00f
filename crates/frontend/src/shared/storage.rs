//! Registration hand-off values kept in `localStorage`
//!
//! The payment page may be reached through a full-page redirect from the
//! card provider, so the values it needs survive outside the in-memory draft.

use web_sys::window;

const SELECTED_DIVISION_KEY: &str = "selected_division";
const USER_ID_KEY: &str = "user_id";
const USER_PHONE_KEY: &str = "user_phone";
const CUSTOMER_ID_KEY: &str = "customer_id";

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

fn set(key: &str, value: &str) {
    if let Some(storage) = get_local_storage() {
        let _ = storage.set_item(key, value);
    }
}

fn get(key: &str) -> Option<String> {
    get_local_storage()?
        .get_item(key)
        .ok()?
        .filter(|v| !v.is_empty())
}

fn remove(key: &str) {
    if let Some(storage) = get_local_storage() {
        let _ = storage.remove_item(key);
    }
}

pub fn save_selected_division(division: &str) {
    set(SELECTED_DIVISION_KEY, division);
}

pub fn get_selected_division() -> Option<String> {
    get(SELECTED_DIVISION_KEY)
}

/// Record a freshly created registrant, dropping whatever the previous one
/// left behind. The division is kept.
pub fn start_registrant(user_id: i64, phone: &str, customer_id: Option<&str>) {
    clear(ClearScope::Registrant);
    set(USER_ID_KEY, &user_id.to_string());
    set(USER_PHONE_KEY, phone);
    if let Some(customer_id) = customer_id {
        set(CUSTOMER_ID_KEY, customer_id);
    }
}

pub fn get_registrant_id() -> Option<i64> {
    get(USER_ID_KEY)?.parse().ok()
}

pub fn get_registrant_phone() -> Option<String> {
    get(USER_PHONE_KEY)
}

pub fn save_customer_id(customer_id: &str) {
    set(CUSTOMER_ID_KEY, customer_id);
}

pub fn get_customer_id() -> Option<String> {
    get(CUSTOMER_ID_KEY)
}

/// How much of the hand-off to forget
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClearScope {
    /// Registrant and provider customer; the chosen division stays
    Registrant,
    Everything,
}

impl ClearScope {
    pub fn keys(self) -> &'static [&'static str] {
        match self {
            ClearScope::Registrant => &[USER_ID_KEY, USER_PHONE_KEY, CUSTOMER_ID_KEY],
            ClearScope::Everything => &[
                SELECTED_DIVISION_KEY,
                USER_ID_KEY,
                USER_PHONE_KEY,
                CUSTOMER_ID_KEY,
            ],
        }
    }
}

pub fn clear(scope: ClearScope) {
    for key in scope.keys() {
        remove(key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registrant_scope_keeps_division() {
        let keys = ClearScope::Registrant.keys();
        assert!(!keys.contains(&SELECTED_DIVISION_KEY));
        for key in [USER_ID_KEY, USER_PHONE_KEY, CUSTOMER_ID_KEY] {
            assert!(keys.contains(&key), "{} should be cleared", key);
        }
    }

    #[test]
    fn test_everything_scope_covers_every_key() {
        let keys = ClearScope::Everything.keys();
        assert_eq!(keys.len(), 4);
        assert!(ClearScope::Registrant.keys().iter().all(|k| keys.contains(k)));
        assert!(keys.contains(&SELECTED_DIVISION_KEY));
    }
}
