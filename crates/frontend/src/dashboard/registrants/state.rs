use contracts::domain::registration::{PaymentStatus, Registrant};
use leptos::prelude::*;
use std::cmp::Ordering;

use crate::shared::list_utils::{compare_text, filter_list, sort_list, Searchable, Sortable};

impl Sortable for Registrant {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "phone" => self.phone.cmp(&other.phone),
            "plan" => compare_text(self.plan.as_deref(), other.plan.as_deref()),
            "payment_status" => status_rank(self.payment_status).cmp(&status_rank(other.payment_status)),
            "created_at" => compare_text(self.created_at.as_deref(), other.created_at.as_deref()),
            _ => compare_text(Some(&self.full_name), Some(&other.full_name)),
        }
    }
}

impl Searchable for Registrant {
    fn matches_filter(&self, filter: &str) -> bool {
        if self.full_name.to_lowercase().contains(filter) {
            return true;
        }
        // "(416) 555" should find 4165550100
        let wanted = digits(filter);
        !wanted.is_empty() && digits(&self.phone).contains(&wanted)
    }
}

fn digits(value: &str) -> String {
    value.chars().filter(char::is_ascii_digit).collect()
}

fn status_rank(status: PaymentStatus) -> u8 {
    match status {
        PaymentStatus::Unpaid => 0,
        PaymentStatus::Pending => 1,
        PaymentStatus::Paid => 2,
    }
}

#[derive(Clone, Debug)]
pub struct RegistrantsListState {
    pub items: Vec<Registrant>,
    pub search_query: String,
    pub status_filter: Option<PaymentStatus>,
    pub sort_field: String,
    pub sort_ascending: bool,
    pub is_loaded: bool,
}

impl Default for RegistrantsListState {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            search_query: String::new(),
            status_filter: None,
            sort_field: "full_name".to_string(),
            sort_ascending: true,
            is_loaded: false,
        }
    }
}

impl RegistrantsListState {
    /// Rows after search, status filter and sort
    pub fn visible(&self) -> Vec<Registrant> {
        let mut rows: Vec<Registrant> = filter_list(&self.items, &self.search_query)
            .into_iter()
            .filter(|r| self.status_filter.map_or(true, |s| r.payment_status == s))
            .collect();
        sort_list(&mut rows, &self.sort_field, self.sort_ascending);
        rows
    }

    /// Click on a column header: flip direction or switch column
    pub fn toggle_sort(&mut self, field: &str) {
        if self.sort_field == field {
            self.sort_ascending = !self.sort_ascending;
        } else {
            self.sort_field = field.to_string();
            self.sort_ascending = true;
        }
    }

    /// Apply a status change the backend accepted
    pub fn set_status(&mut self, id: i64, status: PaymentStatus) {
        if let Some(row) = self.items.iter_mut().find(|r| r.id == id) {
            row.payment_status = status;
        }
    }

    pub fn count_with(&self, status: PaymentStatus) -> usize {
        self.items.iter().filter(|r| r.payment_status == status).count()
    }
}

pub fn create_state() -> RwSignal<RegistrantsListState> {
    RwSignal::new(RegistrantsListState::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registrant(id: i64, name: &str, phone: &str, status: PaymentStatus) -> Registrant {
        Registrant {
            id,
            full_name: name.to_string(),
            date_of_birth: None,
            guardian_name: None,
            phone: phone.to_string(),
            email: None,
            plan: Some("U9_U10".to_string()),
            payment_status: status,
            created_at: None,
        }
    }

    fn state() -> RegistrantsListState {
        RegistrantsListState {
            items: vec![
                registrant(1, "Maya Chen", "416-555-0100", PaymentStatus::Paid),
                registrant(2, "Omar Haddad", "6045550199", PaymentStatus::Unpaid),
                registrant(3, "Lucas Martin", "(905) 555-0142", PaymentStatus::Pending),
            ],
            ..Default::default()
        }
    }

    fn ids(rows: &[Registrant]) -> Vec<i64> {
        rows.iter().map(|r| r.id).collect()
    }

    #[test]
    fn test_search_by_name_or_phone() {
        let mut s = state();
        s.search_query = "omar".to_string();
        assert_eq!(ids(&s.visible()), vec![2]);

        s.search_query = "(416) 555".to_string();
        assert_eq!(ids(&s.visible()), vec![1]);

        s.search_query = "555".to_string();
        assert_eq!(ids(&s.visible()), vec![3, 1, 2]);
    }

    #[test]
    fn test_letters_only_query_does_not_match_every_phone() {
        let mut s = state();
        s.search_query = "zz".to_string();
        assert!(s.visible().is_empty());
    }

    #[test]
    fn test_status_filter_and_sort() {
        let mut s = state();
        s.status_filter = Some(PaymentStatus::Unpaid);
        assert_eq!(ids(&s.visible()), vec![2]);

        s.status_filter = None;
        s.toggle_sort("payment_status");
        assert_eq!(ids(&s.visible()), vec![2, 3, 1]);
        s.toggle_sort("payment_status");
        assert_eq!(ids(&s.visible()), vec![1, 3, 2]);
    }

    #[test]
    fn test_set_status_updates_row() {
        let mut s = state();
        s.set_status(2, PaymentStatus::Paid);
        assert_eq!(s.count_with(PaymentStatus::Paid), 2);
        s.set_status(99, PaymentStatus::Paid);
        assert_eq!(s.count_with(PaymentStatus::Paid), 2);
    }
}
