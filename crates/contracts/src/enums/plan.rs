use serde::{Deserialize, Serialize};

/// Age-bracket program a registrant enrolls in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CanonicalPlan {
    #[serde(rename = "U5_U8")]
    U5U8,
    #[serde(rename = "U9_U10")]
    U9U10,
    #[serde(rename = "U11_U12")]
    U11U12,
    #[serde(rename = "U13_U14")]
    U13U14,
    #[serde(rename = "U15_U18")]
    U15U18,
}

impl CanonicalPlan {
    /// Canonical key, as understood by the backend
    pub fn code(&self) -> &'static str {
        match self {
            CanonicalPlan::U5U8 => "U5_U8",
            CanonicalPlan::U9U10 => "U9_U10",
            CanonicalPlan::U11U12 => "U11_U12",
            CanonicalPlan::U13U14 => "U13_U14",
            CanonicalPlan::U15U18 => "U15_U18",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            CanonicalPlan::U5U8 => "Under 5 – Under 8",
            CanonicalPlan::U9U10 => "Under 9 – Under 10",
            CanonicalPlan::U11U12 => "Under 11 – Under 12",
            CanonicalPlan::U13U14 => "Under 13 – Under 14",
            CanonicalPlan::U15U18 => "Under 15 – Under 18",
        }
    }

    /// Inclusive age bracket covered by the plan
    pub fn age_range(&self) -> (u32, u32) {
        match self {
            CanonicalPlan::U5U8 => (5, 8),
            CanonicalPlan::U9U10 => (9, 10),
            CanonicalPlan::U11U12 => (11, 12),
            CanonicalPlan::U13U14 => (13, 14),
            CanonicalPlan::U15U18 => (15, 18),
        }
    }

    pub fn monthly_fee_label(&self) -> &'static str {
        match self {
            CanonicalPlan::U5U8 => "$60 / month",
            CanonicalPlan::U9U10 => "$75 / month",
            CanonicalPlan::U11U12 => "$85 / month",
            CanonicalPlan::U13U14 => "$95 / month",
            CanonicalPlan::U15U18 => "$110 / month",
        }
    }

    pub fn all() -> Vec<CanonicalPlan> {
        vec![
            CanonicalPlan::U5U8,
            CanonicalPlan::U9U10,
            CanonicalPlan::U11U12,
            CanonicalPlan::U13U14,
            CanonicalPlan::U15U18,
        ]
    }

    /// Exact lookup by canonical key; no normalization is applied
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "U5_U8" => Some(CanonicalPlan::U5U8),
            "U9_U10" => Some(CanonicalPlan::U9U10),
            "U11_U12" => Some(CanonicalPlan::U11U12),
            "U13_U14" => Some(CanonicalPlan::U13U14),
            "U15_U18" => Some(CanonicalPlan::U15U18),
            _ => None,
        }
    }
}

impl std::fmt::Display for CanonicalPlan {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_round_trips_through_from_code() {
        for plan in CanonicalPlan::all() {
            assert_eq!(CanonicalPlan::from_code(plan.code()), Some(plan));
        }
    }

    #[test]
    fn test_serde_uses_canonical_key() {
        let json = serde_json::to_string(&CanonicalPlan::U13U14).unwrap();
        assert_eq!(json, "\"U13_U14\"");
        let plan: CanonicalPlan = serde_json::from_str("\"U5_U8\"").unwrap();
        assert_eq!(plan, CanonicalPlan::U5U8);
    }

    #[test]
    fn test_from_code_is_exact() {
        assert_eq!(CanonicalPlan::from_code("u5_u8"), None);
        assert_eq!(CanonicalPlan::from_code("U5-U8"), None);
    }
}
