use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchDto {
    pub id: i64,
    pub home_team: String,
    pub away_team: String,
    /// ISO date, `YYYY-MM-DD`
    pub match_date: String,
    #[serde(default)]
    pub match_time: Option<String>,
    pub venue: String,
    #[serde(default)]
    pub home_score: Option<u32>,
    #[serde(default)]
    pub away_score: Option<u32>,
    #[serde(default)]
    pub division: Option<String>,
}

impl MatchDto {
    pub fn is_played(&self) -> bool {
        self.home_score.is_some() && self.away_score.is_some()
    }

    pub fn score_label(&self) -> String {
        match (self.home_score, self.away_score) {
            (Some(h), Some(a)) => format!("{} – {}", h, a),
            _ => "vs".to_string(),
        }
    }
}

/// Body of `POST matches` and `PUT matches/{id}`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MatchInput {
    pub home_team: String,
    pub away_team: String,
    pub match_date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub match_time: Option<String>,
    pub venue: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub home_score: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub away_score: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub division: Option<String>,
}

impl From<&MatchDto> for MatchInput {
    fn from(m: &MatchDto) -> Self {
        Self {
            home_team: m.home_team.clone(),
            away_team: m.away_team.clone(),
            match_date: m.match_date.clone(),
            match_time: m.match_time.clone(),
            venue: m.venue.clone(),
            home_score: m.home_score,
            away_score: m.away_score,
            division: m.division.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_label() {
        let mut m = MatchDto {
            id: 1,
            home_team: "Academy U12".into(),
            away_team: "Rovers".into(),
            match_date: "2026-05-02".into(),
            match_time: None,
            venue: "Field 3".into(),
            home_score: None,
            away_score: None,
            division: None,
        };
        assert_eq!(m.score_label(), "vs");
        assert!(!m.is_played());

        m.home_score = Some(2);
        m.away_score = Some(1);
        assert_eq!(m.score_label(), "2 – 1");
        assert!(m.is_played());
    }
}
