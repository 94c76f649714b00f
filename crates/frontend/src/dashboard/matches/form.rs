//! Editable match fixture

use chrono::NaiveTime;
use contracts::domain::matches::{MatchDto, MatchInput};

use crate::shared::validation::{FieldErrors, Format, ValidationRules};

/// Raw text of the match editor
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MatchForm {
    /// `Some` when editing an existing fixture
    pub id: Option<i64>,
    pub home_team: String,
    pub away_team: String,
    pub match_date: String,
    pub match_time: String,
    pub venue: String,
    pub home_score: String,
    pub away_score: String,
    pub division: String,
}

impl MatchForm {
    pub fn from_dto(m: &MatchDto) -> Self {
        Self {
            id: Some(m.id),
            home_team: m.home_team.clone(),
            away_team: m.away_team.clone(),
            match_date: m.match_date.clone(),
            match_time: m.match_time.clone().unwrap_or_default(),
            venue: m.venue.clone(),
            home_score: m.home_score.map(|s| s.to_string()).unwrap_or_default(),
            away_score: m.away_score.map(|s| s.to_string()).unwrap_or_default(),
            division: m.division.clone().unwrap_or_default(),
        }
    }

    pub fn is_edit(&self) -> bool {
        self.id.is_some()
    }

    pub fn validate(&self) -> Result<MatchInput, FieldErrors> {
        let mut errors = FieldErrors::new();
        let team = ValidationRules::required().with_max_length(80);
        errors.check("home_team", "Home team", &self.home_team, team);
        errors.check("away_team", "Away team", &self.away_team, team);
        errors.check(
            "match_date",
            "Date",
            &self.match_date,
            ValidationRules::required().with_format(Format::IsoDate),
        );
        errors.check(
            "venue",
            "Venue",
            &self.venue,
            ValidationRules::required().with_max_length(120),
        );

        let match_time = optional(&self.match_time);
        if let Some(time) = &match_time {
            if NaiveTime::parse_from_str(time, "%H:%M").is_err() {
                errors.insert("match_time", "Time must look like 18:30");
            }
        }

        let home_score = parse_score(&self.home_score, "home_score", &mut errors);
        let away_score = parse_score(&self.away_score, "away_score", &mut errors);
        if home_score.is_some() != away_score.is_some() {
            let missing = if home_score.is_none() {
                "home_score"
            } else {
                "away_score"
            };
            errors.insert(missing, "Enter both scores or leave both empty");
        }

        errors.into_result()?;
        Ok(MatchInput {
            home_team: self.home_team.trim().to_string(),
            away_team: self.away_team.trim().to_string(),
            match_date: self.match_date.trim().to_string(),
            match_time,
            venue: self.venue.trim().to_string(),
            home_score,
            away_score,
            division: optional(&self.division),
        })
    }
}

fn optional(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

fn parse_score(value: &str, field: &'static str, errors: &mut FieldErrors) -> Option<u32> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    match trimmed.parse::<u32>() {
        Ok(score) => Some(score),
        Err(_) => {
            errors.insert(field, "Score must be a whole number");
            None
        }
    }
}
