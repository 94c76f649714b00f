//! Declarative field validation for forms
//!
//! Each form lists its fields with a set of [`ValidationRules`] and collects
//! failures into [`FieldErrors`]. Nothing here touches the network.

use chrono::NaiveDate;

/// Format constraint applied after the required/length checks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// 10 to 15 digits once `+ - ( ) .` and spaces are stripped
    Phone,
    Email,
    /// `YYYY-MM-DD`
    IsoDate,
    /// `YYYY-MM-DD`, strictly before today
    PastDate,
    /// Parses as a number greater than zero
    PositiveNumber,
}

/// Validation rules for a field
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ValidationRules {
    pub required: bool,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
    pub format: Option<Format>,
}

impl ValidationRules {
    /// All optional, no constraints
    pub const fn none() -> Self {
        Self {
            required: false,
            min_length: None,
            max_length: None,
            format: None,
        }
    }

    pub const fn required() -> Self {
        Self {
            required: true,
            min_length: None,
            max_length: None,
            format: None,
        }
    }

    pub const fn with_format(self, format: Format) -> Self {
        Self {
            format: Some(format),
            ..self
        }
    }

    pub const fn with_max_length(self, max: usize) -> Self {
        Self {
            max_length: Some(max),
            ..self
        }
    }

    pub const fn with_min_length(self, min: usize) -> Self {
        Self {
            min_length: Some(min),
            ..self
        }
    }

    /// Validate a string value against the rules.
    ///
    /// Empty optional values pass without format checks.
    pub fn validate_string(&self, value: &str, field_label: &str) -> Result<(), String> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            if self.required {
                return Err(format!("{} is required", field_label));
            }
            return Ok(());
        }

        if let Some(min) = self.min_length {
            if trimmed.chars().count() < min {
                return Err(format!("{} must be at least {} characters", field_label, min));
            }
        }

        if let Some(max) = self.max_length {
            if trimmed.chars().count() > max {
                return Err(format!("{} must not exceed {} characters", field_label, max));
            }
        }

        match self.format {
            Some(Format::Phone) if !is_phone(trimmed) => {
                Err(format!("{} must be a valid phone number", field_label))
            }
            Some(Format::Email) if !is_email(trimmed) => {
                Err(format!("{} must be a valid email address", field_label))
            }
            Some(Format::IsoDate) if parse_iso_date(trimmed).is_none() => {
                Err(format!("{} must be a date (YYYY-MM-DD)", field_label))
            }
            Some(Format::PastDate) => match parse_iso_date(trimmed) {
                None => Err(format!("{} must be a date (YYYY-MM-DD)", field_label)),
                Some(date) if date >= today() => {
                    Err(format!("{} must be in the past", field_label))
                }
                Some(_) => Ok(()),
            },
            Some(Format::PositiveNumber) => match trimmed.parse::<f64>() {
                Ok(n) if n.is_finite() && n > 0.0 => Ok(()),
                Ok(_) => Err(format!("{} must be greater than zero", field_label)),
                Err(_) => Err(format!("{} must be a number", field_label)),
            },
            _ => Ok(()),
        }
    }
}

/// Field-scoped validation failures, in the order the form declares its fields
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FieldErrors {
    entries: Vec<(&'static str, String)>,
}

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `rules` on `value` and record the first failure under `field`
    pub fn check(&mut self, field: &'static str, label: &str, value: &str, rules: ValidationRules) {
        if let Err(message) = rules.validate_string(value, label) {
            self.insert(field, message);
        }
    }

    pub fn insert(&mut self, field: &'static str, message: impl Into<String>) {
        if self.get(field).is_none() {
            self.entries.push((field, message.into()));
        }
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(name, _)| *name == field)
            .map(|(_, message)| message.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn fields(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|(name, _)| *name)
    }

    /// `Ok(())` when nothing failed
    pub fn into_result(self) -> Result<(), FieldErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

pub fn is_phone(value: &str) -> bool {
    let mut digits = 0usize;
    for (i, c) in value.chars().enumerate() {
        match c {
            '0'..='9' => digits += 1,
            '+' if i == 0 => {}
            ' ' | '-' | '(' | ')' | '.' => {}
            _ => return false,
        }
    }
    (10..=15).contains(&digits)
}

pub fn is_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
}

pub fn parse_iso_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
}

fn today() -> NaiveDate {
    chrono::Utc::now().date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_rejects_blank() {
        let rules = ValidationRules::required();
        assert!(rules.validate_string("   ", "Name").is_err());
        assert!(rules.validate_string("Ana", "Name").is_ok());
    }

    #[test]
    fn test_optional_blank_skips_format() {
        let rules = ValidationRules::none().with_format(Format::Email);
        assert!(rules.validate_string("", "Email").is_ok());
        assert!(rules.validate_string("nope", "Email").is_err());
    }

    #[test]
    fn test_phone_format() {
        assert!(is_phone("(416) 555-0100"));
        assert!(is_phone("+1 604.555.0100"));
        assert!(!is_phone("555-0100"));
        assert!(!is_phone("416-555-01OO"));
        assert!(!is_phone("41+6555010000"));
    }

    #[test]
    fn test_email_format() {
        assert!(is_email("parent@example.com"));
        assert!(!is_email("parent@example"));
        assert!(!is_email("parent example@x.com"));
        assert!(!is_email("@example.com"));
        assert!(!is_email("a@b@c.com"));
    }

    #[test]
    fn test_past_date() {
        let rules = ValidationRules::required().with_format(Format::PastDate);
        assert!(rules.validate_string("2014-06-30", "Date of birth").is_ok());
        assert!(rules.validate_string("2999-01-01", "Date of birth").is_err());
        assert!(rules.validate_string("30/06/2014", "Date of birth").is_err());
    }

    #[test]
    fn test_positive_number() {
        let rules = ValidationRules::required().with_format(Format::PositiveNumber);
        assert!(rules.validate_string("142.5", "Height").is_ok());
        assert_eq!(
            rules.validate_string("0", "Height"),
            Err("Height must be greater than zero".to_string())
        );
        assert_eq!(
            rules.validate_string("tall", "Height"),
            Err("Height must be a number".to_string())
        );
    }

    #[test]
    fn test_field_errors_keep_first_message_per_field() {
        let mut errors = FieldErrors::new();
        errors.insert("phone", "first");
        errors.insert("phone", "second");
        errors.insert("email", "bad");
        assert_eq!(errors.get("phone"), Some("first"));
        assert_eq!(errors.fields().collect::<Vec<_>>(), vec!["phone", "email"]);
        assert!(errors.into_result().is_err());
    }
}
