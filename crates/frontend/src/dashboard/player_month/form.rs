use crate::dashboard::upload::{require_image, ImageMeta};
use crate::shared::validation::{parse_iso_date, FieldErrors, ValidationRules};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct PlayerMonthForm {
    pub name: String,
    /// `YYYY-MM`, as produced by `<input type="month">`
    pub month: String,
    pub description: String,
}

impl PlayerMonthForm {
    pub fn validate(&self, image: Option<&ImageMeta>) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        errors.check("name", "Player name", &self.name, ValidationRules::required().with_max_length(80));
        errors.check("month", "Month", &self.month, ValidationRules::required());
        if errors.get("month").is_none() && !is_month(self.month.trim()) {
            errors.insert("month", "Month must look like 2026-10");
        }
        errors.check(
            "description",
            "Description",
            &self.description,
            ValidationRules::none().with_max_length(500),
        );
        require_image(&mut errors, image);
        errors.into_result()
    }
}

fn is_month(value: &str) -> bool {
    value.len() == 7 && parse_iso_date(&format!("{}-01", value)).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn photo() -> ImageMeta {
        ImageMeta {
            name: "maya.jpg".to_string(),
            content_type: "image/jpeg".to_string(),
            size: 150_000.0,
        }
    }

    #[test]
    fn test_valid_entry() {
        let form = PlayerMonthForm {
            name: "Maya Chen".to_string(),
            month: "2026-10".to_string(),
            description: String::new(),
        };
        assert!(form.validate(Some(&photo())).is_ok());
    }

    #[test]
    fn test_month_format() {
        for month in ["October", "2026-13", "2026-1", "26-10"] {
            let form = PlayerMonthForm {
                name: "Maya Chen".to_string(),
                month: month.to_string(),
                description: String::new(),
            };
            let errors = form.validate(Some(&photo())).unwrap_err();
            assert_eq!(errors.get("month"), Some("Month must look like 2026-10"), "{month}");
        }
    }

    #[test]
    fn test_missing_fields() {
        let errors = PlayerMonthForm::default().validate(None).unwrap_err();
        assert_eq!(errors.fields().collect::<Vec<_>>(), vec!["name", "month", "image"]);
    }
}
