use contracts::system::auth::{AdminProfile, UpdateAdminProfile};

use crate::shared::validation::{FieldErrors, Format, ValidationRules};

pub const MIN_PASSWORD_LENGTH: usize = 8;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProfileForm {
    pub name: String,
    pub email: String,
    /// Blank keeps the current password
    pub password: String,
    pub confirm_password: String,
}

impl ProfileForm {
    pub fn from_profile(profile: &AdminProfile) -> Self {
        Self {
            name: profile.name.clone(),
            email: profile.email.clone(),
            ..Default::default()
        }
    }

    pub fn validate(&self) -> Result<UpdateAdminProfile, FieldErrors> {
        let mut errors = FieldErrors::new();
        errors.check("name", "Name", &self.name, ValidationRules::required().with_max_length(100));
        errors.check(
            "email",
            "Email",
            &self.email,
            ValidationRules::required().with_format(Format::Email),
        );
        errors.check(
            "password",
            "Password",
            &self.password,
            ValidationRules::none().with_min_length(MIN_PASSWORD_LENGTH),
        );
        if self.password != self.confirm_password {
            errors.insert("confirm_password", "Passwords do not match");
        }
        errors.into_result()?;

        Ok(UpdateAdminProfile {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            password: (!self.password.is_empty()).then(|| self.password.clone()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile() -> AdminProfile {
        AdminProfile {
            id: 1,
            name: "Coach Dana".to_string(),
            email: "dana@academy.test".to_string(),
        }
    }

    #[test]
    fn test_blank_password_keeps_current() {
        let update = ProfileForm::from_profile(&profile()).validate().unwrap();
        assert_eq!(update.password, None);
        assert_eq!(update.name, "Coach Dana");
    }

    #[test]
    fn test_password_change_needs_matching_confirmation() {
        let mut form = ProfileForm::from_profile(&profile());
        form.password = "new-secret-1".to_string();
        form.confirm_password = "new-secret-2".to_string();
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.get("confirm_password"), Some("Passwords do not match"));

        form.confirm_password = "new-secret-1".to_string();
        assert_eq!(form.validate().unwrap().password.as_deref(), Some("new-secret-1"));
    }

    #[test]
    fn test_short_password_and_bad_email() {
        let form = ProfileForm {
            email: "dana".to_string(),
            password: "short".to_string(),
            confirm_password: "short".to_string(),
            ..ProfileForm::from_profile(&profile())
        };
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.fields().collect::<Vec<_>>(), vec!["email", "password"]);
    }
}
