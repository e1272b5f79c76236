//! Auth Inputs
//!
//! Login and registration form data. Credential checks and password
//! hashing happen in the backend.

use serde::Serialize;

use crate::error::{AppError, AppResult};

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct LoginInput {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterInput {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
}

impl RegisterInput {
    /// Every field is required. Names and email are trimmed; the password
    /// is kept as typed.
    pub fn validate(&self) -> AppResult<RegisterInput> {
        let first_name = self.first_name.trim();
        let last_name = self.last_name.trim();
        let email = self.email.trim();
        if first_name.is_empty() || last_name.is_empty() || email.is_empty() || self.password.is_empty() {
            return Err(AppError::Validation("Please fill all fields".to_string()));
        }
        Ok(RegisterInput {
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            email: email.to_string(),
            password: self.password.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input() -> RegisterInput {
        RegisterInput {
            first_name: " Ada ".into(),
            last_name: "Lovelace".into(),
            email: "ada@example.com ".into(),
            password: " secret ".into(),
        }
    }

    #[test]
    fn test_validate_trims_names_and_email() {
        let valid = input().validate().unwrap();
        assert_eq!(valid.first_name, "Ada");
        assert_eq!(valid.email, "ada@example.com");
        assert_eq!(valid.password, " secret ");
    }

    #[test]
    fn test_any_blank_field_is_rejected() {
        let mut missing = input();
        missing.last_name = "   ".into();
        assert_eq!(
            missing.validate(),
            Err(AppError::Validation("Please fill all fields".into()))
        );

        let mut no_password = input();
        no_password.password.clear();
        assert!(no_password.validate().is_err());
    }

    #[test]
    fn test_register_serializes_camel_case() {
        let json = serde_json::to_value(input()).unwrap();
        assert!(json.get("firstName").is_some());
        assert!(json.get("lastName").is_some());
    }
}
