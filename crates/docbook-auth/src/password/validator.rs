//! Password policy enforcement for self-service password changes.

use docbook_core::config::AuthConfig;
use docbook_core::error::AppError;

/// Validates new passwords against configured length policy.
#[derive(Debug, Clone)]
pub struct PasswordValidator {
    /// Minimum password length in characters.
    min_length: usize,
    /// Maximum password length in characters.
    max_length: usize,
}

impl PasswordValidator {
    /// Creates a new validator from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            min_length: config.password_min_length,
            max_length: config.password_max_length,
        }
    }

    /// Validates a password against all configured policies.
    ///
    /// Returns `Ok(())` if the password meets all requirements,
    /// or an error describing the first violation found.
    pub fn validate(&self, password: &str) -> Result<(), AppError> {
        if password.trim().is_empty() {
            return Err(AppError::validation("Password must not be blank"));
        }

        let length = password.chars().count();
        if length < self.min_length {
            return Err(AppError::validation(format!(
                "Password must be at least {} characters long",
                self.min_length
            )));
        }

        if length > self.max_length {
            return Err(AppError::validation(format!(
                "Password must be at most {} characters long",
                self.max_length
            )));
        }

        Ok(())
    }

    /// Validates that a new password differs from the old one.
    pub fn validate_not_same(
        &self,
        old_password: &str,
        new_password: &str,
    ) -> Result<(), AppError> {
        if old_password == new_password {
            return Err(AppError::validation(
                "New password must be different from the current password",
            ));
        }
        Ok(())
    }
}

impl Default for PasswordValidator {
    fn default() -> Self {
        Self::new(&AuthConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_bounds() {
        let v = PasswordValidator::default();
        assert!(v.validate("1234567").is_err());
        assert!(v.validate("12345678").is_ok());
        assert!(v.validate(&"x".repeat(129)).is_err());
    }

    #[test]
    fn test_blank_rejected() {
        let v = PasswordValidator::default();
        assert!(v.validate("          ").is_err());
    }

    #[test]
    fn test_counts_characters_not_bytes() {
        let v = PasswordValidator::default();
        assert!(v.validate("ñññññññ").is_err());
        assert!(v.validate("ññññññññ").is_ok());
    }

    #[test]
    fn test_not_same() {
        let v = PasswordValidator::default();
        assert!(v.validate_not_same("abcdefgh", "abcdefgh").is_err());
        assert!(v.validate_not_same("abcdefgh", "abcdefgi").is_ok());
    }
}
