//! Password policy enforcement for new passwords.

use skillswap_core::config::auth::AuthConfig;
use skillswap_core::error::AppError;

/// Validates password strength against configured policies.
#[derive(Debug, Clone)]
pub struct PasswordValidator {
    /// Minimum password length in characters.
    min_length: usize,
}

impl PasswordValidator {
    /// Creates a new validator from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            min_length: config.password_min_length,
        }
    }

    /// Validates a password against all configured policies.
    ///
    /// Returns `Ok(())` if the password meets all requirements,
    /// or an error describing the first violation found.
    pub fn validate(&self, password: &str) -> Result<(), AppError> {
        if password.chars().count() < self.min_length {
            return Err(AppError::validation(format!(
                "Password must be at least {} characters long",
                self.min_length
            )));
        }

        if !password.chars().any(|c| c.is_alphabetic()) {
            return Err(AppError::validation(
                "Password must contain at least one letter",
            ));
        }

        if !password.chars().any(|c| c.is_ascii_digit()) {
            return Err(AppError::validation(
                "Password must contain at least one digit",
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn validator() -> PasswordValidator {
        PasswordValidator::new(&AuthConfig::default())
    }

    #[test]
    fn test_accepts_letters_and_digits() {
        assert!(validator().validate("guitar123").is_ok());
    }

    #[test]
    fn test_rejects_short() {
        let err = validator().validate("ab1").unwrap_err();
        assert!(err.message.contains("at least 8"));
    }

    #[test]
    fn test_rejects_missing_classes() {
        assert!(validator().validate("12345678").is_err());
        assert!(validator().validate("abcdefgh").is_err());
    }
}
