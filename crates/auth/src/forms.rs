//! Login and signup form checks, applied before the session store is called.

use serde::{Deserialize, Serialize};

use crate::{AuthError, AuthResult, MIN_PASSWORD_LEN};

/// Submitted login form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    pub fn validate(&self) -> AuthResult<()> {
        if self.email.is_empty() || self.password.is_empty() {
            return Err(AuthError::MissingFields);
        }
        Ok(())
    }
}

/// Submitted signup form.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupForm {
    pub email: String,
    pub password: String,
    pub display_name: String,
}

impl SignupForm {
    pub fn validate(&self) -> AuthResult<()> {
        if self.email.is_empty() || self.password.is_empty() || self.display_name.is_empty() {
            return Err(AuthError::MissingFields);
        }
        if self.password.chars().count() < MIN_PASSWORD_LEN {
            return Err(AuthError::PasswordTooShort {
                min: MIN_PASSWORD_LEN,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_form_requires_both_fields() {
        let form = LoginForm {
            email: "a@b.com".to_string(),
            password: String::new(),
        };
        assert!(matches!(form.validate(), Err(AuthError::MissingFields)));
    }

    #[test]
    fn test_signup_form_password_length() {
        let mut form = SignupForm {
            email: "a@b.com".to_string(),
            password: "12345".to_string(),
            display_name: "A".to_string(),
        };
        let err = form.validate().unwrap_err();
        assert_eq!(err.to_string(), "Password must be at least 6 characters");

        form.password = "123456".to_string();
        assert!(form.validate().is_ok());

        form.display_name = String::new();
        assert!(matches!(form.validate(), Err(AuthError::MissingFields)));
    }
}
