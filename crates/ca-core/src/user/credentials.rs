//! Request and response shapes of the authentication endpoints.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{date_format, UserProfile};
use crate::error::AuthError;

/// Email/password credentials for `POST /api/auth/login`.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginCredentials {
    pub email: String,
    pub password: String,
}

impl LoginCredentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for LoginCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginCredentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Profile obtained from the Google identity provider, exchanged against
/// `POST /api/auth/google`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoogleLoginData {
    pub email: String,
    #[serde(rename = "nombre", default)]
    pub given_name: String,
    #[serde(rename = "apellido", default)]
    pub family_name: String,
    pub google_id: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub profile_picture: Option<String>,
    #[serde(
        rename = "fecha_nacimiento",
        skip_serializing_if = "Option::is_none",
        default,
        with = "date_format"
    )]
    pub birth_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LoginMethod {
    Password,
    Google,
}

/// Successful login payload (`data` of the login envelopes).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SignInReceipt {
    #[serde(flatten)]
    pub user: UserProfile,
    #[serde(default)]
    pub is_new_user: bool,
    #[serde(default)]
    pub session_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForgotPasswordRequest {
    pub email: String,
}

/// What the recovery endpoint acknowledged.
///
/// `reset_url` is only present when the backend runs without a mail
/// transport and hands the link back directly.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PasswordRecoveryReceipt {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(rename = "resetUrl", alias = "reset_url", default)]
    pub reset_url: Option<String>,
}

/// Normalized result of a password-recovery request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PasswordRecoveryOutcome {
    Requested {
        message: Option<String>,
        reset_url: Option<String>,
    },
    Failed {
        message: String,
    },
}

impl PasswordRecoveryOutcome {
    pub fn is_requested(&self) -> bool {
        matches!(self, PasswordRecoveryOutcome::Requested { .. })
    }
}

#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResetPasswordRequest {
    pub new_password: String,
}

impl ResetPasswordRequest {
    pub fn new(new_password: impl Into<String>) -> Self {
        Self {
            new_password: new_password.into(),
        }
    }
}

impl fmt::Debug for ResetPasswordRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResetPasswordRequest")
            .field("new_password", &"<redacted>")
            .finish()
    }
}

/// Password rules enforced by the reset endpoint, checked client-side first.
pub struct PasswordPolicy;

impl PasswordPolicy {
    pub const MIN_LEN: usize = 12;

    pub fn validate(password: &str) -> Result<(), AuthError> {
        if password.chars().count() < Self::MIN_LEN {
            return Err(AuthError::Validation(format!(
                "La contraseña debe tener al menos {} caracteres",
                Self::MIN_LEN
            )));
        }
        let has_upper = password.chars().any(char::is_uppercase);
        let has_lower = password.chars().any(char::is_lowercase);
        let has_digit = password.chars().any(|c| c.is_ascii_digit());
        let has_symbol = password.chars().any(|c| !c.is_alphanumeric());
        if !(has_upper && has_lower && has_digit && has_symbol) {
            return Err(AuthError::Validation(
                "La contraseña debe incluir mayúsculas, minúsculas, números y símbolos".to_string(),
            ));
        }
        Ok(())
    }
}

/// Body of `PUT /api/settings`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileUpdate {
    #[serde(rename = "nombre")]
    pub given_name: String,
    #[serde(rename = "apellido")]
    pub family_name: String,
    pub email: String,
    #[serde(rename = "fecha_nacimiento", default, with = "date_format")]
    pub birth_date: Option<NaiveDate>,
}

/// Third-party login providers the backend has enabled.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct AuthMethods {
    #[serde(default)]
    pub google_auth_available: bool,
    #[serde(default)]
    pub google_client_id: Option<String>,
}
