//! User profile domain model.
//!
//! Field names on the wire follow the backend (`nombre`, `apellido`,
//! `fecha_nacimiento`). Login responses sometimes prefix them with `user_`,
//! which the aliases accept.

pub mod credentials;
pub(crate) mod date_format;

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

use crate::health;

pub use credentials::{
    AuthMethods, ForgotPasswordRequest, GoogleLoginData, LoginCredentials, LoginMethod,
    PasswordPolicy, PasswordRecoveryOutcome, PasswordRecoveryReceipt, ProfileUpdate,
    ResetPasswordRequest, SignInReceipt,
};

/// Backend user identifier.
///
/// The backend emits it as a number from SQL rows and as a string from JWT
/// claims; both forms normalize to the same textual id.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for UserId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl<'de> Deserialize<'de> for UserId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Number(i64),
            Text(String),
        }

        match RawId::deserialize(deserializer)? {
            RawId::Number(n) => Ok(UserId(n.to_string())),
            RawId::Text(s) if !s.trim().is_empty() => Ok(UserId(s)),
            RawId::Text(_) => Err(serde::de::Error::custom("user id must not be empty")),
        }
    }
}

/// Profile of the signed-in user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(alias = "user_id")]
    pub id: UserId,
    #[serde(rename = "nombre", alias = "user_nombre", default)]
    pub given_name: String,
    #[serde(rename = "apellido", alias = "user_apellido", default)]
    pub family_name: String,
    #[serde(alias = "user_email", default)]
    pub email: String,
    #[serde(rename = "fecha_nacimiento", default, with = "date_format")]
    pub birth_date: Option<NaiveDate>,
}

impl UserProfile {
    pub fn display_name(&self) -> String {
        let full = format!("{} {}", self.given_name, self.family_name);
        let full = full.trim();
        if full.is_empty() {
            self.email.clone()
        } else {
            full.to_string()
        }
    }

    /// Age in whole years on `today`, if the birth date is known.
    pub fn age_on(&self, today: NaiveDate) -> Option<u32> {
        self.birth_date
            .and_then(|birth| health::age_on(birth, today))
    }

    /// Merge-patch: fields present in `patch` replace the current values.
    pub fn apply_patch(&mut self, patch: &UserProfilePatch) {
        if let Some(given_name) = &patch.given_name {
            self.given_name = given_name.clone();
        }
        if let Some(family_name) = &patch.family_name {
            self.family_name = family_name.clone();
        }
        if let Some(email) = &patch.email {
            self.email = email.clone();
        }
        if let Some(birth_date) = patch.birth_date {
            self.birth_date = Some(birth_date);
        }
    }
}

/// Partial profile used for local merge-patches.
///
/// The id is never patched; a patch always targets the cached user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfilePatch {
    #[serde(rename = "nombre", skip_serializing_if = "Option::is_none", default)]
    pub given_name: Option<String>,
    #[serde(rename = "apellido", skip_serializing_if = "Option::is_none", default)]
    pub family_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub email: Option<String>,
    #[serde(
        rename = "fecha_nacimiento",
        skip_serializing_if = "Option::is_none",
        default,
        with = "date_format"
    )]
    pub birth_date: Option<NaiveDate>,
}

impl UserProfilePatch {
    pub fn is_empty(&self) -> bool {
        self.given_name.is_none()
            && self.family_name.is_none()
            && self.email.is_none()
            && self.birth_date.is_none()
    }
}
