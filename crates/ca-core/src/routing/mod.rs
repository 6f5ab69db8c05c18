//! Application routes and the route guard.
//!
//! One route table serves both the guard and the navigator.

mod guard;

use std::fmt;

use serde::{Deserialize, Serialize};

pub use guard::{RouteGuard, View};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "route", rename_all = "snake_case")]
pub enum Route {
    Login,
    Register,
    ForgotPassword,
    ResetPassword { token: String },
    Onboarding,
    Dashboard,
    Settings,
    SettingsOnboarding,
    Conditions,
    Patients,
    PatientDetail { id: String },
    NotFound { path: String },
}

impl Route {
    /// Match a location path against the route table.
    ///
    /// Query strings and fragments are ignored; `/` is the dashboard.
    pub fn parse(path: &str) -> Self {
        let path = path
            .split(['?', '#'])
            .next()
            .unwrap_or_default()
            .trim();
        let trimmed = path.trim_end_matches('/');
        let segments: Vec<&str> = trimmed.split('/').filter(|s| !s.is_empty()).collect();

        match segments.as_slice() {
            [] => Route::Dashboard,
            ["login"] => Route::Login,
            ["register"] => Route::Register,
            ["forgot-password"] => Route::ForgotPassword,
            ["reset-password", token] => Route::ResetPassword {
                token: (*token).to_string(),
            },
            ["onboarding"] => Route::Onboarding,
            ["dashboard"] => Route::Dashboard,
            ["settings"] => Route::Settings,
            ["settings", "onboarding"] => Route::SettingsOnboarding,
            ["condiciones"] => Route::Conditions,
            ["pacientes"] => Route::Patients,
            ["paciente", id] => Route::PatientDetail {
                id: (*id).to_string(),
            },
            _ => Route::NotFound {
                path: path.to_string(),
            },
        }
    }

    pub fn path(&self) -> String {
        match self {
            Route::Login => "/login".to_string(),
            Route::Register => "/register".to_string(),
            Route::ForgotPassword => "/forgot-password".to_string(),
            Route::ResetPassword { token } => format!("/reset-password/{token}"),
            Route::Onboarding => "/onboarding".to_string(),
            Route::Dashboard => "/dashboard".to_string(),
            Route::Settings => "/settings".to_string(),
            Route::SettingsOnboarding => "/settings/onboarding".to_string(),
            Route::Conditions => "/condiciones".to_string(),
            Route::Patients => "/pacientes".to_string(),
            Route::PatientDetail { id } => format!("/paciente/{id}"),
            Route::NotFound { path } => path.clone(),
        }
    }

    /// Routes rendered regardless of the session.
    pub fn is_public(&self) -> bool {
        matches!(
            self,
            Route::Login
                | Route::Register
                | Route::ForgotPassword
                | Route::ResetPassword { .. }
                | Route::NotFound { .. }
        )
    }

    pub fn is_guarded(&self) -> bool {
        !self.is_public()
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}
