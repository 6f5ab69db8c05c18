//! Backend API adapters
//!
//! One shared [`HttpApiClient`] carries the cookie jar; the per-area adapters
//! only know their endpoints and payload shapes.

mod auth_api;
mod client;
mod onboarding_api;
mod settings_api;

pub use auth_api::HttpAuthApi;
pub use client::{HttpApiClient, CSRF_COOKIE, CSRF_HEADER};
pub use onboarding_api::HttpOnboardingApi;
pub use settings_api::HttpSettingsApi;
