//! Port interfaces for the application layer
//!
//! Ports define the contract between the use cases in `ca-app` and the
//! adapters in `ca-infra`. Backend ports speak the [`ApiError`] taxonomy so
//! callers can tell transport failures from backend rejections; local
//! storage ports return `anyhow::Result`.
//!
//! [`ApiError`]: crate::error::ApiError

pub mod app_dirs;
pub mod auth_api;
pub mod errors;
pub mod navigator;
pub mod notifier;
pub mod onboarding_api;
pub mod session_store;
pub mod settings_api;

pub use app_dirs::AppDirsPort;
pub use auth_api::AuthApiPort;
pub use errors::AppDirsError;
pub use navigator::NavigatorPort;
pub use notifier::NotifierPort;
pub use onboarding_api::OnboardingApiPort;
pub use session_store::SessionStorePort;
pub use settings_api::SettingsApiPort;
