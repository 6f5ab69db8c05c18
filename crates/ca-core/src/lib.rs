//! # ca-core
//!
//! Core domain models and session logic for CronApp.
//!
//! This crate contains pure business logic without any infrastructure dependencies:
//! the session state machine, the route guard, the onboarding gate decision and
//! the port traits implemented by `ca-infra`.

// Public module exports
pub mod app_dirs;
pub mod config;
pub mod envelope;
pub mod error;
pub mod health;
pub mod notification;
pub mod onboarding;
pub mod ports;
pub mod routing;
pub mod session;
pub mod user;

// Re-export commonly used types at the crate root
pub use config::AppConfig;
pub use envelope::ApiEnvelope;
pub use error::{ApiError, AuthError};
pub use notification::{Notification, NotificationLevel};
pub use onboarding::{OnboardingPayload, OnboardingStatus};
pub use routing::{Route, RouteGuard, View};
pub use session::{AuthState, Session, SessionCookies, SessionStatus};
pub use user::{UserId, UserProfile, UserProfilePatch};
