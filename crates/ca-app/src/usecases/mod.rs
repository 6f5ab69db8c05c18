//! Business logic use cases
//!
//! ```text
//! ProbeSession ──▶ AuthOrchestrator ──▶ RouteGuard
//!                        │
//!                        ▼
//!                  OnboardingGate ──▶ ResolveView
//! ```

pub mod auth;
pub mod navigation;
pub mod onboarding;
pub mod session;
pub mod settings;

pub use auth::{
    AuthContext, AuthOrchestrator, GetAuthMethods, RequestPasswordRecovery, ResetPassword,
};
pub use navigation::ResolveView;
pub use onboarding::{
    GateOutcome, GetOnboardingStatus, OnboardingGate, SubmitOnboarding, SubmitOnboardingError,
};
pub use session::{ProbeOutcome, ProbeSession, SessionKeepAlive, SessionRefreshHandler};
pub use settings::UpdateProfile;
