//! Authentication use cases and the session orchestrator.

mod auth_methods;
mod context;
mod orchestrator;
mod password_recovery;
mod reset_password;

pub use auth_methods::GetAuthMethods;
pub use context::AuthContext;
pub use orchestrator::AuthOrchestrator;
pub use password_recovery::RequestPasswordRecovery;
pub use reset_password::ResetPassword;
