//! Onboarding use cases.

mod gate;
mod get_status;
mod submit;

pub use gate::{GateOutcome, OnboardingGate};
pub use get_status::GetOnboardingStatus;
pub use submit::{SubmitOnboarding, SubmitOnboardingError};
