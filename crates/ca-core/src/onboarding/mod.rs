//! Onboarding domain module.
//!
//! The health questionnaire a new user fills in before reaching the
//! dashboard, its completion status, and the pure redirect decision.

mod gate;
mod payload;

use serde::{Deserialize, Serialize};

pub use gate::{decide, GateDecision};
pub use payload::{
    ActivitySection, DietSection, ExerciseIntensity, HealthMonitoringSection,
    MedicationAdherence, OnboardingPayload, PersonalDataSection, Sex, WorkActivity,
};

/// Completion status as reported by `GET /api/onboarding/status`.
///
/// The stored questionnaire comes back in the backend's own snake_case
/// layout and is kept opaque.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OnboardingStatus {
    #[serde(rename = "has_completed_onboarding", default)]
    pub completed: bool,
    #[serde(rename = "onboarding_data", default)]
    pub data: Option<serde_json::Value>,
}

impl OnboardingStatus {
    /// Status assumed when the backend cannot be asked.
    pub fn not_completed() -> Self {
        Self::default()
    }
}
