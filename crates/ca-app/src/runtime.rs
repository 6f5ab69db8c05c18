//! Assembled application runtime.

use std::sync::Arc;

use crate::deps::{AppDeps, SessionTimings};
use crate::usecases::{
    AuthOrchestrator, GetAuthMethods, GetOnboardingStatus, OnboardingGate, ResolveView,
    SubmitOnboarding, UpdateProfile,
};

/// The application runtime.
///
/// Owns the long-lived pieces (orchestrator and onboarding gate) and hands
/// out short-lived use cases bound to the same ports.
pub struct AppRuntime {
    deps: AppDeps,
    auth: Arc<AuthOrchestrator>,
    onboarding_gate: Arc<OnboardingGate>,
}

impl AppRuntime {
    pub fn new(deps: AppDeps, timings: SessionTimings) -> Self {
        let onboarding_gate = Arc::new(OnboardingGate::new(
            GetOnboardingStatus::new(deps.onboarding_api.clone()),
            deps.navigator.clone(),
        ));
        let auth = AuthOrchestrator::new(
            deps.auth_api.clone(),
            deps.session_store.clone(),
            deps.navigator.clone(),
            deps.notifier.clone(),
            onboarding_gate.clone(),
            timings,
        );
        Self {
            deps,
            auth,
            onboarding_gate,
        }
    }

    pub fn auth(&self) -> Arc<AuthOrchestrator> {
        self.auth.clone()
    }

    pub fn onboarding_gate(&self) -> Arc<OnboardingGate> {
        self.onboarding_gate.clone()
    }

    pub fn resolve_view(&self) -> ResolveView {
        ResolveView::new(self.auth.clone(), self.onboarding_gate.clone())
    }

    pub fn get_onboarding_status(&self) -> GetOnboardingStatus {
        GetOnboardingStatus::new(self.deps.onboarding_api.clone())
    }

    pub fn submit_onboarding(&self) -> SubmitOnboarding {
        SubmitOnboarding::new(
            self.deps.onboarding_api.clone(),
            self.auth.clone(),
            self.onboarding_gate.clone(),
            self.deps.navigator.clone(),
            self.deps.notifier.clone(),
        )
    }

    pub fn update_profile(&self) -> UpdateProfile {
        UpdateProfile::new(
            self.deps.settings_api.clone(),
            self.auth.clone(),
            self.deps.notifier.clone(),
        )
    }

    pub fn get_auth_methods(&self) -> GetAuthMethods {
        GetAuthMethods::new(self.deps.auth_api.clone())
    }

    /// Stop background timers before the process exits.
    pub fn shutdown(&self) {
        self.auth.shutdown();
    }
}
