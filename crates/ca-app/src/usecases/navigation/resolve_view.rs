use std::sync::Arc;

use ca_core::{Route, RouteGuard, View};
use tracing::{debug, info_span, Instrument};

use crate::usecases::auth::AuthOrchestrator;
use crate::usecases::onboarding::{GateOutcome, OnboardingGate};

/// Resolves the view for a requested route.
///
/// Snapshot the session, let the onboarding gate redirect at most once,
/// then apply the route guard to the effective route.
pub struct ResolveView {
    auth: Arc<AuthOrchestrator>,
    gate: Arc<OnboardingGate>,
}

impl ResolveView {
    pub fn new(auth: Arc<AuthOrchestrator>, gate: Arc<OnboardingGate>) -> Self {
        Self { auth, gate }
    }

    pub async fn execute(&self, route: &Route) -> View {
        let span = info_span!("usecase.resolve_view.execute", route = %route);
        async {
            let session = self.auth.session().await;
            let effective = match self.gate.evaluate(&session, route).await {
                GateOutcome::Redirected(target) => target,
                GateOutcome::Disabled | GateOutcome::Stay => route.clone(),
            };
            let view = RouteGuard::resolve(&session, &effective);
            debug!(status = ?session.status(), ?view, "view resolved");
            view
        }
        .instrument(span)
        .await
    }
}
