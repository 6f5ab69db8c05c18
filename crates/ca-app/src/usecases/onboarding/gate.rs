//! One-shot onboarding redirect.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use ca_core::onboarding::{decide, GateDecision};
use ca_core::ports::NavigatorPort;
use ca_core::{OnboardingStatus, Route, Session};
use tokio::sync::Mutex;
use tracing::{debug, info, info_span, warn, Instrument};

use super::GetOnboardingStatus;

/// What a gate evaluation did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateOutcome {
    /// Not authenticated, public route, or the one-shot redirect already fired.
    Disabled,
    /// The user belongs on the requested route.
    Stay,
    /// The gate navigated away; the payload is the new route.
    Redirected(Route),
}

/// Onboarding gate.
///
/// Caches the completion status for the session and redirects at most once.
/// The status is fetched when nothing is cached, or when the onboarding
/// route itself is visited before any redirect fired.
pub struct OnboardingGate {
    status: GetOnboardingStatus,
    navigator: Arc<dyn NavigatorPort>,
    cache: Mutex<Option<OnboardingStatus>>,
    redirected: AtomicBool,
}

impl OnboardingGate {
    pub fn new(status: GetOnboardingStatus, navigator: Arc<dyn NavigatorPort>) -> Self {
        Self {
            status,
            navigator,
            cache: Mutex::new(None),
            redirected: AtomicBool::new(false),
        }
    }

    pub async fn evaluate(&self, session: &Session, route: &Route) -> GateOutcome {
        let span = info_span!("usecase.onboarding_gate.evaluate", route = %route);
        async {
            if !session.is_authenticated() || !route.is_guarded() {
                return GateOutcome::Disabled;
            }
            if self.redirected.load(Ordering::SeqCst) {
                return GateOutcome::Disabled;
            }

            let status = {
                let mut cache = self.cache.lock().await;
                match cache.as_ref() {
                    Some(cached) if *route != Route::Onboarding => cached.clone(),
                    _ => {
                        let fresh = self.status.execute().await;
                        debug!(completed = fresh.completed, "onboarding status fetched");
                        *cache = Some(fresh.clone());
                        fresh
                    }
                }
            };

            match decide(status.completed, route) {
                GateDecision::Stay => GateOutcome::Stay,
                GateDecision::Redirect(target) => {
                    if self.redirected.swap(true, Ordering::SeqCst) {
                        return GateOutcome::Disabled;
                    }
                    info!(from = %route, to = %target, "onboarding redirect");
                    if let Err(err) = self.navigator.navigate(target.clone()).await {
                        warn!(error = %err, "onboarding redirect navigation failed");
                    }
                    GateOutcome::Redirected(target)
                }
            }
        }
        .instrument(span)
        .await
    }

    /// Forget the cached status and the one-shot flag (logout).
    pub async fn reset(&self) {
        *self.cache.lock().await = None;
        self.redirected.store(false, Ordering::SeqCst);
        debug!("onboarding gate reset");
    }

    /// Forget the cached status only (after a submission).
    pub async fn invalidate(&self) {
        *self.cache.lock().await = None;
    }

    pub async fn cached(&self) -> Option<OnboardingStatus> {
        self.cache.lock().await.clone()
    }

    pub fn has_redirected(&self) -> bool {
        self.redirected.load(Ordering::SeqCst)
    }
}
