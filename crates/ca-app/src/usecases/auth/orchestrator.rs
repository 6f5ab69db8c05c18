//! Auth orchestrator.
//!
//! This module coordinates the session state machine and its side effects.
//! It is the single source of truth the route guard reads.

use std::sync::{Arc, Mutex, Weak};

use async_trait::async_trait;
use ca_core::ports::{AuthApiPort, NavigatorPort, NotifierPort, SessionStorePort};
use ca_core::session::{AuthAction, AuthEvent, AuthStateMachine};
use ca_core::user::{
    ForgotPasswordRequest, GoogleLoginData, LoginCredentials, LoginMethod,
    PasswordRecoveryOutcome, ResetPasswordRequest, SignInReceipt,
};
use ca_core::{ApiError, AuthError, AuthState, Route, Session, UserProfile, UserProfilePatch};
use tokio::task::JoinHandle;
use tokio::time::sleep;
use tracing::{debug, info, info_span, warn, Instrument};

use super::{AuthContext, RequestPasswordRecovery, ResetPassword};
use crate::deps::SessionTimings;
use crate::usecases::onboarding::OnboardingGate;
use crate::usecases::session::{ProbeOutcome, ProbeSession, SessionKeepAlive, SessionRefreshHandler};

/// Orchestrator that drives session state and side effects.
///
/// Always handed out as `Arc<AuthOrchestrator>`: the keep-alive loop and
/// the delayed dashboard redirect hold weak references back to it.
pub struct AuthOrchestrator {
    context: Arc<AuthContext>,
    weak_self: Weak<AuthOrchestrator>,

    auth_api: Arc<dyn AuthApiPort>,
    session_store: Arc<dyn SessionStorePort>,
    navigator: Arc<dyn NavigatorPort>,
    notifier: Arc<dyn NotifierPort>,
    onboarding_gate: Arc<OnboardingGate>,

    probe: ProbeSession,
    keep_alive: SessionKeepAlive,
    password_recovery: RequestPasswordRecovery,
    reset_password: ResetPassword,

    timings: SessionTimings,
    pending_redirect: Mutex<Option<JoinHandle<()>>>,
}

impl AuthOrchestrator {
    pub fn new(
        auth_api: Arc<dyn AuthApiPort>,
        session_store: Arc<dyn SessionStorePort>,
        navigator: Arc<dyn NavigatorPort>,
        notifier: Arc<dyn NotifierPort>,
        onboarding_gate: Arc<OnboardingGate>,
        timings: SessionTimings,
    ) -> Arc<Self> {
        Arc::new_cyclic(|weak_self| Self {
            context: AuthContext::default().arc(),
            weak_self: weak_self.clone(),
            probe: ProbeSession::new(auth_api.clone()),
            keep_alive: SessionKeepAlive::new(timings.keep_alive),
            password_recovery: RequestPasswordRecovery::new(auth_api.clone(), notifier.clone()),
            reset_password: ResetPassword::new(auth_api.clone(), notifier.clone()),
            auth_api,
            session_store,
            navigator,
            notifier,
            onboarding_gate,
            timings,
            pending_redirect: Mutex::new(None),
        })
    }

    pub async fn state(&self) -> AuthState {
        self.context.get_state().await
    }

    pub async fn session(&self) -> Session {
        self.context.get_state().await.session
    }

    pub fn keep_alive_running(&self) -> bool {
        self.keep_alive.is_running()
    }

    /// Startup probe: resolves `Initializing` into a definite status.
    pub async fn initialize(&self) -> AuthState {
        let span = info_span!("usecase.auth.initialize");
        self.probe_and_apply().instrument(span).await
    }

    /// Background re-probe, also driven by the keep-alive timer.
    pub async fn refresh(&self) -> AuthState {
        let span = info_span!("usecase.auth.refresh");
        self.probe_and_apply().instrument(span).await
    }

    pub async fn login(&self, credentials: LoginCredentials) -> Result<UserProfile, AuthError> {
        let span = info_span!("usecase.auth.login", email = %credentials.email);
        async {
            let result = self.auth_api.login(&credentials).await;
            self.complete_sign_in(result, LoginMethod::Password).await
        }
        .instrument(span)
        .await
    }

    pub async fn login_with_google(
        &self,
        profile: GoogleLoginData,
    ) -> Result<UserProfile, AuthError> {
        let span = info_span!("usecase.auth.login_with_google", email = %profile.email);
        async {
            let result = self.auth_api.login_with_google(&profile).await;
            self.complete_sign_in(result, LoginMethod::Google).await
        }
        .instrument(span)
        .await
    }

    /// Log out. Always ends Anonymous, whatever the backend says.
    pub async fn logout(&self) -> AuthState {
        let span = info_span!("usecase.auth.logout");
        async {
            self.cancel_pending_redirect();
            self.dispatch(AuthEvent::SignOut).await
        }
        .instrument(span)
        .await
    }

    pub async fn forgot_password(&self, request: ForgotPasswordRequest) -> PasswordRecoveryOutcome {
        self.password_recovery.execute(request).await
    }

    pub async fn reset_password(
        &self,
        token: &str,
        request: ResetPasswordRequest,
    ) -> Result<(), AuthError> {
        self.reset_password.execute(token, request).await
    }

    /// Local merge-patch of the cached profile. No network call; ignored
    /// unless authenticated.
    pub async fn update_user_info(&self, patch: UserProfilePatch) -> AuthState {
        self.dispatch(AuthEvent::ProfilePatched { patch }).await
    }

    /// Replace the cached profile with the one the backend stored.
    pub async fn replace_user_profile(&self, user: UserProfile) -> AuthState {
        self.dispatch(AuthEvent::ProfileSaved { user }).await
    }

    /// Wait for the post-login redirect (navigation plus loading settle).
    pub async fn wait_pending_navigation(&self) {
        let handle = self
            .pending_redirect
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .take();
        if let Some(handle) = handle {
            if let Err(err) = handle.await {
                if !err.is_cancelled() {
                    warn!(error = %err, "dashboard redirect task failed");
                }
            }
        }
    }

    /// Stop background work. State is left as is.
    pub fn shutdown(&self) {
        self.keep_alive.stop();
        self.cancel_pending_redirect();
        debug!("auth orchestrator shut down");
    }

    async fn complete_sign_in(
        &self,
        result: Result<SignInReceipt, ApiError>,
        method: LoginMethod,
    ) -> Result<UserProfile, AuthError> {
        match result {
            Ok(receipt) => {
                let user = receipt.user.clone();
                info!(user_id = %user.id, new_account = receipt.is_new_user, "sign-in succeeded");
                self.dispatch(AuthEvent::SignedIn {
                    user: receipt.user,
                    new_account: receipt.is_new_user,
                    method,
                })
                .await;
                Ok(user)
            }
            Err(err) => {
                warn!(error = %err, "sign-in failed");
                self.dispatch(AuthEvent::SignInFailed {
                    message: err.user_message(),
                    method,
                })
                .await;
                Err(err.into())
            }
        }
    }

    async fn probe_and_apply(&self) -> AuthState {
        let epoch = self.context.epoch();
        let event = match self.probe.execute().await {
            ProbeOutcome::Authenticated(user) => AuthEvent::SessionConfirmed { user },
            ProbeOutcome::Anonymous => AuthEvent::SessionRejected,
        };

        let _dispatch_guard = self.context.acquire_dispatch_lock().await;
        if self.context.epoch() != epoch {
            debug!(
                started = epoch,
                current = self.context.epoch(),
                "session changed while probing, discarding result"
            );
            return self.context.get_state().await;
        }
        self.dispatch_locked(event).await
    }

    async fn dispatch(&self, event: AuthEvent) -> AuthState {
        // Serialize concurrent dispatch calls so two transitions never start
        // from the same snapshot.
        let _dispatch_guard = self.context.acquire_dispatch_lock().await;
        self.dispatch_locked(event).await
    }

    async fn dispatch_locked(&self, event: AuthEvent) -> AuthState {
        let span = info_span!("usecase.auth_orchestrator.dispatch", event = %event);
        async {
            let current = self.context.get_state().await;
            let from = current.session.status();
            let event_name = event.to_string();
            let (next, actions) = AuthStateMachine::transition(current, event);
            info!(
                from = ?from,
                to = ?next.session.status(),
                loading = next.loading,
                event = %event_name,
                "auth state transition"
            );
            // Commit before side effects so navigation observers read the
            // new session.
            let epoch = self.context.set_state(next.clone()).await;
            self.execute_actions(actions, epoch).await;
            next
        }
        .instrument(span)
        .await
    }

    async fn execute_actions(&self, actions: Vec<AuthAction>, epoch: u64) {
        for action in actions {
            debug!(?action, "auth executing action");
            match action {
                AuthAction::InvalidateServerSession => {
                    if let Err(err) = self.auth_api.logout().await {
                        warn!(error = %err, "server-side logout failed, continuing");
                    }
                }
                AuthAction::StartKeepAlive => {
                    let handler: Weak<dyn SessionRefreshHandler> = self.weak_self.clone();
                    self.keep_alive.start(handler);
                }
                AuthAction::StopKeepAlive => {
                    self.keep_alive.stop();
                }
                AuthAction::ClearStoredSession => {
                    if let Err(err) = self.session_store.clear().await {
                        warn!(error = %err, "failed to clear stored session");
                    }
                }
                AuthAction::ResetOnboarding => {
                    self.onboarding_gate.reset().await;
                }
                AuthAction::ScheduleDashboardRedirect => {
                    self.schedule_dashboard_redirect(epoch);
                }
                AuthAction::NavigateTo(route) => {
                    if let Err(err) = self.navigator.navigate(route).await {
                        warn!(error = %err, "navigation failed");
                    }
                }
                AuthAction::Notify(notification) => {
                    self.notifier.notify(notification);
                }
            }
        }
    }

    fn schedule_dashboard_redirect(&self, epoch: u64) {
        self.cancel_pending_redirect();

        let weak = self.weak_self.clone();
        let redirect_delay = self.timings.login_redirect_delay;
        let settle_delay = self.timings.loading_settle_delay;

        let handle = tokio::spawn(async move {
            sleep(redirect_delay).await;
            {
                let Some(this) = weak.upgrade() else { return };
                if this.context.epoch() != epoch {
                    debug!("session changed before redirect, dropping it");
                    return;
                }
                if let Err(err) = this.navigator.navigate(Route::Dashboard).await {
                    warn!(error = %err, "dashboard redirect failed");
                }
            }

            sleep(settle_delay).await;
            let Some(this) = weak.upgrade() else { return };
            if this.context.epoch() != epoch {
                return;
            }
            this.dispatch(AuthEvent::LoadingSettled).await;
        });

        *self
            .pending_redirect
            .lock()
            .unwrap_or_else(|e| e.into_inner()) = Some(handle);
    }

    fn cancel_pending_redirect(&self) {
        let handle = self
            .pending_redirect
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .take();
        if let Some(handle) = handle {
            handle.abort();
            debug!("pending dashboard redirect cancelled");
        }
    }
}

#[async_trait]
impl SessionRefreshHandler for AuthOrchestrator {
    async fn on_keep_alive_tick(&self) {
        let Some(this) = self.weak_self.upgrade() else {
            return;
        };
        // Run detached: a rejection stops the keep-alive loop, which must
        // not cancel the dispatch in flight.
        let refresh = tokio::spawn(async move {
            this.refresh().await;
        });
        if let Err(err) = refresh.await {
            warn!(error = %err, "keep-alive refresh task failed");
        }
    }
}

impl Drop for AuthOrchestrator {
    fn drop(&mut self) {
        self.cancel_pending_redirect();
    }
}
