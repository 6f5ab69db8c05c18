//! Hand-written port fakes shared by the integration tests.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use ca_app::{AppDeps, AppRuntime, SessionTimings};
use ca_core::ports::{
    AuthApiPort, NavigatorPort, NotifierPort, OnboardingApiPort, SessionStorePort,
    SettingsApiPort,
};
use ca_core::user::{
    AuthMethods, ForgotPasswordRequest, GoogleLoginData, LoginCredentials,
    PasswordRecoveryReceipt, ProfileUpdate, ResetPasswordRequest, SignInReceipt,
};
use ca_core::{
    ApiError, Notification, OnboardingPayload, OnboardingStatus, Route, SessionCookies,
    UserId, UserProfile, UserProfilePatch,
};
use tokio::sync::Notify;

pub fn user(id: &str) -> UserProfile {
    UserProfile {
        id: UserId::new(id),
        given_name: "Ana".to_string(),
        family_name: "Pérez".to_string(),
        email: "ana@example.com".to_string(),
        birth_date: None,
    }
}

pub fn receipt(id: &str) -> SignInReceipt {
    SignInReceipt {
        user: user(id),
        is_new_user: false,
        session_id: Some("sess-1".to_string()),
    }
}

pub fn unauthorized() -> ApiError {
    ApiError::Status {
        status: 401,
        message: "Sesión inválida o expirada".to_string(),
    }
}

// ===== Auth API =====

#[derive(Default)]
pub struct FakeAuthApi {
    /// Answers for `validate`, consumed front to back; the last one repeats.
    pub validate_results: Mutex<VecDeque<Result<UserProfile, ApiError>>>,
    /// When set, `validate` waits for a permit before answering.
    pub validate_gate: Mutex<Option<Arc<Notify>>>,
    pub login_result: Mutex<Option<Result<SignInReceipt, ApiError>>>,
    pub logout_result: Mutex<Option<Result<(), ApiError>>>,
    pub recovery_result: Mutex<Option<Result<PasswordRecoveryReceipt, ApiError>>>,
    pub reset_result: Mutex<Option<Result<Option<String>, ApiError>>>,
    pub validate_calls: Mutex<usize>,
    pub logout_calls: Mutex<usize>,
    pub reset_calls: Mutex<usize>,
}

impl FakeAuthApi {
    pub fn with_validate(results: Vec<Result<UserProfile, ApiError>>) -> Self {
        let api = Self::default();
        *api.validate_results.lock().unwrap() = results.into();
        api
    }

    pub fn set_validate(&self, results: Vec<Result<UserProfile, ApiError>>) {
        *self.validate_results.lock().unwrap() = results.into();
    }

    pub fn set_login(&self, result: Result<SignInReceipt, ApiError>) {
        *self.login_result.lock().unwrap() = Some(result);
    }
}

#[async_trait]
impl AuthApiPort for FakeAuthApi {
    async fn validate(&self) -> Result<UserProfile, ApiError> {
        *self.validate_calls.lock().unwrap() += 1;
        let gate = self.validate_gate.lock().unwrap().clone();
        if let Some(gate) = gate {
            gate.notified().await;
        }
        let mut results = self.validate_results.lock().unwrap();
        if results.len() > 1 {
            results.pop_front().unwrap()
        } else {
            results.front().cloned().unwrap_or_else(|| Err(unauthorized()))
        }
    }

    async fn login(&self, _credentials: &LoginCredentials) -> Result<SignInReceipt, ApiError> {
        self.login_result
            .lock()
            .unwrap()
            .clone()
            .unwrap_or_else(|| Ok(receipt("1")))
    }

    async fn login_with_google(
        &self,
        profile: &GoogleLoginData,
    ) -> Result<SignInReceipt, ApiError> {
        let mut receipt = receipt("9");
        receipt.user.email = profile.email.clone();
        receipt.user.given_name = profile.given_name.clone();
        receipt.is_new_user = true;
        Ok(receipt)
    }

    async fn logout(&self) -> Result<(), ApiError> {
        *self.logout_calls.lock().unwrap() += 1;
        self.logout_result.lock().unwrap().clone().unwrap_or(Ok(()))
    }

    async fn request_password_recovery(
        &self,
        _request: &ForgotPasswordRequest,
    ) -> Result<PasswordRecoveryReceipt, ApiError> {
        self.recovery_result
            .lock()
            .unwrap()
            .clone()
            .unwrap_or_else(|| Ok(PasswordRecoveryReceipt::default()))
    }

    async fn reset_password(
        &self,
        _token: &str,
        _request: &ResetPasswordRequest,
    ) -> Result<Option<String>, ApiError> {
        *self.reset_calls.lock().unwrap() += 1;
        self.reset_result
            .lock()
            .unwrap()
            .clone()
            .unwrap_or(Ok(Some("Contraseña actualizada exitosamente".to_string())))
    }

    async fn auth_methods(&self) -> Result<AuthMethods, ApiError> {
        Err(ApiError::Transport("connection refused".to_string()))
    }
}

// ===== Onboarding API =====

pub struct FakeOnboardingApi {
    pub status: Mutex<Result<OnboardingStatus, ApiError>>,
    pub submit_result: Mutex<Result<Option<UserProfilePatch>, ApiError>>,
    pub fetch_calls: Mutex<usize>,
    pub submitted: Mutex<Vec<OnboardingPayload>>,
}

impl FakeOnboardingApi {
    pub fn completed(completed: bool) -> Self {
        Self::with_status(Ok(OnboardingStatus {
            completed,
            data: None,
        }))
    }

    pub fn with_status(status: Result<OnboardingStatus, ApiError>) -> Self {
        Self {
            status: Mutex::new(status),
            submit_result: Mutex::new(Ok(None)),
            fetch_calls: Mutex::new(0),
            submitted: Mutex::new(Vec::new()),
        }
    }

    pub fn fetch_calls(&self) -> usize {
        *self.fetch_calls.lock().unwrap()
    }
}

#[async_trait]
impl OnboardingApiPort for FakeOnboardingApi {
    async fn fetch_status(&self) -> Result<OnboardingStatus, ApiError> {
        *self.fetch_calls.lock().unwrap() += 1;
        self.status.lock().unwrap().clone()
    }

    async fn submit(
        &self,
        payload: &OnboardingPayload,
    ) -> Result<Option<UserProfilePatch>, ApiError> {
        self.submitted.lock().unwrap().push(payload.clone());
        let result = self.submit_result.lock().unwrap().clone();
        if result.is_ok() {
            *self.status.lock().unwrap() = Ok(OnboardingStatus {
                completed: true,
                data: None,
            });
        }
        result
    }
}

// ===== Settings API =====

pub struct UnusedSettingsApi;

#[async_trait]
impl SettingsApiPort for UnusedSettingsApi {
    async fn update_profile(&self, _update: &ProfileUpdate) -> Result<UserProfile, ApiError> {
        Err(ApiError::Transport("not wired in this test".to_string()))
    }
}

// ===== Session store =====

#[derive(Default)]
pub struct InMemorySessionStore {
    pub cookies: Mutex<SessionCookies>,
    pub clear_calls: Mutex<usize>,
}

impl InMemorySessionStore {
    pub fn with_cookie(name: &str, value: &str) -> Self {
        let store = Self::default();
        store.cookies.lock().unwrap().insert(name, value);
        store
    }
}

#[async_trait]
impl SessionStorePort for InMemorySessionStore {
    async fn load(&self) -> anyhow::Result<SessionCookies> {
        Ok(self.cookies.lock().unwrap().clone())
    }

    async fn save(&self, cookies: &SessionCookies) -> anyhow::Result<()> {
        *self.cookies.lock().unwrap() = cookies.clone();
        Ok(())
    }

    async fn clear(&self) -> anyhow::Result<()> {
        *self.clear_calls.lock().unwrap() += 1;
        *self.cookies.lock().unwrap() = SessionCookies::new();
        Ok(())
    }
}

// ===== UI =====

#[derive(Default)]
pub struct RecordingNavigator {
    pub history: Mutex<Vec<Route>>,
}

impl RecordingNavigator {
    pub fn history(&self) -> Vec<Route> {
        self.history.lock().unwrap().clone()
    }
}

#[async_trait]
impl NavigatorPort for RecordingNavigator {
    async fn navigate(&self, route: Route) -> anyhow::Result<()> {
        self.history.lock().unwrap().push(route);
        Ok(())
    }
}

#[derive(Default)]
pub struct RecordingNotifier {
    pub notifications: Mutex<Vec<Notification>>,
}

impl RecordingNotifier {
    pub fn titles(&self) -> Vec<String> {
        self.notifications
            .lock()
            .unwrap()
            .iter()
            .map(|n| n.title.clone())
            .collect()
    }

    pub fn last(&self) -> Option<Notification> {
        self.notifications.lock().unwrap().last().cloned()
    }
}

impl NotifierPort for RecordingNotifier {
    fn notify(&self, notification: Notification) {
        self.notifications.lock().unwrap().push(notification);
    }
}

// ===== Harness =====

pub struct Harness {
    pub runtime: AppRuntime,
    pub auth_api: Arc<FakeAuthApi>,
    pub onboarding_api: Arc<FakeOnboardingApi>,
    pub session_store: Arc<InMemorySessionStore>,
    pub navigator: Arc<RecordingNavigator>,
    pub notifier: Arc<RecordingNotifier>,
}

impl Harness {
    pub fn new(auth_api: FakeAuthApi, onboarding_api: FakeOnboardingApi) -> Self {
        Self::with_settings(auth_api, onboarding_api, Arc::new(UnusedSettingsApi))
    }

    pub fn with_settings(
        auth_api: FakeAuthApi,
        onboarding_api: FakeOnboardingApi,
        settings_api: Arc<dyn SettingsApiPort>,
    ) -> Self {
        let auth_api = Arc::new(auth_api);
        let onboarding_api = Arc::new(onboarding_api);
        let session_store = Arc::new(InMemorySessionStore::with_cookie(
            "access_token_cookie",
            "jwt",
        ));
        let navigator = Arc::new(RecordingNavigator::default());
        let notifier = Arc::new(RecordingNotifier::default());

        let deps = AppDeps {
            auth_api: auth_api.clone(),
            onboarding_api: onboarding_api.clone(),
            settings_api,
            session_store: session_store.clone(),
            navigator: navigator.clone(),
            notifier: notifier.clone(),
        };

        Self {
            runtime: AppRuntime::new(deps, SessionTimings::default()),
            auth_api,
            onboarding_api,
            session_store,
            navigator,
            notifier,
        }
    }

    pub fn credentials() -> LoginCredentials {
        LoginCredentials::new("ana@example.com", "Val1d$Password")
    }
}

/// Let spawned tasks run on the current-thread test runtime.
pub async fn settle() {
    for _ in 0..10 {
        tokio::task::yield_now().await;
    }
}
