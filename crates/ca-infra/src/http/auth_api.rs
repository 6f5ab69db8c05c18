use std::sync::Arc;

use async_trait::async_trait;
use ca_core::ports::AuthApiPort;
use ca_core::user::{
    AuthMethods, ForgotPasswordRequest, GoogleLoginData, LoginCredentials,
    PasswordRecoveryReceipt, ResetPasswordRequest, SignInReceipt,
};
use ca_core::{ApiError, UserProfile};
use reqwest::Method;
use serde::Deserialize;

use super::HttpApiClient;

#[derive(Deserialize)]
struct ValidateData {
    user: UserProfile,
}

#[derive(Deserialize)]
struct RecoveryData {
    #[serde(rename = "resetUrl", alias = "reset_url", default)]
    reset_url: Option<String>,
}

pub struct HttpAuthApi {
    client: Arc<HttpApiClient>,
}

impl HttpAuthApi {
    pub fn new(client: Arc<HttpApiClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl AuthApiPort for HttpAuthApi {
    async fn validate(&self) -> Result<UserProfile, ApiError> {
        let data: ValidateData = self.client.get("/api/auth/validate").await?;
        Ok(data.user)
    }

    async fn login(&self, credentials: &LoginCredentials) -> Result<SignInReceipt, ApiError> {
        self.client
            .request_data(Method::POST, "/api/auth/login", Some(credentials))
            .await
    }

    async fn login_with_google(
        &self,
        profile: &GoogleLoginData,
    ) -> Result<SignInReceipt, ApiError> {
        self.client
            .request_data(Method::POST, "/api/auth/google", Some(profile))
            .await
    }

    async fn logout(&self) -> Result<(), ApiError> {
        self.client
            .request_ack::<()>(Method::POST, "/api/auth/logout", None)
            .await
            .map(|_| ())
    }

    async fn request_password_recovery(
        &self,
        request: &ForgotPasswordRequest,
    ) -> Result<PasswordRecoveryReceipt, ApiError> {
        let envelope = self
            .client
            .send(
                Method::POST,
                "/api/recover/solicitar_recuperacion",
                Some(request),
            )
            .await?
            .decode::<RecoveryData>()?;
        if !envelope.success {
            return Err(ApiError::Rejected(envelope.message.unwrap_or_default()));
        }
        Ok(PasswordRecoveryReceipt {
            message: envelope.message,
            reset_url: envelope.data.and_then(|data| data.reset_url),
        })
    }

    async fn reset_password(
        &self,
        token: &str,
        request: &ResetPasswordRequest,
    ) -> Result<Option<String>, ApiError> {
        let path = format!("/api/recover/resetear_password/{token}");
        self.client
            .request_ack(Method::POST, &path, Some(request))
            .await
    }

    async fn auth_methods(&self) -> Result<AuthMethods, ApiError> {
        self.client.get("/api/auth/auth-methods").await
    }
}
