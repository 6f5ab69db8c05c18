//! Authentication endpoints of the backend.

use async_trait::async_trait;

use crate::error::ApiError;
use crate::user::{
    AuthMethods, ForgotPasswordRequest, GoogleLoginData, LoginCredentials,
    PasswordRecoveryReceipt, ResetPasswordRequest, SignInReceipt, UserProfile,
};

#[async_trait]
pub trait AuthApiPort: Send + Sync {
    /// `GET /api/auth/validate`: the user behind the current cookies.
    async fn validate(&self) -> Result<UserProfile, ApiError>;

    /// `POST /api/auth/login`
    async fn login(&self, credentials: &LoginCredentials) -> Result<SignInReceipt, ApiError>;

    /// `POST /api/auth/google`
    async fn login_with_google(&self, profile: &GoogleLoginData)
        -> Result<SignInReceipt, ApiError>;

    /// `POST /api/auth/logout`: asks the backend to unset its cookies.
    async fn logout(&self) -> Result<(), ApiError>;

    /// `POST /api/recover/solicitar_recuperacion`
    async fn request_password_recovery(
        &self,
        request: &ForgotPasswordRequest,
    ) -> Result<PasswordRecoveryReceipt, ApiError>;

    /// `POST /api/recover/resetear_password/{token}`. Returns the backend's
    /// confirmation message, if any.
    async fn reset_password(
        &self,
        token: &str,
        request: &ResetPasswordRequest,
    ) -> Result<Option<String>, ApiError>;

    /// `GET /api/auth/auth-methods`
    async fn auth_methods(&self) -> Result<AuthMethods, ApiError>;
}
