//! Use case for resetting a password with a single-use token
//! 使用一次性令牌重置密码的用例

use std::sync::Arc;

use ca_core::ports::{AuthApiPort, NotifierPort};
use ca_core::user::{PasswordPolicy, ResetPasswordRequest};
use ca_core::{AuthError, Notification};
use tracing::{info, info_span, warn, Instrument};

/// Posts a new password for a recovery token.
///
/// The password policy is checked locally first; a violation is rejected
/// without a network call. Never touches the session.
pub struct ResetPassword {
    auth_api: Arc<dyn AuthApiPort>,
    notifier: Arc<dyn NotifierPort>,
}

impl ResetPassword {
    pub fn new(auth_api: Arc<dyn AuthApiPort>, notifier: Arc<dyn NotifierPort>) -> Self {
        Self { auth_api, notifier }
    }

    pub async fn execute(
        &self,
        token: &str,
        request: ResetPasswordRequest,
    ) -> Result<(), AuthError> {
        let span = info_span!("usecase.reset_password.execute");
        async {
            let checked = if token.trim().is_empty() {
                Err(AuthError::Validation("Token no encontrado".to_string()))
            } else {
                PasswordPolicy::validate(&request.new_password)
            };
            if let Err(err) = checked {
                self.notifier
                    .notify(Notification::error("Error", err.user_message()));
                return Err(err);
            }

            match self.auth_api.reset_password(token, &request).await {
                Ok(message) => {
                    info!(backend_message = ?message, "password reset");
                    self.notifier.notify(Notification::info(
                        "Contraseña actualizada",
                        "Tu contraseña ha sido actualizada exitosamente",
                    ));
                    Ok(())
                }
                Err(err) => {
                    warn!(error = %err, "password reset failed");
                    self.notifier
                        .notify(Notification::error("Error", err.user_message()));
                    Err(err.into())
                }
            }
        }
        .instrument(span)
        .await
    }
}
