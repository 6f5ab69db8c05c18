//! Use case for requesting a password-recovery link
//! 请求找回密码链接的用例

use std::sync::Arc;

use ca_core::ports::{AuthApiPort, NotifierPort};
use ca_core::user::{ForgotPasswordRequest, PasswordRecoveryOutcome};
use ca_core::Notification;
use tracing::{info, info_span, warn, Instrument};

/// Asks the backend to mail a reset link.
///
/// Never fails and never touches the session: the outcome is normalized to
/// [`PasswordRecoveryOutcome`]. When the backend hands the link back
/// directly (no mail transport configured) no "check your inbox" toast is
/// shown.
pub struct RequestPasswordRecovery {
    auth_api: Arc<dyn AuthApiPort>,
    notifier: Arc<dyn NotifierPort>,
}

impl RequestPasswordRecovery {
    pub fn new(auth_api: Arc<dyn AuthApiPort>, notifier: Arc<dyn NotifierPort>) -> Self {
        Self { auth_api, notifier }
    }

    pub async fn execute(&self, request: ForgotPasswordRequest) -> PasswordRecoveryOutcome {
        let span = info_span!("usecase.request_password_recovery.execute");
        async {
            if request.email.trim().is_empty() {
                let message = "El correo electrónico es requerido".to_string();
                self.notifier.notify(Notification::error("Error", message.clone()));
                return PasswordRecoveryOutcome::Failed { message };
            }

            match self.auth_api.request_password_recovery(&request).await {
                Ok(receipt) => {
                    info!(
                        direct_link = receipt.reset_url.is_some(),
                        "password recovery requested"
                    );
                    if receipt.reset_url.is_none() {
                        self.notifier.notify(Notification::info(
                            "Solicitud enviada",
                            "Revisa tu correo para instrucciones de recuperación",
                        ));
                    }
                    PasswordRecoveryOutcome::Requested {
                        message: receipt.message,
                        reset_url: receipt.reset_url,
                    }
                }
                Err(err) => {
                    warn!(error = %err, "password recovery request failed");
                    let message = err.user_message();
                    self.notifier.notify(Notification::error("Error", message.clone()));
                    PasswordRecoveryOutcome::Failed { message }
                }
            }
        }
        .instrument(span)
        .await
    }
}
