//! Use case for updating the user's profile
//! 更新用户资料的用例

use std::sync::Arc;

use ca_core::ports::{NotifierPort, SettingsApiPort};
use ca_core::user::ProfileUpdate;
use ca_core::{AuthError, Notification, UserProfile};
use tracing::{info, info_span, warn, Instrument};

use crate::usecases::auth::AuthOrchestrator;

/// Saves profile fields on the backend, then replaces the cached user with
/// what the backend stored.
///
/// On failure the backend's message is surfaced and the cached user is left
/// unchanged.
pub struct UpdateProfile {
    settings_api: Arc<dyn SettingsApiPort>,
    auth: Arc<AuthOrchestrator>,
    notifier: Arc<dyn NotifierPort>,
}

impl UpdateProfile {
    pub fn new(
        settings_api: Arc<dyn SettingsApiPort>,
        auth: Arc<AuthOrchestrator>,
        notifier: Arc<dyn NotifierPort>,
    ) -> Self {
        Self {
            settings_api,
            auth,
            notifier,
        }
    }

    pub async fn execute(&self, update: ProfileUpdate) -> Result<UserProfile, AuthError> {
        let span = info_span!("usecase.update_profile.execute");
        async {
            let missing: Vec<&str> = [
                ("nombre", &update.given_name),
                ("apellido", &update.family_name),
                ("email", &update.email),
            ]
            .into_iter()
            .filter(|(_, value)| value.trim().is_empty())
            .map(|(field, _)| field)
            .collect();
            if !missing.is_empty() {
                let err = AuthError::Validation(format!(
                    "Faltan campos requeridos: {}",
                    missing.join(", ")
                ));
                self.notifier
                    .notify(Notification::error("Error", err.user_message()));
                return Err(err);
            }

            match self.settings_api.update_profile(&update).await {
                Ok(stored) => {
                    info!(user_id = %stored.id, "profile updated");
                    self.auth.replace_user_profile(stored.clone()).await;
                    self.notifier.notify(Notification::info(
                        "Éxito",
                        "Configuración actualizada correctamente",
                    ));
                    Ok(stored)
                }
                Err(err) => {
                    warn!(error = %err, "profile update failed");
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
