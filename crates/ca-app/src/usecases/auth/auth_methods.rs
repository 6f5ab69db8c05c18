use std::sync::Arc;

use ca_core::ports::AuthApiPort;
use ca_core::user::AuthMethods;
use tracing::{info_span, warn, Instrument};

/// Use case for discovering third-party login providers.
///
/// Failures resolve to "no third-party provider" so the login screen can
/// always render.
pub struct GetAuthMethods {
    auth_api: Arc<dyn AuthApiPort>,
}

impl GetAuthMethods {
    pub fn new(auth_api: Arc<dyn AuthApiPort>) -> Self {
        Self { auth_api }
    }

    pub async fn execute(&self) -> AuthMethods {
        let span = info_span!("usecase.get_auth_methods.execute");
        async {
            self.auth_api.auth_methods().await.unwrap_or_else(|err| {
                warn!(error = %err, "auth methods unavailable");
                AuthMethods::default()
            })
        }
        .instrument(span)
        .await
    }
}
