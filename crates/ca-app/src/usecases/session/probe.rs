//! Use case for probing the server-side session
//! 探测服务端会话的用例

use std::sync::Arc;

use ca_core::ports::AuthApiPort;
use ca_core::UserProfile;
use tracing::{debug, info_span, warn, Instrument};

/// Result of a validation call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeOutcome {
    Authenticated(UserProfile),
    Anonymous,
}

/// Asks the backend whether the stored cookies still carry a session.
///
/// Never fails: transport errors, non-2xx answers, `success: false` and
/// malformed bodies all resolve to [`ProbeOutcome::Anonymous`]. Does not
/// touch shared state.
pub struct ProbeSession {
    auth_api: Arc<dyn AuthApiPort>,
}

impl ProbeSession {
    pub fn new(auth_api: Arc<dyn AuthApiPort>) -> Self {
        Self { auth_api }
    }

    pub async fn execute(&self) -> ProbeOutcome {
        let span = info_span!("usecase.probe_session.execute");
        async {
            match self.auth_api.validate().await {
                Ok(user) => {
                    debug!(user_id = %user.id, "session is valid");
                    ProbeOutcome::Authenticated(user)
                }
                Err(err) => {
                    warn!(error = %err, "session probe failed, treating as anonymous");
                    ProbeOutcome::Anonymous
                }
            }
        }
        .instrument(span)
        .await
    }
}
