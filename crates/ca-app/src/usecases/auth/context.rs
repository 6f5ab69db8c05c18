use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use ca_core::{AuthState, Session};
use tokio::sync::Mutex;

/// Shared auth context containing state, dispatch lock and session epoch.
///
/// ## Lock Ordering
/// When acquiring both locks, acquire `dispatch_lock` first, then `state`.
/// - `dispatch_lock`: serializes dispatch calls so transition, commit and
///   action execution run as one unit.
/// - `state`: used for both reading (`get_state`) and writing (`set_state`).
///
/// ## Epoch
/// Bumped whenever the session identity changes (status or user id). Work
/// started under an older epoch must not be applied.
pub struct AuthContext {
    state: Mutex<AuthState>,
    dispatch_lock: Mutex<()>,
    epoch: AtomicU64,
}

impl AuthContext {
    pub fn new(initial_state: AuthState) -> Self {
        Self {
            state: Mutex::new(initial_state),
            dispatch_lock: Mutex::new(()),
            epoch: AtomicU64::new(0),
        }
    }

    pub fn arc(self) -> Arc<Self> {
        Arc::new(self)
    }

    /// Lightweight read that does NOT acquire `dispatch_lock`.
    pub async fn get_state(&self) -> AuthState {
        self.state.lock().await.clone()
    }

    pub async fn acquire_dispatch_lock(&self) -> tokio::sync::MutexGuard<'_, ()> {
        self.dispatch_lock.lock().await
    }

    pub fn epoch(&self) -> u64 {
        self.epoch.load(Ordering::SeqCst)
    }

    /// Replace the state and return the epoch it belongs to.
    ///
    /// This should only be called after acquiring `dispatch_lock`.
    pub async fn set_state(&self, next: AuthState) -> u64 {
        let mut guard = self.state.lock().await;
        let changed = identity_changed(&guard.session, &next.session);
        *guard = next;
        if changed {
            self.epoch.fetch_add(1, Ordering::SeqCst) + 1
        } else {
            self.epoch.load(Ordering::SeqCst)
        }
    }
}

impl Default for AuthContext {
    fn default() -> Self {
        Self::new(AuthState::initial())
    }
}

fn identity_changed(from: &Session, to: &Session) -> bool {
    from.status() != to.status() || from.user().map(|u| &u.id) != to.user().map(|u| &u.id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ca_core::{UserId, UserProfile};

    fn signed_in(id: &str, email: &str) -> AuthState {
        AuthState {
            session: Session::Authenticated {
                user: UserProfile {
                    id: UserId::new(id),
                    given_name: String::new(),
                    family_name: String::new(),
                    email: email.into(),
                    birth_date: None,
                },
            },
            loading: false,
        }
    }

    #[tokio::test]
    async fn epoch_moves_only_on_identity_change() {
        let context = AuthContext::default();
        assert_eq!(context.epoch(), 0);

        assert_eq!(context.set_state(signed_in("1", "a@x.com")).await, 1);
        // Same user, refreshed profile.
        assert_eq!(context.set_state(signed_in("1", "b@x.com")).await, 1);
        assert_eq!(context.set_state(signed_in("2", "b@x.com")).await, 2);
        assert_eq!(
            context
                .set_state(AuthState {
                    session: Session::Anonymous,
                    loading: false
                })
                .await,
            3
        );
        assert_eq!(context.get_state().await.session, Session::Anonymous);
    }
}
