//! Session state machine.
//!
//! Defines a pure state transition function for the authentication lifecycle.
//! The orchestrator in `ca-app` executes the returned actions.

use tracing::warn;

use super::{AuthAction, AuthEvent, AuthState, Session};
use crate::notification::Notification;
use crate::routing::Route;
use crate::user::{LoginMethod, UserProfile};

/// Pure session state machine.
///
/// 纯状态机：不包含副作用。
pub struct AuthStateMachine;

impl AuthStateMachine {
    pub fn transition(state: AuthState, event: AuthEvent) -> (AuthState, Vec<AuthAction>) {
        let loading = state.loading;
        match (state.session, event) {
            // ===== Probe results =====
            (Session::Initializing, AuthEvent::SessionConfirmed { user }) => (
                AuthState {
                    session: Session::Authenticated { user },
                    loading: false,
                },
                vec![AuthAction::StartKeepAlive],
            ),
            (Session::Authenticated { user: previous }, AuthEvent::SessionConfirmed { user }) => {
                // Onboarding state belongs to the user it was fetched for.
                let actions = if previous.id == user.id {
                    Vec::new()
                } else {
                    vec![AuthAction::ResetOnboarding]
                };
                (
                    AuthState {
                        session: Session::Authenticated { user },
                        loading,
                    },
                    actions,
                )
            }
            // A failed probe only says the session is unusable right now; the
            // stored cookies are dropped by logout or by the server's unsets.
            (Session::Initializing, AuthEvent::SessionRejected) => (
                AuthState {
                    session: Session::Anonymous,
                    loading: false,
                },
                Vec::new(),
            ),
            (Session::Authenticated { .. }, AuthEvent::SessionRejected) => (
                AuthState {
                    session: Session::Anonymous,
                    loading: false,
                },
                vec![
                    AuthAction::StopKeepAlive,
                    AuthAction::ResetOnboarding,
                    AuthAction::NavigateTo(Route::Login),
                ],
            ),

            // ===== Login =====
            (
                session,
                AuthEvent::SignedIn {
                    user,
                    new_account,
                    method,
                },
            ) => {
                let notice = welcome_notice(&user, new_account, method);
                let mut actions = Vec::with_capacity(4);
                if session.user().map(|u| &u.id) != Some(&user.id) {
                    actions.push(AuthAction::ResetOnboarding);
                }
                actions.extend([
                    AuthAction::Notify(notice),
                    AuthAction::StartKeepAlive,
                    AuthAction::ScheduleDashboardRedirect,
                ]);
                (
                    AuthState {
                        session: Session::Authenticated { user },
                        loading: true,
                    },
                    actions,
                )
            }
            (session, AuthEvent::SignInFailed { message, method }) => {
                let (title, fallback) = match method {
                    LoginMethod::Password => (
                        "Error de inicio de sesión",
                        "Por favor, verifica tus credenciales",
                    ),
                    LoginMethod::Google => (
                        "Error de inicio de sesión con Google",
                        "No se pudo iniciar sesión con Google",
                    ),
                };
                let description = if message.trim().is_empty() {
                    fallback.to_string()
                } else {
                    message
                };
                (
                    AuthState { session, loading },
                    vec![AuthAction::Notify(Notification::error(title, description))],
                )
            }

            // ===== Logout =====
            (_, AuthEvent::SignOut) => (
                AuthState {
                    session: Session::Anonymous,
                    loading: false,
                },
                vec![
                    AuthAction::InvalidateServerSession,
                    AuthAction::StopKeepAlive,
                    AuthAction::ClearStoredSession,
                    AuthAction::ResetOnboarding,
                    AuthAction::NavigateTo(Route::Login),
                ],
            ),

            // ===== Local updates =====
            (Session::Authenticated { mut user }, AuthEvent::ProfilePatched { patch }) => {
                user.apply_patch(&patch);
                (
                    AuthState {
                        session: Session::Authenticated { user },
                        loading,
                    },
                    Vec::new(),
                )
            }
            (Session::Authenticated { user: current }, AuthEvent::ProfileSaved { user }) => (
                AuthState {
                    session: Session::Authenticated {
                        user: UserProfile {
                            id: current.id,
                            ..user
                        },
                    },
                    loading,
                },
                Vec::new(),
            ),
            (session, AuthEvent::LoadingSettled) => (
                AuthState {
                    session,
                    loading: false,
                },
                Vec::new(),
            ),

            (session, event) => {
                warn!(
                    status = ?session.status(),
                    event = %event,
                    "event ignored in current session state"
                );
                (AuthState { session, loading }, Vec::new())
            }
        }
    }
}

fn welcome_notice(user: &UserProfile, new_account: bool, method: LoginMethod) -> Notification {
    let title = if new_account && method == LoginMethod::Google {
        "Cuenta creada exitosamente"
    } else {
        "Inicio de sesión exitoso"
    };
    let name = if user.given_name.trim().is_empty() {
        "Usuario"
    } else {
        user.given_name.as_str()
    };
    Notification::info(title, format!("Bienvenido, {name}!"))
}
