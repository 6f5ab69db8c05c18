use serde::{Deserialize, Serialize};

use crate::user::UserProfile;

/// Tri-state view of the session, as consumed by route guards.
///
/// 会话三态：未知、已认证、匿名。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionStatus {
    Unknown,
    Authenticated,
    Anonymous,
}

/// Client-side session.
///
/// A user is present exactly when the session is authenticated.
///
/// 客户端会话：仅在已认证状态下持有用户。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Session {
    /// The startup probe has not answered yet.
    Initializing,
    Authenticated {
        user: UserProfile,
    },
    Anonymous,
}

impl Session {
    pub fn status(&self) -> SessionStatus {
        match self {
            Session::Initializing => SessionStatus::Unknown,
            Session::Authenticated { .. } => SessionStatus::Authenticated,
            Session::Anonymous => SessionStatus::Anonymous,
        }
    }

    pub fn user(&self) -> Option<&UserProfile> {
        match self {
            Session::Authenticated { user } => Some(user),
            _ => None,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, Session::Authenticated { .. })
    }
}

/// Session plus the loading flag shown between a login and the dashboard
/// redirect settling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthState {
    pub session: Session,
    pub loading: bool,
}

impl AuthState {
    pub fn initial() -> Self {
        Self {
            session: Session::Initializing,
            loading: true,
        }
    }
}

impl Default for AuthState {
    fn default() -> Self {
        Self::initial()
    }
}
