use crate::user::{LoginMethod, UserProfile, UserProfilePatch};

/// Events that drive the session lifecycle.
///
/// 驱动会话生命周期的事件。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthEvent {
    /// The validation probe confirmed a server-side session.
    ///
    /// 校验探针确认了服务端会话。
    SessionConfirmed { user: UserProfile },
    /// The validation probe found no usable session.
    ///
    /// 校验探针未找到可用会话。
    SessionRejected,
    /// A login call succeeded.
    SignedIn {
        user: UserProfile,
        new_account: bool,
        method: LoginMethod,
    },
    /// A login call failed with a user-facing message.
    SignInFailed { message: String, method: LoginMethod },
    /// The user asked to log out.
    SignOut,
    /// Local merge-patch of the cached profile.
    ProfilePatched { patch: UserProfilePatch },
    /// The backend stored the profile; it replaces the cached one.
    ProfileSaved { user: UserProfile },
    /// The post-login redirect finished.
    LoadingSettled,
}

impl std::fmt::Display for AuthEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            AuthEvent::SessionConfirmed { .. } => "session_confirmed",
            AuthEvent::SessionRejected => "session_rejected",
            AuthEvent::SignedIn { .. } => "signed_in",
            AuthEvent::SignInFailed { .. } => "sign_in_failed",
            AuthEvent::SignOut => "sign_out",
            AuthEvent::ProfilePatched { .. } => "profile_patched",
            AuthEvent::ProfileSaved { .. } => "profile_saved",
            AuthEvent::LoadingSettled => "loading_settled",
        };
        f.write_str(name)
    }
}
