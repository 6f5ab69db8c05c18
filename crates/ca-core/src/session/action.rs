use crate::notification::Notification;
use crate::routing::Route;

/// Side-effects produced by session transitions.
///
/// 会话迁移产生的副作用。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthAction {
    /// Best-effort `POST /api/auth/logout`.
    InvalidateServerSession,
    StartKeepAlive,
    StopKeepAlive,
    /// Drop the persisted session cookies.
    ClearStoredSession,
    /// Clear the onboarding cache and one-shot redirect flag.
    ResetOnboarding,
    /// Navigate to the dashboard after the login delay, then settle loading.
    ScheduleDashboardRedirect,
    NavigateTo(Route),
    Notify(Notification),
}
