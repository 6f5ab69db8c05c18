use crate::notification::Notification;

/// Shows a toast to the user. Fire-and-forget.
pub trait NotifierPort: Send + Sync {
    fn notify(&self, notification: Notification);
}
