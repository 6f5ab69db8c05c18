use ca_core::ports::NotifierPort;
use ca_core::{Notification, NotificationLevel};
use tracing::{info, warn};

/// Prints toasts to the terminal: info on stdout, errors on stderr.
#[derive(Default)]
pub struct ConsoleNotifier;

impl ConsoleNotifier {
    pub fn new() -> Self {
        Self
    }
}

pub(crate) fn render(notification: &Notification) -> String {
    if notification.description.is_empty() {
        notification.title.clone()
    } else {
        format!("{}: {}", notification.title, notification.description)
    }
}

impl NotifierPort for ConsoleNotifier {
    fn notify(&self, notification: Notification) {
        let line = render(&notification);
        match notification.level {
            NotificationLevel::Info => {
                info!(title = %notification.title, "notification");
                println!("✔ {line}");
            }
            NotificationLevel::Error => {
                warn!(title = %notification.title, "error notification");
                eprintln!("✘ {line}");
            }
        }
    }
}
