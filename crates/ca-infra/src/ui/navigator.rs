use std::sync::Mutex;

use async_trait::async_trait;
use ca_core::ports::NavigatorPort;
use ca_core::Route;
use tokio::sync::watch;
use tracing::info;

/// In-process router.
///
/// Records every navigation and publishes the current route on a watch
/// channel so a long-running shell can follow along.
pub struct HistoryNavigator {
    history: Mutex<Vec<Route>>,
    current: watch::Sender<Route>,
}

impl HistoryNavigator {
    pub fn new(initial: Route) -> Self {
        let (current, _) = watch::channel(initial);
        Self {
            history: Mutex::new(Vec::new()),
            current,
        }
    }

    pub fn current(&self) -> Route {
        self.current.borrow().clone()
    }

    pub fn history(&self) -> Vec<Route> {
        self.history
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<Route> {
        self.current.subscribe()
    }
}

#[async_trait]
impl NavigatorPort for HistoryNavigator {
    async fn navigate(&self, route: Route) -> anyhow::Result<()> {
        info!(to = %route, "navigate");
        self.history
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(route.clone());
        self.current.send_replace(route);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn navigation_updates_current_and_history() {
        let navigator = HistoryNavigator::new(Route::Login);
        let mut rx = navigator.subscribe();

        navigator.navigate(Route::Dashboard).await.unwrap();
        navigator.navigate(Route::Onboarding).await.unwrap();

        assert_eq!(navigator.current(), Route::Onboarding);
        assert_eq!(
            navigator.history(),
            vec![Route::Dashboard, Route::Onboarding]
        );
        assert!(rx.has_changed().unwrap());
        assert_eq!(*rx.borrow_and_update(), Route::Onboarding);
    }
}
