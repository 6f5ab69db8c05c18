//! # Dependency Injection / 依赖注入模块
//!
//! The only place that depends on `ca-infra` and `ca-app` at once. It
//! assembles adapters behind the ports and makes no decisions of its own.

use std::sync::Arc;
use std::time::Duration;

use ca_app::{AppDeps, AppRuntime, SessionTimings};
use ca_core::config::AppConfig;
use ca_core::ports::SessionStorePort;
use ca_core::Route;
use ca_infra::{
    ConsoleNotifier, FileSessionStore, HistoryNavigator, HttpApiClient, HttpAuthApi,
    HttpOnboardingApi, HttpSettingsApi, InMemorySessionStore,
};
use tracing::info;

/// Result type for wiring operations
pub type WiringResult<T> = Result<T, WiringError>;

/// Errors during dependency injection
/// 依赖注入错误（基础设施初始化失败）
#[derive(Debug, thiserror::Error)]
pub enum WiringError {
    #[error("HTTP client initialization failed: {0}")]
    HttpClient(String),

    #[error("unknown session store kind: {0:?} (expected \"file\" or \"memory\")")]
    UnknownSessionStore(String),
}

/// Assembled application plus the handles the shell needs directly.
pub struct WiredApp {
    pub runtime: AppRuntime,
    pub navigator: Arc<HistoryNavigator>,
    pub session_store: Arc<dyn SessionStorePort>,
}

/// Unset or zero keep-alive periods fall back to the stock timing.
pub fn session_timings(config: &AppConfig) -> SessionTimings {
    let stock = SessionTimings::default();
    SessionTimings {
        keep_alive: match config.keep_alive_secs {
            0 => stock.keep_alive,
            secs => Duration::from_secs(secs),
        },
        login_redirect_delay: config
            .login_redirect_delay_ms
            .map_or(stock.login_redirect_delay, Duration::from_millis),
        loading_settle_delay: config
            .loading_settle_delay_ms
            .map_or(stock.loading_settle_delay, Duration::from_millis),
    }
}

fn session_store(config: &AppConfig) -> WiringResult<Arc<dyn SessionStorePort>> {
    match config.session_store.as_str() {
        "file" => Ok(Arc::new(FileSessionStore::new(
            config.session_store_path.clone(),
        ))),
        "memory" => Ok(Arc::new(InMemorySessionStore::new())),
        other => Err(WiringError::UnknownSessionStore(other.to_string())),
    }
}

/// Wire a resolved configuration into a runtime.
pub fn wire_app(config: &AppConfig, initial_route: Route) -> WiringResult<WiredApp> {
    let session_store = session_store(config)?;

    let client = Arc::new(
        HttpApiClient::new(
            config.api_base_url.clone(),
            Duration::from_secs(config.api_timeout_secs),
            session_store.clone(),
        )
        .map_err(|e| WiringError::HttpClient(e.to_string()))?,
    );
    let navigator = Arc::new(HistoryNavigator::new(initial_route));

    let deps = AppDeps {
        auth_api: Arc::new(HttpAuthApi::new(client.clone())),
        onboarding_api: Arc::new(HttpOnboardingApi::new(client.clone())),
        settings_api: Arc::new(HttpSettingsApi::new(client)),
        session_store: session_store.clone(),
        navigator: navigator.clone(),
        notifier: Arc::new(ConsoleNotifier::new()),
    };

    info!(
        base_url = %config.api_base_url,
        store = %config.session_store,
        "application wired"
    );

    Ok(WiredApp {
        runtime: AppRuntime::new(deps, session_timings(config)),
        navigator,
        session_store,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn timings_follow_config() {
        let config = AppConfig::with_system_defaults(PathBuf::from("/tmp/cronapp"));
        assert_eq!(session_timings(&config), SessionTimings::default());
    }

    #[test]
    fn zero_redirect_delay_is_immediate() {
        let mut config = AppConfig::with_system_defaults(PathBuf::from("/tmp/cronapp"));
        config.login_redirect_delay_ms = Some(0);
        config.keep_alive_secs = 0;

        let timings = session_timings(&config);

        assert_eq!(timings.login_redirect_delay, Duration::ZERO);
        assert_eq!(timings.keep_alive, SessionTimings::default().keep_alive);
    }

    #[tokio::test]
    async fn unknown_store_kind_is_rejected() {
        let mut config = AppConfig::with_system_defaults(PathBuf::from("/tmp/cronapp"));
        config.session_store = "redis".to_string();

        let err = wire_app(&config, Route::Login).err().unwrap();
        assert!(matches!(err, WiringError::UnknownSessionStore(kind) if kind == "redis"));
    }

    #[tokio::test]
    async fn memory_store_wires_without_touching_disk() {
        let mut config = AppConfig::with_system_defaults(PathBuf::from("/nonexistent"));
        config.session_store = "memory".to_string();

        let wired = wire_app(&config, Route::Login).unwrap();

        assert!(!wired.session_store.has_session().await.unwrap());
        assert_eq!(wired.navigator.current(), Route::Login);
        wired.runtime.shutdown();
    }
}
