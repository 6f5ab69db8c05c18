//! # Application Dependencies / 应用依赖
//!
//! Parameter grouping for [`AppRuntime`](crate::AppRuntime) construction.
//! **This is NOT a Builder pattern.** No build steps, no hidden logic.

use std::sync::Arc;
use std::time::Duration;

use ca_core::ports::*;

/// Application dependency grouping (non-Builder, just parameter grouping)
/// 应用依赖分组（非 Builder，仅参数打包）
///
/// All dependencies are required - no defaults, no optional fields.
#[derive(Clone)]
pub struct AppDeps {
    // Backend dependencies / 后端依赖
    pub auth_api: Arc<dyn AuthApiPort>,
    pub onboarding_api: Arc<dyn OnboardingApiPort>,
    pub settings_api: Arc<dyn SettingsApiPort>,

    // Storage dependencies / 存储依赖
    pub session_store: Arc<dyn SessionStorePort>,

    // UI dependencies / UI 依赖
    pub navigator: Arc<dyn NavigatorPort>,
    pub notifier: Arc<dyn NotifierPort>,
}

/// Timers of the session lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionTimings {
    /// Period of the background re-probe while authenticated.
    pub keep_alive: Duration,
    /// Delay between a successful login and the dashboard navigation.
    pub login_redirect_delay: Duration,
    /// Delay between that navigation and clearing the loading flag.
    pub loading_settle_delay: Duration,
}

impl Default for SessionTimings {
    fn default() -> Self {
        Self {
            keep_alive: Duration::from_secs(10 * 60),
            login_redirect_delay: Duration::from_millis(3000),
            loading_settle_delay: Duration::from_millis(2000),
        }
    }
}
