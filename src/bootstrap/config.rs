//! # Configuration Loader / 配置加载器
//!
//! ## Responsibilities / 职责
//!
//! - Read the TOML file into the [`AppConfig`] DTO, accepting whatever is in it.
//! - Fill empty facts from [`AppConfig::with_system_defaults`].
//! - Apply the `CRONAPP_API_BASE_URL` override.
//!
//! Loading and defaulting are separate steps: [`load_config`] never invents a
//! value, [`resolve_config`] never reads a file.

use std::path::Path;

use anyhow::Context;
use ca_core::config::AppConfig;
use tracing::debug;

/// Environment variable that overrides `[api] base_url`.
pub const API_BASE_URL_ENV: &str = "CRONAPP_API_BASE_URL";

/// Load configuration from a TOML file
/// 从 TOML 文件加载配置
///
/// **NO validation is performed**: missing sections result in empty values.
pub fn load_config(config_path: &Path) -> anyhow::Result<AppConfig> {
    let content = std::fs::read_to_string(config_path)
        .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;
    let toml_value: toml::Value =
        toml::from_str(&content).context("Failed to parse config as TOML")?;
    AppConfig::from_toml(&toml_value)
}

/// Load the file when it exists, otherwise start from empty facts.
pub fn load_config_or_empty(config_path: &Path) -> anyhow::Result<AppConfig> {
    if config_path.exists() {
        load_config(config_path)
    } else {
        debug!(path = %config_path.display(), "no config file, using defaults");
        Ok(AppConfig::empty())
    }
}

/// Replace every empty fact in `loaded` with the matching default, then apply
/// the base URL override.
pub fn resolve_config(
    loaded: AppConfig,
    defaults: AppConfig,
    base_url_override: Option<String>,
) -> AppConfig {
    let mut config = AppConfig {
        api_base_url: non_empty(loaded.api_base_url, defaults.api_base_url),
        api_timeout_secs: non_zero(loaded.api_timeout_secs, defaults.api_timeout_secs),
        keep_alive_secs: non_zero(loaded.keep_alive_secs, defaults.keep_alive_secs),
        session_store: non_empty(loaded.session_store, defaults.session_store),
        session_store_path: if loaded.session_store_path.as_os_str().is_empty() {
            defaults.session_store_path
        } else {
            loaded.session_store_path
        },
        login_redirect_delay_ms: loaded
            .login_redirect_delay_ms
            .or(defaults.login_redirect_delay_ms),
        loading_settle_delay_ms: loaded
            .loading_settle_delay_ms
            .or(defaults.loading_settle_delay_ms),
    };

    if let Some(url) = base_url_override.filter(|url| !url.trim().is_empty()) {
        config.api_base_url = url;
    }
    config
}

fn non_empty(value: String, default: String) -> String {
    if value.trim().is_empty() {
        default
    } else {
        value
    }
}

fn non_zero(value: u64, default: u64) -> u64 {
    if value == 0 {
        default
    } else {
        value
    }
}
