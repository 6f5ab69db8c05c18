//! # Pure Data Module / 纯数据模块
//!
//! Configuration DTO and its TOML mapping. Missing keys map to empty values
//! (empty strings, zero or `None` durations); those are facts, not errors. Filling them
//! in is the bootstrap's job.
//!
//! > **This module contains data only, no policy, no validation.**
//! > **此模块只包含数据结构定义。**

use std::path::PathBuf;

/// Application configuration DTO (pure data, no logic)
/// 应用配置 DTO（纯数据，无逻辑）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Backend base URL, e.g. `http://localhost:5000` (may be empty)
    pub api_base_url: String,

    /// Per-request timeout in seconds (0 = unset)
    pub api_timeout_secs: u64,

    /// Keep-alive re-probe interval in seconds (0 = unset)
    pub keep_alive_secs: u64,

    /// Session store kind: `"file"` or `"memory"` (may be empty)
    pub session_store: String,

    /// Cookie jar path for the file store (may be empty)
    pub session_store_path: PathBuf,

    /// Delay between a login and the dashboard navigation (`None` = unset,
    /// `Some(0)` = navigate immediately)
    pub login_redirect_delay_ms: Option<u64>,

    /// Delay between the dashboard navigation and clearing `loading`
    /// (`None` = unset)
    pub loading_settle_delay_ms: Option<u64>,
}

impl AppConfig {
    /// Create AppConfig from TOML value
    /// 从 TOML 值创建 AppConfig
    ///
    /// Performs no validation and no default calculation.
    pub fn from_toml(toml_value: &toml::Value) -> anyhow::Result<Self> {
        let str_at = |section: &str, key: &str| -> String {
            toml_value
                .get(section)
                .and_then(|s| s.get(key))
                .and_then(|v| v.as_str())
                .unwrap_or("")
                .to_string()
        };
        let opt_u64_at = |section: &str, key: &str| -> Option<u64> {
            toml_value
                .get(section)
                .and_then(|s| s.get(key))
                .and_then(|v| v.as_integer())
                .map(|v| v.max(0) as u64)
        };
        let u64_at = |section: &str, key: &str| -> u64 { opt_u64_at(section, key).unwrap_or(0) };

        Ok(Self {
            api_base_url: str_at("api", "base_url"),
            api_timeout_secs: u64_at("api", "timeout_secs"),
            keep_alive_secs: u64_at("session", "keep_alive_secs"),
            session_store: str_at("session", "store"),
            session_store_path: PathBuf::from(str_at("session", "store_path")),
            login_redirect_delay_ms: opt_u64_at("navigation", "login_redirect_delay_ms"),
            loading_settle_delay_ms: opt_u64_at("navigation", "loading_settle_delay_ms"),
        })
    }

    /// Create empty AppConfig (all empty/default values)
    /// 创建空的 AppConfig
    pub fn empty() -> Self {
        Self {
            api_base_url: String::new(),
            api_timeout_secs: 0,
            keep_alive_secs: 0,
            session_store: String::new(),
            session_store_path: PathBuf::new(),
            login_redirect_delay_ms: None,
            loading_settle_delay_ms: None,
        }
    }

    /// Create AppConfig with the stock values used in production
    /// 生产环境使用：创建具有系统默认值的 AppConfig
    ///
    /// `data_dir` is computed by the caller (e.g. with the `dirs` crate).
    pub fn with_system_defaults(data_dir: PathBuf) -> Self {
        Self {
            api_base_url: "http://localhost:5000".to_string(),
            api_timeout_secs: 10,
            keep_alive_secs: 10 * 60,
            session_store: "file".to_string(),
            session_store_path: data_dir.join("session.json"),
            login_redirect_delay_ms: Some(3000),
            loading_settle_delay_ms: Some(2000),
        }
    }
}
