//! Configuration data model.
//!
//! All structs derive `Serialize`/`Deserialize` for TOML persistence.
//! Every field has a sensible default so the application works out of the box.

use crate::auth::Role;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Toasts never outlive this, whatever the config says.
const MAX_TOAST_SECS: u64 = 3600;

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub auth: AuthConfig,
    #[serde(default)]
    pub session: SessionConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Terminal refresh and message display settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
    /// How long a toast stays on screen.
    #[serde(default = "default_toast_secs")]
    pub toast_secs: u64,
}

impl UiConfig {
    /// Redraw/expiry tick. A zero rate is raised to 1 ms.
    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms.max(1))
    }

    pub fn toast_duration(&self) -> Duration {
        Duration::from_secs(self.toast_secs.min(MAX_TOAST_SECS))
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
            toast_secs: default_toast_secs(),
        }
    }
}

/// Account call settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Simulated latency of the account service.
    #[serde(default = "default_submit_delay_ms")]
    pub submit_delay_ms: u64,
    /// Upper bound on any account call before it is reported as timed out.
    #[serde(default = "default_submit_timeout_ms")]
    pub submit_timeout_ms: u64,
    /// Role the simulated service reports for a sign-in.
    #[serde(default = "default_sign_in_role")]
    pub sign_in_role: Role,
    /// Make every simulated account call fail, to exercise error handling.
    #[serde(default)]
    pub offline: bool,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            submit_delay_ms: default_submit_delay_ms(),
            submit_timeout_ms: default_submit_timeout_ms(),
            sign_in_role: default_sign_in_role(),
            offline: false,
        }
    }
}

/// Where the session flags live.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// `false` keeps the session in memory for this run only.
    #[serde(default = "default_true")]
    pub persist: bool,
    #[serde(default)]
    pub path: Option<PathBuf>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            persist: true,
            path: None,
        }
    }
}

/// Diagnostic log settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// `EnvFilter` directive, e.g. `info` or `gameadconnect=debug`.
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_dir")]
    pub log_dir: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            level: default_log_level(),
            log_dir: default_log_dir(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_tick_rate_ms() -> u64 {
    50
}

fn default_toast_secs() -> u64 {
    4
}

fn default_submit_delay_ms() -> u64 {
    1500
}

fn default_submit_timeout_ms() -> u64 {
    10_000
}

fn default_sign_in_role() -> Role {
    Role::Advertiser
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_dir() -> String {
    "~/.local/share/gameadconnect/logs".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_gives_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config.ui.tick_rate_ms, 50);
        assert_eq!(config.auth.submit_delay_ms, 1500);
        assert_eq!(config.auth.sign_in_role, Role::Advertiser);
        assert!(config.session.persist);
        assert!(config.logging.enabled);
    }

    #[test]
    fn test_partial_sections() {
        let config: AppConfig = toml::from_str(
            r#"
            [auth]
            submit_delay_ms = 10
            sign_in_role = "developer"

            [session]
            persist = false
            "#,
        )
        .unwrap();
        assert_eq!(config.auth.submit_delay_ms, 10);
        assert_eq!(config.auth.submit_timeout_ms, 10_000);
        assert_eq!(config.auth.sign_in_role, Role::Developer);
        assert!(!config.session.persist);
        assert_eq!(config.session.path, None);
    }

    #[test]
    fn test_round_trip_pretty() {
        let text = toml::to_string_pretty(&AppConfig::default()).unwrap();
        let back: AppConfig = toml::from_str(&text).unwrap();
        assert_eq!(back.logging.level, "info");
        assert_eq!(back.ui.toast_secs, 4);
    }

    #[test]
    fn test_ui_durations_are_bounded() {
        let config: AppConfig = toml::from_str(
            r#"
            [ui]
            tick_rate_ms = 0
            toast_secs = 18446744073709551615

            [auth]
            sign_in_role = "Developer"
            "#,
        )
        .unwrap();
        assert_eq!(config.ui.tick_rate(), Duration::from_millis(1));
        assert_eq!(config.ui.toast_duration(), Duration::from_secs(MAX_TOAST_SECS));
        assert_eq!(config.auth.sign_in_role, Role::Developer);
        assert_eq!(UiConfig::default().tick_rate(), Duration::from_millis(50));
    }
}
