//! Runtime settings construction
//!
//! This module builds the immutable settings record the flow runtime reads
//! once at startup. Every field except the credential secret is fixed by the
//! deployment; the secret comes from a single environment variable.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Environment variable supplying the credential-encryption secret.
pub const CREDENTIAL_SECRET_ENV: &str = "NODE_RED_CREDENTIAL_SECRET";

/// Directory where the flow runtime stores flows and state inside the container.
pub const USER_DIR: &str = "/data";

/// Severities understood by the runtime's console logger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Fatal,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
    Off,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Fatal => "fatal",
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
            LogLevel::Off => "off",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Console logger section of the settings record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConsoleLogging {
    pub level: LogLevel,
    pub metrics: bool,
}

/// Logging section of the settings record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoggingConfig {
    pub console: ConsoleLogging,
}

/// The settings record consumed by the flow runtime at startup.
///
/// Field names in the serialized form are dictated by the runtime's
/// configuration schema and must not change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    pub user_dir: String,
    pub flow_file_pretty: bool,
    pub flow_file_containment: bool,
    pub logging: LoggingConfig,
    /// Absent when the environment variable is unset; the runtime then
    /// falls back to its own credential handling.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credential_secret: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            user_dir: USER_DIR.to_string(),
            flow_file_pretty: false,
            flow_file_containment: false,
            logging: LoggingConfig {
                console: ConsoleLogging {
                    level: LogLevel::Info,
                    metrics: false,
                },
            },
            credential_secret: None,
        }
    }
}

impl Settings {
    /// Whether a credential secret was supplied by the environment.
    pub fn has_credential_secret(&self) -> bool {
        self.credential_secret.is_some()
    }

    /// Serialize into the exact shape the runtime's settings schema expects.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Like [`Settings::to_json`], but human-formatted.
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Build the settings record from the process environment.
///
/// This is the only point in the program that touches ambient state; the
/// record it returns is read-only for the rest of the process.
pub fn load_settings() -> Settings {
    load_settings_from(|key| std::env::var(key).ok())
}

/// Build the settings record against an injected environment lookup.
///
/// Tests use this to avoid mutating process-global state.
pub fn load_settings_from<F>(env: F) -> Settings
where
    F: Fn(&str) -> Option<String>,
{
    let mut settings = Settings::default();
    settings.credential_secret = env(CREDENTIAL_SECRET_ENV);
    settings
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_env(_key: &str) -> Option<String> {
        None
    }

    #[test]
    fn fixed_fields_ignore_environment() {
        let settings = load_settings_from(|_| Some("anything".to_string()));

        assert_eq!(settings.user_dir, "/data");
        assert!(!settings.flow_file_pretty);
        assert!(!settings.flow_file_containment);
        assert_eq!(settings.logging.console.level, LogLevel::Info);
        assert!(!settings.logging.console.metrics);
    }

    #[test]
    fn credential_secret_mirrors_environment() {
        let settings = load_settings_from(|key| {
            assert_eq!(key, CREDENTIAL_SECRET_ENV);
            Some("abc123".to_string())
        });

        assert_eq!(settings.credential_secret.as_deref(), Some("abc123"));
        assert!(settings.has_credential_secret());
    }

    #[test]
    fn credential_secret_absent_when_unset() {
        let settings = load_settings_from(no_env);

        assert_eq!(settings.credential_secret, None);
        assert!(!settings.has_credential_secret());
    }

    #[test]
    fn empty_value_is_kept_as_empty() {
        // A set-but-empty variable passes through untouched, only a fully
        // unset variable yields an absent field.
        let settings = load_settings_from(|_| Some(String::new()));

        assert_eq!(settings.credential_secret.as_deref(), Some(""));
    }

    #[test]
    fn loading_twice_is_idempotent() {
        let env = |key: &str| {
            if key == CREDENTIAL_SECRET_ENV {
                Some("secret".to_string())
            } else {
                None
            }
        };

        assert_eq!(load_settings_from(env), load_settings_from(env));
    }

    #[test]
    fn log_level_round_trips_as_lowercase() {
        assert_eq!(LogLevel::Info.to_string(), "info");
        assert_eq!(
            serde_json::to_string(&LogLevel::Warn).unwrap(),
            "\"warn\""
        );
        assert_eq!(
            serde_json::from_str::<LogLevel>("\"trace\"").unwrap(),
            LogLevel::Trace
        );
    }
}
