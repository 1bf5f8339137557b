//! Relay configuration.
//!
//! All configuration is loaded from environment variables, each with a
//! fixed fallback so the relay starts with no setup at all. The shared
//! secret is never printed; [`RelayConfig`]'s `Debug` output redacts it.

use crate::error::ConfigError;

/// Bind address used when `HOST` is unset.
pub const DEFAULT_HOST: &str = "0.0.0.0";
/// TCP port used when `PORT` is unset.
pub const DEFAULT_PORT: u16 = 5050;
/// Shared secret used when `API_TOKEN` is unset.
pub const DEFAULT_API_TOKEN: &str = "supersecret";
/// Maximum update body size used when `BODY_LIMIT_BYTES` is unset (2 MiB).
pub const DEFAULT_BODY_LIMIT_BYTES: usize = 2 * 1024 * 1024;

/// Output format of the log subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Human-readable lines.
    #[default]
    Pretty,
    /// One JSON object per event.
    Json,
}

/// Complete relay configuration.
#[derive(Clone)]
pub struct RelayConfig {
    /// Address to bind (e.g. `0.0.0.0`).
    pub host: String,
    /// TCP port to listen on.
    pub port: u16,
    /// Bearer token the game server must present on updates.
    pub api_token: String,
    /// Largest accepted update body in bytes.
    pub body_limit_bytes: usize,
    /// Log output format.
    pub log_format: LogFormat,
}

impl RelayConfig {
    /// Load configuration from environment variables.
    ///
    /// - `HOST` -- bind address (default `0.0.0.0`)
    /// - `PORT` -- TCP port (default `5050`)
    /// - `API_TOKEN` -- shared bearer secret (default `supersecret`)
    /// - `BODY_LIMIT_BYTES` -- max update body size (default 2 MiB)
    /// - `LOG_FORMAT` -- `pretty` or `json` (default `pretty`)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        // An empty or blank variable counts as unset.
        let get = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let host = get("HOST").unwrap_or_else(|| DEFAULT_HOST.to_owned());

        let port = match get("PORT") {
            Some(raw) => raw.trim().parse::<u16>().map_err(|e| ConfigError::Invalid {
                name: "PORT",
                message: format!("{raw:?}: {e}"),
            })?,
            None => DEFAULT_PORT,
        };

        let api_token = get("API_TOKEN").unwrap_or_else(|| DEFAULT_API_TOKEN.to_owned());

        let body_limit_bytes = match get("BODY_LIMIT_BYTES") {
            Some(raw) => raw
                .trim()
                .parse::<usize>()
                .map_err(|e| ConfigError::Invalid {
                    name: "BODY_LIMIT_BYTES",
                    message: format!("{raw:?}: {e}"),
                })?,
            None => DEFAULT_BODY_LIMIT_BYTES,
        };

        let log_format = match get("LOG_FORMAT").as_deref().map(str::trim) {
            None | Some("pretty") => LogFormat::Pretty,
            Some("json") => LogFormat::Json,
            Some(other) => {
                return Err(ConfigError::Invalid {
                    name: "LOG_FORMAT",
                    message: format!("expected `pretty` or `json`, got {other:?}"),
                });
            }
        };

        Ok(Self {
            host,
            port,
            api_token,
            body_limit_bytes,
            log_format,
        })
    }

    /// Whether the fallback secret is in use.
    pub fn uses_default_token(&self) -> bool {
        self.api_token == DEFAULT_API_TOKEN
    }
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_owned(),
            port: DEFAULT_PORT,
            api_token: DEFAULT_API_TOKEN.to_owned(),
            body_limit_bytes: DEFAULT_BODY_LIMIT_BYTES,
            log_format: LogFormat::Pretty,
        }
    }
}

impl std::fmt::Debug for RelayConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RelayConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("api_token", &"<redacted>")
            .field("body_limit_bytes", &self.body_limit_bytes)
            .field("log_format", &self.log_format)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let config = RelayConfig::from_lookup(lookup_from(&[])).unwrap_or_default();

        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 5050);
        assert_eq!(config.api_token, "supersecret");
        assert_eq!(config.body_limit_bytes, 2_097_152);
        assert_eq!(config.log_format, LogFormat::Pretty);
        assert!(config.uses_default_token());
    }

    #[test]
    fn reads_overrides() {
        let config = RelayConfig::from_lookup(lookup_from(&[
            ("HOST", "127.0.0.1"),
            ("PORT", "8088"),
            ("API_TOKEN", "hunter2"),
            ("BODY_LIMIT_BYTES", "1024"),
            ("LOG_FORMAT", "json"),
        ]));

        assert!(matches!(
            config,
            Ok(RelayConfig {
                port: 8088,
                body_limit_bytes: 1024,
                log_format: LogFormat::Json,
                ..
            })
        ));
        let config = config.unwrap_or_default();
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.api_token, "hunter2");
        assert!(!config.uses_default_token());
    }

    #[test]
    fn rejects_bad_port() {
        let result = RelayConfig::from_lookup(lookup_from(&[("PORT", "http")]));
        assert!(matches!(result, Err(ConfigError::Invalid { name: "PORT", .. })));
    }

    #[test]
    fn blank_values_fall_back_to_defaults() {
        let config = RelayConfig::from_lookup(lookup_from(&[
            ("HOST", ""),
            ("PORT", ""),
            ("API_TOKEN", "  "),
            ("BODY_LIMIT_BYTES", "\t"),
            ("LOG_FORMAT", ""),
        ]));

        assert!(matches!(
            config,
            Ok(RelayConfig {
                port: DEFAULT_PORT,
                body_limit_bytes: DEFAULT_BODY_LIMIT_BYTES,
                log_format: LogFormat::Pretty,
                ..
            })
        ));
        let config = config.unwrap_or_else(|_| RelayConfig {
            api_token: String::new(),
            ..RelayConfig::default()
        });
        assert_eq!(config.host, DEFAULT_HOST);
        assert!(config.uses_default_token());
    }

    #[test]
    fn rejects_bad_body_limit() {
        let result = RelayConfig::from_lookup(lookup_from(&[("BODY_LIMIT_BYTES", "2MB")]));
        assert!(matches!(
            result,
            Err(ConfigError::Invalid { name: "BODY_LIMIT_BYTES", .. })
        ));
    }

    #[test]
    fn rejects_unknown_log_format() {
        let result = RelayConfig::from_lookup(lookup_from(&[("LOG_FORMAT", "xml")]));
        assert!(matches!(result, Err(ConfigError::Invalid { name: "LOG_FORMAT", .. })));
    }

    #[test]
    fn debug_redacts_token() {
        let config = RelayConfig {
            api_token: "hunter2".to_owned(),
            ..RelayConfig::default()
        };
        let rendered = format!("{config:?}");

        assert!(!rendered.contains("hunter2"));
        assert!(rendered.contains("<redacted>"));
    }
}
