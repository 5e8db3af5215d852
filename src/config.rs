//! Runtime configuration
//!
//! Reads config from env vars (after loading `.env` in the binaries):
//!   SEC_EDGAR_USER_AGENT      — identifying User-Agent, required by SEC access policy
//!   SEC_API_BASE              — submissions API base (default: https://data.sec.gov)
//!   SEC_ARCHIVES_BASE         — document archive base used for derived links
//!   SEC_REQUEST_TIMEOUT_SECS  — outbound request timeout (default: 30)
//!   FILINGS_DEFAULT_CIK       — identifier used when a request omits `cik`
//!   FILINGS_DEFAULT_PER_PAGE  — page size used when a request omits `per_page`
//!   FILINGS_MAX_PER_PAGE      — optional upper clamp for `per_page` (unset: no cap)
//!   FILINGS_BIND_ADDR         — listen address (default: 0.0.0.0:5000)
//!   FILINGS_STATIC_DIR        — directory holding the browser UI

use std::net::SocketAddr;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use crate::error::ConfigError;

pub const DEFAULT_USER_AGENT: &str = "sec-filings/0.1 (admin@example.com)";
pub const DEFAULT_SEC_API_BASE: &str = "https://data.sec.gov";
pub const DEFAULT_SEC_ARCHIVES_BASE: &str = "https://www.sec.gov/Archives/edgar/data";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
/// Recursion Pharmaceuticals
pub const DEFAULT_CIK: &str = "0001601830";
pub const DEFAULT_PER_PAGE: usize = 10;
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:5000";
pub const DEFAULT_STATIC_DIR: &str = "static";

/// Upstream SEC EDGAR settings
#[derive(Debug, Clone)]
pub struct SecEdgarConfig {
    pub user_agent: String,
    pub api_base: String,
    pub archives_base: String,
    pub request_timeout: Duration,
}

impl Default for SecEdgarConfig {
    fn default() -> Self {
        Self {
            user_agent: DEFAULT_USER_AGENT.to_string(),
            api_base: DEFAULT_SEC_API_BASE.to_string(),
            archives_base: DEFAULT_SEC_ARCHIVES_BASE.to_string(),
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

/// Defaults applied to inbound queries
#[derive(Debug, Clone)]
pub struct PagingConfig {
    pub default_cik: String,
    pub default_per_page: usize,
    pub max_per_page: Option<usize>,
}

impl Default for PagingConfig {
    fn default() -> Self {
        Self {
            default_cik: DEFAULT_CIK.to_string(),
            default_per_page: DEFAULT_PER_PAGE,
            max_per_page: None,
        }
    }
}

/// HTTP listener settings
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    pub static_dir: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 5000)),
            static_dir: PathBuf::from(DEFAULT_STATIC_DIR),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct FilingsConfig {
    pub sec: SecEdgarConfig,
    pub paging: PagingConfig,
    pub server: ServerConfig,
}

impl FilingsConfig {
    /// Build configuration from process environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str, default: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| default.to_string())
        };

        let sec = SecEdgarConfig {
            user_agent: get("SEC_EDGAR_USER_AGENT", DEFAULT_USER_AGENT),
            api_base: parse_base_url("SEC_API_BASE", get("SEC_API_BASE", DEFAULT_SEC_API_BASE))?,
            archives_base: parse_base_url(
                "SEC_ARCHIVES_BASE",
                get("SEC_ARCHIVES_BASE", DEFAULT_SEC_ARCHIVES_BASE),
            )?,
            request_timeout: Duration::from_secs(parse_value(
                "SEC_REQUEST_TIMEOUT_SECS",
                get("SEC_REQUEST_TIMEOUT_SECS", &DEFAULT_TIMEOUT_SECS.to_string()),
            )?),
        };

        let paging = PagingConfig {
            default_cik: get("FILINGS_DEFAULT_CIK", DEFAULT_CIK),
            default_per_page: parse_positive(
                "FILINGS_DEFAULT_PER_PAGE",
                get("FILINGS_DEFAULT_PER_PAGE", &DEFAULT_PER_PAGE.to_string()),
            )?,
            max_per_page: lookup("FILINGS_MAX_PER_PAGE")
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .map(|v| parse_positive("FILINGS_MAX_PER_PAGE", v))
                .transpose()?,
        };

        if let Some(max) = paging.max_per_page {
            if paging.default_per_page > max {
                return Err(ConfigError::Invalid {
                    key: "FILINGS_DEFAULT_PER_PAGE",
                    value: paging.default_per_page.to_string(),
                    reason: format!("exceeds FILINGS_MAX_PER_PAGE ({})", max),
                });
            }
        }

        let server = ServerConfig {
            bind_addr: parse_value("FILINGS_BIND_ADDR", get("FILINGS_BIND_ADDR", DEFAULT_BIND_ADDR))?,
            static_dir: PathBuf::from(get("FILINGS_STATIC_DIR", DEFAULT_STATIC_DIR)),
        };

        Ok(Self {
            sec,
            paging,
            server,
        })
    }
}

fn parse_value<T>(key: &'static str, value: String) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    value.parse::<T>().map_err(|e| ConfigError::Invalid {
        key,
        reason: e.to_string(),
        value,
    })
}

fn parse_positive(key: &'static str, value: String) -> Result<usize, ConfigError> {
    let parsed: usize = parse_value(key, value)?;
    if parsed == 0 {
        return Err(ConfigError::Invalid {
            key,
            value: parsed.to_string(),
            reason: "must be at least 1".to_string(),
        });
    }
    Ok(parsed)
}

/// Validate a base URL and strip any trailing slash so paths can be appended
fn parse_base_url(key: &'static str, value: String) -> Result<String, ConfigError> {
    url::Url::parse(&value).map_err(|e| ConfigError::Invalid {
        key,
        reason: e.to_string(),
        value: value.clone(),
    })?;
    Ok(value.trim_end_matches('/').to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_env_empty() {
        let config = FilingsConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config.sec.api_base, DEFAULT_SEC_API_BASE);
        assert_eq!(config.sec.request_timeout, Duration::from_secs(30));
        assert_eq!(config.paging.default_cik, "0001601830");
        assert_eq!(config.paging.default_per_page, 10);
        assert_eq!(config.paging.max_per_page, None);
        assert_eq!(config.server.bind_addr.port(), 5000);
    }

    #[test]
    fn test_overrides_and_trailing_slash() {
        let config = FilingsConfig::from_lookup(lookup_from(&[
            ("SEC_API_BASE", "http://127.0.0.1:9999/"),
            ("SEC_EDGAR_USER_AGENT", "Acme Corp ops@acme.test"),
            ("FILINGS_DEFAULT_PER_PAGE", "25"),
            ("FILINGS_MAX_PER_PAGE", "200"),
            ("FILINGS_BIND_ADDR", "127.0.0.1:8080"),
        ]))
        .unwrap();

        assert_eq!(config.sec.api_base, "http://127.0.0.1:9999");
        assert_eq!(config.sec.user_agent, "Acme Corp ops@acme.test");
        assert_eq!(config.paging.default_per_page, 25);
        assert_eq!(config.paging.max_per_page, Some(200));
        assert_eq!(config.server.bind_addr.to_string(), "127.0.0.1:8080");
    }

    #[test]
    fn test_blank_value_uses_default() {
        let config =
            FilingsConfig::from_lookup(lookup_from(&[("FILINGS_DEFAULT_CIK", "   ")])).unwrap();
        assert_eq!(config.paging.default_cik, DEFAULT_CIK);
    }

    #[test]
    fn test_invalid_values_rejected() {
        let err = FilingsConfig::from_lookup(lookup_from(&[("SEC_REQUEST_TIMEOUT_SECS", "soon")]))
            .unwrap_err();
        assert!(err.to_string().contains("SEC_REQUEST_TIMEOUT_SECS"));

        let err = FilingsConfig::from_lookup(lookup_from(&[("FILINGS_MAX_PER_PAGE", "0")]))
            .unwrap_err();
        assert!(err.to_string().contains("must be at least 1"));

        let err = FilingsConfig::from_lookup(lookup_from(&[("SEC_API_BASE", "not a url")]))
            .unwrap_err();
        assert!(err.to_string().contains("SEC_API_BASE"));

        let err = FilingsConfig::from_lookup(lookup_from(&[
            ("FILINGS_DEFAULT_PER_PAGE", "50"),
            ("FILINGS_MAX_PER_PAGE", "20"),
        ]))
        .unwrap_err();
        assert!(err.to_string().contains("exceeds FILINGS_MAX_PER_PAGE"));
    }
}
