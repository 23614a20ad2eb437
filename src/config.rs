//! Runtime configuration read from the environment.

use crate::error::{Error, Result};
use reqwest::Url;
use std::{net::IpAddr, str::FromStr, time::Duration};

pub const DEFAULT_BASE_URL: &str = "https://api.openalex.org";
pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Settings for the OpenAlex client
#[derive(Debug, Clone, PartialEq)]
pub struct OpenAlexConfig {
    /// API root, without a trailing slash
    pub base_url: String,
    /// Contact address sent as `mailto` to get into the polite pool
    pub mailto: Option<String>,
    /// Per-request timeout
    pub timeout: Duration,
}

impl Default for OpenAlexConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_owned(),
            mailto: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl OpenAlexConfig {
    /// Config pointing at another API root, e.g. a local mirror
    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_owned(),
            ..Self::default()
        }
    }
}

/// Server settings
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub host: IpAddr,
    pub port: u16,
    pub openalex: OpenAlexConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: IpAddr::from([127, 0, 0, 1]),
            port: DEFAULT_PORT,
            openalex: OpenAlexConfig::default(),
        }
    }
}

impl Config {
    /// Read `HOST`, `PORT`, `OPENALEX_BASE_URL`, `OPENALEX_MAILTO` and
    /// `OPENALEX_TIMEOUT_SECS`, falling back to defaults for unset variables.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let host = parse_or(get("HOST"), "HOST", IpAddr::from([127, 0, 0, 1]))?;
        let port = parse_or(get("PORT"), "PORT", DEFAULT_PORT)?;
        let timeout_secs = parse_or(
            get("OPENALEX_TIMEOUT_SECS"),
            "OPENALEX_TIMEOUT_SECS",
            DEFAULT_TIMEOUT_SECS,
        )?;

        let base_url = get("OPENALEX_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_owned());
        Url::parse(&base_url)
            .map_err(|e| Error::InvalidParameter(format!("OPENALEX_BASE_URL: {e}")))?;

        Ok(Self {
            host,
            port,
            openalex: OpenAlexConfig {
                base_url: base_url.trim_end_matches('/').to_owned(),
                mailto: get("OPENALEX_MAILTO"),
                timeout: Duration::from_secs(timeout_secs),
            },
        })
    }
}

fn parse_or<T>(value: Option<String>, key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match value {
        Some(value) => value
            .trim()
            .parse()
            .map_err(|e| Error::InvalidParameter(format!("{key}={value}: {e}"))),
        None => Ok(default),
    }
}
