//! Environment-driven service configuration.
//!
//! All settings are read through [`mockable::Env`] so parsing can be tested
//! without touching the process environment. The only required value is the
//! provider API key, and even that is not fatal at startup: without it every
//! lookup fails closed with `API_UNAVAILABLE`.

use std::fmt;
use std::net::SocketAddr;

use mockable::Env;
use tracing::warn;
use url::Url;
use zeroize::Zeroize;

/// Provider API key variable.
pub const API_KEY_ENV: &str = "ALPHA_VANTAGE_API_KEY";
/// Provider base URL override.
pub const BASE_URL_ENV: &str = "ALPHA_VANTAGE_BASE_URL";
/// Listen address for the HTTP server.
pub const BIND_ADDR_ENV: &str = "STOCK_API_BIND_ADDR";
/// `max-age` advertised on successful quote responses.
pub const CACHE_MAX_AGE_ENV: &str = "STOCK_API_CACHE_MAX_AGE";

/// Public Alpha Vantage endpoint.
pub const DEFAULT_BASE_URL: &str = "https://www.alphavantage.co/";
/// Default listen address.
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
/// Default cache lifetime for quotes, in seconds.
pub const DEFAULT_CACHE_MAX_AGE: u32 = 300;

/// Provider API key. Redacted in `Debug` and wiped from memory on drop.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Wrap a key with surrounding whitespace removed, returning `None` for
    /// blank input.
    pub fn new(raw: impl Into<String>) -> Option<Self> {
        let mut raw = raw.into();
        let key = raw.trim().to_owned();
        raw.zeroize();
        if key.is_empty() {
            return None;
        }
        Some(Self(key))
    }

    /// Borrow the secret for building the outbound request.
    pub fn expose(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(<redacted>)")
    }
}

impl Drop for ApiKey {
    fn drop(&mut self) {
        self.0.zeroize();
    }
}

/// Settings for the quote provider adapter.
#[derive(Debug, Clone)]
pub struct UpstreamSettings {
    /// API key, absent when not configured.
    pub api_key: Option<ApiKey>,
    /// Provider base URL; always ends with `/`.
    pub base_url: Url,
}

/// Complete service configuration.
#[derive(Debug, Clone)]
pub struct ServiceSettings {
    /// Quote provider settings.
    pub upstream: UpstreamSettings,
    /// Address the HTTP server binds to.
    pub bind_addr: SocketAddr,
    /// `max-age` for successful quote responses, in seconds.
    pub cache_max_age: u32,
}

/// Errors raised while validating configuration.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A variable is present but contains an invalid value.
    #[error("invalid value for {name}='{value}'; expected {expected}")]
    InvalidEnv {
        name: &'static str,
        value: String,
        expected: &'static str,
    },
}

/// Build service settings from environment variables.
///
/// # Examples
///
/// ```rust
/// use stock_calculator::config::settings_from_env;
/// use mockable::MockEnv;
///
/// let mut env = MockEnv::new();
/// env.expect_string().returning(|name| match name {
///     "ALPHA_VANTAGE_API_KEY" => Some("secret".to_owned()),
///     _ => None,
/// });
///
/// let settings = settings_from_env(&env).expect("valid settings");
/// assert_eq!(settings.cache_max_age, 300);
/// assert!(settings.upstream.api_key.is_some());
/// ```
///
/// # Errors
///
/// Returns [`ConfigError::InvalidEnv`] when an optional variable is set to an
/// unusable value.
pub fn settings_from_env<E: Env>(env: &E) -> Result<ServiceSettings, ConfigError> {
    Ok(ServiceSettings {
        upstream: upstream_settings_from_env(env)?,
        bind_addr: bind_addr_from_env(env)?,
        cache_max_age: cache_max_age_from_env(env)?,
    })
}

/// Build only the provider settings.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidEnv`] when the base URL override is not an
/// absolute `http` or `https` URL.
pub fn upstream_settings_from_env<E: Env>(env: &E) -> Result<UpstreamSettings, ConfigError> {
    let api_key = env.string(API_KEY_ENV).and_then(ApiKey::new);
    if api_key.is_none() {
        warn!("{API_KEY_ENV} not set; quote lookups will report the service as unavailable");
    }
    let base_url = match env.string(BASE_URL_ENV) {
        Some(value) => parse_base_url(&value)?,
        None => parse_base_url(DEFAULT_BASE_URL)?,
    };
    Ok(UpstreamSettings { api_key, base_url })
}

fn parse_base_url(value: &str) -> Result<Url, ConfigError> {
    let invalid = || ConfigError::InvalidEnv {
        name: BASE_URL_ENV,
        value: value.to_owned(),
        expected: "absolute http(s) URL",
    };
    let mut url = Url::parse(value.trim()).map_err(|_| invalid())?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid());
    }
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}

fn bind_addr_from_env<E: Env>(env: &E) -> Result<SocketAddr, ConfigError> {
    let value = env
        .string(BIND_ADDR_ENV)
        .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_owned());
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::InvalidEnv {
            name: BIND_ADDR_ENV,
            value,
            expected: "host:port socket address",
        })
}

fn cache_max_age_from_env<E: Env>(env: &E) -> Result<u32, ConfigError> {
    match env.string(CACHE_MAX_AGE_ENV) {
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidEnv {
                name: CACHE_MAX_AGE_ENV,
                value,
                expected: "non-negative integer seconds",
            }),
        None => Ok(DEFAULT_CACHE_MAX_AGE),
    }
}
