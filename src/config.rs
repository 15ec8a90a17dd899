use reqwest::Url;
use std::env;
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_SHUTDOWN_TIMEOUT_SECS: u64 = 30;
const DEFAULT_UPSTREAM_TIMEOUT_SECS: u64 = 30;
const DEFAULT_MAX_PAYLOAD_BYTES: usize = 1024 * 1024;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("{key} must be set (e.g., http://analysis:5000/api/Determining)")]
    Missing { key: &'static str },

    #[error("{key} has invalid value '{value}': {reason}")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },

    #[error("HTTP client could not be built: {0}")]
    HttpClient(#[from] reqwest::Error),
}

/// How request bodies are turned into JSON before dispatch.
#[derive(Debug, Clone, PartialEq)]
pub struct BodyOptions {
    /// Parse the body as JSON whatever Content-Type the client declared.
    pub force_json: bool,
    pub max_payload_bytes: usize,
}

impl Default for BodyOptions {
    fn default() -> Self {
        Self {
            force_json: true,
            max_payload_bytes: DEFAULT_MAX_PAYLOAD_BYTES,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub host: String,
    pub port: u16,
    pub workers: Option<usize>,
    pub shutdown_timeout_secs: u64,
    /// Base of the backend's `Determining` routes, always ending with '/'.
    pub determining_service_url: Url,
    pub determining_timeout: Duration,
    pub body: BodyOptions,
}

impl Settings {
    /// Reads settings from the process environment (after `.env` has been loaded).
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let determining_service_url = lookup("DETERMINING_SERVICE_URL")
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .ok_or(ConfigError::Missing {
                key: "DETERMINING_SERVICE_URL",
            })?;
        let determining_service_url = parse_base_url(&determining_service_url)?;

        Ok(Self {
            host: lookup("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port: parse_or(&lookup, "PORT", DEFAULT_PORT)?,
            workers: parse_opt(&lookup, "WORKERS")?,
            shutdown_timeout_secs: parse_or(
                &lookup,
                "SHUTDOWN_TIMEOUT_SECS",
                DEFAULT_SHUTDOWN_TIMEOUT_SECS,
            )?,
            determining_service_url,
            determining_timeout: Duration::from_secs(parse_or(
                &lookup,
                "DETERMINING_TIMEOUT_SECS",
                DEFAULT_UPSTREAM_TIMEOUT_SECS,
            )?),
            body: BodyOptions {
                force_json: parse_bool(&lookup, "FORCE_JSON_BODY", true)?,
                max_payload_bytes: parse_or(
                    &lookup,
                    "MAX_PAYLOAD_BYTES",
                    DEFAULT_MAX_PAYLOAD_BYTES,
                )?,
            },
        })
    }
}

fn parse_base_url(raw: &str) -> Result<Url, ConfigError> {
    let invalid = |reason: String| ConfigError::Invalid {
        key: "DETERMINING_SERVICE_URL",
        value: raw.to_string(),
        reason,
    };

    let mut candidate = raw.to_string();
    if !candidate.ends_with('/') {
        candidate.push('/');
    }
    let url = Url::parse(&candidate).map_err(|e| invalid(e.to_string()))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(invalid(format!("unsupported scheme '{}'", other))),
    }
}

fn parse_opt<F, T>(lookup: &F, key: &'static str) -> Result<Option<T>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(key) {
        None => Ok(None),
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|e| ConfigError::Invalid {
                key,
                value: raw.clone(),
                reason: e.to_string(),
            }),
    }
}

fn parse_or<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::fmt::Display,
{
    Ok(parse_opt(lookup, key)?.unwrap_or(default))
}

fn parse_bool<F>(lookup: &F, key: &'static str, default: bool) -> Result<bool, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let Some(raw) = lookup(key) else {
        return Ok(default);
    };
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::Invalid {
            key,
            value: raw,
            reason: "expected true/false".to_string(),
        }),
    }
}
