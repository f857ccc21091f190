//! Screen configuration.
//!
//! Every field has a default so the screen works out of the box; a shell may
//! send a partial JSON object through `Event::Configure`.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;

use crate::ibge::DEFAULT_REGIONS_ENDPOINT;

pub const DEFAULT_POINTS_ROUTE: &str = "Points";
pub const MAX_URL_LENGTH: usize = 2048;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("private network access blocked: {url} resolves to {host}")]
    PrivateNetworkBlocked { url: String, host: String },

    #[error("points route cannot be empty")]
    EmptyRoute,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HomeConfig {
    /// Lists every UF; `/{uf}/municipios` is appended for cities.
    pub regions_endpoint: String,
    /// Router destination for the submit button.
    pub points_route: String,
}

impl Default for HomeConfig {
    fn default() -> Self {
        Self {
            regions_endpoint: DEFAULT_REGIONS_ENDPOINT.to_string(),
            points_route: DEFAULT_POINTS_ROUTE.to_string(),
        }
    }
}

impl HomeConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_endpoint(&self.regions_endpoint)?;

        if self.points_route.trim().is_empty() {
            return Err(ConfigError::EmptyRoute);
        }

        Ok(())
    }
}

/// Accept only absolute `http`/`https` URLs on a public host, without
/// credentials.
pub fn validate_endpoint(url: &str) -> Result<Url, ConfigError> {
    let invalid = |reason: String| ConfigError::InvalidUrl {
        url: truncate_url(url),
        reason,
    };

    if url.trim().is_empty() {
        return Err(invalid("URL cannot be empty".to_string()));
    }

    if url.len() > MAX_URL_LENGTH {
        return Err(invalid(format!(
            "URL exceeds maximum length of {} bytes",
            MAX_URL_LENGTH
        )));
    }

    let parsed = Url::parse(url).map_err(|e| invalid(e.to_string()))?;

    let scheme = parsed.scheme();
    if scheme != "http" && scheme != "https" {
        return Err(invalid(format!(
            "invalid scheme '{}', only 'http' and 'https' are allowed",
            scheme
        )));
    }

    let Some(host) = parsed.host_str().map(str::to_lowercase) else {
        return Err(invalid("URL must have a host".to_string()));
    };

    if is_private_host(&host) {
        return Err(ConfigError::PrivateNetworkBlocked {
            url: truncate_url(url),
            host,
        });
    }

    if !parsed.username().is_empty() || parsed.password().is_some() {
        return Err(invalid("credentials in URL are not allowed".to_string()));
    }

    Ok(parsed)
}

fn is_private_host(host: &str) -> bool {
    if matches!(host, "localhost" | "127.0.0.1" | "[::1]" | "0.0.0.0") {
        return true;
    }

    if host.ends_with(".local") || host.ends_with(".localhost") || host.ends_with(".internal") {
        return true;
    }

    if host.starts_with("10.") || host.starts_with("192.168.") || host.starts_with("169.254.") {
        return true;
    }

    // 172.16.0.0/12
    if let Some(rest) = host.strip_prefix("172.") {
        let second = rest.split('.').next().and_then(|s| s.parse::<u8>().ok());
        if matches!(second, Some(16..=31)) {
            return true;
        }
    }

    false
}

fn truncate_url(url: &str) -> String {
    match url.char_indices().nth(100) {
        Some((idx, _)) => format!("{}...", &url[..idx]),
        None => url.to_string(),
    }
}
