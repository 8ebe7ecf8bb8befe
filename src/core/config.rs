// src/core/config.rs
use std::env;
use std::path::PathBuf;
use std::time::Duration;
use log::LevelFilter;
use thiserror::Error;

use crate::generators::{MAX_PASSWORD_LENGTH, MIN_PASSWORD_LENGTH};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid port number: {0}")]
    InvalidPort(u16),

    #[error("Default password length {0} is outside {min}-{max}", min = MIN_PASSWORD_LENGTH, max = MAX_PASSWORD_LENGTH)]
    InvalidDefaultLength(usize),

    #[error("Invalid upstream generator URL '{0}'")]
    InvalidUpstreamUrl(String),

    #[error("At least one client origin is required")]
    NoClientOrigins,

    #[error("Invalid client origin '{0}' (expected scheme://host[:port] or *)")]
    InvalidClientOrigin(String),

    #[error("Upstream generator URL '{0}' points at this server")]
    UpstreamIsSelf(String),
}

// Configuration for the password service
#[derive(Debug, Clone)]
pub struct Config {
    // Web Interface
    pub web_address: String,
    pub web_port: u16,
    pub client_origins: Vec<String>,

    // Password Generation
    pub default_password_length: usize,

    // Upstream generator
    pub upstream_generator_url: Option<String>,
    pub upstream_timeout: Duration,

    // Logging
    pub log_level: LevelFilter,
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            // Web Interface
            web_address: "127.0.0.1".to_string(),
            web_port: 3000,
            client_origins: vec!["http://localhost:3000".to_string()],

            // Password Generation
            default_password_length: 12,

            // Upstream generator
            upstream_generator_url: None,
            upstream_timeout: Duration::from_secs(3),

            // Logging
            log_level: LevelFilter::Info,
            log_file: None,
        }
    }
}

impl Config {
    // Load configuration from environment variables
    pub fn load() -> (Self, Vec<String>) {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a config from any key lookup. Unparsable values keep their
    /// defaults; the returned warnings describe each one and are meant to be
    /// logged once the logger is up.
    pub fn from_lookup<F>(lookup: F) -> (Self, Vec<String>)
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();
        let mut warnings = Vec::new();

        // Web Interface
        if let Some(address) = lookup("WEB_ADDRESS") {
            config.web_address = address;
        }

        if let Some(val) = lookup("WEB_PORT") {
            match val.trim().parse() {
                Ok(port) => config.web_port = port,
                Err(_) => warnings.push(format!("Ignoring invalid WEB_PORT '{}'", val)),
            }
        }

        if let Some(origins) = lookup("CLIENT_ORIGINS") {
            config.client_origins = origins
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(String::from)
                .collect();
        }

        // Password Generation
        if let Some(val) = lookup("DEFAULT_PASSWORD_LENGTH") {
            match val.trim().parse() {
                Ok(length) => config.default_password_length = length,
                Err(_) => warnings.push(format!("Ignoring invalid DEFAULT_PASSWORD_LENGTH '{}'", val)),
            }
        }

        // Upstream generator
        if let Some(url) = lookup("UPSTREAM_GENERATOR_URL") {
            let url = url.trim().trim_end_matches('/');
            config.upstream_generator_url = if url.is_empty() {
                None
            } else {
                Some(url.to_string())
            };
        }

        if let Some(val) = lookup("UPSTREAM_TIMEOUT_SECS") {
            match val.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => config.upstream_timeout = Duration::from_secs(secs),
                _ => warnings.push(format!("Ignoring invalid UPSTREAM_TIMEOUT_SECS '{}'", val)),
            }
        }

        // Logging
        if let Some(level) = lookup("LOG_LEVEL") {
            match level.to_lowercase().as_str() {
                "off" => config.log_level = LevelFilter::Off,
                "error" => config.log_level = LevelFilter::Error,
                "warn" => config.log_level = LevelFilter::Warn,
                "info" => config.log_level = LevelFilter::Info,
                "debug" => config.log_level = LevelFilter::Debug,
                "trace" => config.log_level = LevelFilter::Trace,
                _ => warnings.push(format!(
                    "Unknown log level '{}', using {}",
                    level, config.log_level
                )),
            }
        }

        if let Some(file) = lookup("LOG_FILE") {
            if !file.trim().is_empty() {
                config.log_file = Some(PathBuf::from(file));
            }
        }

        (config, warnings)
    }

    // Reject settings the server cannot start with
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.web_port == 0 {
            return Err(ConfigError::InvalidPort(self.web_port));
        }

        if !(MIN_PASSWORD_LENGTH..=MAX_PASSWORD_LENGTH).contains(&self.default_password_length) {
            return Err(ConfigError::InvalidDefaultLength(self.default_password_length));
        }

        if let Some(url) = &self.upstream_generator_url {
            let parsed = match reqwest::Url::parse(url) {
                Ok(parsed) if is_http(&parsed) && parsed.host_str().is_some() => parsed,
                _ => return Err(ConfigError::InvalidUpstreamUrl(url.clone())),
            };

            if self.is_own_address(&parsed) {
                return Err(ConfigError::UpstreamIsSelf(url.clone()));
            }
        }

        if self.client_origins.is_empty() {
            return Err(ConfigError::NoClientOrigins);
        }

        for origin in &self.client_origins {
            if origin != "*" && !is_valid_origin(origin) {
                return Err(ConfigError::InvalidClientOrigin(origin.clone()));
            }
        }

        Ok(())
    }

    // An upstream on our own port is us when the hosts match, or when we
    // listen on every interface and the upstream is a loopback host.
    fn is_own_address(&self, url: &reqwest::Url) -> bool {
        if url.port_or_known_default() != Some(self.web_port) {
            return false;
        }

        let host = match url.host_str() {
            Some(host) => host.trim_start_matches('[').trim_end_matches(']').to_lowercase(),
            None => return false,
        };
        let own = self.web_address.trim_start_matches('[').trim_end_matches(']').to_lowercase();

        host == own
            || (is_loopback(&host) && (is_loopback(&own) || is_unspecified(&own)))
    }

    pub fn bind_address(&self) -> (String, u16) {
        (self.web_address.clone(), self.web_port)
    }
}

fn is_http(url: &reqwest::Url) -> bool {
    url.scheme() == "http" || url.scheme() == "https"
}

// Browsers send origins as scheme://host[:port] with nothing after
fn is_valid_origin(origin: &str) -> bool {
    match reqwest::Url::parse(origin) {
        Ok(url) => {
            is_http(&url)
                && url.host_str().is_some()
                && url.path() == "/"
                && !origin.ends_with('/')
                && url.query().is_none()
                && url.fragment().is_none()
                && url.username().is_empty()
        }
        Err(_) => false,
    }
}

fn is_loopback(host: &str) -> bool {
    host == "localhost"
        || host
            .parse::<std::net::IpAddr>()
            .map(|ip| ip.is_loopback())
            .unwrap_or(false)
}

fn is_unspecified(host: &str) -> bool {
    host.parse::<std::net::IpAddr>()
        .map(|ip| ip.is_unspecified())
        .unwrap_or(false)
}
