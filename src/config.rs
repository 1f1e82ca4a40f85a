//! Client configuration and the optional ~/.config/feedly/config.toml file.
//!
//! A [`ClientConfig`] is an explicit value handed to
//! [`FeedlyClient::new`](crate::FeedlyClient::new); nothing is read from
//! process-wide state once a client exists. The config file is optional and
//! a missing file yields [`ConfigFile::default()`]. Environment variables
//! override file values when the two are merged in [`ClientConfig::resolve`].
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;
use thiserror::Error;
use url::Url;

pub const DEFAULT_BASE_URL: &str = "https://cloud.feedly.com";
pub const DEFAULT_VERSION: &str = "v3";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(20);

/// Environment variable holding the OAuth access token.
pub const TOKEN_ENV: &str = "FEEDLY_ACCESS_TOKEN";
/// Environment variable overriding the API base URL.
pub const BASE_URL_ENV: &str = "FEEDLY_BASE_URL";

// ============================================================================
// Error Types
// ============================================================================

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid TOML in config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Config file too large: {0}")]
    TooLarge(String),

    #[error("No access token configured (set FEEDLY_ACCESS_TOKEN or `token` in the config file)")]
    MissingToken,

    #[error("Access token contains characters not allowed in an HTTP header")]
    InvalidToken,

    #[error("Invalid base URL: {0}")]
    InvalidBaseUrl(String),

    #[error("Insecure base URL {0}: HTTPS required (except localhost for testing)")]
    InsecureBaseUrl(String),
}

// ============================================================================
// Config File
// ============================================================================

/// Contents of the TOML config file.
///
/// All fields are optional so any subset of keys can be specified.
/// `Debug` masks `token` to keep it out of logs and error messages.
#[derive(Default, Deserialize)]
#[serde(default)]
pub struct ConfigFile {
    /// API root, e.g. `https://cloud.feedly.com` or a sandbox host.
    pub base_url: Option<String>,

    /// API version path segment, e.g. `v3`.
    pub version: Option<String>,

    /// OAuth access token. The environment variable takes precedence.
    pub token: Option<String>,

    /// Per-request timeout in seconds.
    pub timeout_secs: Option<u64>,
}

impl std::fmt::Debug for ConfigFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConfigFile")
            .field("base_url", &self.base_url)
            .field("version", &self.version)
            .field("token", &self.token.as_ref().map(|_| "[REDACTED]"))
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl ConfigFile {
    /// Maximum config file size (1 MB).
    const MAX_FILE_SIZE: u64 = 1_048_576;

    const KNOWN_KEYS: [&'static str; 4] = ["base_url", "version", "token", "timeout_secs"];

    /// Load configuration from a TOML file.
    ///
    /// - Missing file → `Ok(ConfigFile::default())`
    /// - Empty file → `Ok(ConfigFile::default())`
    /// - Invalid TOML → `Err(ConfigError::Parse)` with line number info
    /// - Unknown keys → accepted, logged as warning
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        match std::fs::metadata(path) {
            Ok(meta) if meta.len() > Self::MAX_FILE_SIZE => {
                return Err(ConfigError::TooLarge(format!(
                    "Config file is {} bytes (max {} bytes)",
                    meta.len(),
                    Self::MAX_FILE_SIZE
                )));
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "No config file found, using defaults");
                return Ok(Self::default());
            }
            Err(e) => return Err(ConfigError::Io(e)),
            Ok(_) => {}
        }

        let content = match std::fs::read_to_string(path) {
            Ok(c) => c,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "Config file disappeared, using defaults");
                return Ok(Self::default());
            }
            Err(e) => return Err(ConfigError::Io(e)),
        };

        if content.trim().is_empty() {
            tracing::debug!(path = %path.display(), "Config file is empty, using defaults");
            return Ok(Self::default());
        }

        if let Ok(raw) = content.parse::<toml::Table>() {
            for key in raw.keys() {
                if !Self::KNOWN_KEYS.contains(&key.as_str()) {
                    tracing::warn!(key = %key, "Unknown key in config file, ignoring");
                }
            }
        }

        let file: ConfigFile = toml::from_str(&content)?;
        tracing::info!(path = %path.display(), "Loaded configuration");
        Ok(file)
    }
}

// ============================================================================
// Client Config
// ============================================================================

/// Everything a [`FeedlyClient`](crate::FeedlyClient) needs to talk to the API.
pub struct ClientConfig {
    base_url: Url,
    version: String,
    token: SecretString,
    timeout: Duration,
}

impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("base_url", &self.base_url.as_str())
            .field("version", &self.version)
            .field("token", &"[REDACTED]")
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl ClientConfig {
    /// Production defaults with the given access token.
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            base_url: Url::parse(DEFAULT_BASE_URL).expect("DEFAULT_BASE_URL is a valid URL"),
            version: DEFAULT_VERSION.to_string(),
            token: SecretString::from(token.into()),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Point the client at another API root (for instance a sandbox host).
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBaseUrl`] if `base_url` does not parse as
    /// an absolute http(s) URL, and [`ConfigError::InsecureBaseUrl`] for plain
    /// HTTP to anything other than localhost.
    pub fn with_base_url(mut self, base_url: &str) -> Result<Self, ConfigError> {
        self.base_url = validate_base_url(base_url)?;
        Ok(self)
    }

    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Merge a config file with the process environment.
    ///
    /// `FEEDLY_ACCESS_TOKEN` and `FEEDLY_BASE_URL` take precedence over the
    /// file's `token` and `base_url`.
    pub fn resolve(file: ConfigFile) -> Result<Self, ConfigError> {
        Self::resolve_with(file, |key| std::env::var(key).ok())
    }

    /// [`resolve`](Self::resolve) with an injectable environment lookup.
    pub fn resolve_with<F>(file: ConfigFile, env: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let token = env(TOKEN_ENV)
            .filter(|t| !t.trim().is_empty())
            .or(file.token)
            .filter(|t| !t.trim().is_empty())
            .ok_or(ConfigError::MissingToken)?;

        let mut config = Self::new(token);

        if let Some(base_url) = env(BASE_URL_ENV).or(file.base_url) {
            config = config.with_base_url(&base_url)?;
        }
        if let Some(version) = file.version {
            config = config.with_version(version);
        }
        if let Some(secs) = file.timeout_secs {
            config = config.with_timeout(Duration::from_secs(secs));
        }

        tracing::debug!(
            base_url = %config.base_url,
            version = %config.version,
            timeout_secs = config.timeout.as_secs(),
            "Resolved client configuration"
        );
        Ok(config)
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub(crate) fn bearer(&self) -> String {
        format!("Bearer {}", self.token.expose_secret())
    }
}

/// Parse a base URL, enforcing HTTPS so the bearer token is never sent in
/// clear text. Plain HTTP is allowed only for localhost and 127.0.0.1.
fn validate_base_url(raw: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(raw).map_err(|e| ConfigError::InvalidBaseUrl(format!("{raw}: {e}")))?;

    if url.cannot_be_a_base() {
        return Err(ConfigError::InvalidBaseUrl(raw.to_string()));
    }

    match url.scheme() {
        "https" => Ok(url),
        "http" => match url.host_str() {
            Some("localhost") | Some("127.0.0.1") => {
                tracing::warn!(base_url = %url, "Using non-HTTPS Feedly base URL (localhost only)");
                Ok(url)
            }
            _ => {
                tracing::error!(base_url = %url, "Rejecting non-HTTPS base URL");
                Err(ConfigError::InsecureBaseUrl(raw.to_string()))
            }
        },
        scheme => Err(ConfigError::InvalidBaseUrl(format!(
            "{raw}: unsupported scheme {scheme}"
        ))),
    }
}

// ============================================================================
// Tests
// ============================================================================
