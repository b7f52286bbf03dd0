use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

use crate::error::ConfigError;

const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8501";
/// Searched in order, relative to the working directory.
const DEFAULT_SECRETS_FILES: [&str; 2] = ["secrets.toml", ".streamlit/secrets.toml"];

#[derive(Debug, Clone, Serialize)]
pub struct Config {
    /// Server bind address
    pub bind_addr: String,
    /// Retrieval API credentials and endpoint
    pub retrieval: RetrievalConfig,
}

/// Connection settings for the hosted retrieval API.
///
/// Both `api_key` and `base_url` are secrets: neither is serialized and
/// `Debug` redacts them.
#[derive(Clone, Serialize)]
pub struct RetrievalConfig {
    #[serde(skip_serializing)]
    pub base_url: String,
    #[serde(skip_serializing)]
    pub api_key: String,
    /// Whole-request timeout. `None` leaves the HTTP client default in place.
    pub timeout_secs: Option<u64>,
}

impl fmt::Debug for RetrievalConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RetrievalConfig")
            .field("base_url", &"<redacted>")
            .field("api_key", &"<redacted>")
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl RetrievalConfig {
    /// Build a validated config. The base URL must be http(s); a trailing
    /// slash is dropped so `{base_url}/retrievals` never doubles it.
    pub fn new(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Result<Self, ConfigError> {
        let base_url = base_url.into().trim().trim_end_matches('/').to_string();
        let api_key = api_key.into().trim().to_string();

        if base_url.is_empty() {
            return Err(ConfigError::Missing("RAGIE_BASE_URL"));
        }
        if api_key.is_empty() {
            return Err(ConfigError::Missing("RAGIE_API_KEY"));
        }
        if !base_url.starts_with("https://") && !base_url.starts_with("http://") {
            return Err(ConfigError::InvalidBaseUrl);
        }

        Ok(Self {
            base_url,
            api_key,
            timeout_secs: None,
        })
    }

    pub fn with_timeout_secs(mut self, secs: Option<u64>) -> Self {
        self.timeout_secs = secs;
        self
    }

    pub fn retrievals_url(&self) -> String {
        format!("{}/retrievals", self.base_url)
    }
}

/// On-disk secrets layout:
///
/// ```toml
/// [api]
/// key = "..."
/// base_url = "https://api.example.com"
/// ```
#[derive(Debug, Default, Deserialize)]
pub struct SecretsFile {
    #[serde(default)]
    pub api: ApiSecrets,
}

#[derive(Default, Deserialize)]
pub struct ApiSecrets {
    pub key: Option<String>,
    pub base_url: Option<String>,
}

impl fmt::Debug for ApiSecrets {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiSecrets")
            .field("key", &self.key.as_ref().map(|_| "<redacted>"))
            .field("base_url", &self.base_url.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

impl SecretsFile {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let data = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadSecrets {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&data).map_err(|source| ConfigError::ParseSecrets {
            path: path.to_path_buf(),
            source,
        })
    }
}

impl Config {
    /// Read configuration from the process environment, falling back to a
    /// secrets file for the credential and endpoint.
    ///
    /// The secrets file is `QA_SECRETS_FILE` if set (it must then exist),
    /// otherwise the first of `secrets.toml` or `.streamlit/secrets.toml`
    /// found in the working directory.
    pub fn from_env() -> Result<Self, ConfigError> {
        let path = match std::env::var("QA_SECRETS_FILE") {
            Ok(path) => Some(PathBuf::from(path)),
            Err(_) => find_secrets_file(Path::new(".")),
        };
        let secrets = match path {
            Some(path) => {
                tracing::info!("Reading secrets file {}", path.display());
                Some(SecretsFile::load(&path)?)
            }
            None => None,
        };

        Self::from_lookup(|name| std::env::var(name).ok(), secrets)
    }

    /// Resolve configuration from a variable lookup and optional secrets
    /// file. Variables take precedence over the file.
    pub fn from_lookup<F>(lookup: F, secrets: Option<SecretsFile>) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let secrets = secrets.unwrap_or_default();
        let non_empty = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let base_url = non_empty("RAGIE_BASE_URL")
            .or(secrets.api.base_url)
            .ok_or(ConfigError::Missing("RAGIE_BASE_URL"))?;
        let api_key = non_empty("RAGIE_API_KEY")
            .or(secrets.api.key)
            .ok_or(ConfigError::Missing("RAGIE_API_KEY"))?;

        let timeout_secs = match non_empty("RAGIE_TIMEOUT_SECS") {
            Some(val) => Some(
                val.trim()
                    .parse::<u64>()
                    .map_err(|_| ConfigError::InvalidTimeout(val.clone()))?,
            ),
            None => None,
        };

        let bind_addr =
            non_empty("QA_BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());

        Ok(Self {
            bind_addr,
            retrieval: RetrievalConfig::new(base_url, api_key)?.with_timeout_secs(timeout_secs),
        })
    }
}

/// First default secrets file that exists under `root`.
pub fn find_secrets_file(root: &Path) -> Option<PathBuf> {
    DEFAULT_SECRETS_FILES
        .iter()
        .map(|name| root.join(name))
        .find(|path| path.is_file())
}
