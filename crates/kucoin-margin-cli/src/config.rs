/*
[INPUT]:  YAML configuration file and KUCOIN_* environment variables
[OUTPUT]: Effective client configuration and credentials
[POS]:    Configuration layer - CLI setup
[UPDATE]: When adding new configuration options
*/

use std::path::Path;
use std::time::Duration;

use anyhow::Context;
use kucoin_margin_adapter::http::client::{DEFAULT_BASE_URL, DEFAULT_KEY_VERSION};
use kucoin_margin_adapter::{ClientConfig, Credentials};
use serde::{Deserialize, Serialize};

pub const ENV_BASE_URL: &str = "KUCOIN_BASE_URL";
pub const ENV_API_KEY: &str = "KUCOIN_API_KEY";
pub const ENV_API_SECRET: &str = "KUCOIN_API_SECRET";
pub const ENV_API_PASSPHRASE: &str = "KUCOIN_API_PASSPHRASE";
pub const ENV_API_KEY_VERSION: &str = "KUCOIN_API_KEY_VERSION";

const REDACTED: &str = "<redacted>";

/// Top-level configuration for the CLI
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct CliConfig {
    /// REST API base URL
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Whole-request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,
    /// API key credentials; public endpoints work without them
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credentials: Option<CredentialsConfig>,
}

/// API key credentials configuration
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct CredentialsConfig {
    pub api_key: String,
    pub api_secret: String,
    pub api_passphrase: String,
    #[serde(default = "default_key_version")]
    pub key_version: String,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            connect_timeout_secs: default_connect_timeout_secs(),
            credentials: None,
        }
    }
}

impl CliConfig {
    /// Load configuration from YAML file
    pub fn from_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("read config file {}", path.display()))?;
        let config: Self = serde_yaml::from_str(&content)
            .with_context(|| format!("parse config file {}", path.display()))?;
        Ok(config)
    }

    /// Apply KUCOIN_* environment variables on top of the loaded values
    pub fn apply_env(&mut self) {
        self.apply_overrides(|name| std::env::var(name).ok());
    }

    /// Apply overrides from an arbitrary lookup; empty values are ignored.
    ///
    /// Credentials are only created from scratch when key, secret and
    /// passphrase are all available.
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let lookup = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        if let Some(base_url) = lookup(ENV_BASE_URL) {
            self.base_url = base_url;
        }

        let api_key = lookup(ENV_API_KEY);
        let api_secret = lookup(ENV_API_SECRET);
        let api_passphrase = lookup(ENV_API_PASSPHRASE);
        let key_version = lookup(ENV_API_KEY_VERSION);

        match self.credentials.as_mut() {
            Some(existing) => {
                if let Some(value) = api_key {
                    existing.api_key = value;
                }
                if let Some(value) = api_secret {
                    existing.api_secret = value;
                }
                if let Some(value) = api_passphrase {
                    existing.api_passphrase = value;
                }
                if let Some(value) = key_version {
                    existing.key_version = value;
                }
            }
            None => {
                if let (Some(api_key), Some(api_secret), Some(api_passphrase)) =
                    (api_key, api_secret, api_passphrase)
                {
                    self.credentials = Some(CredentialsConfig {
                        api_key,
                        api_secret,
                        api_passphrase,
                        key_version: key_version.unwrap_or_else(default_key_version),
                    });
                }
            }
        }
    }

    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            base_url: self.base_url.clone(),
            timeout: Duration::from_secs(self.timeout_secs),
            connect_timeout: Duration::from_secs(self.connect_timeout_secs),
        }
    }

    pub fn credentials(&self) -> Option<Credentials> {
        self.credentials.as_ref().map(|c| Credentials {
            api_key: c.api_key.clone(),
            api_secret: c.api_secret.clone(),
            api_passphrase: c.api_passphrase.clone(),
            key_version: c.key_version.clone(),
        })
    }

    /// Copy safe to print: secret and passphrase replaced
    pub fn redacted(&self) -> Self {
        let mut config = self.clone();
        if let Some(credentials) = config.credentials.as_mut() {
            credentials.api_secret = REDACTED.to_string();
            credentials.api_passphrase = REDACTED.to_string();
        }
        config
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_connect_timeout_secs() -> u64 {
    10
}

fn default_key_version() -> String {
    DEFAULT_KEY_VERSION.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn defaults_when_file_is_minimal() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        writeln!(file, "timeout_secs: 5").expect("write config");

        let config = CliConfig::from_file(file.path()).expect("load config");
        assert_eq!(config.base_url, "https://api.kucoin.com");
        assert_eq!(config.timeout_secs, 5);
        assert_eq!(config.connect_timeout_secs, 10);
        assert!(config.credentials.is_none());
        assert_eq!(config.client_config().timeout, Duration::from_secs(5));
    }

    #[test]
    fn credentials_from_file_default_key_version() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        writeln!(
            file,
            "credentials:\n  api_key: k\n  api_secret: s\n  api_passphrase: p"
        )
        .expect("write config");

        let config = CliConfig::from_file(file.path()).expect("load config");
        let credentials = config.credentials().expect("credentials");
        assert_eq!(credentials.api_key, "k");
        assert_eq!(credentials.key_version, "2");
    }

    #[test]
    fn missing_file_is_an_error() {
        let err = CliConfig::from_file("/definitely/not/here.yaml").expect_err("missing");
        assert!(err.to_string().contains("read config file"));
    }

    #[test]
    fn env_creates_credentials_only_when_complete() {
        let mut partial = CliConfig::default();
        partial.apply_overrides(lookup_from(&[(ENV_API_KEY, "k"), (ENV_API_SECRET, "s")]));
        assert!(partial.credentials.is_none());

        let mut complete = CliConfig::default();
        complete.apply_overrides(lookup_from(&[
            (ENV_API_KEY, "k"),
            (ENV_API_SECRET, "s"),
            (ENV_API_PASSPHRASE, "p"),
            (ENV_BASE_URL, "https://openapi-sandbox.kucoin.com"),
        ]));
        assert_eq!(complete.base_url, "https://openapi-sandbox.kucoin.com");
        let credentials = complete.credentials.expect("credentials");
        assert_eq!(credentials.api_passphrase, "p");
        assert_eq!(credentials.key_version, "2");
    }

    #[test]
    fn env_overrides_individual_fields() {
        let mut config = CliConfig {
            credentials: Some(CredentialsConfig {
                api_key: "file-key".to_string(),
                api_secret: "file-secret".to_string(),
                api_passphrase: "file-pass".to_string(),
                key_version: "2".to_string(),
            }),
            ..CliConfig::default()
        };
        config.apply_overrides(lookup_from(&[(ENV_API_SECRET, "env-secret"), (ENV_API_KEY, "  ")]));

        let credentials = config.credentials.expect("credentials");
        assert_eq!(credentials.api_key, "file-key");
        assert_eq!(credentials.api_secret, "env-secret");
    }

    #[test]
    fn redacted_hides_secrets() {
        let mut config = CliConfig::default();
        config.apply_overrides(lookup_from(&[
            (ENV_API_KEY, "k"),
            (ENV_API_SECRET, "s3cret"),
            (ENV_API_PASSPHRASE, "p4ss"),
        ]));

        let rendered = serde_yaml::to_string(&config.redacted()).expect("yaml");
        assert!(rendered.contains("api_key: k"));
        assert!(!rendered.contains("s3cret"));
        assert!(!rendered.contains("p4ss"));
        assert_eq!(config.credentials.as_ref().map(|c| c.api_secret.as_str()), Some("s3cret"));
    }
}
