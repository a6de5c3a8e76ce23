//! Configuration management for the NetBox VCF exporter.
//!
//! Values come from environment variables, optionally seeded from a `.env`
//! file in the working directory.

use crate::error::{ConfigError, ConfigResult};
use std::env;
use std::path::PathBuf;

/// Configuration for a NetBox VCF export.
#[derive(Debug, Clone)]
pub struct Config {
    /// NetBox base URL (e.g. `https://netbox.example.com`)
    pub netbox_url: String,

    /// NetBox API token
    pub netbox_token: String,

    /// Directory exported files are written to (default: `vcf_exports`)
    pub export_dir: PathBuf,

    /// Public URL prefix under which `export_dir` is served, if any
    pub media_url: Option<String>,

    /// HTTP request timeout in seconds (default: 10)
    pub request_timeout: u64,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Required environment variables:
    /// - `NETBOX_URL`: Base URL of the NetBox instance
    /// - `NETBOX_TOKEN`: API token with read access to tenancy objects
    ///
    /// Optional environment variables:
    /// - `VCF_EXPORT_DIR`: Output directory (default: `vcf_exports`)
    /// - `VCF_EXPORT_MEDIA_URL`: URL prefix the output directory is served from
    /// - `REQUEST_TIMEOUT`: HTTP timeout in seconds (default: 10)
    pub fn from_env() -> ConfigResult<Self> {
        let mut config = Self::output_from_env()?;

        let netbox_url = env::var("NETBOX_URL")
            .map_err(|_| ConfigError::MissingVar("NETBOX_URL".to_string()))?;

        let netbox_token = env::var("NETBOX_TOKEN")
            .map_err(|_| ConfigError::MissingVar("NETBOX_TOKEN".to_string()))?;

        if !netbox_url.starts_with("http://") && !netbox_url.starts_with("https://") {
            return Err(ConfigError::InvalidValue {
                var: "NETBOX_URL".to_string(),
                reason: "Must start with http:// or https://".to_string(),
            });
        }

        if netbox_token.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                var: "NETBOX_TOKEN".to_string(),
                reason: "Cannot be empty".to_string(),
            });
        }

        config.netbox_url = netbox_url;
        config.netbox_token = netbox_token;
        Ok(config)
    }

    /// Load only the output and HTTP settings, leaving the NetBox connection empty.
    ///
    /// Used when exporting from a snapshot file instead of the live API.
    pub fn output_from_env() -> ConfigResult<Self> {
        // dotenvy never prints, so a missing .env is not worth reporting
        let _ = dotenvy::dotenv();

        let export_dir = env::var("VCF_EXPORT_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("vcf_exports"));

        let media_url = env::var("VCF_EXPORT_MEDIA_URL")
            .ok()
            .filter(|url| !url.trim().is_empty());

        let request_timeout = Self::parse_env_u64("REQUEST_TIMEOUT", 10)?;
        if request_timeout == 0 {
            return Err(ConfigError::InvalidValue {
                var: "REQUEST_TIMEOUT".to_string(),
                reason: "Must be at least 1 second".to_string(),
            });
        }

        Ok(Config {
            netbox_url: String::new(),
            netbox_token: String::new(),
            export_dir,
            media_url,
            request_timeout,
        })
    }

    /// Parse an environment variable as u64 with a default value.
    fn parse_env_u64(var_name: &str, default: u64) -> ConfigResult<u64> {
        match env::var(var_name) {
            Ok(val) => val.parse::<u64>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            netbox_url: String::new(),
            netbox_token: String::new(),
            export_dir: PathBuf::from("vcf_exports"),
            media_url: None,
            request_timeout: 10,
        }
    }
}
