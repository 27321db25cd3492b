//! Site configuration for jobdeck
//!
//! Stored as JSON, typically at `<config_dir>/jobdeck/config.json`.
//! `load` degrades to defaults on any read or parse failure; `try_load`
//! surfaces the cause for diagnostics.

use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Site-wide configuration consumed by the web server and CLI
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SiteConfig {
    /// Brand name shown in the header
    pub brand: String,
    /// Short tagline for the landing page
    pub tagline: String,
    /// Origin of the hosted auth provider (sign-in widget + session API)
    pub auth_origin: String,
    /// Where the auth widget redirects after a completed sign-in/sign-up
    pub sign_in_redirect: String,
    /// Default port for the web server
    pub default_port: u16,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            brand: "jobdeck".to_string(),
            tagline: "Find your next role, or your next hire".to_string(),
            auth_origin: "https://auth.jobdeck.dev".to_string(),
            sign_in_redirect: "/onboarding".to_string(),
            default_port: 3000,
        }
    }
}

impl SiteConfig {
    /// Load config from `path`, falling back to defaults on any I/O or
    /// parse error (graceful degradation).
    pub fn load(path: &Path) -> Self {
        match Self::try_load(path) {
            Ok(config) => config,
            Err(e) => {
                tracing::debug!("using default site config: {}", e);
                Self::default()
            }
        }
    }

    /// Load config from `path`, surfacing the failure cause.
    pub fn try_load(path: &Path) -> Result<Self, CoreError> {
        let content = std::fs::read_to_string(path).map_err(|source| CoreError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&content).map_err(|source| CoreError::ConfigParse {
            path: path.to_path_buf(),
            message: source.to_string(),
            source,
        })
    }

    /// Persist config to `path`, creating parent directories as needed.
    pub fn save(&self, path: &Path) -> Result<(), CoreError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|source| CoreError::ConfigWrite {
                path: path.to_path_buf(),
                source,
            })?;
        }
        let content = serde_json::to_string_pretty(self)
            .map_err(|source| CoreError::ConfigSerialize { source })?;
        std::fs::write(path, content).map_err(|source| CoreError::ConfigWrite {
            path: path.to_path_buf(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_on_missing_file() {
        let path = std::env::temp_dir().join("jobdeck-test-config-missing/config.json");
        let config = SiteConfig::load(&path);
        assert_eq!(config, SiteConfig::default());
    }

    #[test]
    fn test_save_and_reload() {
        let dir = std::env::temp_dir().join("jobdeck-test-config-roundtrip");
        let path = dir.join("config.json");

        let mut config = SiteConfig::default();
        config.brand = "acme-jobs".to_string();
        config.default_port = 8080;
        config.save(&path).unwrap();

        let reloaded = SiteConfig::try_load(&path).unwrap();
        assert_eq!(reloaded, config);

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_malformed_json_degrades_to_default() {
        let dir = std::env::temp_dir().join("jobdeck-test-config-malformed");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("config.json");
        std::fs::write(&path, "{not valid json").unwrap();

        assert!(SiteConfig::try_load(&path).is_err());
        assert_eq!(SiteConfig::load(&path), SiteConfig::default());

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let partial: SiteConfig = serde_json::from_str(r#"{"brand": "acme"}"#).unwrap();
        assert_eq!(partial.brand, "acme");
        assert_eq!(partial.default_port, SiteConfig::default().default_port);
    }
}
