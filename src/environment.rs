// src/environment.rs
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::core::service_client::DEFAULT_TIMEOUT_SECS;

pub const DEFAULT_API_URL: &str = "http://localhost:9000/api/v1";
pub const DEFAULT_AI_URL: &str = "http://localhost:9090/api/v1";
pub const DEFAULT_REVIEWER_URL: &str = "http://localhost:8000/api/v1";
pub const DEFAULT_CONFIG_FILE: &str = "config.yaml";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnvironmentConfig {
    /// Main backend: candidates, chat sessions, stats
    #[serde(default = "default_api_url")]
    pub api_url: String,
    /// AI service: CV screening, jobs, assistant
    #[serde(default = "default_ai_url")]
    pub ai_url: String,
    /// Code reviewer: repositories and PR reviews
    #[serde(default = "default_reviewer_url")]
    pub reviewer_url: String,
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,
    #[serde(default)]
    pub default_headers: BTreeMap<String, String>,
    #[serde(default)]
    pub log_file: Option<PathBuf>,
    /// Section of `config.yaml` this configuration was resolved from
    #[serde(skip)]
    pub environment: String,
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

fn default_ai_url() -> String {
    DEFAULT_AI_URL.to_string()
}

fn default_reviewer_url() -> String {
    DEFAULT_REVIEWER_URL.to_string()
}

fn default_timeout() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            ai_url: default_ai_url(),
            reviewer_url: default_reviewer_url(),
            timeout_seconds: default_timeout(),
            default_headers: BTreeMap::new(),
            log_file: None,
            environment: "local".to_string(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    local: Option<EnvironmentConfig>,
    #[serde(default)]
    production: Option<EnvironmentConfig>,
}

impl EnvironmentConfig {
    /// Load configuration for the current environment.
    ///
    /// An explicit `path` must exist; otherwise `config.yaml` in the working
    /// directory is used when present, and built-in defaults when not.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let environment = Self::get_environment();

        let content = match path {
            Some(path) => Some(
                std::fs::read_to_string(path)
                    .with_context(|| format!("Failed to read {}", path.display()))?,
            ),
            None => {
                let default_path = PathBuf::from(DEFAULT_CONFIG_FILE);
                if default_path.exists() {
                    Some(
                        std::fs::read_to_string(&default_path)
                            .context("Failed to read config.yaml")?,
                    )
                } else {
                    None
                }
            }
        };

        Self::from_sources(content.as_deref(), &environment, |key| std::env::var(key).ok())
    }

    fn get_environment() -> String {
        std::env::var("TALENTDESK_ENV")
            .or_else(|_| std::env::var("ENVIRONMENT"))
            .or_else(|_| std::env::var("ENV"))
            .unwrap_or_else(|_| "local".to_string())
    }

    /// Resolve the configuration from file content and an environment lookup
    pub fn from_sources<F>(yaml: Option<&str>, environment: &str, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let config_file: ConfigFile = match yaml {
            Some(content) => serde_yaml::from_str(content).context("Failed to parse config.yaml")?,
            None => ConfigFile::default(),
        };

        let mut base = match environment {
            "production" => config_file.production,
            _ => config_file.local,
        }
        .unwrap_or_default();
        base.environment = environment.to_string();

        base.with_overrides(lookup)?.validated()
    }

    fn with_overrides<F>(mut self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup("TALENTDESK_API_URL") {
            self.api_url = url;
        }
        if let Some(url) = lookup("TALENTDESK_AI_URL") {
            self.ai_url = url;
        }
        if let Some(url) = lookup("TALENTDESK_REVIEWER_URL") {
            self.reviewer_url = url;
        }
        if let Some(secs) = lookup("TALENTDESK_TIMEOUT_SECS") {
            self.timeout_seconds = secs
                .trim()
                .parse()
                .map_err(|_| anyhow::anyhow!("TALENTDESK_TIMEOUT_SECS must be a number of seconds"))?;
        }
        Ok(self)
    }

    fn validated(mut self) -> Result<Self> {
        for (name, url) in [
            ("api_url", &mut self.api_url),
            ("ai_url", &mut self.ai_url),
            ("reviewer_url", &mut self.reviewer_url),
        ] {
            let trimmed = url.trim().trim_end_matches('/').to_string();
            if trimmed.is_empty() {
                anyhow::bail!("{} must not be empty", name);
            }
            *url = trimmed;
        }

        if self.timeout_seconds == 0 {
            anyhow::bail!("timeout_seconds must be greater than zero");
        }

        Ok(self)
    }
}
