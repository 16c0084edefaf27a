//! Source configuration.
//!
//! `wortquiz.toml` names the remote CSV sheets, the version endpoint,
//! and a couple of quiz defaults. Every field has a built-in default, so
//! running without a config file works out of the box against the
//! published vocabulary sheets.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

const DEFAULT_STANDARD_URL: &str = "https://raw.githubusercontent.com/AntHavrylov/DeutschWordsLearn-csv/refs/heads/main/german_default%20-%20vocabulary.csv";
const DEFAULT_VERBS_URL: &str = "https://raw.githubusercontent.com/AntHavrylov/DeutschWordsLearn-csv/refs/heads/main/german_verbs%20-%20vocabulary.csv";
const DEFAULT_VERSION_URL: &str =
    "https://raw.githubusercontent.com/AntHavrylov/DeutschWordsLearn-csv/refs/heads/main/version.json";

/// A named remote CSV source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Source {
    pub name: String,
    pub url: String,
}

/// Top-level wortquiz configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Remote CSV sheets imported by `sync`.
    #[serde(default = "default_sources")]
    pub sources: Vec<Source>,
    /// Version watermark endpoint.
    #[serde(default = "default_version_url")]
    pub version_url: String,
    /// Questions per quiz session.
    #[serde(default = "default_question_count")]
    pub question_count: usize,
}

fn default_sources() -> Vec<Source> {
    vec![
        Source {
            name: "Standard".to_string(),
            url: DEFAULT_STANDARD_URL.to_string(),
        },
        Source {
            name: "Verben".to_string(),
            url: DEFAULT_VERBS_URL.to_string(),
        },
    ]
}

fn default_version_url() -> String {
    DEFAULT_VERSION_URL.to_string()
}

fn default_question_count() -> usize {
    wortquiz_core::quiz::DEFAULT_QUESTION_COUNT
}

impl Default for Config {
    fn default() -> Self {
        Self {
            sources: default_sources(),
            version_url: default_version_url(),
            question_count: default_question_count(),
        }
    }
}

/// Load configuration from the well-known paths.
///
/// Search order:
/// 1. `wortquiz.toml` in the current directory
/// 2. `~/.wortquiz.toml`
///
/// Built-in defaults apply when neither exists.
pub fn load_config() -> Result<Config> {
    load_config_from(None)
}

/// Load config from an explicit path, or search the default locations.
pub fn load_config_from(path: Option<&Path>) -> Result<Config> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("wortquiz.toml");
        if local.exists() {
            Some(local)
        } else {
            home_config_path().filter(|global| global.exists())
        }
    };

    match config_path {
        Some(path) => {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            toml::from_str::<Config>(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))
        }
        None => Ok(Config::default()),
    }
}

fn home_config_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".wortquiz.toml"))
}
