//! Application configuration.
//!
//! Handles loading rule extensions from environment variables, `.env` files
//! and an optional JSON rules file.

use std::env;
use std::path::{Path, PathBuf};

use dotenv::dotenv;
use serde::Deserialize;

use crate::error::{Error, Result};
use crate::script::Rules;

/// Environment variable holding extra comma-separated stage keywords.
pub const ENV_STAGE_KEYWORDS: &str = "STAGEFMT_STAGE_KEYWORDS";

/// Environment variable holding extra comma-separated discard substrings.
pub const ENV_DISCARD: &str = "STAGEFMT_DISCARD";

/// Environment variable pointing at a JSON rules file.
pub const ENV_RULES_FILE: &str = "STAGEFMT_RULES";

/// Rule extensions read from a JSON rules file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RulesFile {
    /// Extra speaker names treated as scene headings.
    pub stage_keywords: Vec<String>,
    /// Extra substrings marking a line as noise.
    pub discard_substrings: Vec<String>,
}

impl RulesFile {
    /// Read and parse a rules file.
    pub fn load(path: &Path) -> Result<Self> {
        let content =
            fs_err::read_to_string(path).map_err(|e| Error::io(e, path.to_path_buf()))?;
        serde_json::from_str(&content).map_err(|e| {
            Error::config(
                format!("invalid rules file {}: {e}", path.display()),
                "Expected a JSON object with `stage_keywords` and `discard_substrings` arrays",
            )
        })
    }
}

/// Configuration for the formatter.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Extra speaker names treated as scene headings
    pub stage_keywords: Vec<String>,
    /// Extra noise substrings
    pub discard_substrings: Vec<String>,
    /// Rules file the extensions were partly read from
    pub rules_path: Option<PathBuf>,
}

impl Config {
    /// Load configuration from environment variables
    pub fn load() -> Result<Self> {
        // Try to load .env file if present
        dotenv().ok();

        let mut config = Self::default();

        if let Some(path) = env::var(ENV_RULES_FILE).ok().filter(|p| !p.trim().is_empty()) {
            let path = PathBuf::from(shellexpand::tilde(&path).to_string());
            let file = RulesFile::load(&path).map_err(|e| match e {
                Error::Io { source, .. } if source.kind() == std::io::ErrorKind::NotFound => {
                    Error::config(
                        format!("rules file {} does not exist", path.display()),
                        "Check the STAGEFMT_RULES environment variable",
                    )
                }
                other => other,
            })?;
            config.stage_keywords.extend(file.stage_keywords);
            config.discard_substrings.extend(file.discard_substrings);
            config.rules_path = Some(path);
        }

        if let Ok(keywords) = env::var(ENV_STAGE_KEYWORDS) {
            config.stage_keywords.extend(split_list(&keywords));
        }

        if let Ok(discard) = env::var(ENV_DISCARD) {
            config.discard_substrings.extend(split_list(&discard));
        }

        Ok(config)
    }

    /// Default rules extended by this configuration.
    pub fn rules(&self) -> Rules {
        Rules::default()
            .with_stage_keywords(self.stage_keywords.iter().cloned())
            .with_discard_substrings(self.discard_substrings.iter().cloned())
    }
}

/// Split a comma-separated list, dropping empty entries.
fn split_list(value: &str) -> impl Iterator<Item = String> + '_ {
    value
        .split([',', '，'])
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(ToString::to_string)
}
