//! Runner configuration

use std::env;
use std::fmt;
use std::str::FromStr;

use anyhow::{Context, Result};
use muster_domain::Position;

/// How the report is written to stdout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// One fact per line
    #[default]
    Text,
    /// Unit snapshots before and after placement
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Json => write!(f, "json"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => anyhow::bail!("unknown output format: {other} (expected text or json)"),
        }
    }
}

/// Runner configuration loaded from environment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunnerConfig {
    /// Square where the mustered unit enters play
    pub start_square: Position,
    /// Report format
    pub output: OutputFormat,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            start_square: Position::new(5, 5),
            output: OutputFormat::Text,
        }
    }
}

impl RunnerConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Self::default();

        let start_square = match lookup("MUSTER_START_SQUARE") {
            Some(raw) => raw
                .parse()
                .context("MUSTER_START_SQUARE must look like \"x,y\"")?,
            None => defaults.start_square,
        };

        let output = match lookup("MUSTER_OUTPUT") {
            Some(raw) => raw.parse().context("MUSTER_OUTPUT is invalid")?,
            None => defaults.output,
        };

        Ok(Self {
            start_square,
            output,
        })
    }
}

/// Loads `.env.local` then `.env` from the repo root, if present.
pub fn load_dotenv_from_repo_root() {
    let repo_root = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..");

    // Prefer local overrides.
    for filename in [".env.local", ".env"] {
        let path = repo_root.join(filename);
        if path.exists() {
            let _ = dotenvy::from_path(path);
        }
    }
}
