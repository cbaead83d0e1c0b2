pub mod file;

use crate::domain::ports::ConfigProvider;
use std::path::{Path, PathBuf};
use std::time::Duration;

#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{
    validate_non_empty_string, validate_positive_number, validate_url, Validate,
};
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};

pub const DEFAULT_FIGURES_FILE: &str = "data/historical_figures.txt";
pub const DEFAULT_REMOTE_URL: &str =
    "https://raw.githubusercontent.com/hello-greet/hello-greet/main/data/historical_figures.txt";
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 5;

/// Resolved runtime configuration for the name-source resolver. Built from
/// CLI flags, optionally overridden by a TOML config file.
#[derive(Debug, Clone)]
pub struct Settings {
    pub figures_file: Option<PathBuf>,
    pub remote_url: String,
    pub timeout_seconds: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            figures_file: Some(PathBuf::from(DEFAULT_FIGURES_FILE)),
            remote_url: DEFAULT_REMOTE_URL.to_string(),
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
        }
    }
}

impl ConfigProvider for Settings {
    fn figures_file(&self) -> Option<&Path> {
        self.figures_file.as_deref()
    }

    fn remote_url(&self) -> &str {
        &self.remote_url
    }

    fn fetch_timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}

#[cfg(feature = "cli")]
const AFTER_HELP: &str = "\
Examples:
  hello-greet                          # Print 'Hello, World!'
  hello-greet --name Alice             # Print 'Hello, Alice!'
  hello-greet --random-historical      # Greet a random historical figure
  hello-greet --gui                    # Launch GUI mode
  hello-greet --commit \"Initial commit\"  # Commit and push changes";

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "hello-greet")]
#[command(about = "Hello World application with Git integration")]
#[command(after_help = AFTER_HELP)]
pub struct CliConfig {
    /// Name to greet
    #[arg(long)]
    pub name: Option<String>,

    /// Greet a random historical figure
    #[arg(long)]
    pub random_historical: bool,

    /// Commit message for git commit and push
    #[arg(long, value_name = "MESSAGE")]
    pub commit: Option<String>,

    /// Run the application in GUI mode
    #[arg(long)]
    pub gui: bool,

    /// Optional TOML configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[arg(long, default_value = DEFAULT_FIGURES_FILE)]
    pub figures_file: PathBuf,

    #[arg(long, default_value = DEFAULT_REMOTE_URL)]
    pub remote_url: String,

    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECONDS)]
    pub timeout_seconds: u64,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// Merges CLI flags with the optional TOML file. File values take
    /// precedence over CLI defaults for the figures settings.
    pub fn settings(&self) -> Result<Settings> {
        let file = match &self.config {
            Some(path) => Some(file::FileConfig::from_path(path)?),
            None => None,
        };
        let figures = file.as_ref().and_then(|f| f.figures.as_ref());

        Ok(Settings {
            figures_file: figures
                .and_then(|f| f.file.clone())
                .map(PathBuf::from)
                .or_else(|| Some(self.figures_file.clone())),
            remote_url: figures
                .and_then(|f| f.remote_url.clone())
                .unwrap_or_else(|| self.remote_url.clone()),
            timeout_seconds: figures
                .and_then(|f| f.timeout_seconds)
                .unwrap_or(self.timeout_seconds),
        })
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_url("remote_url", &self.remote_url)?;
        validate_positive_number("timeout_seconds", self.timeout_seconds, 1)?;
        if let Some(message) = &self.commit {
            validate_non_empty_string("commit", message)?;
        }
        Ok(())
    }
}
