use crate::utils::error::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Optional TOML configuration file. All sections and keys are optional;
/// anything absent falls back to the CLI flag or its default.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FileConfig {
    pub figures: Option<FiguresConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FiguresConfig {
    pub file: Option<String>,
    pub remote_url: Option<String>,
    pub timeout_seconds: Option<u64>,
}

impl FileConfig {
    pub fn from_path(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let config = toml::from_str(&text)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_full_config() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[figures]\nfile = \"data/names.txt\"\nremote_url = \"https://example.com/figures\"\ntimeout_seconds = 3"
        )
        .unwrap();

        let config = FileConfig::from_path(file.path()).unwrap();
        let figures = config.figures.unwrap();
        assert_eq!(figures.file.as_deref(), Some("data/names.txt"));
        assert_eq!(figures.remote_url.as_deref(), Some("https://example.com/figures"));
        assert_eq!(figures.timeout_seconds, Some(3));
    }

    #[test]
    fn test_empty_config_is_valid() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "").unwrap();

        let config = FileConfig::from_path(file.path()).unwrap();
        assert!(config.figures.is_none());
    }

    #[test]
    fn test_missing_file_is_an_error() {
        assert!(FileConfig::from_path(Path::new("/nonexistent/greet.toml")).is_err());
    }

    #[test]
    fn test_malformed_toml_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[figures\nfile =").unwrap();
        assert!(FileConfig::from_path(file.path()).is_err());
    }
}
