use thiserror::Error;

#[derive(Error, Debug)]
pub enum GreetError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Git operation failed: {message}")]
    Git { message: String },
}

impl GreetError {
    pub fn user_friendly_message(&self) -> String {
        match self {
            GreetError::Http(_) => "Could not reach the remote name source".to_string(),
            GreetError::Io(e) => format!("File operation failed: {}", e),
            GreetError::ConfigParse(e) => format!("Configuration file is not valid TOML: {}", e),
            GreetError::InvalidConfigValue { field, reason, .. } => {
                format!("Invalid {}: {}", field, reason)
            }
            GreetError::Git { message } => message.clone(),
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            GreetError::Http(_) => {
                "Check your network connection; the built-in list is used automatically".to_string()
            }
            GreetError::Io(_) => "Check that the path exists and is readable".to_string(),
            GreetError::ConfigParse(_) => "Fix the configuration file and retry".to_string(),
            GreetError::InvalidConfigValue { field, .. } => {
                format!("Correct the --{} flag and retry", field.replace('_', "-"))
            }
            GreetError::Git { .. } => {
                "Check `git status` and your remote configuration, then retry".to_string()
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, GreetError>;
