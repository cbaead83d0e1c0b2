pub mod config;
pub mod core;
pub mod domain;
#[cfg(feature = "gui")]
pub mod gui;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;
pub use crate::config::Settings;

pub use crate::core::greeter::{greet, GreetEngine};
pub use crate::core::resolver::FallbackResolver;
pub use crate::domain::model::{NameList, ResolvedNames, SourceKind};
pub use crate::domain::ports::{ConfigProvider, Resolver};
pub use crate::utils::error::{GreetError, Result};
