pub mod git;
pub mod greeter;
pub mod resolver;

pub use crate::domain::model::{NameList, ResolvedNames, SourceKind};
pub use crate::domain::ports::{ConfigProvider, Resolver};
pub use crate::utils::error::Result;
