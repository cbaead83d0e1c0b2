use crate::domain::model::ResolvedNames;
use async_trait::async_trait;
use std::path::Path;
use std::time::Duration;

pub trait ConfigProvider: Send + Sync {
    fn figures_file(&self) -> Option<&Path>;
    fn remote_url(&self) -> &str;
    fn fetch_timeout(&self) -> Duration;
}

/// Resolves one winning name source per invocation. Infallible: the
/// built-in fallback list always satisfies the request.
#[async_trait]
pub trait Resolver: Send + Sync {
    async fn resolve(&self) -> ResolvedNames;
}
