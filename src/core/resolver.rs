use crate::core::{ConfigProvider, NameList, ResolvedNames, Resolver, SourceKind};
use async_trait::async_trait;
use reqwest::Client;

/// Resolves the greeting name list by trying, in order: the configured
/// local file, the configured remote URL, and the built-in fallback list.
///
/// Step failures are logged and swallowed; the chain as a whole cannot
/// fail because the built-in list is a compile-time constant.
pub struct FallbackResolver<C: ConfigProvider> {
    config: C,
    client: Client,
}

impl<C: ConfigProvider> FallbackResolver<C> {
    pub fn new(config: C) -> Self {
        Self {
            config,
            client: Client::new(),
        }
    }

    async fn load_local(&self) -> Option<NameList> {
        let path = self.config.figures_file()?;

        let text = match tokio::fs::read_to_string(path).await {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!("Figures file {} not found", path.display());
                return None;
            }
            Err(e) => {
                tracing::warn!("Failed to read {}: {}", path.display(), e);
                return None;
            }
        };

        match NameList::parse(&text) {
            Some(names) => {
                tracing::info!(
                    "Loaded {} historical figures from {}",
                    names.len(),
                    path.display()
                );
                Some(names)
            }
            None => {
                tracing::warn!("Figures file {} contains no names", path.display());
                None
            }
        }
    }

    /// Single attempt, bounded by the configured timeout. All failure modes
    /// (connection, timeout, status, empty body) fall through uniformly.
    async fn fetch_remote(&self) -> Option<NameList> {
        let url = self.config.remote_url();
        tracing::debug!("Fetching historical figures from: {}", url);

        let response = match self
            .client
            .get(url)
            .timeout(self.config.fetch_timeout())
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!("Unable to fetch remote historical figures: {}", e);
                return None;
            }
        };

        tracing::debug!("Remote response status: {}", response.status());
        if !response.status().is_success() {
            tracing::warn!(
                "Remote figures fetch returned status {}",
                response.status()
            );
            return None;
        }

        let body = match response.text().await {
            Ok(body) => body,
            Err(e) => {
                tracing::warn!("Failed to read remote response body: {}", e);
                return None;
            }
        };

        match NameList::parse(&body) {
            Some(names) => {
                tracing::info!("Fetched {} historical figures from remote source", names.len());
                Some(names)
            }
            None => {
                tracing::warn!("Remote response contains no names");
                None
            }
        }
    }
}

#[async_trait]
impl<C: ConfigProvider> Resolver for FallbackResolver<C> {
    async fn resolve(&self) -> ResolvedNames {
        if let Some(names) = self.load_local().await {
            return ResolvedNames {
                source: SourceKind::Local,
                names,
            };
        }

        if let Some(names) = self.fetch_remote().await {
            return ResolvedNames {
                source: SourceKind::Remote,
                names,
            };
        }

        tracing::info!("Using default historical figures list");
        ResolvedNames {
            source: SourceKind::BuiltIn,
            names: NameList::builtin(),
        }
    }
}
