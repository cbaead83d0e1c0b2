use crate::core::Resolver;

/// Formats a greeting for `name`, or for the world when `name` is absent.
pub fn greet(name: Option<&str>) -> String {
    match name {
        Some(name) => format!("Hello, {}!", name),
        None => "Hello, World!".to_string(),
    }
}

pub struct GreetEngine<R: Resolver> {
    resolver: R,
}

impl<R: Resolver> GreetEngine<R> {
    pub fn new(resolver: R) -> Self {
        Self { resolver }
    }

    /// Resolves the name list and greets one member chosen uniformly at
    /// random. Never fails: the resolver falls back to the built-in list.
    pub async fn greet_random(&self) -> String {
        let resolved = self.resolver.resolve().await;
        tracing::info!(
            source = ?resolved.source,
            count = resolved.names.len(),
            "Resolved greeting names"
        );
        greet(Some(resolved.names.pick()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{NameList, ResolvedNames, SourceKind};
    use async_trait::async_trait;

    struct FixedResolver(ResolvedNames);

    #[async_trait]
    impl Resolver for FixedResolver {
        async fn resolve(&self) -> ResolvedNames {
            self.0.clone()
        }
    }

    #[test]
    fn test_greet_world() {
        assert_eq!(greet(None), "Hello, World!");
    }

    #[test]
    fn test_greet_name() {
        assert_eq!(greet(Some("Alice")), "Hello, Alice!");
    }

    #[tokio::test]
    async fn test_greet_random_mentions_resolved_name() {
        let names = NameList::parse("Ada Lovelace\nAlan Turing").unwrap();
        let engine = GreetEngine::new(FixedResolver(ResolvedNames {
            source: SourceKind::Local,
            names: names.clone(),
        }));

        let message = engine.greet_random().await;
        assert!(names
            .names()
            .iter()
            .any(|name| message == format!("Hello, {}!", name)));
    }
}
