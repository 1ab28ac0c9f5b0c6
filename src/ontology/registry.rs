use std::sync::Arc;

use async_trait::async_trait;
use bytes::Bytes;
use thiserror::Error;

use super::value_objects::Iri;

/// Raw representation handed over by a registry: the serialized document plus
/// its declared content type.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RegistryResource {
    /// URI the representation was retrieved under.
    pub uri: Iri,
    /// Declared content type of the payload.
    pub media_type: String,
    /// Serialized document bytes.
    pub bytes: Bytes,
}

impl RegistryResource {
    /// Bundles a representation with its declared content type.
    #[must_use]
    pub fn new(uri: Iri, media_type: impl Into<String>, bytes: impl Into<Bytes>) -> Self {
        Self {
            uri,
            media_type: media_type.into(),
            bytes: bytes.into(),
        }
    }
}

/// Contract describing the read side of the external resource registry.
///
/// The registry is this subsystem's only collaborator performing I/O; it is
/// always supplied by the caller (constructor injection), never resolved from
/// ambient state. Retry policy, if any, lives behind this trait.
#[async_trait]
pub trait ResourceRegistry: Send + Sync {
    /// Retrieves the representation stored under `uri`.
    ///
    /// Implementors must fail with [`RegistryError::NotFound`] when the URI
    /// has no representation, and with [`RegistryError::Transport`] when
    /// retrieval itself failed (timeouts included). Partial payloads are
    /// never returned.
    async fn get(&self, uri: &Iri) -> Result<RegistryResource, RegistryError>;

    /// Returns `true` when the registry holds a representation for `uri`.
    async fn contains(&self, uri: &Iri) -> bool;
}

/// Errors raised by registry implementations.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    /// No representation is stored under the requested URI.
    #[error("resource `{uri}` missing from registry")]
    NotFound { uri: Iri },
    /// Retrieval failed before a complete representation was produced.
    #[error("registry transport failure for `{uri}`: {message}")]
    Transport { uri: Iri, message: String },
}

/// Registry decorator consulting an ordered list of delegates.
///
/// `get` answers from the first delegate holding the URI; [`RegistryError::NotFound`]
/// is returned only when every delegate misses. Transport failures are not
/// masked by falling through to later delegates.
pub struct FallbackRegistry {
    delegates: Vec<Arc<dyn ResourceRegistry>>,
}

impl FallbackRegistry {
    /// Composes the supplied registries in lookup order.
    #[must_use]
    pub fn new(delegates: Vec<Arc<dyn ResourceRegistry>>) -> Self {
        Self { delegates }
    }
}

#[async_trait]
impl ResourceRegistry for FallbackRegistry {
    async fn get(&self, uri: &Iri) -> Result<RegistryResource, RegistryError> {
        for delegate in &self.delegates {
            match delegate.get(uri).await {
                Err(RegistryError::NotFound { .. }) => continue,
                other => return other,
            }
        }
        Err(RegistryError::NotFound { uri: uri.clone() })
    }

    async fn contains(&self, uri: &Iri) -> bool {
        for delegate in &self.delegates {
            if delegate.contains(uri).await {
                return true;
            }
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use crate::tests_cfg::StaticRegistry;

    use super::{FallbackRegistry, RegistryError, ResourceRegistry};
    use crate::ontology::value_objects::Iri;

    fn iri(text: &str) -> Iri {
        Iri::new(text).expect("valid iri")
    }

    #[tokio::test]
    async fn fallback_answers_from_first_holder() {
        let first = StaticRegistry::default();
        first.put_n_triples(&iri("http://example.org/a"), "<http://x/s> <http://x/p> <http://x/o> .\n");
        let second = StaticRegistry::default();
        second.put_n_triples(&iri("http://example.org/a"), "<http://x/s2> <http://x/p> <http://x/o> .\n");
        second.put_n_triples(&iri("http://example.org/b"), "<http://x/s3> <http://x/p> <http://x/o> .\n");

        let composed = FallbackRegistry::new(vec![Arc::new(first), Arc::new(second)]);

        let resource = composed.get(&iri("http://example.org/a")).await.expect("hit");
        assert!(String::from_utf8_lossy(&resource.bytes).contains("http://x/s>"));
        assert!(composed.contains(&iri("http://example.org/b")).await);
    }

    #[tokio::test]
    async fn fallback_misses_only_when_all_delegates_miss() {
        let composed = FallbackRegistry::new(vec![
            Arc::new(StaticRegistry::default()),
            Arc::new(StaticRegistry::default()),
        ]);

        let err = composed
            .get(&iri("http://example.org/none"))
            .await
            .expect_err("miss");
        assert!(matches!(err, RegistryError::NotFound { .. }));
        assert!(!composed.contains(&iri("http://example.org/none")).await);
    }
}
