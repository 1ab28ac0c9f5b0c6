use std::sync::Arc;

use moka::future::Cache;
use tracing::debug;

use crate::config::CacheSettings;

use super::entities::Ontology;
use super::resolver::ImportResolver;
use super::service::OntologyServiceError;
use super::value_objects::Iri;

/// Memoizes resolved ontologies by their root URI.
///
/// Resolution for a given key runs at most once between an invalidation and
/// the next successful lookup: concurrent callers of an uncached URI share a
/// single in-flight resolution instead of triggering duplicate fetch-and-merge
/// work. Failed resolutions populate nothing, so retrying after an error is
/// always safe.
#[derive(Clone)]
pub struct OntologyCache {
    entries: Cache<Iri, Arc<Ontology>>,
    resolver: Arc<ImportResolver>,
}

impl OntologyCache {
    /// Creates a cache running resolutions through `resolver`.
    #[must_use]
    pub fn new(resolver: Arc<ImportResolver>, settings: &CacheSettings) -> Self {
        Self {
            entries: Cache::new(settings.capacity),
            resolver,
        }
    }

    /// Returns the cached ontology for `uri`, resolving it first if absent.
    pub async fn get_or_resolve(&self, uri: &Iri) -> Result<Arc<Ontology>, OntologyServiceError> {
        let resolver = Arc::clone(&self.resolver);
        let root = uri.clone();
        self.entries
            .try_get_with(uri.clone(), async move {
                debug!(root = %root, "ontology_resolution_started");
                resolver.resolve(&root).await.map(Arc::new)
            })
            .await
            .map_err(|err: Arc<OntologyServiceError>| (*err).clone())
    }

    /// Removes the entry stored under `uri`, if any.
    pub async fn invalidate(&self, uri: &Iri) {
        self.entries.invalidate(uri).await;
    }

    /// Returns `true` when a resolved ontology is cached under `uri`.
    #[must_use]
    pub fn contains(&self, uri: &Iri) -> bool {
        self.entries.contains_key(uri)
    }
}
