use std::sync::Arc;

use tracing::debug;

use crate::graph::Graph;

use super::registry::ResourceRegistry;
use super::service::OntologyServiceError;
use super::value_objects::Iri;

/// Retrieves ontology documents from the registry and parses them into graphs.
///
/// The loader performs no retries and returns no partial graphs: a registry
/// miss or a malformed representation surfaces as-is to the caller.
#[derive(Clone)]
pub struct DocumentLoader {
    registry: Arc<dyn ResourceRegistry>,
}

impl DocumentLoader {
    /// Creates a loader reading from the supplied registry.
    #[must_use]
    pub fn new(registry: Arc<dyn ResourceRegistry>) -> Self {
        Self { registry }
    }

    /// Fetches the document stored under `uri` and parses it.
    pub async fn load(&self, uri: &Iri) -> Result<Graph, OntologyServiceError> {
        let resource = self.registry.get(uri).await?;
        debug!(
            uri = %uri,
            media_type = %resource.media_type,
            bytes = resource.bytes.len(),
            "ontology_document_fetched"
        );
        Graph::parse(&resource.bytes, &resource.media_type).map_err(|source| {
            OntologyServiceError::Parse {
                uri: uri.clone(),
                source,
            }
        })
    }

    /// Returns a clone of the registry handle.
    #[must_use]
    pub fn registry(&self) -> Arc<dyn ResourceRegistry> {
        Arc::clone(&self.registry)
    }
}
