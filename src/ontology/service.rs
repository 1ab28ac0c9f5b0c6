use std::collections::BTreeSet;
use std::sync::Arc;

use thiserror::Error;
use tracing::debug;

use crate::config::OntologySettings;
use crate::graph::{Graph, GraphError};

use super::cache::OntologyCache;
use super::entities::Ontology;
use super::loader::DocumentLoader;
use super::reasoner;
use super::registry::{RegistryError, RegistryResource, ResourceRegistry};
use super::resolver::ImportResolver;
use super::value_objects::Iri;

/// High level facade composing document loading, import resolution, caching
/// and class inference.
///
/// The service owns no I/O of its own: the registry collaborator is injected
/// at construction and everything mutable is confined to the cache, so a
/// single instance is safe to share across request handlers.
#[derive(Clone)]
pub struct OntologyService {
    cache: OntologyCache,
}

impl OntologyService {
    /// Creates a service reading from the supplied registry.
    #[must_use]
    pub fn new(registry: Arc<dyn ResourceRegistry>, settings: &OntologySettings) -> Self {
        let loader = DocumentLoader::new(registry);
        let resolver = Arc::new(ImportResolver::new(loader, settings.import_budget));
        Self {
            cache: OntologyCache::new(resolver, &settings.cache),
        }
    }

    /// Parses a raw ontology representation without following its imports.
    ///
    /// Used when the caller already holds the document rather than just its
    /// URI; the result is tagged with the resource URI and left unresolved.
    pub fn load_ontology(
        &self,
        resource: &RegistryResource,
    ) -> Result<Ontology, OntologyServiceError> {
        let graph = Graph::parse(&resource.bytes, &resource.media_type).map_err(|source| {
            OntologyServiceError::Parse {
                uri: resource.uri.clone(),
                source,
            }
        })?;
        Ok(Ontology::unresolved(resource.uri.clone(), graph))
    }

    /// Returns the resolved ontology rooted at `uri`, from cache when warm.
    pub async fn get_ontology(&self, uri: &Iri) -> Result<Arc<Ontology>, OntologyServiceError> {
        self.cache.get_or_resolve(uri).await
    }

    /// Drops the cached resolution for `uri`, forcing the next lookup to
    /// resolve afresh.
    pub async fn invalidate(&self, uri: &Iri) {
        self.cache.invalidate(uri).await;
    }

    /// Returns the union of two ontologies.
    ///
    /// The result carries no root URI; callers needing provenance should
    /// merge before caching.
    #[must_use]
    pub fn merge(&self, first: &Ontology, second: &Ontology) -> Ontology {
        Ontology::merged(first.graph().merge(second.graph()))
    }

    /// Infers every class `individual` belongs to.
    ///
    /// The description resource supplies the individual's directly asserted
    /// `rdf:type` statements; the ontology supplies the subclass hierarchy
    /// to close over. An individual without assertions infers nothing.
    pub fn infer_classes(
        &self,
        individual: &Iri,
        resource: &RegistryResource,
        ontology: &Ontology,
    ) -> Result<BTreeSet<Iri>, OntologyServiceError> {
        if resource.media_type.trim().is_empty() {
            return Err(OntologyServiceError::invalid_argument(
                "individual description declares no media type",
            ));
        }
        let description = Graph::parse(&resource.bytes, &resource.media_type).map_err(
            |source| OntologyServiceError::Parse {
                uri: resource.uri.clone(),
                source,
            },
        )?;

        let asserted = reasoner::asserted_types(individual, &description);
        let inferred = reasoner::infer_classes(&asserted, ontology);
        debug!(
            individual = %individual,
            asserted = asserted.len(),
            inferred = inferred.len(),
            "classes_inferred"
        );
        Ok(inferred)
    }
}

/// Errors raised by the ontology subsystem.
///
/// Every variant is surfaced to the caller unmodified; the subsystem performs
/// no local recovery, and a failed resolution never yields a partial
/// ontology. The enum is `Clone` so an in-flight resolution failure can be
/// handed to every caller awaiting it.
#[derive(Clone, Debug, Error)]
pub enum OntologyServiceError {
    /// A requested or transitively imported URI has no representation.
    #[error("resource `{uri}` missing from registry")]
    NotFound { uri: Iri },
    /// The registry failed before producing a complete representation.
    #[error("registry transport failure for `{uri}`: {message}")]
    Transport { uri: Iri, message: String },
    /// A retrieved representation was not valid RDF for its content type.
    #[error("failed to parse `{uri}`: {source}")]
    Parse { uri: Iri, source: GraphError },
    /// The caller supplied a malformed individual description.
    #[error("invalid argument: {reason}")]
    InvalidArgument { reason: String },
    /// Import resolution visited more distinct documents than allowed.
    #[error("import closure of `{root}` exceeded the budget of {budget} documents")]
    CycleBudgetExceeded { root: Iri, budget: usize },
}

impl OntologyServiceError {
    fn invalid_argument(reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            reason: reason.into(),
        }
    }
}

impl From<RegistryError> for OntologyServiceError {
    fn from(err: RegistryError) -> Self {
        match err {
            RegistryError::NotFound { uri } => Self::NotFound { uri },
            RegistryError::Transport { uri, message } => Self::Transport { uri, message },
        }
    }
}
