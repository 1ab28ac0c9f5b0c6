//! Ontology resolution and class inference for linked-data extension
//! middleware.
//!
//! Linked-data repositories can be augmented with extension services that are
//! discovered and bound to resources through RDF metadata. This crate
//! implements the part of that picture with real algorithmic content: given
//! the URI of an ontology document, retrieve it and everything it
//! transitively imports, merge the documents into one graph, and use the
//! merged graph to infer the complete set of classes an arbitrary resource
//! belongs to.
//!
//! The entry point is [`ontology::OntologyService`], constructed over a
//! caller-supplied [`ontology::ResourceRegistry`]:
//!
//! - `get_ontology` resolves a root URI to its merged import closure, served
//!   from a per-URI cache with single-flight resolution;
//! - `load_ontology` parses a document the caller already holds;
//! - `merge` unions two ontologies into a new value;
//! - `infer_classes` closes an individual's asserted types over
//!   `rdfs:subClassOf`.
//!
//! Graphs and ontologies are immutable values; the cache is the only shared
//! mutable state, so the whole service is safe to share across request
//! handlers. Everything outside the registry boundary is pure in-memory
//! computation.

pub mod config;
pub mod graph;
pub mod ontology;
pub mod tests_cfg;

pub use config::{CacheSettings, OntologySettings};
pub use graph::{Graph, GraphError};
pub use ontology::{
    DocumentLoader, FallbackRegistry, ImportResolver, Iri, IriError, Ontology, OntologyCache,
    OntologyService, OntologyServiceError, RegistryError, RegistryResource, ResourceRegistry,
};
