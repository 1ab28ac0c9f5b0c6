//! Ontology retrieval, import resolution, caching and class inference.
//!
//! The module composes a small pipeline over the graph layer: the
//! [`loader::DocumentLoader`] fetches and parses single documents from the
//! injected registry, the [`resolver::ImportResolver`] walks `owl:imports`
//! declarations to a merged closure, the [`cache::OntologyCache`] memoizes
//! resolved closures per root URI, and [`reasoner`] computes subclass
//! closures over the merged graph. [`service::OntologyService`] is the public
//! face tying them together.

pub mod cache;
pub mod entities;
pub mod loader;
pub mod reasoner;
pub mod registry;
pub mod resolver;
pub mod service;
pub mod value_objects;

pub use cache::OntologyCache;
pub use entities::Ontology;
pub use loader::DocumentLoader;
pub use registry::{FallbackRegistry, RegistryError, RegistryResource, ResourceRegistry};
pub use resolver::ImportResolver;
pub use service::{OntologyService, OntologyServiceError};
pub use value_objects::{Iri, IriError};
