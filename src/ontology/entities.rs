use crate::graph::Graph;

use super::value_objects::Iri;

/// A named RDF graph describing classes and their relationships.
///
/// Ontologies are frozen at construction: the triple set never changes for
/// the lifetime of the value, which makes them safe to share across request
/// handlers without locking. A resolved ontology additionally carries the
/// triples of every document reachable through import declarations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Ontology {
    root: Option<Iri>,
    graph: Graph,
    resolved: bool,
}

impl Ontology {
    /// Wraps a directly parsed document whose imports have not been followed.
    #[must_use]
    pub fn unresolved(root: Iri, graph: Graph) -> Self {
        Self {
            root: Some(root),
            graph,
            resolved: false,
        }
    }

    /// Wraps the merged import closure rooted at `root`.
    #[must_use]
    pub fn resolved(root: Iri, graph: Graph) -> Self {
        Self {
            root: Some(root),
            graph,
            resolved: true,
        }
    }

    /// Wraps the union of two ontologies merged outside of resolution.
    ///
    /// Merged ontologies carry no root: provenance belongs to the inputs, so
    /// callers needing a cacheable identity should merge before caching.
    #[must_use]
    pub fn merged(graph: Graph) -> Self {
        Self {
            root: None,
            graph,
            resolved: false,
        }
    }

    /// Returns the URI this ontology was requested under, when it has one.
    #[must_use]
    pub fn root(&self) -> Option<&Iri> {
        self.root.as_ref()
    }

    /// Returns the triples of the ontology.
    #[must_use]
    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    /// Returns `true` when the import closure has been merged in.
    #[must_use]
    pub fn is_resolved(&self) -> bool {
        self.resolved
    }
}
