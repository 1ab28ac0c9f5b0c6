//! Reusable test fixtures.
//!
//! Shared by the crate's unit tests and the integration suite under
//! `tests/`: an in-memory registry that counts lookups, N-Triples builders,
//! and the five-document ontology corpus the cross-module tests traverse.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use bytes::Bytes;

use crate::graph::MEDIA_TYPE_N_TRIPLES;
use crate::ontology::registry::{RegistryError, RegistryResource, ResourceRegistry};
use crate::ontology::value_objects::Iri;

/// `rdf:type`.
pub const RDF_TYPE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#type";
/// `rdfs:subClassOf`.
pub const SUBCLASS_OF: &str = "http://www.w3.org/2000/01/rdf-schema#subClassOf";
/// `owl:imports`.
pub const OWL_IMPORTS: &str = "http://www.w3.org/2002/07/owl#imports";
/// `owl:Ontology`.
pub const OWL_ONTOLOGY: &str = "http://www.w3.org/2002/07/owl#Ontology";

/// Renders one N-Triples statement with IRI terms.
#[must_use]
pub fn triple(subject: &str, predicate: &str, object: &str) -> String {
    format!("<{subject}> <{predicate}> <{object}> .\n")
}

/// In-memory registry serving fixed representations and counting lookups.
#[derive(Default)]
pub struct StaticRegistry {
    resources: Mutex<BTreeMap<Iri, RegistryResource>>,
    hits: AtomicUsize,
}

impl StaticRegistry {
    /// Stores a representation under its URI.
    pub fn put(&self, resource: RegistryResource) {
        self.guard().insert(resource.uri.clone(), resource);
    }

    /// Stores an N-Triples document under `uri`.
    pub fn put_n_triples(&self, uri: &Iri, document: &str) {
        self.put(RegistryResource::new(
            uri.clone(),
            MEDIA_TYPE_N_TRIPLES,
            Bytes::from(document.to_owned()),
        ));
    }

    /// Removes the representation stored under `uri`.
    pub fn remove(&self, uri: &Iri) {
        self.guard().remove(uri);
    }

    /// Returns how many `get` calls the registry has served.
    #[must_use]
    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }

    fn guard(&self) -> std::sync::MutexGuard<'_, BTreeMap<Iri, RegistryResource>> {
        self.resources.lock().expect("static registry poisoned")
    }
}

#[async_trait]
impl ResourceRegistry for StaticRegistry {
    async fn get(&self, uri: &Iri) -> Result<RegistryResource, RegistryError> {
        self.hits.fetch_add(1, Ordering::SeqCst);
        self.guard()
            .get(uri)
            .cloned()
            .ok_or_else(|| RegistryError::NotFound { uri: uri.clone() })
    }

    async fn contains(&self, uri: &Iri) -> bool {
        self.guard().contains_key(uri)
    }
}

/// URIs and classes of the shared ontology corpus.
pub mod corpus {
    /// Standalone ontology declaring `B ⊑ A`.
    pub const ONT1: &str = "http://example.org/ont1";
    /// Standalone ontology declaring `C ⊑ A`.
    pub const ONT2: &str = "http://example.org/ont2";
    /// Imports [`ONT1`] and [`ONT2`].
    pub const ONT3: &str = "http://example.org/ont3";
    /// Imports [`ONT1`] and declares `D ⊑ B`.
    pub const ONT4: &str = "http://example.org/ont4";
    /// Imports [`ONT4`] and declares `E ⊑ D`.
    pub const ONT5: &str = "http://example.org/ont5";

    pub const CLASS_A: &str = "http://example.org/classes#A";
    pub const CLASS_B: &str = "http://example.org/classes#B";
    pub const CLASS_C: &str = "http://example.org/classes#C";
    pub const CLASS_D: &str = "http://example.org/classes#D";
    pub const CLASS_E: &str = "http://example.org/classes#E";
}

/// Seeds `registry` with the five-document corpus described in [`corpus`].
pub fn seed_ontology_corpus(registry: &StaticRegistry) {
    use corpus::{CLASS_A, CLASS_B, CLASS_C, CLASS_D, CLASS_E, ONT1, ONT2, ONT3, ONT4, ONT5};

    let iri = |text: &str| Iri::new(text).expect("corpus iri");

    registry.put_n_triples(
        &iri(ONT1),
        &(triple(ONT1, RDF_TYPE, OWL_ONTOLOGY) + &triple(CLASS_B, SUBCLASS_OF, CLASS_A)),
    );
    registry.put_n_triples(
        &iri(ONT2),
        &(triple(ONT2, RDF_TYPE, OWL_ONTOLOGY) + &triple(CLASS_C, SUBCLASS_OF, CLASS_A)),
    );
    registry.put_n_triples(
        &iri(ONT3),
        &(triple(ONT3, RDF_TYPE, OWL_ONTOLOGY)
            + &triple(ONT3, OWL_IMPORTS, ONT1)
            + &triple(ONT3, OWL_IMPORTS, ONT2)),
    );
    registry.put_n_triples(
        &iri(ONT4),
        &(triple(ONT4, RDF_TYPE, OWL_ONTOLOGY)
            + &triple(ONT4, OWL_IMPORTS, ONT1)
            + &triple(CLASS_D, SUBCLASS_OF, CLASS_B)),
    );
    registry.put_n_triples(
        &iri(ONT5),
        &(triple(ONT5, RDF_TYPE, OWL_ONTOLOGY)
            + &triple(ONT5, OWL_IMPORTS, ONT4)
            + &triple(CLASS_E, SUBCLASS_OF, CLASS_D)),
    );
}
