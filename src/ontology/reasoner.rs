//! Class membership inference over merged ontology graphs.
//!
//! The engine is deliberately small: RDFS-style subclass closure, nothing
//! more. It is a pure function of its inputs, performs no I/O, and expects
//! any imports the caller cares about to have been resolved already.

use std::collections::{BTreeSet, VecDeque};

use oxrdf::vocab::{rdf, rdfs};
use oxrdf::{Subject, Term};

use crate::graph::Graph;

use super::entities::Ontology;
use super::value_objects::Iri;

/// Computes every class the asserted types belong to.
///
/// Starting from `asserted`, follows `rdfs:subClassOf` edges in the ontology
/// graph until no new superclass is reachable. The result set doubles as the
/// visited set, so cyclic hierarchies terminate. An empty assertion set
/// yields an empty result.
#[must_use]
pub fn infer_classes(asserted: &BTreeSet<Iri>, ontology: &Ontology) -> BTreeSet<Iri> {
    let mut inferred = asserted.clone();
    let mut work_list: VecDeque<Iri> = asserted.iter().cloned().collect();

    while let Some(class) = work_list.pop_front() {
        let subject = Subject::from(class.to_named_node());
        for triple in ontology.graph().triples_matching(
            Some(subject.as_ref()),
            Some(rdfs::SUB_CLASS_OF),
            None,
        ) {
            if let Term::NamedNode(parent) = &triple.object {
                let parent = Iri::from(parent.clone());
                if inferred.insert(parent.clone()) {
                    work_list.push_back(parent);
                }
            }
        }
    }

    inferred
}

/// Extracts the classes directly asserted for `individual` in a description
/// graph via `rdf:type`.
#[must_use]
pub fn asserted_types(individual: &Iri, description: &Graph) -> BTreeSet<Iri> {
    let subject = Subject::from(individual.to_named_node());
    description
        .triples_matching(Some(subject.as_ref()), Some(rdf::TYPE), None)
        .filter_map(|triple| match &triple.object {
            Term::NamedNode(class) => Some(Iri::from(class.clone())),
            _ => None,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use crate::graph::Graph;
    use crate::tests_cfg::{triple, RDF_TYPE, SUBCLASS_OF};

    use super::{asserted_types, infer_classes};
    use crate::ontology::entities::Ontology;
    use crate::ontology::value_objects::Iri;

    fn iri(text: &str) -> Iri {
        Iri::new(text).expect("valid iri")
    }

    fn ontology_of(document: &str) -> Ontology {
        let graph = Graph::parse(document.as_bytes(), "application/n-triples").expect("parsed");
        Ontology::resolved(iri("http://example.org/ont"), graph)
    }

    #[test]
    fn closure_includes_every_reachable_superclass() {
        let ontology = ontology_of(
            &(triple("http://x/B", SUBCLASS_OF, "http://x/A")
                + &triple("http://x/C", SUBCLASS_OF, "http://x/A")
                + &triple("http://x/D", SUBCLASS_OF, "http://x/B")
                + &triple("http://x/E", SUBCLASS_OF, "http://x/D")),
        );

        let asserted = BTreeSet::from([iri("http://x/E")]);
        let inferred = infer_classes(&asserted, &ontology);

        let expected = BTreeSet::from([
            iri("http://x/E"),
            iri("http://x/D"),
            iri("http://x/B"),
            iri("http://x/A"),
        ]);
        assert_eq!(inferred, expected, "sibling class C must not appear");
    }

    #[test]
    fn cyclic_hierarchies_terminate() {
        let ontology = ontology_of(
            &(triple("http://x/A", SUBCLASS_OF, "http://x/B")
                + &triple("http://x/B", SUBCLASS_OF, "http://x/A")),
        );

        let asserted = BTreeSet::from([iri("http://x/A")]);
        let inferred = infer_classes(&asserted, &ontology);
        assert_eq!(inferred, BTreeSet::from([iri("http://x/A"), iri("http://x/B")]));
    }

    #[test]
    fn empty_assertions_yield_an_empty_closure() {
        let ontology = ontology_of(&triple("http://x/B", SUBCLASS_OF, "http://x/A"));
        assert!(infer_classes(&BTreeSet::new(), &ontology).is_empty());
    }

    #[test]
    fn asserted_types_reads_only_the_individual() {
        let description = Graph::parse(
            (triple("http://x/alice", RDF_TYPE, "http://x/B")
                + &triple("http://x/bob", RDF_TYPE, "http://x/C"))
                .as_bytes(),
            "application/n-triples",
        )
        .expect("parsed");

        let types = asserted_types(&iri("http://x/alice"), &description);
        assert_eq!(types, BTreeSet::from([iri("http://x/B")]));
    }
}
