use std::collections::{HashMap, HashSet};

use oxrdf::{NamedNodeRef, Subject, SubjectRef, TermRef, Triple};
use oxttl::{NTriplesParser, TurtleParser};
use thiserror::Error;

/// Media type of the registry's canonical triple notation.
pub const MEDIA_TYPE_N_TRIPLES: &str = "application/n-triples";

/// Media type of the Turtle serialization.
pub const MEDIA_TYPE_TURTLE: &str = "text/turtle";

/// An immutable set of RDF triples.
///
/// Graphs are pure values: every operation produces a new graph and never
/// mutates its inputs, so they are freely shareable across threads once
/// constructed. Duplicate triples collapse and insertion order carries no
/// meaning.
#[derive(Clone, Debug, Default)]
pub struct Graph {
    triples: HashSet<Triple>,
    by_subject: HashMap<Subject, Vec<Triple>>,
}

impl Graph {
    /// Creates an empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a serialized RDF document into a graph.
    ///
    /// Content type parameters (`; charset=...`) are ignored. Malformed input
    /// fails with [`GraphError::Parse`]; a serialization this store does not
    /// understand fails with [`GraphError::UnsupportedMediaType`].
    pub fn parse(bytes: &[u8], media_type: &str) -> Result<Self, GraphError> {
        let mut graph = Self::new();
        match base_media_type(media_type) {
            t if t == MEDIA_TYPE_N_TRIPLES => {
                for parsed in NTriplesParser::new().for_reader(bytes) {
                    graph.insert(parsed.map_err(|source| GraphError::Parse {
                        message: source.to_string(),
                    })?);
                }
            }
            t if t == MEDIA_TYPE_TURTLE => {
                for parsed in TurtleParser::new().for_reader(bytes) {
                    graph.insert(parsed.map_err(|source| GraphError::Parse {
                        message: source.to_string(),
                    })?);
                }
            }
            other => {
                return Err(GraphError::UnsupportedMediaType { media_type: other })
            }
        }
        Ok(graph)
    }

    /// Returns the union of this graph and `other` as a new graph.
    ///
    /// Neither input is modified or aliased by the result.
    #[must_use]
    pub fn merge(&self, other: &Self) -> Self {
        let mut merged = self.clone();
        for triple in &other.triples {
            merged.insert(triple.clone());
        }
        merged
    }

    /// Returns `true` when every triple of `subset` is present in this graph.
    #[must_use]
    pub fn contains_all(&self, subset: &Self) -> bool {
        subset
            .triples
            .iter()
            .all(|triple| self.triples.contains(triple))
    }

    /// Returns `true` when the graph holds the given triple.
    #[must_use]
    pub fn contains(&self, triple: &Triple) -> bool {
        self.triples.contains(triple)
    }

    /// Iterates over triples matching the supplied pattern.
    ///
    /// Any field may be left unbound as a wildcard. The iterator borrows the
    /// graph and can be restarted by calling the method again. A bound
    /// subject is answered from the subject index instead of a full scan.
    pub fn triples_matching<'a>(
        &'a self,
        subject: Option<SubjectRef<'a>>,
        predicate: Option<NamedNodeRef<'a>>,
        object: Option<TermRef<'a>>,
    ) -> impl Iterator<Item = &'a Triple> + 'a {
        let candidates: Box<dyn Iterator<Item = &'a Triple> + 'a> = match subject {
            Some(subject) => match self.by_subject.get(&subject.into_owned()) {
                Some(bucket) => Box::new(bucket.iter()),
                None => Box::new(std::iter::empty()),
            },
            None => Box::new(self.triples.iter()),
        };
        candidates.filter(move |triple| {
            predicate.map_or(true, |p| triple.predicate.as_ref() == p)
                && object.map_or(true, |o| triple.object.as_ref() == o)
        })
    }

    /// Iterates over every triple in the graph.
    pub fn iter(&self) -> impl Iterator<Item = &Triple> {
        self.triples.iter()
    }

    /// Returns the number of distinct triples.
    #[must_use]
    pub fn len(&self) -> usize {
        self.triples.len()
    }

    /// Returns `true` when the graph holds no triples.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.triples.is_empty()
    }

    fn insert(&mut self, triple: Triple) {
        if self.triples.insert(triple.clone()) {
            self.by_subject
                .entry(triple.subject.clone())
                .or_default()
                .push(triple);
        }
    }
}

impl PartialEq for Graph {
    fn eq(&self, other: &Self) -> bool {
        // The subject index is derived state; triple-set equality decides.
        self.triples == other.triples
    }
}

impl Eq for Graph {}

impl FromIterator<Triple> for Graph {
    fn from_iter<I: IntoIterator<Item = Triple>>(iter: I) -> Self {
        let mut graph = Self::new();
        for triple in iter {
            graph.insert(triple);
        }
        graph
    }
}

/// Strips content type parameters and normalises casing.
fn base_media_type(media_type: &str) -> String {
    media_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase()
}

/// Errors raised while constructing graphs from serialized documents.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum GraphError {
    /// The document was not valid RDF for its declared content type.
    #[error("malformed RDF document: {message}")]
    Parse { message: String },
    /// The declared content type names a serialization this store does not read.
    #[error("unsupported media type `{media_type}`")]
    UnsupportedMediaType { media_type: String },
}

#[cfg(test)]
mod tests {
    use oxrdf::{NamedNode, Subject, Term, Triple};
    use rstest::rstest;

    use super::{Graph, GraphError, MEDIA_TYPE_N_TRIPLES, MEDIA_TYPE_TURTLE};

    fn node(text: &str) -> NamedNode {
        NamedNode::new(text).expect("valid node")
    }

    fn triple(s: &str, p: &str, o: &str) -> Triple {
        Triple::new(node(s), node(p), node(o))
    }

    const NT_DOC: &str = "<http://example.org/b> <http://www.w3.org/2000/01/rdf-schema#subClassOf> <http://example.org/a> .\n";

    #[test]
    fn parses_n_triples() {
        let graph = Graph::parse(NT_DOC.as_bytes(), MEDIA_TYPE_N_TRIPLES).expect("parsed");
        assert_eq!(graph.len(), 1);
        assert!(graph.contains(&triple(
            "http://example.org/b",
            "http://www.w3.org/2000/01/rdf-schema#subClassOf",
            "http://example.org/a",
        )));
    }

    #[test]
    fn parses_turtle() {
        let doc = "@prefix ex: <http://example.org/> .\nex:b ex:knows ex:a .\n";
        let graph = Graph::parse(doc.as_bytes(), MEDIA_TYPE_TURTLE).expect("parsed");
        assert!(graph.contains(&triple(
            "http://example.org/b",
            "http://example.org/knows",
            "http://example.org/a",
        )));
    }

    #[rstest]
    #[case("application/n-triples; charset=utf-8")]
    #[case("APPLICATION/N-TRIPLES")]
    fn media_type_parameters_and_casing_are_ignored(#[case] media_type: &str) {
        assert!(Graph::parse(NT_DOC.as_bytes(), media_type).is_ok());
    }

    #[test]
    fn rejects_unknown_media_type() {
        let err = Graph::parse(NT_DOC.as_bytes(), "application/pdf").expect_err("unsupported");
        assert!(
            matches!(err, GraphError::UnsupportedMediaType { media_type } if media_type == "application/pdf")
        );
    }

    #[test]
    fn rejects_malformed_document() {
        let err =
            Graph::parse(b"<http://example.org/a> oops", MEDIA_TYPE_N_TRIPLES).expect_err("parse");
        assert!(matches!(err, GraphError::Parse { .. }));
    }

    #[test]
    fn merge_is_a_superset_of_both_inputs() {
        let a: Graph = [triple("http://x/s1", "http://x/p", "http://x/o1")]
            .into_iter()
            .collect();
        let b: Graph = [
            triple("http://x/s1", "http://x/p", "http://x/o1"),
            triple("http://x/s2", "http://x/p", "http://x/o2"),
        ]
        .into_iter()
        .collect();

        let merged = a.merge(&b);
        assert!(merged.contains_all(&a));
        assert!(merged.contains_all(&b));
        assert_eq!(merged.len(), 2, "duplicates collapse");
    }

    #[test]
    fn merge_leaves_inputs_untouched() {
        let a: Graph = [triple("http://x/s1", "http://x/p", "http://x/o1")]
            .into_iter()
            .collect();
        let b: Graph = [triple("http://x/s2", "http://x/p", "http://x/o2")]
            .into_iter()
            .collect();

        let _ = a.merge(&b);
        assert_eq!(a.len(), 1);
        assert_eq!(b.len(), 1);
        assert!(!a.contains_all(&b));
    }

    #[test]
    fn pattern_matching_honours_bound_fields() {
        let graph: Graph = [
            triple("http://x/s1", "http://x/p1", "http://x/o1"),
            triple("http://x/s1", "http://x/p2", "http://x/o2"),
            triple("http://x/s2", "http://x/p1", "http://x/o1"),
        ]
        .into_iter()
        .collect();

        let subject = Subject::from(node("http://x/s1"));
        let by_subject: Vec<_> = graph
            .triples_matching(Some(subject.as_ref()), None, None)
            .collect();
        assert_eq!(by_subject.len(), 2);

        let p1 = node("http://x/p1");
        let by_predicate: Vec<_> = graph
            .triples_matching(None, Some(p1.as_ref()), None)
            .collect();
        assert_eq!(by_predicate.len(), 2);

        let o1 = Term::from(node("http://x/o1"));
        let bound_all: Vec<_> = graph
            .triples_matching(Some(subject.as_ref()), Some(p1.as_ref()), Some(o1.as_ref()))
            .collect();
        assert_eq!(bound_all.len(), 1);

        let absent = Subject::from(node("http://x/s3"));
        assert_eq!(
            graph
                .triples_matching(Some(absent.as_ref()), None, None)
                .count(),
            0
        );
    }

    #[test]
    fn wildcard_query_is_restartable() {
        let graph: Graph = [triple("http://x/s", "http://x/p", "http://x/o")]
            .into_iter()
            .collect();
        assert_eq!(graph.triples_matching(None, None, None).count(), 1);
        assert_eq!(graph.triples_matching(None, None, None).count(), 1);
    }
}
