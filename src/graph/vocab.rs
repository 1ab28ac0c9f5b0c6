//! Vocabulary terms with behavioral meaning for this crate.
//!
//! `rdf:type` and `rdfs:subClassOf` come from [`oxrdf::vocab`]; only the OWL
//! terms are declared here, in the same constant form.

pub mod owl {
    //! [OWL 2](https://www.w3.org/TR/owl2-overview/) vocabulary.

    use oxrdf::NamedNodeRef;

    /// Declares that an ontology incorporates the triples of another.
    pub const IMPORTS: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2002/07/owl#imports");

    /// The class of OWL ontologies.
    pub const ONTOLOGY: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2002/07/owl#Ontology");
}
