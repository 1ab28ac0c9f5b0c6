//! In-memory RDF graph values.
//!
//! The module owns the [`Graph`] value type shared by every component above
//! it: an immutable set of triples with wildcard pattern queries, a pure
//! merge operation and parsing from the registry's serialization formats.
//! Term representation is delegated to `oxrdf` so equality and hashing stay
//! structural; graph semantics live here.

pub mod store;
pub mod vocab;

pub use store::{Graph, GraphError, MEDIA_TYPE_N_TRIPLES, MEDIA_TYPE_TURTLE};
