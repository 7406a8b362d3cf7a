//! Decoding of facet object queries from the flat parameter namespace of a
//! search request.
//!
//! A facet object query buckets search results by the value of an RDF
//! triple's object. The object's storage field is chosen by a type hint
//! carried in the request (see [`rdf_facet_model::ObjectField`]). A request
//! holds either one anonymous query or a numbered sequence of sibling
//! queries, addressed through position-suffixed parameter keys.

mod decode;
mod error;
mod params;
mod query;

pub use decode::decode_object_queries;
pub use error::ConfigurationError;
pub use params::SearchParams;
pub use query::{FacetObjectQuery, FacetQuery, FacetQueryKind, QUERY, QUERY_ALIAS, QUERY_HINT};
