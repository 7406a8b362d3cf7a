mod fields;

pub use fields::*;

// Re-export the oxrdf types that appear in this crate's API.
pub use oxrdf::{NamedNode, NamedNodeRef};
