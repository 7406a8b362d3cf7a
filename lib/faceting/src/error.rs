use thiserror::Error;

/// A malformed facet request, detected while a facet query is built.
///
/// Raised only at construction time, so that no partially valid query ever
/// reaches the facet computation stage. Upstream handlers surface it as a
/// client-side bad-request condition.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigurationError {
    /// The facet query string is missing or blank.
    #[error("facet query string must not be empty")]
    EmptyQuery,
    /// A parameter the query kind declares as mandatory is absent.
    #[error("missing required parameter: {name}")]
    MissingParameter {
        /// Name of the absent parameter.
        name: String,
    },
}
