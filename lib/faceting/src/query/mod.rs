mod object;

pub use object::{FacetObjectQuery, QUERY, QUERY_ALIAS, QUERY_HINT};

use crate::error::ConfigurationError;
use crate::params::SearchParams;
use std::sync::Arc;

/// Customization points a concrete facet-query kind supplies to the shared
/// query model.
///
/// Each kind carries its alias under a kind-specific request parameter; the
/// shared model resolves the alias through this capability while the query
/// is built. The set of kinds is closed (object queries today).
pub trait FacetQueryKind {
    /// The request-parameter key under which this kind's alias travels.
    fn alias_parameter_name() -> &'static str;

    /// Parameter names whose absence is a configuration error for this kind.
    fn required_parameter_names() -> &'static [&'static str] {
        &[]
    }
}

/// State shared by every facet query: the query string, the position within
/// an indexed sequence (0 meaning anonymous), the resolved alias and the two
/// parameter views scoped to the query.
///
/// Instances are immutable once built and live for a single request.
#[derive(Debug, Clone)]
pub struct FacetQuery {
    query: String,
    index: usize,
    alias: Option<String>,
    optionals: Arc<SearchParams>,
    requireds: Arc<SearchParams>,
}

impl FacetQuery {
    /// Validates and assembles the shared state of a `K`-kind query.
    ///
    /// Fails when the query string is blank or when a parameter `K` declares
    /// as required is absent. When no explicit `alias` is given, one is
    /// looked up under `K`'s alias parameter, the position-suffixed form
    /// taking precedence over the family-wide one.
    pub(crate) fn new<K: FacetQueryKind>(
        query: impl Into<String>,
        index: usize,
        alias: Option<String>,
        optionals: Arc<SearchParams>,
        requireds: Arc<SearchParams>,
    ) -> Result<Self, ConfigurationError> {
        let query = query.into();
        if query.trim().is_empty() {
            return Err(ConfigurationError::EmptyQuery);
        }

        for name in K::required_parameter_names() {
            requireds.require(name)?;
        }

        let alias = alias.or_else(|| {
            optionals
                .get_indexed(K::alias_parameter_name(), index)
                .map(ToOwned::to_owned)
        });

        Ok(Self {
            query,
            index,
            alias,
            optionals,
            requireds,
        })
    }

    /// The underlying query string. Never empty.
    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Position within the indexed sequence of sibling queries; 0 marks the
    /// anonymous query.
    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    /// Whether this is the single, unindexed query of its request.
    #[must_use]
    pub const fn is_anonymous(&self) -> bool {
        self.index == 0
    }

    /// Caller-facing display name for this query's results, when one was
    /// supplied or configured. Consumers fall back to their own default.
    #[must_use]
    pub fn alias(&self) -> Option<&str> {
        self.alias.as_deref()
    }

    /// Tuning parameters that default silently when absent.
    #[must_use]
    pub fn optionals(&self) -> &SearchParams {
        &self.optionals
    }

    /// Parameters whose absence is a configuration error.
    #[must_use]
    pub fn requireds(&self) -> &SearchParams {
        &self.requireds
    }
}
