use crate::error::ConfigurationError;
use crate::params::SearchParams;
use crate::query::{FacetQuery, FacetQueryKind};
use rdf_facet_model::ObjectField;
use std::num::NonZeroUsize;
use std::sync::{Arc, OnceLock};

/// The query string of the anonymous object query, or the family-wide
/// default when queries are indexed.
pub const QUERY: &str = "facet.obj.q";
/// The type hint selecting the object field a query targets.
pub const QUERY_HINT: &str = "facet.obj.q.hint";
/// The caller-facing display name for a query's results.
pub const QUERY_ALIAS: &str = "facet.obj.q.alias";

/// A facet query over the value of an RDF triple's object.
///
/// The object's storage field is chosen by the `facet.obj.q.hint` request
/// parameter (`date`, `num`, `bool`, anything else meaning text) and cached
/// after the first lookup.
///
/// Instances are built through [`Self::new_anonymous_query`] or
/// [`Self::new_query`] only, so every query is either anonymous (position 0,
/// caller-supplied alias) or indexed (position > 0, alias resolved from
/// request parameters).
#[derive(Debug)]
pub struct FacetObjectQuery {
    base: FacetQuery,
    field: OnceLock<ObjectField>,
}

impl FacetQueryKind for FacetObjectQuery {
    fn alias_parameter_name() -> &'static str {
        QUERY_ALIAS
    }
}

impl FacetObjectQuery {
    fn new(
        query: impl Into<String>,
        index: usize,
        alias: Option<String>,
        optionals: Arc<SearchParams>,
        requireds: Arc<SearchParams>,
    ) -> Result<Self, ConfigurationError> {
        Ok(Self {
            base: FacetQuery::new::<Self>(query, index, alias, optionals, requireds)?,
            field: OnceLock::new(),
        })
    }

    /// Builds the single, unindexed object query of a request.
    pub fn new_anonymous_query(
        query: impl Into<String>,
        alias: Option<String>,
        optionals: Arc<SearchParams>,
        requireds: Arc<SearchParams>,
    ) -> Result<Self, ConfigurationError> {
        Self::new(query, 0, alias, optionals, requireds)
    }

    /// Builds one slot of a numbered sequence of object queries.
    ///
    /// Indexed queries never take a caller-supplied alias; theirs comes from
    /// the position-suffixed alias parameter.
    pub fn new_query(
        query: impl Into<String>,
        position: NonZeroUsize,
        optionals: Arc<SearchParams>,
        requireds: Arc<SearchParams>,
    ) -> Result<Self, ConfigurationError> {
        Self::new(query, position.get(), None, optionals, requireds)
    }

    /// The object field this query targets, resolved from the type hint.
    ///
    /// Resolution runs at most once per instance; later calls return the
    /// cached field. An absent or unrecognized hint selects
    /// [`ObjectField::Text`]: a caller that misspells the hint loses
    /// type-specific faceting semantics, not the whole request.
    pub fn field(&self) -> ObjectField {
        *self.field.get_or_init(|| {
            let hint = self
                .base
                .optionals()
                .get_indexed(QUERY_HINT, self.base.index());
            let field = match hint {
                Some("date") => ObjectField::Date,
                Some("num") => ObjectField::Numeric,
                Some("bool") => ObjectField::Boolean,
                _ => ObjectField::Text,
            };
            tracing::debug!(query = self.base.query(), hint, %field, "resolved object field");
            field
        })
    }

    /// The name of the index field this query targets.
    #[must_use]
    pub fn field_name(&self) -> &'static str {
        self.field().name()
    }

    /// The underlying query string.
    #[must_use]
    pub fn query(&self) -> &str {
        self.base.query()
    }

    /// Position within the indexed sequence; 0 marks the anonymous query.
    #[must_use]
    pub const fn index(&self) -> usize {
        self.base.index()
    }

    /// Whether this is the single, unindexed query of its request.
    #[must_use]
    pub const fn is_anonymous(&self) -> bool {
        self.base.is_anonymous()
    }

    /// Caller-facing display name for this query's results, if any.
    #[must_use]
    pub fn alias(&self) -> Option<&str> {
        self.base.alias()
    }
}
