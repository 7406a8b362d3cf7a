use crate::error::ConfigurationError;
use crate::params::SearchParams;
use crate::query::{FacetObjectQuery, QUERY};
use std::num::NonZeroUsize;
use std::sync::Arc;

/// Builds the facet object queries requested by one search request.
///
/// A request carries either a numbered sequence (`facet.obj.q.1`,
/// `facet.obj.q.2`, ...) or a single anonymous `facet.obj.q`. The sequence
/// takes precedence when both forms are present; positions are scanned
/// contiguously from 1 and scanning stops at the first gap. A request
/// without any object query yields an empty vector.
pub fn decode_object_queries(
    optionals: &Arc<SearchParams>,
    requireds: &Arc<SearchParams>,
) -> Result<Vec<FacetObjectQuery>, ConfigurationError> {
    let mut queries = Vec::new();

    let mut position = NonZeroUsize::MIN;
    while let Some(query) = optionals.get(&format!("{QUERY}.{position}")) {
        queries.push(FacetObjectQuery::new_query(
            query,
            position,
            Arc::clone(optionals),
            Arc::clone(requireds),
        )?);
        position = position.saturating_add(1);
    }

    if queries.is_empty() {
        if let Some(query) = optionals.get(QUERY) {
            queries.push(FacetObjectQuery::new_anonymous_query(
                query,
                None,
                Arc::clone(optionals),
                Arc::clone(requireds),
            )?);
        }
    }

    tracing::trace!(count = queries.len(), "decoded facet object queries");
    Ok(queries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rdf_facet_model::{DATE_OBJECT, NUMERIC_OBJECT, TEXT_OBJECT};

    fn params(pairs: &[(&str, &str)]) -> Arc<SearchParams> {
        Arc::new(pairs.iter().copied().collect())
    }

    #[test]
    fn no_query_parameters_yields_no_queries() {
        let queries = decode_object_queries(&params(&[]), &params(&[])).unwrap();
        assert!(queries.is_empty());
    }

    #[test]
    fn anonymous_query_is_decoded_alone() {
        let optionals = params(&[("facet.obj.q", "?x"), ("facet.obj.q.hint", "num")]);
        let queries = decode_object_queries(&optionals, &params(&[])).unwrap();
        assert_eq!(queries.len(), 1);
        assert!(queries[0].is_anonymous());
        assert_eq!(queries[0].query(), "?x");
        assert_eq!(queries[0].field_name(), NUMERIC_OBJECT);
    }

    #[test]
    fn indexed_queries_are_decoded_in_order() {
        let optionals = params(&[
            ("facet.obj.q.1", "?a"),
            ("facet.obj.q.2", "?b"),
            ("facet.obj.q.hint.2", "date"),
            ("facet.obj.q.alias.1", "first"),
        ]);
        let queries = decode_object_queries(&optionals, &params(&[])).unwrap();
        assert_eq!(queries.len(), 2);
        assert_eq!(queries[0].index(), 1);
        assert_eq!(queries[0].alias(), Some("first"));
        assert_eq!(queries[0].field_name(), TEXT_OBJECT);
        assert_eq!(queries[1].index(), 2);
        assert_eq!(queries[1].query(), "?b");
        assert_eq!(queries[1].field_name(), DATE_OBJECT);
    }

    #[test]
    fn indexed_queries_shadow_the_anonymous_form() {
        let optionals = params(&[("facet.obj.q", "?family"), ("facet.obj.q.1", "?a")]);
        let queries = decode_object_queries(&optionals, &params(&[])).unwrap();
        assert_eq!(queries.len(), 1);
        assert_eq!(queries[0].index(), 1);
        assert_eq!(queries[0].query(), "?a");
    }

    #[test]
    fn scanning_stops_at_the_first_gap() {
        let optionals = params(&[("facet.obj.q.1", "?a"), ("facet.obj.q.3", "?c")]);
        let queries = decode_object_queries(&optionals, &params(&[])).unwrap();
        assert_eq!(queries.len(), 1);
        assert_eq!(queries[0].query(), "?a");
    }

    #[test]
    fn blank_indexed_query_fails_decoding() {
        let optionals = params(&[("facet.obj.q.1", " ")]);
        let err = decode_object_queries(&optionals, &params(&[])).unwrap_err();
        assert!(matches!(err, ConfigurationError::EmptyQuery));
    }
}
