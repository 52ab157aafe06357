//! One-call sorting straight from a query string.

use sortable_core::config::SortConfig;
use sortable_core::error::Result;
use sortable_core::record::Record;
use sortable_resolver::{FieldSortResolver, Objects, OrderBy};

use crate::params::SortParams;

/// Sort `objects` by the `sort`/`dir` parameters found in `query`.
///
/// With no (or an empty) sort parameter the objects come back untouched.
pub fn sortable_helper<Q, R>(
    query: &str,
    objects: Objects<Q, R>,
    resolver: &FieldSortResolver,
    config: &SortConfig,
) -> Result<Objects<Q, R>>
where
    Q: OrderBy,
    R: Record,
{
    let params = SortParams::from_query(query, config);
    let Some(field) = params.field.as_deref() else {
        return Ok(objects);
    };

    #[cfg(feature = "tracing")]
    tracing::trace!(field, direction = %params.direction, "sort requested");

    resolver.sorted(objects, field, &params.direction)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use sortable_core::field::FieldSpec;
    use sortable_resolver::{InMemory, OrderByClause};

    fn names(objects: InMemory<serde_json::Value>) -> Vec<String> {
        objects
            .into_records()
            .unwrap()
            .iter()
            .map(|r| r["name"].as_str().unwrap().to_string())
            .collect()
    }

    #[test]
    fn test_no_sort_param_returns_input() {
        let records = vec![json!({"name": "b"}), json!({"name": "a"})];
        let out = sortable_helper(
            "page=3",
            InMemory::from(records),
            &FieldSortResolver::unrestricted(),
            &SortConfig::default(),
        )
        .unwrap();
        assert_eq!(names(out), vec!["b", "a"]);
    }

    #[test]
    fn test_default_direction_is_asc() {
        let records = vec![json!({"name": "b"}), json!({"name": "a"})];
        let out = sortable_helper(
            "sort=name",
            InMemory::from(records),
            &FieldSortResolver::unrestricted(),
            &SortConfig::default(),
        )
        .unwrap();
        assert_eq!(names(out), vec!["a", "b"]);
    }

    #[test]
    fn test_query_builder_with_whitelist() {
        let resolver =
            FieldSortResolver::new(Some(vec![FieldSpec::try_from(("who", "user_name")).unwrap()]))
                .unwrap();
        let out: Objects<OrderByClause, serde_json::Value> = sortable_helper(
            "sort=who&dir=desc",
            Objects::Query(OrderByClause::new()),
            &resolver,
            &SortConfig::default(),
        )
        .unwrap();
        assert_eq!(
            out.into_query().unwrap().to_sql().as_deref(),
            Some("ORDER BY user_name DESC")
        );
    }
}
