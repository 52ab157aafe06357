//! Stable multi-key sort for in-memory records.
//!
//! Keys are extracted up front into `(key_tuple, record)` pairs, so a record
//! missing a field fails the whole sort before any reordering happens. The
//! pairs are then sorted with `sort_by` (stable) using a comparator that walks
//! the directive's keys in order and only consults the next key on a tie.

use std::cmp::Ordering;

use sortable_core::direction::Direction;
use sortable_core::directive::OrderingDirective;
use sortable_core::error::{Error, Result};
use sortable_core::record::Record;
use sortable_core::types::Scalar;

use crate::accessor::select_accessor;
use crate::traits::FieldAccessor;

/// Sort `records` by `directive`, preserving the relative order of ties.
///
/// Sequences of fewer than two records are returned as-is without touching
/// their fields.
pub fn sort_records<R: Record>(records: Vec<R>, directive: &OrderingDirective) -> Result<Vec<R>> {
    if records.len() < 2 || directive.is_empty() {
        return Ok(records);
    }

    let accessor = select_accessor(&records[0]).ok_or_else(|| Error::UnsortableElement {
        index: 0,
        field: directive.terms[0].field.clone(),
        reason: "record supports neither key nor attribute access".into(),
    })?;

    #[cfg(feature = "tracing")]
    tracing::trace!(accessor = accessor.name(), "selected field accessor");

    let keys = records
        .iter()
        .enumerate()
        .map(|(index, record)| extract_keys(accessor, record, index, directive))
        .collect::<Result<Vec<_>>>()?;

    let mut keyed: Vec<(Vec<Scalar>, R)> = keys.into_iter().zip(records).collect();
    keyed.sort_by(|(a, _), (b, _)| compare_keys(a, b, directive));

    Ok(keyed.into_iter().map(|(_, record)| record).collect())
}

fn extract_keys(
    accessor: &dyn FieldAccessor,
    record: &dyn Record,
    index: usize,
    directive: &OrderingDirective,
) -> Result<Vec<Scalar>> {
    directive
        .iter()
        .map(|term| {
            accessor.get(record, &term.field).ok_or_else(|| {
                let reason = if accessor.supports(record) {
                    format!("no {} named '{}'", accessor.name(), term.field)
                } else {
                    format!("record does not support {} access", accessor.name())
                };
                Error::UnsortableElement {
                    index,
                    field: term.field.clone(),
                    reason,
                }
            })
        })
        .collect()
}

/// Compare two key tuples term by term, reversing descending terms.
pub fn compare_keys(a: &[Scalar], b: &[Scalar], directive: &OrderingDirective) -> Ordering {
    for ((x, y), term) in a.iter().zip(b).zip(directive) {
        let ord = match term.direction {
            Direction::Asc => x.sort_cmp(y),
            Direction::Desc => y.sort_cmp(x),
        };
        if ord != Ordering::Equal {
            return ord;
        }
    }
    Ordering::Equal
}
