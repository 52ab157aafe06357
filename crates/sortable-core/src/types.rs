//! Field values extracted from records for comparison.
//!
//! Records come in many shapes (JSON objects, maps, user structs); every
//! accessor lowers the requested field to a `Scalar` so the sort comparator
//! only ever has to order one type.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Null,
    Bool(bool),
    I64(i64),
    F64(f64),
    Str(String),
}

impl Scalar {
    /// Total order used by in-memory sorting.
    ///
    /// Nulls are sorted first, then values are compared by type. Integers and
    /// floats compare numerically with each other; NaN sorts after every number.
    pub fn sort_cmp(&self, other: &Scalar) -> Ordering {
        use Scalar::*;

        match (self, other) {
            (Null, Null) => Ordering::Equal,
            (Null, _) => Ordering::Less,
            (_, Null) => Ordering::Greater,
            (Bool(x), Bool(y)) => x.cmp(y),
            (I64(x), I64(y)) => x.cmp(y),
            (F64(x), F64(y)) => f64_cmp(*x, *y),
            (I64(x), F64(y)) => i64_f64_cmp(*x, *y),
            (F64(x), I64(y)) => i64_f64_cmp(*y, *x).reverse(),
            (Str(x), Str(y)) => x.cmp(y),
            // Mixed types: order by variant order
            _ => self.type_rank().cmp(&other.type_rank()),
        }
    }

    /// Numeric rank for mixed-type comparisons.
    fn type_rank(&self) -> u8 {
        match self {
            Scalar::Null => 0,
            Scalar::Bool(_) => 1,
            Scalar::I64(_) | Scalar::F64(_) => 2,
            Scalar::Str(_) => 3,
        }
    }

    /// Lower a JSON value to a scalar. Arrays and objects have no natural
    /// order and yield `None`.
    pub fn from_json(value: &serde_json::Value) -> Option<Scalar> {
        use serde_json::Value;

        match value {
            Value::Null => Some(Scalar::Null),
            Value::Bool(b) => Some(Scalar::Bool(*b)),
            Value::Number(n) => n
                .as_i64()
                .map(Scalar::I64)
                .or_else(|| n.as_f64().map(Scalar::F64)),
            Value::String(s) => Some(Scalar::Str(s.clone())),
            Value::Array(_) | Value::Object(_) => None,
        }
    }
}

fn f64_cmp(x: f64, y: f64) -> Ordering {
    if x.is_nan() && y.is_nan() {
        Ordering::Equal
    } else if x.is_nan() {
        Ordering::Greater
    } else if y.is_nan() {
        Ordering::Less
    } else {
        x.partial_cmp(&y).unwrap_or(Ordering::Equal)
    }
}

/// Exact comparison of an integer with a float; no rounding through `as f64`.
fn i64_f64_cmp(x: i64, y: f64) -> Ordering {
    // 2^63, the first float above i64::MAX
    const I64_END: f64 = 9_223_372_036_854_775_808.0;

    if y.is_nan() {
        return Ordering::Less;
    }
    if y >= I64_END {
        return Ordering::Less;
    }
    if y < -I64_END {
        return Ordering::Greater;
    }

    let whole = y.trunc();
    match x.cmp(&(whole as i64)) {
        Ordering::Equal if y > whole => Ordering::Less,
        Ordering::Equal if y < whole => Ordering::Greater,
        other => other,
    }
}

impl From<bool> for Scalar {
    fn from(v: bool) -> Self {
        Scalar::Bool(v)
    }
}

impl From<i32> for Scalar {
    fn from(v: i32) -> Self {
        Scalar::I64(i64::from(v))
    }
}

impl From<i64> for Scalar {
    fn from(v: i64) -> Self {
        Scalar::I64(v)
    }
}

impl From<u32> for Scalar {
    fn from(v: u32) -> Self {
        Scalar::I64(i64::from(v))
    }
}

impl From<f64> for Scalar {
    fn from(v: f64) -> Self {
        Scalar::F64(v)
    }
}

impl From<&str> for Scalar {
    fn from(v: &str) -> Self {
        Scalar::Str(v.to_string())
    }
}

impl From<String> for Scalar {
    fn from(v: String) -> Self {
        Scalar::Str(v)
    }
}

impl<T: Into<Scalar>> From<Option<T>> for Scalar {
    fn from(v: Option<T>) -> Self {
        v.map(Into::into).unwrap_or(Scalar::Null)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_nulls_sort_first() {
        assert_eq!(Scalar::Null.sort_cmp(&Scalar::I64(-5)), Ordering::Less);
        assert_eq!(Scalar::Str("a".into()).sort_cmp(&Scalar::Null), Ordering::Greater);
        assert_eq!(Scalar::Null.sort_cmp(&Scalar::Null), Ordering::Equal);
    }

    #[test]
    fn test_int_and_float_compare_numerically() {
        assert_eq!(Scalar::I64(2).sort_cmp(&Scalar::F64(1.5)), Ordering::Greater);
        assert_eq!(Scalar::F64(2.0).sort_cmp(&Scalar::I64(2)), Ordering::Equal);
    }

    #[test]
    fn test_int_and_float_compare_exactly_past_2_pow_53() {
        let big = 1i64 << 53;
        let as_float = Scalar::F64(big as f64);
        assert_eq!(Scalar::I64(big + 1).sort_cmp(&as_float), Ordering::Greater);
        assert_eq!(as_float.sort_cmp(&Scalar::I64(big + 1)), Ordering::Less);
        assert_eq!(Scalar::I64(big).sort_cmp(&as_float), Ordering::Equal);
        assert_eq!(Scalar::I64(i64::MAX).sort_cmp(&Scalar::F64(9.3e18)), Ordering::Less);
        assert_eq!(Scalar::I64(i64::MIN).sort_cmp(&Scalar::F64(-9.3e18)), Ordering::Greater);
    }

    #[test]
    fn test_int_against_fractional_float() {
        assert_eq!(Scalar::I64(2).sort_cmp(&Scalar::F64(2.5)), Ordering::Less);
        assert_eq!(Scalar::I64(-2).sort_cmp(&Scalar::F64(-2.5)), Ordering::Greater);
        assert_eq!(Scalar::F64(-0.5).sort_cmp(&Scalar::I64(0)), Ordering::Less);
    }

    #[test]
    fn test_nan_sorts_after_numbers() {
        assert_eq!(Scalar::F64(f64::NAN).sort_cmp(&Scalar::F64(1e9)), Ordering::Greater);
        assert_eq!(Scalar::I64(0).sort_cmp(&Scalar::F64(f64::NAN)), Ordering::Less);
    }

    #[test]
    fn test_mixed_types_use_rank() {
        assert_eq!(Scalar::Bool(true).sort_cmp(&Scalar::I64(0)), Ordering::Less);
        assert_eq!(Scalar::Str("0".into()).sort_cmp(&Scalar::I64(9)), Ordering::Greater);
    }

    #[test]
    fn test_from_json() {
        assert_eq!(Scalar::from_json(&json!(3)), Some(Scalar::I64(3)));
        assert_eq!(Scalar::from_json(&json!(2.5)), Some(Scalar::F64(2.5)));
        assert_eq!(Scalar::from_json(&json!("x")), Some(Scalar::Str("x".into())));
        assert_eq!(Scalar::from_json(&json!(null)), Some(Scalar::Null));
        assert_eq!(Scalar::from_json(&json!([1, 2])), None);
        assert_eq!(Scalar::from_json(&json!({"a": 1})), None);
    }

    #[test]
    fn test_option_into_scalar() {
        let missing: Option<&str> = None;
        assert_eq!(Scalar::from(missing), Scalar::Null);
        assert_eq!(Scalar::from(Some(7i64)), Scalar::I64(7));
    }
}
