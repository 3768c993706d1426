//! Stock quantity value object.
//!
//! Quantities are normally signed counts, but a data file written by hand (or
//! by another tool) may carry fractional numbers or values that are not
//! numbers at all. Fractional numbers still take part in arithmetic; anything
//! else is kept verbatim so saving again does not lose it.

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use crate::error::{StockError, StockResult};

/// Quantity held for one item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Quantity {
    /// Signed item count.
    Count(i64),
    /// Any other JSON number (fractional, or an integer outside the i64 range).
    Number(f64),
    /// A stored value that is not a number (string, null, array, object).
    Unsupported(JsonValue),
}

impl Quantity {
    /// Integer count, if this quantity is one.
    pub fn as_count(&self) -> Option<i64> {
        match self {
            Quantity::Count(n) => Some(*n),
            Quantity::Number(_) | Quantity::Unsupported(_) => None,
        }
    }

    /// Whether arithmetic and comparisons are defined for this quantity.
    pub fn is_numeric(&self) -> bool {
        !matches!(self, Quantity::Unsupported(_))
    }

    /// Quantity after adding `delta`.
    ///
    /// `item` only labels the error.
    pub fn plus(&self, item: &str, delta: i64) -> StockResult<Quantity> {
        match self {
            Quantity::Count(n) => n
                .checked_add(delta)
                .map(Quantity::Count)
                .ok_or_else(|| StockError::overflow(item)),
            Quantity::Number(x) => Ok(Quantity::Number(x + delta as f64)),
            Quantity::Unsupported(_) => Err(StockError::not_numeric(item)),
        }
    }

    /// Quantity after subtracting `delta`.
    pub fn minus(&self, item: &str, delta: i64) -> StockResult<Quantity> {
        match self {
            Quantity::Count(n) => n
                .checked_sub(delta)
                .map(Quantity::Count)
                .ok_or_else(|| StockError::overflow(item)),
            Quantity::Number(x) => Ok(Quantity::Number(x - delta as f64)),
            Quantity::Unsupported(_) => Err(StockError::not_numeric(item)),
        }
    }

    /// Zero or below. Non-numeric values are never depleted.
    pub fn is_depleted(&self) -> bool {
        match self {
            Quantity::Count(n) => *n <= 0,
            Quantity::Number(x) => *x <= 0.0,
            Quantity::Unsupported(_) => false,
        }
    }

    /// Strictly below `threshold`, or `None` when the value cannot be compared.
    pub fn is_below(&self, threshold: i64) -> Option<bool> {
        match self {
            Quantity::Count(n) => Some(*n < threshold),
            Quantity::Number(x) => Some(*x < threshold as f64),
            Quantity::Unsupported(_) => None,
        }
    }
}

impl From<i64> for Quantity {
    fn from(value: i64) -> Self {
        Quantity::Count(value)
    }
}

impl From<f64> for Quantity {
    fn from(value: f64) -> Self {
        Quantity::Number(value)
    }
}

/// Integers in range become counts, other numbers stay numbers, the rest is kept as-is.
impl From<JsonValue> for Quantity {
    fn from(value: JsonValue) -> Self {
        if let Some(n) = value.as_i64() {
            return Quantity::Count(n);
        }
        match value.as_f64() {
            Some(x) => Quantity::Number(x),
            None => Quantity::Unsupported(value),
        }
    }
}

impl core::fmt::Display for Quantity {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Quantity::Count(n) => core::fmt::Display::fmt(n, f),
            // `{:?}` keeps the fractional part of whole floats (`3.0`, not `3`).
            Quantity::Number(x) => write!(f, "{x:?}"),
            Quantity::Unsupported(JsonValue::String(s)) => f.write_str(s),
            Quantity::Unsupported(v) => core::fmt::Display::fmt(v, f),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use serde_json::json;

    #[test]
    fn integers_deserialize_as_counts() {
        let q: Quantity = serde_json::from_value(json!(-2)).unwrap();
        assert_eq!(q, Quantity::Count(-2));
    }

    #[test]
    fn fractional_numbers_deserialize_as_numbers() {
        let q: Quantity = serde_json::from_value(json!(7.5)).unwrap();
        assert_eq!(q, Quantity::Number(7.5));
        assert_eq!(serde_json::to_value(&q).unwrap(), json!(7.5));
    }

    #[test]
    fn non_numbers_are_kept_verbatim() {
        for raw in [json!("ten"), json!(null), json!([1]), json!({"a": 1})] {
            let q: Quantity = serde_json::from_value(raw.clone()).unwrap();
            assert_eq!(q, Quantity::Unsupported(raw.clone()));
            assert_eq!(serde_json::to_value(&q).unwrap(), raw);
        }
    }

    #[test]
    fn from_json_value_agrees_with_deserialize() {
        for raw in [json!(7), json!(-3), json!(3.0), json!(2.5), json!(u64::MAX), json!("7")] {
            let via_serde: Quantity = serde_json::from_value(raw.clone()).unwrap();
            assert_eq!(Quantity::from(raw), via_serde);
        }
    }

    #[test]
    fn fractional_arithmetic_and_comparisons() {
        let q = Quantity::Number(7.5);
        assert_eq!(q.minus("apple", 10), Ok(Quantity::Number(-2.5)));
        assert_eq!(q.plus("apple", 1), Ok(Quantity::Number(8.5)));
        assert_eq!(q.is_below(10), Some(true));
        assert_eq!(q.is_below(7), Some(false));
        assert!(!q.is_depleted());
        assert!(Quantity::Number(0.0).is_depleted());
        assert!(q.is_numeric());
    }

    #[test]
    fn arithmetic_on_unsupported_value_is_not_numeric() {
        let q = Quantity::Unsupported(json!("ten"));
        assert_eq!(q.plus("pear", 1), Err(StockError::not_numeric("pear")));
        assert_eq!(q.minus("pear", 1), Err(StockError::not_numeric("pear")));
        assert_eq!(q.is_below(100), None);
        assert!(!q.is_depleted());
        assert!(!q.is_numeric());
    }

    #[test]
    fn arithmetic_reports_overflow() {
        assert_eq!(
            Quantity::Count(i64::MAX).plus("bolt", 1),
            Err(StockError::overflow("bolt"))
        );
        assert_eq!(
            Quantity::Count(i64::MIN).minus("bolt", 1),
            Err(StockError::overflow("bolt"))
        );
    }

    #[test]
    fn display_prints_plain_values() {
        assert_eq!(Quantity::Count(7).to_string(), "7");
        assert_eq!(Quantity::Number(7.5).to_string(), "7.5");
        assert_eq!(Quantity::Number(3.0).to_string(), "3.0");
        assert_eq!(Quantity::Unsupported(json!("ten")).to_string(), "ten");
        assert_eq!(Quantity::Unsupported(json!([1, 2])).to_string(), "[1,2]");
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: checked arithmetic agrees with wide arithmetic whenever
        /// the result fits in i64.
        #[test]
        fn plus_and_minus_agree_with_wide_arithmetic(start in any::<i64>(), delta in any::<i64>()) {
            let q = Quantity::Count(start);

            let wide_sum = start as i128 + delta as i128;
            match q.plus("x", delta) {
                Ok(n) => prop_assert_eq!(n.as_count().map(i128::from), Some(wide_sum)),
                Err(e) => {
                    prop_assert_eq!(e, StockError::overflow("x"));
                    prop_assert!(wide_sum > i64::MAX as i128 || wide_sum < i64::MIN as i128);
                }
            }

            let wide_diff = start as i128 - delta as i128;
            match q.minus("x", delta) {
                Ok(n) => prop_assert_eq!(n.as_count().map(i128::from), Some(wide_diff)),
                Err(e) => {
                    prop_assert_eq!(e, StockError::overflow("x"));
                    prop_assert!(wide_diff > i64::MAX as i128 || wide_diff < i64::MIN as i128);
                }
            }
        }
    }
}
