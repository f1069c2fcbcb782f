use super::model::NumericList;

// ---------------------------------------------------------------------------
// Operation – the aggregate applied to the decoded list
// ---------------------------------------------------------------------------

/// The aggregate operation selected once per invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// Left-to-right sum of all non-null values.
    Sum,
    /// Minimum and maximum, as a two-element result.
    MinMax,
    /// Values strictly below four, order preserved.
    FilterBelowFour,
}

impl std::str::FromStr for Operation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "sum" => Ok(Operation::Sum),
            "minmax" => Ok(Operation::MinMax),
            "lt4" => Ok(Operation::FilterBelowFour),
            other => Err(format!("invalid operation name: {other}")),
        }
    }
}

/// Threshold for [`Operation::FilterBelowFour`].
pub const FILTER_THRESHOLD: f32 = 4.0;

// ---------------------------------------------------------------------------
// Engine – total over possibly-empty input
// ---------------------------------------------------------------------------
//
// Every function here returns a defined default for an empty or all-null
// list instead of erroring. Whether "no input" is itself an error is
// decided upstream by the decoder, which keeps this layer total.

/// Sum of all non-null values. Accumulates left to right in input order,
/// so the result is bit-for-bit a reference left fold. Empty list sums
/// to 0.
pub fn sum(list: &NumericList) -> f32 {
    list.values().fold(0.0, |acc, v| acc + v)
}

/// Minimum non-null value, or 0 for an empty or all-null list.
pub fn min(list: &NumericList) -> f32 {
    list.values()
        .fold(None, |m: Option<f32>, v| match m {
            Some(m) if m <= v => Some(m),
            _ => Some(v),
        })
        .unwrap_or(0.0)
}

/// Maximum non-null value, or 0 for an empty or all-null list.
pub fn max(list: &NumericList) -> f32 {
    list.values()
        .fold(None, |m: Option<f32>, v| match m {
            Some(m) if m >= v => Some(m),
            _ => Some(v),
        })
        .unwrap_or(0.0)
}

/// Non-null values strictly below `threshold`, in input order.
pub fn filter_below(list: &NumericList, threshold: f32) -> NumericList {
    list.values().filter(|v| *v < threshold).collect()
}

/// Run `op` over `list` and collect the result as a list: one element for
/// `Sum`, `[min, max]` for `MinMax`, the filtered subsequence for
/// `FilterBelowFour`.
pub fn apply(op: Operation, list: &NumericList) -> NumericList {
    match op {
        Operation::Sum => NumericList::from(vec![sum(list)]),
        Operation::MinMax => NumericList::from(vec![min(list), max(list)]),
        Operation::FilterBelowFour => filter_below(list, FILTER_THRESHOLD),
    }
}
