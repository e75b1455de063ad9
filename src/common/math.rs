//! Small numeric helpers shared by the indicator and plan code.

/// Round to `decimals` places, ties going to the even neighbour.
///
/// Fractional places are rounded from the exact binary value through the
/// decimal formatter; scaling by a power of ten first would itself round and
/// turn near-ties such as `111.235` into exact ties.
pub fn round_to(value: f64, decimals: usize) -> f64 {
    if decimals == 0 {
        return value.round_ties_even();
    }
    format!("{:.*}", decimals, value).parse().unwrap_or(value)
}

/// Arithmetic mean, `None` for an empty slice.
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// `(reference - value) / reference` as a percentage.
pub fn percent_below(reference: f64, value: f64) -> f64 {
    ((reference - value) / reference) * 100.0
}
