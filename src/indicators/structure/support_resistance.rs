//! Support level detection
//!
//! Fractal lows from the whole series are grouped into support zones: the
//! lowest unassigned low anchors a zone and absorbs every low within 5% above
//! it. Zone strength is the number of lows it absorbed.

use crate::common::math::mean;
use crate::models::indicators::{PriceSeries, SupportLevel};

use super::fractal::find_fractal_lows;

/// Upper bound of a cluster relative to its anchor.
pub const CLUSTER_TOLERANCE: f64 = 1.05;

/// Detect clustered support levels from a validated price series.
pub fn detect_levels(series: &PriceSeries) -> Vec<SupportLevel> {
    detect_levels_from_lows(&series.lows())
}

/// Detect clustered support levels from raw lows, oldest first.
pub fn detect_levels_from_lows(lows: &[f64]) -> Vec<SupportLevel> {
    cluster_levels(&find_fractal_lows(lows))
}

/// Greedy anchor-based clustering over the sorted candidates.
///
/// Clusters come out in ascending anchor order and partition the input.
pub fn cluster_levels(candidates: &[f64]) -> Vec<SupportLevel> {
    let mut sorted = candidates.to_vec();
    sorted.sort_by(f64::total_cmp);

    let mut levels = Vec::new();
    let mut queue = sorted.as_slice();

    while let Some(&anchor) = queue.first() {
        let bound = anchor * CLUSTER_TOLERANCE;
        // The anchor always joins its own cluster, even for non-positive input.
        let size = queue.partition_point(|&price| price <= bound).max(1);
        let (cluster, rest) = queue.split_at(size);

        if let Some(average_price) = mean(cluster) {
            levels.push(SupportLevel::new(average_price, cluster.len()));
        }

        queue = rest;
    }

    levels
}
