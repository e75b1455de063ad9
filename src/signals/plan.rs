//! Buy plan construction from detected support levels

use crate::common::math::{percent_below, round_to};
use crate::indicators::IndicatorError;
use crate::models::analysis::{BuyLevel, PlanStatus, StrategicPlan};
use crate::models::indicators::SupportLevel;

/// Maximum number of rungs in a plan.
pub const MAX_PLAN_LEVELS: usize = 3;

/// Build the staged buy plan below the current price.
///
/// Levels under `current_price` are ranked nearest-first and the top three
/// kept. Weights are each level's share of the combined strength, rounded
/// independently, so they may not add up to exactly 100.
pub fn build_plan(
    levels: &[SupportLevel],
    current_price: f64,
    year_high: f64,
) -> Result<StrategicPlan, IndicatorError> {
    let current_price = IndicatorError::check_price("current_price", current_price)?;
    let year_high = IndicatorError::check_price("year_high", year_high)?;

    let mut waiting: Vec<SupportLevel> = levels
        .iter()
        .filter(|level| level.average_price < current_price)
        .copied()
        .collect();
    waiting.sort_by(|a, b| b.average_price.total_cmp(&a.average_price));
    waiting.truncate(MAX_PLAN_LEVELS);

    if waiting.is_empty() {
        return Ok(StrategicPlan {
            status: PlanStatus::NoLevelFound,
            levels: Vec::new(),
        });
    }

    let total_strength: usize = waiting.iter().map(|level| level.strength).sum();

    let levels = waiting
        .iter()
        .zip(1u32..)
        .map(|(level, order)| {
            let price = level.average_price;
            let weight_percent = if total_strength == 0 {
                0
            } else {
                round_to(level.strength as f64 / total_strength as f64 * 100.0, 0) as i64
            };
            BuyLevel {
                order,
                price: round_to(price, 2),
                weight_percent,
                discount_from_high_pct: round_to(percent_below(year_high, price), 2),
                gap_from_current_pct: round_to(percent_below(current_price, price), 2),
            }
        })
        .collect();

    Ok(StrategicPlan {
        status: PlanStatus::Found,
        levels,
    })
}
