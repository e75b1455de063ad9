//! Response payloads produced by the analysis engine.

use serde::{Deserialize, Serialize};

/// One rung of the buy plan, nearest to the current price first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuyLevel {
    pub order: u32,
    pub price: f64,
    pub weight_percent: i64,
    pub discount_from_high_pct: f64,
    pub gap_from_current_pct: f64,
}

/// Outcome of the plan builder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlanStatus {
    Found,
    NoLevelFound,
}

impl PlanStatus {
    pub fn message(&self) -> &'static str {
        match self {
            PlanStatus::Found => "Found Strategic Levels",
            PlanStatus::NoLevelFound => {
                "No strategic level found: current price is the 5-year low"
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct StrategicPlan {
    pub status: PlanStatus,
    pub levels: Vec<BuyLevel>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub symbol: String,
    pub company_name: String,
    pub analysis_date: String,
    pub current_price: f64,
    pub year_high: f64,
    pub year_low: f64,
    pub status: String,
    pub strategic_plan: Vec<BuyLevel>,
}
