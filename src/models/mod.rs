//! Shared data models spanning the engine layers.

pub mod analysis;
pub mod indicators;

pub use analysis::{AnalysisResult, BuyLevel, PlanStatus, StrategicPlan};
pub use indicators::{Candle, PriceSeries, SupportLevel};
