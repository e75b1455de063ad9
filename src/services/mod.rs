pub mod analysis;
pub mod market_data;
pub mod yahoo;

pub use analysis::{analyze_symbol, normalize_symbol};
pub use market_data::{MarketDataError, MarketDataProvider};
