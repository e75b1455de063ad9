use thiserror::Error;

/// Validation failures for inputs to the level and plan calculations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum IndicatorError {
    #[error("invalid price series: {0}")]
    InvalidSeries(String),

    #[error("{name} must be a positive finite price, got {value}")]
    InvalidPrice { name: &'static str, value: f64 },
}

impl IndicatorError {
    /// Reject anything that would turn a percentage calculation into NaN or
    /// infinity.
    pub fn check_price(name: &'static str, value: f64) -> Result<f64, Self> {
        if value.is_finite() && value > 0.0 {
            Ok(value)
        } else {
            Err(IndicatorError::InvalidPrice { name, value })
        }
    }
}
