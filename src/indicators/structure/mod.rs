pub mod fractal;
pub mod support_resistance;

pub use fractal::find_fractal_lows;
pub use support_resistance::{cluster_levels, detect_levels, detect_levels_from_lows};
