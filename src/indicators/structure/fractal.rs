//! Five-bar fractal lows

/// Bars required on each side of a fractal.
pub const FRACTAL_MARGIN: usize = 2;

/// Series must be longer than this for the scan to run at all.
pub const MIN_FRACTAL_BARS: usize = 5;

/// Find lows strictly below the two bars on either side.
///
/// Returns candidate prices in discovery order; equal neighbours disqualify a
/// bar and duplicates are kept.
pub fn find_fractal_lows(lows: &[f64]) -> Vec<f64> {
    if lows.len() <= MIN_FRACTAL_BARS {
        return Vec::new();
    }

    lows.windows(2 * FRACTAL_MARGIN + 1)
        .filter_map(|window| {
            let center = window[FRACTAL_MARGIN];
            let is_fractal = window
                .iter()
                .enumerate()
                .all(|(offset, &low)| offset == FRACTAL_MARGIN || center < low);
            is_fractal.then_some(center)
        })
        .collect()
}
