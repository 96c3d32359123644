//! Ordinary Least Squares (OLS) line fitting over a time index.
//!
//! Fits `y = slope * x + intercept` where `x` is the position of each
//! observation (0, 1, 2, ...). Closed form, single pass over the data.

/// Slope and intercept of a fitted line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineFit {
    /// Change in value per time step.
    pub slope: f64,
    /// Value of the line at index 0.
    pub intercept: f64,
}

impl LineFit {
    /// Evaluate the line at index `x`.
    pub fn predict_at(&self, x: f64) -> f64 {
        self.intercept + self.slope * x
    }

    /// Extrapolate `horizon` points past an observed series of length `n`.
    ///
    /// Step `j` (1-based) lands on index `n - 1 + j`.
    pub fn extrapolate(&self, n: usize, horizon: usize) -> Vec<f64> {
        (1..=horizon)
            .map(|j| self.predict_at((n + j - 1) as f64))
            .collect()
    }

    /// In-sample values of the line for indices `0..n`.
    pub fn fitted(&self, n: usize) -> Vec<f64> {
        (0..n).map(|i| self.predict_at(i as f64)).collect()
    }
}

/// Fit an OLS line to `y` against its indices.
///
/// Returns `None` for fewer than two observations. A zero denominator
/// (no variance in `x`) yields a flat line through the mean.
pub fn fit_index_line(y: &[f64]) -> Option<LineFit> {
    let n = y.len();
    if n < 2 {
        return None;
    }

    let mut sum_x = 0.0;
    let mut sum_y = 0.0;
    let mut sum_xy = 0.0;
    let mut sum_xx = 0.0;

    for (i, &yi) in y.iter().enumerate() {
        let x = i as f64;
        sum_x += x;
        sum_y += yi;
        sum_xy += x * yi;
        sum_xx += x * x;
    }

    let n = n as f64;
    let denominator = n * sum_xx - sum_x * sum_x;
    let slope = if denominator == 0.0 {
        0.0
    } else {
        (n * sum_xy - sum_x * sum_y) / denominator
    };
    let intercept = (sum_y - slope * sum_x) / n;

    Some(LineFit { slope, intercept })
}
