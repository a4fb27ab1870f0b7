use crate::error::{Error, Result};

/// Result of a log-linear exponential fit
///
/// The fitted model is `count = exp(slope * x + intercept)`, obtained as a
/// straight-line least-squares fit in log space. The correlation and slope
/// error describe the quality of that straight line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExpFit {
    /// Decay constant `k` of the fitted exponential
    pub slope: f64,
    /// Log-space intercept `b`
    pub intercept: f64,
    /// Pearson correlation between `x` and `ln(count)`
    pub correlation: f64,
    /// Standard error of the slope, `k * sqrt((1/r^2 - 1) / (N - 2))`
    pub slope_err: f64,
}

impl ExpFit {
    /// Evaluate the fitted curve `exp(k*x + b)` at the given positions
    ///
    /// This is the re-exponentiated fit line for overlaying on a histogram,
    /// evaluated at the same x values the fit was made over.
    pub fn curve(&self, x: &[f64]) -> Vec<f64> {
        x.iter()
            .map(|v| (self.slope * v + self.intercept).exp())
            .collect()
    }

    /// The per-unit decay factor `exp(k)` and its propagated error
    ///
    /// For a slope per nanosecond this is the surviving fraction per
    /// nanosecond. The error is first-order propagation, `exp(k) * sigma_k`.
    pub fn exp_slope(&self) -> (f64, f64) {
        let factor = self.slope.exp();
        (factor, factor * self.slope_err)
    }
}

/// Fit `count = exp(k*x + b)` to paired data by least squares in log space
///
/// Takes the natural log of each count and fits `ln(count) = k*x + b` by
/// ordinary least squares. The Pearson correlation is computed from the
/// population covariance of `x` and `ln(count)`; the slope standard error is
/// `k * sqrt((1/r^2 - 1) / (N - 2))`.
///
/// All counts must be strictly positive and at least three points are
/// required. Degenerate inputs return an [Error] instead of silently
/// producing NaN.
///
/// ```rust
/// # use gtools_fit::fit_exponential;
/// let x = [1.0, 2.0, 3.0, 4.0];
/// let y = [0.9048, 0.8187, 0.7408, 0.6703]; // roughly exp(-0.1 x)
/// let fit = fit_exponential(&x, &y).unwrap();
/// assert!((fit.slope + 0.1).abs() < 1e-3);
/// ```
pub fn fit_exponential(x: &[f64], y: &[f64]) -> Result<ExpFit> {
    if x.len() != y.len() {
        return Err(Error::LengthMismatch {
            x: x.len(),
            y: y.len(),
        });
    }
    let n = x.len();
    if n < 3 {
        return Err(Error::InsufficientPoints(n));
    }
    if let Some((index, &value)) = y.iter().enumerate().find(|(_, &v)| v <= 0.0) {
        return Err(Error::NonPositiveCount { index, value });
    }

    let log_y: Vec<f64> = y.iter().map(|v| v.ln()).collect();

    let mean_x = mean(x);
    let mean_y = mean(&log_y);
    let var_x = covariance(x, mean_x, x, mean_x);
    let var_y = covariance(&log_y, mean_y, &log_y, mean_y);
    let cov_xy = covariance(x, mean_x, &log_y, mean_y);

    if var_x == 0.0 {
        return Err(Error::ZeroVariance("x"));
    }
    if var_y == 0.0 {
        return Err(Error::ZeroVariance("ln(count)"));
    }

    let slope = cov_xy / var_x;
    let intercept = mean_y - slope * mean_x;
    let correlation = cov_xy / (var_x * var_y).sqrt();
    if correlation == 0.0 {
        return Err(Error::ZeroCorrelation);
    }

    // rounding can push |r| past 1 on exactly-linear data
    let spread = (1.0 / (correlation * correlation) - 1.0).max(0.0);
    let slope_err = slope * (spread / (n as f64 - 2.0)).sqrt();

    Ok(ExpFit {
        slope,
        intercept,
        correlation,
        slope_err,
    })
}

fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

/// Population covariance of two already-centred sequences
fn covariance(a: &[f64], mean_a: f64, b: &[f64], mean_b: f64) -> f64 {
    a.iter()
        .zip(b)
        .map(|(x, y)| (x - mean_a) * (y - mean_b))
        .sum::<f64>()
        / a.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(-0.01, 2.0)]
    #[case(-0.0213, -1.5)]
    #[case(0.004, 0.0)]
    fn exact_exponential_round_trip(#[case] k: f64, #[case] b: f64) {
        let x: Vec<f64> = (0..24).map(|i| 412.5 + 25.0 * i as f64).collect();
        let y: Vec<f64> = x.iter().map(|v| (k * v + b).exp()).collect();

        let fit = fit_exponential(&x, &y).unwrap();
        assert!((fit.slope - k).abs() < 1e-9);
        assert!((fit.intercept - b).abs() < 1e-6);
        assert!((fit.correlation.abs() - 1.0).abs() < 1e-9);
        assert!(fit.slope_err.abs() < 1e-6);
    }

    #[test]
    fn curve_reproduces_the_input() {
        let x = [1.0, 2.0, 3.0, 4.0];
        let y: Vec<f64> = x.iter().map(|v| (-0.5 * v + 1.0_f64).exp()).collect();
        let fit = fit_exponential(&x, &y).unwrap();

        for (a, b) in fit.curve(&x).iter().zip(&y) {
            assert!((a - b).abs() < 1e-9);
        }
    }

    #[test]
    fn exp_slope_propagates_the_error() {
        let fit = ExpFit {
            slope: -0.01,
            intercept: 0.0,
            correlation: -0.99,
            slope_err: 0.001,
        };
        let (factor, err) = fit.exp_slope();
        assert!((factor - (-0.01_f64).exp()).abs() < 1e-12);
        assert!((err - factor * 0.001).abs() < 1e-12);
    }

    #[test]
    fn zero_count_in_window_is_surfaced() {
        let x = [1.0, 2.0, 3.0, 4.0];
        let y = [1.0, 0.5, 0.0, 0.125];
        assert!(matches!(
            fit_exponential(&x, &y),
            Err(Error::NonPositiveCount { index: 2, .. })
        ));
    }

    #[test]
    fn too_few_points_are_rejected() {
        assert!(matches!(
            fit_exponential(&[1.0, 2.0], &[1.0, 0.5]),
            Err(Error::InsufficientPoints(2))
        ));
    }

    #[test]
    fn flat_x_is_rejected() {
        assert!(matches!(
            fit_exponential(&[2.0, 2.0, 2.0], &[1.0, 0.5, 0.25]),
            Err(Error::ZeroVariance("x"))
        ));
    }

    #[test]
    fn mismatched_lengths_are_rejected() {
        assert!(matches!(
            fit_exponential(&[1.0, 2.0, 3.0], &[1.0, 0.5]),
            Err(Error::LengthMismatch { x: 3, y: 2 })
        ));
    }
}
