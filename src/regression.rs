//! Ordinary least-squares line fitting.
//!
//! The model is a single straight line `y = slope·x + intercept`, solved in
//! closed form from the running sums over the sample. With at most
//! [`crate::data::ROW_CAPACITY`] points there is no need for a matrix
//! solver; the textbook formulas are exact and allocation-free.

/// A fitted regression line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearFit {
    /// Slope of the fitted line.
    pub slope: f64,
    /// Y-axis intercept of the fitted line.
    pub intercept: f64,
}

impl LinearFit {
    /// Fit a least-squares line through `points`.
    ///
    /// Returns `None` when fewer than two points are given; no line is
    /// defined in that case. When every x-value is identical the
    /// denominator is zero and the returned coefficients are non-finite
    /// (`±Inf`/`NaN`); callers that draw the line check [`is_finite`]
    /// first (see [`crate::chart::ChartFrame::compute`]).
    ///
    /// [`is_finite`]: LinearFit::is_finite
    pub fn fit(points: &[(f64, f64)]) -> Option<Self> {
        if points.len() < 2 {
            return None;
        }

        let n = points.len() as f64;
        let mut sum_x = 0.0;
        let mut sum_y = 0.0;
        let mut sum_xy = 0.0;
        let mut sum_xx = 0.0;
        for &(x, y) in points {
            sum_x += x;
            sum_y += y;
            sum_xy += x * y;
            sum_xx += x * x;
        }

        let mean_x = sum_x / n;
        let mean_y = sum_y / n;
        let slope = (sum_xy - n * mean_x * mean_y) / (sum_xx - n * mean_x * mean_x);
        let intercept = mean_y - slope * mean_x;

        Some(Self { slope, intercept })
    }

    /// Evaluate the fitted line at `x`.
    pub fn predict(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }

    /// True when both coefficients are finite numbers.
    pub fn is_finite(&self) -> bool {
        self.slope.is_finite() && self.intercept.is_finite()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fit_exact_line_through_origin() {
        // y = 2x
        let fit = LinearFit::fit(&[(1.0, 2.0), (2.0, 4.0), (3.0, 6.0)]).unwrap();
        assert!((fit.slope - 2.0).abs() < 1e-12);
        assert!(fit.intercept.abs() < 1e-12);
    }

    #[test]
    fn fit_line_with_intercept() {
        // y = 2 + 3x on x = [0,1,2]
        let fit = LinearFit::fit(&[(0.0, 2.0), (1.0, 5.0), (2.0, 8.0)]).unwrap();
        assert!((fit.slope - 3.0).abs() < 1e-12);
        assert!((fit.intercept - 2.0).abs() < 1e-12);
    }

    #[test]
    fn fit_noisy_data_minimizes_residuals() {
        let points = [(1.0, 1.1), (2.0, 1.9), (3.0, 3.2), (4.0, 3.8)];
        let fit = LinearFit::fit(&points).unwrap();

        // Perturbing either coefficient must not lower the sum of squared
        // residuals (the defining property of the least-squares solution).
        let ssr = |slope: f64, intercept: f64| {
            points
                .iter()
                .map(|&(x, y)| {
                    let r = y - (slope * x + intercept);
                    r * r
                })
                .sum::<f64>()
        };
        let best = ssr(fit.slope, fit.intercept);
        for delta in [-0.01, 0.01] {
            assert!(best <= ssr(fit.slope + delta, fit.intercept) + 1e-12);
            assert!(best <= ssr(fit.slope, fit.intercept + delta) + 1e-12);
        }
    }

    #[test]
    fn fit_requires_two_points() {
        assert!(LinearFit::fit(&[]).is_none());
        assert!(LinearFit::fit(&[(5.0, 5.0)]).is_none());
    }

    #[test]
    fn fit_is_order_independent() {
        let a = LinearFit::fit(&[(1.0, 2.0), (4.0, 3.0), (2.0, 7.0)]).unwrap();
        let b = LinearFit::fit(&[(4.0, 3.0), (2.0, 7.0), (1.0, 2.0)]).unwrap();
        assert!((a.slope - b.slope).abs() < 1e-12);
        assert!((a.intercept - b.intercept).abs() < 1e-12);
    }

    #[test]
    fn fit_vertical_line_is_not_finite() {
        // All x equal: the denominator is zero and the division is not
        // guarded, matching the closed-form formulas exactly.
        let fit = LinearFit::fit(&[(2.0, 1.0), (2.0, 3.0), (2.0, 5.0)]).unwrap();
        assert!(!fit.is_finite());
    }

    #[test]
    fn predict_evaluates_line() {
        let fit = LinearFit {
            slope: 2.0,
            intercept: 1.0,
        };
        assert!((fit.predict(3.0) - 7.0).abs() < 1e-12);
        assert!((fit.predict(-1.0) + 1.0).abs() < 1e-12);
    }
}
