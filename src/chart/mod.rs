//! Chart framing - axis ranges and the regression overlay segment.
//!
//! This module computes everything the chart renderer needs ahead of the
//! draw call: the padded axis bounds that keep every point visible, and
//! the two endpoints of the regression segment. Rendering itself lives in
//! [`ui`] and only reads the computed state.

pub mod ui;

use crate::regression::LinearFit;

/// Computed axis bounds and regression segment for one render pass.
///
/// Bounds are always finite with `x_bounds[0] <= x_bounds[1]` and
/// `y_bounds[0] <= y_bounds[1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartFrame {
    /// Domain axis bounds, padded.
    pub x_bounds: [f64; 2],
    /// Value axis bounds, padded.
    pub y_bounds: [f64; 2],
    /// Endpoints of the drawn regression segment, if a line is drawn.
    /// The line is never extended past these two points.
    pub line: Option<[(f64, f64); 2]>,
}

impl ChartFrame {
    /// Frame the given points and optional fit with padding fraction `p`.
    ///
    /// Returns `None` for an empty point list; the caller clears the
    /// chart. The padding is applied in two independent stages:
    ///
    /// 1. the fitted line is extrapolated over the x-range widened by
    ///    `p` on each side, and the y-extent grows to cover the two
    ///    endpoint values;
    /// 2. the final axis box pads both (possibly expanded) spans by `p`
    ///    again.
    ///
    /// A span of zero width is replaced by `max(|bound|, 1.0)` before
    /// padding, separately per axis, so a single point or a flat line
    /// still gets a visible margin.
    ///
    /// A non-finite fit (all x equal) contributes nothing: no segment is
    /// recorded and the y-extent is left alone, so the scatter still
    /// renders while the degenerate line is suppressed.
    pub fn compute(points: &[(f64, f64)], fit: Option<LinearFit>, p: f64) -> Option<Self> {
        if points.is_empty() {
            return None;
        }

        let (mut min_x, mut max_x, mut min_y, mut max_y) = points.iter().fold(
            (
                f64::INFINITY,
                f64::NEG_INFINITY,
                f64::INFINITY,
                f64::NEG_INFINITY,
            ),
            |(min_x, max_x, min_y, max_y), &(x, y)| {
                (min_x.min(x), max_x.max(x), min_y.min(y), max_y.max(y))
            },
        );

        let mut line = None;
        if let Some(fit) = fit {
            if points.len() >= 2 && fit.is_finite() {
                let range_x = span_or_unit(min_x, max_x);
                let pad_x = range_x * p;
                let start = (min_x - pad_x, fit.predict(min_x - pad_x));
                let end = (max_x + pad_x, fit.predict(max_x + pad_x));

                min_y = min_y.min(start.1).min(end.1);
                max_y = max_y.max(start.1).max(end.1);
                line = Some([start, end]);
            }
        }

        let pad_x = span_or_unit(min_x, max_x) * p;
        let pad_y = span_or_unit(min_y, max_y) * p;

        Some(Self {
            x_bounds: [min_x - pad_x, max_x + pad_x],
            y_bounds: [min_y - pad_y, max_y + pad_y],
            line,
        })
    }
}

/// Width of `[min, max]`, substituting `max(|min|, 1.0)` when it is zero.
fn span_or_unit(min: f64, max: f64) -> f64 {
    let span = max - min;
    if span == 0.0 {
        min.abs().max(1.0)
    } else {
        span
    }
}

/// Snapshot of everything the chart renderer reads.
///
/// Recomputed from scratch after every table mutation; nothing here is
/// updated incrementally.
#[derive(Debug, Clone, Default)]
pub struct ChartState {
    /// Valid points, in slot order.
    pub points: Vec<(f64, f64)>,
    /// Fit over those points, when defined.
    pub fit: Option<LinearFit>,
    /// Axis bounds and segment, when there is anything to draw.
    pub frame: Option<ChartFrame>,
}

impl ChartState {
    /// Recompute the snapshot from the current valid points.
    pub fn refresh(&mut self, points: Vec<(f64, f64)>, padding: f64) {
        let fit = LinearFit::fit(&points);
        self.frame = ChartFrame::compute(&points, fit, padding);
        self.fit = fit;
        self.points = points;
    }
}
