use fx_compute::{calculus, ctxt::Ctxt};
use fx_parser::parser::expr::Expr;
use super::point::GraphPoint;

/// The number of equal sub-intervals swept when searching for points of interest.
pub const FEATURE_SAMPLES: usize = 1000;

/// The points of interest found for an expression over a view domain. Derived data: recomputed
/// from scratch whenever the expression or the view domain changes, never persisted.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FeatureSet {
    /// Points where the curve crosses the x-axis, reported with `y = 0`.
    pub roots: Vec<GraphPoint<f64>>,

    /// Points where the estimated derivative changes sign, reported with the curve's value at the
    /// bracketing sub-interval's midpoint.
    pub extrema: Vec<GraphPoint<f64>>,
}

/// Sweeps the expression across the domain, bracketing sign changes of the function (roots) and
/// of its estimated derivative (extrema).
///
/// This is a bracketing heuristic, not a root-refining method: each point of interest is
/// reported at the midpoint of the sub-interval that brackets it, so precision is bounded by the
/// sample density (domain width / [`FEATURE_SAMPLES`]). A sign flip caused by a discontinuity
/// (e.g. the asymptotes of `tan`) is indistinguishable from a real root under bracketing and is
/// reported as one.
///
/// A sample pair is only compared when both samples are defined; defined samples on opposite
/// sides of an undefined gap are never compared with each other, so no feature is reported
/// spanning a region where the expression is undefined.
pub fn find_features(expr: &Expr, domain: (f64, f64)) -> FeatureSet {
    let mut features = FeatureSet::default();
    let (x_min, x_max) = domain;
    if x_max <= x_min {
        return features;
    }

    let mut ctxt = Ctxt::default();
    let step = (x_max - x_min) / FEATURE_SAMPLES as f64;

    let mut prev_y = calculus::eval_at(expr, &mut ctxt, x_min);
    let mut prev_dy = calculus::derivative(expr, &mut ctxt, x_min);

    // the grid is advanced by a running sum rather than an index multiply: an index-aligned grid
    // can land on a root or extremum exactly, and an exactly-zero sample defeats the strict
    // sign-change test below
    let mut x = x_min + step;
    for _ in 0..FEATURE_SAMPLES {
        if x > x_max {
            break;
        }
        let y = calculus::eval_at(expr, &mut ctxt, x);
        let dy = calculus::derivative(expr, &mut ctxt, x);
        let midpoint = x - step / 2.0;

        if let (Some(a), Some(b)) = (prev_y, y) {
            if a * b < 0.0 {
                features.roots.push(GraphPoint(midpoint, 0.0));
            }
        }
        if let (Some(a), Some(b)) = (prev_dy, dy) {
            if a * b < 0.0 {
                if let Some(mid_y) = calculus::eval_at(expr, &mut ctxt, midpoint) {
                    features.extrema.push(GraphPoint(midpoint, mid_y));
                }
            }
        }

        prev_y = y;
        prev_dy = dy;
        x += step;
    }

    features
}
