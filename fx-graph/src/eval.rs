use fx_compute::{
    calculus::{self, DEFAULT_INTEGRAL_STEPS},
    ctxt::Ctxt,
};
use fx_parser::parser::expr::Expr;
use super::{
    analyzed::{AnalyzedExpr, FunctionKind},
    features::{find_features, FeatureSet},
};

/// The number of equal steps used to sample a curve across the view domain.
pub const CURVE_SAMPLES: usize = 500;

/// The number of equal steps used to sample the shaded region of an integral.
pub const AREA_SAMPLES: usize = 200;

/// A sampled point of a curve. The y-value is `None` wherever the expression is undefined, so a
/// renderer can break the line there.
pub type Sample = (f64, Option<f64>);

/// Samples the expression across the view domain.
pub fn curve_points(expr: &Expr, domain: (f64, f64)) -> Vec<Sample> {
    sweep(domain, CURVE_SAMPLES, |ctxt, x| calculus::eval_at(expr, ctxt, x))
}

/// Samples the estimated derivative of the expression across the view domain.
pub fn derivative_points(expr: &Expr, domain: (f64, f64)) -> Vec<Sample> {
    sweep(domain, CURVE_SAMPLES, |ctxt, x| calculus::derivative(expr, ctxt, x))
}

/// Samples the expression across the shaded region of an integral.
pub fn area_points(expr: &Expr, lower: f64, upper: f64) -> Vec<Sample> {
    sweep((lower, upper), AREA_SAMPLES, |ctxt, x| calculus::eval_at(expr, ctxt, x))
}

/// Evaluates a function of `x` at `steps + 1` equally spaced points across the domain, inclusive
/// of both endpoints.
fn sweep(
    domain: (f64, f64),
    steps: usize,
    mut f: impl FnMut(&mut Ctxt, f64) -> Option<f64>,
) -> Vec<Sample> {
    let mut ctxt = Ctxt::default();
    let step = (domain.1 - domain.0) / steps as f64;
    (0..=steps)
        .map(|i| {
            let x = domain.0 + i as f64 * step;
            (x, f(&mut ctxt, x))
        })
        .collect()
}

impl AnalyzedExpr {
    /// Returns the samples of the curve to draw for this expression across the given view domain.
    ///
    /// For a plain or integral expression this is the inner expression itself; for a derivative
    /// expression it is the estimated derivative. An invalid expression yields the full sweep
    /// with every sample undefined.
    pub fn points(&self, domain: (f64, f64)) -> Vec<Sample> {
        let Some(expr) = self.expr() else {
            return sweep(domain, CURVE_SAMPLES, |_, _| None);
        };
        match self.kind {
            FunctionKind::Plain | FunctionKind::Integral { .. } => curve_points(expr, domain),
            FunctionKind::Derivative => derivative_points(expr, domain),
        }
    }

    /// Returns the points of interest to annotate over the given view domain.
    ///
    /// Only plain expressions are annotated, matching what a grapher displays: integral and
    /// derivative curves are derived data.
    pub fn features(&self, domain: (f64, f64)) -> FeatureSet {
        match (self.kind, self.expr()) {
            (FunctionKind::Plain, Some(expr)) => find_features(expr, domain),
            _ => FeatureSet::default(),
        }
    }

    /// Returns the approximate value of the integral, if this is an integral expression.
    ///
    /// A non-finite value means the integral is undefined somewhere in its range.
    pub fn integral_value(&self) -> Option<f64> {
        match (self.kind, self.expr()) {
            (FunctionKind::Integral { lower, upper }, Some(expr)) => {
                let mut ctxt = Ctxt::default();
                Some(calculus::integral(expr, &mut ctxt, lower, upper, DEFAULT_INTEGRAL_STEPS))
            },
            _ => None,
        }
    }

    /// Returns the samples of the shaded region, if this is an integral expression.
    pub fn area(&self) -> Option<Vec<Sample>> {
        match (self.kind, self.expr()) {
            (FunctionKind::Integral { lower, upper }, Some(expr)) => {
                Some(area_points(expr, lower, upper))
            },
            _ => None,
        }
    }
}
