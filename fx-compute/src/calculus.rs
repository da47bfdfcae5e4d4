//! Numerical differentiation and integration, built on repeated evaluation of an expression in
//! terms of `x`.

use fx_parser::parser::expr::Expr;
use crate::{ctxt::Ctxt, eval::Eval};

/// The step size used by the central difference formula in [`derivative`].
pub const DERIVATIVE_STEP: f64 = 1e-4;

/// The default number of sub-intervals used by [`integral`].
pub const DEFAULT_INTEGRAL_STEPS: usize = 1000;

/// Evaluates the expression at the given value of `x`, returning `None` if the expression is
/// undefined there.
///
/// This is the boundary where every kind of failure collapses into a single "undefined" marker:
/// evaluation errors (unknown names, wrong arity) and non-finite results are both `None`. Note
/// that only the *final* value is checked for finiteness, so intermediate non-finite values may
/// still cancel out (`1/(1/0)` evaluates to `0`).
pub fn eval_at(expr: &Expr, ctxt: &mut Ctxt, x: f64) -> Option<f64> {
    ctxt.add_var("x", x);
    match expr.eval(ctxt) {
        Ok(value) if value.is_finite() => Some(value),
        _ => None,
    }
}

/// Approximates the derivative of the expression at the given value of `x` using the central
/// difference formula.
///
/// The central difference has second-order error `O(h^2)`, compared to first-order for a
/// forward or backward difference, at the cost of one extra evaluation. If the expression is
/// undefined at either neighboring sample, the derivative is undefined.
pub fn derivative(expr: &Expr, ctxt: &mut Ctxt, x: f64) -> Option<f64> {
    let ahead = eval_at(expr, ctxt, x + DERIVATIVE_STEP)?;
    let behind = eval_at(expr, ctxt, x - DERIVATIVE_STEP)?;
    Some((ahead - behind) / (2.0 * DERIVATIVE_STEP))
}

/// Approximates the definite integral of the expression over `[lower, upper]` using the composite
/// trapezoidal rule with the given number of sub-intervals.
///
/// If the expression is undefined at any sampled point, that sample contributes NaN and the total
/// is NaN; callers must treat a non-finite total as an undefined integral. Accuracy near a
/// singularity is a known, accepted limitation. There is no adaptive refinement.
pub fn integral(expr: &Expr, ctxt: &mut Ctxt, lower: f64, upper: f64, steps: usize) -> f64 {
    debug_assert!(steps > 0, "the integral needs at least one sub-interval");
    if lower == upper {
        return 0.0;
    }

    let sample = |ctxt: &mut Ctxt, x: f64| eval_at(expr, ctxt, x).unwrap_or(f64::NAN);

    let h = (upper - lower) / steps as f64;
    let mut sum = 0.5 * (sample(ctxt, lower) + sample(ctxt, upper));
    for i in 1..steps {
        sum += sample(ctxt, lower + i as f64 * h);
    }
    h * sum
}

#[cfg(test)]
mod tests {
    use assert_float_eq::assert_float_absolute_eq;
    use fx_parser::parser::Parser;
    use super::*;

    fn parse(input: &str) -> Expr {
        Parser::new(input).try_parse_full::<Expr>().unwrap()
    }

    #[test]
    fn eval_at_binds_x() {
        let expr = parse("x^2 + 1");
        let mut ctxt = Ctxt::default();
        assert_eq!(eval_at(&expr, &mut ctxt, 3.0), Some(10.0));
        assert_eq!(eval_at(&expr, &mut ctxt, -3.0), Some(10.0));
    }

    #[test]
    fn eval_at_undefined() {
        let expr = parse("sqrt(x)");
        let mut ctxt = Ctxt::default();
        assert_eq!(eval_at(&expr, &mut ctxt, -1.0), None);

        let expr = parse("1/x");
        assert_eq!(eval_at(&expr, &mut ctxt, 0.0), None);
    }

    #[test]
    fn eval_at_is_pure() {
        let expr = parse("sin(x) * x");
        let mut ctxt = Ctxt::default();
        assert_eq!(eval_at(&expr, &mut ctxt, 1.25), eval_at(&expr, &mut ctxt, 1.25));
    }

    #[test]
    fn derivative_of_square() {
        let expr = parse("x^2");
        let mut ctxt = Ctxt::default();
        assert_float_absolute_eq!(derivative(&expr, &mut ctxt, 3.0).unwrap(), 6.0, 1e-2);
    }

    #[test]
    fn derivative_of_sine() {
        let expr = parse("sin(x)");
        let mut ctxt = Ctxt::default();
        assert_float_absolute_eq!(derivative(&expr, &mut ctxt, 0.0).unwrap(), 1.0, 1e-6);
    }

    #[test]
    fn derivative_undefined_near_domain_edge() {
        // sqrt is undefined at x - h, so the central difference cannot be formed
        let expr = parse("sqrt(x)");
        let mut ctxt = Ctxt::default();
        assert_eq!(derivative(&expr, &mut ctxt, 0.0), None);
    }

    #[test]
    fn integral_of_identity() {
        let expr = parse("x");
        let mut ctxt = Ctxt::default();
        assert_float_absolute_eq!(integral(&expr, &mut ctxt, 0.0, 1.0, 1000), 0.5, 1e-6);
    }

    #[test]
    fn integral_of_sine() {
        let expr = parse("sin(x)");
        let mut ctxt = Ctxt::default();
        let result = integral(&expr, &mut ctxt, 0.0, std::f64::consts::PI, 1000);
        assert_float_absolute_eq!(result, 2.0, 1e-4);
    }

    #[test]
    fn integral_of_empty_range() {
        let expr = parse("x");
        let mut ctxt = Ctxt::default();
        assert_eq!(integral(&expr, &mut ctxt, 5.0, 5.0, 1), 0.0);
        assert_eq!(integral(&expr, &mut ctxt, 5.0, 5.0, 1000), 0.0);
    }

    #[test]
    fn integral_reversed_bounds() {
        let expr = parse("x");
        let mut ctxt = Ctxt::default();
        assert_float_absolute_eq!(integral(&expr, &mut ctxt, 1.0, 0.0, 1000), -0.5, 1e-6);
    }

    #[test]
    fn integral_with_undefined_samples() {
        // sqrt is undefined over half the range; those samples contribute NaN to the total
        // rather than being silently skipped
        let expr = parse("sqrt(x)");
        let mut ctxt = Ctxt::default();
        assert!(integral(&expr, &mut ctxt, -1.0, 1.0, 1000).is_nan());
    }
}
