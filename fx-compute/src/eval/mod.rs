mod binary;
mod call;
mod expr;
mod literal;
mod paren;
mod unary;

use super::{ctxt::Ctxt, error::Error};

/// Any type that can be evaluated to produce a value.
pub trait Eval {
    /// Evaluate the expression to produce a value, using the given context.
    fn eval(&self, ctxt: &mut Ctxt) -> Result<f64, Error>;

    /// Evaluate the expression to produce a value, using the default context.
    fn eval_default(&self) -> Result<f64, Error> {
        self.eval(&mut Default::default())
    }
}

/// Eval tests depend on the parser, so ensure that parser tests pass before running these.
#[cfg(test)]
mod tests {
    use assert_float_eq::assert_float_absolute_eq;
    use pretty_assertions::assert_eq;
    use crate::consts;
    use super::*;

    use fx_parser::parser::{expr::Expr, Parser};

    /// Parses the input and evaluates it with the default context.
    fn eval(input: &str) -> Result<f64, Error> {
        let mut parser = Parser::new(input);
        let expr = parser.try_parse_full::<Expr>().unwrap();
        expr.eval_default()
    }

    #[test]
    fn binary_expr() {
        assert_eq!(eval("1 + 2").unwrap(), 3.0);
    }

    #[test]
    fn binary_expr_2() {
        assert_eq!(eval("1 + 2 * 3").unwrap(), 7.0);
    }

    #[test]
    fn exponentiation() {
        assert_eq!(eval("2^3").unwrap(), 8.0);
    }

    #[test]
    fn exponentiation_right_associative() {
        // 2^(3^2), not (2^3)^2
        assert_eq!(eval("2^3^2").unwrap(), 512.0);
    }

    #[test]
    fn negation_binds_tighter_than_exponentiation() {
        assert_eq!(eval("-2^2").unwrap(), 4.0);
    }

    #[test]
    fn negative_exponent() {
        assert_eq!(eval("2^-1").unwrap(), 0.5);
    }

    #[test]
    fn parenthesized() {
        assert_eq!(eval("((1 + 9) / 5) * 3").unwrap(), 6.0);
    }

    #[test]
    fn constants() {
        assert_eq!(eval("pi").unwrap(), consts::PI);
        assert_eq!(eval("e").unwrap(), consts::E);
        assert_eq!(eval("PI").unwrap(), consts::PI);
    }

    #[test]
    fn builtin_functions() {
        assert_float_absolute_eq!(eval("sin(pi)").unwrap(), 0.0, 1e-12);
        assert_float_absolute_eq!(eval("cos(0)").unwrap(), 1.0, 1e-12);
        assert_float_absolute_eq!(eval("log(e)").unwrap(), 1.0, 1e-12);
        assert_eq!(eval("sqrt(16)").unwrap(), 4.0);
        assert_eq!(eval("abs(-3)").unwrap(), 3.0);
    }

    #[test]
    fn variable_binding() {
        let mut parser = Parser::new("x^2 + 1");
        let expr = parser.try_parse_full::<Expr>().unwrap();

        let mut ctxt = Ctxt::default();
        ctxt.add_var("x", 3.0);
        assert_eq!(expr.eval(&mut ctxt).unwrap(), 10.0);

        // rebinding the variable reuses the same context
        ctxt.add_var("x", -3.0);
        assert_eq!(expr.eval(&mut ctxt).unwrap(), 10.0);
    }

    #[test]
    fn domain_errors_are_ieee_754() {
        // mathematically undefined operations produce non-finite values, and it is the caller's
        // job to treat them as undefined
        assert!(eval("sqrt(-1)").unwrap().is_nan());
        assert!(eval("log(0 - 5)").unwrap().is_nan());
        assert!(eval("(0-8)^0.5").unwrap().is_nan());
        assert!(eval("1/0").unwrap().is_infinite());
    }

    #[test]
    fn undefined_variable() {
        assert!(eval("y + 1").is_err());
    }

    #[test]
    fn undefined_function() {
        assert!(eval("sine(1)").is_err());
    }

    #[test]
    fn wrong_arity() {
        assert!(eval("sin(1, 2)").is_err());
    }
}
