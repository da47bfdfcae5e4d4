use fx_error::Error;
use fx_parser::parser::{
    call::Call,
    expr::Expr,
    literal::Literal,
    token::op::UnaryOpKind,
    unary::Unary,
    Parser,
};
use std::fmt;

/// How an analyzed expression should be presented in a graph.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FunctionKind {
    /// Graph the expression itself, annotated with its points of interest.
    Plain,

    /// Graph the inner expression, shade the region between the given bounds, and report the
    /// approximate area.
    Integral {
        /// The lower bound of the shaded region.
        lower: f64,

        /// The upper bound of the shaded region.
        upper: f64,
    },

    /// Graph the estimated derivative of the inner expression.
    Derivative,
}

/// An expression that has been classified and is ready to be sampled for drawing.
///
/// Classification never fails: input that does not match a directive form, including malformed
/// directives like `integrate(x, 1)`, is treated as a plain expression, whose validity is then
/// decided by parsing and evaluation. The inner expression text is kept verbatim (as a slice of
/// the normalized input), so the [`Display`] implementation reproduces it unchanged.
#[derive(Debug)]
pub struct AnalyzedExpr {
    /// The inner expression text, taken verbatim from the normalized input.
    source: String,

    /// The parse result of the inner expression.
    expr: Result<Expr, Error>,

    /// How the expression should be presented.
    pub kind: FunctionKind,
}

impl AnalyzedExpr {
    /// Normalizes, parses and classifies the given input.
    ///
    /// The input is trimmed and lower-cased, and one leading `f(x) =` header is stripped, before
    /// classification.
    pub fn parse(input: &str) -> Self {
        let text = strip_header(input.trim().to_lowercase().as_str()).to_string();
        let parsed = Parser::new(&text).try_parse_full::<Expr>();

        if let Ok(Expr::Call(call)) = &parsed {
            if let Some(analyzed) = classify_directive(&text, call) {
                return analyzed;
            }
        }

        Self {
            source: text,
            expr: parsed,
            kind: FunctionKind::Plain,
        }
    }

    /// The inner expression text: the whole normalized input for a plain expression, or the first
    /// directive argument for a directive.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// The parsed inner expression, if it is valid.
    pub fn expr(&self) -> Option<&Expr> {
        self.expr.as_ref().ok()
    }

    /// The parse error of the inner expression, if it is invalid.
    pub fn error(&self) -> Option<&Error> {
        self.expr.as_ref().err()
    }

    /// Reports whether the inner expression is syntactically valid, for front ends that want to
    /// reject input before adding it to the function list.
    pub fn check(&self) -> Result<(), &Error> {
        match &self.expr {
            Ok(_) => Ok(()),
            Err(err) => Err(err),
        }
    }
}

impl fmt::Display for AnalyzedExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            FunctionKind::Plain => write!(f, "{}", self.source),
            FunctionKind::Integral { lower, upper } => {
                write!(f, "integrate({}, {}, {})", self.source, lower, upper)
            },
            FunctionKind::Derivative => write!(f, "derivative({})", self.source),
        }
    }
}

/// Strips one leading `f(x) =` header (with optional whitespace around the `=`) from the input.
fn strip_header(text: &str) -> &str {
    let Some(rest) = text.strip_prefix("f(x)") else {
        return text;
    };
    match rest.trim_start().strip_prefix('=') {
        Some(body) => body.trim_start(),
        None => text,
    }
}

/// Classifies a whole-input call as a directive, if its shape matches one.
fn classify_directive(text: &str, call: &Call) -> Option<AnalyzedExpr> {
    let kind = match (call.name.name.as_str(), call.args.as_slice()) {
        ("integrate", [_, lower, upper]) => FunctionKind::Integral {
            lower: numeric_literal(lower)?,
            upper: numeric_literal(upper)?,
        },
        ("derivative", [_]) => FunctionKind::Derivative,
        _ => return None,
    };

    let inner = &call.args[0];
    Some(AnalyzedExpr {
        source: text[inner.span()].to_string(),
        expr: Ok(inner.clone()),
        kind,
    })
}

/// Extracts the value of a directive bound: a numeric literal with an optional leading minus.
/// Anything else (a variable, an arithmetic expression) disqualifies the directive.
fn numeric_literal(expr: &Expr) -> Option<f64> {
    match expr {
        Expr::Literal(Literal::Number(num)) => Some(num.value),
        Expr::Unary(Unary { operand, op, .. }) if op.kind == UnaryOpKind::Neg => {
            match operand.as_ref() {
                Expr::Literal(Literal::Number(num)) => Some(-num.value),
                _ => None,
            }
        },
        _ => None,
    }
}
