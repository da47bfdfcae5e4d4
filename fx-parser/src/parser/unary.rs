use std::{fmt, ops::Range};
use crate::{
    parser::{
        error::Error,
        expr::{Expr, Primary},
        token::op::UnaryOp,
        Parse,
        Parser,
    },
    return_if_ok,
};

/// A unary expression, such as `-1`. Unary expressions can include nested expressions.
///
/// The only unary operator in the grapher syntax is negation, which binds tighter than any binary
/// operator. The operand of a negation is therefore another unary expression or a primary
/// expression, never a bare binary expression: `-x^2` parses as `(-x)^2`.
#[derive(Debug, Clone, PartialEq)]
pub struct Unary {
    /// The operand of the unary expression.
    pub operand: Box<Expr>,

    /// The operator of the unary expression.
    pub op: UnaryOp,

    /// The region of the source code that this unary expression was parsed from.
    pub span: Range<usize>,
}

impl Unary {
    /// Returns the span of the unary expression.
    pub fn span(&self) -> Range<usize> {
        self.span.clone()
    }

    /// Parses a unary expression, or lower precedence expressions.
    pub fn parse_or_lower(input: &mut Parser) -> Result<Expr, Error> {
        let _ = return_if_ok!(input.try_parse::<Unary>().map(Expr::Unary));
        input.try_parse::<Primary>().map(Into::into)
    }
}

impl Parse for Unary {
    fn parse(input: &mut Parser) -> Result<Self, Error> {
        let op = input.try_parse::<UnaryOp>()?;
        let operand = Self::parse_or_lower(input)?;
        let span = op.span.start..operand.span().end;
        Ok(Self {
            operand: Box::new(operand),
            op,
            span,
        })
    }
}

impl fmt::Display for Unary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "-{}", self.operand)
    }
}
