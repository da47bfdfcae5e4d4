use fx_parser::parser::expr::Expr;
use crate::{ctxt::Ctxt, error::Error, eval::Eval};

impl Eval for Expr {
    fn eval(&self, ctxt: &mut Ctxt) -> Result<f64, Error> {
        match self {
            Expr::Literal(literal) => literal.eval(ctxt),
            Expr::Paren(paren) => paren.eval(ctxt),
            Expr::Call(call) => call.eval(ctxt),
            Expr::Unary(unary) => unary.eval(ctxt),
            Expr::Binary(binary) => binary.eval(ctxt),
        }
    }
}
