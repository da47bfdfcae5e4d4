use fx_parser::parser::paren::Paren;
use crate::{ctxt::Ctxt, error::Error, eval::Eval};

impl Eval for Paren {
    fn eval(&self, ctxt: &mut Ctxt) -> Result<f64, Error> {
        self.expr.eval(ctxt)
    }
}
