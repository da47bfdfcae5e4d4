use fx_parser::parser::{binary::Binary, token::op::BinOpKind};
use crate::{ctxt::Ctxt, error::Error, eval::Eval};

impl Eval for Binary {
    fn eval(&self, ctxt: &mut Ctxt) -> Result<f64, Error> {
        let left = self.lhs.eval(ctxt)?;
        let right = self.rhs.eval(ctxt)?;

        // division by zero and exponentiation outside the real domain follow IEEE-754; the
        // sampling boundary treats the resulting non-finite values as undefined
        Ok(match self.op.kind {
            BinOpKind::Exp => left.powf(right),
            BinOpKind::Mul => left * right,
            BinOpKind::Div => left / right,
            BinOpKind::Add => left + right,
            BinOpKind::Sub => left - right,
        })
    }
}
