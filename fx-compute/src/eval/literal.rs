use fx_parser::parser::literal::Literal;
use crate::{
    ctxt::Ctxt,
    error::{kind::UndefinedVariable, Error},
    eval::Eval,
};

impl Eval for Literal {
    fn eval(&self, ctxt: &mut Ctxt) -> Result<f64, Error> {
        match self {
            Literal::Number(num) => Ok(num.value),
            Literal::Symbol(sym) => ctxt.get_var(sym.name.as_str())
                .ok_or_else(|| Error::new(vec![sym.span.clone()], UndefinedVariable {
                    name: sym.name.clone(),
                })),
        }
    }
}
