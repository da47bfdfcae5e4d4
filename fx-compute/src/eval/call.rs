use fx_parser::parser::call::Call;
use crate::{
    ctxt::Ctxt,
    error::{
        kind::{MissingArgument, TooManyArguments, UndefinedFunction},
        Error,
    },
    eval::Eval,
    funcs,
};

impl Eval for Call {
    fn eval(&self, ctxt: &mut Ctxt) -> Result<f64, Error> {
        let name = self.name.name.as_str();
        let Some(func) = funcs::resolve(name) else {
            return Err(Error::new(vec![self.name.span.clone()], UndefinedFunction {
                name: name.to_string(),
                suggestions: funcs::suggestions_for(name),
            }));
        };

        match self.args.as_slice() {
            [arg] => Ok(func(arg.eval(ctxt)?)),
            [] => Err(Error::new(self.outer_span().to_vec(), MissingArgument {
                name: name.to_string(),
                expected: 1,
                given: 0,
            })),
            args => Err(Error::new(self.outer_span().to_vec(), TooManyArguments {
                name: name.to_string(),
                expected: 1,
                given: args.len(),
            })),
        }
    }
}
