//! The built-in unary functions available to expressions.
//!
//! Each function is implemented as a unit `struct` with an associated `eval_static` method, which
//! can be used to evaluate the function directly in Rust code. Runtime dispatch by name goes
//! through [`resolve`].
//!
//! All functions follow IEEE-754 semantics for inputs outside their mathematical domain
//! (`log(-1)` and `sqrt(-1)` are NaN); the caller decides what a non-finite result means.

use levenshtein::levenshtein;

/// Build the set of builtin functions, each taking a single input argument.
macro_rules! builtins {
    ($($name:literal $upname:ident; $func:expr),* $(,)?) => {
        $(
            #[derive(Debug)]
            pub struct $upname;

            impl $upname {
                pub fn eval_static(n: f64) -> f64 {
                    // NOTE: the closure call is contained within the macro, so we allow
                    // the clippy::redundant_closure_call lint
                    #[allow(clippy::redundant_closure_call)]
                    ($func)(n)
                }
            }
        )*

        /// The names of all builtin functions.
        pub const NAMES: &[&str] = &[$($name),*];

        /// Returns the builtin function with the given name, if it exists.
        pub fn resolve(name: &str) -> Option<fn(f64) -> f64> {
            match name {
                $($name => Some($upname::eval_static),)*
                _ => None,
            }
        }
    };
}

builtins! {
    "sin" Sin; f64::sin,
    "cos" Cos; f64::cos,
    "tan" Tan; f64::tan,
    "log" Log; f64::ln,
    "sqrt" Sqrt; f64::sqrt,
    "abs" Abs; f64::abs,
}

/// Returns all builtin functions with a name similar to the given name.
pub fn suggestions_for(name: &str) -> Vec<String> {
    NAMES
        .iter()
        .filter(|n| levenshtein(n, name) < 2)
        .map(|n| n.to_string())
        .collect()
}
