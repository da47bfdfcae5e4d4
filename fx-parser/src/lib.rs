//! Tokenizer and parser for the grapher's expression syntax.
//!
//! The syntax covers single-variable algebraic expressions: the arithmetic operators
//! `+ - * / ^`, numeric literals, parentheses, named constants, and unary function calls such as
//! `sin(x)`. Parsing produces a spanned abstract syntax tree; every node remembers the region of
//! the source code it was parsed from, so errors (and anything else that wants to point back at
//! the input) can highlight the exact offending text.

pub mod parser;
pub mod tokenizer;

/// Attempts to parse a value using the given expression, returning early from the enclosing
/// function if parsing succeeds. Otherwise, evaluates to the error for the caller to inspect or
/// discard.
#[macro_export]
macro_rules! return_if_ok {
    ($expr:expr) => {{
        match $expr {
            Ok(value) => return Ok(value),
            err => err,
        }
    }};
}
