//! Numeric evaluation of parsed expressions, and the numerical-analysis routines built on top of
//! it.
//!
//! The entry point is the [`Eval`](eval::Eval) trait, which walks an abstract syntax tree from
//! [`fx_parser`] and produces an `f64` using IEEE-754 double-precision arithmetic throughout.
//! Structural problems (unknown names, wrong arity) surface as spanned errors; mathematically
//! undefined operations follow IEEE-754 and produce non-finite values, which the
//! [`calculus::eval_at`] boundary converts into the engine-wide "undefined here" marker.

pub mod calculus;
pub mod consts;
pub mod ctxt;
pub mod error;
pub mod eval;
pub mod funcs;
