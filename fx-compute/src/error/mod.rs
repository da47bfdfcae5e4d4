//! Evaluation errors, reported through the shared [`Error`] type.

pub mod kind;

pub use fx_error::Error;
