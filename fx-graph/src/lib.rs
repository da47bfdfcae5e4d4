//! The plotting data layer of the grapher.
//!
//! This crate turns raw user input into the data a renderer needs: [`AnalyzedExpr::parse`]
//! normalizes and classifies the input (plain expression, `integrate(...)`, or
//! `derivative(...)`), and the sampling functions in [`eval`] and [`features`] produce curve
//! samples, shaded-region samples, scalar integrals, and root/extremum annotations over a view
//! domain.
//!
//! Everything here is synchronous and pure per call: each sweep builds its own evaluation
//! context, runs to completion, and leaves no state behind, so a front end can simply re-run the
//! pipeline whenever the view domain changes.

pub mod analyzed;
pub mod eval;
pub mod features;
pub mod point;

pub use analyzed::{AnalyzedExpr, FunctionKind};
pub use features::FeatureSet;
pub use point::GraphPoint;
