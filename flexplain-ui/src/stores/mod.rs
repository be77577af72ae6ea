//! Store types for explainer state
//!
//! The explainer owns a single store; renderers receive it as a `ReadStore`
//! and dispatch changes back through event handlers.

pub mod explainer;

pub use explainer::*;
