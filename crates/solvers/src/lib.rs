//! Search algorithms for the epifit workspace.
//!
//! [`optimization`] hosts solvers that minimize an objective defined by an
//! [`OptimizationProblem`] over a bounded box of solver variables.
//!
//! [`OptimizationProblem`]: epifit_core::OptimizationProblem

pub mod optimization;
