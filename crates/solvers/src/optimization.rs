//! Solvers for optimization problems — minimizing an objective.
//!
//! An [`OptimizationProblem`] maps solver variables `x: [f64; N]` to model
//! inputs, calls the model, and extracts a scalar objective. Solvers in this
//! module search for the `x` that minimizes that objective.
//!
//! # Solvers
//!
//! - [`genetic`] — population-based stochastic search over a bounded box,
//!   suited to rough or plateaued objectives where gradients are useless
//!
//! [`OptimizationProblem`]: epifit_core::OptimizationProblem

mod evaluate;

pub use evaluate::{EvalError, EvaluateResult, Evaluation, evaluate};

pub mod genetic;
