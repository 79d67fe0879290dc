//! Fitting a simulated SIR trajectory to an observed one.
//!
//! [`TrajectoryFitProblem`] implements [`OptimizationProblem<2>`]: the solver
//! variables are a candidate `(beta, gamma)` pair, the model input is a
//! validated [`Parameters`] value, and the objective is the mean absolute
//! error between the simulated and observed infected/recovered columns. A
//! bounded-box minimizer drives the problem through any [`Model`] producing
//! the simulated series.
//!
//! [`Model`]: epifit_core::Model
//! [`OptimizationProblem<2>`]: epifit_core::OptimizationProblem
//! [`Parameters`]: crate::sir::Parameters

mod observed;
mod problem;

pub use observed::{Observation, ObservedSeries};
pub use problem::{FitError, TrajectoryFitProblem};
