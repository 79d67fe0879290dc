use thiserror::Error;

use epifit_core::OptimizationProblem;

use crate::sir::{Compartments, InvalidParameter, Parameters};

use super::ObservedSeries;

/// Errors that can occur while defining or evaluating a trajectory fit.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum FitError {
    #[error("observed series covers {actual} days but the fit expects {expected}")]
    ShapeMismatch { expected: usize, actual: usize },

    #[error(transparent)]
    Parameter(#[from] InvalidParameter),
}

/// Fits candidate `(beta, gamma)` pairs to an observed trajectory.
///
/// The remaining simulation inputs — population, initial infected count, and
/// day count — are fixed at construction; only the two rates vary during the
/// search. The objective is the mean over all days of
/// `|I_observed - I_simulated| + |R_observed - R_simulated|`.
#[derive(Debug, Clone)]
pub struct TrajectoryFitProblem {
    observed: ObservedSeries,
    population: u32,
    initial_infected: u32,
    num_of_days: usize,
}

impl TrajectoryFitProblem {
    /// Creates a fit problem against an observed trajectory.
    ///
    /// # Errors
    ///
    /// Returns [`FitError::ShapeMismatch`] if the observed series does not
    /// cover exactly `num_of_days` days.
    pub fn new(
        observed: ObservedSeries,
        population: u32,
        initial_infected: u32,
        num_of_days: usize,
    ) -> Result<Self, FitError> {
        if observed.len() != num_of_days {
            return Err(FitError::ShapeMismatch {
                expected: num_of_days,
                actual: observed.len(),
            });
        }

        Ok(Self {
            observed,
            population,
            initial_infected,
            num_of_days,
        })
    }

    /// Returns the observed trajectory being fit.
    #[must_use]
    pub fn observed(&self) -> &ObservedSeries {
        &self.observed
    }
}

impl OptimizationProblem<2> for TrajectoryFitProblem {
    type Input = Parameters;
    type Output = Vec<Compartments>;
    type Error = FitError;

    fn input(&self, x: &[f64; 2]) -> Result<Parameters, FitError> {
        let [beta, gamma] = *x;
        Ok(Parameters::new(
            self.population,
            self.initial_infected,
            beta,
            gamma,
            self.num_of_days,
        )?)
    }

    #[allow(clippy::cast_precision_loss)]
    fn objective(&self, _input: &Parameters, output: &Vec<Compartments>) -> Result<f64, FitError> {
        if output.len() != self.observed.len() {
            return Err(FitError::ShapeMismatch {
                expected: self.observed.len(),
                actual: output.len(),
            });
        }

        let total: f64 = self
            .observed
            .days()
            .iter()
            .zip(output)
            .map(|(obs, sim)| {
                (obs.infected - sim.infected as f64).abs()
                    + (obs.recovered - sim.recovered as f64).abs()
            })
            .sum();

        Ok(total / self.observed.len() as f64)
    }
}
