//! Genetic search for bounded multivariable minimization.
//!
//! # Algorithm
//!
//! The solver maintains a population of candidate points inside a bounded
//! box. Each generation it carries the best members over unchanged, fills
//! the rest of the population through tournament selection, arithmetic blend
//! crossover, and per-gene mutation clamped to the box, then re-evaluates.
//! The best point ever seen is tracked across generations and reported at
//! the end.
//!
//! # When to Use
//!
//! Genetic search is appropriate when:
//! - The objective is rough: plateaus, integer truncation, or many shallow
//!   local minima defeat bracketing and gradient methods
//! - Derivative information is unavailable
//! - Function evaluations are cheap enough to afford
//!   `population_size × generations` of them
//!
//! # Reproducibility
//!
//! All randomness flows from the RNG seeded with [`Config::seed`], so
//! identical inputs produce identical solutions. Swapping in a different
//! search algorithm behind the same [`minimize`] signature must preserve
//! this property.
//!
//! # Observer Events
//!
//! The solver emits one [`Event`] per generation, including generation 0
//! for the freshly initialized population. Each event carries the best point
//! so far and the population's mean objective. Observers can return
//! [`Action::StopEarly`] to halt and keep the best point found so far;
//! reaching the generation limit without converging is a normal outcome,
//! reported as [`Status::MaxGenerations`].

mod action;
mod bounds;
mod config;
mod error;
mod event;
mod point;
mod population;
mod solution;

#[cfg(test)]
mod tests;

pub use action::Action;
pub use bounds::{Bounds, BoundsError};
pub use config::{Config, ConfigError};
pub use error::Error;
pub use event::Event;
pub use point::Point;
pub use solution::{Solution, Status};

use epifit_core::{Model, Observer, OptimizationProblem};
use log::trace;
use rand::{SeedableRng, rngs::SmallRng};

use population::Population;

/// Finds the minimum of the objective using genetic search.
///
/// The observer receives an [`Event`] after each generation. See the
/// [module docs](self) for event timing and observer actions.
///
/// # Errors
///
/// Returns an error if the config is invalid or if the model or problem
/// fails during evaluation; engine-side failures propagate unmodified
/// inside [`Error::Model`] and [`Error::Problem`].
pub fn minimize<M, P, Obs, const N: usize>(
    model: &M,
    problem: &P,
    bounds: &Bounds<N>,
    config: &Config,
    mut observer: Obs,
) -> Result<Solution<M::Input, M::Output, N>, Error>
where
    M: Model,
    P: OptimizationProblem<N, Input = M::Input, Output = M::Output>,
    Obs: Observer<Event<N>, Action>,
{
    config.validate()?;

    let mut rng = SmallRng::seed_from_u64(config.seed);

    let (mut population, mut best) = Population::init(bounds, config, &mut rng, model, problem)?;

    if best.point().objective <= config.objective_tol {
        return Ok(best.into_solution(Status::Converged, 0));
    }

    let event = Event {
        generation: 0,
        best: best.point(),
        mean_objective: population.mean_objective(),
    };
    if let Some(Action::StopEarly) = observer.observe(&event) {
        return Ok(best.into_solution(Status::StoppedByObserver, 0));
    }

    for generation in 1..=config.max_generations {
        population.advance(bounds, config, &mut rng);

        if let Some(candidate) = population.evaluate_pending(model, problem)? {
            if candidate.point().objective < best.point().objective {
                best = candidate;
            }
        }

        trace!(
            "generation {generation}: best objective {}",
            best.point().objective
        );

        if best.point().objective <= config.objective_tol {
            return Ok(best.into_solution(Status::Converged, generation));
        }

        let event = Event {
            generation,
            best: best.point(),
            mean_objective: population.mean_objective(),
        };
        if let Some(Action::StopEarly) = observer.observe(&event) {
            return Ok(best.into_solution(Status::StoppedByObserver, generation));
        }
    }

    Ok(best.into_solution(Status::MaxGenerations, config.max_generations))
}

/// Finds the minimum of the objective without observer support.
///
/// This is a convenience wrapper around [`minimize`] that uses a no-op
/// observer.
///
/// # Errors
///
/// Returns an error if the config is invalid or if the model or problem
/// fails during evaluation.
pub fn minimize_unobserved<M, P, const N: usize>(
    model: &M,
    problem: &P,
    bounds: &Bounds<N>,
    config: &Config,
) -> Result<Solution<M::Input, M::Output, N>, Error>
where
    M: Model,
    P: OptimizationProblem<N, Input = M::Input, Output = M::Output>,
{
    minimize(model, problem, bounds, config, ())
}
