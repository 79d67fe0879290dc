use thiserror::Error;

/// Configuration for the genetic solver.
///
/// Defaults follow the reference fit: a population of 200 evolved with a
/// fixed seed of 1. Construct with struct update syntax:
///
/// ```
/// use epifit_solvers::optimization::genetic::Config;
///
/// let config = Config {
///     population_size: 50,
///     max_generations: 80,
///     ..Config::default()
/// };
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    /// Number of candidates per generation.
    pub population_size: usize,

    /// Generation limit; reaching it is a normal outcome.
    pub max_generations: usize,

    /// Probability that two parents are blended rather than the first
    /// parent cloned.
    pub crossover_rate: f64,

    /// Per-gene probability of mutation.
    pub mutation_rate: f64,

    /// Mutation step size as a fraction of the variable's bound width.
    pub mutation_scale: f64,

    /// Number of candidates drawn per tournament selection.
    pub tournament_size: usize,

    /// Number of best candidates carried over unchanged each generation.
    pub elite_count: usize,

    /// Objective value at or below which the solver reports convergence.
    pub objective_tol: f64,

    /// Seed for the solver's random number generator.
    pub seed: u64,
}

/// Errors that can occur when validating a genetic solver config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("population_size must be at least 2")]
    PopulationSize,

    #[error("crossover_rate must lie in [0, 1]")]
    CrossoverRate,

    #[error("mutation_rate must lie in [0, 1]")]
    MutationRate,

    #[error("mutation_scale must be finite and non-negative")]
    MutationScale,

    #[error("tournament_size must lie in 1..=population_size")]
    TournamentSize,

    #[error("elite_count must be less than population_size")]
    EliteCount,

    #[error("objective_tol must be finite and non-negative")]
    ObjectiveTol,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            population_size: 200,
            max_generations: 100,
            crossover_rate: 0.9,
            mutation_rate: 0.1,
            mutation_scale: 0.1,
            tournament_size: 2,
            elite_count: 1,
            objective_tol: 0.0,
            seed: 1,
        }
    }
}

impl Config {
    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if any field falls outside its documented range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.population_size < 2 {
            return Err(ConfigError::PopulationSize);
        }
        if !(0.0..=1.0).contains(&self.crossover_rate) {
            return Err(ConfigError::CrossoverRate);
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(ConfigError::MutationRate);
        }
        if !self.mutation_scale.is_finite() || self.mutation_scale < 0.0 {
            return Err(ConfigError::MutationScale);
        }
        if self.tournament_size < 1 || self.tournament_size > self.population_size {
            return Err(ConfigError::TournamentSize);
        }
        if self.elite_count >= self.population_size {
            return Err(ConfigError::EliteCount);
        }
        if !self.objective_tol.is_finite() || self.objective_tol < 0.0 {
            return Err(ConfigError::ObjectiveTol);
        }
        Ok(())
    }
}
