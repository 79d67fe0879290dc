use thiserror::Error;

/// Parameters for a discrete-time SIR simulation.
///
/// Construct with [`Parameters::new`], which validates every field. A value
/// of this type always describes a runnable simulation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Parameters {
    population: u32,
    initial_infected: u32,
    transmission_rate: f64,
    recovery_rate: f64,
    num_of_days: usize,
}

/// Errors that can occur when validating SIR parameters.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum InvalidParameter {
    #[error("initial infected count must be at least 1")]
    InitialInfected,

    #[error("population must exceed the initial infected count")]
    Population,

    #[error("transmission rate must lie in [0, 1]")]
    TransmissionRate,

    #[error("recovery rate must lie in [0, 1]")]
    RecoveryRate,

    #[error("simulation must cover at least one day")]
    NumOfDays,
}

impl Parameters {
    /// Creates validated simulation parameters.
    ///
    /// # Errors
    ///
    /// Returns an error if the initial infected count is zero, the population
    /// does not exceed it, either rate falls outside `[0, 1]` (NaN included),
    /// or the day count is zero.
    pub fn new(
        population: u32,
        initial_infected: u32,
        transmission_rate: f64,
        recovery_rate: f64,
        num_of_days: usize,
    ) -> Result<Self, InvalidParameter> {
        if initial_infected < 1 {
            return Err(InvalidParameter::InitialInfected);
        }
        if population <= initial_infected {
            return Err(InvalidParameter::Population);
        }
        if !(0.0..=1.0).contains(&transmission_rate) {
            return Err(InvalidParameter::TransmissionRate);
        }
        if !(0.0..=1.0).contains(&recovery_rate) {
            return Err(InvalidParameter::RecoveryRate);
        }
        if num_of_days < 1 {
            return Err(InvalidParameter::NumOfDays);
        }

        Ok(Self {
            population,
            initial_infected,
            transmission_rate,
            recovery_rate,
            num_of_days,
        })
    }

    /// Returns the total population.
    #[must_use]
    pub fn population(&self) -> u32 {
        self.population
    }

    /// Returns the initial infected count.
    #[must_use]
    pub fn initial_infected(&self) -> u32 {
        self.initial_infected
    }

    /// Returns the transmission rate (beta).
    #[must_use]
    pub fn transmission_rate(&self) -> f64 {
        self.transmission_rate
    }

    /// Returns the recovery rate (gamma).
    #[must_use]
    pub fn recovery_rate(&self) -> f64 {
        self.recovery_rate
    }

    /// Returns the number of simulated days, including day zero.
    #[must_use]
    pub fn num_of_days(&self) -> usize {
        self.num_of_days
    }
}
