//! A discrete-time SIR (Susceptible-Infected-Recovered) compartmental model.
//!
//! [`SirModel`] advances the classic SIR recurrence with forward Euler at a
//! fixed step of one day:
//!
//! ```text
//! dS = -beta * S * I / N
//! dI =  beta * S * I / N - gamma * I
//! dR =  gamma * I
//! ```
//!
//! The recurrence runs on untruncated floating-point state; each reported row
//! is the floor of that state. Flooring at the output (and only there) keeps
//! the reported series comparable to observed whole-person counts without
//! perturbing the integration itself. Truncation means the row sum can fall
//! short of the total population by up to two individuals.

mod compartments;
mod parameters;

pub use compartments::Compartments;
pub use parameters::{InvalidParameter, Parameters};

use std::convert::Infallible;

use epifit_core::Model;

/// A [`Model`] that simulates an SIR epidemic day by day.
///
/// The call is pure and deterministic: identical parameters always produce
/// the identical series. Parameter validity is enforced by
/// [`Parameters::new`], so the call itself cannot fail.
pub struct SirModel;

impl Model for SirModel {
    type Input = Parameters;
    type Output = Vec<Compartments>;
    type Error = Infallible;

    fn call(&self, params: &Parameters) -> Result<Self::Output, Self::Error> {
        let n = f64::from(params.population());
        let beta = params.transmission_rate();
        let gamma = params.recovery_rate();

        let mut susceptible = f64::from(params.population() - params.initial_infected());
        let mut infected = f64::from(params.initial_infected());
        let mut recovered = 0.0;

        let mut series = Vec::with_capacity(params.num_of_days());
        series.push(Compartments::floor_of(susceptible, infected, recovered));

        for _ in 1..params.num_of_days() {
            let ds = -beta * susceptible * infected / n;
            let di = beta * susceptible * infected / n - gamma * infected;
            let dr = gamma * infected;

            susceptible += ds;
            infected += di;
            recovered += dr;

            series.push(Compartments::floor_of(susceptible, infected, recovered));
        }

        Ok(series)
    }
}
