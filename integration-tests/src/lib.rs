//! Shared fixtures for end-to-end fitting tests.

use epifit_components::fit::ObservedSeries;
use epifit_components::sir::{Parameters, SirModel};
use epifit_core::Model;

/// Simulates an outbreak and repackages it as an observed trajectory.
///
/// The result is noiseless: a fit against it should recover the generating
/// `(beta, gamma)` pair with zero loss.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn synthetic_observed(params: &Parameters) -> ObservedSeries {
    let series = SirModel.call(params).expect("infallible");
    series
        .iter()
        .map(|row| (row.infected as f64, row.recovered as f64))
        .collect()
}
