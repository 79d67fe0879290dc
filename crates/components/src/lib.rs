//! Epidemiological components for the epifit workspace.
//!
//! - [`sir`] — a discrete-time SIR compartmental model
//! - [`fit`] — fitting a simulated SIR trajectory to observed data

pub mod fit;
pub mod sir;
