use epifit_core::Snapshot;

/// Indicates how the genetic solver terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// The best objective reached the configured tolerance.
    Converged,

    /// Reached the generation limit; the best point found is still
    /// reported. This is a normal outcome, not an error.
    MaxGenerations,

    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

/// The result of a genetic search.
#[derive(Debug, Clone)]
pub struct Solution<I, O, const N: usize> {
    /// Final solver status.
    pub status: Status,

    /// Best solver variables found.
    pub x: [f64; N],

    /// Objective value at the reported `x`.
    pub objective: f64,

    /// Snapshot at the reported `x`.
    pub snapshot: Snapshot<I, O>,

    /// Generation count when the solver finished.
    pub generations: usize,
}
