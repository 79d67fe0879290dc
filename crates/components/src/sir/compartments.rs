/// One day of a simulated SIR series, truncated to whole individuals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Compartments {
    pub susceptible: i64,
    pub infected: i64,
    pub recovered: i64,
}

impl Compartments {
    /// Floors an untruncated (S, I, R) state to whole individuals.
    #[allow(clippy::cast_possible_truncation)]
    pub(super) fn floor_of(susceptible: f64, infected: f64, recovered: f64) -> Self {
        Self {
            susceptible: susceptible.floor() as i64,
            infected: infected.floor() as i64,
            recovered: recovered.floor() as i64,
        }
    }
}
