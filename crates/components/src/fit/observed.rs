/// A single observed day: infected and recovered counts.
///
/// Counts are kept as `f64` so that smoothed or scaled datasets fit without
/// conversion; whole-person data loses nothing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Observation {
    pub infected: f64,
    pub recovered: f64,
}

/// An observed epidemic trajectory.
///
/// Rows align with the simulated series by position: row `d` is day `d`.
/// How the rows were loaded (CSV, database, inline) is the caller's concern.
#[derive(Debug, Clone, PartialEq)]
pub struct ObservedSeries {
    days: Vec<Observation>,
}

impl ObservedSeries {
    /// Creates a series from day-ordered observations.
    #[must_use]
    pub fn new(days: Vec<Observation>) -> Self {
        Self { days }
    }

    /// Returns the observations in day order.
    #[must_use]
    pub fn days(&self) -> &[Observation] {
        &self.days
    }

    /// Returns the number of observed days.
    #[must_use]
    pub fn len(&self) -> usize {
        self.days.len()
    }

    /// Returns `true` if the series holds no observations.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}

impl FromIterator<Observation> for ObservedSeries {
    fn from_iter<T: IntoIterator<Item = Observation>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl FromIterator<(f64, f64)> for ObservedSeries {
    /// Collects `(infected, recovered)` pairs in day order.
    fn from_iter<T: IntoIterator<Item = (f64, f64)>>(iter: T) -> Self {
        iter.into_iter()
            .map(|(infected, recovered)| Observation {
                infected,
                recovered,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collects_pairs_in_day_order() {
        let series: ObservedSeries = [(1.0, 0.0), (3.0, 1.0)].into_iter().collect();

        assert_eq!(series.len(), 2);
        assert!(!series.is_empty());
        assert_eq!(series.days()[1].infected, 3.0);
        assert_eq!(series.days()[1].recovered, 1.0);
    }

    #[test]
    fn empty_series_reports_empty() {
        let series = ObservedSeries::new(Vec::new());

        assert_eq!(series.len(), 0);
        assert!(series.is_empty());
    }
}
