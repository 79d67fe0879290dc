use super::Point;

/// Event emitted by the genetic solver after each generation.
///
/// Generation 0 describes the freshly initialized population; generations
/// `1..` follow each evolution step.
#[derive(Debug, Clone, Copy)]
pub struct Event<const N: usize> {
    /// The generation number.
    pub generation: usize,

    /// The best point found so far, across all generations.
    pub best: Point<N>,

    /// Mean objective over the current population.
    pub mean_objective: f64,
}
