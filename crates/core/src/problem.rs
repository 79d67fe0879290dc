/// Defines an optimization problem to be minimized.
///
/// An optimization problem maps solver variables to a model input, then
/// computes a scalar objective from the model input and output. Solvers
/// search for the variables that minimize the objective over a bounded box.
///
/// The const generic `N` is the number of solver variables. For example,
/// `N = 2` represents a two-variable problem such as a candidate
/// (transmission rate, recovery rate) pair.
pub trait OptimizationProblem<const N: usize> {
    type Input;
    type Output;
    type Error: std::error::Error + Send + Sync + 'static;

    /// Maps solver variables (`x`) into a model input.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if the input cannot be constructed from `x`.
    fn input(&self, x: &[f64; N]) -> Result<Self::Input, Self::Error>;

    /// Computes the objective value from model input/output.
    ///
    /// Lower values are better; the objective has no upper bound.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if the objective cannot be computed.
    fn objective(&self, input: &Self::Input, output: &Self::Output) -> Result<f64, Self::Error>;
}
