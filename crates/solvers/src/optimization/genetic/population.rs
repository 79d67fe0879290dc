use epifit_core::{Model, OptimizationProblem, Snapshot};
use rand::Rng;

use crate::optimization::evaluate;

use super::{Bounds, Config, Error, Point, Solution, Status};

/// The best evaluated point and the snapshot behind it.
pub(super) struct Best<I, O, const N: usize> {
    point: Point<N>,
    snapshot: Snapshot<I, O>,
}

impl<I, O, const N: usize> Best<I, O, N> {
    pub(super) fn point(&self) -> Point<N> {
        self.point
    }

    pub(super) fn into_solution(self, status: Status, generations: usize) -> Solution<I, O, N> {
        Solution {
            status,
            x: self.point.x,
            objective: self.point.objective,
            snapshot: self.snapshot,
            generations,
        }
    }
}

#[derive(Debug, Clone)]
struct Member<const N: usize> {
    x: [f64; N],
    objective: Option<f64>,
}

impl<const N: usize> Member<N> {
    /// Score used for selection and sorting. Unevaluated or NaN members
    /// never win.
    fn score(&self) -> f64 {
        match self.objective {
            Some(objective) if !objective.is_nan() => objective,
            _ => f64::INFINITY,
        }
    }
}

/// The evolving set of candidates.
pub(super) struct Population<const N: usize> {
    members: Vec<Member<N>>,
}

impl<const N: usize> Population<N> {
    /// Draws a uniform random population from the box and evaluates every
    /// member. Requires a validated config, so at least two members exist.
    pub(super) fn init<M, P>(
        bounds: &Bounds<N>,
        config: &Config,
        rng: &mut impl Rng,
        model: &M,
        problem: &P,
    ) -> Result<(Self, Best<M::Input, M::Output, N>), Error>
    where
        M: Model,
        P: OptimizationProblem<N, Input = M::Input, Output = M::Output>,
    {
        let first_x = bounds.sample(rng);
        let first = evaluate(model, problem, first_x)?;
        let mut best = Best {
            point: Point::from(&first),
            snapshot: first.snapshot,
        };

        let mut members = Vec::with_capacity(config.population_size);
        members.push(Member {
            x: first_x,
            objective: Some(best.point.objective),
        });

        for _ in 1..config.population_size {
            let x = bounds.sample(rng);
            let eval = evaluate(model, problem, x)?;
            let point = Point::from(&eval);
            members.push(Member {
                x,
                objective: Some(point.objective),
            });
            if point.objective < best.point.objective {
                best = Best {
                    point,
                    snapshot: eval.snapshot,
                };
            }
        }

        Ok((Self { members }, best))
    }

    /// Produces the next generation: elites survive with their objectives,
    /// the rest are bred and left unevaluated.
    pub(super) fn advance(&mut self, bounds: &Bounds<N>, config: &Config, rng: &mut impl Rng) {
        self.members.sort_by(|a, b| a.score().total_cmp(&b.score()));

        let mut next = self.members[..config.elite_count].to_vec();

        while next.len() < config.population_size {
            let parent_a = self.tournament(config, rng);
            let parent_b = self.tournament(config, rng);
            let mut x = crossover(parent_a, parent_b, config, rng);
            mutate(&mut x, bounds, config, rng);
            next.push(Member { x, objective: None });
        }

        self.members = next;
    }

    /// Evaluates members bred by [`advance`](Self::advance) and returns the
    /// best among them, if any. Elites keep their prior objectives and need
    /// no re-evaluation; the caller's running best already covers them.
    pub(super) fn evaluate_pending<M, P>(
        &mut self,
        model: &M,
        problem: &P,
    ) -> Result<Option<Best<M::Input, M::Output, N>>, Error>
    where
        M: Model,
        P: OptimizationProblem<N, Input = M::Input, Output = M::Output>,
    {
        let mut best: Option<Best<M::Input, M::Output, N>> = None;

        for member in &mut self.members {
            if member.objective.is_some() {
                continue;
            }

            let eval = evaluate(model, problem, member.x)?;
            let point = Point::from(&eval);
            member.objective = Some(point.objective);

            let improved = best
                .as_ref()
                .is_none_or(|b| point.objective < b.point.objective);
            if improved {
                best = Some(Best {
                    point,
                    snapshot: eval.snapshot,
                });
            }
        }

        Ok(best)
    }

    /// Mean objective over the population. Unevaluated or NaN members count
    /// as infinite.
    #[allow(clippy::cast_precision_loss)]
    pub(super) fn mean_objective(&self) -> f64 {
        let total: f64 = self.members.iter().map(Member::score).sum();
        total / self.members.len() as f64
    }

    /// Tournament selection: the lowest score among `tournament_size`
    /// uniformly drawn members wins.
    fn tournament(&self, config: &Config, rng: &mut impl Rng) -> [f64; N] {
        let mut winner = &self.members[rng.random_range(0..self.members.len())];
        for _ in 1..config.tournament_size {
            let challenger = &self.members[rng.random_range(0..self.members.len())];
            if challenger.score() < winner.score() {
                winner = challenger;
            }
        }
        winner.x
    }
}

/// Arithmetic blend crossover: each gene is a random convex combination of
/// the parents. Falls back to cloning the first parent when the crossover
/// roll fails.
fn crossover<const N: usize>(
    parent_a: [f64; N],
    parent_b: [f64; N],
    config: &Config,
    rng: &mut impl Rng,
) -> [f64; N] {
    if rng.random::<f64>() >= config.crossover_rate {
        return parent_a;
    }

    std::array::from_fn(|k| {
        let blend = rng.random::<f64>();
        blend * parent_a[k] + (1.0 - blend) * parent_b[k]
    })
}

/// Per-gene mutation: a uniform step scaled by the bound width, clamped back
/// into the box.
fn mutate<const N: usize>(
    x: &mut [f64; N],
    bounds: &Bounds<N>,
    config: &Config,
    rng: &mut impl Rng,
) {
    for (k, gene) in x.iter_mut().enumerate() {
        if rng.random::<f64>() < config.mutation_rate {
            let step = rng.random_range(-1.0..=1.0) * config.mutation_scale * bounds.width(k);
            *gene = bounds.clamp(k, *gene + step);
        }
    }
}
