use std::convert::Infallible;

use thiserror::Error;

use epifit_core::{Model, OptimizationProblem};

use super::{Action, Bounds, Config, ConfigError, Error, Event, Status, minimize, minimize_unobserved};

/// A smooth 2-D bowl: f(x) = (x₀ - c₀)² + (x₁ - c₁)².
struct Paraboloid {
    center: [f64; 2],
}

impl Model for Paraboloid {
    type Input = [f64; 2];
    type Output = f64;
    type Error = Infallible;

    fn call(&self, input: &[f64; 2]) -> Result<f64, Self::Error> {
        let dx = input[0] - self.center[0];
        let dy = input[1] - self.center[1];
        Ok(dx * dx + dy * dy)
    }
}

/// Objective: just use the model output as the objective.
struct ObjectiveIsOutput;

impl OptimizationProblem<2> for ObjectiveIsOutput {
    type Input = [f64; 2];
    type Output = f64;
    type Error = Infallible;

    fn input(&self, x: &[f64; 2]) -> Result<[f64; 2], Self::Error> {
        Ok(*x)
    }

    fn objective(&self, _input: &[f64; 2], output: &f64) -> Result<f64, Self::Error> {
        Ok(*output)
    }
}

fn unit_box() -> Bounds<2> {
    Bounds::new([[0.0, 1.0], [0.0, 1.0]]).expect("valid bounds")
}

#[test]
fn finds_the_bowl_minimum() {
    let model = Paraboloid {
        center: [0.25, 0.75],
    };

    let solution = minimize_unobserved(&model, &ObjectiveIsOutput, &unit_box(), &Config::default())
        .expect("should complete");

    assert!(
        solution.objective < 1e-2,
        "objective {} should be near zero",
        solution.objective
    );
    assert!((solution.x[0] - 0.25).abs() < 0.1);
    assert!((solution.x[1] - 0.75).abs() < 0.1);
}

#[test]
fn exhausting_generations_is_a_normal_outcome() {
    let model = Paraboloid {
        center: [0.25, 0.75],
    };

    // The exact minimum is never hit, so a zero tolerance cannot converge.
    let solution = minimize_unobserved(&model, &ObjectiveIsOutput, &unit_box(), &Config::default())
        .expect("should complete");

    assert_eq!(solution.status, Status::MaxGenerations);
    assert_eq!(solution.generations, Config::default().max_generations);
}

#[test]
fn reports_convergence_at_the_tolerance() {
    let model = Paraboloid {
        center: [0.25, 0.75],
    };
    let config = Config {
        objective_tol: 0.05,
        ..Config::default()
    };

    let solution = minimize_unobserved(&model, &ObjectiveIsOutput, &unit_box(), &config)
        .expect("should complete");

    assert_eq!(solution.status, Status::Converged);
    assert!(solution.objective <= 0.05);
}

#[test]
fn identical_seeds_produce_identical_solutions() {
    let model = Paraboloid {
        center: [0.6, 0.3],
    };
    let config = Config {
        population_size: 40,
        max_generations: 30,
        seed: 42,
        ..Config::default()
    };

    let first = minimize_unobserved(&model, &ObjectiveIsOutput, &unit_box(), &config)
        .expect("should complete");
    let second = minimize_unobserved(&model, &ObjectiveIsOutput, &unit_box(), &config)
        .expect("should complete");

    assert_eq!(first.x, second.x);
    assert_eq!(first.objective, second.objective);
    assert_eq!(first.status, second.status);
}

#[test]
fn best_stays_inside_the_box_when_the_minimum_is_outside() {
    let model = Paraboloid {
        center: [1.5, -0.5],
    };

    let solution = minimize_unobserved(&model, &ObjectiveIsOutput, &unit_box(), &Config::default())
        .expect("should complete");

    // The constrained minimum sits at the (1, 0) corner with objective 0.5.
    assert!((0.0..=1.0).contains(&solution.x[0]));
    assert!((0.0..=1.0).contains(&solution.x[1]));
    assert!(solution.x[0] > 0.85);
    assert!(solution.x[1] < 0.15);
    assert!(solution.objective < 0.6);
}

#[test]
fn observer_can_stop_early() {
    let model = Paraboloid {
        center: [0.25, 0.75],
    };

    let observer = |event: &Event<2>| {
        if event.generation >= 3 {
            Some(Action::StopEarly)
        } else {
            None
        }
    };

    let solution = minimize(
        &model,
        &ObjectiveIsOutput,
        &unit_box(),
        &Config::default(),
        observer,
    )
    .expect("should stop cleanly");

    assert_eq!(solution.status, Status::StoppedByObserver);
    assert_eq!(solution.generations, 3);
}

#[test]
fn events_start_at_generation_zero_and_count_up() {
    let model = Paraboloid {
        center: [0.25, 0.75],
    };
    let config = Config {
        population_size: 10,
        max_generations: 4,
        ..Config::default()
    };

    let mut generations = Vec::new();
    let observer = |event: &Event<2>| {
        generations.push(event.generation);
        assert!(event.mean_objective.is_finite());
        assert!(event.best.objective <= event.mean_objective);
        None
    };

    minimize(&model, &ObjectiveIsOutput, &unit_box(), &config, observer)
        .expect("should complete");

    assert_eq!(generations, vec![0, 1, 2, 3, 4]);
}

#[test]
fn rejects_invalid_configs() {
    let model = Paraboloid {
        center: [0.25, 0.75],
    };
    let config = Config {
        population_size: 1,
        ..Config::default()
    };

    let result = minimize_unobserved(&model, &ObjectiveIsOutput, &unit_box(), &config);

    assert!(matches!(
        result,
        Err(Error::Config(ConfigError::PopulationSize))
    ));
}

#[derive(Debug, Error)]
#[error("model always fails")]
struct AlwaysFails;

struct FailingModel;

impl Model for FailingModel {
    type Input = [f64; 2];
    type Output = f64;
    type Error = AlwaysFails;

    fn call(&self, _input: &[f64; 2]) -> Result<f64, Self::Error> {
        Err(AlwaysFails)
    }
}

#[test]
fn model_failures_propagate() {
    let result = minimize_unobserved(
        &FailingModel,
        &ObjectiveIsOutput,
        &unit_box(),
        &Config::default(),
    );

    assert!(matches!(result, Err(Error::Model(_))));
}

#[derive(Debug, Error)]
#[error("candidate rejected")]
struct Rejected;

struct RejectingProblem;

impl OptimizationProblem<2> for RejectingProblem {
    type Input = [f64; 2];
    type Output = f64;
    type Error = Rejected;

    fn input(&self, _x: &[f64; 2]) -> Result<[f64; 2], Self::Error> {
        Err(Rejected)
    }

    fn objective(&self, _input: &[f64; 2], output: &f64) -> Result<f64, Self::Error> {
        Ok(*output)
    }
}

#[test]
fn problem_failures_propagate() {
    let model = Paraboloid {
        center: [0.25, 0.75],
    };

    let result = minimize_unobserved(&model, &RejectingProblem, &unit_box(), &Config::default());

    assert!(matches!(result, Err(Error::Problem(_))));
}
