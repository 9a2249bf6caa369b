#[cfg(test)]
#[path = "../../tests/unit/solver/builder_test.rs"]
mod builder_test;

use crate::construction::RandomizedGreedy;
use crate::models::Problem;
use crate::search::{ExploredPolicy, LocalSearch, NeighborhoodPolicy, RelocationNeighborhood};
use crate::solver::termination::*;
use crate::solver::{Solver, SolverConfig, Telemetry, TelemetryMode};
use crate::utils::{DefaultRandom, Environment, GenericResult};
use std::sync::Arc;

/// Default amount of accepted improving moves per local search call.
pub const DEFAULT_MAX_DEPTH: usize = 100;

/// Provides configurable way to build solver.
pub struct Builder {
    problem: Arc<Problem>,
    alpha: Option<f64>,
    max_iterations: Option<usize>,
    max_time: Option<f64>,
    max_depth: Option<usize>,
    neighborhood: NeighborhoodPolicy,
    explored: ExploredPolicy,
    seed: Option<u64>,
    telemetry: TelemetryMode,
    environment: Option<Arc<Environment>>,
}

impl Builder {
    /// Creates a new instance of `Builder`.
    pub fn new(problem: Arc<Problem>) -> Self {
        Self {
            problem,
            alpha: None,
            max_iterations: None,
            max_time: None,
            max_depth: Some(DEFAULT_MAX_DEPTH),
            neighborhood: NeighborhoodPolicy::default(),
            explored: ExploredPolicy::default(),
            seed: None,
            telemetry: TelemetryMode::default(),
            environment: None,
        }
    }

    /// Sets alpha parameter of restricted candidate list, should be in `(0, 1]` range.
    /// Required.
    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = Some(alpha);
        self
    }

    /// Sets max iterations to be run.
    /// Default is None.
    pub fn with_max_iterations(mut self, limit: Option<usize>) -> Self {
        self.max_iterations = limit;
        self
    }

    /// Sets max running time limit in seconds.
    /// Default is None.
    pub fn with_max_time(mut self, limit: Option<f64>) -> Self {
        self.max_time = limit;
        self
    }

    /// Sets max amount of accepted moves per local search call, None means no limit.
    /// Default is 100.
    pub fn with_max_depth(mut self, depth: Option<usize>) -> Self {
        self.max_depth = depth;
        self
    }

    /// Sets neighborhood policy.
    /// Default is all feasible destinations.
    pub fn with_neighborhood(mut self, policy: NeighborhoodPolicy) -> Self {
        self.neighborhood = policy;
        self
    }

    /// Sets explored set policy.
    /// Default is unbounded.
    pub fn with_explored(mut self, policy: ExploredPolicy) -> Self {
        self.explored = policy;
        self
    }

    /// Sets random seed. It overrides random generator of the environment.
    /// Default is None.
    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    /// Sets telemetry mode.
    /// Default is none.
    pub fn with_telemetry(mut self, mode: TelemetryMode) -> Self {
        self.telemetry = mode;
        self
    }

    /// Sets environment.
    /// Default has entropy seeded random and stdout logger.
    pub fn with_environment(mut self, environment: Arc<Environment>) -> Self {
        self.environment = Some(environment);
        self
    }

    /// Builds solver with parameters specified. Fails if parameters are invalid or no termination
    /// criteria is specified.
    pub fn build(self) -> GenericResult<Solver> {
        let environment = self.environment.unwrap_or_default();
        let environment = match self.seed {
            Some(seed) => Arc::new(Environment {
                random: Arc::new(DefaultRandom::new_with_seed(seed)),
                logger: environment.logger.clone(),
            }),
            None => environment,
        };

        let telemetry = Telemetry::new(self.telemetry, environment.logger.clone());

        let alpha = self.alpha.ok_or("alpha is not specified")?;
        let construction = RandomizedGreedy::new(alpha)?;
        telemetry.log(&format!("configured to use alpha {alpha}"));

        let neighborhood = RelocationNeighborhood::new(self.neighborhood)?;
        telemetry.log(&format!(
            "configured to use {:?} neighborhood with max depth {}",
            self.neighborhood,
            self.max_depth.map_or("unlimited".to_string(), |depth| depth.to_string())
        ));

        if let ExploredPolicy::Bounded { capacity: 0 } = self.explored {
            return Err("explored set capacity should be positive".into());
        }
        telemetry.log(&format!("configured to use {:?} explored set", self.explored));

        let mut terminations: Vec<Box<dyn Termination + Send + Sync>> = vec![];

        if let Some(limit) = self.max_iterations {
            telemetry.log(&format!("configured to use max-iterations {limit}"));
            terminations.push(Box::new(MaxIterations::new(limit)));
        }

        if let Some(limit) = self.max_time {
            if limit.is_nan() || limit < 0. {
                return Err(format!("max time should be non-negative, got: {limit}").into());
            }
            telemetry.log(&format!("configured to use max-time {limit}s"));
            terminations.push(Box::new(MaxTime::new(limit)));
        }

        if terminations.is_empty() {
            return Err("no termination criteria specified: set max iterations, max time or both".into());
        }

        if let Some(seed) = self.seed {
            telemetry.log(&format!("configured to use random seed {seed}"));
        }

        Ok(Solver::new(
            self.problem,
            SolverConfig {
                construction: Box::new(construction),
                local_search: LocalSearch::new(neighborhood, self.max_depth),
                explored: self.explored,
                termination: CompositeTermination::new(terminations),
                telemetry: self.telemetry,
                environment,
            },
        ))
    }
}
