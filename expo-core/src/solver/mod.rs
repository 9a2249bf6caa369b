//! The solver module contains GRASP search loop: repeated randomized greedy construction followed
//! by local search, while the best found assignment is kept as incumbent. An assignment which
//! leaves fewer attractions unplaced always wins, dispersion is compared only between assignments
//! with the same amount of unplaced attractions.
//!
//! # Examples
//!
//! ```
//! # use expo_core::prelude::*;
//! # use std::sync::Arc;
//! let attractions = vec![
//!     Attraction { theme: 1, size: 5 },
//!     Attraction { theme: 1, size: 5 },
//!     Attraction { theme: 2, size: 10 },
//! ];
//! let problem = Arc::new(Problem::new(2, 10, 2, attractions)?);
//!
//! let (assignment, dispersion, metrics) = Builder::new(problem)
//!     .with_alpha(0.5)
//!     .with_max_iterations(Some(10))
//!     .with_seed(Some(42))
//!     .build()?
//!     .solve()?;
//!
//! assert_eq!(dispersion, 2);
//! assert_eq!(assignment.assigned(), 3);
//! assert_eq!(metrics.iterations, 10);
//! # Ok::<(), GenericError>(())
//! ```

#[cfg(test)]
#[path = "../../tests/unit/solver/solver_test.rs"]
mod solver_test;

mod builder;
pub use self::builder::Builder;

mod telemetry;
pub use self::telemetry::{Improvement, Metrics, Telemetry, TelemetryMode};

pub mod termination;

use crate::construction::Construction;
use crate::models::{Assignment, Problem, calculate_dispersion};
use crate::search::{ExploredPolicy, ExploredSet, LocalSearch};
use crate::solver::termination::CompositeTermination;
use crate::utils::{Environment, GenericResult, Random, Timer};
use std::sync::Arc;

/// Keeps search loop counters.
#[derive(Clone, Debug, Default)]
pub struct Statistics {
    /// Amount of consumed iterations.
    pub iterations: usize,
    /// Amount of iterations which produced a scored assignment.
    pub scored: usize,
    /// Amount of iterations skipped as duplicates.
    pub duplicates: usize,
}

/// A search state visible for termination criteria and telemetry.
pub struct SearchContext {
    /// Search loop counters.
    pub statistics: Statistics,
    timer: Timer,
}

impl SearchContext {
    /// Creates a new instance of `SearchContext` and starts its timer.
    pub fn new() -> Self {
        Self { statistics: Statistics::default(), timer: Timer::start() }
    }

    /// Returns time elapsed since search started, in seconds.
    pub fn elapsed_secs(&self) -> f64 {
        self.timer.elapsed_secs_as_f64()
    }
}

impl Default for SearchContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Specifies solver settings.
pub struct SolverConfig {
    /// Builds an initial assignment on every iteration.
    pub construction: Box<dyn Construction + Send + Sync>,
    /// Improves constructed assignment.
    pub local_search: LocalSearch,
    /// Specifies how visited assignments are remembered.
    pub explored: ExploredPolicy,
    /// Specifies when the search stops.
    pub termination: CompositeTermination,
    /// Specifies telemetry mode.
    pub telemetry: TelemetryMode,
    /// An environment which owns random generator and logger of the run.
    pub environment: Arc<Environment>,
}

/// A GRASP solver.
pub struct Solver {
    problem: Arc<Problem>,
    config: SolverConfig,
}

struct Incumbent {
    assignment: Assignment,
    dispersion: usize,
    unassigned: usize,
}

impl Incumbent {
    fn new(assignment: Assignment, dispersion: usize) -> Self {
        let unassigned = assignment.unassigned().len();
        Self { assignment, dispersion, unassigned }
    }

    fn rank(&self) -> (usize, usize) {
        (self.unassigned, self.dispersion)
    }
}

enum IterationOutcome {
    Duplicate,
    Scored(Assignment, usize),
}

impl Solver {
    /// Creates a new instance of `Solver`.
    pub fn new(problem: Arc<Problem>, config: SolverConfig) -> Self {
        Self { problem, config }
    }

    /// Runs the search and returns the best found assignment with its dispersion and metrics.
    /// Fails when no assignment was scored before termination.
    pub fn solve(self) -> GenericResult<(Assignment, usize, Metrics)> {
        let Solver { problem, config } = self;
        let random = config.environment.random.as_ref();

        let mut telemetry = Telemetry::new(config.telemetry, config.environment.logger.clone());
        let mut explored = ExploredSet::new(config.explored)?;
        let mut optima = ExploredSet::new(config.explored)?;

        let unplaceable = problem.unplaceable();
        telemetry.on_unplaceable(problem.as_ref(), unplaceable.as_slice());

        let mut search_ctx = SearchContext::new();
        let mut incumbent: Option<Incumbent> = None;
        let mut initial_dispersion = None;
        let mut best_found = None;
        let mut total_dispersion = 0_usize;

        let stop_reason = loop {
            if let Some(reason) = config.termination.check(&search_ctx) {
                break reason;
            }

            let iteration = search_ctx.statistics.iterations;
            search_ctx.statistics.iterations += 1;

            let outcome =
                run_iteration(&problem, &config, &mut explored, &mut optima, &mut initial_dispersion, random)?;

            match outcome {
                IterationOutcome::Duplicate => search_ctx.statistics.duplicates += 1,
                IterationOutcome::Scored(assignment, dispersion) => {
                    search_ctx.statistics.scored += 1;
                    total_dispersion += dispersion;

                    let candidate = Incumbent::new(assignment, dispersion);
                    if incumbent.as_ref().is_none_or(|best| candidate.rank() < best.rank()) {
                        telemetry.on_improvement(&search_ctx, iteration, dispersion);
                        best_found = Some((iteration, search_ctx.elapsed_secs()));
                        incumbent = Some(candidate);
                    }
                }
            }

            telemetry.on_iteration(&search_ctx, config.termination.estimate(&search_ctx));
        };

        telemetry.on_termination(&search_ctx, stop_reason);

        let Incumbent { assignment, dispersion, .. } = incumbent.ok_or_else(|| {
            format!("cannot find any solution: search is stopped by {stop_reason} before any iteration is scored")
        })?;

        let statistics = &search_ctx.statistics;
        let metrics = Metrics {
            duration: search_ctx.elapsed_secs(),
            iterations: statistics.iterations,
            scored: statistics.scored,
            duplicates: statistics.duplicates,
            initial_dispersion,
            best_dispersion: Some(dispersion),
            best_found: best_found.map(|(iteration, timestamp)| Improvement {
                iteration,
                timestamp,
                dispersion,
            }),
            average_dispersion: (statistics.scored > 0).then(|| total_dispersion as f64 / statistics.scored as f64),
            explored: explored.len(),
            unplaceable,
            stop_reason,
            improvements: telemetry.take_improvements(),
        };

        Ok((assignment, dispersion, metrics))
    }
}

/// Constructs and refines one assignment. A constructed assignment which was visited before, or
/// a refined one which equals an already scored local optimum, is reported as duplicate.
fn run_iteration(
    problem: &Arc<Problem>,
    config: &SolverConfig,
    explored: &mut ExploredSet,
    optima: &mut ExploredSet,
    initial_dispersion: &mut Option<usize>,
    random: &dyn Random,
) -> GenericResult<IterationOutcome> {
    let constructed = config.construction.construct(problem.clone(), random)?;

    if initial_dispersion.is_none() {
        *initial_dispersion = Some(calculate_dispersion(&constructed));
    }

    if !explored.insert(&constructed) {
        return Ok(IterationOutcome::Duplicate);
    }

    let refined = config.local_search.improve(constructed, explored, random);

    if !optima.insert(&refined) {
        return Ok(IterationOutcome::Duplicate);
    }

    let dispersion = calculate_dispersion(&refined);

    Ok(IterationOutcome::Scored(refined, dispersion))
}
