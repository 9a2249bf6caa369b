//! A module which provides the logic to collect metrics about search execution and simple logging.

#[cfg(test)]
#[path = "../../tests/unit/solver/telemetry_test.rs"]
mod telemetry_test;

use crate::models::Problem;
use crate::solver::SearchContext;
use crate::solver::termination::StopReason;
use crate::utils::InfoLogger;

/// Specifies a telemetry mode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TelemetryMode {
    /// No telemetry at all.
    #[default]
    None,
    /// Only logging.
    OnlyLogging {
        /// Specifies how often search progress is logged, in iterations.
        log_every: usize,
    },
    /// Only metrics collection.
    OnlyMetrics,
    /// Both logging and metrics collection.
    All {
        /// Specifies how often search progress is logged, in iterations.
        log_every: usize,
    },
}

impl TelemetryMode {
    /// Returns true if logging is enabled.
    pub fn is_logging(&self) -> bool {
        matches!(self, TelemetryMode::OnlyLogging { .. } | TelemetryMode::All { .. })
    }

    /// Returns true if metrics collection is enabled.
    pub fn is_tracking(&self) -> bool {
        matches!(self, TelemetryMode::OnlyMetrics | TelemetryMode::All { .. })
    }
}

/// Represents a moment when a new best assignment is found.
#[derive(Clone, Debug, PartialEq)]
pub struct Improvement {
    /// Iteration index, starts from zero.
    pub iteration: usize,
    /// Time since search started, in seconds.
    pub timestamp: f64,
    /// Dispersion of the new best assignment.
    pub dispersion: usize,
}

/// Encapsulates different measurements regarding search execution.
#[derive(Clone, Debug)]
pub struct Metrics {
    /// Search duration in seconds.
    pub duration: f64,
    /// Total amount of consumed iterations.
    pub iterations: usize,
    /// Amount of iterations which produced a scored assignment.
    pub scored: usize,
    /// Amount of iterations skipped as duplicates.
    pub duplicates: usize,
    /// Dispersion of the first constructed assignment before local search.
    pub initial_dispersion: Option<usize>,
    /// Dispersion of the best assignment.
    pub best_dispersion: Option<usize>,
    /// When the best assignment was found.
    pub best_found: Option<Improvement>,
    /// Average dispersion of scored assignments.
    pub average_dispersion: Option<f64>,
    /// Amount of remembered assignments at the end of the search.
    pub explored: usize,
    /// Attractions which do not fit into any space.
    pub unplaceable: Vec<usize>,
    /// Why the search was stopped.
    pub stop_reason: StopReason,
    /// A history of best assignment changes, filled only when metrics are tracked.
    pub improvements: Vec<Improvement>,
}

impl Metrics {
    /// Returns true if search was stopped by time limit.
    pub fn is_stopped_by_time(&self) -> bool {
        self.stop_reason == StopReason::MaxTime
    }
}

/// Provides way to collect metrics and write information into log.
pub struct Telemetry {
    mode: TelemetryMode,
    logger: InfoLogger,
    improvements: Vec<Improvement>,
}

impl Telemetry {
    /// Creates a new instance of `Telemetry`.
    pub fn new(mode: TelemetryMode, logger: InfoLogger) -> Self {
        Self { mode, logger, improvements: vec![] }
    }

    /// Reports attractions which cannot be placed into any space.
    pub fn on_unplaceable(&self, problem: &Problem, unplaceable: &[usize]) {
        unplaceable.iter().filter_map(|&id| problem.attraction(id).map(|a| (id, a.size))).for_each(|(id, size)| {
            self.log(&format!(
                "warning: attraction {id} of size {size} exceeds space capacity {} and cannot be placed",
                problem.capacity()
            ))
        });
    }

    /// Reports a new best assignment.
    pub fn on_improvement(&mut self, search_ctx: &SearchContext, iteration: usize, dispersion: usize) {
        let improvement = Improvement { iteration, timestamp: search_ctx.elapsed_secs(), dispersion };

        self.log(&format!(
            "[{:.2}s] iteration {}: best dispersion found: {}",
            improvement.timestamp, improvement.iteration, improvement.dispersion
        ));

        if self.mode.is_tracking() {
            self.improvements.push(improvement);
        }
    }

    /// Reports search progress after the iteration is completed.
    pub fn on_iteration(&self, search_ctx: &SearchContext, estimate: f64) {
        let log_every = match self.mode {
            TelemetryMode::OnlyLogging { log_every } | TelemetryMode::All { log_every } => log_every,
            _ => return,
        };

        let iterations = search_ctx.statistics.iterations;
        if log_every == 0 || iterations % log_every != 0 {
            return;
        }

        self.log(&format!(
            "[{:.2}s] {} iterations done ({} scored, {} duplicates), {:.0}% of budget consumed",
            search_ctx.elapsed_secs(),
            iterations,
            search_ctx.statistics.scored,
            search_ctx.statistics.duplicates,
            estimate * 100.
        ));
    }

    /// Reports search termination.
    pub fn on_termination(&self, search_ctx: &SearchContext, reason: StopReason) {
        self.log(&format!(
            "[{:.2}s] search is stopped by {} after {} iterations",
            search_ctx.elapsed_secs(),
            reason,
            search_ctx.statistics.iterations
        ));
    }

    /// Writes message into log if logging is enabled.
    pub fn log(&self, message: &str) {
        if self.mode.is_logging() {
            (self.logger)(message);
        }
    }

    /// Returns collected improvements.
    pub fn take_improvements(&mut self) -> Vec<Improvement> {
        std::mem::take(&mut self.improvements)
    }
}
