//! The termination module contains logic which defines when the search loop should stop.
//! Criteria are checked only at iteration boundaries: an iteration which is in progress is always
//! completed.

use crate::solver::SearchContext;
use std::fmt::{Display, Formatter};

/// A trait which specifies criteria when search should stop.
pub trait Termination {
    /// Returns true if termination condition is met.
    fn is_termination(&self, search_ctx: &SearchContext) -> bool;

    /// Returns a relative estimation till termination. Value is in the `[0, 1]` range.
    fn estimate(&self, search_ctx: &SearchContext) -> f64;

    /// Returns the reason reported when this criteria stops the search.
    fn reason(&self) -> StopReason;
}

/// Specifies why search was stopped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StopReason {
    /// Iteration budget is consumed.
    MaxIterations,
    /// Time budget is exceeded.
    MaxTime,
}

impl Display for StopReason {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            StopReason::MaxIterations => write!(f, "max iterations"),
            StopReason::MaxTime => write!(f, "max time"),
        }
    }
}

mod max_iterations;
pub use self::max_iterations::MaxIterations;

mod max_time;
pub use self::max_time::MaxTime;

/// Encapsulates multiple termination criteria: search stops when any of them is met.
pub struct CompositeTermination {
    terminations: Vec<Box<dyn Termination + Send + Sync>>,
}

impl CompositeTermination {
    /// Creates a new instance of `CompositeTermination`.
    pub fn new(terminations: Vec<Box<dyn Termination + Send + Sync>>) -> Self {
        Self { terminations }
    }

    /// Returns the reason of the first met criteria in the order they were specified.
    pub fn check(&self, search_ctx: &SearchContext) -> Option<StopReason> {
        self.terminations.iter().find(|t| t.is_termination(search_ctx)).map(|t| t.reason())
    }

    /// Returns the highest estimation among all criteria.
    pub fn estimate(&self, search_ctx: &SearchContext) -> f64 {
        self.terminations.iter().map(|t| t.estimate(search_ctx)).fold(0., f64::max)
    }
}
