#[cfg(test)]
#[path = "../../../tests/unit/solver/termination/max_iterations_test.rs"]
mod max_iterations_test;

use super::*;

/// A termination criteria which is in terminated state when the iteration budget is consumed.
pub struct MaxIterations {
    limit: usize,
}

impl MaxIterations {
    /// Creates a new instance of `MaxIterations`.
    pub fn new(limit: usize) -> Self {
        Self { limit }
    }
}

impl Termination for MaxIterations {
    fn is_termination(&self, search_ctx: &SearchContext) -> bool {
        search_ctx.statistics.iterations >= self.limit
    }

    fn estimate(&self, search_ctx: &SearchContext) -> f64 {
        if self.limit == 0 {
            return 1.;
        }

        (search_ctx.statistics.iterations as f64 / self.limit as f64).min(1.)
    }

    fn reason(&self) -> StopReason {
        StopReason::MaxIterations
    }
}
