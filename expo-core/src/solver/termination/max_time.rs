#[cfg(test)]
#[path = "../../../tests/unit/solver/termination/max_time_test.rs"]
mod max_time_test;

use super::*;

/// A termination criteria which is in terminated state when max time elapsed.
pub struct MaxTime {
    limit_in_secs: f64,
}

impl MaxTime {
    /// Creates a new instance of `MaxTime`.
    pub fn new(limit_in_secs: f64) -> Self {
        Self { limit_in_secs }
    }
}

impl Termination for MaxTime {
    fn is_termination(&self, search_ctx: &SearchContext) -> bool {
        search_ctx.elapsed_secs() > self.limit_in_secs
    }

    fn estimate(&self, search_ctx: &SearchContext) -> f64 {
        if self.limit_in_secs <= 0. {
            return 1.;
        }

        (search_ctx.elapsed_secs() / self.limit_in_secs).min(1.)
    }

    fn reason(&self) -> StopReason {
        StopReason::MaxTime
    }
}
