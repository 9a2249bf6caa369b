//! The construction module contains logic to build an initial assignment from scratch.

use crate::models::{Assignment, Problem};
use crate::utils::{GenericResult, Random};
use std::sync::Arc;

mod randomized_greedy;
pub use self::randomized_greedy::RandomizedGreedy;

/// A trait which specifies the way to fill an empty assignment.
pub trait Construction {
    /// Fills given assignment with attractions which are not yet placed.
    fn fill(&self, assignment: &mut Assignment, random: &dyn Random) -> GenericResult<()>;

    /// Creates a new assignment from scratch.
    fn construct(&self, problem: Arc<Problem>, random: &dyn Random) -> GenericResult<Assignment> {
        let mut assignment = Assignment::new(problem);
        self.fill(&mut assignment, random)?;

        Ok(assignment)
    }
}
