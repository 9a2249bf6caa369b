//! A collection of models to represent problem and solution.

mod dispersion;
pub use self::dispersion::calculate_dispersion;

mod problem;
pub use self::problem::{Attraction, Problem};

mod solution;
pub use self::solution::{Assignment, AssignmentKey};
