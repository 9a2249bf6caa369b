//! This module reimports commonly used types.

pub use crate::construction::{Construction, RandomizedGreedy};

pub use crate::models::{Assignment, AssignmentKey, Attraction, Problem, calculate_dispersion};

pub use crate::search::{ExploredPolicy, ExploredSet, LocalSearch, NeighborhoodPolicy, RelocationNeighborhood};

pub use crate::solver::termination::StopReason;
pub use crate::solver::{Builder, Metrics, Solver, TelemetryMode};

pub use crate::utils::{DefaultRandom, Environment, GenericError, GenericResult, InfoLogger, Random};
