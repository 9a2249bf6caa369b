//! Core crate contains building blocks of a GRASP metaheuristic which distributes themed
//! attractions across spaces of equal capacity while minimizing theme dispersion: the total
//! amount of (theme, space) pairs where the theme is present in the space.
//!
//! The search is single threaded and fully repeatable for a fixed seed: random generator is owned
//! by [`utils::Environment`] of the run and passed explicitly to every randomized step.

#![warn(missing_docs)]

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
#[macro_use]
pub mod helpers;

pub mod construction;
pub mod models;
pub mod prelude;
pub mod search;
pub mod solver;
pub mod utils;
