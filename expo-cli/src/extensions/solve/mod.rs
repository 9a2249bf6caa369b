//! Contains functionality to read instances, configure the solver and write results.

pub mod config;
pub mod reader;
pub mod writer;
