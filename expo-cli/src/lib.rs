//! A crate contains I/O extensions and command line interface of the attraction distribution solver.
//!
//! Instances are read from a plain text format:
//!
//! ```text
//! 2      # amount of spaces
//! 10     # capacity of every space
//! 2      # amount of themes
//! 3      # amount of attractions
//! 1 5    # theme and size of every attraction, one per line
//! 1 5
//! 2 10
//! ```
//!
//! # Examples
//!
//! ```
//! # use expo_cli::extensions::solve::reader::InstanceProblem;
//! # use expo_core::prelude::*;
//! # use std::sync::Arc;
//! let instance = "2\n10\n2\n3\n1 5\n1 5\n2 10\n".to_string();
//! let problem = Arc::new(instance.read_instance()?);
//!
//! let (_, dispersion, _) = Builder::new(problem)
//!     .with_alpha(0.5)
//!     .with_max_iterations(Some(5))
//!     .with_seed(Some(0))
//!     .build()
//!     .map_err(|err| err.to_string())?
//!     .solve()
//!     .map_err(|err| err.to_string())?;
//!
//! assert_eq!(dispersion, 2);
//! # Ok::<(), String>(())
//! ```

#![warn(missing_docs)]

#[cfg(test)]
#[path = "../tests/features/mod.rs"]
mod features;

pub use expo_core;

pub mod extensions;
