//! Solver configuration.

#[cfg(test)]
#[path = "../../../tests/unit/extensions/solve/config_test.rs"]
mod config_test;

use expo_core::models::Problem;
use expo_core::search::{ExploredPolicy, NeighborhoodPolicy};
use expo_core::solver::{Builder, TelemetryMode};
use expo_core::utils::Environment;
use serde::Deserialize;
use std::io::{BufReader, Read};
use std::sync::Arc;

/// An algorithm configuration.
#[derive(Clone, Default, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Specifies construction configuration.
    pub construction: Option<ConstructionConfig>,
    /// Specifies local search configuration.
    pub local_search: Option<LocalSearchConfig>,
    /// Specifies how visited assignments are remembered.
    pub explored: Option<ExploredType>,
    /// Specifies algorithm termination configuration.
    pub termination: Option<TerminationConfig>,
    /// Specifies telemetry configuration.
    pub telemetry: Option<TelemetryConfig>,
}

/// A randomized greedy construction configuration.
#[derive(Clone, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ConstructionConfig {
    /// Restricted candidate list parameter in `(0, 1]` range.
    pub alpha: Option<f64>,
}

/// A local search configuration.
#[derive(Clone, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct LocalSearchConfig {
    /// Max amount of accepted moves per refinement. Default is 100.
    pub max_depth: Option<usize>,
    /// Specifies which destinations are inspected.
    pub neighborhood: Option<NeighborhoodType>,
}

/// A neighborhood configuration.
#[derive(Clone, Deserialize, Debug, PartialEq)]
#[serde(tag = "type")]
#[serde(rename_all = "camelCase")]
pub enum NeighborhoodType {
    /// All feasible destinations.
    All,
    /// A random subset of feasible destinations.
    Sampled {
        /// A ratio of kept destinations.
        ratio: f64,
    },
}

/// An explored set configuration.
#[derive(Clone, Deserialize, Debug, PartialEq, Eq)]
#[serde(tag = "type")]
#[serde(rename_all = "camelCase")]
pub enum ExploredType {
    /// Remembers everything.
    Unbounded,
    /// Remembers at most `capacity` assignments.
    Bounded {
        /// Max amount of remembered assignments.
        capacity: usize,
    },
    /// Remembers nothing.
    Disabled,
}

/// A termination configuration.
#[derive(Clone, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct TerminationConfig {
    /// Max amount of iterations.
    pub max_iterations: Option<usize>,
    /// Max running time in seconds.
    pub max_time: Option<f64>,
}

/// A telemetry configuration.
#[derive(Clone, Default, Deserialize, Debug)]
pub struct TelemetryConfig {
    /// Specifies logging configuration.
    pub logging: Option<LoggingConfig>,
    /// Specifies metrics configuration.
    pub metrics: Option<MetricsConfig>,
}

/// A logging configuration.
#[derive(Clone, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct LoggingConfig {
    /// Specifies whether logging is enabled. Default is false.
    pub enabled: bool,
    /// Specifies how often search progress is logged, in iterations. Default is 100.
    pub log_every: Option<usize>,
}

/// A metrics configuration.
#[derive(Clone, Deserialize, Debug)]
pub struct MetricsConfig {
    /// Specifies whether improvement history is collected. Default is false.
    pub enabled: bool,
}

/// Default frequency of progress logging, in iterations.
pub const LOG_EVERY: usize = 100;

fn configure_from_construction(builder: Builder, config: &Option<ConstructionConfig>) -> Builder {
    match config.as_ref().and_then(|config| config.alpha) {
        Some(alpha) => builder.with_alpha(alpha),
        None => builder,
    }
}

fn configure_from_local_search(mut builder: Builder, config: &Option<LocalSearchConfig>) -> Builder {
    if let Some(config) = config {
        if let Some(max_depth) = config.max_depth {
            builder = builder.with_max_depth(Some(max_depth));
        }

        if let Some(neighborhood) = &config.neighborhood {
            builder = builder.with_neighborhood(match neighborhood {
                NeighborhoodType::All => NeighborhoodPolicy::All,
                NeighborhoodType::Sampled { ratio } => NeighborhoodPolicy::Sampled { ratio: *ratio },
            });
        }
    }

    builder
}

fn configure_from_explored(builder: Builder, config: &Option<ExploredType>) -> Builder {
    match config {
        Some(ExploredType::Unbounded) => builder.with_explored(ExploredPolicy::Unbounded),
        Some(ExploredType::Bounded { capacity }) => {
            builder.with_explored(ExploredPolicy::Bounded { capacity: *capacity })
        }
        Some(ExploredType::Disabled) => builder.with_explored(ExploredPolicy::Disabled),
        None => builder,
    }
}

fn configure_from_termination(mut builder: Builder, config: &Option<TerminationConfig>) -> Builder {
    if let Some(config) = config {
        builder = builder.with_max_iterations(config.max_iterations);
        builder = builder.with_max_time(config.max_time);
    }

    builder
}

fn configure_from_telemetry(builder: Builder, config: &Option<TelemetryConfig>) -> Builder {
    let logging = config.as_ref().and_then(|config| config.logging.as_ref()).filter(|logging| logging.enabled);
    let metrics = config.as_ref().and_then(|config| config.metrics.as_ref()).is_some_and(|metrics| metrics.enabled);

    let mode = match (logging, metrics) {
        (Some(logging), true) => TelemetryMode::All { log_every: logging.log_every.unwrap_or(LOG_EVERY) },
        (Some(logging), false) => TelemetryMode::OnlyLogging { log_every: logging.log_every.unwrap_or(LOG_EVERY) },
        (None, true) => TelemetryMode::OnlyMetrics,
        (None, false) => TelemetryMode::None,
    };

    builder.with_telemetry(mode)
}

/// Reads config from reader.
pub fn read_config<R: Read>(reader: BufReader<R>) -> Result<Config, String> {
    serde_json::from_reader(reader).map_err(|err| format!("cannot deserialize config: '{err}'"))
}

/// Creates a solver `Builder` from config. Validation happens when the builder is built.
pub fn create_builder_from_config(problem: Arc<Problem>, environment: Arc<Environment>, config: &Config) -> Builder {
    let mut builder = Builder::new(problem).with_environment(environment);

    builder = configure_from_telemetry(builder, &config.telemetry);
    builder = configure_from_construction(builder, &config.construction);
    builder = configure_from_local_search(builder, &config.local_search);
    builder = configure_from_explored(builder, &config.explored);
    builder = configure_from_termination(builder, &config.termination);

    builder
}
