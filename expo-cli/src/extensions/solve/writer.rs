//! Writes search results in plain text and json formats.

#[cfg(test)]
#[path = "../../../tests/unit/extensions/solve/writer_test.rs"]
mod writer_test;

use expo_core::models::Assignment;
use expo_core::solver::termination::StopReason;
use expo_core::solver::{Improvement, Metrics};
use serde::{Deserialize, Serialize};
use std::io::{BufWriter, Write};

/// Keeps everything needed to report a search result.
pub struct SolutionReport<'a> {
    /// Instance name.
    pub instance: &'a str,
    /// Random seed used.
    pub seed: Option<u64>,
    /// The best found assignment.
    pub assignment: &'a Assignment,
    /// Dispersion of the best found assignment.
    pub dispersion: usize,
    /// Search metrics.
    pub metrics: &'a Metrics,
}

/// A trait to write solution in plain text format.
pub trait TextSolution<W: Write> {
    /// Writes solution as text.
    fn write_text(&self, writer: &mut BufWriter<W>) -> Result<(), String>;
}

/// A trait to write solution in json format.
pub trait JsonSolution<W: Write> {
    /// Writes solution as json.
    fn write_json(&self, writer: &mut BufWriter<W>) -> Result<(), String>;
}

/// A space with its attractions.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SpaceJson {
    /// Space id.
    pub id: usize,
    /// Attraction ids in placement order.
    pub attractions: Vec<usize>,
    /// Distinct themes present in the space, ascending.
    pub themes: Vec<usize>,
    /// Remaining capacity.
    pub remaining: usize,
}

/// A best assignment change.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImprovementJson {
    /// Iteration index.
    pub iteration: usize,
    /// Elapsed seconds.
    pub timestamp: f64,
    /// New best dispersion.
    pub dispersion: usize,
}

/// Search statistic.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatisticJson {
    /// Search duration in seconds.
    pub duration: f64,
    /// Consumed iterations.
    pub iterations: usize,
    /// Scored iterations.
    pub scored: usize,
    /// Iterations skipped as duplicates.
    pub duplicates: usize,
    /// Dispersion of the first constructed assignment.
    pub initial_dispersion: Option<usize>,
    /// Average dispersion over scored iterations.
    pub average_dispersion: Option<f64>,
    /// When the best assignment was found.
    pub best_found: Option<ImprovementJson>,
    /// Amount of remembered assignments.
    pub explored: usize,
    /// Why the search was stopped: `maxIterations` or `maxTime`.
    pub stop_reason: String,
    /// A history of best assignment changes.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub improvements: Vec<ImprovementJson>,
}

/// A search result in json format.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SolutionJson {
    /// Instance name.
    pub instance: String,
    /// Random seed used.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    /// Dispersion of the assignment.
    pub dispersion: usize,
    /// Spaces with their attractions.
    pub spaces: Vec<SpaceJson>,
    /// Attractions which are not placed in any space.
    pub unassigned: Vec<usize>,
    /// Attractions which do not fit into any space.
    pub unplaceable: Vec<usize>,
    /// Search statistic.
    pub statistic: StatisticJson,
}

impl<W: Write> TextSolution<W> for SolutionReport<'_> {
    fn write_text(&self, writer: &mut BufWriter<W>) -> Result<(), String> {
        write_text_solution(writer, self).map_err(|err| err.to_string())
    }
}

impl<W: Write> JsonSolution<W> for SolutionReport<'_> {
    fn write_json(&self, writer: &mut BufWriter<W>) -> Result<(), String> {
        serde_json::to_writer_pretty(&mut *writer, &create_solution_json(self))
            .map_err(|err| format!("cannot serialize solution: '{err}'"))?;
        writer.flush().map_err(|err| err.to_string())
    }
}

/// Deserializes solution from json.
pub fn deserialize_solution<R: std::io::Read>(reader: R) -> Result<SolutionJson, String> {
    serde_json::from_reader(reader).map_err(|err| format!("cannot deserialize solution: '{err}'"))
}

fn write_text_solution<W: Write>(writer: &mut BufWriter<W>, report: &SolutionReport) -> std::io::Result<()> {
    let assignment = report.assignment;
    let metrics = report.metrics;

    for (idx, ids) in assignment.spaces().iter().enumerate() {
        let ids = ids.iter().map(|id| id.to_string()).collect::<Vec<_>>().join(" ");
        writeln!(writer, "Space {idx}: {ids}")?;
    }

    let unassigned = assignment.unassigned();
    if !unassigned.is_empty() {
        let ids = unassigned.iter().map(|id| id.to_string()).collect::<Vec<_>>().join(" ");
        writeln!(writer, "Unassigned: {ids}")?;
    }

    writeln!(writer, "Dispersion: {}", report.dispersion)?;
    writeln!(writer)?;

    let or_na = |value: Option<String>| value.unwrap_or_else(|| "N/A".to_string());

    writeln!(writer, "Instance: {}", report.instance)?;
    writeln!(writer, "Seed: {}", or_na(report.seed.map(|seed| seed.to_string())))?;
    writeln!(writer, "Initial dispersion: {}", or_na(metrics.initial_dispersion.map(|value| value.to_string())))?;
    writeln!(writer, "Best dispersion: {}", report.dispersion)?;
    writeln!(writer, "Elapsed time (s): {:.2}", metrics.duration)?;
    writeln!(writer, "Average dispersion: {}", or_na(metrics.average_dispersion.map(|value| format!("{value:.2}"))))?;
    writeln!(
        writer,
        "Upper bound if stopped by time: {}",
        or_na(metrics.is_stopped_by_time().then(|| report.dispersion.to_string()))
    )?;
    writeln!(writer, "Average iteration time (s): {:.4}", metrics.duration / metrics.iterations.max(1) as f64)?;
    writeln!(writer, "Iterations: {}", metrics.iterations)?;

    metrics.unplaceable.iter().try_for_each(|id| writeln!(writer, "Warning: attraction {id} cannot be placed"))?;

    writer.flush()
}

fn create_solution_json(report: &SolutionReport) -> SolutionJson {
    let assignment = report.assignment;
    let problem = assignment.problem();
    let metrics = report.metrics;

    let spaces = assignment
        .spaces()
        .iter()
        .enumerate()
        .map(|(id, ids)| {
            let mut themes = ids.iter().filter_map(|&a| problem.attraction(a).map(|a| a.theme)).collect::<Vec<_>>();
            themes.sort_unstable();
            themes.dedup();

            SpaceJson { id, attractions: ids.clone(), themes, remaining: assignment.remaining(id) }
        })
        .collect();

    let to_json = |improvement: &Improvement| ImprovementJson {
        iteration: improvement.iteration,
        timestamp: improvement.timestamp,
        dispersion: improvement.dispersion,
    };

    SolutionJson {
        instance: report.instance.to_string(),
        seed: report.seed,
        dispersion: report.dispersion,
        spaces,
        unassigned: assignment.unassigned(),
        unplaceable: metrics.unplaceable.clone(),
        statistic: StatisticJson {
            duration: metrics.duration,
            iterations: metrics.iterations,
            scored: metrics.scored,
            duplicates: metrics.duplicates,
            initial_dispersion: metrics.initial_dispersion,
            average_dispersion: metrics.average_dispersion,
            best_found: metrics.best_found.as_ref().map(to_json),
            explored: metrics.explored,
            stop_reason: match metrics.stop_reason {
                StopReason::MaxIterations => "maxIterations",
                StopReason::MaxTime => "maxTime",
            }
            .to_string(),
            improvements: metrics.improvements.iter().map(to_json).collect(),
        },
    }
}
