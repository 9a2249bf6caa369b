#[cfg(test)]
#[path = "../../tests/unit/commands/solve_test.rs"]
mod solve_test;

use super::*;
use clap::{Arg, ArgAction, Command};
use expo_cli::expo_core::utils::Environment;
use expo_cli::extensions::solve::config::{Config, LoggingConfig, create_builder_from_config, read_config};
use expo_cli::extensions::solve::reader::InstanceProblem;
use expo_cli::extensions::solve::writer::{JsonSolution, SolutionReport, TextSolution};
use std::io::BufReader;
use std::path::Path;
use std::sync::Arc;

const INSTANCE_ARG_NAME: &str = "INSTANCE";
const SEED_ARG_NAME: &str = "seed";
const ALPHA_ARG_NAME: &str = "alpha";
const ITERATIONS_ARG_NAME: &str = "max-iterations";
const TIME_ARG_NAME: &str = "max-time";
const DEPTH_ARG_NAME: &str = "max-depth";
const CONFIG_ARG_NAME: &str = "config";
const OUT_RESULT_ARG_NAME: &str = "out-result";
const OUT_FORMAT_ARG_NAME: &str = "out-format";
const LOG_ARG_NAME: &str = "log";
const CHECK_ARG_NAME: &str = "check";

pub fn get_solve_app() -> Command {
    Command::new("solve")
        .about("Distributes attractions across spaces minimizing theme dispersion")
        .arg(Arg::new(INSTANCE_ARG_NAME).help("Sets the instance file to use").required(true).index(1))
        .arg(
            Arg::new(SEED_ARG_NAME)
                .help("Specifies random seed which makes the run repeatable")
                .short('s')
                .long(SEED_ARG_NAME)
                .required(true),
        )
        .arg(
            Arg::new(ALPHA_ARG_NAME)
                .help("Specifies restricted candidate list parameter in (0, 1] range")
                .short('a')
                .long(ALPHA_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(ITERATIONS_ARG_NAME)
                .help("Specifies maximum number of iterations")
                .short('n')
                .long(ITERATIONS_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(TIME_ARG_NAME)
                .help("Specifies max time algorithm run in seconds")
                .short('t')
                .long(TIME_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(DEPTH_ARG_NAME)
                .help("Specifies max amount of accepted moves per local search. Default is 100")
                .short('d')
                .long(DEPTH_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(CONFIG_ARG_NAME)
                .help("Specifies path to algorithm configuration file")
                .short('c')
                .long(CONFIG_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(OUT_RESULT_ARG_NAME)
                .help("Specifies path to file for result output")
                .short('o')
                .long(OUT_RESULT_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(OUT_FORMAT_ARG_NAME)
                .help("Specifies result output format")
                .long(OUT_FORMAT_ARG_NAME)
                .value_parser(["text", "json"])
                .default_value("text"),
        )
        .arg(
            Arg::new(LOG_ARG_NAME)
                .help("Specifies whether default logging is enabled")
                .short('l')
                .long(LOG_ARG_NAME)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new(CHECK_ARG_NAME)
                .help("Specifies whether final assignment should be checked for feasibility")
                .long(CHECK_ARG_NAME)
                .action(ArgAction::SetTrue),
        )
}

pub fn run_solve(
    matches: &ArgMatches,
    out_writer_func: fn(Option<File>) -> BufWriter<Box<dyn Write>>,
) -> Result<(), String> {
    let instance_path = matches.get_one::<String>(INSTANCE_ARG_NAME).ok_or("instance file is not specified")?;
    let seed = parse_value::<u64>(matches, SEED_ARG_NAME, "random seed")?.ok_or("random seed is not specified")?;
    let alpha = parse_value::<f64>(matches, ALPHA_ARG_NAME, "alpha")?;
    let max_iterations = parse_value::<usize>(matches, ITERATIONS_ARG_NAME, "max iterations")?;
    let max_time = parse_value::<f64>(matches, TIME_ARG_NAME, "max time")?;
    let max_depth = parse_value::<usize>(matches, DEPTH_ARG_NAME, "max depth")?;
    let out_format = matches.get_one::<String>(OUT_FORMAT_ARG_NAME).map(String::as_str).unwrap_or("text");

    let problem = BufReader::new(open_file(instance_path, "instance")?)
        .read_instance()
        .map_err(|err| format!("cannot read instance '{instance_path}': {err}"))?;
    let problem = Arc::new(problem);

    let mut config = match matches.get_one::<String>(CONFIG_ARG_NAME) {
        Some(config_path) => read_config(BufReader::new(open_file(config_path, "config")?))?,
        None => Config::default(),
    };

    if matches.get_flag(LOG_ARG_NAME) {
        let telemetry = config.telemetry.get_or_insert_with(Default::default);
        if !telemetry.logging.as_ref().is_some_and(|logging| logging.enabled) {
            telemetry.logging = Some(LoggingConfig { enabled: true, log_every: None });
        }
    }

    let mut builder =
        create_builder_from_config(problem, Arc::new(Environment::default()), &config).with_seed(Some(seed));

    if let Some(alpha) = alpha {
        builder = builder.with_alpha(alpha);
    }
    if max_iterations.is_some() {
        builder = builder.with_max_iterations(max_iterations);
    }
    if max_time.is_some() {
        builder = builder.with_max_time(max_time);
    }
    if max_depth.is_some() {
        builder = builder.with_max_depth(max_depth);
    }

    let (assignment, dispersion, metrics) =
        builder.build().and_then(|solver| solver.solve()).map_err(|err| format!("cannot solve instance: {err}"))?;

    if matches.get_flag(CHECK_ARG_NAME) {
        assignment.check().map_err(|err| format!("assignment check failed: {err}"))?;
    }

    let out_file =
        matches.get_one::<String>(OUT_RESULT_ARG_NAME).map(|path| create_file(path, "out result")).transpose()?;
    let mut writer = out_writer_func(out_file);

    let report = SolutionReport {
        instance: get_instance_name(instance_path),
        seed: Some(seed),
        assignment: &assignment,
        dispersion,
        metrics: &metrics,
    };

    write_report(&report, out_format, &mut writer)
}

fn write_report(
    report: &SolutionReport,
    out_format: &str,
    writer: &mut BufWriter<Box<dyn Write>>,
) -> Result<(), String> {
    match out_format {
        "json" => report.write_json(writer),
        "text" => report.write_text(writer),
        _ => Err(format!("unknown output format: '{out_format}'")),
    }
}

fn get_instance_name(instance_path: &str) -> &str {
    Path::new(instance_path).file_name().and_then(|name| name.to_str()).unwrap_or(instance_path)
}
