use super::*;
use crate::helpers::models::create_problem;
use crate::helpers::utils::create_collecting_logger;

fn create_search_context(iterations: usize) -> SearchContext {
    let mut search_ctx = SearchContext::new();
    search_ctx.statistics.iterations = iterations;

    search_ctx
}

parameterized_test! {can_detect_mode_capabilities, (mode, logging, tracking), {
    assert_eq!(mode.is_logging(), logging);
    assert_eq!(mode.is_tracking(), tracking);
}}

can_detect_mode_capabilities! {
    case_01_none: (TelemetryMode::None, false, false),
    case_02_logging: (TelemetryMode::OnlyLogging { log_every: 10 }, true, false),
    case_03_metrics: (TelemetryMode::OnlyMetrics, false, true),
    case_04_all: (TelemetryMode::All { log_every: 10 }, true, true),
}

parameterized_test! {can_log_progress_periodically, (log_every, iterations, expected), {
    let (logger, messages) = create_collecting_logger();
    let telemetry = Telemetry::new(TelemetryMode::OnlyLogging { log_every }, logger);

    telemetry.on_iteration(&create_search_context(iterations), 0.5);

    assert_eq!(messages.lock().unwrap().len(), expected);
}}

can_log_progress_periodically! {
    case_01_on_period: (5, 10, 1),
    case_02_off_period: (5, 7, 0),
    case_03_disabled: (0, 10, 0),
}

#[test]
fn can_format_progress_message() {
    let (logger, messages) = create_collecting_logger();
    let telemetry = Telemetry::new(TelemetryMode::All { log_every: 1 }, logger);
    let mut search_ctx = create_search_context(4);
    search_ctx.statistics.scored = 3;
    search_ctx.statistics.duplicates = 1;

    telemetry.on_iteration(&search_ctx, 0.4);

    let messages = messages.lock().unwrap();
    assert!(messages[0].ends_with("4 iterations done (3 scored, 1 duplicates), 40% of budget consumed"));
}

#[test]
fn can_track_improvements_without_logging() {
    let (logger, messages) = create_collecting_logger();
    let mut telemetry = Telemetry::new(TelemetryMode::OnlyMetrics, logger);
    let search_ctx = create_search_context(3);

    telemetry.on_improvement(&search_ctx, 0, 5);
    telemetry.on_improvement(&search_ctx, 2, 3);

    assert!(messages.lock().unwrap().is_empty());
    let improvements = telemetry.take_improvements();
    assert_eq!(improvements.iter().map(|i| (i.iteration, i.dispersion)).collect::<Vec<_>>(), vec![(0, 5), (2, 3)]);
    assert!(telemetry.take_improvements().is_empty());
}

#[test]
fn can_log_improvement_without_tracking() {
    let (logger, messages) = create_collecting_logger();
    let mut telemetry = Telemetry::new(TelemetryMode::OnlyLogging { log_every: 0 }, logger);

    telemetry.on_improvement(&create_search_context(1), 1, 4);

    assert!(messages.lock().unwrap()[0].ends_with("iteration 1: best dispersion found: 4"));
    assert!(telemetry.take_improvements().is_empty());
}

#[test]
fn can_warn_about_unplaceable_attractions() {
    let (logger, messages) = create_collecting_logger();
    let telemetry = Telemetry::new(TelemetryMode::OnlyLogging { log_every: 0 }, logger);
    let problem = create_problem(2, 5, &[(1, 3), (1, 7), (2, 9)]);

    telemetry.on_unplaceable(&problem, problem.unplaceable().as_slice());

    assert_eq!(
        *messages.lock().unwrap(),
        vec![
            "warning: attraction 1 of size 7 exceeds space capacity 5 and cannot be placed".to_string(),
            "warning: attraction 2 of size 9 exceeds space capacity 5 and cannot be placed".to_string(),
        ]
    );
}

#[test]
fn can_log_termination_reason() {
    let (logger, messages) = create_collecting_logger();
    let telemetry = Telemetry::new(TelemetryMode::OnlyLogging { log_every: 0 }, logger);

    telemetry.on_termination(&create_search_context(7), StopReason::MaxTime);

    assert!(messages.lock().unwrap()[0].ends_with("search is stopped by max time after 7 iterations"));
}

#[test]
fn can_stay_silent_without_logging() {
    let (logger, messages) = create_collecting_logger();
    let telemetry = Telemetry::new(TelemetryMode::None, logger);

    telemetry.log("message");
    telemetry.on_termination(&create_search_context(1), StopReason::MaxIterations);

    assert!(messages.lock().unwrap().is_empty());
}
