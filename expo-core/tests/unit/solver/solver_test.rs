use super::*;
use crate::helpers::models::*;
use crate::helpers::utils::{create_collecting_logger, create_silent_environment};
use crate::solver::termination::StopReason;
use crate::utils::DefaultRandom;

fn create_builder(problem: Arc<Problem>, alpha: f64, max_iterations: usize) -> Builder {
    Builder::new(problem)
        .with_alpha(alpha)
        .with_max_iterations(Some(max_iterations))
        .with_environment(create_silent_environment(0))
}

#[test]
fn can_concentrate_themes_in_separate_spaces() {
    for alpha in [0.1, 0.5, 1.] {
        for seed in 0..10 {
            let (assignment, dispersion, metrics) = create_builder(create_two_themes_problem(), alpha, 10)
                .with_seed(Some(seed))
                .build()
                .unwrap()
                .solve()
                .unwrap();

            assert_eq!(dispersion, 2, "alpha {alpha}, seed {seed}");
            assert_eq!(assignment.assigned(), 3, "alpha {alpha}, seed {seed}");
            assert_eq!(calculate_dispersion(&assignment), 2);
            assert_eq!(get_sorted_spaces(&assignment).iter().filter(|ids| *ids == &vec![0, 1]).count(), 1);
            assert_eq!(metrics.iterations, 10);
            assert_eq!(metrics.scored + metrics.duplicates, 10);
            assert_eq!(metrics.best_dispersion, Some(2));
        }
    }
}

#[test]
fn can_keep_all_placeable_attractions_in_result() {
    let problems = [
        create_two_themes_problem(),
        create_mixed_problem(),
        create_problem(2, 10, &[(1, 5), (1, 5), (2, 10), (3, 11)]),
    ];

    for problem in problems {
        let placeable = problem.attractions().len() - problem.unplaceable().len();

        for alpha in [0.1, 0.5, 1.] {
            for seed in 0..10 {
                let (assignment, _, metrics) =
                    create_builder(problem.clone(), alpha, 10).with_seed(Some(seed)).build().unwrap().solve().unwrap();

                assert_eq!(assignment.assigned(), placeable, "alpha {alpha}, seed {seed}");
                assert!(assignment.check().is_ok());
                assert_eq!(metrics.unplaceable, problem.unplaceable());
            }
        }
    }
}

#[test]
fn can_prefer_assignment_with_more_placed_attractions() {
    let problem = create_two_themes_problem();
    let split = create_assignment(problem.clone(), &[&[0], &[1]]);
    let full = create_assignment(problem, &[&[0, 1], &[2]]);

    let split = Incumbent::new(split.clone(), calculate_dispersion(&split));
    let full = Incumbent::new(full.clone(), calculate_dispersion(&full));

    assert_eq!(split.rank(), (1, 1));
    assert_eq!(full.rank(), (0, 2));
    assert!(full.rank() < split.rank());
}

#[test]
fn can_return_empty_assignment_when_nothing_fits() {
    let problem = create_problem(1, 5, &[(1, 6)]);

    let (assignment, dispersion, metrics) = create_builder(problem, 0.5, 3).build().unwrap().solve().unwrap();

    assert_eq!(dispersion, 0);
    assert_eq!(assignment.assigned(), 0);
    assert_eq!(assignment.unassigned(), vec![0]);
    assert_eq!(metrics.unplaceable, vec![0]);
    assert_eq!(metrics.scored, 1);
    assert_eq!(metrics.duplicates, 2);
}

#[test]
fn can_stop_by_iterations_even_when_time_remains() {
    let (_, _, metrics) = create_builder(create_mixed_problem(), 0.5, 1)
        .with_max_time(Some(1000.))
        .build()
        .unwrap()
        .solve()
        .unwrap();

    assert_eq!(metrics.iterations, 1);
    assert_eq!(metrics.scored, 1);
    assert_eq!(metrics.stop_reason, StopReason::MaxIterations);
    assert!(!metrics.is_stopped_by_time());
}

#[test]
fn can_stop_by_time() {
    let (assignment, _, metrics) = Builder::new(create_mixed_problem())
        .with_alpha(0.5)
        .with_max_time(Some(0.05))
        .with_environment(create_silent_environment(0))
        .build()
        .unwrap()
        .solve()
        .unwrap();

    assert!(metrics.iterations > 0);
    assert!(metrics.duration > 0.05);
    assert!(metrics.is_stopped_by_time());
    assert!(assignment.check().is_ok());
}

#[test]
fn can_fail_when_nothing_is_scored() {
    let result = create_builder(create_two_themes_problem(), 0.5, 0).build().unwrap().solve();

    let error = result.err().map(|err| err.to_string()).unwrap_or_default();
    assert_eq!(error, "cannot find any solution: search is stopped by max iterations before any iteration is scored");
}

#[test]
fn can_repeat_search_with_same_seed() {
    let run = || {
        let (assignment, dispersion, metrics) =
            create_builder(create_mixed_problem(), 0.6, 20).with_seed(Some(7)).build().unwrap().solve().unwrap();

        (assignment.spaces().to_vec(), dispersion, metrics.scored, metrics.initial_dispersion, metrics.explored)
    };

    assert_eq!(run(), run());
}

#[test]
fn can_count_duplicate_iterations() {
    let problem = create_problem(1, 10, &[(1, 3)]);

    let (_, dispersion, metrics) = create_builder(problem, 0.5, 5).build().unwrap().solve().unwrap();

    assert_eq!(dispersion, 1);
    assert_eq!(metrics.scored, 1);
    assert_eq!(metrics.duplicates, 4);
    assert_eq!(metrics.explored, 1);
}

#[test]
fn can_score_every_iteration_with_disabled_explored_set() {
    let problem = create_problem(1, 10, &[(1, 3)]);

    let (_, _, metrics) =
        create_builder(problem, 0.5, 5).with_explored(ExploredPolicy::Disabled).build().unwrap().solve().unwrap();

    assert_eq!(metrics.scored, 5);
    assert_eq!(metrics.duplicates, 0);
    assert_eq!(metrics.explored, 0);
    assert_eq!(metrics.initial_dispersion, Some(1));
    assert_eq!(metrics.average_dispersion, Some(1.));
    assert_eq!(metrics.best_found.map(|found| found.iteration), Some(0));
}

#[test]
fn can_track_improvement_history() {
    let (_, dispersion, metrics) = create_builder(create_mixed_problem(), 1., 30)
        .with_max_depth(Some(1))
        .with_telemetry(TelemetryMode::OnlyMetrics)
        .build()
        .unwrap()
        .solve()
        .unwrap();

    let improvements = metrics.improvements;
    assert!(!improvements.is_empty());
    assert_eq!(improvements[0].iteration, 0);
    assert!(improvements.windows(2).all(|pair| pair[1].dispersion < pair[0].dispersion));
    assert_eq!(improvements.last().map(|i| i.dispersion), Some(dispersion));
    assert_eq!(metrics.best_found.map(|found| found.dispersion), Some(dispersion));
    let average = metrics.average_dispersion.unwrap();
    assert!(average >= dispersion as f64);
}

#[test]
fn can_log_search_progress() {
    let (logger, messages) = create_collecting_logger();
    let environment = Arc::new(Environment { random: Arc::new(DefaultRandom::new_with_seed(0)), logger });
    let problem = create_problem(2, 10, &[(1, 5), (2, 12)]);

    Builder::new(problem)
        .with_alpha(0.5)
        .with_max_iterations(Some(3))
        .with_telemetry(TelemetryMode::OnlyLogging { log_every: 0 })
        .with_environment(environment)
        .build()
        .unwrap()
        .solve()
        .unwrap();

    let messages = messages.lock().unwrap();
    assert!(messages.contains(&"configured to use alpha 0.5".to_string()));
    assert!(messages.contains(&"configured to use max-iterations 3".to_string()));
    assert!(messages.contains(
        &"warning: attraction 1 of size 12 exceeds space capacity 10 and cannot be placed".to_string()
    ));
    assert!(messages.iter().any(|msg| msg.ends_with("iteration 0: best dispersion found: 1")));
    assert!(messages.last().is_some_and(|msg| msg.ends_with("search is stopped by max iterations after 3 iterations")));
}
