use super::*;
use crate::helpers::models::*;
use crate::helpers::utils::FakeRandom;
use crate::models::calculate_dispersion;
use crate::utils::DefaultRandom;

parameterized_test! {can_reject_invalid_alpha, alpha, {
    assert!(RandomizedGreedy::new(alpha).is_err());
}}

can_reject_invalid_alpha! {
    case_01_zero: 0.,
    case_02_negative: -0.1,
    case_03_above_one: 1.5,
    case_04_nan: f64::NAN,
}

parameterized_test! {can_get_rcl_size, (candidates, alpha, expected), {
    assert_eq!(RandomizedGreedy::new(alpha).unwrap().get_rcl_size(candidates), expected);
}}

can_get_rcl_size! {
    case_01_tiny_alpha: (10, 0.01, 1),
    case_02_full_alpha: (10, 1., 10),
    case_03_floor: (10, 0.35, 3),
    case_04_single: (1, 0.5, 1),
    case_05_below_one: (3, 0.3, 1),
    case_06_half: (4, 0.5, 2),
}

#[test]
fn can_rank_candidates_by_affinity_then_remaining_capacity() {
    let problem = create_problem(3, 10, &[(1, 3), (2, 2), (1, 4), (3, 1), (2, 9)]);
    let assignment = create_assignment(problem, &[&[0], &[1]]);
    let greedy = RandomizedGreedy::new(0.5).unwrap();

    assert_eq!(greedy.get_ranked_candidates(&assignment, 2), vec![0, 2, 1]);
    assert_eq!(greedy.get_ranked_candidates(&assignment, 3), vec![2, 1, 0]);
    assert_eq!(greedy.get_ranked_candidates(&assignment, 4), vec![2]);
}

#[test]
fn can_keep_lower_space_first_on_ties() {
    let problem = create_problem(3, 10, &[(1, 3)]);
    let assignment = Assignment::new(problem);
    let greedy = RandomizedGreedy::new(0.5).unwrap();

    assert_eq!(greedy.get_ranked_candidates(&assignment, 0), vec![0, 1, 2]);
}

#[test]
fn can_construct_feasible_assignments() {
    let problem = create_mixed_problem();

    for alpha in [0.1, 0.5, 1.] {
        let greedy = RandomizedGreedy::new(alpha).unwrap();
        for seed in 0..10 {
            let random = DefaultRandom::new_with_seed(seed);

            let assignment = greedy.construct(problem.clone(), &random).unwrap();

            assert!(assignment.check().is_ok());
            assert_eq!(assignment.assigned(), 12);
        }
    }
}

#[test]
fn can_leave_unplaceable_attraction_unassigned() {
    let problem = create_problem(2, 5, &[(1, 3), (2, 6)]);
    let greedy = RandomizedGreedy::new(1.).unwrap();

    let assignment = greedy.construct(problem, &DefaultRandom::new_with_seed(0)).unwrap();

    assert_eq!(assignment.unassigned(), vec![1]);
    assert_eq!(assignment.assigned(), 1);
    assert!(assignment.check().is_ok());
}

#[test]
fn can_concentrate_themes_when_top_candidate_is_always_selected() {
    let greedy = RandomizedGreedy::new(1.).unwrap();

    let assignment = greedy.construct(create_two_themes_problem(), &FakeRandom::default()).unwrap();

    assert_eq!(assignment.assigned(), 3);
    assert_eq!(calculate_dispersion(&assignment), 2);
}

#[test]
fn can_behave_as_pure_greedy_with_tiny_alpha() {
    let greedy = RandomizedGreedy::new(f64::MIN_POSITIVE).unwrap();
    let problem = create_problem(3, 10, &[(1, 3)]);

    let spaces = (0..50)
        .map(|seed| greedy.construct(problem.clone(), &DefaultRandom::new_with_seed(seed)).unwrap())
        .map(|assignment| assignment.location(0))
        .collect::<Vec<_>>();

    assert!(spaces.iter().all(|space| *space == Some(0)));
}

#[test]
fn can_behave_as_pure_random_with_full_alpha() {
    let greedy = RandomizedGreedy::new(1.).unwrap();
    let problem = create_problem(3, 10, &[(1, 3)]);

    let mut counts = [0_usize; 3];
    (0..300)
        .filter_map(|seed| greedy.construct(problem.clone(), &DefaultRandom::new_with_seed(seed)).unwrap().location(0))
        .for_each(|space| counts[space] += 1);

    assert!(counts.iter().all(|&count| count > 0), "unexpected distribution: {counts:?}");
}

#[test]
fn can_repeat_construction_with_same_seed() {
    let problem = create_mixed_problem();
    let greedy = RandomizedGreedy::new(0.7).unwrap();

    let first = greedy.construct(problem.clone(), &DefaultRandom::new_with_seed(11)).unwrap();
    let second = greedy.construct(problem, &DefaultRandom::new_with_seed(11)).unwrap();

    assert_eq!(first.spaces(), second.spaces());
}
