use super::*;

#[test]
fn can_repeat_sequence_with_same_seed() {
    let first = DefaultRandom::new_with_seed(42);
    let second = DefaultRandom::new_with_seed(42);

    let first = (0..20).map(|_| first.uniform_int(0, 100)).collect::<Vec<_>>();
    let second = (0..20).map(|_| second.uniform_int(0, 100)).collect::<Vec<_>>();

    assert_eq!(first, second);
}

#[test]
fn can_share_state_between_rng_handles() {
    let random = DefaultRandom::new_with_seed(7);
    let reference = DefaultRandom::new_with_seed(7);

    let from_handle = random.get_rng().next_u64();
    let from_random = random.get_rng().next_u64();

    let mut reference_rng = reference.get_rng();
    assert_eq!(from_handle, reference_rng.next_u64());
    assert_eq!(from_random, reference_rng.next_u64());
}

#[test]
fn can_return_values_in_closed_range() {
    let random = DefaultRandom::new_with_seed(0);

    (0..1000).for_each(|_| {
        let value = random.uniform_int(-2, 3);
        assert!((-2..=3).contains(&value));
    });

    assert_eq!(random.uniform_int(5, 5), 5);
}
