//! Combinator behaviour: laziness, in-place mutation and edge cases

mod common;

use common::{collect_ok, counting_source, failing_after};
use test_case::test_case;
use zzz::{
    drop_while, enumerate, enumerate_from, filter, from_iter, iota, iota_by, map, repeat, take,
    take_while, zip, GeneratorError,
};

#[test_case(0, &[] ; "take none")]
#[test_case(3, &[1, 2, 3] ; "take prefix")]
#[test_case(5, &[1, 2, 3, 4, 5] ; "take exact")]
#[test_case(50, &[1, 2, 3, 4, 5] ; "take more than available")]
fn test_take(count: usize, expected: &[i32]) {
    assert_eq!(collect_ok(take(from_iter(1..=5), count)), expected);
}

#[test_case(0, &[1, 2, 3, 4, 5] ; "drop none")]
#[test_case(3, &[4, 5] ; "drop prefix")]
#[test_case(5, &[] ; "drop exact")]
#[test_case(50, &[] ; "drop more than available")]
fn test_drop(count: usize, expected: &[i32]) {
    assert_eq!(collect_ok(zzz::drop(from_iter(1..=5), count)), expected);
}

#[test_case(0, 5, 1, &[0, 1, 2, 3, 4] ; "ascending")]
#[test_case(5, 0, -1, &[5, 4, 3, 2, 1] ; "descending")]
#[test_case(0, 10, 3, &[0, 3, 6, 9] ; "stride")]
#[test_case(5, 5, 1, &[] ; "empty range")]
#[test_case(0, 5, 0, &[] ; "zero step")]
#[test_case(0, 5, -1, &[] ; "step away from stop")]
fn test_iota(start: i32, stop: i32, step: i32, expected: &[i32]) {
    assert_eq!(collect_ok(iota_by(start, stop, step)), expected);
}

#[test]
fn test_filter_evens_scenario() {
    let evens = collect_ok(filter(from_iter(1..=10), |x| x % 2 == 0));
    assert_eq!(evens, vec![2, 4, 6, 8, 10]);
}

#[test]
fn test_map_lengths_scenario() {
    let words = vec!["foo", "bark", "blaze"];
    let lengths = collect_ok(map(from_iter(words), |w| w.len()));
    assert_eq!(lengths, vec![3, 4, 5]);
}

#[test]
fn test_zip_scenario() {
    let pairs = collect_ok(zip((from_iter(vec![1, 2, 3]), from_iter(vec![4, 5, 6]))));
    assert_eq!(pairs, vec![(1, 4), (2, 5), (3, 6)]);
}

#[test]
fn test_zip_three_inputs() {
    let triples = collect_ok(zip((
        from_iter(vec![1, 2]),
        from_iter(vec!['a', 'b']),
        from_iter(vec!["x", "y"]),
    )));
    assert_eq!(triples, vec![(1, 'a', "x"), (2, 'b', "y")]);
}

#[test]
fn test_zip_empty_first_input() {
    let (others, pulls) = counting_source(vec![1, 2, 3]);
    let pairs = collect_ok(zip((from_iter(Vec::<i32>::new()), others)));
    assert!(pairs.is_empty());
    assert_eq!(pulls.get(), 0);
}

#[test]
fn test_zip_reports_which_input_ran_short() {
    let mut gen = zip((
        from_iter(vec![1, 2]),
        from_iter(vec![1, 2]),
        from_iter(vec![1]),
    ));
    assert!(gen.next_value().unwrap().is_some());
    match gen.next_value() {
        Err(GeneratorError::LengthMismatch { index }) => assert_eq!(index, 2),
        other => panic!("expected length mismatch, got {:?}", other),
    }
}

#[test]
fn test_enumerate_empty_and_offset() {
    assert!(collect_ok(enumerate(from_iter(Vec::<u8>::new()))).is_empty());
    assert_eq!(
        collect_ok(enumerate_from(from_iter("ab".chars()), 5)),
        vec![(5, 'a'), (6, 'b')]
    );
}

#[test]
fn test_enumerate_from_max_index_does_not_overflow() {
    let pairs = collect_ok(enumerate_from(from_iter(['a']), usize::MAX));
    assert_eq!(pairs, vec![(usize::MAX, 'a')]);

    let mut gen = enumerate_from(from_iter(['a', 'b', 'c']), usize::MAX - 1);
    assert_eq!(gen.next_value().unwrap(), Some((usize::MAX - 1, 'a')));
    assert_eq!(gen.next_value().unwrap(), Some((usize::MAX, 'b')));
    assert!(matches!(gen.next_value(), Err(GeneratorError::IndexOverflow)));
    assert_eq!(gen.next_value().unwrap(), None);
}

#[test]
fn test_repeat_counts() {
    assert_eq!(collect_ok(repeat('z', 3)), vec!['z', 'z', 'z']);
    assert!(collect_ok(repeat('z', 0)).is_empty());
}

#[test]
fn test_take_never_over_pulls() {
    let (source, pulls) = counting_source((0..100).collect());
    let first = collect_ok(take(source, 3));
    assert_eq!(first, vec![0, 1, 2]);
    assert_eq!(pulls.get(), 3);
}

#[test]
fn test_take_while_pulls_only_through_first_failure() {
    let (source, pulls) = counting_source(vec![1, 2, 9, 3, 4]);
    let prefix = collect_ok(take_while(source, |x| *x < 5));
    assert_eq!(prefix, vec![1, 2]);
    assert_eq!(pulls.get(), 3);
}

#[test]
fn test_infinite_source_is_bounded_by_take() {
    let squares = collect_ok(take(map(iota(0u64, u64::MAX), |x| x * x), 4));
    assert_eq!(squares, vec![0, 1, 4, 9]);
}

#[test]
fn test_filter_mutates_source_in_place() {
    let mut values = vec![1, 2, 3, 4, 5, 6];
    for value in filter(from_iter(values.iter_mut()), |x| **x % 2 == 0) {
        *value.unwrap() *= 10;
    }
    assert_eq!(values, vec![1, 20, 3, 40, 5, 60]);
}

#[test]
fn test_take_and_drop_mutate_in_place() {
    let mut values = vec![0; 6];
    for value in take(zzz::drop(from_iter(values.iter_mut()), 2), 3) {
        *value.unwrap() = 7;
    }
    assert_eq!(values, vec![0, 0, 7, 7, 7, 0]);
}

#[test]
fn test_drop_while_mutates_in_place() {
    let mut values = vec![1, 2, 8, 1, 2];
    for value in drop_while(from_iter(values.iter_mut()), |x| **x < 5) {
        *value.unwrap() = 0;
    }
    assert_eq!(values, vec![1, 2, 0, 0, 0]);
}

#[test]
fn test_enumerate_mutates_in_place() {
    let mut values = vec![0usize; 4];
    for entry in enumerate(from_iter(values.iter_mut())) {
        let (index, value) = entry.unwrap();
        *value = index * index;
    }
    assert_eq!(values, vec![0, 1, 4, 9]);
}

#[test]
fn test_zip_mutates_both_sources() {
    let mut left = vec![1, 2, 3];
    let mut right = vec![10, 20, 30];
    for pair in zip((from_iter(left.iter_mut()), from_iter(right.iter_mut()))) {
        let (a, b) = pair.unwrap();
        std::mem::swap(a, b);
    }
    assert_eq!(left, vec![10, 20, 30]);
    assert_eq!(right, vec![1, 2, 3]);
}

#[test]
fn test_upstream_error_passes_through_pipeline() {
    let mut gen = enumerate(map(failing_after(2, "sensor offline"), |x| x + 1));
    assert_eq!(gen.next_value().unwrap(), Some((0, 1)));
    assert_eq!(gen.next_value().unwrap(), Some((1, 2)));

    let error = gen.next_value().unwrap_err();
    assert_eq!(error.to_string(), "producer failed: sensor offline");
    assert_eq!(gen.next_value().unwrap(), None);
}

#[test]
fn test_nested_pipeline_laziness() {
    let (source, pulls) = counting_source((1..=20).collect::<Vec<i32>>());
    let mut gen = take(filter(source, |x| x % 5 == 0), 2);

    assert_eq!(pulls.get(), 0);
    assert_eq!(gen.next_value().unwrap(), Some(5));
    assert_eq!(pulls.get(), 5);
    assert_eq!(gen.next_value().unwrap(), Some(10));
    assert_eq!(gen.next_value().unwrap(), None);
    assert_eq!(pulls.get(), 10);
}
