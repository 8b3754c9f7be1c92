use crate::{Error, RandSource, SharedRandom, ThreadRandom};
use core::ops::Range;
use std::thread::scope;

const DRAWS: usize = 40_000;

fn run_range_stays_within_bounds<R>(rng: R)
where
    R: RandSource<i32> + RandSource<i64>,
{
    for _ in 0..DRAWS {
        let v = RandSource::<i32>::rand_range(&rng, -5..5).unwrap();
        assert!((-5..5).contains(&v), "{v} escaped [-5, 5)");
        let v = RandSource::<i64>::rand_range(&rng, i64::MAX - 3..i64::MAX).unwrap();
        assert!(v >= i64::MAX - 3 && v < i64::MAX);
    }
}

fn run_single_value_range_is_constant<R>(rng: R)
where
    R: RandSource<i64>,
{
    for _ in 0..100 {
        assert_eq!(rng.rand_range(41..42).unwrap(), 41);
    }
}

fn run_empty_range_is_rejected<R>(rng: R)
where
    R: RandSource<i32> + RandSource<usize>,
{
    let empty: Range<i32> = 3..3;
    assert_eq!(
        RandSource::<i32>::rand_range(&rng, empty),
        Err(Error::InvalidRange {
            low: "3".into(),
            high: "3".into(),
        })
    );
    #[allow(clippy::reversed_empty_ranges)]
    let reversed: Range<usize> = 9..2;
    assert!(matches!(
        RandSource::<usize>::rand_range(&rng, reversed),
        Err(Error::InvalidRange { .. })
    ));
}

fn run_buckets_are_roughly_uniform<R>(rng: R)
where
    R: RandSource<usize>,
{
    let mut buckets = [0usize; 4];
    for _ in 0..DRAWS {
        buckets[rng.rand_range(0..4).unwrap()] += 1;
    }
    let expected = DRAWS / 4;
    for (i, count) in buckets.iter().enumerate() {
        let diff = count.abs_diff(expected);
        assert!(
            diff < expected / 10,
            "bucket {i} has {count}, expected about {expected}"
        );
    }
}

#[test]
fn shared_random_range_stays_within_bounds() {
    run_range_stays_within_bounds(SharedRandom::new());
}

#[test]
fn thread_random_range_stays_within_bounds() {
    run_range_stays_within_bounds(ThreadRandom);
}

#[test]
fn shared_random_single_value_range_is_constant() {
    run_single_value_range_is_constant(SharedRandom::new());
}

#[test]
fn thread_random_single_value_range_is_constant() {
    run_single_value_range_is_constant(ThreadRandom);
}

#[test]
fn shared_random_empty_range_is_rejected() {
    run_empty_range_is_rejected(SharedRandom::new());
}

#[test]
fn thread_random_empty_range_is_rejected() {
    run_empty_range_is_rejected(ThreadRandom);
}

#[test]
fn shared_random_buckets_are_roughly_uniform() {
    run_buckets_are_roughly_uniform(SharedRandom::new());
}

#[test]
fn thread_random_buckets_are_roughly_uniform() {
    run_buckets_are_roughly_uniform(ThreadRandom);
}

fn run_full_width_usize_draws_vary<R>(rng: R)
where
    R: RandSource<usize>,
{
    let first = RandSource::<usize>::rand(&rng).unwrap();
    let varied = (0..64).any(|_| RandSource::<usize>::rand(&rng).unwrap() != first);
    assert!(varied, "64 full-width draws all returned {first}");
}

#[test]
fn shared_random_full_width_usize_draws_vary() {
    run_full_width_usize_draws_vary(SharedRandom::from_seed(3));
}

#[test]
fn thread_random_full_width_usize_draws_vary() {
    run_full_width_usize_draws_vary(ThreadRandom);
}

#[test]
fn seeded_sources_repeat_their_sequence() {
    let a = SharedRandom::from_seed(42);
    let b = SharedRandom::from_seed(42);
    for _ in 0..64 {
        let x = RandSource::<u64>::rand(&a).unwrap();
        let y = RandSource::<u64>::rand(&b).unwrap();
        assert_eq!(x, y);
    }
}

#[test]
fn clones_share_one_stream() {
    let a = SharedRandom::from_seed(7);
    let b = a.clone();
    let x1 = RandSource::<i64>::rand(&a).unwrap();
    let x2 = RandSource::<i64>::rand(&b).unwrap();

    let fresh = SharedRandom::from_seed(7);
    assert_eq!(RandSource::<i64>::rand(&fresh).unwrap(), x1);
    assert_eq!(RandSource::<i64>::rand(&fresh).unwrap(), x2);
}

#[test]
fn shared_random_is_safe_across_threads() {
    let rng = SharedRandom::new();
    let workers = 8;
    let per_worker = 5_000;

    let totals: Vec<usize> = scope(|s| {
        let handles: Vec<_> = (0..workers)
            .map(|_| {
                let rng = rng.clone();
                s.spawn(move || {
                    let mut seen = 0;
                    for _ in 0..per_worker {
                        let v = RandSource::<i32>::rand_range(&rng, 100..200).unwrap();
                        assert!((100..200).contains(&v));
                        seen += 1;
                    }
                    seen
                })
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    assert_eq!(totals.iter().sum::<usize>(), workers * per_worker);
}
