//! Concurrency-focused tests for the sort pipeline at the library level.
//!
//! These stress the coordination protocol harder than the unit tests do:
//! many workers contending for a tiny queue, repeated runs to shake out
//! interleaving-dependent bugs, and file-to-sorted-file workflows combining
//! `data_io` with `parallel_sort`.

use mqsort_lib::channel::Channel;
use mqsort_lib::data_io::{read_values, write_values};
use mqsort_lib::sort::{Message, ParallelSortConfig, Span, parallel_sort};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::Arc;
use tempfile::TempDir;

fn random_values(n: usize, seed: u64) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n).map(|_| rng.random::<f64>()).collect()
}

fn sorted_copy(values: &[f64]) -> Vec<f64> {
    let mut copy = values.to_vec();
    copy.sort_by(f64::total_cmp);
    copy
}

#[test]
fn test_many_workers_tiny_queue() {
    // Heavy contention: 16 workers sharing a 2-slot queue. Backpressure
    // must throttle splitting without deadlocking.
    let mut values = random_values(10_000, 5);
    let expected = sorted_copy(&values);
    let config = ParallelSortConfig { threads: 16, queue_capacity: 2, cutoff: 10 };
    parallel_sort(&mut values, &config).unwrap();
    assert_eq!(values, expected);
}

#[test]
fn test_repeated_runs_all_interleavings() {
    // The schedule differs run to run; the result must not.
    let input = random_values(2_000, 8);
    let expected = sorted_copy(&input);
    for _ in 0..10 {
        let mut values = input.clone();
        let config = ParallelSortConfig { threads: 8, queue_capacity: 16, cutoff: 10 };
        parallel_sort(&mut values, &config).unwrap();
        assert_eq!(values, expected);
    }
}

#[test]
fn test_file_to_sorted_file_workflow() {
    let temp_dir = TempDir::new().unwrap();
    let input_path = temp_dir.path().join("input.txt");
    let output_path = temp_dir.path().join("output.txt");

    let values = random_values(3_000, 21);
    write_values(&input_path, &values).unwrap();

    let mut loaded = read_values(&input_path).unwrap();
    assert_eq!(loaded, values);

    parallel_sort(&mut loaded, &ParallelSortConfig::default()).unwrap();
    write_values(&output_path, &loaded).unwrap();

    assert_eq!(read_values(&output_path).unwrap(), sorted_copy(&values));
}

#[test]
fn test_shutdown_drains_with_stale_messages() {
    // Reproduces the teardown pattern: a queue still carrying a circulating
    // Finish message when Shutdown is broadcast. Every worker must exit off
    // a single Shutdown even with other traffic in the ring.
    let channel = Arc::new(Channel::with_capacity(4));
    channel.send(Message::Finish(Span::new(0, 0)));

    let workers: Vec<_> = (0..3)
        .map(|_| {
            let channel = Arc::clone(&channel);
            std::thread::spawn(move || loop {
                match channel.recv() {
                    Message::Finish(span) => channel.send(Message::Finish(span)),
                    Message::Shutdown => {
                        channel.send(Message::Shutdown);
                        break;
                    }
                    Message::Work(_) => unreachable!("no work sent in this test"),
                }
            })
        })
        .collect();

    channel.send(Message::Shutdown);
    for worker in workers {
        worker.join().unwrap();
    }

    // The final forward leaves exactly one Shutdown (plus the stale Finish)
    // behind; nothing else.
    let mut leftovers = Vec::new();
    while !channel.is_empty() {
        leftovers.push(channel.recv());
    }
    assert!(leftovers.contains(&Message::Shutdown));
    assert!(leftovers.len() <= 2);
}

#[test]
fn test_sort_empty_and_tiny_inputs_terminate() {
    for n in [0usize, 1, 2, 3, 10, 11] {
        let mut values = random_values(n, n as u64);
        let expected = sorted_copy(&values);
        let config = ParallelSortConfig { threads: 4, queue_capacity: 50, cutoff: 10 };
        parallel_sort(&mut values, &config).unwrap();
        assert_eq!(values, expected, "failed for n={n}");
    }
}
