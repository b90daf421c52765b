#![allow(clippy::unwrap_used, clippy::expect_used)]

//! Concurrency properties of the in-memory repository

mod common;

use std::collections::HashSet;
use std::sync::Arc;

use common::{is_whole, numbered};
use consignment::domain::ConsignmentRepository;
use consignment::infra::InMemoryConsignmentRepository;
use tokio::sync::Barrier;

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_creates_are_all_kept_exactly_once() {
    let repo = Arc::new(InMemoryConsignmentRepository::new());

    let handles: Vec<_> = (0..200)
        .map(|i| {
            let repo = Arc::clone(&repo);
            tokio::spawn(async move { repo.create(numbered(i)).unwrap() })
        })
        .collect();
    for h in handles {
        h.await.unwrap();
    }

    let all = repo.get_all();
    assert_eq!(all.len(), 200);

    let weights: HashSet<i32> = all.iter().map(|c| c.weight).collect();
    assert_eq!(weights, (0..200).collect::<HashSet<_>>());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn interleaved_reads_never_see_torn_records() {
    const WRITERS: usize = 100;
    const READERS: usize = 10;

    let repo = Arc::new(InMemoryConsignmentRepository::new());
    let start = Arc::new(Barrier::new(WRITERS + READERS));

    let writers: Vec<_> = (0..WRITERS)
        .map(|i| {
            let repo = Arc::clone(&repo);
            let start = Arc::clone(&start);
            tokio::spawn(async move {
                start.wait().await;
                repo.create(numbered(i32::try_from(i).unwrap())).unwrap();
            })
        })
        .collect();

    // Each reader keeps taking snapshots until it sees every write land.
    let readers: Vec<_> = (0..READERS)
        .map(|_| {
            let repo = Arc::clone(&repo);
            let start = Arc::clone(&start);
            tokio::spawn(async move {
                start.wait().await;
                let mut last_len = 0;
                let mut reads = 0usize;
                loop {
                    let snapshot = repo.get_all();
                    reads += 1;
                    assert!(snapshot.iter().all(is_whole), "torn record observed");
                    assert!(snapshot.len() >= last_len, "snapshot shrank");
                    assert!(snapshot.len() <= WRITERS);
                    last_len = snapshot.len();
                    if last_len == WRITERS {
                        break reads;
                    }
                    tokio::task::yield_now().await;
                }
            })
        })
        .collect();

    for w in writers {
        w.await.unwrap();
    }
    for r in readers {
        assert!(r.await.unwrap() >= 1);
    }

    let all = repo.get_all();
    assert_eq!(all.len(), WRITERS);
    assert!(all.iter().all(is_whole));
}

#[test]
fn repeated_reads_without_writes_are_identical() {
    let repo = InMemoryConsignmentRepository::new();
    for i in 0..5 {
        repo.create(numbered(i)).unwrap();
    }

    let first = repo.get_all();
    let second = repo.get_all();
    assert_eq!(first, second);
    assert_eq!(first, (0..5).map(numbered).collect::<Vec<_>>());
}

#[test]
fn fresh_repository_returns_empty_sequence() {
    let repo = InMemoryConsignmentRepository::new();
    assert!(repo.get_all().is_empty());
}
