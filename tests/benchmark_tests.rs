//! Performance benchmarks for the registry and aggregation hot paths

use game_hub::registry::{ClientEntry, ClientKind, ClientRegistry, Player};
use game_hub::snapshot::aggregate;
use game_hub::status::{StatusPayload, StatusPublisher};
use std::time::Instant;

fn socket(name: String, score: i32) -> ClientEntry {
    ClientEntry::new(ClientKind::Socket, Player { name, score })
}

/// Benchmarks a full aggregation pass over a large registry
#[test]
fn benchmark_aggregation_pass() {
    let mut registry = ClientRegistry::new();
    for i in 0..10_000 {
        registry.insert(socket(format!("player-{}", i), i - 5_000));
    }

    let iterations = 100;
    let start = Instant::now();

    for _ in 0..iterations {
        let snapshot = aggregate(&registry);
        assert_eq!(snapshot.client_count, 10_000);
    }

    let duration = start.elapsed();
    println!(
        "Aggregation: {} passes over 10k entries in {:?} ({:.2} ms/pass)",
        iterations,
        duration,
        duration.as_millis() as f64 / iterations as f64
    );

    // Should complete well within a second
    assert!(duration.as_secs() < 5);
}

/// Benchmarks registry insert/remove churn
#[test]
fn benchmark_registry_churn() {
    let mut registry = ClientRegistry::new();
    let iterations = 100_000;
    let start = Instant::now();

    for i in 0..iterations {
        let handle = registry.insert(socket(format!("p{}", i), i));
        registry.remove(handle);
    }

    let duration = start.elapsed();
    println!(
        "Registry churn: {} insert/remove pairs in {:?} ({:.2} ns/pair)",
        iterations,
        duration,
        duration.as_nanos() as f64 / iterations as f64
    );

    assert!(registry.is_empty());
    assert!(duration.as_secs() < 5);
}

/// Benchmarks status publish and read throughput
#[test]
fn benchmark_status_store() {
    let publisher = StatusPublisher::new();
    let iterations = 100_000;
    let start = Instant::now();

    for clients in 0..iterations {
        publisher.publish(StatusPayload { clients });
        let _ = publisher.read();
    }

    let duration = start.elapsed();
    println!(
        "Status store: {} publish/read pairs in {:?} ({:.2} ns/pair)",
        iterations,
        duration,
        duration.as_nanos() as f64 / iterations as f64
    );

    assert!(duration.as_secs() < 5);
}
