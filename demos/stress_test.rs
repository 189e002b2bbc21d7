//! Stress suite for collectkit.
//!
//! Covers: large collection mapping and constrained sums at scale
//!
//! Run with: cargo run --release --example stress_test

use collectkit::{sum_numbers, sum_with_map2, Collection, Mapping};
use std::time::Instant;

fn main() {
    println!("========================================");
    println!(" collectkit Stress Suite");
    println!("========================================\n");

    test_map_scalability(1_000_000);
    test_sum_scalability(1_000_000);
}

// -----------------------------------------------------------------------------
// 1. Map scalability
// -----------------------------------------------------------------------------
fn test_map_scalability(size: usize) {
    println!("Test: Map ({} elements, repeated appends)", size);

    let start = Instant::now();
    let mut c = Collection::new();
    for chunk in (0..size as i64).collect::<Vec<_>>().chunks(3) {
        c.append(chunk.iter().copied());
    }
    let build_time = start.elapsed();

    let start = Instant::now();
    let doubled = c.map(|val| val * 2);
    let map_time = start.elapsed();

    println!("   Build Time:       {:?}", build_time);
    println!("   Map Time:         {:?}", map_time);
    println!(
        "   Throughput:       {:.0} elements/sec",
        size as f64 / map_time.as_secs_f64()
    );

    // Validate order and non-mutation
    let ok = c.len() == doubled.len()
        && c.iter().zip(doubled.iter()).all(|(a, b)| *b == a * 2);
    println!("   Consistency:      {}\n", if ok { "PASSED" } else { "FAILED" });
}

// -----------------------------------------------------------------------------
// 2. Sum scalability
// -----------------------------------------------------------------------------
fn test_sum_scalability(size: usize) {
    println!("Test: Sums ({} elements)", size);

    let ints: Vec<i64> = (0..size as i64).collect();
    let map: Mapping<usize, i64> = ints.iter().enumerate().map(|(k, v)| (k, *v)).collect();

    let start = Instant::now();
    let slice_sum = sum_numbers(&ints);
    let slice_time = start.elapsed();

    let start = Instant::now();
    let map_sum = sum_with_map2(&map);
    let map_time = start.elapsed();

    let expected = (size as i64 - 1) * size as i64 / 2;
    println!("   Slice Sum:        {} in {:?}", slice_sum, slice_time);
    println!("   Map Sum:          {} in {:?}", map_sum, map_time);
    println!(
        "   Consistency:      {}",
        if slice_sum == expected && map_sum == expected {
            "PASSED"
        } else {
            "FAILED"
        }
    );
}
