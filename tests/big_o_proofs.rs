//! Big-O complexity proofs for heap operations
//!
//! This module empirically verifies that heap operations meet the theoretical
//! complexity bounds using the `big-o-test` crate.
//!
//! ## Testing Strategy
//!
//! We use `test_algorithm` to measure batch operations. Note that for batch operations:
//! - O(1) amortized per-element operations appear as O(n) for n operations
//! - O(log n) operations appear as O(n log n) for n operations
//! - A single O(n) bulk build appears as O(n)
//!
//! Note: These are empirical timing tests, not formal proofs. They are ignored
//! by default because wall-clock measurements are noisy on shared machines;
//! `complexity_tests.rs` checks the same bounds by counting comparisons. Run
//! them with `cargo test --release --test big_o_proofs -- --ignored`.

use big_o_test::{test_algorithm, BigOAlgorithmComplexity};
use rust_meldable_heaps::binary::BinaryHeap;
use rust_meldable_heaps::leftist::WeightBiasedLeftistHeap;
use rust_meldable_heaps::maxiphobic::MaxiphobicHeap;
use rust_meldable_heaps::{Heap, Natural};

use ctor::ctor;
use parking_lot::RwLock;
use std::sync::Arc;

/// Sets up the ENV, affecting the Rust's test runner
#[ctor]
fn setup_env() {
    // cause tests to run serially -- timing measurements interfere with each other
    std::env::set_var("RUST_TEST_THREADS", "1");
}

/// Scrambled input so no heap hits its best case
fn scrambled(n: i32) -> Vec<i32> {
    (0..n).map(|i| i.wrapping_mul(7919) % n).collect()
}

// ============================================================================
// Helper functions for each operation
// ============================================================================

/// Test that n insertions has O(n log n) batch complexity at worst
fn test_insert_batch_complexity<H>(heap_name: &str)
where
    H: Heap<i32, Comparator = Natural> + Send + Sync,
{
    let heap = Arc::new(RwLock::new(H::with_comparator(Natural)));

    test_algorithm(
        &format!("{} insert batch", heap_name),
        3,
        || {
            *heap.write() = H::with_comparator(Natural);
        },
        10000,
        || {
            let mut h = heap.write();
            for i in scrambled(10000) {
                h.insert(i);
            }
            42
        },
        20000,
        || {
            let mut h = heap.write();
            for i in scrambled(20000) {
                h.insert(i);
            }
            42
        },
        BigOAlgorithmComplexity::ONLogN,
        BigOAlgorithmComplexity::ON,
    );
}

/// Test that n delete_minimum calls has O(n log n) batch complexity
fn test_delete_batch_complexity<H>(heap_name: &str)
where
    H: Heap<i32, Comparator = Natural> + Send + Sync,
{
    let heap = Arc::new(RwLock::new(H::with_comparator(Natural)));

    test_algorithm(
        &format!("{} delete_minimum batch", heap_name),
        3,
        || {
            *heap.write() = H::with_comparator(Natural);
        },
        10000,
        || {
            let mut h = heap.write();
            *h = H::from_vec_with(Natural, scrambled(10000));
            for _ in 0..10000 {
                assert!(
                    h.delete_minimum().is_ok(),
                    "delete_minimum() must succeed after building the heap"
                );
            }
            42
        },
        20000,
        || {
            let mut h = heap.write();
            *h = H::from_vec_with(Natural, scrambled(20000));
            for _ in 0..20000 {
                assert!(
                    h.delete_minimum().is_ok(),
                    "delete_minimum() must succeed after building the heap"
                );
            }
            42
        },
        BigOAlgorithmComplexity::ONLogN,
        BigOAlgorithmComplexity::ON,
    );
}

/// Test that a bulk build is a single O(n) pass
fn test_bulk_build_complexity<H>(heap_name: &str)
where
    H: Heap<i32, Comparator = Natural> + Send + Sync,
{
    let heap = Arc::new(RwLock::new(H::with_comparator(Natural)));

    test_algorithm(
        &format!("{} bulk build", heap_name),
        3,
        || {
            *heap.write() = H::with_comparator(Natural);
        },
        20000,
        || {
            *heap.write() = H::from_vec_with(Natural, scrambled(20000));
            42
        },
        40000,
        || {
            *heap.write() = H::from_vec_with(Natural, scrambled(40000));
            42
        },
        BigOAlgorithmComplexity::ON,
        BigOAlgorithmComplexity::ON,
    );
}

// ============================================================================
// Binary Heap Tests
// ============================================================================

#[test]
#[ignore = "timing sensitive"]
fn test_binary_insert() {
    test_insert_batch_complexity::<BinaryHeap<i32>>("BinaryHeap");
}

#[test]
#[ignore = "timing sensitive"]
fn test_binary_delete() {
    test_delete_batch_complexity::<BinaryHeap<i32>>("BinaryHeap");
}

#[test]
#[ignore = "timing sensitive"]
fn test_binary_bulk_build() {
    test_bulk_build_complexity::<BinaryHeap<i32>>("BinaryHeap");
}

// ============================================================================
// Weight-Biased Leftist Heap Tests
// ============================================================================

#[test]
#[ignore = "timing sensitive"]
fn test_leftist_insert() {
    test_insert_batch_complexity::<WeightBiasedLeftistHeap<i32>>("WeightBiasedLeftistHeap");
}

#[test]
#[ignore = "timing sensitive"]
fn test_leftist_delete() {
    test_delete_batch_complexity::<WeightBiasedLeftistHeap<i32>>("WeightBiasedLeftistHeap");
}

#[test]
#[ignore = "timing sensitive"]
fn test_leftist_bulk_build() {
    test_bulk_build_complexity::<WeightBiasedLeftistHeap<i32>>("WeightBiasedLeftistHeap");
}

// ============================================================================
// Maxiphobic Heap Tests
// ============================================================================

#[test]
#[ignore = "timing sensitive"]
fn test_maxiphobic_insert() {
    test_insert_batch_complexity::<MaxiphobicHeap<i32>>("MaxiphobicHeap");
}

#[test]
#[ignore = "timing sensitive"]
fn test_maxiphobic_delete() {
    test_delete_batch_complexity::<MaxiphobicHeap<i32>>("MaxiphobicHeap");
}

#[test]
#[ignore = "timing sensitive"]
fn test_maxiphobic_bulk_build() {
    test_bulk_build_complexity::<MaxiphobicHeap<i32>>("MaxiphobicHeap");
}
