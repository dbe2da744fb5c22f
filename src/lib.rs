//! Meldable and Array-Backed Min-Heaps for Rust
//!
//! This crate provides three interchangeable priority queues behind one
//! [`Heap`] trait. Each is a min-heap over a caller-supplied comparator, so
//! the element type only has to implement [`Ord`] when you use the default
//! [`Natural`] order.
//!
//! # Features
//!
//! - **Binary Heap**: complete binary tree in a growable array; O(log n) insert and
//!   delete-minimum; O(n) bottom-up construction
//! - **Weight-Biased Leftist Heap**: boxed binary tree with left subtrees at least as
//!   heavy as right ones; O(log n) insert, delete-minimum and meld
//! - **Maxiphobic Heap**: boxed binary tree that merges the two lighter of three
//!   candidate subtrees; O(log n) insert, delete-minimum and meld
//!
//! All three support O(1) minimum lookup, O(n) bulk construction from an
//! unordered vector, and deep copies that share nothing with the original.
//! None of them supports `decrease_key`: elements are immutable once inserted.
//!
//! # Example
//!
//! ```rust
//! use rust_meldable_heaps::{Heap, HeapError};
//! use rust_meldable_heaps::binary::BinaryHeap;
//! use rust_meldable_heaps::compare::Reverse;
//! use rust_meldable_heaps::maxiphobic::MaxiphobicHeap;
//!
//! let mut heap = BinaryHeap::from_vec(vec![5, 3, 8, 1, 9, 2]);
//! assert_eq!(heap.delete_minimum(), Ok(1));
//! assert_eq!(heap.minimum(), Ok(&2));
//!
//! let mut max_heap = MaxiphobicHeap::with_comparator(Reverse(rust_meldable_heaps::Natural));
//! max_heap.insert(4);
//! max_heap.insert(7);
//! assert_eq!(max_heap.delete_minimum(), Ok(7));
//!
//! max_heap.clear();
//! assert_eq!(max_heap.minimum(), Err(HeapError::EmptyHeap));
//! ```

pub mod binary;
pub mod compare;
pub mod leftist;
pub mod maxiphobic;
pub mod traits;
mod tree;

// Re-export the main trait and types for convenience
pub use binary::BinaryHeap;
pub use compare::{Compare, Natural};
pub use leftist::WeightBiasedLeftistHeap;
pub use maxiphobic::MaxiphobicHeap;
pub use traits::{Heap, HeapError};
