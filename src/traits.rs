//! Common traits for heap data structures
//!
//! This module provides the contract shared by every heap in the crate:
//!
//! - [`Heap`]: insert, minimum lookup, minimum removal, bulk construction
//! - [`HeapError`]: the error conditions the contract can report
//!
//! All heaps are min-heaps with respect to their comparator. Use
//! [`Reverse`](crate::compare::Reverse) for max-heap behavior.

use crate::compare::Compare;
use std::fmt;

/// Error type for heap operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HeapError {
    /// `minimum` or `delete_minimum` was called on an empty heap
    EmptyHeap,
    /// A binary heap was requested with an initial capacity of zero
    InvalidCapacity,
}

impl fmt::Display for HeapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeapError::EmptyHeap => write!(f, "operation requires a non-empty heap"),
            HeapError::InvalidCapacity => {
                write!(f, "initial capacity must be greater than 0")
            }
        }
    }
}

impl std::error::Error for HeapError {}

/// Base trait for heap/priority queue data structures
///
/// A heap stores elements of type `T` and always exposes the one its
/// comparator judges smallest. Equal elements are all kept; the order in
/// which they come out is unspecified.
///
/// # Example
///
/// ```rust
/// use rust_meldable_heaps::{Heap, HeapError, Natural};
/// use rust_meldable_heaps::leftist::WeightBiasedLeftistHeap;
///
/// let mut heap = WeightBiasedLeftistHeap::with_comparator(Natural);
/// heap.insert(3);
/// heap.insert(1);
/// heap.insert(2);
///
/// assert_eq!(heap.minimum(), Ok(&1));
/// assert_eq!(heap.delete_minimum(), Ok(1));
/// assert_eq!(heap.len(), 2);
///
/// heap.clear();
/// assert_eq!(heap.minimum(), Err(HeapError::EmptyHeap));
/// ```
pub trait Heap<T> {
    /// The comparator ordering this heap's elements
    type Comparator: Compare<T>;

    /// Creates an empty heap ordered by `comparator`
    fn with_comparator(comparator: Self::Comparator) -> Self;

    /// Builds a heap holding exactly `elements`
    ///
    /// # Time Complexity
    /// O(n) comparisons for every implementation. Never implemented as
    /// repeated [`insert`](Heap::insert).
    fn from_vec_with(comparator: Self::Comparator, elements: Vec<T>) -> Self;

    /// Builds a heap from any iterable, see [`from_vec_with`](Heap::from_vec_with)
    fn from_iter_with<I>(comparator: Self::Comparator, elements: I) -> Self
    where
        Self: Sized,
        I: IntoIterator<Item = T>,
    {
        Self::from_vec_with(comparator, elements.into_iter().collect())
    }

    /// Returns the comparator this heap was built with
    fn comparator(&self) -> &Self::Comparator;

    /// Returns true if the heap is empty
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the number of elements in the heap
    fn len(&self) -> usize;

    /// Inserts an element
    ///
    /// # Time Complexity
    /// O(log n) amortized.
    fn insert(&mut self, element: T);

    /// Returns the minimum element without removing it
    ///
    /// # Errors
    /// Returns [`HeapError::EmptyHeap`] if the heap holds no elements.
    ///
    /// # Time Complexity
    /// O(1) for all implementations
    fn minimum(&self) -> Result<&T, HeapError>;

    /// Removes and returns the minimum element
    ///
    /// # Errors
    /// Returns [`HeapError::EmptyHeap`] if the heap holds no elements.
    ///
    /// # Time Complexity
    /// O(log n) amortized.
    fn delete_minimum(&mut self) -> Result<T, HeapError>;

    /// Removes every element
    fn clear(&mut self);

    /// Like [`minimum`](Heap::minimum), but `None` when empty
    fn peek(&self) -> Option<&T> {
        self.minimum().ok()
    }

    /// Like [`delete_minimum`](Heap::delete_minimum), but `None` when empty
    fn pop(&mut self) -> Option<T> {
        self.delete_minimum().ok()
    }

    /// Drains the heap, returning its elements in non-decreasing order
    fn into_sorted_vec(mut self) -> Vec<T>
    where
        Self: Sized,
    {
        let mut sorted = Vec::with_capacity(self.len());
        while let Some(element) = self.pop() {
            sorted.push(element);
        }
        sorted
    }
}
