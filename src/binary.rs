//! Array-backed Binary Heap implementation
//!
//! A complete binary tree stored level by level in a growable array. The
//! root lives at index 0 and the children of index `i` live at `2i + 1` and
//! `2i + 2`. Every node is no greater than its children under the heap's
//! comparator.
//!
//! # Time Complexity
//!
//! | Operation        | Complexity          |
//! |------------------|---------------------|
//! | `insert`         | O(log n) amortized  |
//! | `delete_minimum` | O(log n)            |
//! | `minimum`        | O(1)                |
//! | bulk build       | O(n)                |
//!
//! # Example
//!
//! ```rust
//! use rust_meldable_heaps::Heap;
//! use rust_meldable_heaps::binary::BinaryHeap;
//!
//! let mut heap = BinaryHeap::new();
//! heap.insert(3);
//! heap.insert(1);
//! heap.insert(2);
//!
//! assert_eq!(heap.peek(), Some(&1));
//! assert_eq!(heap.pop(), Some(1));
//! assert_eq!(heap.pop(), Some(2));
//! assert_eq!(heap.pop(), Some(3));
//! assert_eq!(heap.pop(), None);
//! ```

use crate::compare::{Compare, Natural};
use crate::traits::{Heap, HeapError};
use log::{debug, trace};
use std::fmt;

/// Capacity used when none is requested explicitly
pub const DEFAULT_INITIAL_CAPACITY: usize = 16;

const ROOT: usize = 0;

/// An array-backed binary min-heap
///
/// Slots `[0, len)` of the backing array hold the elements; the logical
/// capacity doubles whenever an insert finds the array full.
pub struct BinaryHeap<T, C = Natural> {
    data: Vec<T>,
    capacity: usize,
    comparator: C,
}

impl<T: Ord> BinaryHeap<T> {
    /// Creates an empty heap ordered by `T`'s natural order
    pub fn new() -> Self {
        Self::with_comparator(Natural)
    }

    /// Creates an empty natural-order heap with room for `capacity` elements
    ///
    /// # Errors
    /// Returns [`HeapError::InvalidCapacity`] if `capacity` is zero.
    pub fn with_capacity(capacity: usize) -> Result<Self, HeapError> {
        Self::with_capacity_and_comparator(capacity, Natural)
    }

    /// Builds a natural-order heap from `elements` in O(n)
    pub fn from_vec(elements: Vec<T>) -> Self {
        Self::from_vec_with(Natural, elements)
    }
}

impl<T, C: Compare<T>> BinaryHeap<T, C> {
    /// Creates an empty heap ordered by `comparator` with room for `capacity` elements
    ///
    /// # Errors
    /// Returns [`HeapError::InvalidCapacity`] if `capacity` is zero.
    pub fn with_capacity_and_comparator(capacity: usize, comparator: C) -> Result<Self, HeapError> {
        if capacity == 0 {
            return Err(HeapError::InvalidCapacity);
        }
        Ok(Self {
            data: Vec::with_capacity(capacity),
            capacity,
            comparator,
        })
    }

    /// Returns an independent heap with the same comparator and elements
    pub fn copy_of(that: &Self) -> Self
    where
        T: Clone,
        C: Clone,
    {
        that.clone()
    }

    /// Number of elements the heap can hold before it grows
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Iterates over the elements in array order (not sorted)
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    /// Consumes the heap, returning the backing array in storage order
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Checks the heap-order property over every parent/child pair
    pub fn is_valid(&self) -> bool {
        (1..self.data.len()).all(|child| {
            let parent = (child - 1) / 2;
            !self.comparator.lt(&self.data[child], &self.data[parent])
        })
    }

    /// Doubles the capacity if the next insert would overflow it
    fn ensure_capacity(&mut self) {
        if self.data.len() == self.capacity {
            let grown = self.capacity * 2;
            trace!("growing binary heap capacity from {} to {}", self.capacity, grown);
            self.data.reserve_exact(grown - self.data.len());
            self.capacity = grown;
        }
    }

    /// Move element at index up to maintain heap property
    fn sift_up(&mut self, mut index: usize) {
        while index > ROOT {
            let parent = (index - 1) / 2;
            if self.comparator.lt(&self.data[index], &self.data[parent]) {
                self.data.swap(index, parent);
                index = parent;
            } else {
                break;
            }
        }
    }

    /// Move element at index down to maintain heap property
    fn sift_down(&mut self, mut index: usize) {
        let len = self.data.len();
        loop {
            let left = 2 * index + 1;
            if left >= len {
                break;
            }
            let right = left + 1;

            // Smaller of the existing children
            let mut child = left;
            if right < len && self.comparator.lt(&self.data[right], &self.data[left]) {
                child = right;
            }

            if self.comparator.lt(&self.data[child], &self.data[index]) {
                self.data.swap(index, child);
                index = child;
            } else {
                break;
            }
        }
    }

    /// Restores heap order over the whole array, bottom-up
    fn heapify(&mut self) {
        for index in (0..self.data.len() / 2).rev() {
            self.sift_down(index);
        }
    }
}

impl<T, C: Compare<T>> Heap<T> for BinaryHeap<T, C> {
    type Comparator = C;

    fn with_comparator(comparator: C) -> Self {
        Self {
            data: Vec::with_capacity(DEFAULT_INITIAL_CAPACITY),
            capacity: DEFAULT_INITIAL_CAPACITY,
            comparator,
        }
    }

    fn from_vec_with(comparator: C, elements: Vec<T>) -> Self {
        let capacity = elements.len().max(1);
        let mut heap = Self {
            data: elements,
            capacity,
            comparator,
        };
        heap.heapify();
        debug!("heapified binary heap of {} elements", heap.data.len());
        heap
    }

    fn comparator(&self) -> &C {
        &self.comparator
    }

    fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    fn len(&self) -> usize {
        self.data.len()
    }

    fn insert(&mut self, element: T) {
        self.ensure_capacity();
        self.data.push(element);
        self.sift_up(self.data.len() - 1);
    }

    fn minimum(&self) -> Result<&T, HeapError> {
        self.data.get(ROOT).ok_or(HeapError::EmptyHeap)
    }

    fn delete_minimum(&mut self) -> Result<T, HeapError> {
        if self.data.is_empty() {
            return Err(HeapError::EmptyHeap);
        }

        // The last element takes the root's slot
        let minimum = self.data.swap_remove(ROOT);
        if !self.data.is_empty() {
            self.sift_down(ROOT);
        }

        Ok(minimum)
    }

    fn clear(&mut self) {
        self.data.clear();
    }
}

impl<T: Clone, C: Clone> Clone for BinaryHeap<T, C> {
    fn clone(&self) -> Self {
        let mut data = Vec::with_capacity(self.capacity);
        data.extend_from_slice(&self.data);
        Self {
            data,
            capacity: self.capacity,
            comparator: self.comparator.clone(),
        }
    }
}

impl<T, C: Compare<T> + Default> Default for BinaryHeap<T, C> {
    fn default() -> Self {
        Self::with_comparator(C::default())
    }
}

impl<T, C: Compare<T>> Extend<T> for BinaryHeap<T, C> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for element in iter {
            self.insert(element);
        }
    }
}

impl<T: Ord> FromIterator<T> for BinaryHeap<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_iter_with(Natural, iter)
    }
}

impl<T: Ord> From<Vec<T>> for BinaryHeap<T> {
    fn from(elements: Vec<T>) -> Self {
        Self::from_vec(elements)
    }
}

impl<T: fmt::Debug, C> fmt::Debug for BinaryHeap<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BinaryHeap")
            .field("len", &self.data.len())
            .field("capacity", &self.capacity)
            .field("elements", &self.data)
            .finish()
    }
}
