//! Weight-Biased Leftist Heap implementation
//!
//! A weight-biased leftist heap is a heap-ordered binary tree in which every
//! node's left subtree holds at least as many nodes as its right subtree.
//! The right spine therefore has at most log₂(n + 1) nodes, and all work
//! happens along right spines:
//!
//! - O(log n) insert, delete_minimum and meld
//! - O(1) minimum
//! - O(n) bulk build by pairwise tournament merging
//!
//! Reference: Cho, S., & Sahni, S. (1998). "Weight-biased leftist trees and
//! modified skip lists". *Journal of Experimental Algorithmics*, 3.
//!
//! # Example
//!
//! ```rust
//! use rust_meldable_heaps::Heap;
//! use rust_meldable_heaps::leftist::WeightBiasedLeftistHeap;
//!
//! let mut heap = WeightBiasedLeftistHeap::from_vec(vec![5, 3, 8]);
//! heap.insert(1);
//!
//! assert_eq!(heap.minimum(), Ok(&1));
//! assert_eq!(heap.into_sorted_vec(), vec![1, 3, 5, 8]);
//! ```

use crate::compare::{Compare, Natural};
use crate::traits::{Heap, HeapError};
use crate::tree::{self, Link, Node, Shape};
use log::debug;
use std::fmt;

pub use crate::tree::Iter;

/// Weight-Biased Leftist Heap
///
/// `len()` is O(1): the root caches the size of the whole tree.
pub struct WeightBiasedLeftistHeap<T, C = Natural> {
    root: Link<T>,
    comparator: C,
}

impl<T: Ord> WeightBiasedLeftistHeap<T> {
    /// Creates an empty heap ordered by `T`'s natural order
    pub fn new() -> Self {
        Self::with_comparator(Natural)
    }

    /// Builds a natural-order heap from `elements` in O(n)
    pub fn from_vec(elements: Vec<T>) -> Self {
        Self::from_vec_with(Natural, elements)
    }
}

impl<T, C: Compare<T>> WeightBiasedLeftistHeap<T, C> {
    /// Returns an independent heap with the same comparator and elements
    pub fn copy_of(that: &Self) -> Self
    where
        T: Clone,
        C: Clone,
    {
        that.clone()
    }

    /// Moves every element of `other` into this heap
    ///
    /// # Time Complexity
    /// O(log n + log m)
    pub fn meld(&mut self, mut other: Self) {
        let root = self.root.take();
        self.root = merge(&self.comparator, root, other.root.take());
    }

    /// Iterates over the elements in tree order (not sorted)
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(&self.root)
    }

    /// Checks heap order, cached weights, and the leftist weight rule
    pub fn is_valid(&self) -> bool {
        tree::check(&self.root, &self.comparator, Shape::Leftist)
    }
}

/// Merges two trees along their right spines
fn merge<T, C: Compare<T>>(comparator: &C, a: Link<T>, b: Link<T>) -> Link<T> {
    match (a, b) {
        (None, link) | (link, None) => link,
        (Some(a), Some(b)) => Some(merge_nodes(comparator, a, b)),
    }
}

fn merge_nodes<T, C: Compare<T>>(comparator: &C, a: Box<Node<T>>, b: Box<Node<T>>) -> Box<Node<T>> {
    let (mut small, big) = if comparator.lt(&b.element, &a.element) {
        (b, a)
    } else {
        (a, b)
    };

    let right = small.right.take();
    small.right = merge(comparator, right, Some(big));
    small.update_weight();

    // Keep the heavier subtree on the left
    if tree::weight(&small.left) < tree::weight(&small.right) {
        std::mem::swap(&mut small.left, &mut small.right);
    }

    small
}

impl<T, C: Compare<T>> Heap<T> for WeightBiasedLeftistHeap<T, C> {
    type Comparator = C;

    fn with_comparator(comparator: C) -> Self {
        Self {
            root: None,
            comparator,
        }
    }

    fn from_vec_with(comparator: C, elements: Vec<T>) -> Self {
        let count = elements.len();
        let singletons = elements.into_iter().map(Node::singleton).collect();
        let (root, passes) =
            tree::tournament(singletons, |a, b| merge_nodes(&comparator, a, b));
        debug!(
            "built leftist heap of {} elements in {} merge passes",
            count, passes
        );
        Self { root, comparator }
    }

    fn comparator(&self) -> &C {
        &self.comparator
    }

    fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    fn len(&self) -> usize {
        tree::weight(&self.root)
    }

    fn insert(&mut self, element: T) {
        let root = self.root.take();
        self.root = merge(&self.comparator, root, Some(Node::singleton(element)));
    }

    fn minimum(&self) -> Result<&T, HeapError> {
        self.root
            .as_ref()
            .map(|node| &node.element)
            .ok_or(HeapError::EmptyHeap)
    }

    fn delete_minimum(&mut self) -> Result<T, HeapError> {
        let root = self.root.take().ok_or(HeapError::EmptyHeap)?;
        let Node {
            element,
            left,
            right,
            ..
        } = *root;
        self.root = merge(&self.comparator, left, right);
        Ok(element)
    }

    fn clear(&mut self) {
        tree::release(self.root.take());
    }
}

impl<T, C> Drop for WeightBiasedLeftistHeap<T, C> {
    fn drop(&mut self) {
        tree::release(self.root.take());
    }
}

impl<T: Clone, C: Clone> Clone for WeightBiasedLeftistHeap<T, C> {
    fn clone(&self) -> Self {
        Self {
            root: tree::copy_link(&self.root),
            comparator: self.comparator.clone(),
        }
    }
}

impl<T, C: Compare<T> + Default> Default for WeightBiasedLeftistHeap<T, C> {
    fn default() -> Self {
        Self::with_comparator(C::default())
    }
}

impl<T, C: Compare<T>> Extend<T> for WeightBiasedLeftistHeap<T, C> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for element in iter {
            self.insert(element);
        }
    }
}

impl<T: Ord> FromIterator<T> for WeightBiasedLeftistHeap<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_iter_with(Natural, iter)
    }
}

impl<T: Ord> From<Vec<T>> for WeightBiasedLeftistHeap<T> {
    fn from(elements: Vec<T>) -> Self {
        Self::from_vec(elements)
    }
}

impl<T: fmt::Debug, C> fmt::Debug for WeightBiasedLeftistHeap<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WeightBiasedLeftistHeap")
            .field("len", &tree::weight(&self.root))
            .field("elements", &DebugElements(&self.root))
            .finish()
    }
}

struct DebugElements<'a, T>(&'a Link<T>);

impl<T: fmt::Debug> fmt::Debug for DebugElements<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(Iter::new(self.0)).finish()
    }
}
