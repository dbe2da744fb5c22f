//! Maxiphobic Heap implementation
//!
//! A maxiphobic heap ("biggest-avoiding") is a heap-ordered binary tree with
//! a cached size per node, like the weight-biased leftist heap, but with a
//! simpler merge and no shape invariant of its own. Merging two trees keeps
//! the smaller root and looks at the three trees left hanging from it: the
//! other tree and the root's two children. The heaviest of the three is
//! reattached untouched; only the two lighter ones are merged recursively.
//! Since those two together hold at most two thirds of the nodes, a merge
//! visits O(log n) nodes.
//!
//! - O(log n) insert, delete_minimum and meld
//! - O(1) minimum
//! - O(n) bulk build by pairwise tournament merging
//!
//! Reference: Okasaki, C. (2005). "Alternatives to two classic data
//! structures". *SIGCSE '05*.
//!
//! # Example
//!
//! ```rust
//! use rust_meldable_heaps::Heap;
//! use rust_meldable_heaps::maxiphobic::MaxiphobicHeap;
//!
//! let mut heap = MaxiphobicHeap::new();
//! heap.insert("pear");
//! heap.insert("apple");
//! heap.insert("fig");
//!
//! assert_eq!(heap.delete_minimum(), Ok("apple"));
//! assert_eq!(heap.minimum(), Ok(&"fig"));
//! ```

use crate::compare::{Compare, Natural};
use crate::traits::{Heap, HeapError};
use crate::tree::{self, Link, Node, Shape};
use log::debug;
use std::fmt;

pub use crate::tree::Iter;

/// Maxiphobic Heap
pub struct MaxiphobicHeap<T, C = Natural> {
    root: Link<T>,
    comparator: C,
}

impl<T: Ord> MaxiphobicHeap<T> {
    /// Creates an empty heap ordered by `T`'s natural order
    pub fn new() -> Self {
        Self::with_comparator(Natural)
    }

    /// Builds a natural-order heap from `elements` in O(n)
    pub fn from_vec(elements: Vec<T>) -> Self {
        Self::from_vec_with(Natural, elements)
    }
}

impl<T, C: Compare<T>> MaxiphobicHeap<T, C> {
    /// Returns an independent heap with the same comparator and elements
    pub fn copy_of(that: &Self) -> Self
    where
        T: Clone,
        C: Clone,
    {
        that.clone()
    }

    /// Moves every element of `other` into this heap
    pub fn meld(&mut self, mut other: Self) {
        let root = self.root.take();
        self.root = merge(&self.comparator, root, other.root.take());
    }

    /// Iterates over the elements in tree order (not sorted)
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(&self.root)
    }

    /// Checks heap order and cached weights
    pub fn is_valid(&self) -> bool {
        tree::check(&self.root, &self.comparator, Shape::Free)
    }
}

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
    small.weight += big.weight;

    let big = Some(big);
    let left = small.left.take();
    let right = small.right.take();
    let (big_weight, left_weight, right_weight) =
        (tree::weight(&big), tree::weight(&left), tree::weight(&right));

    // Heaviest candidate stays whole on the left; ties prefer big, then left
    let (heaviest, lighter, lightest) =
        if big_weight >= left_weight && big_weight >= right_weight {
            (big, left, right)
        } else if left_weight >= right_weight {
            (left, big, right)
        } else {
            (right, big, left)
        };

    small.left = heaviest;
    small.right = merge(comparator, lighter, lightest);
    small
}

impl<T, C: Compare<T>> Heap<T> for MaxiphobicHeap<T, C> {
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
            "built maxiphobic heap of {} elements in {} merge passes",
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
        match &self.root {
            Some(node) => Ok(&node.element),
            None => Err(HeapError::EmptyHeap),
        }
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

impl<T, C> Drop for MaxiphobicHeap<T, C> {
    fn drop(&mut self) {
        tree::release(self.root.take());
    }
}

impl<T: Clone, C: Clone> Clone for MaxiphobicHeap<T, C> {
    fn clone(&self) -> Self {
        Self {
            root: tree::copy_link(&self.root),
            comparator: self.comparator.clone(),
        }
    }
}

impl<T, C: Compare<T> + Default> Default for MaxiphobicHeap<T, C> {
    fn default() -> Self {
        Self::with_comparator(C::default())
    }
}

impl<T, C: Compare<T>> Extend<T> for MaxiphobicHeap<T, C> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for element in iter {
            self.insert(element);
        }
    }
}

impl<T: Ord> FromIterator<T> for MaxiphobicHeap<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_iter_with(Natural, iter)
    }
}

impl<T: Ord> From<Vec<T>> for MaxiphobicHeap<T> {
    fn from(elements: Vec<T>) -> Self {
        Self::from_vec(elements)
    }
}

impl<T: fmt::Debug, C> fmt::Debug for MaxiphobicHeap<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MaxiphobicHeap")
            .field("len", &tree::weight(&self.root))
            .field("elements", &Elements(&self.root))
            .finish()
    }
}

struct Elements<'a, T>(&'a Link<T>);

impl<T: fmt::Debug> fmt::Debug for Elements<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(Iter::new(self.0)).finish()
    }
}
