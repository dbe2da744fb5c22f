//! Owned binary nodes shared by the weight-based meldable heaps
//!
//! Both [`WeightBiasedLeftistHeap`](crate::leftist::WeightBiasedLeftistHeap)
//! and [`MaxiphobicHeap`](crate::maxiphobic::MaxiphobicHeap) store their
//! elements in binary trees of boxed nodes, each node owning its children
//! outright and caching the size of its subtree. The two heaps differ only
//! in how they merge; everything else about the node shape lives here.
//!
//! Both merges leave the heavier child on the left, so every right spine is
//! logarithmic in its subtree's weight. Long paths can only run along left
//! edges (strictly descending inserts build one), which is why dropping and
//! copying walk left spines iteratively instead of recursing.

use crate::compare::Compare;

pub(crate) type Link<T> = Option<Box<Node<T>>>;

pub(crate) struct Node<T> {
    pub(crate) element: T,
    /// Number of nodes in the subtree rooted here
    pub(crate) weight: usize,
    pub(crate) left: Link<T>,
    pub(crate) right: Link<T>,
}

impl<T> Node<T> {
    pub(crate) fn singleton(element: T) -> Box<Self> {
        Box::new(Node {
            element,
            weight: 1,
            left: None,
            right: None,
        })
    }

    pub(crate) fn update_weight(&mut self) {
        self.weight = 1 + weight(&self.left) + weight(&self.right);
    }
}

pub(crate) fn weight<T>(link: &Link<T>) -> usize {
    link.as_ref().map_or(0, |node| node.weight)
}

/// Extra structural rule checked on top of heap order and weights
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Shape {
    /// No rule beyond heap order and correct weights
    Free,
    /// `weight(left) >= weight(right)` at every node
    Leftist,
}

/// Reduces `trees` to one tree by merging adjacent pairs, pass after pass
///
/// Returns the final tree and the number of passes performed. Every pass
/// halves the number of trees, and a merge of two trees of weight `w` costs
/// O(log w), so the whole reduction does O(n) work.
pub(crate) fn tournament<T, F>(mut trees: Vec<Box<Node<T>>>, mut merge: F) -> (Link<T>, usize)
where
    F: FnMut(Box<Node<T>>, Box<Node<T>>) -> Box<Node<T>>,
{
    let mut passes = 0;
    while trees.len() > 1 {
        let mut merged = Vec::with_capacity(trees.len() / 2 + 1);
        let mut pending = trees.into_iter();
        while let Some(first) = pending.next() {
            match pending.next() {
                Some(second) => merged.push(merge(first, second)),
                // Odd tree out waits for the next pass
                None => merged.push(first),
            }
        }
        trees = merged;
        passes += 1;
    }
    (trees.pop(), passes)
}

/// Deep-copies a tree
///
/// Walks each left spine in a loop and recurses only into right children,
/// so the recursion depth is bounded by the longest run of right edges.
pub(crate) fn copy_link<T: Clone>(link: &Link<T>) -> Link<T> {
    let mut spine = Vec::new();
    let mut current = link.as_deref();
    while let Some(node) = current {
        spine.push((node.element.clone(), node.weight, copy_link(&node.right)));
        current = node.left.as_deref();
    }

    let mut copied = None;
    while let Some((element, weight, right)) = spine.pop() {
        copied = Some(Box::new(Node {
            element,
            weight,
            left: copied,
            right,
        }));
    }
    copied
}

/// Drops a tree without recursing
pub(crate) fn release<T>(link: Link<T>) {
    let mut stack: Vec<Box<Node<T>>> = link.into_iter().collect();
    while let Some(mut node) = stack.pop() {
        stack.extend(node.left.take());
        stack.extend(node.right.take());
    }
}

/// Verifies heap order, cached weights, and the requested shape rule
pub(crate) fn check<T, C: Compare<T>>(link: &Link<T>, comparator: &C, shape: Shape) -> bool {
    let mut stack: Vec<&Node<T>> = link.as_deref().into_iter().collect();
    while let Some(node) = stack.pop() {
        let left = weight(&node.left);
        let right = weight(&node.right);
        if node.weight != 1 + left + right {
            return false;
        }
        if shape == Shape::Leftist && left < right {
            return false;
        }
        for child in [node.left.as_deref(), node.right.as_deref()].into_iter().flatten() {
            if comparator.lt(&child.element, &node.element) {
                return false;
            }
            stack.push(child);
        }
    }
    true
}

/// Borrowing iterator over a tree heap's elements, in pre-order
///
/// The order is an artifact of the tree's shape, not of the comparator.
pub struct Iter<'a, T> {
    stack: Vec<&'a Node<T>>,
    remaining: usize,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(link: &'a Link<T>) -> Self {
        Iter {
            stack: link.as_deref().into_iter().collect(),
            remaining: weight(link),
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let node = self.stack.pop()?;
        self.stack.extend(node.right.as_deref());
        self.stack.extend(node.left.as_deref());
        self.remaining -= 1;
        Some(&node.element)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Iter {
            stack: self.stack.clone(),
            remaining: self.remaining,
        }
    }
}
