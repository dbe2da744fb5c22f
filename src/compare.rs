//! Comparator abstraction
//!
//! Every heap in this crate is ordered by a value implementing [`Compare`],
//! supplied when the heap is built and kept for its whole lifetime. The
//! element type itself never needs to implement [`Ord`] unless you use the
//! [`Natural`] comparator.
//!
//! # Example
//!
//! ```rust
//! use std::cmp::Ordering;
//! use rust_meldable_heaps::compare::{Compare, FnComparator, KeyComparator, Natural, Reverse};
//!
//! assert_eq!(Natural.compare(&1, &2), Ordering::Less);
//! assert_eq!(Reverse(Natural).compare(&1, &2), Ordering::Greater);
//!
//! let by_len = KeyComparator(|s: &&str| s.len());
//! assert_eq!(by_len.compare(&"abc", &"z"), Ordering::Greater);
//!
//! let by_abs = FnComparator(|a: &i32, b: &i32| a.abs().cmp(&b.abs()));
//! assert!(by_abs.lt(&-1, &3));
//! ```

use std::cmp::Ordering;

/// A total order over `T`
///
/// Implementations must be consistent: the heaps rely on `compare` being a
/// total order for as long as an element is stored.
pub trait Compare<T> {
    /// Compares `a` with `b`
    fn compare(&self, a: &T, b: &T) -> Ordering;

    /// Returns true if `a` is strictly less than `b`
    fn lt(&self, a: &T, b: &T) -> bool {
        self.compare(a, b) == Ordering::Less
    }
}

/// Ascending order given by `T: Ord`
///
/// This is the default comparator for every heap, which makes them min-heaps
/// over the element's natural order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Natural;

impl<T: Ord> Compare<T> for Natural {
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }
}

/// Reverses the wrapped comparator
///
/// `Reverse(Natural)` turns any heap in this crate into a max-heap.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Reverse<C>(pub C);

impl<T, C: Compare<T>> Compare<T> for Reverse<C> {
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self.0.compare(b, a)
    }
}

/// A comparator backed by a closure or function
#[derive(Clone, Copy, Default)]
pub struct FnComparator<F>(pub F);

impl<T, F> Compare<T> for FnComparator<F>
where
    F: Fn(&T, &T) -> Ordering,
{
    fn compare(&self, a: &T, b: &T) -> Ordering {
        (self.0)(a, b)
    }
}

impl<F> std::fmt::Debug for FnComparator<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("FnComparator")
    }
}

/// Orders elements by a key extracted from each of them
#[derive(Clone, Copy, Default)]
pub struct KeyComparator<F>(pub F);

impl<T, K, F> Compare<T> for KeyComparator<F>
where
    K: Ord,
    F: Fn(&T) -> K,
{
    fn compare(&self, a: &T, b: &T) -> Ordering {
        (self.0)(a).cmp(&(self.0)(b))
    }
}

impl<F> std::fmt::Debug for KeyComparator<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("KeyComparator")
    }
}

impl<T, C: Compare<T> + ?Sized> Compare<T> for &C {
    fn compare(&self, a: &T, b: &T) -> Ordering {
        (**self).compare(a, b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_natural_order() {
        assert_eq!(Natural.compare(&1, &2), Ordering::Less);
        assert_eq!(Natural.compare(&2, &2), Ordering::Equal);
        assert_eq!(Natural.compare(&"b", &"a"), Ordering::Greater);
        assert!(Natural.lt(&1, &2));
        assert!(!Natural.lt(&2, &2));
    }

    #[test]
    fn test_reverse_order() {
        let cmp = Reverse(Natural);
        assert_eq!(cmp.compare(&1, &2), Ordering::Greater);
        assert!(cmp.lt(&5, &3));
        // Reversing twice restores the natural order
        assert_eq!(Reverse(cmp).compare(&1, &2), Ordering::Less);
    }

    #[test]
    fn test_fn_comparator() {
        let cmp = FnComparator(|a: &(u32, &str), b: &(u32, &str)| a.0.cmp(&b.0));
        assert!(cmp.lt(&(1, "z"), &(2, "a")));
        assert_eq!(cmp.compare(&(3, "x"), &(3, "y")), Ordering::Equal);
    }

    #[test]
    fn test_key_comparator() {
        let cmp = KeyComparator(|s: &String| s.len());
        assert!(cmp.lt(&"ab".to_string(), &"abc".to_string()));
        assert_eq!(
            cmp.compare(&"xy".to_string(), &"ab".to_string()),
            Ordering::Equal
        );
    }

    #[test]
    fn test_comparator_by_reference() {
        let cmp = Reverse(Natural);
        let borrowed = &cmp;
        assert!(borrowed.lt(&9, &1));
    }
}
