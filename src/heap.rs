//! Array-backed binary heap
//!
//! A complete binary tree stored in a `Vec`, 0-indexed: the children of
//! position `i` live at `2i + 1` and `2i + 2`, its parent at `(i - 1) / 2`.
//! The heap is either max-ordered or min-ordered, chosen at construction
//! through a [`Polarity`].
//!
//! # Time Complexity
//!
//! | Operation | Complexity |
//! |-----------|------------|
//! | `push`    | O(log n)   |
//! | `pop`     | O(log n)   |
//! | `peek`    | O(1)       |
//!
//! # Example
//!
//! ```rust
//! use priorityq::Heap;
//!
//! let mut heap = Heap::min();
//! heap.push(3);
//! heap.push(1);
//! heap.push(2);
//!
//! assert_eq!(heap.peek(), Some(&1));
//! assert_eq!(heap.pop(), Some(1));
//! assert_eq!(heap.pop(), Some(2));
//! assert_eq!(heap.pop(), Some(3));
//! assert_eq!(heap.pop(), None);
//! ```

use std::cmp::Ordering;
use std::fmt;

use crate::polarity::Polarity;

/// Three-way comparison fixed when the heap is built
pub(crate) type Comparator<T> = fn(&T, &T) -> Ordering;

/// A binary heap with max or min polarity
///
/// `peek` and `pop` return `None` on an empty heap; a stored value is
/// never confused with absence.
#[derive(Clone)]
pub struct Heap<T> {
    data: Vec<T>,
    polarity: Polarity,
    cmp: Comparator<T>,
}

impl<T: Ord> Heap<T> {
    /// Creates an empty max-heap
    pub fn new() -> Self {
        Self::with_polarity(Polarity::Max)
    }

    /// Creates an empty max-heap
    pub fn max() -> Self {
        Self::with_polarity(Polarity::Max)
    }

    /// Creates an empty min-heap
    pub fn min() -> Self {
        Self::with_polarity(Polarity::Min)
    }

    /// Creates an empty heap with the given polarity
    pub fn with_polarity(polarity: Polarity) -> Self {
        Self::with_comparator(polarity, <T as Ord>::cmp)
    }

    /// Creates an empty heap with room for `capacity` elements
    pub fn with_capacity(polarity: Polarity, capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
            polarity,
            cmp: <T as Ord>::cmp,
        }
    }
}

impl<T> Heap<T> {
    /// Creates an empty heap ordered by `cmp` instead of `T`'s own `Ord`
    ///
    /// Used by the priority queue to compare elements by priority alone.
    pub(crate) fn with_comparator(polarity: Polarity, cmp: Comparator<T>) -> Self {
        Self {
            data: Vec::new(),
            polarity,
            cmp,
        }
    }

    /// Returns true if the heap holds no elements
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the number of elements in the heap
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns the polarity chosen at construction
    pub fn polarity(&self) -> Polarity {
        self.polarity
    }

    /// Returns the root element without removing it
    ///
    /// # Time Complexity
    /// O(1)
    pub fn peek(&self) -> Option<&T> {
        self.data.first()
    }

    /// Inserts a value, bubbling it up toward the root
    ///
    /// # Time Complexity
    /// O(log n)
    pub fn push(&mut self, value: T) {
        self.data.push(value);
        self.bubble_up(self.data.len() - 1);
    }

    /// Removes and returns the root element
    ///
    /// The last leaf replaces the root and is bubbled down toward the leaves.
    ///
    /// # Time Complexity
    /// O(log n)
    pub fn pop(&mut self) -> Option<T> {
        if self.data.is_empty() {
            return None;
        }

        let last_idx = self.data.len() - 1;
        self.data.swap(0, last_idx);
        let result = self.data.pop();

        if !self.data.is_empty() {
            self.bubble_down(0);
        }

        result
    }

    /// Removes every element, keeping the polarity
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Drains the heap in pop order
    ///
    /// Non-increasing for a max-heap, non-decreasing for a min-heap.
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut sorted = Vec::with_capacity(self.data.len());
        while let Some(value) = self.pop() {
            sorted.push(value);
        }
        sorted
    }

    /// True if the element at `first` may sit above the element at `second`
    #[inline]
    fn in_order(&self, first: usize, second: usize) -> bool {
        self.polarity
            .in_order((self.cmp)(&self.data[first], &self.data[second]))
    }

    /// Move element at index up while it is out of order with its parent
    fn bubble_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;
            if self.in_order(parent, index) {
                break;
            }
            self.data.swap(index, parent);
            index = parent;
        }
    }

    /// Move element at index down while it is out of order with its better child
    fn bubble_down(&mut self, mut index: usize) {
        while let Some(child) = self.better_child(index) {
            if self.in_order(index, child) {
                break;
            }
            self.data.swap(index, child);
            index = child;
        }
    }

    /// The child that should rise first; equal children resolve to the left
    fn better_child(&self, index: usize) -> Option<usize> {
        let len = self.data.len();
        let left = 2 * index + 1;
        if left >= len {
            return None;
        }

        let right = left + 1;
        if right >= len || self.in_order(left, right) {
            Some(left)
        } else {
            Some(right)
        }
    }

    #[cfg(test)]
    fn is_valid(&self) -> bool {
        (1..self.data.len()).all(|i| self.in_order((i - 1) / 2, i))
    }
}

impl<T: Ord> Default for Heap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for Heap<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Heap")
            .field("polarity", &self.polarity)
            .field("data", &self.data)
            .finish()
    }
}

impl<T> Extend<T> for Heap<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        self.data.reserve(iter.size_hint().0);
        for value in iter {
            self.push(value);
        }
    }
}

impl<T: Ord> FromIterator<T> for Heap<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut heap = Self::new();
        heap.extend(iter);
        heap
    }
}
