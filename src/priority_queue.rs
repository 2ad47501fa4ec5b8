//! Priority queue pairing an ordering key with an opaque payload
//!
//! [`PriorityQueue`] wraps a max-ordered [`Heap`] of [`Element`]s. Only the
//! priority takes part in ordering; the value is carried along untouched and
//! needs no trait bounds.
//!
//! # Equal priorities
//!
//! When several elements share a priority, which one comes out first depends
//! on the heap's internal layout. Insertion order is NOT preserved among
//! equal priorities; do not rely on any particular order.
//!
//! # Example
//!
//! ```rust
//! use priorityq::PriorityQueue;
//!
//! let mut queue = PriorityQueue::new();
//! queue.push(100, "first");
//! queue.push(10, "third");
//! queue.push(50, "second");
//!
//! assert_eq!(queue.peek(), Some(&"first"));
//! assert_eq!(queue.pop(), Some("first"));
//! assert_eq!(queue.pop(), Some("second"));
//! assert_eq!(queue.pop(), Some("third"));
//! assert_eq!(queue.pop(), None);
//! ```

use std::cmp::Ordering;

use log::trace;

use crate::heap::Heap;
use crate::polarity::Polarity;

/// An immutable (priority, value) pair
///
/// Equality compares both fields. Ordering compares priorities only, so two
/// elements with the same priority and different values are neither less
/// nor greater than each other, yet not equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Element<P, V> {
    priority: P,
    value: V,
}

impl<P, V> Element<P, V> {
    /// Pairs a priority with a value
    pub fn new(priority: P, value: V) -> Self {
        Self { priority, value }
    }

    /// The ordering key
    pub fn priority(&self) -> &P {
        &self.priority
    }

    /// The payload
    pub fn value(&self) -> &V {
        &self.value
    }

    /// Splits the element back into its priority and value
    pub fn into_parts(self) -> (P, V) {
        (self.priority, self.value)
    }

    pub fn into_value(self) -> V {
        self.value
    }
}

impl<P, V> From<(P, V)> for Element<P, V> {
    fn from((priority, value): (P, V)) -> Self {
        Self::new(priority, value)
    }
}

impl<P: Ord, V: PartialEq> PartialOrd for Element<P, V> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(by_priority(self, other))
    }
}

fn by_priority<P: Ord, V>(a: &Element<P, V>, b: &Element<P, V>) -> Ordering {
    a.priority.cmp(&b.priority)
}

/// A max-first priority queue of opaque values
///
/// The element with the highest priority is returned first.
///
/// # Time Complexity
///
/// | Operation | Complexity |
/// |-----------|------------|
/// | `push`    | O(log n)   |
/// | `pop`     | O(log n)   |
/// | `peek`    | O(1)       |
#[derive(Debug, Clone)]
pub struct PriorityQueue<P, V> {
    heap: Heap<Element<P, V>>,
}

impl<P: Ord, V> PriorityQueue<P, V> {
    /// Creates an empty queue
    pub fn new() -> Self {
        Self {
            heap: Heap::with_comparator(Polarity::Max, by_priority::<P, V>),
        }
    }
}

impl<P, V> PriorityQueue<P, V> {
    /// Returns true if the queue is empty
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Returns the number of queued values
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Queues `value` under `priority`
    pub fn push(&mut self, priority: P, value: V) {
        self.heap.push(Element::new(priority, value));
        trace!("pushed element; queue holds {}", self.heap.len());
    }

    /// Returns the value with the highest priority without removing it
    pub fn peek(&self) -> Option<&V> {
        self.peek_element().map(Element::value)
    }

    /// Returns the highest-priority element without removing it
    pub fn peek_element(&self) -> Option<&Element<P, V>> {
        self.heap.peek()
    }

    /// Removes and returns the value with the highest priority
    pub fn pop(&mut self) -> Option<V> {
        self.pop_element().map(Element::into_value)
    }

    /// Removes and returns the highest-priority element
    pub fn pop_element(&mut self) -> Option<Element<P, V>> {
        let element = self.heap.pop();
        if element.is_some() {
            trace!("popped element; queue holds {}", self.heap.len());
        }
        element
    }

    /// Removes every queued element
    pub fn clear(&mut self) {
        self.heap.clear();
    }
}

impl<P: Ord, V> Default for PriorityQueue<P, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P, V> Extend<(P, V)> for PriorityQueue<P, V> {
    fn extend<I: IntoIterator<Item = (P, V)>>(&mut self, iter: I) {
        self.heap.extend(iter.into_iter().map(Element::from));
    }
}

impl<P: Ord, V> FromIterator<(P, V)> for PriorityQueue<P, V> {
    fn from_iter<I: IntoIterator<Item = (P, V)>>(iter: I) -> Self {
        let mut queue = Self::new();
        queue.extend(iter);
        queue
    }
}
