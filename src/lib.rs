//! Binary heap and priority queue
//!
//! This crate provides an array-backed binary heap with selectable polarity,
//! and a priority queue that orders opaque payloads by a separate priority.
//!
//! # Features
//!
//! - **Heap**: max-first or min-first, chosen at construction via [`Polarity`];
//!   O(log n) push and pop, O(1) peek
//! - **PriorityQueue**: max-first queue of (priority, value) [`Element`]s;
//!   values need no trait bounds and never take part in ordering
//!
//! Empty structures answer `peek` and `pop` with `None`.
//!
//! Neither structure is synchronised. Wrap it in a mutex to share it between
//! threads.
//!
//! # Example
//!
//! ```rust
//! use priorityq::{Heap, PriorityQueue};
//!
//! let mut heap = Heap::max();
//! heap.extend([3, 10, 7]);
//! assert_eq!(heap.pop(), Some(10));
//!
//! let mut queue = PriorityQueue::new();
//! queue.push(5, "low");
//! queue.push(9, "high");
//! assert_eq!(queue.pop_element().map(|e| e.into_parts()), Some((9, "high")));
//! ```

pub mod heap;
pub mod polarity;
pub mod priority_queue;

pub use heap::Heap;
pub use polarity::Polarity;
pub use priority_queue::{Element, PriorityQueue};
