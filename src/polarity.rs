//! Heap ordering polarity
//!
//! A [`Heap`](crate::Heap) keeps either its largest or its smallest element at
//! the root. Both variants share one algorithm body; the only difference is
//! the predicate deciding whether two positions are "in order".

use std::cmp::Ordering;
use std::fmt;

/// Which end of the ordering surfaces first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Polarity {
    /// Largest element at the root (`first >= second` is in order)
    #[default]
    Max,
    /// Smallest element at the root (`first <= second` is in order)
    Min,
}

impl Polarity {
    /// Returns true if `first` may sit above `second`, given `first.cmp(second)`
    ///
    /// # Example
    ///
    /// ```rust
    /// use priorityq::Polarity;
    ///
    /// assert!(Polarity::Max.in_order(5.cmp(&3)));
    /// assert!(Polarity::Max.in_order(3.cmp(&3)));
    /// assert!(!Polarity::Min.in_order(5.cmp(&3)));
    /// ```
    #[inline]
    pub fn in_order(self, ordering: Ordering) -> bool {
        match self {
            Polarity::Max => ordering != Ordering::Less,
            Polarity::Min => ordering != Ordering::Greater,
        }
    }
}

impl fmt::Display for Polarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Polarity::Max => write!(f, "max"),
            Polarity::Min => write!(f, "min"),
        }
    }
}
