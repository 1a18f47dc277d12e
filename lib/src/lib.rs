//!
//! This crate provides [`BoundedOrdSet`](./struct.BoundedOrdSet.html), a sorted array of
//! unique integers whose capacity grows in fixed steps up to a hard ceiling.
//!
//! Membership tests are binary searches. Insertion and removal shift the tail of the
//! array, so both are linear in the number of stored elements. Once a required growth
//! is denied by the [`CapacityPolicy`](./struct.CapacityPolicy.html), the set enters a
//! permanent overflow state in which every mutation fails.
//!
//! # Example
//!
//! ```
//! use bounded_ord_set::{BoundedOrdSet, OrdSetError};
//!
//! let mut set = BoundedOrdSet::from_values(&[5, 1, 3]).unwrap();
//! assert_eq!(set.collect(), vec![1, 3, 5]);
//!
//! set.insert(4).unwrap();
//! assert_eq!(set.capacity(), 6);
//! assert_eq!(set.resize_count(), 1);
//!
//! let other = BoundedOrdSet::from_values(&[2, 3]).unwrap();
//! let merged = set.union(&other).unwrap();
//! assert_eq!(merged.to_display_string(), "1 2 3 4 5");
//!
//! assert!(matches!(
//!     set.element_at(10),
//!     Err(OrdSetError::IndexOutOfRange { .. })
//! ));
//! ```
//!

mod capacity;
mod error;
mod ord_set;

pub use crate::capacity::{
    CapacityPolicy, DEFAULT_MAX_CAPACITY, DEFAULT_MAX_RESIZES, DEFAULT_MIN_INCREMENT,
};
pub use crate::error::{OrdSetError, PartialUnion};
pub use crate::ord_set::{union, BoundedOrdSet};
