use thiserror::Error;

use crate::ord_set::BoundedOrdSet;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OrdSetError {
    /// The set needs more room but its growth budget is exhausted, or it
    /// already overflowed earlier. Not recoverable for that instance.
    #[error("ordered set overflow: no further resizes are allowed")]
    Overflow,
    #[error("index {index} is out of range for a set of length {len}")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("invalid capacity policy: {reason}")]
    InvalidPolicy { reason: &'static str },
}

/// Returned by a union whose result ran out of capacity.
///
/// `partial` holds every element merged before the overflow, in ascending
/// order. It is itself in the overflow state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("the union exceeds the maximum set size; {} elements merged", .partial.len())]
pub struct PartialUnion {
    pub partial: BoundedOrdSet,
}

impl PartialUnion {
    pub fn into_partial(self) -> BoundedOrdSet {
        self.partial
    }
}
