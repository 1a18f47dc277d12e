use crate::error::OrdSetError;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub const DEFAULT_MIN_INCREMENT: usize = 3;
pub const DEFAULT_MAX_CAPACITY: usize = 9;
pub const DEFAULT_MAX_RESIZES: usize = 2;

/// Growth policy of a `BoundedOrdSet`.
///
/// Capacities are always multiples of `min_increment` within
/// `[min_increment, max_capacity]`. A set grows by `min_increment` at most
/// `max_resizes` times.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CapacityPolicy {
    min_increment: usize,
    max_capacity: usize,
    max_resizes: usize,
}

impl Default for CapacityPolicy {
    fn default() -> Self {
        CapacityPolicy {
            min_increment: DEFAULT_MIN_INCREMENT,
            max_capacity: DEFAULT_MAX_CAPACITY,
            max_resizes: DEFAULT_MAX_RESIZES,
        }
    }
}

impl CapacityPolicy {
    /// Creates a validated policy.
    pub fn new(
        min_increment: usize,
        max_capacity: usize,
        max_resizes: usize,
    ) -> Result<CapacityPolicy, OrdSetError> {
        if min_increment == 0 {
            return Err(OrdSetError::InvalidPolicy {
                reason: "min_increment must be positive",
            });
        }
        if max_capacity < min_increment {
            return Err(OrdSetError::InvalidPolicy {
                reason: "max_capacity must not be smaller than min_increment",
            });
        }
        if max_capacity % min_increment != 0 {
            return Err(OrdSetError::InvalidPolicy {
                reason: "max_capacity must be a multiple of min_increment",
            });
        }
        Ok(CapacityPolicy {
            min_increment,
            max_capacity,
            max_resizes,
        })
    }

    pub fn min_increment(&self) -> usize {
        self.min_increment
    }

    pub fn max_capacity(&self) -> usize {
        self.max_capacity
    }

    pub fn max_resizes(&self) -> usize {
        self.max_resizes
    }

    /// Maps a requested size to a valid capacity: the nearest multiple of
    /// `min_increment` not below `n`, clamped to `[min_increment, max_capacity]`.
    pub fn round_to_capacity(&self, n: usize) -> usize {
        if n <= self.min_increment {
            return self.min_increment;
        }
        if n >= self.max_capacity {
            return self.max_capacity;
        }
        let blocks = n / self.min_increment + if n % self.min_increment > 0 { 1 } else { 0 };
        blocks * self.min_increment
    }

    /// The capacity a set would grow to from `capacity` after `resize_count`
    /// resizes, or `None` if growth is denied.
    pub(crate) fn next_capacity(&self, capacity: usize, resize_count: usize) -> Option<usize> {
        let candidate = capacity + self.min_increment;
        if candidate <= self.max_capacity && resize_count < self.max_resizes {
            Some(candidate)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_policy() {
        let policy = CapacityPolicy::default();
        assert_eq!(policy.min_increment(), 3);
        assert_eq!(policy.max_capacity(), 9);
        assert_eq!(policy.max_resizes(), 2);
    }

    #[test]
    fn test_round_to_capacity() {
        let policy = CapacityPolicy::default();
        let expected = [3, 3, 3, 3, 6, 6, 6, 9, 9, 9, 9, 9];
        for (n, exp) in expected.iter().enumerate() {
            assert_eq!(policy.round_to_capacity(n), *exp, "n = {}", n);
        }
        assert_eq!(policy.round_to_capacity(usize::MAX), 9);
    }

    #[test]
    fn test_round_to_capacity_is_idempotent() {
        for policy in vec![
            CapacityPolicy::default(),
            CapacityPolicy::new(4, 64, 10).unwrap(),
            CapacityPolicy::new(1, 1, 0).unwrap(),
        ] {
            for n in 0 .. 100 {
                let once = policy.round_to_capacity(n);
                assert_eq!(policy.round_to_capacity(once), once);
                assert_eq!(once % policy.min_increment(), 0);
            }
        }
    }

    #[test]
    fn test_next_capacity() {
        let policy = CapacityPolicy::default();
        assert_eq!(policy.next_capacity(3, 0), Some(6));
        assert_eq!(policy.next_capacity(6, 1), Some(9));
        assert_eq!(policy.next_capacity(9, 2), None);
        // Budget of resizes exhausted while there is still room.
        assert_eq!(policy.next_capacity(3, 2), None);
        // Room exhausted while there are still resizes left.
        assert_eq!(policy.next_capacity(9, 0), None);
    }

    #[test]
    fn test_invalid_policies() {
        assert!(matches!(
            CapacityPolicy::new(0, 9, 2),
            Err(OrdSetError::InvalidPolicy { .. })
        ));
        assert!(matches!(
            CapacityPolicy::new(4, 3, 2),
            Err(OrdSetError::InvalidPolicy { .. })
        ));
        assert!(matches!(
            CapacityPolicy::new(3, 10, 2),
            Err(OrdSetError::InvalidPolicy { .. })
        ));
        assert!(CapacityPolicy::new(3, 9, 0).is_ok());
    }
}
