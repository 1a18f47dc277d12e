use std::cmp::Ordering;
use std::convert::TryFrom;
use std::fmt;

use crate::capacity::CapacityPolicy;
use crate::error::{OrdSetError, PartialUnion};

// Sorted, duplicate free storage with a capacity that only grows in fixed steps.
#[derive(Debug, Clone)]
pub struct BoundedOrdSet {
    policy: CapacityPolicy,
    data: Vec<i32>,
    capacity: usize,
    resize_count: usize,
    overflow: bool,
}

impl BoundedOrdSet {
    /// Creates an empty set using the default `CapacityPolicy`.
    ///
    /// The requested size is rounded up to the next valid capacity.
    pub fn new(requested_size: usize) -> BoundedOrdSet {
        BoundedOrdSet::with_policy(requested_size, CapacityPolicy::default())
    }

    /// Creates an empty set with explicit control over the growth policy.
    pub fn with_policy(requested_size: usize, policy: CapacityPolicy) -> BoundedOrdSet {
        let capacity = policy.round_to_capacity(requested_size);
        BoundedOrdSet {
            policy,
            data: Vec::with_capacity(capacity),
            capacity,
            resize_count: 0,
            overflow: false,
        }
    }

    /// Creates a set sized for `values` and inserts them in input order.
    ///
    /// Duplicates are ignored. Fails with `OrdSetError::Overflow` if the
    /// distinct values do not fit under the default policy.
    pub fn from_values(values: &[i32]) -> Result<BoundedOrdSet, OrdSetError> {
        BoundedOrdSet::from_values_with_policy(values, CapacityPolicy::default())
    }

    pub fn from_values_with_policy(
        values: &[i32],
        policy: CapacityPolicy,
    ) -> Result<BoundedOrdSet, OrdSetError> {
        let mut set = BoundedOrdSet::with_policy(values.len(), policy);
        for value in values {
            set.insert(*value)?;
        }
        Ok(set)
    }

    /// Returns the length (i.e., number of elements stored).
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Current maximum number of elements before a resize is attempted.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn resize_count(&self) -> usize {
        self.resize_count
    }

    /// Whether a required growth was denied. An overflowed set rejects all
    /// further mutations.
    pub fn is_overflow(&self) -> bool {
        self.overflow
    }

    pub fn policy(&self) -> &CapacityPolicy {
        &self.policy
    }

    /// Index of the last stored element, `None` for an empty set.
    pub fn last_index(&self) -> Option<usize> {
        self.data.len().checked_sub(1)
    }

    /// The stored elements in ascending order.
    pub fn as_slice(&self) -> &[i32] {
        &self.data
    }

    pub fn iter(&self) -> std::slice::Iter<'_, i32> {
        self.data.iter()
    }

    /// Insert a value.
    ///
    /// Returns `Ok(true)` if the value was stored and `Ok(false)` if it was
    /// already present. When the set is full a resize is attempted; if the
    /// policy denies it the set enters the overflow state.
    pub fn insert(&mut self, value: i32) -> Result<bool, OrdSetError> {
        if self.overflow {
            log::trace!("Rejecting insert of {} into overflowed set", value);
            return Err(OrdSetError::Overflow);
        }

        let (idx, equals) = binary_search_by(&self.data, |x| x.cmp(&value));
        if equals {
            return Ok(false);
        }

        if self.data.len() >= self.capacity {
            self.try_resize()?;
        }

        if idx < self.data.len() {
            self.data.insert(idx, value);
        } else {
            self.data.push(value);
        }
        Ok(true)
    }

    /// Remove a value.
    ///
    /// Returns `Ok(true)` if the value was found and removed.
    pub fn remove(&mut self, value: i32) -> Result<bool, OrdSetError> {
        if self.overflow {
            log::trace!("Rejecting remove of {} from overflowed set", value);
            return Err(OrdSetError::Overflow);
        }

        match self.find(value) {
            Some(idx) => {
                self.data.remove(idx);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Try to find an existing value, returning its index.
    #[inline]
    pub fn find(&self, value: i32) -> Option<usize> {
        match binary_search_by(&self.data, |x| x.cmp(&value)) {
            (idx, true) => Some(idx),
            (_, false) => None,
        }
    }

    pub fn contains(&self, value: i32) -> bool {
        self.find(value).is_some()
    }

    /// Checks whether every element of `other` is also in this set.
    pub fn contains_subset(&self, other: &BoundedOrdSet) -> bool {
        other.iter().all(|x| self.contains(*x))
    }

    /// Returns the element at logical position `index`.
    pub fn element_at(&self, index: usize) -> Result<i32, OrdSetError> {
        self.data
            .get(index)
            .copied()
            .ok_or(OrdSetError::IndexOutOfRange {
                index,
                len: self.data.len(),
            })
    }

    /// Legacy comparison signal.
    ///
    /// Returns `0` for equal sets, `self.len() - other.len()` if the lengths
    /// differ, and `1` if the lengths match but some element differs. Only
    /// the sign of the length difference carries ordering information; use
    /// `==` for plain equality.
    pub fn equals(&self, other: &BoundedOrdSet) -> isize {
        if self.len() != other.len() {
            return self.len() as isize - other.len() as isize;
        }
        if self.data == other.data {
            0
        } else {
            1
        }
    }

    /// Elements separated by single spaces, in ascending order.
    pub fn to_display_string(&self) -> String {
        self.to_string()
    }

    /// Traverse collection given a callback.
    pub fn traverse<F>(&self, mut f: F)
    where
        F: FnMut(usize, &i32),
    {
        for (i, x) in self.data.iter().enumerate() {
            f(i, x);
        }
    }

    /// Collect collection into a vector.
    pub fn collect(&self) -> Vec<i32> {
        self.data.clone()
    }

    /// Merges two sets into a new one. Neither operand is modified.
    ///
    /// The result starts with a capacity for `self.len() + other.len()`
    /// elements (rounded and clamped by `self`'s policy) and grows under the
    /// same policy. If it runs out of room, the elements merged so far are
    /// returned inside `PartialUnion`.
    pub fn union(&self, other: &BoundedOrdSet) -> Result<BoundedOrdSet, PartialUnion> {
        let mut result = BoundedOrdSet::with_policy(self.len() + other.len(), self.policy);

        let (a, b) = (self.as_slice(), other.as_slice());
        let (mut i, mut j) = (0, 0);
        loop {
            let next = match (a.get(i), b.get(j)) {
                (Some(x), Some(y)) => match x.cmp(y) {
                    Ordering::Less => {
                        i += 1;
                        *x
                    }
                    Ordering::Greater => {
                        j += 1;
                        *y
                    }
                    Ordering::Equal => {
                        i += 1;
                        j += 1;
                        *x
                    }
                },
                (Some(x), None) => {
                    i += 1;
                    *x
                }
                (None, Some(y)) => {
                    j += 1;
                    *y
                }
                (None, None) => break,
            };

            if result.push_largest(next).is_err() {
                log::warn!(
                    "Union truncated after {} elements; the union size exceeds the maximum set size",
                    result.len()
                );
                return Err(PartialUnion { partial: result });
            }
        }

        Ok(result)
    }

    // Appends a value known to be larger than every stored element.
    fn push_largest(&mut self, value: i32) -> Result<(), OrdSetError> {
        debug_assert!(self.data.last().map_or(true, |last| *last < value));
        if self.data.len() >= self.capacity {
            self.try_resize()?;
        }
        self.data.push(value);
        Ok(())
    }

    // The only place where `overflow` is set.
    fn try_resize(&mut self) -> Result<(), OrdSetError> {
        match self.policy.next_capacity(self.capacity, self.resize_count) {
            Some(new_capacity) => {
                self.data.reserve_exact(new_capacity - self.data.len());
                log::debug!(
                    "Resizing ordered set from {} to {} (resize {} of {})",
                    self.capacity,
                    new_capacity,
                    self.resize_count + 1,
                    self.policy.max_resizes(),
                );
                self.capacity = new_capacity;
                self.resize_count += 1;
                Ok(())
            }
            None => {
                log::warn!(
                    "Ordered set overflow at capacity {} after {} resizes",
                    self.capacity,
                    self.resize_count
                );
                self.overflow = true;
                Err(OrdSetError::Overflow)
            }
        }
    }
}

/// Union of two sets, see [`BoundedOrdSet::union`].
pub fn union(a: &BoundedOrdSet, b: &BoundedOrdSet) -> Result<BoundedOrdSet, PartialUnion> {
    a.union(b)
}

impl PartialEq for BoundedOrdSet {
    fn eq(&self, other: &Self) -> bool {
        self.data == other.data
    }
}

impl Eq for BoundedOrdSet {}

impl fmt::Display for BoundedOrdSet {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (i, x) in self.data.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", x)?;
        }
        Ok(())
    }
}

impl TryFrom<&[i32]> for BoundedOrdSet {
    type Error = OrdSetError;

    fn try_from(values: &[i32]) -> Result<Self, Self::Error> {
        BoundedOrdSet::from_values(values)
    }
}

impl<'a> IntoIterator for &'a BoundedOrdSet {
    type Item = &'a i32;
    type IntoIter = std::slice::Iter<'a, i32>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

#[cfg(feature = "indextrait")]
impl std::ops::Index<usize> for BoundedOrdSet {
    type Output = i32;

    #[inline]
    fn index(&self, idx: usize) -> &i32 {
        &self.data[idx]
    }
}

// Note: We are using our own implementation of binary search, because we need the
// insertion point and the equality flag in one pass.
fn binary_search_by<T, F>(data: &[T], mut f: F) -> (usize, bool)
where
    F: FnMut(&T) -> Ordering,
{
    let mut l: usize = 0;
    let mut r: usize = data.len();

    while r > l {
        let mid = l + (r - l) / 2;

        let cmp = f(&data[mid]);
        match cmp {
            Ordering::Greater => {
                r = mid;
            }
            Ordering::Equal => return (mid, true),
            Ordering::Less => {
                l = mid + 1;
            }
        }
    }

    (r, false)
}
