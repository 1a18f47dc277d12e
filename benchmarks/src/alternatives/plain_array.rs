use std::cmp::Ordering;

/// Unbounded sorted vector, the baseline without any capacity policy.
pub struct PlainArray<T> {
    data: Vec<T>,
}

#[allow(dead_code)]
impl<T> PlainArray<T>
where
    T: Ord + Clone,
{
    pub fn new(capacity: usize) -> PlainArray<T> {
        PlainArray {
            data: Vec::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn insert(&mut self, t: T) -> bool {
        match self.data.binary_search(&t) {
            Ok(_) => false,
            Err(idx) => {
                self.data.insert(idx, t);
                true
            }
        }
    }

    pub fn remove(&mut self, t: &T) -> bool {
        match self.data.binary_search(t) {
            Ok(idx) => {
                self.data.remove(idx);
                true
            }
            Err(_) => false,
        }
    }

    pub fn contains(&self, t: &T) -> bool {
        self.data.binary_search(t).is_ok()
    }

    pub fn union(&self, other: &PlainArray<T>) -> PlainArray<T> {
        let mut data = Vec::with_capacity(self.len() + other.len());
        let (mut i, mut j) = (0, 0);
        while i < self.data.len() && j < other.data.len() {
            match self.data[i].cmp(&other.data[j]) {
                Ordering::Less => {
                    data.push(self.data[i].clone());
                    i += 1;
                }
                Ordering::Greater => {
                    data.push(other.data[j].clone());
                    j += 1;
                }
                Ordering::Equal => {
                    data.push(self.data[i].clone());
                    i += 1;
                    j += 1;
                }
            }
        }
        data.extend_from_slice(&self.data[i ..]);
        data.extend_from_slice(&other.data[j ..]);
        PlainArray { data }
    }

    pub fn collect(&self) -> Vec<T> {
        self.data.clone()
    }
}
