use std::slice::Iter;
use crate::core::domain::DEFAULT_CAPACITY;
use crate::core::library::{LibraryError, LibraryResult};

/// Growable array with an explicit doubling policy.
///
/// `capacity` is tracked by the array itself rather than left to `Vec`, so growth
/// is observable and deterministic: when `size == capacity` the next `add`
/// doubles the capacity.
#[derive(Debug, Clone)]
pub struct DynamicArray<T> {
    items: Vec<T>,
    capacity: usize,
}

impl<T> DynamicArray<T> {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            items: Vec::with_capacity(capacity),
            capacity,
        }
    }

    fn resize(&mut self) {
        self.capacity *= 2;
        self.items.reserve_exact(self.capacity - self.items.len());
    }

    pub fn add(&mut self, item: T) {
        if self.items.len() == self.capacity {
            self.resize();
        }
        self.items.push(item);
    }

    pub fn get(&self, index: usize) -> LibraryResult<&T> {
        let size = self.items.len();
        self.items.get(index).ok_or(LibraryError::out_of_range(index, size))
    }

    pub fn get_mut(&mut self, index: usize) -> LibraryResult<&mut T> {
        let size = self.items.len();
        self.items.get_mut(index).ok_or(LibraryError::out_of_range(index, size))
    }

    // Replaces the item at `index`, returning the previous one.
    pub fn set(&mut self, index: usize, item: T) -> LibraryResult<T> {
        let slot = self.get_mut(index)?;
        Ok(std::mem::replace(slot, item))
    }

    // Removes the item at `index` and shifts later items left; capacity is kept.
    pub fn remove(&mut self, index: usize) -> LibraryResult<T> {
        if index >= self.items.len() {
            return Err(LibraryError::out_of_range(index, self.items.len()));
        }
        Ok(self.items.remove(index))
    }

    pub fn position<P>(&self, predicate: P) -> Option<usize>
        where P: FnMut(&T) -> bool {
        self.items.iter().position(predicate)
    }

    pub fn size(&self) -> usize {
        self.items.len()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> Iter<'_, T> {
        self.items.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.items.iter_mut()
    }
}

impl<T> Default for DynamicArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, T> IntoIterator for &'a DynamicArray<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
