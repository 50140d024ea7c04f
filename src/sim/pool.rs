//! Owned entity collections
//!
//! A pool is a contiguous `Vec` with stable relative order. Collision passes
//! work on indices and mark entries for removal, then compact once at the end
//! of the pass, so no pass ever deletes from under an index another pass holds.

use serde::{Deserialize, Serialize};

/// A contiguous, order-preserving entity arena
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pool<T> {
    items: Vec<T>,
}

impl<T> Default for Pool<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T> Pool<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
        }
    }

    /// Append an entity
    pub fn add(&mut self, item: T) {
        self.items.push(item);
    }

    /// Remove every entity matching `predicate`, keeping survivors in order.
    /// Returns how many were removed.
    pub fn remove_where<F>(&mut self, mut predicate: F) -> usize
    where
        F: FnMut(&T) -> bool,
    {
        let before = self.items.len();
        self.items.retain(|item| !predicate(item));
        before - self.items.len()
    }

    /// Compact away every entity whose index is marked. `marked` must be one
    /// flag per entity, as produced by `marks()`.
    pub fn remove_marked(&mut self, marked: &[bool]) -> usize {
        debug_assert_eq!(marked.len(), self.items.len());
        let before = self.items.len();
        let mut index = 0;
        self.items.retain(|_| {
            let keep = !marked.get(index).copied().unwrap_or(false);
            index += 1;
            keep
        });
        before - self.items.len()
    }

    /// A fresh removal mask sized to the pool
    pub fn marks(&self) -> Vec<bool> {
        vec![false; self.items.len()]
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.items.iter_mut()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }
}

impl<'a, T> IntoIterator for &'a Pool<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut Pool<T> {
    type Item = &'a mut T;
    type IntoIter = std::slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter_mut()
    }
}

impl<T> FromIterator<T> for Pool<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}
