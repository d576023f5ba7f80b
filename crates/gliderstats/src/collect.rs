//! Deduplicating accumulator.
//!
//! First-seen-wins collection keyed by a caller-extracted key. Insertion is
//! a linear scan; candidate sets here are tens to low hundreds of records,
//! so the quadratic worst case is a deliberate simplicity choice.

/// An append-only list that rejects entries whose key is already present.
#[derive(Debug, Clone, Default)]
pub struct UniqueList<T> {
    items: Vec<T>,
}

impl<T> UniqueList<T> {
    /// Create an empty list.
    #[must_use]
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Insert `item` unless an existing entry has the same key.
    ///
    /// Returns `true` if the item was inserted. Later duplicate data for the
    /// same key is discarded, not merged.
    pub fn insert_by_key<K, F>(&mut self, item: T, key: F) -> bool
    where
        K: PartialEq,
        F: Fn(&T) -> K,
    {
        let new_key = key(&item);
        if self.items.iter().any(|existing| key(existing) == new_key) {
            return false;
        }
        self.items.push(item);
        true
    }

    /// The collected entries, in insertion order.
    #[must_use]
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Number of collected entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the list is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Consume the list, yielding the collected entries.
    #[must_use]
    pub fn into_items(self) -> Vec<T> {
        self.items
    }
}
