//! Id-keyed storage that iterates in insertion order.

use std::collections::HashMap;
use std::hash::Hash;

use stockroom_core::Entity;

/// Keyed table preserving insertion order for scans.
///
/// Lookups are O(1); removal is O(n) because the order list is compacted.
#[derive(Debug, Clone)]
pub(crate) struct Table<K, V> {
    rows: HashMap<K, V>,
    order: Vec<K>,
}

impl<K, V> Default for Table<K, V> {
    fn default() -> Self {
        Self {
            rows: HashMap::new(),
            order: Vec::new(),
        }
    }
}

impl<K, V> Table<K, V>
where
    K: Copy + Eq + Hash,
{
    pub(crate) fn contains(&self, key: &K) -> bool {
        self.rows.contains_key(key)
    }

    pub(crate) fn get(&self, key: &K) -> Option<&V> {
        self.rows.get(key)
    }

    pub(crate) fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        self.rows.get_mut(key)
    }

    /// Insert a new row keyed by the entity's id.
    ///
    /// The caller must have checked that the id is absent.
    pub(crate) fn insert_new(&mut self, value: V)
    where
        V: Entity<Id = K>,
    {
        let key = value.id();
        debug_assert!(!self.rows.contains_key(&key));
        self.order.push(key);
        self.rows.insert(key, value);
    }

    pub(crate) fn remove(&mut self, key: &K) -> Option<V> {
        let value = self.rows.remove(key)?;
        self.order.retain(|k| k != key);
        Some(value)
    }

    pub(crate) fn len(&self) -> usize {
        self.rows.len()
    }

    pub(crate) fn values(&self) -> impl Iterator<Item = &V> + '_ {
        self.order.iter().filter_map(|k| self.rows.get(k))
    }
}
