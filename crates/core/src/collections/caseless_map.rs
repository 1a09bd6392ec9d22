//! A map whose string keys compare without regard to letter case.

use std::collections::BTreeMap;
use std::collections::btree_map;

/// A map from case-insensitive string keys to values.
///
/// Keys are folded with [`str::to_lowercase`] before storage, so `"Shop"`,
/// `"shop"` and `"SHOP"` address the same entry. The spelling passed to the
/// most recent [`insert`](Self::insert) is remembered and returned by
/// [`keys`](Self::keys) and [`iter`](Self::iter).
///
/// Iteration is ordered by the folded key, which keeps listings reproducible.
///
/// ```
/// use metashop_core::CaselessMap;
///
/// let mut map = CaselessMap::new();
/// map.insert("Shop", 1);
/// map.insert("SHOP", 2);
///
/// assert_eq!(map.get("shop"), Some(&2));
/// assert_eq!(map.len(), 1);
/// assert_eq!(map.keys().collect::<Vec<_>>(), ["SHOP"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaselessMap<V> {
    entries: BTreeMap<String, Entry<V>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Entry<V> {
    key: String,
    value: V,
}

/// Fold a key to the form used for comparison.
#[must_use]
pub fn fold_key(key: &str) -> String {
    key.to_lowercase()
}

impl<V> CaselessMap<V> {
    /// Create an empty map.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Insert `value` under `key`, returning the value previously stored under
    /// any casing of `key`.
    pub fn insert(&mut self, key: impl Into<String>, value: V) -> Option<V> {
        let key = key.into();
        self.entries
            .insert(fold_key(&key), Entry { key, value })
            .map(|old| old.value)
    }

    /// Returns the value stored under any casing of `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&V> {
        self.entries.get(&fold_key(key)).map(|entry| &entry.value)
    }

    /// Returns a mutable reference to the value stored under any casing of `key`.
    pub fn get_mut(&mut self, key: &str) -> Option<&mut V> {
        self.entries
            .get_mut(&fold_key(key))
            .map(|entry| &mut entry.value)
    }

    /// Returns the stored spelling of `key` together with its value.
    #[must_use]
    pub fn get_key_value(&self, key: &str) -> Option<(&str, &V)> {
        self.entries
            .get(&fold_key(key))
            .map(|entry| (entry.key.as_str(), &entry.value))
    }

    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(&fold_key(key))
    }

    /// Remove the entry stored under any casing of `key`.
    pub fn remove(&mut self, key: &str) -> Option<V> {
        self.entries
            .remove(&fold_key(key))
            .map(|entry| entry.value)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Keys in the spelling they were last inserted with.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.values().map(|entry| entry.key.as_str())
    }

    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.entries.values().map(|entry| &entry.value)
    }

    pub fn values_mut(&mut self) -> impl Iterator<Item = &mut V> {
        self.entries.values_mut().map(|entry| &mut entry.value)
    }

    #[must_use]
    pub fn iter(&self) -> Iter<'_, V> {
        Iter {
            inner: self.entries.values(),
        }
    }
}

impl<V> Default for CaselessMap<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Into<String>, V> FromIterator<(K, V)> for CaselessMap<V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        map.extend(iter);
        map
    }
}

impl<K: Into<String>, V> Extend<(K, V)> for CaselessMap<V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

/// Iterator over `(key, value)` pairs of a [`CaselessMap`].
#[derive(Debug)]
pub struct Iter<'a, V> {
    inner: btree_map::Values<'a, String, Entry<V>>,
}

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = (&'a str, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner
            .next()
            .map(|entry| (entry.key.as_str(), &entry.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a, V> IntoIterator for &'a CaselessMap<V> {
    type Item = (&'a str, &'a V);
    type IntoIter = Iter<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
