//! Shops and their slots.

use std::collections::BTreeMap;

use super::ShopItem;
use crate::registry::Keyed;

/// A named collection of purchasable slots.
///
/// Shop ids are compared without regard to case by the shop registry. Slots are
/// addressed by index; the shop itself accepts any index and leaves bounds
/// checks against [`size`](Self::size) to callers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shop {
    id: String,
    name: String,
    size: usize,
    slots: BTreeMap<usize, ShopItem>,
}

impl Shop {
    /// Slot count of a double chest.
    pub const DEFAULT_SIZE: usize = 54;

    /// Create an empty shop with [`DEFAULT_SIZE`](Self::DEFAULT_SIZE) slots.
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            size: Self::DEFAULT_SIZE,
            slots: BTreeMap::new(),
        }
    }

    #[must_use]
    pub const fn with_size(mut self, size: usize) -> Self {
        self.size = size;
        self
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Display name, usually containing color tags.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Number of slots a menu for this shop shows.
    #[must_use]
    pub const fn size(&self) -> usize {
        self.size
    }

    #[must_use]
    pub const fn contains_slot(&self, index: usize) -> bool {
        index < self.size
    }

    /// Put `item` in slot `index`, or clear the slot when `item` is `None`.
    /// Returns what the slot held before.
    pub fn set_item(&mut self, index: usize, item: Option<ShopItem>) -> Option<ShopItem> {
        match item {
            Some(item) => self.slots.insert(index, item),
            None => self.slots.remove(&index),
        }
    }

    #[must_use]
    pub fn item(&self, index: usize) -> Option<&ShopItem> {
        self.slots.get(&index)
    }

    /// Occupied slots in index order.
    pub fn items(&self) -> impl Iterator<Item = (usize, &ShopItem)> {
        self.slots.iter().map(|(index, item)| (*index, item))
    }

    /// Every slot up to [`size`](Self::size), empty ones included.
    pub fn slots(&self) -> impl Iterator<Item = Option<&ShopItem>> {
        (0..self.size).map(|index| self.slots.get(&index))
    }

    /// Number of occupied slots.
    #[must_use]
    pub fn item_count(&self) -> usize {
        self.slots.len()
    }
}

impl Keyed for Shop {
    type Key = str;

    fn key(&self) -> &str {
        &self.id
    }
}
