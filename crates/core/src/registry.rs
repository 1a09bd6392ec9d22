//! Named registries for shops and edit sessions.
//!
//! A [`Registry`] is a lookup table for one entity kind. Each entity knows its
//! own key through [`Keyed`]; the backing [`Store`] decides how keys compare.
//! Shops live in a [`CaselessMap`] so `"Weapons"` and `"weapons"` are the same
//! shop, while sessions are keyed by the owner's [`Uuid`].
//!
//! Registries are plain values: the host constructs them once and hands them to
//! the command layer, so each test can start from an empty one.

use std::borrow::Borrow;
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::hash::BuildHasher;
use std::marker::PhantomData;

use uuid::Uuid;

use crate::collections::CaselessMap;
use crate::text::levenshtein_distance;
use crate::types::{Shop, ShopEditSession};

/// An entity that carries its own registry key.
pub trait Keyed {
    type Key: ?Sized;

    fn key(&self) -> &Self::Key;
}

/// Storage behind a [`Registry`].
pub trait Store<E: Keyed>: Default {
    fn contains(&self, key: &E::Key) -> bool;
    fn insert(&mut self, entity: E) -> Option<E>;
    fn remove(&mut self, key: &E::Key) -> Option<E>;
    fn get(&self, key: &E::Key) -> Option<&E>;
    fn get_mut(&mut self, key: &E::Key) -> Option<&mut E>;
    fn values<'a>(&'a self) -> impl Iterator<Item = &'a E>
    where
        E: 'a;
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<E: Keyed<Key = str>> Store<E> for CaselessMap<E> {
    fn contains(&self, key: &str) -> bool {
        self.contains_key(key)
    }

    fn insert(&mut self, entity: E) -> Option<E> {
        let key = entity.key().to_owned();
        Self::insert(self, key, entity)
    }

    fn remove(&mut self, key: &str) -> Option<E> {
        Self::remove(self, key)
    }

    fn get(&self, key: &str) -> Option<&E> {
        Self::get(self, key)
    }

    fn get_mut(&mut self, key: &str) -> Option<&mut E> {
        Self::get_mut(self, key)
    }

    fn values<'a>(&'a self) -> impl Iterator<Item = &'a E>
    where
        E: 'a,
    {
        Self::values(self)
    }

    fn len(&self) -> usize {
        Self::len(self)
    }
}

impl<E, H> Store<E> for HashMap<Uuid, E, H>
where
    E: Keyed<Key = Uuid>,
    H: BuildHasher + Default,
{
    fn contains(&self, key: &Uuid) -> bool {
        self.contains_key(key)
    }

    fn insert(&mut self, entity: E) -> Option<E> {
        Self::insert(self, *entity.key(), entity)
    }

    fn remove(&mut self, key: &Uuid) -> Option<E> {
        Self::remove(self, key)
    }

    fn get(&self, key: &Uuid) -> Option<&E> {
        Self::get(self, key)
    }

    fn get_mut(&mut self, key: &Uuid) -> Option<&mut E> {
        Self::get_mut(self, key)
    }

    fn values<'a>(&'a self) -> impl Iterator<Item = &'a E>
    where
        E: 'a,
    {
        Self::values(self)
    }

    fn len(&self) -> usize {
        Self::len(self)
    }
}

/// A lookup table holding at most one entity per key.
#[derive(Debug, Clone)]
pub struct Registry<E, S> {
    store: S,
    _entity: PhantomData<E>,
}

/// Shops keyed by case-insensitive id.
pub type ShopRegistry = Registry<Shop, CaselessMap<Shop>>;

/// Edit sessions keyed by owner.
pub type SessionRegistry = Registry<ShopEditSession, HashMap<Uuid, ShopEditSession>>;

impl<E, S> Registry<E, S>
where
    E: Keyed,
    E::Key: ToOwned,
    S: Store<E>,
{
    #[must_use]
    pub fn new() -> Self {
        Self {
            store: S::default(),
            _entity: PhantomData,
        }
    }

    #[must_use]
    pub fn has(&self, key: &E::Key) -> bool {
        self.store.contains(key)
    }

    #[must_use]
    pub fn has_entity(&self, entity: &E) -> bool {
        self.has(entity.key())
    }

    /// Insert `entity`, replacing any entity with the same key.
    /// Returns whether the entity is present afterwards.
    pub fn add(&mut self, entity: E) -> bool {
        let key = entity.key().to_owned();
        self.store.insert(entity);
        self.has(key.borrow())
    }

    /// Remove the entity stored under `key`.
    /// Returns whether the key is absent afterwards.
    pub fn remove(&mut self, key: &E::Key) -> bool {
        self.store.remove(key);
        !self.has(key)
    }

    /// Remove the entity sharing `entity`'s key.
    /// Returns whether the key is absent afterwards.
    pub fn remove_entity(&mut self, entity: &E) -> bool {
        self.remove(entity.key())
    }

    /// Remove and return the entity stored under `key`.
    pub fn take(&mut self, key: &E::Key) -> Option<E> {
        self.store.remove(key)
    }

    #[must_use]
    pub fn get(&self, key: &E::Key) -> Option<&E> {
        self.store.get(key)
    }

    pub fn get_mut(&mut self, key: &E::Key) -> Option<&mut E> {
        self.store.get_mut(key)
    }

    /// Every stored entity. Order depends on the store.
    pub fn all(&self) -> impl Iterator<Item = &E> {
        self.store.values()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.store.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }
}

impl<E, S> Default for Registry<E, S>
where
    E: Keyed,
    E::Key: ToOwned,
    S: Store<E>,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<E, S> Extend<E> for Registry<E, S>
where
    E: Keyed,
    E::Key: ToOwned,
    S: Store<E>,
{
    fn extend<I: IntoIterator<Item = E>>(&mut self, iter: I) {
        for entity in iter {
            self.add(entity);
        }
    }
}

impl<E, S> FromIterator<E> for Registry<E, S>
where
    E: Keyed,
    E::Key: ToOwned,
    S: Store<E>,
{
    fn from_iter<I: IntoIterator<Item = E>>(iter: I) -> Self {
        let mut registry = Self::new();
        registry.extend(iter);
        registry
    }
}

impl ShopRegistry {
    /// The shop whose id is closest to `name`, if within `max_distance` edits.
    ///
    /// Ids are compared case-insensitively. Ties go to the id that sorts first.
    #[must_use]
    pub fn suggest(&self, name: &str, max_distance: usize) -> Option<&Shop> {
        let wanted = name.to_lowercase();
        self.all()
            .map(|shop| (levenshtein_distance(&wanted, &shop.id().to_lowercase()), shop))
            .filter(|(distance, _)| *distance <= max_distance)
            .min_by_key(|(distance, _)| *distance)
            .map(|(_, shop)| shop)
    }
}

impl SessionRegistry {
    /// Start or replace `owner`'s session with `shop_id` selected.
    pub fn select(&mut self, owner: Uuid, shop_id: impl Into<String>) -> &ShopEditSession {
        let session = ShopEditSession::new(owner).with_shop(shop_id);
        match self.store.entry(owner) {
            Entry::Occupied(mut entry) => {
                entry.insert(session);
                entry.into_mut()
            }
            Entry::Vacant(entry) => entry.insert(session),
        }
    }

    /// The shop id `owner` has selected, if any.
    #[must_use]
    pub fn selected_shop(&self, owner: &Uuid) -> Option<&str> {
        self.get(owner).and_then(ShopEditSession::shop_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shop_round_trip() {
        let mut shops = ShopRegistry::new();
        let shop = Shop::new("Weapons", "<red>Weapons");

        assert!(shops.add(shop.clone()));
        assert!(shops.has("weapons"));
        assert!(shops.has_entity(&shop));
        assert!(shops.remove("WEAPONS"));
        assert!(!shops.has("Weapons"));
        assert!(shops.is_empty());
    }

    #[test]
    fn test_remove_missing_reports_absent() {
        let mut shops = ShopRegistry::new();
        assert!(shops.remove("nothing"));
    }

    #[test]
    fn test_shop_add_replaces_by_caseless_id() {
        let mut shops = ShopRegistry::new();
        shops.add(Shop::new("food", "Old"));
        shops.add(Shop::new("FOOD", "New"));

        assert_eq!(shops.len(), 1);
        assert_eq!(shops.get("Food").map(Shop::name), Some("New"));
    }

    #[test]
    fn test_all_lists_each_shop_once() {
        let shops: ShopRegistry = [
            Shop::new("b", "B"),
            Shop::new("a", "A"),
            Shop::new("B", "B2"),
        ]
        .into_iter()
        .collect();

        let ids: Vec<_> = shops.all().map(Shop::id).collect();
        assert_eq!(ids, ["a", "B"]);
    }

    #[test]
    fn test_suggest_nearest_shop() {
        let shops: ShopRegistry = [Shop::new("weapons", "W"), Shop::new("armor", "A")]
            .into_iter()
            .collect();

        assert_eq!(shops.suggest("wepons", 2).map(Shop::id), Some("weapons"));
        assert_eq!(shops.suggest("ARMOUR", 2).map(Shop::id), Some("armor"));
        assert!(shops.suggest("potions", 2).is_none());
    }

    #[test]
    fn test_session_select_overwrites() {
        let mut sessions = SessionRegistry::new();
        let owner = Uuid::new_v4();

        sessions.select(owner, "food");
        sessions.select(owner, "weapons");

        assert_eq!(sessions.len(), 1);
        assert_eq!(sessions.selected_shop(&owner), Some("weapons"));
    }

    #[test]
    fn test_session_keys_are_exact() {
        let mut sessions = SessionRegistry::new();
        let owner = Uuid::new_v4();
        let session = ShopEditSession::new(owner);

        assert!(sessions.add(session.clone()));
        assert!(sessions.has(&owner));
        assert!(!sessions.has(&Uuid::new_v4()));
        assert!(sessions.remove_entity(&session));
        assert!(sessions.get(&owner).is_none());
    }

    #[test]
    fn test_take_returns_removed_entity() {
        let mut shops: ShopRegistry = [Shop::new("Food", "Food")].into_iter().collect();

        let taken = shops.take("FOOD").expect("food was registered");
        assert_eq!(taken.id(), "Food");
        assert!(shops.is_empty());
        assert!(shops.take("food").is_none());
    }

    #[test]
    fn test_session_store_is_empty() {
        let mut store: HashMap<Uuid, ShopEditSession> = HashMap::new();
        assert!(Store::is_empty(&store));

        let owner = Uuid::new_v4();
        Store::insert(&mut store, ShopEditSession::new(owner));
        assert!(!Store::is_empty(&store));
        assert_eq!(Store::values(&store).count(), 1);
    }
}
