//! Integration tests for the shop and session registries.

use metashop_core::{CaselessMap, SessionRegistry, Shop, ShopEditSession, ShopRegistry};
use uuid::Uuid;

// =============================================================================
// Caseless Map Tests
// =============================================================================

#[test]
fn test_caseless_lookup_any_spelling() {
    let mut map = CaselessMap::new();
    map.insert("Diamond_Shop", 1);

    for key in ["diamond_shop", "DIAMOND_SHOP", "dIaMoNd_ShOp"] {
        assert_eq!(map.get(key), Some(&1), "{key}");
    }
}

#[test]
fn test_last_write_wins_with_one_entry() {
    let mut map = CaselessMap::new();
    map.insert("Food", "first");
    map.insert("FOOD", "second");

    assert_eq!(map.len(), 1);
    assert_eq!(map.get("food"), Some(&"second"));
    assert_eq!(map.keys().collect::<Vec<_>>(), ["FOOD"]);
}

// =============================================================================
// Shop Registry Tests
// =============================================================================

#[test]
fn test_shop_add_get_remove() {
    let mut shops = ShopRegistry::new();
    let shop = Shop::new("Tools", "<gray>Tools");

    assert!(shops.add(shop.clone()));
    assert!(shops.has("tools"));
    assert_eq!(shops.get("TOOLS"), Some(&shop));

    assert!(shops.remove("tOoLs"));
    assert!(!shops.has("tools"));
    assert!(shops.is_empty());
}

#[test]
fn test_readding_replaces_shop() {
    let mut shops = ShopRegistry::new();
    shops.add(Shop::new("food", "Old"));
    shops.add(Shop::new("Food", "New").with_size(9));

    assert_eq!(shops.len(), 1);
    let shop = shops.get("food").expect("food exists");
    assert_eq!(shop.name(), "New");
    assert_eq!(shop.size(), 9);
}

#[test]
fn test_all_is_ordered_by_folded_id() {
    let shops: ShopRegistry = [
        Shop::new("weapons", "W"),
        Shop::new("Armor", "A"),
        Shop::new("food", "F"),
    ]
    .into_iter()
    .collect();

    let ids: Vec<&str> = shops.all().map(Shop::id).collect();
    assert_eq!(ids, ["Armor", "food", "weapons"]);
}

#[test]
fn test_suggest_nearest_shop() {
    let shops: ShopRegistry = [Shop::new("armor", "A"), Shop::new("weapons", "W")]
        .into_iter()
        .collect();

    assert_eq!(shops.suggest("ARMOUR", 3).map(Shop::id), Some("armor"));
    assert_eq!(shops.suggest("wepons", 3).map(Shop::id), Some("weapons"));
    assert!(shops.suggest("blocks", 3).is_none());
}

// =============================================================================
// Session Registry Tests
// =============================================================================

#[test]
fn test_sessions_are_identified_by_owner() {
    let owner = Uuid::new_v4();
    let editing_food = ShopEditSession::new(owner).with_shop("food");
    let editing_armor = ShopEditSession::new(owner).with_shop("armor");

    assert_eq!(editing_food, editing_armor);
    assert_ne!(editing_food, ShopEditSession::new(Uuid::new_v4()));
}

#[test]
fn test_session_lookup_by_owner() {
    let mut sessions = SessionRegistry::new();
    let owner = Uuid::new_v4();

    assert!(sessions.add(ShopEditSession::new(owner)));
    assert!(sessions.has(&owner));
    assert!(sessions.has_entity(&ShopEditSession::new(owner).with_shop("other")));
    assert_eq!(sessions.selected_shop(&owner), None);

    sessions.select(owner, "food");
    sessions.select(owner, "armor");
    assert_eq!(sessions.len(), 1);
    assert_eq!(sessions.selected_shop(&owner), Some("armor"));

    assert!(sessions.remove(&owner));
    assert!(sessions.get(&owner).is_none());
}
