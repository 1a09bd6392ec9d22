//! Integration tests for `/metashop` command flows.
//!
//! These tests drive the command layer with a console sender and players the
//! way a host forwards chat commands.

use metashop_core::command::{CommandError, OpenShop, Recipient, Sender, ShopCommand};
use metashop_core::{Messages, Price};
use metashop_integration_tests::{TestServer, player_holding};
use rust_decimal::Decimal;
use uuid::Uuid;

// =============================================================================
// Editing Flow Tests
// =============================================================================

#[test]
fn test_select_add_remove_changes_selected_shop() {
    let mut server = TestServer::new();
    let sender = Sender::Player(player_holding("DIAMOND_SWORD"));

    assert_eq!(
        server.say(&sender, "select WEAPONS"),
        ["You are now editing weapons."]
    );
    assert_eq!(
        server.say(&sender, "add 4 99.95"),
        ["Added item to slot 4 for 99.95."]
    );

    let weapons = server.shops.get("weapons").expect("weapons exists");
    let slot = weapons.item(4).expect("slot 4 filled");
    assert_eq!(slot.item.material, "DIAMOND_SWORD");
    assert_eq!(slot.price, Price::new(Decimal::new(9995, 2)).expect("valid price"));
    assert!(server.shops.get("armor").is_some_and(|armor| armor.item_count() == 0));

    assert_eq!(server.say(&sender, "remove 4"), ["Cleared slot 4."]);
    assert!(server.shops.get("weapons").is_some_and(|shop| shop.item(4).is_none()));
}

#[test]
fn test_select_unknown_shop_suggests_and_keeps_no_session() {
    let mut server = TestServer::new();
    let player = player_holding("STONE");
    let sender = Sender::Player(player.clone());

    assert_eq!(
        server.say(&sender, "select armour"),
        ["There is no shop named armour.", "Did you mean armor?"]
    );
    assert!(!server.sessions.has(&player.id));
    assert_eq!(
        server.say(&sender, "add 0 1"),
        ["Select a shop first with /metashop select <shop>."]
    );
}

#[test]
fn test_add_requires_held_item() {
    let mut server = TestServer::new();
    let sender = Sender::Player(player_holding("AIR"));

    server.say(&sender, "select armor");
    assert_eq!(
        server.say(&sender, "add 0 5"),
        ["You must hold an item to add it."]
    );
}

#[test]
fn test_slot_outside_shop_is_rejected() {
    let mut server = TestServer::new();
    let sender = Sender::Player(player_holding("BOW"));

    server.say(&sender, "select weapons");
    assert_eq!(
        server.run(&sender, "add 9 10"),
        Err(CommandError::SlotOutOfRange {
            shop: "weapons".to_owned(),
            index: 9,
            size: 9,
        })
    );
}

#[test]
fn test_removed_shop_is_reported() {
    let mut server = TestServer::new();
    let sender = Sender::Player(player_holding("BOW"));

    server.say(&sender, "select weapons");
    assert!(server.shops.remove("weapons"));
    assert_eq!(
        server.say(&sender, "remove 0"),
        ["The shop you selected no longer exists."]
    );
}

#[test]
fn test_typed_tags_are_echoed_literally() {
    let mut server = TestServer::new();
    let sender = Sender::Player(player_holding("STONE"));

    assert_eq!(
        server.say(&sender, "select <red>x"),
        ["There is no shop named <red>x."]
    );
}

// =============================================================================
// Show and List Tests
// =============================================================================

#[test]
fn test_console_opens_shop_for_player() {
    let mut server = TestServer::new();
    let target = Uuid::new_v4();

    let response = server
        .run(&Sender::Console, &format!("/ms show Armor {target}"))
        .expect("show runs");

    assert_eq!(
        response.open,
        Some(OpenShop {
            shop_id: "armor".to_owned(),
            target,
        })
    );
    assert!(
        response
            .replies
            .iter()
            .all(|reply| reply.recipient == Recipient::Sender)
    );
}

#[test]
fn test_list_uses_first_name() {
    let mut server = TestServer::new();
    assert_eq!(
        server.say(&Sender::Console, "list"),
        [
            "Use the first name given below.",
            "armor : Armor",
            "weapons : Weapons",
        ]
    );
}

#[test]
fn test_help_lists_every_subcommand() {
    let mut server = TestServer::new();
    let lines = server.say(&Sender::Console, "help");
    for name in ["show", "list", "select", "add", "remove", "help"] {
        assert!(
            lines.iter().any(|line| line.starts_with(&format!("/metashop {name}"))),
            "help is missing {name}"
        );
    }
}

// =============================================================================
// Language Override Tests
// =============================================================================

#[test]
fn test_language_override_changes_replies() {
    let messages: Messages = serde_json::from_str(
        r#"{"successful-shop-selection": "<yellow>Now editing %shop%!"}"#,
    )
    .expect("valid messages");
    let mut server = TestServer::with_messages(messages);
    let sender = Sender::Player(player_holding("STONE"));

    assert_eq!(server.say(&sender, "select armor"), ["Now editing armor!"]);
    assert_eq!(server.say(&sender, "add 0 1"), ["Added item to slot 0 for 1."]);
}

// =============================================================================
// Parse Error Tests
// =============================================================================

#[test]
fn test_typo_in_subcommand_is_suggested() {
    assert_eq!(
        ShopCommand::parse("/metashop remvoe 3"),
        Err(CommandError::UnknownSubcommand {
            input: "remvoe".to_owned(),
            suggestion: Some("remove"),
        })
    );
}

#[test]
fn test_console_cannot_select() {
    let mut server = TestServer::new();
    assert_eq!(
        server.run(&Sender::Console, "select weapons"),
        Err(CommandError::PlayersOnly("select"))
    );
}
