//! Integration tests for the `metashop` crates.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p metashop-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `text` - Color tags, placeholders and edit distance together
//! - `registry` - Shop and session registries over the caseless map
//! - `commands` - Full `/metashop` command flows

use metashop_core::command::{CommandContext, CommandError, Player, Response, Sender};
use metashop_core::text::strip_colors;
use metashop_core::{ItemStack, Messages, SessionRegistry, Shop, ShopRegistry};
use uuid::Uuid;

/// Registries and messages for running commands the way a host would.
#[derive(Debug)]
pub struct TestServer {
    pub shops: ShopRegistry,
    pub sessions: SessionRegistry,
    pub messages: Messages,
}

impl TestServer {
    /// A server with the `weapons` (9 slots) and `armor` (27 slots) shops.
    #[must_use]
    pub fn new() -> Self {
        Self::with_messages(Messages::default())
    }

    #[must_use]
    pub fn with_messages(messages: Messages) -> Self {
        let shops = [
            Shop::new("weapons", "<red>Weapons").with_size(9),
            Shop::new("armor", "<aqua>Armor").with_size(27),
        ]
        .into_iter()
        .collect();
        Self {
            shops,
            sessions: SessionRegistry::new(),
            messages,
        }
    }

    /// Run `line` for `sender`.
    ///
    /// # Errors
    ///
    /// Returns the command's error unchanged.
    pub fn run(&mut self, sender: &Sender, line: &str) -> Result<Response, CommandError> {
        CommandContext::new(&mut self.shops, &mut self.sessions, &self.messages)
            .dispatch(sender, line)
    }

    /// Run `line` and return the sender's replies without color codes.
    ///
    /// # Panics
    ///
    /// Panics if the command fails.
    #[must_use]
    pub fn say(&mut self, sender: &Sender, line: &str) -> Vec<String> {
        match self.run(sender, line) {
            Ok(response) => response.sender_lines().map(strip_colors).collect(),
            Err(err) => panic!("`{line}` failed: {err}"),
        }
    }
}

impl Default for TestServer {
    fn default() -> Self {
        Self::new()
    }
}

/// A player with a fresh id holding `material`.
#[must_use]
pub fn player_holding(material: &str) -> Player {
    Player::new(Uuid::new_v4(), "Alex").holding(ItemStack::new(material))
}
