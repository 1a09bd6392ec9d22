//! The `/metashop` command layer.
//!
//! Commands are parsed into a [`ShopCommand`] and run through a
//! [`CommandContext`], which borrows the registries and language strings for
//! the duration of one command. Lookup misses become replies to the sender;
//! only malformed input and sender mismatches are [`CommandError`]s.

pub mod dispatch;
pub mod error;
pub mod parse;

pub use dispatch::{CommandContext, OpenShop, Player, Recipient, Reply, Response, Sender};
pub use error::CommandError;
pub use parse::{ShopCommand, USAGE};
