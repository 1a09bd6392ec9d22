//! `metashop-core` - shops, edit sessions and chat text utilities.
//!
//! The core crate holds the data structures and rules behind the `/metashop`
//! commands. It does no I/O: the host loads shops, delivers replies and shows
//! menus.
//!
//! # Modules
//!
//! - [`collections`] - [`CaselessMap`], a map with case-insensitive string keys
//! - [`text`] - color tags, placeholder substitution, Levenshtein distance
//! - [`types`] - shops, items, prices and edit sessions
//! - [`registry`] - shop and session registries
//! - [`messages`] - language strings shown to players
//! - [`command`] - parsing and running `/metashop` commands

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod collections;
pub mod command;
pub mod messages;
pub mod registry;
pub mod text;
pub mod types;

pub use collections::CaselessMap;
pub use messages::Messages;
pub use registry::{Keyed, Registry, SessionRegistry, ShopRegistry, Store};
pub use types::*;
