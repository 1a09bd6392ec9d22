//! One-shot shop queries.
//!
//! # Usage
//!
//! ```bash
//! # List every shop
//! metashop list
//!
//! # Print one shop's slots
//! metashop show weapons --plain
//! ```

use metashop_core::messages::render;
use metashop_core::text::colorize;
use metashop_core::{Messages, ShopRegistry};

use crate::render::{ColorMode, shop_listing};

/// Largest edit distance at which a missing shop gets a suggestion.
const SUGGESTION_DISTANCE: usize = 3;

/// Lines listing every shop as `id : name`.
#[must_use]
pub fn list(shops: &ShopRegistry, messages: &Messages, mode: ColorMode) -> Vec<String> {
    let mut lines = vec![mode.apply(&render(&messages.list_header, &[]))];
    lines.extend(shops.all().map(|shop| {
        let name = colorize(shop.name());
        mode.apply(&render(
            &messages.list_entry,
            &[("%shop%", shop.id()), ("%name%", name.as_str())],
        ))
    }));
    lines
}

/// Lines describing shop `name`.
///
/// # Errors
///
/// Returns the rendered "unable to open" message, with a suggestion when a
/// shop id is close to `name`.
pub fn show(
    shops: &ShopRegistry,
    messages: &Messages,
    name: &str,
    mode: ColorMode,
) -> Result<Vec<String>, String> {
    if let Some(shop) = shops.get(name) {
        return Ok(shop_listing(shop, mode));
    }

    let mut message = mode.apply(&render(
        &messages.unable_to_open_sender,
        &[("%shop%", name)],
    ));
    if let Some(nearest) = shops.suggest(name, SUGGESTION_DISTANCE) {
        message.push(' ');
        message.push_str(&mode.apply(&render(
            &messages.did_you_mean,
            &[("%suggestion%", nearest.id())],
        )));
    }
    Err(message)
}
