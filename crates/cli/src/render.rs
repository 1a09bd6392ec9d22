//! Text rendering of shops and replies for the terminal.

use metashop_core::Shop;
use metashop_core::text::{colorize, strip_colors};

/// How chat color codes are written to the terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    /// Keep section-sign codes, as a game client would receive them.
    #[default]
    Raw,
    /// Remove color codes.
    Plain,
}

impl ColorMode {
    #[must_use]
    pub fn apply(self, text: &str) -> String {
        match self {
            Self::Raw => text.to_owned(),
            Self::Plain => strip_colors(text),
        }
    }
}

/// A text listing of `shop`'s occupied slots.
#[must_use]
pub fn shop_listing(shop: &Shop, mode: ColorMode) -> Vec<String> {
    let mut lines = Vec::with_capacity(shop.item_count() + 1);
    lines.push(mode.apply(&colorize(&format!(
        "{} <gray>({}, {} of {} slots used)",
        shop.name(),
        shop.id(),
        shop.item_count(),
        shop.size()
    ))));

    if shop.item_count() == 0 {
        lines.push(mode.apply(&colorize("  <gray>This shop is empty.")));
        return lines;
    }

    for (index, entry) in shop.items() {
        let label = colorize(&entry.item.label());
        lines.push(mode.apply(&format!(
            "  [{index:>2}] {amount} x {label}{reset} - {price}",
            amount = entry.item.amount,
            reset = colorize("<reset>"),
            price = entry.price,
        )));
        for lore in &entry.item.lore {
            lines.push(mode.apply(&format!("         {}", colorize(lore))));
        }
    }
    lines
}
