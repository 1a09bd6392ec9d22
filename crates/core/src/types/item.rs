//! Items offered in shop slots.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::Price;

/// Errors that can occur when building an item or price.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ItemError {
    /// The price text is not a decimal number.
    #[error("invalid price: {0}")]
    InvalidPrice(String),
    /// The price is below zero.
    #[error("price cannot be negative: {0}")]
    NegativePrice(Decimal),
    /// The stack amount is zero.
    #[error("item amount must be at least 1")]
    ZeroAmount,
    /// The material name is empty.
    #[error("item material cannot be empty")]
    EmptyMaterial,
}

/// The material name the game uses for an empty hand.
pub const AIR: &str = "AIR";

/// A stack of items as the host describes it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ItemStack {
    /// Material name, e.g. `DIAMOND_SWORD`.
    pub material: String,
    #[serde(default = "default_amount")]
    pub amount: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub lore: Vec<String>,
}

const fn default_amount() -> u32 {
    1
}

impl ItemStack {
    /// A single item of `material`.
    #[must_use]
    pub fn new(material: impl Into<String>) -> Self {
        Self {
            material: material.into(),
            amount: 1,
            display_name: None,
            lore: Vec::new(),
        }
    }

    #[must_use]
    pub const fn with_amount(mut self, amount: u32) -> Self {
        self.amount = amount;
        self
    }

    #[must_use]
    pub fn with_display_name(mut self, name: impl Into<String>) -> Self {
        self.display_name = Some(name.into());
        self
    }

    #[must_use]
    pub fn with_lore(mut self, lore: Vec<String>) -> Self {
        self.lore = lore;
        self
    }

    /// True for the empty-hand material or an empty stack.
    #[must_use]
    pub fn is_air(&self) -> bool {
        self.amount == 0 || self.material.is_empty() || self.material.eq_ignore_ascii_case(AIR)
    }

    /// Check the stack can be offered in a shop.
    ///
    /// # Errors
    ///
    /// Returns an error for an empty material name or a zero amount.
    pub fn validate(&self) -> Result<(), ItemError> {
        if self.material.trim().is_empty() {
            return Err(ItemError::EmptyMaterial);
        }
        if self.amount == 0 {
            return Err(ItemError::ZeroAmount);
        }
        Ok(())
    }

    /// The name shown to players: the display name, or the material in
    /// title case (`DIAMOND_SWORD` becomes `Diamond Sword`).
    #[must_use]
    pub fn label(&self) -> String {
        if let Some(name) = &self.display_name {
            return name.clone();
        }
        self.material
            .split('_')
            .filter(|word| !word.is_empty())
            .map(|word| {
                let mut chars = word.chars();
                chars.next().map_or_else(String::new, |first| {
                    first
                        .to_uppercase()
                        .chain(chars.flat_map(char::to_lowercase))
                        .collect()
                })
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// An item for sale in a shop slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShopItem {
    pub item: ItemStack,
    pub price: Price,
}

impl ShopItem {
    #[must_use]
    pub const fn new(item: ItemStack, price: Price) -> Self {
        Self { item, price }
    }
}
