//! Per-user shop edit sessions.

use core::hash::{Hash, Hasher};

use uuid::Uuid;

use crate::registry::Keyed;

/// Marks which shop a user is currently editing.
///
/// Equality and hashing look at the owner only: two sessions for the same user
/// are the same session whatever shop they have selected. This partial
/// equality is what lets the session registry hold one session per user.
#[derive(Debug, Clone)]
pub struct ShopEditSession {
    owner: Uuid,
    shop_id: Option<String>,
}

impl ShopEditSession {
    /// A session with no shop selected.
    #[must_use]
    pub const fn new(owner: Uuid) -> Self {
        Self {
            owner,
            shop_id: None,
        }
    }

    #[must_use]
    pub fn with_shop(mut self, shop_id: impl Into<String>) -> Self {
        self.shop_id = Some(shop_id.into());
        self
    }

    #[must_use]
    pub const fn owner(&self) -> Uuid {
        self.owner
    }

    #[must_use]
    pub fn shop_id(&self) -> Option<&str> {
        self.shop_id.as_deref()
    }

    pub fn set_shop_id(&mut self, shop_id: Option<String>) {
        self.shop_id = shop_id;
    }
}

impl PartialEq for ShopEditSession {
    fn eq(&self, other: &Self) -> bool {
        self.owner == other.owner
    }
}

impl Eq for ShopEditSession {}

impl Hash for ShopEditSession {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.owner.hash(state);
    }
}

impl Keyed for ShopEditSession {
    type Key = Uuid;

    fn key(&self) -> &Uuid {
        &self.owner
    }
}
