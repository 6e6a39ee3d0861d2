//! Shopping cart state, persisted as a JSON array under a single
//! storage key. Every operation goes through a full load / mutate /
//! save cycle so concurrent pages never see a half-written cart.

use serde::{Deserialize, Serialize};
use sk_storage::StorageSlot;

pub mod catalog;

/// Storage key the cart array lives under.
pub const CART_KEY: &str = "cart";

/// A product identity as it appears in page markup. Integer and string
/// forms are kept apart so `7` and `"7"` stay two different products,
/// exactly as they round-trip through JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ItemId {
    Number(i64),
    Text(String),
}

impl From<i64> for ItemId {
    fn from(n: i64) -> Self {
        Self::Number(n)
    }
}

impl From<&str> for ItemId {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for ItemId {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

/// One cart line. Field names are the stored wire format and must not
/// change, or existing visitors lose their carts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    pub id: ItemId,
    pub name: String,
    pub price: f64,
    pub image: String,
    #[serde(default = "default_quantity")]
    pub quantity: u32,
}

fn default_quantity() -> u32 {
    1
}

/// Badge total: the sum of line quantities, where a zero (or, on the
/// wire, missing) quantity still counts as one unit.
pub fn total_quantity(items: &[CartItem]) -> u32 {
    items
        .iter()
        .map(|item| if item.quantity == 0 { 1 } else { item.quantity })
        .sum()
}

/// Cart persistence over a [`StorageSlot`].
pub struct CartStore<S> {
    slot: S,
}

impl<S: StorageSlot> CartStore<S> {
    pub fn new(slot: S) -> Self {
        Self { slot }
    }

    /// Current cart contents. Absent or unreadable state is an empty
    /// cart, never an error.
    pub fn load(&self) -> Vec<CartItem> {
        sk_storage::read_json(&self.slot, CART_KEY)
    }

    pub fn save(&self, items: &[CartItem]) {
        sk_storage::write_json(&self.slot, CART_KEY, &items);
    }

    /// Add one unit of a product. A line with the same id gets its
    /// quantity bumped and keeps the name, price and image it was
    /// first added with; anything else appends a fresh line.
    pub fn add_item(&self, id: ItemId, name: &str, price: f64, image: &str) {
        let mut items = self.load();
        match items.iter_mut().find(|item| item.id == id) {
            Some(line) => line.quantity = line.quantity.saturating_add(1),
            None => items.push(CartItem {
                id,
                name: name.to_string(),
                price,
                image: image.to_string(),
                quantity: 1,
            }),
        }
        self.save(&items);
    }

    /// Drop the whole line for `id`, regardless of its quantity.
    pub fn remove_item(&self, id: &ItemId) {
        let mut items = self.load();
        items.retain(|item| item.id != *id);
        self.save(&items);
    }

    /// Forget the cart entirely by deleting its key.
    pub fn clear(&self) {
        self.slot.remove(CART_KEY);
    }

    pub fn total_quantity(&self) -> u32 {
        total_quantity(&self.load())
    }
}
