//! Starter product catalog for the demo storefront.

use serde::{Deserialize, Serialize};
use sk_storage::StorageSlot;

/// Storage key the demo catalog is seeded under.
pub const DEMO_PRODUCTS_KEY: &str = "demoProducts";

/// A catalog entry as the product grid reads it back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DemoProduct {
    pub id: i64,
    pub name: String,
    pub price: f64,
    pub image: String,
    pub category: String,
    pub brand: String,
}

/// The products a fresh install starts with.
pub fn starter_products() -> Vec<DemoProduct> {
    vec![
        DemoProduct {
            id: 1,
            name: "4MP Dome Camera".to_string(),
            price: 8500.0,
            image: "images/products/dome-camera.jpg".to_string(),
            category: "cctv".to_string(),
            brand: "Dahua".to_string(),
        },
        DemoProduct {
            id: 2,
            name: "8-Channel DVR".to_string(),
            price: 14500.0,
            image: "images/products/dvr-8ch.jpg".to_string(),
            category: "recorders".to_string(),
            brand: "Hikvision".to_string(),
        },
        DemoProduct {
            id: 3,
            name: "Smart Video Doorbell".to_string(),
            price: 6200.0,
            image: "images/products/video-doorbell.jpg".to_string(),
            category: "smart-home".to_string(),
            brand: "Imou".to_string(),
        },
    ]
}

/// Write the starter catalog unless the slot already holds one.
/// Whatever is there, even garbage, wins over the seed.
pub fn seed_demo_products<S: StorageSlot>(slot: &S) {
    let occupied = slot
        .get(DEMO_PRODUCTS_KEY)
        .map_or(false, |raw| !raw.is_empty());
    if !occupied {
        sk_storage::write_json(slot, DEMO_PRODUCTS_KEY, &starter_products());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sk_storage::MemoryStore;

    #[test]
    fn seeds_an_empty_slot() {
        let slot = MemoryStore::new();
        seed_demo_products(&slot);
        let products: Vec<DemoProduct> = sk_storage::read_json(&slot, DEMO_PRODUCTS_KEY);
        assert_eq!(products, starter_products());
        assert!(!products.is_empty());
    }

    #[test]
    fn existing_catalog_is_left_alone() {
        let slot = MemoryStore::new();
        slot.set(DEMO_PRODUCTS_KEY, r#"[{"custom": true}]"#);
        seed_demo_products(&slot);
        assert_eq!(
            slot.get(DEMO_PRODUCTS_KEY),
            Some(r#"[{"custom": true}]"#.to_string())
        );
    }

    #[test]
    fn empty_string_counts_as_absent() {
        let slot = MemoryStore::new();
        slot.set(DEMO_PRODUCTS_KEY, "");
        seed_demo_products(&slot);
        let products: Vec<DemoProduct> = sk_storage::read_json(&slot, DEMO_PRODUCTS_KEY);
        assert_eq!(products, starter_products());
    }

    #[test]
    fn seeding_twice_is_idempotent() {
        let slot = MemoryStore::new();
        seed_demo_products(&slot);
        let first = slot.get(DEMO_PRODUCTS_KEY);
        seed_demo_products(&slot);
        assert_eq!(slot.get(DEMO_PRODUCTS_KEY), first);
    }
}
