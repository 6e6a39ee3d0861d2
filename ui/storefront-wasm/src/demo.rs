//! Demo catalog seeding, so the product grid has something to show on
//! a fresh install.

use sk_cart::catalog;

use crate::dom;
use crate::storage::LocalSlot;

const PRODUCTS_PAGE: &str = "products.html";

/// Seed the starter catalog, but only on the products page and only
/// when nothing is stored yet.
pub fn seed_demo_products() {
    let path = dom::window().location().pathname().unwrap_or_default();
    if !path.contains(PRODUCTS_PAGE) {
        return;
    }
    catalog::seed_demo_products(&LocalSlot);
}
