//! Cart operations and the badge presenter.

use sk_cart::{CartStore, ItemId, total_quantity};
use sk_notify::Severity;
use wasm_bindgen::prelude::*;

use crate::dom;
use crate::notify;
use crate::storage::LocalSlot;

/// Every badge the layout places, header pill and cart-page counter alike.
const BADGE_SELECTOR: &str = ".cart-count, #cartBadge";
const CART_PAGE: &str = "cart.html";

fn store() -> CartStore<LocalSlot> {
    CartStore::new(LocalSlot)
}

/// Re-project the cart total onto every badge on the page. Badges show
/// the unit count and hide entirely when the cart is empty.
#[wasm_bindgen(js_name = updateCartCount)]
pub fn update_cart_count() {
    let total = total_quantity(&store().load());
    for badge in dom::query_all(BADGE_SELECTOR) {
        dom::set_text(&badge, &total.to_string());
        dom::set_display(&badge, if total > 0 { "inline-block" } else { "none" });
    }
}

/// Add one unit of a product, refresh the badges and confirm with a
/// toast. Returns `false` so inline `onclick` handlers suppress the
/// link they are attached to.
#[wasm_bindgen(js_name = addToCart)]
pub fn add_to_cart(product_id: JsValue, product_name: String, price: f64, image: String) -> bool {
    store().add_item(item_id(&product_id), &product_name, price, &image);
    update_cart_count();
    notify::show(&format!("{product_name} added to cart!"), Severity::Success);
    false
}

/// Drop a product's whole line. On the cart page the row markup is
/// server-rendered per line, so the page reloads to redraw the list.
#[wasm_bindgen(js_name = removeFromCart)]
pub fn remove_from_cart(product_id: JsValue) {
    store().remove_item(&item_id(&product_id));
    update_cart_count();
    reload_if_cart_page();
}

/// Empty the cart after the visitor confirms. Declining leaves the
/// stored value untouched.
#[wasm_bindgen(js_name = clearCart)]
pub fn clear_cart() {
    let confirmed = dom::window()
        .confirm_with_message("Are you sure you want to clear your cart?")
        .unwrap_or(false);
    if !confirmed {
        return;
    }
    store().clear();
    update_cart_count();
    reload_if_cart_page();
}

fn reload_if_cart_page() {
    let location = dom::window().location();
    if location.pathname().unwrap_or_default().contains(CART_PAGE) {
        let _ = location.reload();
    }
}

/// Product ids arrive from markup as either a number or a string and
/// must keep that shape, or lines stop matching their stored ids.
fn item_id(value: &JsValue) -> ItemId {
    if let Some(n) = value.as_f64() {
        if n.is_finite() && n.fract() == 0.0 {
            return ItemId::Number(n as i64);
        }
    }
    ItemId::Text(value.as_string().unwrap_or_default())
}
