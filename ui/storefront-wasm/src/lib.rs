//! Vantage Security storefront, WASM edition.
//!
//! Pure Rust + WASM replacement for the site-wide page script. Each
//! concern lives in its own module; page markup calls the exported
//! operations (`addToCart`, `validateForm`, ...) through the bindgen
//! glue, and `start` runs the per-page setup the old script did on
//! `DOMContentLoaded`.

pub mod cart;
pub mod contact;
pub mod demo;
pub mod dom;
pub mod forms;
pub mod nav;
pub mod notify;
pub mod page;
pub mod storage;

use wasm_bindgen::prelude::*;

/// WASM entry point – called automatically when the module is instantiated.
#[wasm_bindgen(start)]
pub fn start() {
    // Improve panic messages in the browser console
    console_error_panic_hook::set_once();

    init();
}

/// Per-page initialisation.
fn init() {
    cart::update_cart_count();
    nav::set_current_year();
    nav::highlight_current_page();
    nav::init_tooltips();
    page::setup_back_to_top();
    demo::seed_demo_products();

    gloo_console::log!("storefront behavior layer loaded");
}
