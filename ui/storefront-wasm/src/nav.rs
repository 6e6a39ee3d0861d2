//! Navigation highlighting, footer year and tooltip bootstrap.

use wasm_bindgen::{JsCast, JsValue};

use crate::dom;

const ACTIVE_CLASS: &str = "active";

/// Mark the nav link whose `href` names the page being viewed.
pub fn highlight_current_page() {
    let path = dom::window().location().pathname().unwrap_or_default();
    let current = page_name(&path);
    for link in dom::query_all(".navbar-nav .nav-link") {
        let href = link.get_attribute("href").unwrap_or_default();
        dom::toggle_class(&link, ACTIVE_CLASS, href == current);
    }
}

/// Last segment of a path; a trailing slash means the index page.
fn page_name(path: &str) -> &str {
    match path.rsplit('/').next() {
        Some("") | None => "index.html",
        Some(segment) => segment,
    }
}

/// Write the current year into every footer placeholder.
pub fn set_current_year() {
    let year = js_sys::Date::new_0().get_full_year().to_string();
    for el in dom::query_all(".current-year") {
        dom::set_text(&el, &year);
    }
}

/// Activate Bootstrap tooltips on any opted-in element. The layout
/// loads Bootstrap from a CDN; when it is absent this does nothing.
pub fn init_tooltips() {
    let triggers = dom::query_all(r#"[data-bs-toggle="tooltip"]"#);
    if triggers.is_empty() {
        return;
    }
    let Some(ctor) = tooltip_constructor() else {
        return;
    };
    for el in triggers {
        let _ = js_sys::Reflect::construct(&ctor, &js_sys::Array::of1(el.as_ref()));
    }
}

/// `window.bootstrap.Tooltip`, if the global is loaded.
fn tooltip_constructor() -> Option<js_sys::Function> {
    let bootstrap =
        js_sys::Reflect::get(dom::window().as_ref(), &JsValue::from_str("bootstrap")).ok()?;
    if bootstrap.is_undefined() {
        return None;
    }
    js_sys::Reflect::get(&bootstrap, &JsValue::from_str("Tooltip"))
        .ok()?
        .dyn_into()
        .ok()
}
