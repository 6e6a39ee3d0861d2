//! DOM helpers.
//!
//! Thin wrappers over `web_sys`; the browser environment is assumed, so
//! lookups that cannot fail on a parsed document just unwrap.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element};

fn doc() -> Document {
    web_sys::window().unwrap().document().unwrap()
}

pub fn document() -> Document {
    doc()
}

pub fn window() -> web_sys::Window {
    web_sys::window().unwrap()
}

pub fn by_id(id: &str) -> Option<Element> {
    doc().get_element_by_id(id)
}

pub fn query(selector: &str) -> Option<Element> {
    doc().query_selector(selector).ok()?
}

pub fn query_all(selector: &str) -> Vec<Element> {
    let nl = doc().query_selector_all(selector).unwrap();
    let mut v = Vec::new();
    for i in 0..nl.length() {
        if let Some(e) = nl.item(i) {
            if let Ok(el) = e.dyn_into::<Element>() {
                v.push(el);
            }
        }
    }
    v
}

/// Query all matching elements within a parent element.
pub fn query_all_within(parent: &Element, selector: &str) -> Vec<Element> {
    let nl = parent.query_selector_all(selector).unwrap();
    let mut v = Vec::new();
    for i in 0..nl.length() {
        if let Some(e) = nl.item(i) {
            if let Ok(el) = e.dyn_into::<Element>() {
                v.push(el);
            }
        }
    }
    v
}

pub fn set_text(el: &Element, text: &str) {
    el.set_text_content(Some(text));
}

pub fn set_inner_html(el: &Element, html: &str) {
    el.set_inner_html(html);
}

pub fn toggle_class(el: &Element, cls: &str, force: bool) {
    let _ = el.class_list().toggle_with_force(cls, force);
}

pub fn create_element(tag: &str) -> Element {
    doc().create_element(tag).unwrap()
}

/// Set one inline style property, ignoring elements that carry no
/// style attribute (SVG nodes and the like).
pub fn set_style(el: &Element, prop: &str, value: &str) {
    if let Some(html) = el.dyn_ref::<web_sys::HtmlElement>() {
        let _ = html.style().set_property(prop, value);
    }
}

pub fn set_display(el: &Element, value: &str) {
    set_style(el, "display", value);
}
