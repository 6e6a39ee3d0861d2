//! Page chrome: smooth scrolling, the collapsed mobile menu and the
//! floating back-to-top button.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{ScrollBehavior, ScrollToOptions};

use crate::dom;

/// Height reserved for the fixed header, in px.
const HEADER_OFFSET: f64 = 100.0;
/// Scroll depth at which the back-to-top button appears, in px.
const BACK_TO_TOP_THRESHOLD: f64 = 500.0;

const BACK_TO_TOP_STYLE: &str = "
    position: fixed;
    bottom: 30px;
    right: 30px;
    width: 50px;
    height: 50px;
    background: var(--primary-color);
    color: white;
    border: none;
    border-radius: 50%;
    cursor: pointer;
    display: none;
    align-items: center;
    justify-content: center;
    z-index: 1000;
    box-shadow: 0 3px 10px rgba(0,0,0,0.2);
    transition: all 0.3s;
";

/// Scroll an element into view, leaving room for the fixed header.
/// Unknown ids scroll nowhere.
#[wasm_bindgen(js_name = smoothScroll)]
pub fn smooth_scroll(element_id: String) {
    let Some(el) = dom::by_id(&element_id) else {
        return;
    };
    let Some(target) = el.dyn_ref::<web_sys::HtmlElement>() else {
        return;
    };
    scroll_window_to(f64::from(target.offset_top()) - HEADER_OFFSET);
}

/// Toggle the collapsed navbar on small screens.
#[wasm_bindgen(js_name = toggleMobileMenu)]
pub fn toggle_mobile_menu() {
    if let Some(navbar) = dom::query(".navbar-collapse") {
        let _ = navbar.class_list().toggle("show");
    }
}

/// Mount the back-to-top button and keep its visibility in step with
/// the scroll position. A page that already ships one in its markup is
/// left alone.
pub fn setup_back_to_top() {
    if dom::query(".back-to-top").is_some() {
        return;
    }

    let button = dom::create_element("button");
    button.set_class_name("back-to-top");
    dom::set_inner_html(&button, r#"<i class="fas fa-chevron-up"></i>"#);
    let _ = button.set_attribute("style", BACK_TO_TOP_STYLE);

    let cb = Closure::wrap(Box::new(move |_: web_sys::MouseEvent| {
        scroll_window_to(0.0);
    }) as Box<dyn FnMut(_)>);
    button
        .add_event_listener_with_callback("click", cb.as_ref().unchecked_ref())
        .unwrap();
    cb.forget();

    if let Some(body) = dom::document().body() {
        let _ = body.append_child(&button);
    }

    let cb = Closure::wrap(Box::new(move |_: web_sys::Event| {
        let deep = dom::window().scroll_y().unwrap_or(0.0) > BACK_TO_TOP_THRESHOLD;
        dom::set_display(&button, if deep { "flex" } else { "none" });
    }) as Box<dyn FnMut(_)>);
    dom::window()
        .add_event_listener_with_callback("scroll", cb.as_ref().unchecked_ref())
        .unwrap();
    cb.forget();
}

fn scroll_window_to(top: f64) {
    let opts = ScrollToOptions::new();
    opts.set_top(top);
    opts.set_behavior(ScrollBehavior::Smooth);
    dom::window().scroll_to_with_scroll_to_options(&opts);
}
