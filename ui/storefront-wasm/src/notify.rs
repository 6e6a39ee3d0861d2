//! Toast notifications.
//!
//! State lives in a [`NoticeBoard`]; the DOM widgets mirror it. The
//! close button and the auto-dismiss timer share one removal path, so
//! whichever runs second finds nothing left to do.

use std::cell::RefCell;
use std::collections::HashMap;

use gloo_timers::callback::Timeout;
use sk_notify::{NOTICE_TTL_MS, NoticeBoard, NoticeId, Severity};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::Element;

use crate::dom;

const STYLE_ID: &str = "notification-styles";

thread_local! {
    static BOARD: RefCell<NoticeBoard> = RefCell::new(NoticeBoard::new());
    static WIDGETS: RefCell<HashMap<NoticeId, Element>> = RefCell::new(HashMap::new());
}

/// Show a toast. The second argument is the severity tag from markup
/// (`"success"`, `"error"`, ...); anything unrecognised renders as info.
#[wasm_bindgen(js_name = showNotification)]
pub fn show_notification(message: String, kind: Option<String>) {
    let severity = kind.map(|k| Severity::parse(&k)).unwrap_or_default();
    show(&message, severity);
}

/// Post a notice and mount its widget on the page.
pub fn show(message: &str, severity: Severity) {
    ensure_styles();

    let now = now_ms();
    // Timers die when the page sits in the back-forward cache; sweep
    // anything overdue before stacking a new toast on top of it.
    for stale in BOARD.with(|b| b.borrow_mut().expire_due(now)) {
        remove_widget(stale);
    }

    let id = BOARD.with(|b| b.borrow_mut().post(message, severity, now));
    let widget = build_widget(message, severity, id);
    if let Some(body) = dom::document().body() {
        let _ = body.append_child(&widget);
    }
    WIDGETS.with(|w| w.borrow_mut().insert(id, widget));

    Timeout::new(NOTICE_TTL_MS as u32, move || dismiss(id)).forget();
}

/// Take a toast down. Idempotent: the timer always fires, and a toast
/// already closed by hand is simply no longer on the board.
pub fn dismiss(id: NoticeId) {
    if BOARD.with(|b| b.borrow_mut().dismiss(id)) {
        remove_widget(id);
    }
}

fn remove_widget(id: NoticeId) {
    if let Some(widget) = WIDGETS.with(|w| w.borrow_mut().remove(&id)) {
        widget.remove();
    }
}

fn now_ms() -> u64 {
    js_sys::Date::now() as u64
}

fn build_widget(message: &str, severity: Severity, id: NoticeId) -> Element {
    let widget = dom::create_element("div");
    widget.set_class_name(&format!("notification {}", severity.css_class()));

    let content = dom::create_element("div");
    content.set_class_name("notification-content");
    let icon = dom::create_element("i");
    icon.set_class_name(&format!("fas {}", severity.icon()));
    let text = dom::create_element("span");
    dom::set_text(&text, message);
    let _ = content.append_child(&icon);
    let _ = content.append_child(&text);

    let close = dom::create_element("button");
    close.set_class_name("notification-close");
    dom::set_inner_html(&close, r#"<i class="fas fa-times"></i>"#);
    let cb = Closure::wrap(Box::new(move |_: web_sys::MouseEvent| {
        dismiss(id);
    }) as Box<dyn FnMut(_)>);
    close
        .add_event_listener_with_callback("click", cb.as_ref().unchecked_ref())
        .unwrap();
    cb.forget();

    let _ = widget.append_child(&content);
    let _ = widget.append_child(&close);
    widget
}

/// Inject the toast stylesheet once per page.
fn ensure_styles() {
    if dom::by_id(STYLE_ID).is_some() {
        return;
    }
    let style = dom::create_element("style");
    style.set_id(STYLE_ID);
    style.set_text_content(Some(TOAST_CSS));
    if let Some(head) = dom::document().head() {
        let _ = head.append_child(&style);
    }
}

const TOAST_CSS: &str = "
    .notification {
        position: fixed;
        top: 100px;
        right: 20px;
        background: white;
        border-left: 4px solid #3498db;
        padding: 15px 20px;
        border-radius: 5px;
        box-shadow: 0 5px 15px rgba(0,0,0,0.1);
        z-index: 9999;
        display: flex;
        align-items: center;
        justify-content: space-between;
        min-width: 300px;
        animation: slideIn 0.3s ease;
    }

    .notification-success {
        border-left-color: #27ae60;
    }

    .notification-error {
        border-left-color: #e74c3c;
    }

    .notification-warning {
        border-left-color: #f39c12;
    }

    .notification-content {
        display: flex;
        align-items: center;
        gap: 10px;
    }

    .notification-close {
        background: none;
        border: none;
        color: #666;
        cursor: pointer;
        padding: 0;
        margin-left: 10px;
    }

    @keyframes slideIn {
        from { transform: translateX(100%); opacity: 0; }
        to { transform: translateX(0); opacity: 1; }
    }
";
