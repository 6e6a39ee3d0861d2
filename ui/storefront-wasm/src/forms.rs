//! Form validation wiring: reads required fields, runs the shared
//! rules and paints the result inline.

use sk_forms::{FieldKind, validate_value};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};

use crate::dom;

const ERROR_COLOR: &str = "#e74c3c";
const SUCCESS_COLOR: &str = "#27ae60";
const ERROR_CLASS: &str = "error-message";

/// Validate every `[required]` field of the form with the given id and
/// annotate each one in place. Returns whether the whole form passed;
/// a missing form or one with no required fields passes vacuously.
#[wasm_bindgen(js_name = validateForm)]
pub fn validate_form(form_id: String) -> bool {
    let Some(form) = dom::by_id(&form_id) else {
        return true;
    };

    let mut all_valid = true;
    for field in dom::query_all_within(&form, "[required]") {
        let (kind, value) = kind_and_value(&field);
        match validate_value(kind, &value) {
            Ok(()) => mark_valid(&field),
            Err(violation) => {
                mark_invalid(&field, &violation.to_string());
                all_valid = false;
            }
        }
    }
    all_valid
}

/// Figure out which rule applies and pull the current value. Only
/// `<input>` elements carry a distinguishing `type`; textareas and
/// selects just get the required check.
fn kind_and_value(field: &Element) -> (FieldKind, String) {
    if let Some(input) = field.dyn_ref::<HtmlInputElement>() {
        (FieldKind::from_input_type(&input.type_()), input.value())
    } else if let Some(area) = field.dyn_ref::<HtmlTextAreaElement>() {
        (FieldKind::Text, area.value())
    } else if let Some(select) = field.dyn_ref::<HtmlSelectElement>() {
        (FieldKind::Text, select.value())
    } else {
        (FieldKind::Text, String::new())
    }
}

fn mark_invalid(field: &Element, message: &str) {
    dom::set_style(field, "border-color", ERROR_COLOR);
    remove_error(field);

    let error = dom::create_element("div");
    error.set_class_name(ERROR_CLASS);
    dom::set_style(&error, "color", ERROR_COLOR);
    dom::set_style(&error, "font-size", "12px");
    dom::set_style(&error, "margin-top", "5px");
    dom::set_text(&error, message);
    let _ = field.insert_adjacent_element("afterend", &error);
}

fn mark_valid(field: &Element) {
    dom::set_style(field, "border-color", SUCCESS_COLOR);
    remove_error(field);
}

/// Drop the field's current error annotation, if it has one.
fn remove_error(field: &Element) {
    if let Some(parent) = field.parent_element() {
        if let Ok(Some(prior)) = parent.query_selector(&format!(".{ERROR_CLASS}")) {
            prior.remove();
        }
    }
}
