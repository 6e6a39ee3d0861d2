//! One-tap contact launchers for the business channels.

use wasm_bindgen::prelude::*;

use crate::dom;

/// WhatsApp number in international format, no `+` or separators.
const WHATSAPP_NUMBER: &str = "923008001122";
const DEFAULT_WHATSAPP_MESSAGE: &str =
    "Hello Vantage Security, I'm interested in your security products.";
const PHONE_HREF: &str = "tel:0213334455";
const EMAIL_HREF: &str = "mailto:info@vantagesecurity.pk?subject=Inquiry%20from%20Website";

/// Open a WhatsApp chat in a new tab. An empty or missing message
/// falls back to the standard greeting.
#[wasm_bindgen(js_name = contactViaWhatsApp)]
pub fn contact_via_whatsapp(message: Option<String>) {
    let message = message
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| DEFAULT_WHATSAPP_MESSAGE.to_string());
    let url = format!(
        "https://wa.me/{}?text={}",
        WHATSAPP_NUMBER,
        js_sys::encode_uri_component(&message)
    );
    let _ = dom::window().open_with_url_and_target(&url, "_blank");
}

/// Hand the phone number to the device dialer.
#[wasm_bindgen(js_name = callBusiness)]
pub fn call_business() {
    let _ = dom::window().location().set_href(PHONE_HREF);
}

/// Open the visitor's mail client with the inquiry subject prefilled.
#[wasm_bindgen(js_name = emailBusiness)]
pub fn email_business() {
    let _ = dom::window().location().set_href(EMAIL_HREF);
}
