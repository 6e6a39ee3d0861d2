//! localStorage binding for the shared [`StorageSlot`] trait.

use sk_storage::StorageSlot;

fn area() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok()?
}

/// The page's localStorage area. Zero-sized; every call re-resolves the
/// backend, so a profile with storage disabled degrades to the no-op
/// behavior instead of failing.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalSlot;

impl StorageSlot for LocalSlot {
    fn get(&self, key: &str) -> Option<String> {
        match area() {
            Some(s) => s.get_item(key).ok()?,
            None => {
                gloo_console::debug!("localStorage unavailable; reading nothing");
                None
            }
        }
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(s) = area() {
            let _ = s.set_item(key, value);
        }
    }

    fn remove(&self, key: &str) {
        if let Some(s) = area() {
            let _ = s.remove_item(key);
        }
    }
}
