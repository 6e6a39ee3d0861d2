use std::cell::RefCell;
use std::collections::HashMap;

use serde::de::DeserializeOwned;
use serde::Serialize;

/// A single string-keyed storage area (browser localStorage in production).
///
/// Implementations never raise: a backend that is missing, full, or
/// disabled reads as absent and swallows writes.
pub trait StorageSlot {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

impl<S: StorageSlot + ?Sized> StorageSlot for &S {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) {
        (**self).set(key, value);
    }

    fn remove(&self, key: &str) {
        (**self).remove(key);
    }
}

/// Storage that holds nothing and accepts nothing. Stands in for a
/// browser profile with storage disabled.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopStore;

impl StorageSlot for NoopStore {
    fn get(&self, _key: &str) -> Option<String> {
        None
    }

    fn set(&self, _key: &str, _value: &str) {}

    fn remove(&self, _key: &str) {}
}

/// In-memory storage for tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StorageSlot for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.inner.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.inner.borrow_mut().insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.inner.borrow_mut().remove(key);
    }
}

/// Read a JSON value from a slot. An absent key or a value that no
/// longer parses both come back as `T::default()`; stale garbage is
/// never an error.
pub fn read_json<S, T>(slot: &S, key: &str) -> T
where
    S: StorageSlot + ?Sized,
    T: DeserializeOwned + Default,
{
    slot.get(key)
        .and_then(|raw| serde_json::from_str(&raw).ok())
        .unwrap_or_default()
}

/// Serialize a value into a slot. Serialization failure leaves the
/// slot untouched.
pub fn write_json<S, T>(slot: &S, key: &str, value: &T)
where
    S: StorageSlot + ?Sized,
    T: Serialize,
{
    if let Ok(raw) = serde_json::to_string(value) {
        slot.set(key, &raw);
    }
}
