use super::StorageBackend;
use crate::error::{DaydoError, Result};
use std::cell::RefCell;
use std::collections::HashMap;

/// In-memory storage backend for testing.
///
/// Uses `RefCell` for interior mutability since daydo is single-threaded.
/// This avoids the overhead of `RwLock` while still allowing the
/// `StorageBackend` trait to use `&self` for all methods.
#[derive(Default)]
pub struct MemBackend {
    values: RefCell<HashMap<String, String>>,
    simulate_write_error: RefCell<bool>,
}

impl MemBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        *self.simulate_write_error.borrow_mut() = simulate;
    }

    /// Test helper: seed a raw value, bypassing the write-error switch.
    pub fn seed(&self, key: &str, value: &str) {
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }
}

impl StorageBackend for MemBackend {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        if *self.simulate_write_error.borrow() {
            return Err(DaydoError::Store("Simulated write error".to_string()));
        }
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_absent_key_is_none() {
        let backend = MemBackend::new();
        assert_eq!(backend.get("todo-tasks").unwrap(), None);
    }

    #[test]
    fn set_then_get() {
        let backend = MemBackend::new();
        backend.set("todo-last-date", "2024-05-01").unwrap();
        assert_eq!(
            backend.get("todo-last-date").unwrap(),
            Some("2024-05-01".to_string())
        );
    }

    #[test]
    fn simulated_write_error_fails_set_but_not_get() {
        let backend = MemBackend::new();
        backend.set("todo-user-name", "Ada").unwrap();

        backend.set_simulate_write_error(true);
        assert!(backend.set("todo-user-name", "Grace").is_err());

        // The previous value is still readable.
        assert_eq!(
            backend.get("todo-user-name").unwrap(),
            Some("Ada".to_string())
        );
    }
}
