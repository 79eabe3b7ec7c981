use super::backend::SlotBackend;
use super::Slot;
use crate::config::DEFAULT_MAX_SLOT_BYTES;
use crate::error::{DashmarkError, Result};
use std::cell::RefCell;
use std::collections::HashMap;

/// In-memory slot backend for testing.
///
/// Uses `RefCell` for interior mutability since dashmark is single-threaded.
/// This avoids the overhead of `RwLock` while still allowing the
/// `SlotBackend` trait to use `&self` for all methods.
pub struct MemBackend {
    slots: RefCell<HashMap<Slot, String>>,
    writes: RefCell<HashMap<Slot, usize>>,
    max_slot_bytes: usize,
    simulate_write_error: RefCell<bool>,
}

impl Default for MemBackend {
    fn default() -> Self {
        Self {
            slots: RefCell::new(HashMap::new()),
            writes: RefCell::new(HashMap::new()),
            max_slot_bytes: DEFAULT_MAX_SLOT_BYTES,
            simulate_write_error: RefCell::new(false),
        }
    }
}

impl MemBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_slot_bytes(mut self, limit: usize) -> Self {
        self.max_slot_bytes = limit;
        self
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        *self.simulate_write_error.borrow_mut() = simulate;
    }

    /// Test helper to seed a slot without going through a store.
    pub fn put(&self, slot: Slot, text: &str) {
        self.slots.borrow_mut().insert(slot, text.to_string());
    }

    /// Number of successful writes to a slot.
    pub fn write_count(&self, slot: Slot) -> usize {
        self.writes.borrow().get(&slot).copied().unwrap_or(0)
    }
}

impl SlotBackend for MemBackend {
    fn read_slot(&self, slot: Slot) -> Result<Option<String>> {
        Ok(self.slots.borrow().get(&slot).cloned())
    }

    fn write_slot(&self, slot: Slot, text: &str) -> Result<()> {
        if *self.simulate_write_error.borrow() {
            return Err(DashmarkError::Store("Simulated write error".to_string()));
        }
        if text.len() > self.max_slot_bytes {
            return Err(DashmarkError::QuotaExceeded {
                slot,
                size: text.len(),
                limit: self.max_slot_bytes,
            });
        }
        self.slots.borrow_mut().insert(slot, text.to_string());
        *self.writes.borrow_mut().entry(slot).or_insert(0) += 1;
        Ok(())
    }

    fn slot_location(&self, slot: Slot) -> String {
        format!("memory://{}", slot)
    }
}
