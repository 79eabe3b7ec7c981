use super::Slot;
use crate::error::Result;

/// Abstract interface for raw slot I/O.
///
/// This trait handles the "how" of storage (filesystem vs memory), while
/// `BookmarkStore` handles the "what" (state, invariants, when to write).
/// All methods take `&self`; the process is single-threaded and backends that
/// need mutation use interior mutability.
pub trait SlotBackend {
    /// Read a slot's raw text. `Ok(None)` when the slot has never been written.
    fn read_slot(&self, slot: Slot) -> Result<Option<String>>;

    /// Replace a slot's text.
    /// MUST reject text over the backend's byte limit with `QuotaExceeded`,
    /// and MUST NOT leave a partially written slot behind.
    fn write_slot(&self, slot: Slot, text: &str) -> Result<()>;

    /// Human-readable location of a slot, for diagnostics.
    fn slot_location(&self, slot: Slot) -> String;
}
