use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

/// Snapshot of the winner slot at one point in time.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WinnerSlot {
    /// Administrator-assigned winner; `None` until set.
    pub value: Option<u32>,
    /// Whether the fixed winner has already been handed to a client.
    pub consumed: bool,
}

/// Process-wide winner state, explicitly owned and shared via `Arc`
/// rather than living in a global.
///
/// At most one fixed winner exists at a time; setting is first-write-wins
/// and `consumed` only moves false to true outside of `reset`.
#[derive(Debug, Default)]
pub struct WinnerStore {
    slot: RwLock<WinnerSlot>,
}

impl WinnerStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshot(&self) -> WinnerSlot {
        self.slot.read().clone()
    }

    /// Stores `number` only if no winner is set yet. Returns whether the
    /// write took effect; on `false` the existing winner is untouched.
    pub fn set_if_absent(&self, number: u32) -> bool {
        let mut slot = self.slot.write();
        if slot.value.is_some() {
            return false;
        }
        slot.value = Some(number);
        tracing::info!("Fixed winner set to {}", number);
        true
    }

    /// Idempotently marks the fixed winner as handed out.
    pub fn mark_consumed(&self) {
        self.slot.write().consumed = true;
    }

    /// Returns the fixed winner iff it is set and unconsumed, flipping
    /// `consumed` under the same write guard so concurrent draws hand it
    /// out at most once.
    pub fn consume(&self) -> Option<u32> {
        let mut slot = self.slot.write();
        if slot.consumed {
            return None;
        }
        let value = slot.value?;
        slot.consumed = true;
        Some(value)
    }

    /// Clears the slot back to its initial state.
    pub fn reset(&self) {
        let mut slot = self.slot.write();
        *slot = WinnerSlot::default();
        tracing::info!("Winner slot reset");
    }
}
