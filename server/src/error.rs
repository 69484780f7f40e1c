use thiserror::Error;

/// Invariant violations raised by a pocket device.
///
/// None of these are expected during normal operation. The non-`try_`
/// entry points panic with the same message instead of returning them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PocketError {
    /// A mutation needing the backing item ran before any item was bound
    #[error("Pocket computer {instance_id} has no backing item bound")]
    NoBackingItem { instance_id: u64 },

    /// A thread panicked while holding the device's state lock
    #[error("Pocket computer {instance_id} state lock poisoned")]
    StatePoisoned { instance_id: u64 },
}
