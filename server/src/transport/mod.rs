use thiserror::Error;

use pocket_shared::{ObserverKey, TerminalSnapshot};

cfg_if! {
    if #[cfg(feature = "transport_channel")] {
        mod channel;
        pub use channel::{SnapshotChannel, SnapshotReceiver};
    }
}

/// The transport refused a snapshot
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Transport could not accept snapshot")]
pub struct SendError;

/// The transport has been shut down
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Transport closed")]
pub struct RecvError;

/// Hands terminal snapshots to the network layer.
///
/// Delivery is best-effort. Implementations must not block.
pub trait SnapshotSender: Send + Sync {
    fn send(&self, observer: &ObserverKey, snapshot: &TerminalSnapshot) -> Result<(), SendError>;
}
