/// A small copyable handle that can be converted to and from a raw u64.
///
/// Handles never own the thing they point at. A handle may outlive its
/// target, so every use must go back through the owning registry.
pub trait HandleKey: Copy + Eq + std::hash::Hash {
    fn to_u64(&self) -> u64;
    fn from_u64(value: u64) -> Self;
}

// ActorKey
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug)]
pub struct ActorKey(u64);

impl HandleKey for ActorKey {
    fn to_u64(&self) -> u64 {
        self.0
    }

    fn from_u64(value: u64) -> Self {
        ActorKey(value)
    }
}

// ObserverKey
/// Identifies a live network connection able to receive terminal snapshots.
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug)]
pub struct ObserverKey(u64);

impl HandleKey for ObserverKey {
    fn to_u64(&self) -> u64 {
        self.0
    }

    fn from_u64(value: u64) -> Self {
        ObserverKey(value)
    }
}

// WorldKey
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug)]
pub struct WorldKey(u64);

impl HandleKey for WorldKey {
    fn to_u64(&self) -> u64 {
        self.0
    }

    fn from_u64(value: u64) -> Self {
        WorldKey(value)
    }
}
