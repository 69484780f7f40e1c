use crate::{Actor, ActorKey};

/// Lookup into the world's set of live actors.
///
/// Implemented by the host simulation. Returns `None` for actors that have
/// been removed or unloaded.
pub trait ActorRegistry: Send + Sync {
    fn actor(&self, key: &ActorKey) -> Option<Actor>;
}
