use pocket_shared::{Actor, ObserverKey};

/// Picks the observer, if any, that should be sent a terminal snapshot
/// directly this cycle.
///
/// `carrier` must already be resolved. Observers with an interactive session
/// are skipped, the session's own broadcast covers them.
pub(crate) fn snapshot_target(
    changed: bool,
    force: bool,
    carrier: Option<&Actor>,
    is_interacting: impl Fn(&ObserverKey) -> bool,
) -> Option<ObserverKey> {
    if !changed && !force {
        return None;
    }
    let observer = carrier?.observer()?;
    if is_interacting(&observer) {
        return None;
    }
    Some(observer)
}
